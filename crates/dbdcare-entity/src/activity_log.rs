use sea_orm::entity::prelude::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum Action {
    #[sea_orm(string_value = "page_visit")]
    PageVisit,
    #[sea_orm(string_value = "material_view")]
    MaterialView,
    #[sea_orm(string_value = "video_play")]
    VideoPlay,
    #[sea_orm(string_value = "poster_download")]
    PosterDownload,
    #[sea_orm(string_value = "quiz_start")]
    QuizStart,
    #[sea_orm(string_value = "quiz_complete")]
    QuizComplete,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "activity_log")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub username: String,
    pub action: Action,
    pub target: String,
    pub target_id: Option<String>,
    pub metadata: Option<Json>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
