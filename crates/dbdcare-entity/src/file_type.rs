use sea_orm::entity::prelude::*;

/// Kind of a downloadable file, shared by posters and leaflets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum FileType {
    #[sea_orm(string_value = "image")]
    Image,
    #[sea_orm(string_value = "pdf")]
    Pdf,
}
