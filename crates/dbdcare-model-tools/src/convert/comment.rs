use crate::convert::FromDbModel;
use dbdcare_entity::comment::Model;
use dbdcare_model::comment::Comment;

impl FromDbModel<Model> for Comment {
    fn from_db_model(model: Model) -> Self {
        Self {
            id: model.id,
            material_id: model.material_id,
            username: model.username,
            content: model.content,
            created_at: model.created_at,
        }
    }
}
