use crate::convert::{FromDbModel, FromModel};
use dbdcare_entity::activity_log::Action as ActionModel;
use dbdcare_entity::activity_log::Model;
use dbdcare_model::activity::{Action, Activity};

impl FromDbModel<ActionModel> for Action {
    fn from_db_model(model: ActionModel) -> Self {
        match model {
            ActionModel::PageVisit => Self::PageVisit,
            ActionModel::MaterialView => Self::MaterialView,
            ActionModel::VideoPlay => Self::VideoPlay,
            ActionModel::PosterDownload => Self::PosterDownload,
            ActionModel::QuizStart => Self::QuizStart,
            ActionModel::QuizComplete => Self::QuizComplete,
        }
    }
}

impl FromModel<Action> for ActionModel {
    fn from_model(model: Action) -> Self {
        match model {
            Action::PageVisit => Self::PageVisit,
            Action::MaterialView => Self::MaterialView,
            Action::VideoPlay => Self::VideoPlay,
            Action::PosterDownload => Self::PosterDownload,
            Action::QuizStart => Self::QuizStart,
            Action::QuizComplete => Self::QuizComplete,
        }
    }
}

impl FromDbModel<Model> for Activity {
    fn from_db_model(model: Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            action: FromDbModel::from_db_model(model.action),
            target: model.target,
            target_id: model.target_id,
            metadata: model.metadata,
            created_at: model.created_at,
        }
    }
}
