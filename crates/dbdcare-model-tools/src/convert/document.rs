use crate::convert::{FromDbModel, FromModel, set_if_some};
use dbdcare_core::media::{drive_download_url, drive_preview_url, drive_thumbnail_url};
use dbdcare_entity::file_type::FileType as FileTypeModel;
use dbdcare_model::document::{Document, FileType, NewDocument, UpdateDocument};
use sea_orm::ActiveValue::{NotSet, Set};

impl FromDbModel<FileTypeModel> for FileType {
    fn from_db_model(model: FileTypeModel) -> Self {
        match model {
            FileTypeModel::Image => Self::Image,
            FileTypeModel::Pdf => Self::Pdf,
        }
    }
}

impl FromModel<FileType> for FileTypeModel {
    fn from_model(model: FileType) -> Self {
        match model {
            FileType::Image => Self::Image,
            FileType::Pdf => Self::Pdf,
        }
    }
}

// Posters and leaflets are separate tables with identical columns.
macro_rules! document_conversions {
    ($entity:ident) => {
        impl FromDbModel<dbdcare_entity::$entity::Model> for Document {
            fn from_db_model(model: dbdcare_entity::$entity::Model) -> Self {
                let file_type = FileType::from_db_model(model.file_type);
                Self {
                    preview_url: drive_preview_url(&model.file_url, file_type),
                    thumbnail_url: drive_thumbnail_url(&model.file_url),
                    download_url: drive_download_url(&model.file_url),
                    id: model.id,
                    title: model.title,
                    description: model.description,
                    category: model.category,
                    file_url: model.file_url,
                    file_type,
                    downloads: model.downloads,
                    created_at: model.created_at,
                }
            }
        }

        impl FromModel<NewDocument> for dbdcare_entity::$entity::ActiveModel {
            fn from_model(model: NewDocument) -> Self {
                Self {
                    id: NotSet,
                    title: Set(model.title),
                    description: Set(model.description),
                    category: Set(model.category),
                    file_url: Set(model.file_url),
                    file_type: Set(FileTypeModel::from_model(model.file_type)),
                    downloads: NotSet,
                    created_at: NotSet,
                }
            }
        }

        impl FromModel<UpdateDocument> for dbdcare_entity::$entity::ActiveModel {
            fn from_model(model: UpdateDocument) -> Self {
                Self {
                    id: NotSet,
                    title: set_if_some(model.title),
                    description: set_if_some(model.description),
                    category: set_if_some(model.category),
                    file_url: set_if_some(model.file_url),
                    file_type: set_if_some(model.file_type.map(FileTypeModel::from_model)),
                    downloads: NotSet,
                    created_at: NotSet,
                }
            }
        }
    };
}

document_conversions!(poster);
document_conversions!(leaflet);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::IntoModel;

    #[test]
    fn test_drive_urls_are_derived() {
        let model = dbdcare_entity::poster::Model {
            id: uuid::Uuid::new_v4(),
            title: "Poster".to_owned(),
            description: String::new(),
            category: "Gejala".to_owned(),
            file_url: "https://drive.google.com/file/d/abc123/view".to_owned(),
            file_type: FileTypeModel::Pdf,
            downloads: 3,
            created_at: chrono::NaiveDateTime::default(),
        };
        let document: Document = model.into_model();
        assert_eq!(document.file_type, FileType::Pdf);
        assert_eq!(document.preview_url, "https://drive.google.com/file/d/abc123/preview");
        assert_eq!(document.download_url, "https://drive.google.com/uc?export=download&id=abc123");
    }

    #[test]
    fn test_partial_update_leaves_fields_unset() {
        let active = dbdcare_entity::leaflet::ActiveModel::from_model(UpdateDocument {
            title: Some("Baru".to_owned()),
            ..Default::default()
        });
        assert_eq!(active.title, Set("Baru".to_owned()));
        assert!(active.file_url.is_not_set());
        assert!(active.file_type.is_not_set());
    }
}
