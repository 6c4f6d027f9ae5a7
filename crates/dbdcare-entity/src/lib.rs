pub mod access_tokens;
pub mod activity_log;
pub mod checklist_item;
pub mod comment;
pub mod file_type;
pub mod leaflet;
pub mod material;
pub mod poster;
pub mod quiz_question;
pub mod quiz_response;
pub mod user;
pub mod video;
