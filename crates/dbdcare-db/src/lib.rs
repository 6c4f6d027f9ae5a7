pub mod access_tokens;
pub mod activity_log;
pub mod checklist;
pub mod comment;
pub mod downloadable;
pub mod material;
pub mod quiz;
pub mod quiz_response;
pub mod user;
pub mod util;
pub mod video;

pub use downloadable::{leaflet, poster};
pub use sea_orm;
