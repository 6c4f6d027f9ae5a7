pub mod analytics;
pub mod checklist;
pub mod filter;
pub mod media;
pub mod password;
pub mod quiz;
pub mod status;
pub mod validation;
