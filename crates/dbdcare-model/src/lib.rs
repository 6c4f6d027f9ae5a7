pub mod activity;
pub mod analytics;
pub mod checklist;
pub mod comment;
pub mod document;
pub mod filter;
pub mod home;
pub mod login;
pub mod maintenance;
pub mod material;
pub mod quiz;
pub mod status;
pub mod user;
pub mod video;
