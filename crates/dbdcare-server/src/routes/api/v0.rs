pub(crate) mod activity;
pub(crate) mod admin;
pub(crate) mod checklist;
pub(crate) mod comments;
pub(crate) mod documents;
pub(crate) mod error;
pub(crate) mod home;
pub(crate) mod leaflets;
pub(crate) mod maintenance;
pub(crate) mod materials;
pub(crate) mod posters;
pub(crate) mod quiz;
pub(crate) mod status;
pub(crate) mod videos;
