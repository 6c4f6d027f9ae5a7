pub(crate) mod maintenance;
pub(crate) mod user;
