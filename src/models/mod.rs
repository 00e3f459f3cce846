pub mod activity;
pub mod claims;
pub mod credentials;
pub mod envelope;
pub mod organisation;
pub mod project;
pub mod session;
pub mod task;
