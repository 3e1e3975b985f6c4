pub mod application;
pub mod blog;
pub mod contact_message;
pub mod job;
pub mod user;
