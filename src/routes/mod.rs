pub mod admin;
pub mod application;
pub mod auth;
pub mod blog;
pub mod contact;
pub mod health;
pub mod job;
