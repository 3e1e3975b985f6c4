pub mod application_service;
pub mod auth_service;
pub mod blog_service;
pub mod contact_service;
pub mod job_service;
