pub mod config;
pub mod database;
pub mod mailer;
pub mod reminder;
pub mod renderer;
