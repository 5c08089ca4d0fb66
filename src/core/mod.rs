pub mod app;
pub mod config;
pub mod highlights;
pub mod tips;
