pub mod app;
pub mod constants;
pub mod logging;
pub mod settings;
