pub mod dashboard;
pub mod gui;
pub mod logging;
pub mod settings;
pub mod sources;
