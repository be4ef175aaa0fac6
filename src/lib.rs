pub mod loading;
pub mod ui;
