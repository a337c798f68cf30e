pub mod app;
pub mod config;
pub mod data;
pub mod editor;
pub mod error;
pub mod model;
pub mod store;
pub mod ui;
pub mod view_models;

pub use app::QuizEditorApp;
pub use editor::QuizEditor;
