use crate::editor::QuizEditor;
use crate::store::QuizStore;
use serde::{Deserialize, Serialize};

// Submódulos
pub mod actions;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{QuestionRow, QuizInfo};

/// Pantalla actual. El estado de los diálogos vive dentro del editor.
#[derive(Debug)]
pub enum Screen {
    QuizSelect,
    Editor(QuizEditor),
    NotFound(String), // terminal: sólo se puede volver atrás
}

/// Lo que se guarda entre sesiones vía eframe
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AppSettings {
    pub last_quiz: Option<String>,
}

pub struct QuizEditorApp {
    pub store: Box<dyn QuizStore>,
    pub screen: Screen,
    pub settings: AppSettings,
    pub quiz_list: Vec<QuizInfo>,
    pub message: String,
}

impl QuizEditorApp {
    pub fn new(store: Box<dyn QuizStore>, settings: AppSettings, initial_quiz: Option<String>) -> Self {
        let mut app = Self {
            store,
            screen: Screen::QuizSelect,
            settings,
            quiz_list: Vec::new(),
            message: String::new(),
        };

        // Un quiz pedido explícitamente manda sobre el de la última sesión
        match initial_quiz {
            Some(name) => app.open_quiz(&name),
            None => app.restore_last_quiz(),
        }
        if matches!(app.screen, Screen::QuizSelect) {
            app.refresh_quiz_list();
        }

        app
    }

    pub fn editor(&self) -> Option<&QuizEditor> {
        match &self.screen {
            Screen::Editor(editor) => Some(editor),
            _ => None,
        }
    }

    pub fn editor_mut(&mut self) -> Option<&mut QuizEditor> {
        match &mut self.screen {
            Screen::Editor(editor) => Some(editor),
            _ => None,
        }
    }
}
