use super::*;
use crate::error::EditorError;
use log::{info, warn};

impl QuizEditorApp {
    // ----------- NAVEGACIÓN -----------

    pub fn open_quiz(&mut self, name: &str) {
        self.message.clear();
        match QuizEditor::load(&*self.store, name) {
            Ok(editor) => {
                self.settings.last_quiz = Some(name.to_string());
                self.screen = Screen::Editor(editor);
            }
            Err(EditorError::NotFound(name)) => {
                self.settings.last_quiz = None;
                self.screen = Screen::NotFound(name);
            }
            Err(e) => {
                warn!("no se pudo abrir '{name}': {e}");
                self.back_to_select();
                self.message = format!("⚠ Could not read quizzes: {e}");
            }
        }
    }

    /// Reabre el quiz de la última sesión sólo si sigue existiendo
    pub fn restore_last_quiz(&mut self) {
        let Some(name) = self.settings.last_quiz.clone() else {
            return;
        };
        match self.store.get(&name) {
            Ok(Some(_)) => self.open_quiz(&name),
            Ok(None) => {
                info!("el último quiz '{name}' ya no existe");
                self.settings.last_quiz = None;
            }
            Err(e) => {
                warn!("no se pudo comprobar el último quiz: {e}");
                self.message = format!("⚠ Could not read quizzes: {e}");
            }
        }
    }

    pub fn back_to_select(&mut self) {
        self.screen = Screen::QuizSelect;
        self.message.clear();
        self.settings.last_quiz = None;
        self.refresh_quiz_list();
    }

    pub fn refresh_quiz_list(&mut self) {
        match self.quiz_infos() {
            Ok(list) => self.quiz_list = list,
            Err(e) => {
                warn!("no se pudo listar los quizzes: {e}");
                self.quiz_list.clear();
                self.message = format!("⚠ Could not read quizzes: {e}");
            }
        }
    }

    // ----------- DIÁLOGOS -----------

    pub fn edit_question(&mut self, index: usize) {
        let result = match self.editor_mut() {
            Some(editor) => editor.start_edit(index),
            None => return,
        };
        self.report(result, None);
    }

    pub fn add_question(&mut self) {
        let result = match self.editor_mut() {
            Some(editor) => editor.start_add(),
            None => return,
        };
        self.report(result, None);
    }

    pub fn delete_question(&mut self, index: usize) {
        let result = match self.editor_mut() {
            Some(editor) => editor.request_delete(index),
            None => return,
        };
        self.report(result, None);
    }

    pub fn save_draft(&mut self) {
        let result = match &mut self.screen {
            Screen::Editor(editor) => editor.save(&mut *self.store),
            _ => return,
        };
        self.report(result, Some("✅ Question saved"));
    }

    pub fn confirm_delete(&mut self) {
        let result = match &mut self.screen {
            Screen::Editor(editor) => editor.confirm_delete(&mut *self.store),
            _ => return,
        };
        self.report(result, Some("🗑 Question deleted"));
    }

    pub fn cancel_dialog(&mut self) {
        if let Some(editor) = self.editor_mut() {
            editor.cancel();
        }
    }

    fn report(&mut self, result: Result<(), EditorError>, ok: Option<&str>) {
        match result {
            Ok(()) => {
                if let Some(msg) = ok {
                    self.message = msg.to_string();
                }
            }
            Err(e) => self.message = format!("⚠ {e}"),
        }
    }
}
