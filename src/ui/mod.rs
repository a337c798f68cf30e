mod helpers;
pub mod layout;
pub mod views;

use crate::app::{AppSettings, QuizEditorApp, Screen};
use crate::store::QuizStore;
use eframe::{APP_KEY, App, CreationContext, Frame, get_value, set_value};
use egui::Context;
use layout::bottom_panel;

impl QuizEditorApp {
    /// Arranque desde eframe: recupera los ajustes guardados de la sesión anterior
    pub fn from_creation_context(
        cc: &CreationContext<'_>,
        store: Box<dyn QuizStore>,
        initial_quiz: Option<String>,
    ) -> Self {
        let settings: AppSettings = cc
            .storage
            .and_then(|storage| get_value(storage, APP_KEY))
            .unwrap_or_default();
        Self::new(store, settings, initial_quiz)
    }
}

impl App for QuizEditorApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        match self.screen {
            Screen::QuizSelect => views::quiz_select::ui_quiz_select(self, ctx),
            Screen::Editor(_) => {
                views::question_list::ui_question_list(self, ctx);
                // Como mucho uno de los dos diálogos está abierto
                views::edit_dialog::ui_edit_dialog(self, ctx);
                views::delete_confirm::ui_delete_confirm(self, ctx);
            }
            Screen::NotFound(_) => views::not_found::ui_not_found(self, ctx),
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.settings);
    }
}
