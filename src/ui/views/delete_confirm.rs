use crate::QuizEditorApp;
use crate::model::EditorState;
use egui::{Align2, Button, Color32};

pub fn ui_delete_confirm(app: &mut QuizEditorApp, ctx: &egui::Context) {
    let index = match app.editor().map(|e| e.state()) {
        Some(EditorState::ConfirmDelete { index }) => *index,
        _ => return,
    };
    let prompt = app
        .editor()
        .and_then(|e| e.questions().get(index))
        .map(|q| q.question.clone())
        .unwrap_or_default();

    let mut confirm = false;
    let mut cancel = false;

    egui::Window::new("Confirm Delete")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Are you sure you want to delete this question?");
            ui.label(egui::RichText::new(&prompt).italics());
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                cancel = ui.button("Cancel").clicked();
                confirm = ui
                    .add(Button::new("Delete").fill(Color32::DARK_RED))
                    .clicked();
            });
        });

    if confirm {
        app.confirm_delete();
    } else if cancel {
        app.cancel_dialog();
    }
}
