use crate::QuizEditorApp;
use crate::app::Screen;
use crate::ui::layout::centered_panel;
use egui::{Color32, RichText};

pub fn ui_not_found(app: &mut QuizEditorApp, ctx: &egui::Context) {
    let name = match &app.screen {
        Screen::NotFound(name) => name.clone(),
        _ => return,
    };
    let mut back = false;

    centered_panel(ctx, 160.0, 400.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Quiz not found").heading().color(Color32::LIGHT_RED));
            ui.add_space(8.0);
            ui.label(format!("There is no quiz named \"{name}\"."));
            ui.add_space(20.0);
            back = ui.button("⬅ Back to quizzes").clicked();
        });
    });

    if back {
        app.back_to_select();
    }
}
