use crate::QuizEditorApp;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::{centered_panel, status_message};

pub fn ui_quiz_select(app: &mut QuizEditorApp, ctx: &egui::Context) {
    let button_h = 36.0;
    let est_height = 120.0 + (button_h + 8.0) * app.quiz_list.len() as f32;
    let mut chosen: Option<String> = None;
    let mut reload = false;

    centered_panel(ctx, est_height, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("📝 Edit a quiz");
            ui.add_space(16.0);

            if app.quiz_list.is_empty() {
                ui.label("No quizzes yet.");
            }

            let width = ui.available_width();
            for info in &app.quiz_list {
                if big_list_button(ui, info.label(), width, button_h, true) {
                    chosen = Some(info.name.clone());
                }
                ui.add_space(8.0);
            }

            ui.add_space(8.0);
            if ui.button("🔄 Reload").clicked() {
                reload = true;
            }
            status_message(ui, &app.message);
        });
    });

    if let Some(name) = chosen {
        app.open_quiz(&name);
    } else if reload {
        app.message.clear();
        app.refresh_quiz_list();
    }
}
