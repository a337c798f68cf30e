use crate::QuizEditorApp;
use crate::ui::helpers::icon_button;
use crate::ui::layout::{chip, status_message};
use egui::{CentralPanel, Frame, RichText, ScrollArea};

enum ListIntent {
    Back,
    Add,
    Edit(usize),
    Delete(usize),
}

pub fn ui_question_list(app: &mut QuizEditorApp, ctx: &egui::Context) {
    let Some(info) = app.current_quiz_info() else {
        return;
    };
    let rows = app.question_rows();
    // Mientras hay un diálogo abierto la lista no acepta clicks
    let idle = app.editor().is_some_and(|e| e.state().is_idle());
    let mut intent: Option<ListIntent> = None;

    egui::TopBottomPanel::top("quiz_header").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.add_enabled(idle, egui::Button::new("⬅ Back")).clicked() {
                intent = Some(ListIntent::Back);
            }
            ui.heading(format!("Edit Quiz: {}", info.name));
            chip(ui, &info.topic);
            chip(ui, &info.difficulty);
        });
    });

    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            if rows.is_empty() {
                ui.label("This quiz has no questions yet.");
            }

            for row in &rows {
                Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(row.title()).strong());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if icon_button(ui, "🗑", "Delete question", idle) {
                                intent = Some(ListIntent::Delete(row.idx));
                            }
                            if icon_button(ui, "✏", "Edit question", idle) {
                                intent = Some(ListIntent::Edit(row.idx));
                            }
                        });
                    });
                    for i in 0..row.options.len() {
                        ui.label(row.option_label(i));
                    }
                    if row.correct.is_none() {
                        ui.small("⚠ The correct answer matches none of the options");
                    }
                });
                ui.add_space(6.0);
            }

            ui.add_space(12.0);
            if ui.add_enabled(idle, egui::Button::new("➕ Add question")).clicked() {
                intent = Some(ListIntent::Add);
            }
            status_message(ui, &app.message);
        });
    });

    match intent {
        Some(ListIntent::Back) => app.back_to_select(),
        Some(ListIntent::Add) => app.add_question(),
        Some(ListIntent::Edit(i)) => app.edit_question(i),
        Some(ListIntent::Delete(i)) => app.delete_question(i),
        None => {}
    }
}
