use crate::QuizEditorApp;
use crate::model::{EditTarget, EditorState};
use egui::{Align2, Button, Color32, TextEdit};

enum DialogAction {
    Save,
    Cancel,
}

pub fn ui_edit_dialog(app: &mut QuizEditorApp, ctx: &egui::Context) {
    let Some(editor) = app.editor_mut() else {
        return;
    };
    let title = match editor.state() {
        EditorState::Editing { target: EditTarget::New, .. } => "Add New Question",
        EditorState::Editing { .. } => "Edit Question",
        _ => return,
    };
    let Some(draft) = editor.draft_mut() else {
        return;
    };
    let mut action: Option<DialogAction> = None;

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .default_width(480.0)
        .show(ctx, |ui| {
            ui.label("Question");
            ui.add(TextEdit::singleline(&mut draft.prompt).desired_width(f32::INFINITY));
            ui.add_space(8.0);

            for i in 0..draft.options.len() {
                ui.horizontal(|ui| {
                    ui.add(
                        TextEdit::singleline(&mut draft.options[i])
                            .hint_text(format!("Option {}", i + 1))
                            .desired_width(380.0),
                    );
                    let selected = draft.selected == Some(i);
                    if ui
                        .selectable_label(selected, "✔")
                        .on_hover_text("Mark as correct answer")
                        .clicked()
                    {
                        draft.selected = Some(i);
                    }
                });
            }

            if draft.selected.is_none() {
                ui.colored_label(
                    Color32::YELLOW,
                    "⚠ The stored correct answer matches no option: pick one.",
                );
            }

            ui.add_space(8.0);
            let can_save = draft.can_save();
            ui.horizontal(|ui| {
                if ui.button("✖ Cancel").clicked() {
                    action = Some(DialogAction::Cancel);
                }
                if ui.add_enabled(can_save, Button::new("💾 Save")).clicked() {
                    action = Some(DialogAction::Save);
                }
            });
        });

    match action {
        Some(DialogAction::Save) => app.save_draft(),
        Some(DialogAction::Cancel) => app.cancel_dialog(),
        None => {}
    }
}
