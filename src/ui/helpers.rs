// src/ui/helpers.rs
use egui::{Button, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height))).clicked()
}

/// Botón pequeño con icono y tooltip
pub fn icon_button(ui: &mut Ui, icon: &str, tooltip: &str, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(icon))
        .on_hover_text(tooltip)
        .clicked()
}
