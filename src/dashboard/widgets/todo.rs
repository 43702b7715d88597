use super::{text, DashboardContext, Widget, WidgetAction};
use eframe::egui;

/// Current to-do items with a button opening the editor.
#[derive(Default)]
pub struct TodoWidget;

impl Widget for TodoWidget {
    fn render(&mut self, ui: &mut egui::Ui, ctx: &DashboardContext<'_>) -> Option<WidgetAction> {
        let mut action = None;
        ui.horizontal(|ui| {
            ui.label(text("Today's Tasks:", ctx.fonts.medium));
            let edit = egui::Button::new(
                egui::RichText::new("✎")
                    .size(ctx.fonts.small)
                    .color(egui::Color32::GRAY),
            )
            .frame(false);
            if ui.add(edit).on_hover_text("Edit (Ctrl+N)").clicked() {
                action = Some(WidgetAction::EditTodos);
            }
        });
        ui.add_space(10.0);
        for item in &ctx.slots.todo_items {
            ui.label(text(format!("• {item}"), ctx.fonts.small));
            ui.add_space(2.0);
        }
        action
    }
}
