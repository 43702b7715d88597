use super::{text, DashboardContext, Widget, WidgetAction};
use eframe::egui;

/// Time, date and greeting.
#[derive(Default)]
pub struct ClockWidget;

impl Widget for ClockWidget {
    fn render(&mut self, ui: &mut egui::Ui, ctx: &DashboardContext<'_>) -> Option<WidgetAction> {
        if let Some(face) = &ctx.slots.clock {
            ui.label(text(&face.time, ctx.fonts.large));
            ui.label(text(&face.date, ctx.fonts.large));
        }
        ui.add_space(10.0);
        ui.label(text(&ctx.slots.greeting, ctx.fonts.medium));
        None
    }
}
