use super::{text, DashboardContext, Widget, WidgetAction};
use eframe::egui;

#[derive(Default)]
pub struct QuotesWidget;

impl Widget for QuotesWidget {
    fn render(&mut self, ui: &mut egui::Ui, ctx: &DashboardContext<'_>) -> Option<WidgetAction> {
        ui.label(text("Motivational Quotes:", ctx.fonts.medium));
        if let Some(pair) = &ctx.slots.quotes {
            for line in pair.lines() {
                ui.add_space(5.0);
                ui.label(text(line, ctx.fonts.small));
            }
        }
        None
    }
}
