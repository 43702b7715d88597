use super::{text, DashboardContext, Widget, WidgetAction};
use eframe::egui;

#[derive(Default)]
pub struct WeatherWidget;

impl Widget for WeatherWidget {
    fn render(&mut self, ui: &mut egui::Ui, ctx: &DashboardContext<'_>) -> Option<WidgetAction> {
        ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
            for line in ctx.slots.weather.text().lines() {
                ui.label(text(line, ctx.fonts.medium));
            }
        });
        None
    }
}
