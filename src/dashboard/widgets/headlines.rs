use super::{text, DashboardContext, Widget, WidgetAction};
use eframe::egui;

/// Scrollable list of the latest headlines.
#[derive(Default)]
pub struct HeadlinesWidget;

impl Widget for HeadlinesWidget {
    fn render(&mut self, ui: &mut egui::Ui, ctx: &DashboardContext<'_>) -> Option<WidgetAction> {
        ui.label(text(
            format!("Top Headlines ({}):", ctx.news_topic),
            ctx.fonts.medium,
        ));
        ui.add_space(10.0);
        egui::ScrollArea::vertical()
            .id_source("headlines")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for line in ctx.slots.headlines.lines() {
                    ui.label(text(line, ctx.fonts.small));
                    ui.add_space(2.0);
                }
            });
        None
    }
}
