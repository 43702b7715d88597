use crate::dashboard::slots::DisplaySlots;
use eframe::egui;

mod clock;
mod headlines;
mod quotes;
mod todo;
mod weather;

pub use clock::ClockWidget;
pub use headlines::HeadlinesWidget;
pub use quotes::QuotesWidget;
pub use todo::TodoWidget;
pub use weather::WeatherWidget;

/// Request raised by a widget while rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetAction {
    EditTodos,
}

/// Text sizes derived from the screen height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontScale {
    pub large: f32,
    pub medium: f32,
    pub small: f32,
}

impl FontScale {
    pub fn from_height(height: f32) -> Self {
        Self {
            large: (height * 0.06).max(24.0),
            medium: (height * 0.035).max(16.0),
            small: (height * 0.022).max(12.0),
        }
    }
}

/// Context shared with widgets at render time.
pub struct DashboardContext<'a> {
    pub slots: &'a DisplaySlots,
    pub fonts: FontScale,
    pub news_topic: &'a str,
}

/// A panel of the mirror. Widgets only read slots; they never mutate them.
pub trait Widget {
    fn render(&mut self, ui: &mut egui::Ui, ctx: &DashboardContext<'_>) -> Option<WidgetAction>;
}

pub(crate) fn text(s: impl Into<String>, size: f32) -> egui::RichText {
    egui::RichText::new(s).size(size).color(egui::Color32::BLACK)
}
