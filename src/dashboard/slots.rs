use crate::sources::news::{format_headline, HEADLINES_UNAVAILABLE, MAX_HEADLINES};
use crate::sources::weather::WEATHER_UNAVAILABLE;
use crate::sources::{ClockFace, QuotePair, WeatherSnapshot};

#[derive(Debug, Clone, PartialEq)]
pub enum WeatherPanel {
    Loading,
    Ready(WeatherSnapshot),
    Unavailable,
}

impl WeatherPanel {
    pub fn text(&self) -> String {
        match self {
            WeatherPanel::Loading => String::new(),
            WeatherPanel::Ready(snapshot) => snapshot.to_string(),
            WeatherPanel::Unavailable => WEATHER_UNAVAILABLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlineSet {
    Loading,
    Headlines(Vec<String>),
    Unavailable,
}

impl HeadlineSet {
    /// Build from raw titles, keeping the first [`MAX_HEADLINES`] and
    /// formatting each for display.
    pub fn from_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        HeadlineSet::Headlines(
            titles
                .into_iter()
                .take(MAX_HEADLINES)
                .map(|t| format_headline(t.as_ref()))
                .collect(),
        )
    }

    /// Text of each headline line on screen.
    pub fn lines(&self) -> Vec<String> {
        match self {
            HeadlineSet::Loading => Vec::new(),
            HeadlineSet::Headlines(items) => items.iter().map(|h| format!("• {h}")).collect(),
            HeadlineSet::Unavailable => vec![HEADLINES_UNAVAILABLE.to_string(); MAX_HEADLINES],
        }
    }
}

/// A wholesale replacement for one slot group.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotUpdate {
    Clock(ClockFace),
    Weather(WeatherPanel),
    Headlines(HeadlineSet),
    Quotes(QuotePair),
    Todo(Vec<String>),
}

/// Everything the display surface shows. Only the render loop mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySlots {
    pub clock: Option<ClockFace>,
    pub greeting: String,
    pub weather: WeatherPanel,
    pub headlines: HeadlineSet,
    pub quotes: Option<QuotePair>,
    pub todo_items: Vec<String>,
}

impl DisplaySlots {
    pub fn new(greeting: String, todo_items: Vec<String>) -> Self {
        Self {
            clock: None,
            greeting,
            weather: WeatherPanel::Loading,
            headlines: HeadlineSet::Loading,
            quotes: None,
            todo_items,
        }
    }

    pub fn apply(&mut self, update: SlotUpdate) {
        match update {
            SlotUpdate::Clock(face) => self.clock = Some(face),
            SlotUpdate::Weather(panel) => self.weather = panel,
            SlotUpdate::Headlines(set) => self.headlines = set,
            SlotUpdate::Quotes(pair) => self.quotes = Some(pair),
            SlotUpdate::Todo(items) => self.todo_items = items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_headlines_fill_every_line() {
        let lines = HeadlineSet::Unavailable.lines();
        assert_eq!(lines.len(), MAX_HEADLINES);
        assert!(lines.iter().all(|l| l == HEADLINES_UNAVAILABLE));
    }

    #[test]
    fn headlines_are_capped_and_bulleted() {
        let set = HeadlineSet::from_titles(["a", "b", "c", "d", "e"]);
        assert_eq!(set.lines(), vec!["• a", "• b", "• c", "• d"]);
    }
}
