use anyhow::{bail, Result};
use chrono::{Duration as ChronoDuration, Local};
use smart_mirror::dashboard::{Dashboard, HeadlineSet, WeatherPanel};
use smart_mirror::settings::Settings;
use smart_mirror::sources::weather::WEATHER_UNAVAILABLE;
use smart_mirror::sources::{
    ClockFace, HeadlineSource, QuoteRotator, WeatherSnapshot, WeatherSource,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

struct OfflineWeather;

impl WeatherSource for OfflineWeather {
    fn fetch(&self, _location: &str, _api_key: &str) -> Result<WeatherSnapshot> {
        bail!("network unreachable")
    }
}

#[derive(Default)]
struct SunnyWeather {
    calls: AtomicUsize,
}

impl WeatherSource for SunnyWeather {
    fn fetch(&self, location: &str, _api_key: &str) -> Result<WeatherSnapshot> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(WeatherSnapshot {
            location: location.to_string(),
            temperature: 21.0,
            description: "Clear sky".into(),
            humidity: 40.0,
            wind_speed: 3.2,
        })
    }
}

struct StaticNews(Vec<&'static str>);

impl HeadlineSource for StaticNews {
    fn fetch(&self, _api_key: &str) -> Result<Vec<String>> {
        Ok(self.0.iter().map(|s| s.to_string()).collect())
    }

    fn topic(&self) -> &str {
        "Testing"
    }
}

struct BrokenNews;

impl HeadlineSource for BrokenNews {
    fn fetch(&self, _api_key: &str) -> Result<Vec<String>> {
        bail!("malformed response")
    }

    fn topic(&self) -> &str {
        "Testing"
    }
}

fn wait_for(dash: &mut Dashboard, results: usize) {
    for _ in 0..results {
        assert!(
            dash.wait_for_result(Duration::from_secs(5)),
            "background fetch did not report back"
        );
    }
}

#[test]
fn failed_weather_leaves_other_panels_alone() {
    let settings = Settings::default();
    let mut dash = Dashboard::new(
        &settings,
        Arc::new(OfflineWeather),
        Arc::new(StaticNews(vec!["Monsoon arrives early", "Markets rally"])),
        QuoteRotator::with_seed(1),
        None,
    );

    dash.tick_at(Instant::now(), Local::now(), &settings);
    let quotes = dash.slots.quotes;
    assert!(quotes.is_some());
    wait_for(&mut dash, 2);

    assert_eq!(dash.slots.weather, WeatherPanel::Unavailable);
    assert_eq!(dash.slots.weather.text(), WEATHER_UNAVAILABLE);
    assert_eq!(
        dash.slots.headlines.lines(),
        vec!["• Monsoon arrives early", "• Markets rally"]
    );
    assert_eq!(dash.slots.quotes, quotes);
}

#[test]
fn failed_news_shows_placeholder() {
    let settings = Settings::default();
    let mut dash = Dashboard::new(
        &settings,
        Arc::new(SunnyWeather::default()),
        Arc::new(BrokenNews),
        QuoteRotator::with_seed(1),
        None,
    );

    dash.tick_at(Instant::now(), Local::now(), &settings);
    wait_for(&mut dash, 2);

    assert_eq!(dash.slots.headlines, HeadlineSet::Unavailable);
    assert_eq!(
        dash.slots.weather.text(),
        "Guwahati: 21°C | Clear sky\nHumidity: 40% | Wind: 3.2 m/s"
    );
}

#[test]
fn clock_refreshes_every_second() {
    let settings = Settings::default();
    let mut dash = Dashboard::new(
        &settings,
        Arc::new(SunnyWeather::default()),
        Arc::new(StaticNews(vec![])),
        QuoteRotator::with_seed(1),
        None,
    );
    let start = Instant::now();
    let wall = Local::now();

    let wait = dash.tick_at(start, wall, &settings);
    assert!(wait <= Duration::from_secs(1));
    assert_eq!(dash.slots.clock, Some(ClockFace::at(&wall)));

    let later = wall + ChronoDuration::hours(3);
    dash.tick_at(start + Duration::from_millis(400), later, &settings);
    assert_eq!(dash.slots.clock, Some(ClockFace::at(&wall)));

    dash.tick_at(start + Duration::from_secs(1), later, &settings);
    assert_eq!(dash.slots.clock, Some(ClockFace::at(&later)));
}

#[test]
fn weather_refetches_after_ten_minutes() {
    let settings = Settings::default();
    let weather = Arc::new(SunnyWeather::default());
    let mut dash = Dashboard::new(
        &settings,
        weather.clone(),
        Arc::new(StaticNews(vec![])),
        QuoteRotator::with_seed(1),
        None,
    );
    let start = Instant::now();

    dash.tick_at(start, Local::now(), &settings);
    wait_for(&mut dash, 2);
    dash.tick_at(start + Duration::from_secs(300), Local::now(), &settings);
    assert_eq!(weather.calls.load(Ordering::SeqCst), 1);

    dash.tick_at(start + Duration::from_secs(600), Local::now(), &settings);
    wait_for(&mut dash, 1);
    assert_eq!(weather.calls.load(Ordering::SeqCst), 2);
}

#[test]
fn greeting_and_todos_come_from_settings() {
    let mut settings = Settings::default();
    settings.user.name = "Ada".into();
    settings.user.greeting_emoji = "🌞".into();
    let mut dash = Dashboard::new(
        &settings,
        Arc::new(OfflineWeather),
        Arc::new(BrokenNews),
        QuoteRotator::with_seed(1),
        None,
    );

    assert_eq!(dash.slots.greeting, "Hi Ada 🌞");
    assert_eq!(dash.slots.todo_items, settings.todo_items);
    assert_eq!(dash.news_topic(), "Testing");

    dash.set_todo_items(vec!["only".into()]);
    assert_eq!(dash.slots.todo_items, vec!["only"]);
}
