use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

pub const OPENWEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Shown in the weather slot after a failed fetch.
pub const WEATHER_UNAVAILABLE: &str = "Weather data unavailable";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub location: String,
    /// Degrees Celsius.
    pub temperature: f64,
    pub description: String,
    /// Percent.
    pub humidity: f64,
    /// Metres per second.
    pub wind_speed: f64,
}

impl fmt::Display for WeatherSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}°C | {}\nHumidity: {}% | Wind: {} m/s",
            self.location, self.temperature, self.description, self.humidity, self.wind_speed
        )
    }
}

/// Provider of current weather conditions for a place name.
pub trait WeatherSource: Send + Sync {
    fn fetch(&self, location: &str, api_key: &str) -> Result<WeatherSnapshot>;
}

#[derive(Deserialize)]
struct Response {
    main: Option<Main>,
    #[serde(default)]
    weather: Vec<Condition>,
    wind: Option<Wind>,
}

#[derive(Deserialize)]
struct Main {
    temp: Option<f64>,
    humidity: Option<f64>,
}

#[derive(Deserialize)]
struct Condition {
    description: Option<String>,
}

#[derive(Deserialize)]
struct Wind {
    speed: Option<f64>,
}

/// OpenWeatherMap "current weather" client using metric units.
pub struct OpenWeatherClient {
    client: Client,
    url: String,
}

impl OpenWeatherClient {
    pub fn new() -> Result<Self> {
        Self::with_url(OPENWEATHER_URL)
    }

    /// Client targeting an alternative endpoint.
    pub fn with_url(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent("smart-mirror weather")
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl WeatherSource for OpenWeatherClient {
    fn fetch(&self, location: &str, api_key: &str) -> Result<WeatherSnapshot> {
        let resp = self
            .client
            .get(&self.url)
            .query(&[("q", location), ("appid", api_key), ("units", "metric")])
            .send()
            .context("weather request failed")?
            .error_for_status()?;
        let body = resp.bytes().context("read weather body")?;
        parse_weather(location, &body)
    }
}

/// Extract the consumed fields from an OpenWeatherMap response body.
pub fn parse_weather(location: &str, body: &[u8]) -> Result<WeatherSnapshot> {
    let resp: Response = serde_json::from_slice(body).context("parse weather response")?;
    let main = resp.main.ok_or_else(|| anyhow!("missing `main`"))?;
    let description = resp
        .weather
        .into_iter()
        .next()
        .and_then(|c| c.description)
        .ok_or_else(|| anyhow!("missing `weather[0].description`"))?;
    Ok(WeatherSnapshot {
        location: location.to_string(),
        temperature: main.temp.ok_or_else(|| anyhow!("missing `main.temp`"))?,
        description: capitalize(&description),
        humidity: main.humidity.ok_or_else(|| anyhow!("missing `main.humidity`"))?,
        wind_speed: resp
            .wind
            .and_then(|w| w.speed)
            .ok_or_else(|| anyhow!("missing `wind.speed`"))?,
    })
}

/// Upper-case the first character and lower-case the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
