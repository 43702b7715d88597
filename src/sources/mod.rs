pub mod clock;
pub mod news;
pub mod quotes;
pub mod weather;

pub use clock::ClockFace;
pub use news::{format_headline, HeadlineSource, NewsApiClient, NewsQuery};
pub use quotes::{QuotePair, QuoteRotator, QUOTES};
pub use weather::{OpenWeatherClient, WeatherSnapshot, WeatherSource};
