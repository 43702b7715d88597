use crate::dashboard::jobs::{BackgroundJobs, RepaintFn};
use crate::dashboard::scheduler::{RefreshTask, Scheduler};
use crate::dashboard::slots::{DisplaySlots, HeadlineSet, SlotUpdate, WeatherPanel};
use crate::settings::Settings;
use crate::sources::{
    ClockFace, HeadlineSource, NewsApiClient, NewsQuery, OpenWeatherClient, QuoteRotator,
    WeatherSource,
};
use chrono::{DateTime, Local};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Drives every display slot from the render loop.
///
/// Clock and quote updates are computed inline. Weather and news fetches run
/// on background jobs whose results are applied by [`Dashboard::tick`] on the
/// next frame.
pub struct Dashboard {
    scheduler: Scheduler,
    jobs: BackgroundJobs<SlotUpdate>,
    weather: Arc<dyn WeatherSource>,
    news: Arc<dyn HeadlineSource>,
    quotes: QuoteRotator,
    pub slots: DisplaySlots,
}

impl Dashboard {
    pub fn new(
        settings: &Settings,
        weather: Arc<dyn WeatherSource>,
        news: Arc<dyn HeadlineSource>,
        quotes: QuoteRotator,
        repaint: Option<RepaintFn>,
    ) -> Self {
        Self {
            scheduler: Scheduler::with_default_cadences(),
            jobs: BackgroundJobs::new(repaint),
            weather,
            news,
            quotes,
            slots: DisplaySlots::new(settings.user.greeting(), settings.todo_items.clone()),
        }
    }

    /// Dashboard backed by the OpenWeatherMap and NewsAPI clients.
    pub fn with_default_sources(
        settings: &Settings,
        repaint: Option<RepaintFn>,
    ) -> anyhow::Result<Self> {
        Ok(Self::new(
            settings,
            Arc::new(OpenWeatherClient::new()?),
            Arc::new(NewsApiClient::new(NewsQuery::default())?),
            QuoteRotator::default(),
            repaint,
        ))
    }

    pub fn news_topic(&self) -> &str {
        self.news.topic()
    }

    /// Apply finished fetches and run whatever is due. Returns how long the
    /// caller may sleep before the next timer fires.
    pub fn tick(&mut self, settings: &Settings) -> Duration {
        self.tick_at(Instant::now(), Local::now(), settings)
    }

    pub fn tick_at(
        &mut self,
        now: Instant,
        wall: DateTime<Local>,
        settings: &Settings,
    ) -> Duration {
        self.drain_results();
        for task in self.scheduler.due(now) {
            self.run(task, &wall, settings);
        }
        self.scheduler
            .next_deadline(now)
            .unwrap_or_else(|| RefreshTask::Clock.interval())
    }

    /// Apply every result posted by background jobs. Returns how many were
    /// applied.
    pub fn drain_results(&mut self) -> usize {
        let updates = self.jobs.drain();
        let count = updates.len();
        for update in updates {
            self.slots.apply(update);
        }
        count
    }

    /// Block for up to `timeout` waiting for one background result and apply
    /// it.
    pub fn wait_for_result(&mut self, timeout: Duration) -> bool {
        match self.jobs.recv_timeout(timeout) {
            Some(update) => {
                self.slots.apply(update);
                true
            }
            None => false,
        }
    }

    pub fn set_todo_items(&mut self, items: Vec<String>) {
        self.slots.apply(SlotUpdate::Todo(items));
    }

    pub fn in_flight(&self) -> usize {
        self.jobs.in_flight()
    }

    /// Cancel every running fetch; their results are dropped.
    pub fn shutdown(&mut self) {
        self.jobs.cancel_all();
    }

    fn run(&mut self, task: RefreshTask, wall: &DateTime<Local>, settings: &Settings) {
        match task {
            RefreshTask::Clock => self.slots.apply(SlotUpdate::Clock(ClockFace::at(wall))),
            RefreshTask::Quotes => {
                let pair = self.quotes.rotate();
                self.slots.apply(SlotUpdate::Quotes(pair));
            }
            RefreshTask::Weather => {
                let source = Arc::clone(&self.weather);
                let location = settings.location.clone();
                let key = settings.api_keys.openweather.clone();
                self.jobs.spawn("weather", move || {
                    let panel = match source.fetch(&location, &key) {
                        Ok(snapshot) => WeatherPanel::Ready(snapshot),
                        Err(e) => {
                            tracing::warn!("weather error: {e:#}");
                            WeatherPanel::Unavailable
                        }
                    };
                    SlotUpdate::Weather(panel)
                });
            }
            RefreshTask::News => {
                let source = Arc::clone(&self.news);
                let key = settings.api_keys.newsapi.clone();
                self.jobs.spawn("news", move || {
                    let set = match source.fetch(&key) {
                        Ok(titles) => HeadlineSet::from_titles(titles),
                        Err(e) => {
                            tracing::warn!("news error: {e:#}");
                            HeadlineSet::Unavailable
                        }
                    };
                    SlotUpdate::Headlines(set)
                });
            }
        }
    }
}

impl Drop for Dashboard {
    fn drop(&mut self) {
        self.shutdown();
    }
}
