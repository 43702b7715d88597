pub mod dashboard;
pub mod jobs;
pub mod scheduler;
pub mod slots;
pub mod widgets;

pub use dashboard::Dashboard;
pub use jobs::{BackgroundJobs, JobHandle, RepaintFn};
pub use scheduler::{RecurringTimer, RefreshTask, Scheduler};
pub use slots::{DisplaySlots, HeadlineSet, SlotUpdate, WeatherPanel};
pub use widgets::{DashboardContext, Widget, WidgetAction};
