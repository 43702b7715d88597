use std::time::{Duration, Instant};

/// Work items driven by the dashboard refresh loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RefreshTask {
    Clock,
    Quotes,
    Weather,
    News,
}

impl RefreshTask {
    pub const ALL: [RefreshTask; 4] = [
        RefreshTask::Clock,
        RefreshTask::Quotes,
        RefreshTask::Weather,
        RefreshTask::News,
    ];

    /// Fixed cadence of the task.
    pub fn interval(self) -> Duration {
        match self {
            RefreshTask::Clock => Duration::from_secs(1),
            RefreshTask::Quotes => Duration::from_secs(10 * 60),
            RefreshTask::Weather => Duration::from_secs(10 * 60),
            RefreshTask::News => Duration::from_secs(15 * 60),
        }
    }

    /// Tasks that perform network I/O and must run off the render loop.
    pub fn is_blocking(self) -> bool {
        matches!(self, RefreshTask::Weather | RefreshTask::News)
    }
}

/// A timer that is due immediately after creation and then every `interval`.
#[derive(Clone, Debug)]
pub struct RecurringTimer {
    interval: Duration,
    next_due: Option<Instant>,
}

impl RecurringTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.next_due.map_or(true, |due| now >= due)
    }

    /// Mark the timer as fired at `now`. The next run is one interval after
    /// the deadline that was just met, so a late poll does not stretch the
    /// period. After a stall longer than one interval the missed runs are
    /// skipped and the timer is armed for `now + interval`.
    pub fn fire(&mut self, now: Instant) {
        let next = match self.next_due {
            Some(due) if due + self.interval > now => due + self.interval,
            _ => now + self.interval,
        };
        self.next_due = Some(next);
    }

    pub fn time_until(&self, now: Instant) -> Duration {
        self.next_due
            .map(|due| due.saturating_duration_since(now))
            .unwrap_or(Duration::ZERO)
    }
}

/// Set of recurring timers, each registered once and polled from the render
/// loop.
#[derive(Default, Debug)]
pub struct Scheduler {
    timers: Vec<(RefreshTask, RecurringTimer)>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scheduler with every [`RefreshTask`] registered at its own cadence.
    pub fn with_default_cadences() -> Self {
        let mut scheduler = Self::new();
        for task in RefreshTask::ALL {
            scheduler.schedule_repeating(task, task.interval());
        }
        scheduler
    }

    /// Register `task` to run every `interval`, starting with an immediate
    /// run. Registering the same task again replaces its timer.
    pub fn schedule_repeating(&mut self, task: RefreshTask, interval: Duration) {
        let timer = RecurringTimer::new(interval);
        match self.timers.iter_mut().find(|(t, _)| *t == task) {
            Some(slot) => slot.1 = timer,
            None => self.timers.push((task, timer)),
        }
    }

    /// Return the tasks due at `now` in registration order and re-arm them.
    pub fn due(&mut self, now: Instant) -> Vec<RefreshTask> {
        let mut due = Vec::new();
        for (task, timer) in &mut self.timers {
            if timer.is_due(now) {
                timer.fire(now);
                due.push(*task);
            }
        }
        due
    }

    /// Time until the earliest timer fires, or `None` when nothing is
    /// registered.
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.timers.iter().map(|(_, t)| t.time_until(now)).min()
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}
