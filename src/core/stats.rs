use chrono::{
    Local,
    TimeZone,
    Utc,
};

/// One self-graded review outcome. Events are only ever appended, so
/// log order and chronological order are the same thing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewEvent {
    pub timestamp: i64,
    pub correct: bool,
}

/// Derived counters, recomputed from the full log on every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsAggregate {
    pub total: u32,
    pub correct: u32,
    pub accuracy_percent: u32,
    /// Review counts per local calendar day, in first-seen order.
    pub daily_histogram: Vec<(String, u32)>,
}

/// Append-only review log. Lives in memory for the process lifetime;
/// the deck persists but statistics intentionally reset on restart.
#[derive(Debug, Default)]
pub struct StatsLog {
    events: Vec<ReviewEvent>,
}

impl StatsLog {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn record(&mut self, correct: bool) {
        self.record_at(Utc::now().timestamp_millis(), correct);
    }

    pub fn record_at(&mut self, timestamp: i64, correct: bool) {
        self.events.push(ReviewEvent { timestamp, correct });
    }

    pub fn events(&self) -> &[ReviewEvent] {
        &self.events
    }

    pub fn aggregate(&self) -> StatsAggregate {
        aggregate(&self.events)
    }
}

pub fn aggregate(events: &[ReviewEvent]) -> StatsAggregate {
    let total = events.len() as u32;
    let correct = events.iter().filter(|e| e.correct).count() as u32;

    let accuracy_percent = if total == 0 {
        0
    } else {
        (f64::from(correct) / f64::from(total) * 100.0).round() as u32
    };

    let mut daily_histogram: Vec<(String, u32)> = Vec::new();
    for event in events {
        let day = day_key(event.timestamp);
        match daily_histogram.iter_mut().find(|(key, _)| *key == day) {
            Some((_, count)) => *count += 1,
            None => daily_histogram.push((day, 1)),
        }
    }

    StatsAggregate { total, correct, accuracy_percent, daily_histogram }
}

/// Buckets an epoch-millisecond timestamp into its local calendar day.
fn day_key(timestamp: i64) -> String {
    match Local.timestamp_millis_opt(timestamp).single() {
        Some(local_time) => local_time.format("%Y-%m-%d").to_string(),
        None => "invalid".to_string(),
    }
}
