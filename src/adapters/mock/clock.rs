use crate::ports::clock::Clock as ClockTrait;
use chrono::{DateTime, Duration, Utc};
use std::sync::Mutex;

/// Fixed clock for deterministic tests
pub struct Clock {
    now: Mutex<DateTime<Utc>>,
}

impl Clock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }
}

impl ClockTrait for Clock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
