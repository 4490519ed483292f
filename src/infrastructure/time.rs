use crate::application::ports::time::Clock;
use chrono::{DateTime, Utc};

/// Wall clock used when stamping newly stored articles.
#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
