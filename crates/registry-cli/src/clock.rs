use chrono::{DateTime, Local};
use registry_core::time::Clock;

/// Wall-clock implementation of [`Clock`].
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
