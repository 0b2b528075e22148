use chrono::{DateTime, Local, NaiveDate};

/// Clock abstracts access to the current timestamp so printing stays
/// deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current local timestamp.
    fn now(&self) -> DateTime<Local>;

    /// Returns the current local date. Defaults to `now().date_naive()`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}
