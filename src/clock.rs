use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Source of the current date and time-of-day.
///
/// Injected into every service operation so the attendance lifecycle and
/// leave workflow can be exercised in tests against a fixed instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }

    fn time_of_day(&self) -> NaiveTime {
        self.now().time()
    }
}

/// Wall-clock time in the server's local timezone.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}
