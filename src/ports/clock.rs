use chrono::NaiveDateTime;

/// Port for reading the local wall clock
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}
