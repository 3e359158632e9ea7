use std::fmt::{Display, Formatter};

use chrono::{Local, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// A wall-clock time of day as the picker understands it: whole hours and
/// minutes, always in range. Seconds are not part of the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeValue {
    pub hours: u32,
    pub minutes: u32,
}

impl TimeValue {
    pub fn new(hours: u32, minutes: u32) -> Self {
        Self { hours, minutes }
    }

    /// Seed a value from optional caller-supplied fields. Each field defaults
    /// independently from `now`: supplying only hours still takes minutes
    /// from the clock, never from the supplied field.
    pub fn seed_at(hours: Option<u32>, minutes: Option<u32>, now: NaiveTime) -> Self {
        Self {
            hours: hours.unwrap_or_else(|| now.hour()),
            minutes: minutes.unwrap_or_else(|| now.minute()),
        }
    }

    pub fn seed(hours: Option<u32>, minutes: Option<u32>) -> Self {
        Self::seed_at(hours, minutes, Local::now().time())
    }

    pub fn with_hours(self, hours: u32) -> Self {
        Self { hours, ..self }
    }

    pub fn with_minutes(self, minutes: u32) -> Self {
        Self { minutes, ..self }
    }
}

impl Display for TimeValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::TimeValue;

    fn quarter_past_nine() -> NaiveTime {
        NaiveTime::from_hms_opt(9, 15, 42).expect("time should be valid")
    }

    #[test]
    fn seeds_supplied_fields_verbatim() {
        let value = TimeValue::seed_at(Some(14), Some(30), quarter_past_nine());
        assert_eq!(value, TimeValue::new(14, 30));
    }

    #[test]
    fn defaults_hours_from_clock_when_absent() {
        let value = TimeValue::seed_at(None, Some(5), quarter_past_nine());
        assert_eq!(value, TimeValue::new(9, 5));
    }

    #[test]
    fn defaults_minutes_from_clock_when_absent() {
        let value = TimeValue::seed_at(Some(23), None, quarter_past_nine());
        assert_eq!(value, TimeValue::new(23, 15));
    }

    #[test]
    fn defaults_both_fields_from_clock() {
        let value = TimeValue::seed_at(None, None, quarter_past_nine());
        assert_eq!(value, TimeValue::new(9, 15));
    }

    #[test]
    fn formats_zero_padded() {
        assert_eq!(TimeValue::new(7, 4).to_string(), "07:04");
        assert_eq!(TimeValue::new(0, 0).to_string(), "00:00");
    }
}
