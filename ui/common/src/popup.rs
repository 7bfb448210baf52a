use chrono::{DateTime, Datelike, Local, TimeZone};
use serde::{Deserialize, Serialize};

/// Content attached to a marker: the date the marker was placed.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Popup {
    pub creation_date: String,
}

impl Popup {
    pub fn new(creation_date: impl Into<String>) -> Self {
        Self {
            creation_date: creation_date.into(),
        }
    }

    pub fn created_now() -> Self {
        Self::new(creation_date(&Local::now()))
    }

    pub fn heading(&self) -> &str {
        &self.creation_date
    }
}

/// Short US style date, e.g. `3/7/2024`.
pub fn creation_date<Tz: TimeZone>(ts: &DateTime<Tz>) -> String {
    format!("{}/{}/{}", ts.month(), ts.day(), ts.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn formats_short_date() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 7, 23, 59, 0).unwrap();
        assert_eq!(creation_date(&ts), "3/7/2024");

        let ts = Utc.with_ymd_and_hms(1999, 12, 31, 0, 0, 0).unwrap();
        assert_eq!(creation_date(&ts), "12/31/1999");
    }

    #[test]
    fn heading_is_creation_date() {
        let popup = Popup::new("3/7/2024");
        assert_eq!(popup.heading(), "3/7/2024");
    }

    #[test]
    fn created_now_is_not_empty() {
        assert!(!Popup::created_now().creation_date.is_empty());
    }
}
