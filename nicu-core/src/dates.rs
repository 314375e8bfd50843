//! Date formatting for spreadsheet cells.

use chrono::{NaiveDateTime, Timelike};

/// Format used for date-only cells: "YYYY-MM-DD"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format used when a cell carries a time of day: "YYYY-MM-DD HH:MM:SS"
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a spreadsheet date-time, dropping the time part when it is midnight.
pub fn format_cell_datetime(dt: &NaiveDateTime) -> String {
    if (dt.hour(), dt.minute(), dt.second()) == (0, 0, 0) {
        dt.format(DATE_FORMAT).to_string()
    } else {
        dt.format(DATE_TIME_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn midnight_prints_date_only() {
        let dt = NaiveDate::from_ymd_opt(2022, 3, 14)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(format_cell_datetime(&dt), "2022-03-14");
    }

    #[test]
    fn time_of_day_is_kept() {
        let dt = NaiveDate::from_ymd_opt(2022, 3, 14)
            .unwrap()
            .and_hms_opt(6, 30, 0)
            .unwrap();
        assert_eq!(format_cell_datetime(&dt), "2022-03-14 06:30:00");
    }
}
