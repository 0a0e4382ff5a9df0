// Utility functions
use chrono::{NaiveDate, NaiveTime};

/// Unix seconds of the UTC midnight that starts the given date.
pub fn utc_midnight_secs(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midnight_of_known_date() {
        let date = "2020-01-01".parse::<NaiveDate>().unwrap();
        assert_eq!(utc_midnight_secs(date), 1_577_836_800);
    }

    #[test]
    fn epoch_date_is_zero() {
        assert_eq!(utc_midnight_secs(NaiveDate::default()), 0);
    }
}
