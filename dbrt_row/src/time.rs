use std::time::{Duration, SystemTime, UNIX_EPOCH};

use chrono::NaiveDateTime;

/// convert a timestamp column value to std system time, keeping the absolute
/// instant at millisecond precision. the naive value is read as utc. none in, none out.
pub fn convert_timestamp_to_system_time(ts : Option<NaiveDateTime>) -> Option<SystemTime> {
    let ts = ts?;
    let millis = ts.and_utc().timestamp_millis();

    if millis >= 0 {
        Some(UNIX_EPOCH + Duration::from_millis(millis as u64))
    } else {
        UNIX_EPOCH.checked_sub(Duration::from_millis(millis.unsigned_abs()))
    }
}
