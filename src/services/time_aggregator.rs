use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone};

use crate::error::{AppError, Result};
use crate::models::{MILLIS_PER_HOUR, Shift, TimeByDay, WorkingHours};

/// Hours per calendar day paid at the regular rate.
pub const REGULAR_HOURS_PER_DAY: f64 = 8.0;

/// `YYYY-M-D` without zero padding.
pub fn day_key(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}

pub fn to_datetime<Tz: TimeZone>(tz: &Tz, millis: i64) -> Result<DateTime<Tz>> {
    tz.timestamp_millis_opt(millis)
        .single()
        .ok_or(AppError::InvalidTimestamp(millis))
}

pub fn local_date<Tz: TimeZone>(tz: &Tz, millis: i64) -> Result<NaiveDate> {
    Ok(to_datetime(tz, millis)?.date_naive())
}

/// First instant of `date` in `tz`, as epoch millis.
///
/// When midnight falls in a DST gap the first valid instant after it is used.
pub fn start_of_day<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Option<i64> {
    let midnight = date.and_hms_opt(0, 0, 0)?;
    tz.from_local_datetime(&midnight)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(midnight + Duration::hours(1))).earliest())
        .map(|dt| dt.timestamp_millis())
}

/// Same local calendar date, not "within 24 hours".
pub fn same_day<Tz: TimeZone>(tz: &Tz, start: i64, end: i64) -> Result<bool> {
    Ok(local_date(tz, start)? == local_date(tz, end)?)
}

/// Splits `[clock_in, clock_out)` at the first local midnight after `clock_in`.
///
/// A shift ending on a later date than it started yields two segments: the
/// clock-in day up to that midnight, and the following day with the rest,
/// however many further midnights the rest crosses. Segments always sum to
/// `clock_out - clock_in`.
pub fn split_by_day<Tz: TimeZone>(
    tz: &Tz,
    clock_in: i64,
    clock_out: i64,
) -> Result<Vec<(NaiveDate, i64)>> {
    let in_day = local_date(tz, clock_in)?;
    if same_day(tz, clock_in, clock_out)? {
        return Ok(vec![(in_day, clock_out - clock_in)]);
    }

    let next_day = in_day
        .succ_opt()
        .ok_or(AppError::InvalidTimestamp(clock_in))?;
    let midnight = start_of_day(tz, next_day).ok_or(AppError::InvalidTimestamp(clock_in))?;

    Ok(vec![
        (in_day, midnight - clock_in),
        (next_day, clock_out - midnight),
    ])
}

pub fn add_or_update_day_entry(time_by_day: &mut TimeByDay, date: NaiveDate, millis: i64) {
    *time_by_day.entry(day_key(date)).or_insert(0) += millis;
}

/// Accumulates worked milliseconds per calendar day across all `shifts`.
pub fn worked_millis_per_day<Tz: TimeZone>(tz: &Tz, shifts: &[Shift]) -> Result<TimeByDay> {
    let mut time_by_day = TimeByDay::new();

    for shift in shifts {
        for (date, millis) in split_by_day(tz, shift.clock_in, shift.clock_out)? {
            add_or_update_day_entry(&mut time_by_day, date, millis);
        }
    }

    Ok(time_by_day)
}

/// Splits one day's hours into `(regular, overtime)`.
pub fn split_day_hours(hours: f64) -> (f64, f64) {
    if hours > REGULAR_HOURS_PER_DAY {
        (REGULAR_HOURS_PER_DAY, hours - REGULAR_HOURS_PER_DAY)
    } else {
        (hours, 0.0)
    }
}

pub fn calculate_regular_and_overtime_hours(time_by_day: &TimeByDay) -> WorkingHours {
    time_by_day
        .values()
        .fold(WorkingHours::default(), |mut total, &millis| {
            let (regular, overtime) = split_day_hours(millis as f64 / MILLIS_PER_HOUR);
            total.regular_working_hours += regular;
            total.overtime_working_hours += overtime;
            total
        })
}
