//! TT instant construction, offsetting, and Delta-T application.

use crate::civil::{civil_from_days, days_from_civil, parse_ymd};
use crate::error::TimeError;

const MS_PER_HOUR: f64 = 3_600_000.0;
const MS_PER_DAY: i64 = 86_400_000;

/// Round half away from zero, matching the spec's rule for collapsing
/// sub-millisecond fractional seconds onto the millisecond grid.
fn round_half_away_from_zero(x: f64) -> i64 {
    if x >= 0.0 {
        (x + 0.5).floor() as i64
    } else {
        (x - 0.5).ceil() as i64
    }
}

/// A TT instant, represented as whole milliseconds since the
/// 1970-01-01T00:00:00 civil epoch (the timestamp is *labelled* TT; it
/// carries no implicit relationship to UTC until [`TtInstant::to_utc_millis`]
/// is applied).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TtInstant {
    millis: i64,
}

impl TtInstant {
    /// Build the TT instant for an eclipse record's `t0`: civil midnight
    /// UTC on `date_ymd`, plus `t0_tt_hours` hours.
    ///
    /// Carries overflow across day boundaries (e.g. an hours value at or
    /// past 24h0m0s rolls into the next day) because the hour offset and
    /// the midnight-of-day offset are simply summed in milliseconds.
    pub fn from_record(date_ymd: &str, t0_tt_hours: f64) -> Result<Self, TimeError> {
        let (y, m, d) = parse_ymd(date_ymd)?;
        let midnight_millis = days_from_civil(y, m, d) * MS_PER_DAY;
        let offset_millis = round_half_away_from_zero(t0_tt_hours * MS_PER_HOUR);
        Ok(Self {
            millis: midnight_millis + offset_millis,
        })
    }

    /// The TT instant `t_hours` hours away from `self` (t0).
    pub fn offset_hours(self, t_hours: f64) -> Self {
        Self {
            millis: self.millis + round_half_away_from_zero(t_hours * MS_PER_HOUR),
        }
    }

    /// Subtract Delta-T (TT minus UTC, in seconds) to obtain UTC
    /// milliseconds since the 1970-01-01 epoch. `delta_t_seconds` may be
    /// negative for historical epochs.
    pub fn to_utc_millis(self, delta_t_seconds: f64) -> i64 {
        self.millis - round_half_away_from_zero(delta_t_seconds * 1000.0)
    }

    /// Raw millisecond count (TT-labelled) since the 1970-01-01 epoch.
    pub fn millis(self) -> i64 {
        self.millis
    }
}

/// Format UTC milliseconds since the 1970-01-01 epoch as
/// `YYYY-MM-DDTHH:MM:SS.sssZ`.
pub fn format_iso8601_utc(utc_millis: i64) -> String {
    let days = utc_millis.div_euclid(MS_PER_DAY);
    let ms_of_day = utc_millis.rem_euclid(MS_PER_DAY);
    let (year, month, day) = civil_from_days(days);

    let hour = ms_of_day / 3_600_000;
    let rem = ms_of_day % 3_600_000;
    let minute = rem / 60_000;
    let rem = rem % 60_000;
    let second = rem / 1000;
    let ms = rem % 1000;

    format!(
        "{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}.{ms:03}Z"
    )
}
