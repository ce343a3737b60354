//! Date and time value assembly

use crate::token::DateField;
use cellfmt_core::SymbolContext;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Fields collected while matching a date/time alternative.
///
/// Every field is optional; missing ones take the context defaults when the
/// value is assembled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemporalFields {
    pub day: Option<u32>,
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub second: Option<u32>,
    /// Nanoseconds; may equal one full second after rounding
    pub nanos: Option<u32>,
    /// `Some(true)` for PM
    pub pm: Option<bool>,
}

impl TemporalFields {
    /// Record a numeric field; returns `false` if the field was already set
    /// to a different value
    pub fn set(&mut self, field: DateField, value: i32) -> bool {
        fn put<T: PartialEq + Copy>(slot: &mut Option<T>, value: T) -> bool {
            match *slot {
                Some(existing) => existing == value,
                None => {
                    *slot = Some(value);
                    true
                }
            }
        }

        let unsigned = match u32::try_from(value) {
            Ok(v) => v,
            Err(_) => return false,
        };
        match field {
            DateField::Day => put(&mut self.day, unsigned),
            DateField::Month => put(&mut self.month, unsigned),
            DateField::Year => put(&mut self.year, value),
            DateField::Hour => put(&mut self.hour, unsigned),
            DateField::Minute => put(&mut self.minute, unsigned),
            DateField::Second => put(&mut self.second, unsigned),
        }
    }

    pub fn set_pm(&mut self, pm: bool) -> bool {
        match self.pm {
            Some(existing) => existing == pm,
            None => {
                self.pm = Some(pm);
                true
            }
        }
    }

    /// Hour on the 24-hour clock after applying an am/pm marker. A marker
    /// without an hour reads as 12 on its half of the day.
    fn hour_24(&self) -> Option<u32> {
        let hour = match (self.hour, self.pm) {
            (Some(hour), _) => hour,
            (None, Some(_)) => 12,
            (None, None) => 0,
        };
        match self.pm {
            None => Some(hour),
            Some(_) if !(1..=12).contains(&hour) => None,
            Some(true) => Some(hour % 12 + 12),
            Some(false) => Some(hour % 12),
        }
    }

    pub fn date(&self, ctx: &dyn SymbolContext) -> Option<NaiveDate> {
        let year = match self.year {
            Some(year) => year,
            None => ctx.default_year(),
        };
        NaiveDate::from_ymd_opt(year, self.month.unwrap_or(1), self.day.unwrap_or(1))
    }

    /// Time of day plus a carry of one second when the fraction rounded up
    /// to a whole second
    fn time_with_carry(&self) -> Option<(NaiveTime, bool)> {
        let nanos = self.nanos.unwrap_or(0);
        let (nanos, carry) = if nanos >= NANOS_PER_SECOND {
            (nanos - NANOS_PER_SECOND, true)
        } else {
            (nanos, false)
        };
        let time = NaiveTime::from_hms_nano_opt(
            self.hour_24()?,
            self.minute.unwrap_or(0),
            self.second.unwrap_or(0),
            nanos,
        )?;
        Some((time, carry))
    }

    pub fn time(&self) -> Option<NaiveTime> {
        let (time, carry) = self.time_with_carry()?;
        if carry {
            Some(time.overflowing_add_signed(Duration::seconds(1)).0)
        } else {
            Some(time)
        }
    }

    pub fn date_time(&self, ctx: &dyn SymbolContext) -> Option<NaiveDateTime> {
        let date = self.date(ctx)?;
        let (time, carry) = self.time_with_carry()?;
        let value = NaiveDateTime::new(date, time);
        if carry {
            value.checked_add_signed(Duration::seconds(1))
        } else {
            Some(value)
        }
    }
}
