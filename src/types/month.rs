use crate::types::errors::MonthError;
use serde::Serialize;
use std::fmt;
use std::fmt::{Display, Formatter};

const CALENDAR: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December
];

/// Calendar month. Ordering follows the calendar, January first.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December
}

impl Month {
    pub fn from_number(number: u8) -> Result<Self, MonthError> {
        match number {
            1..=12 => Ok(CALENDAR[usize::from(number - 1)]),
            _ => Err(MonthError::OutOfRange(number))
        }
    }

    /// Derives the month from a `M/D` date string.
    ///
    /// Only the leading token is interpreted; the day is required to be present but is not validated.
    pub fn from_date(date: &str) -> Result<Self, MonthError> {
        let mut parts = date.trim().split('/');

        let (Some(month), Some(_), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(MonthError::InvalidDate(date.to_string()))
        };

        let number: u8 = month.trim().parse()
            .map_err(|_| MonthError::InvalidDate(date.to_string()))?;

        Self::from_number(number)
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December"
        }
    }
}

impl Display for Month {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}
