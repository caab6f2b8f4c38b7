/// A calendar date as stored in transaction documents: `DD-MM-YY`, where the
/// two-digit year `YY` always means `2000 + YY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date(time::Date);

impl Date {
    pub const FIRST_YEAR: i32 = 2000;

    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// 1-indexed.
    pub fn month(self) -> u8 {
        self.0.month().into()
    }

    pub fn day(self) -> u8 {
        self.0.day()
    }

    pub fn month_key(self) -> Month {
        Month {
            year: self.year(),
            month: self.month(),
        }
    }

    pub fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        time::Date::from_calendar_date(year, month, day)
            .ok()
            .map(Self)
    }

    /// Returns the local date.
    #[cfg(not(test))]
    pub fn today() -> Self {
        let now = time::OffsetDateTime::now_local()
            .unwrap_or_else(|_| time::OffsetDateTime::now_utc());
        Self(now.date())
    }

    /// Returns the local date.
    #[cfg(test)]
    pub fn today() -> Self {
        Self::from_ymd(2025, 3, 30).expect("'today' for tests should be valid")
    }

    /// Formats as `yyyy-mm-dd`.
    pub fn iso(self) -> String {
        let fmt = time::macros::format_description!("[year]-[month]-[day]");
        self.0.format(fmt).expect("formatting should succeed")
    }
}

impl std::fmt::Display for Date {
    /// Writes the storage form, `DD-MM-YY`.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:02}-{:02}-{:02}",
            self.day(),
            self.month(),
            self.year() - Self::FIRST_YEAR
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected 'DD-MM-YY', got '{0}'")]
    BadFormat(String),
    #[error("two-digit year '{0}' is outside 00-99")]
    YearOutOfRange(u16),
    #[error("'{0}' is not a calendar date")]
    NoSuchDay(String),
}

impl std::str::FromStr for Date {
    type Err = ParseError;

    /// Parses `DD-MM-YY`. Single-digit day and month parts are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad_format = || ParseError::BadFormat(s.to_string());
        let parts = s.split('-').collect::<Vec<_>>();
        let [day, month, year] = parts.as_slice() else {
            return Err(bad_format());
        };
        let day = day.parse::<u8>().map_err(|_| bad_format())?;
        let month = month.parse::<u8>().map_err(|_| bad_format())?;
        let yy = year.parse::<u16>().map_err(|_| bad_format())?;
        if yy > 99 {
            return Err(ParseError::YearOutOfRange(yy));
        }
        Self::from_ymd(Self::FIRST_YEAR + yy as i32, month, day)
            .ok_or_else(|| ParseError::NoSuchDay(s.to_string()))
    }
}

impl TryFrom<&str> for Date {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

/// A calendar month. Orders chronologically, which coincides with the
/// ordering of its `YYYY-MM` string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Month {
    pub year: i32,
    pub month: u8,
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
