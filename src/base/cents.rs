use crate::base;

/// Integral representation of monetary quantities up to two decimal places.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::From,
    derive_more::Into,
)]
pub struct Cents(pub i64);

impl Cents {
    /// Largest amount a stored transaction may carry: one trillion units.
    pub const MAX_AMOUNT: Self = Self(100_000_000_000_000);

    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Parses a stored amount such as `Rs. 1200.50`. The currency prefix must
    /// be present verbatim and the remainder must be a non-negative quantity.
    pub fn parse_prefixed(s: &str, prefix: &str) -> Result<Self, AmountError> {
        let rest = s
            .strip_prefix(prefix)
            .ok_or_else(|| AmountError::MissingPrefix(prefix.to_string()))?;
        let cents = rest.trim().parse::<Self>()?;
        if cents.0 < 0 {
            return Err(AmountError::Negative);
        }
        if cents > Self::MAX_AMOUNT {
            return Err(AmountError::TooLarge(Self::MAX_AMOUNT));
        }
        Ok(cents)
    }

    /// Rounds to the nearest whole currency unit. Halves round up.
    pub const fn round_to_units(self) -> i64 {
        (self.0 as i128 + 50).div_euclid(100) as i64
    }

    /// Formats without thousands separators or parentheses, e.g. `1234.50`
    /// or `-0.10`.
    pub fn plain(self) -> Plain {
        Plain(self)
    }

    /// Returns `cents.to_string().len()` without actually building a string.
    pub fn charlen(self) -> usize {
        let n = self.abs().0.max(100) as u64;
        let mut len = base::util::count_digits(n);
        len += (len - 3) / 3; // commas
        len += 1; // decimal point
        if self.0 < 0 {
            len += 2; // parentheses
        }
        len
    }
}

// Totals saturate instead of overflowing.
impl std::ops::Add for Cents {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl std::ops::AddAssign for Cents {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs
    }
}

impl std::iter::Sum for Cents {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), std::ops::Add::add)
    }
}

impl std::fmt::Display for Cents {
    /// Formats with two decimal places and thousands separators. Negative
    /// quantities are wrapped in parentheses.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut cents = self.abs().0;
        let mut bytes = Vec::<u8>::new();
        macro_rules! pop_digit {
            () => {
                bytes.push(b'0' + (cents % 10) as u8);
                cents /= 10
            };
        }

        pop_digit!();
        pop_digit!();
        bytes.push(b'.');
        pop_digit!();
        let mut i = 1;
        while cents > 0 {
            if i % 3 == 0 {
                bytes.push(b',');
            }
            i += 1;
            pop_digit!();
        }
        bytes.reverse();
        if self.0 < 0 {
            bytes.insert(0, b'(');
            bytes.push(b')');
        }
        let s = std::str::from_utf8(&bytes).expect("all chars should be ascii");
        f.write_str(s)
    }
}

impl std::str::FromStr for Cents {
    type Err = std::num::ParseIntError;

    /// Parses a cents quantity from a human-readable string, which may contain
    /// comma thousands separators and any number of decimal places. Decimal
    /// places beyond the second are discarded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut s = s.replace(',', "");
        if !["", "+", "-", ".", "+.", "-."].contains(&s.as_str()) {
            let mut chars = s.chars().collect::<Vec<_>>();
            chars.push('0');
            chars.push('0');
            if let Some(i) = chars.iter().copied().position(|c| c == '.') {
                chars.swap(i, i + 1);
                chars.swap(i + 1, i + 2);
                chars.truncate(i + 2);
            };
            s = chars.into_iter().collect::<String>();
        }
        s.parse::<i64>().map(Self)
    }
}

impl TryFrom<&str> for Cents {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

/// See [`Cents::plain`].
#[derive(Debug, Clone, Copy)]
pub struct Plain(Cents);

impl std::fmt::Display for Plain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let abs = self.0.abs().0;
        let sign = if self.0.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

/// Whole currency units, as produced by [`Cents::round_to_units`]. Formats
/// with thousands separators and no decimal places.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Units(pub i64);

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        let mut s = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if self.0 < 0 {
            s.push('-');
        }
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                s.push(',');
            }
            s.push(c);
        }
        f.write_str(&s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("amount does not start with '{0}'")]
    MissingPrefix(String),
    #[error("amount is not a number")]
    NotANumber(#[from] std::num::ParseIntError),
    #[error("amount is negative")]
    Negative,
    #[error("amount exceeds {0}")]
    TooLarge(Cents),
}
