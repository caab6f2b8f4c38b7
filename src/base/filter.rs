use crate::base;

/// Either every value, or exactly one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Choice<T> {
    #[default]
    All,
    Only(T),
}

impl<T> Choice<T> {
    pub const ALL: &str = "all";

    pub fn is_all(&self) -> bool {
        matches!(self, Choice::All)
    }

    pub fn admits<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
        U: ?Sized,
    {
        match self {
            Choice::All => true,
            Choice::Only(want) => want == value,
        }
    }
}

impl<T> std::str::FromStr for Choice<T>
where
    T: std::str::FromStr,
{
    type Err = T::Err;

    /// `all` (any case) selects everything; anything else is parsed as `T`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(Self::ALL) {
            Ok(Choice::All)
        } else {
            s.parse().map(Choice::Only)
        }
    }
}

impl<T> std::fmt::Display for Choice<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Choice::All => f.write_str(Self::ALL),
            Choice::Only(v) => v.fmt(f),
        }
    }
}

/// Conjunction of constraints on a record. The default admits everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    /// 1-indexed.
    pub month: Choice<u8>,
    pub year: Choice<i32>,
    pub category: Choice<String>,
    /// Case-insensitive substring of the vendor name. Empty matches all.
    pub vendor_search: String,
    /// Inclusive.
    pub min_amount: Option<base::Cents>,
    /// Inclusive.
    pub max_amount: Option<base::Cents>,
}

impl Criteria {
    /// Number of constraints that differ from their admit-everything default.
    pub fn active_count(&self) -> usize {
        [
            !self.month.is_all(),
            !self.year.is_all(),
            !self.category.is_all(),
            !self.vendor_search.is_empty(),
            self.min_amount.is_some(),
            self.max_amount.is_some(),
        ]
        .into_iter()
        .filter(|&active| active)
        .count()
    }

    #[cfg(test)]
    pub fn matches(&self, r: &base::Record) -> bool {
        self.matcher().matches(r)
    }

    fn matcher(&self) -> Matcher<'_> {
        Matcher {
            criteria: self,
            needle: self.vendor_search.to_lowercase(),
        }
    }
}

/// [`Criteria`] with the vendor search lowercased once up front.
struct Matcher<'a> {
    criteria: &'a Criteria,
    needle: String,
}

impl Matcher<'_> {
    fn matches(&self, r: &base::Record) -> bool {
        let c = self.criteria;
        let dt = r.date();
        c.month.admits(&dt.month())
            && c.year.admits(&dt.year())
            && c.category.admits(r.category())
            && (self.needle.is_empty() || r.vendor().to_lowercase().contains(&self.needle))
            && c.min_amount.is_none_or(|min| r.amount() >= min)
            && c.max_amount.is_none_or(|max| r.amount() <= max)
    }
}

/// Returns the records satisfying every constraint in `criteria`, in their
/// original order.
pub fn filter<'a, I>(records: I, criteria: &Criteria) -> Vec<&'a base::Record>
where
    I: IntoIterator<Item = &'a base::Record>,
{
    let matcher = criteria.matcher();
    let out = records
        .into_iter()
        .filter(|r| matcher.matches(r))
        .collect::<Vec<_>>();
    tracing::debug!(
        "{} records match {} active filter(s)",
        out.len(),
        criteria.active_count()
    );
    out
}
