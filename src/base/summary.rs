use crate::base;

/// Spending in one calendar month, in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlySpending {
    pub month: base::Month,
    pub total: i64,
}

/// Spending in one category, in whole currency units.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    pub name: String,
    pub value: i64,
    /// Share of the unrounded total, in percent.
    pub percentage: f64,
}

/// Spending at one vendor, in whole currency units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorSpending {
    pub vendor: String,
    pub total: i64,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: base::Cents,
    pub count: usize,
    /// Mean amount rounded to whole units. Zero when there are no records.
    pub average: i64,
    pub active_months: usize,
    pub max: Option<base::Cents>,
    pub min: Option<base::Cents>,
}

/// How many vendors to rank.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::VariantNames,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Layout {
    #[default]
    Full,
    Compact,
}

impl Layout {
    pub const fn vendor_limit(self) -> usize {
        match self {
            Layout::Full => TOP_VENDORS,
            Layout::Compact => 5,
        }
    }
}

pub const TOP_VENDORS: usize = 10;

#[derive(Debug, Clone, Copy, Default, derive_more::AddAssign)]
struct Tally {
    total: base::Cents,
    count: usize,
}

/// Totals per month, oldest first.
pub fn monthly(records: &[&base::Record]) -> Vec<MonthlySpending> {
    let agg = records
        .iter()
        .map(|r| (r.date().month_key(), r.amount()))
        .collect::<base::Aggregate<_, _>>();
    let mut v = agg
        .iter()
        .map(|(month, total)| MonthlySpending {
            month,
            total: total.round_to_units(),
        })
        .collect::<Vec<_>>();
    v.sort_unstable_by_key(|m| m.month);
    v
}

/// Totals per category, largest first. Equal totals keep the order in which
/// their categories first appear in `records`.
pub fn categories(records: &[&base::Record]) -> Vec<CategorySpending> {
    let agg = records
        .iter()
        .map(|r| (r.category(), r.amount()))
        .collect::<base::Aggregate<_, _>>();
    let sum = agg.sum();
    let mut v = agg
        .iter()
        .map(|(name, value)| CategorySpending {
            name: name.to_string(),
            value: value.round_to_units(),
            percentage: percentage(value, sum),
        })
        .collect::<Vec<_>>();
    v.sort_by(|a, b| b.value.cmp(&a.value));
    v
}

/// The [`TOP_VENDORS`] vendors with the largest totals, largest first. Equal
/// totals keep the order in which their vendors first appear in `records`.
pub fn vendors(records: &[&base::Record]) -> Vec<VendorSpending> {
    let agg = records
        .iter()
        .map(|r| {
            let tally = Tally {
                total: r.amount(),
                count: 1,
            };
            (r.vendor(), tally)
        })
        .collect::<base::Aggregate<_, _>>();
    let mut v = agg
        .iter()
        .map(|(vendor, tally)| VendorSpending {
            vendor: vendor.to_string(),
            total: tally.total.round_to_units(),
            count: tally.count,
        })
        .collect::<Vec<_>>();
    v.sort_by(|a, b| b.total.cmp(&a.total));
    v.truncate(TOP_VENDORS);
    v
}

pub fn stats(records: &[&base::Record]) -> Stats {
    let total = records.iter().map(|r| r.amount()).sum::<base::Cents>();
    let count = records.len();
    let active_months = records
        .iter()
        .map(|r| r.date().month_key())
        .collect::<std::collections::HashSet<_>>()
        .len();
    Stats {
        total,
        count,
        average: average(total, count),
        active_months,
        max: records.iter().map(|r| r.amount()).max(),
        min: records.iter().map(|r| r.amount()).min(),
    }
}

/// `round(total / count)` in whole units, halves rounding up.
fn average(total: base::Cents, count: usize) -> i64 {
    if count == 0 {
        return 0;
    }
    let n = count as i128;
    (2 * total.0 as i128 + 100 * n).div_euclid(200 * n) as i64
}

fn percentage(part: base::Cents, whole: base::Cents) -> f64 {
    if whole.0 == 0 {
        return 0.0;
    }
    part.0 as f64 * 100.0 / whole.0 as f64
}

/// Every derived view of one filtered record set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub monthly: Vec<MonthlySpending>,
    pub categories: Vec<CategorySpending>,
    pub vendors: Vec<VendorSpending>,
    pub stats: Stats,
}

impl Summary {
    pub fn new(records: &[&base::Record]) -> Self {
        let summary = Self {
            monthly: monthly(records),
            categories: categories(records),
            vendors: vendors(records),
            stats: stats(records),
        };
        tracing::debug!(
            "summarized {} records into {} months, {} categories, {} vendors",
            records.len(),
            summary.monthly.len(),
            summary.categories.len(),
            summary.vendors.len()
        );
        summary
    }

    /// The leading slice of [`Summary::vendors`] shown under `layout`.
    pub fn top_vendors(&self, layout: Layout) -> &[VendorSpending] {
        let n = self.vendors.len().min(layout.vendor_limit());
        &self.vendors[..n]
    }

    pub fn top_category(&self) -> Option<&CategorySpending> {
        self.categories.first()
    }
}
