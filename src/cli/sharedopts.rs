use crate::base;
use crate::cli;

pub const FULLMATCH_HELP: &str = "Match category patterns against whole categories";
pub const FULLMATCH_HELP_LONG: &str = "Match category patterns against whole categories

By default, each pattern is wrapped in '*' so that it matches anywhere in a category. For example, 'foo' matches 'food' unless this flag is given.";

#[derive(clap::Args, Debug, Default)]
pub struct FilterOpts {
    /// Month of interest (1-12), or 'all'
    #[arg(
        short,
        long,
        value_name = "MONTH",
        default_value = "all",
        value_parser = cli::util::parse_month
    )]
    pub month: base::Choice<u8>,

    /// Four-digit year of interest, or 'all'
    #[arg(
        short,
        long,
        value_name = "YEAR",
        default_value = "all",
        value_parser = cli::util::parse_year
    )]
    pub year: base::Choice<i32>,

    /// Exact category of interest, or 'all'
    ///
    /// Run 'cats' to see which categories exist.
    #[arg(short, long, value_name = "CATEGORY", default_value = "all")]
    pub category: base::Choice<String>,

    /// Only include vendors whose name contains this text, ignoring case
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    pub vendor: String,

    /// Only include amounts at least this large
    #[arg(long, value_name = "AMOUNT")]
    pub min: Option<base::Cents>,

    /// Only include amounts at most this large
    #[arg(long, value_name = "AMOUNT")]
    pub max: Option<base::Cents>,
}

impl FilterOpts {
    pub fn criteria(&self) -> base::Criteria {
        base::Criteria {
            month: self.month.clone(),
            year: self.year.clone(),
            category: self.category.clone(),
            vendor_search: self.vendor.clone(),
            min_amount: self.min,
            max_amount: self.max,
        }
    }
}

#[derive(clap::Args, Debug, Default)]
pub struct SortOpts {
    /// Sort transactions by 'date', 'amount' or 'vendor'
    #[arg(long, value_name = "KEY", default_value_t)]
    pub sort: base::SortKey,

    /// Sort order, 'asc' or 'desc'
    #[arg(long, value_name = "ORDER", default_value_t)]
    pub order: base::Direction,
}
