use crate::base;
use crate::cli;

/// View the categories and years present in the data
///
/// These are the values accepted by the '--category' and '--year' filters.
#[derive(clap::Parser)]
pub struct Cats {
    #[arg(long, help = cli::sharedopts::FULLMATCH_HELP, long_help = cli::sharedopts::FULLMATCH_HELP_LONG)]
    pub fullmatch: bool,

    /// List years, newest first, instead of categories
    #[arg(long)]
    pub years: bool,

    /// Wildcard pattern to match categories of interest
    ///
    /// If multiple patterns are provided, include categories that match any
    /// pattern.
    #[arg(default_value = "*")]
    pub category: Vec<String>,
}

impl Cats {
    pub fn run(&self, rl: &base::Recordlist) -> anyhow::Result<cli::Output> {
        if self.years {
            let years = rl.years();
            return Ok(if years.is_empty() {
                cli::Output::Str("No years.".to_string())
            } else {
                let years = years.iter().map(i32::to_string).collect::<Vec<_>>();
                cli::Output::Str(years.join("\n"))
            });
        }

        let patterns = cli::util::preprocess_categories(&self.category, self.fullmatch);
        let cats = cli::util::match_any(rl.categories(), &patterns[..]);
        Ok(if cats.is_empty() {
            cli::Output::Str("No categories.".to_string())
        } else {
            cli::Output::Str(cats.join("\n"))
        })
    }
}
