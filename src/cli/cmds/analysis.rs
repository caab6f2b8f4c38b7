use crate::base;
use crate::cli;

/// View spending per category and the top vendors
#[derive(clap::Parser)]
pub struct Analysis {
    #[command(flatten)]
    filter_opts: cli::sharedopts::FilterOpts,

    /// Rank the top 10 vendors ('full') or the top 5 ('compact')
    ///
    /// Defaults to 'compact' when the terminal is narrower than the configured
    /// 'compactWidth', 'full' otherwise.
    #[arg(long, value_name = "LAYOUT")]
    layout: Option<base::Layout>,
}

impl Analysis {
    pub fn run(&self, rl: &base::Recordlist, config: &base::Config) -> anyhow::Result<cli::Output> {
        let criteria = self.filter_opts.criteria();
        let records = base::filter::filter(rl.iter(), &criteria);
        let summary = base::Summary::new(&records);
        let layout = self
            .layout
            .unwrap_or_else(|| cli::util::layout_for_width(config, cli::util::term_width()));
        tracing::debug!("using {} layout", layout);

        let by_category = cli::util::category_section(config, &summary.categories);
        let mut by_vendor =
            base::tree::forstats::Section::new(format!("Top {} vendors", layout.vendor_limit()));
        for v in summary.top_vendors(layout) {
            let value = format!("{} ({} txn)", cli::util::money(config, v.total), v.count);
            by_vendor = by_vendor.row(v.vendor.as_str(), value);
        }

        let mut outputs = vec![
            cli::Output::Str(cli::util::header(rl, &criteria, records.len())),
            cli::Output::Stats(base::tree::forstats::Config {
                charset: cli::util::charset_from_config(config),
                sections: vec![by_category, by_vendor],
            }),
        ];
        outputs.extend(cli::util::quarantine_note(rl));
        Ok(cli::Output::Many(outputs))
    }
}
