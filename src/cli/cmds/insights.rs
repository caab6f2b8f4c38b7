use crate::base;
use crate::cli;

/// View the highest, lowest and average transaction and the top category
#[derive(clap::Parser)]
pub struct Insights {
    #[command(flatten)]
    filter_opts: cli::sharedopts::FilterOpts,
}

impl Insights {
    pub fn run(&self, rl: &base::Recordlist, config: &base::Config) -> anyhow::Result<cli::Output> {
        let criteria = self.filter_opts.criteria();
        let records = base::filter::filter(rl.iter(), &criteria);
        let summary = base::Summary::new(&records);
        let stats = summary.stats;
        let top_category = match summary.top_category() {
            Some(c) => format!("{} ({} spent)", c.name, cli::util::money(config, c.value)),
            None => cli::util::NOT_AVAILABLE.to_string(),
        };

        let section = base::tree::forstats::Section::new("Insights")
            .row(
                "Highest transaction",
                cli::util::exact_money(config, stats.max),
            )
            .row(
                "Lowest transaction",
                cli::util::exact_money(config, stats.min),
            )
            .row("Top category", top_category)
            .row(
                "Average transaction",
                cli::util::money(config, stats.average),
            );
        let mut outputs = vec![
            cli::Output::Str(cli::util::header(rl, &criteria, records.len())),
            cli::Output::Stats(base::tree::forstats::Config {
                charset: cli::util::charset_from_config(config),
                sections: vec![section],
            }),
        ];
        outputs.extend(cli::util::quarantine_note(rl));
        Ok(cli::Output::Many(outputs))
    }
}
