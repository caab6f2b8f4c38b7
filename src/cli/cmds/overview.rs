use crate::base;
use crate::cli;

/// View total spending, spending per month and the category split
#[derive(clap::Parser)]
pub struct Overview {
    #[command(flatten)]
    filter_opts: cli::sharedopts::FilterOpts,
}

impl Overview {
    pub fn run(&self, rl: &base::Recordlist, config: &base::Config) -> anyhow::Result<cli::Output> {
        let criteria = self.filter_opts.criteria();
        let records = base::filter::filter(rl.iter(), &criteria);
        let summary = base::Summary::new(&records);
        let stats = summary.stats;
        let charset = cli::util::charset_from_config(config);

        let section = base::tree::forstats::Section::new("Summary")
            .row(
                "Total spent",
                cli::util::money(config, stats.total.round_to_units()),
            )
            .row("Transactions", stats.count)
            .row("Average", cli::util::money(config, stats.average))
            .row("Active months", stats.active_months);
        let mut outputs = vec![
            cli::Output::Str(cli::util::header(rl, &criteria, records.len())),
            cli::Output::Stats(base::tree::forstats::Config {
                charset: charset.clone(),
                sections: vec![section],
            }),
            cli::Output::Str("Monthly spending".to_string()),
            cli::Output::Barchart(base::barchart::Config::monthly(
                charset,
                cli::util::term_width(),
                &summary.monthly,
            )),
        ];
        if !summary.categories.is_empty() {
            outputs.push(cli::Output::Stats(base::tree::forstats::Config {
                charset: cli::util::charset_from_config(config),
                sections: vec![cli::util::category_section(
                    config,
                    &summary.categories,
                )],
            }));
        }
        outputs.extend(cli::util::quarantine_note(rl));
        Ok(cli::Output::Many(outputs))
    }
}
