use crate::base;
use crate::cli;

/// List transactions
#[derive(clap::Parser)]
pub struct List {
    #[command(flatten)]
    filter_opts: cli::sharedopts::FilterOpts,

    #[command(flatten)]
    sort_opts: cli::sharedopts::SortOpts,
}

impl List {
    pub fn run(&self, rl: &base::Recordlist, config: &base::Config) -> anyhow::Result<cli::Output> {
        let criteria = self.filter_opts.criteria();
        let mut records = base::filter::filter(rl.iter(), &criteria);
        base::sort::sort(&mut records, self.sort_opts.sort, self.sort_opts.order);

        let header = format!(
            "{}, sorted by {} {}",
            cli::util::header(rl, &criteria, records.len()),
            self.sort_opts.sort,
            self.sort_opts.order
        );
        let mut outputs = vec![
            cli::Output::Str(header),
            cli::Output::Table(base::table::Config {
                charset: cli::util::charset_from_config(config),
                records: records.into_iter().cloned().collect(),
            }),
        ];
        outputs.extend(cli::util::quarantine_note(rl));
        Ok(cli::Output::Many(outputs))
    }
}
