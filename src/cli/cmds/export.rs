use anyhow::Context;

use crate::base;
use crate::cli;

/// Export transactions to a CSV file
#[derive(clap::Parser)]
pub struct Export {
    #[command(flatten)]
    filter_opts: cli::sharedopts::FilterOpts,

    #[command(flatten)]
    sort_opts: cli::sharedopts::SortOpts,

    /// File to write [default: finance_tracker_<TODAY>.csv in the dashboard
    /// directory]
    ///
    /// Relative paths are resolved against the dashboard directory. An
    /// existing file is overwritten.
    #[arg(short, long, value_name = "PATH")]
    output: Option<std::path::PathBuf>,
}

impl Export {
    pub fn run(&self, rl: &base::Recordlist, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let criteria = self.filter_opts.criteria();
        let mut records = base::filter::filter(rl.iter(), &criteria);
        base::sort::sort(&mut records, self.sort_opts.sort, self.sort_opts.order);

        let csv = base::export::to_csv(records.iter().copied()).context("failed to render CSV")?;
        let path = match self.output {
            Some(ref p) => fs.dir().join(p),
            None => fs
                .dir()
                .join(base::export::filename(base::Date::today())),
        };
        std::fs::write(&path, csv)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        tracing::info!("wrote {} rows to '{}'", records.len(), path.display());

        let mut s = format!(
            "Exported {} transaction(s) to '{}'",
            records.len(),
            path.display()
        );
        if let Some(cli::Output::Str(note)) = cli::util::quarantine_note(rl) {
            s.push('\n');
            s.push_str(&note);
        }
        Ok(cli::Output::Str(s))
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use rstest::rstest;

    use super::*;

    fn run_export(args: &[&str], collection: &str) -> (anyhow::Result<cli::Output>, tempfile::TempDir) {
        let (fs, td) = cli::testing::tempfs();
        cli::testing::StrState::new()
            .with_config("{}")
            .with_collection(collection)
            .to_fs(&fs);
        let root = <cli::Root as clap::Parser>::try_parse_from(args).unwrap();
        (root.run(&fs), td)
    }

    #[rstest]
    #[case(
        &["", "export"],
        "finance_tracker_2025-03-30.csv",
        indoc!("
            Date,Vendor,Category,Amount
            02-04-25,City Metro,Transport,50.00
            15-03-25,Cafe Blue,Food,250.00
            01-03-25,Fresh Mart,Food,100.00"
        ),
    )]
    #[case(
        &["", "export", "--sort", "amount", "--order", "asc", "-o", "out.csv"],
        "out.csv",
        indoc!("
            Date,Vendor,Category,Amount
            02-04-25,City Metro,Transport,50.00
            01-03-25,Fresh Mart,Food,100.00
            15-03-25,Cafe Blue,Food,250.00"
        ),
    )]
    #[case(
        &["", "export", "--category", "Transport", "--output", "t.csv"],
        "t.csv",
        indoc!("
            Date,Vendor,Category,Amount
            02-04-25,City Metro,Transport,50.00"
        ),
    )]
    #[case(
        &["", "export", "--vendor", "nobody", "-o", "empty.csv"],
        "empty.csv",
        "Date,Vendor,Category,Amount",
    )]
    fn test_export(#[case] args: &[&str], #[case] filename: &str, #[case] want: &str) {
        let (res, td) = run_export(args, cli::testing::COLLECTION);
        let path = td.path().join(filename);
        let count = want.lines().count() - 1;
        let want_msg = format!("Exported {} transaction(s) to '{}'", count, path.display());
        cli::testing::ResultMatcher::OkExact(cli::Output::Str(want_msg)).assert_matches(res);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), want);
    }

    #[test]
    fn test_export_reports_malformed_records() {
        let collection = r#"
            {"id":"a","vendor":"v","amount":"Rs. 1","date":"01-03-25","category":"c"}
            {"id":"b","vendor":"v","amount":"1","date":"01-03-25","category":"c"}
            {"id":"c","vendor":"v","amount":1200,"date":"01-03-25","category":"c"}
        "#;
        let (res, _td) = run_export(&["", "export", "-o", "x.csv"], collection);
        cli::testing::ResultMatcher::OkStrGlob(
            "exported 1 transaction(s) to '*x.csv'\nskipped 2 malformed record(s).",
        )
        .assert_matches(res);
    }

    #[test]
    fn test_export_to_missing_directory() {
        let (res, _td) = run_export(
            &["", "export", "-o", "no/such/dir/x.csv"],
            cli::testing::COLLECTION,
        );
        cli::testing::ResultMatcher::ErrGlob("failed to write '*x.csv'*").assert_matches(res);
    }
}
