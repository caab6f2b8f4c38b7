use anyhow::Context;
use tracing::level_filters::LevelFilter;

use crate::base;
use crate::cli;

/// Terminal spending dashboard
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, global = true, value_name = "LEVEL", default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    Overview(cli::cmds::overview::Overview),
    List(cli::cmds::list::List),
    Analysis(cli::cmds::analysis::Analysis),
    Insights(cli::cmds::insights::Insights),
    Export(cli::cmds::export::Export),
    Cats(cli::cmds::cats::Cats),
}

impl Root {
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn run(self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        if let Commands::Init(cmd) = self.command {
            return cmd.run(fs);
        }

        if !fs.is_dashboard() {
            anyhow::bail!("not a dashboard directory")
        }
        let config = fs
            .read::<base::Config>()
            .with_context(|| format!("failed to read '{}'", fs.path::<base::Config>().display()))?;
        let collection = fs.read::<base::Collection>().with_context(|| {
            format!(
                "failed to read '{}'",
                fs.path::<base::Collection>().display()
            )
        })?;
        let rl = base::Recordlist::load(collection, &config.currency_prefix);

        match self.command {
            Commands::Init(_) => unreachable!(),
            Commands::Overview(cmd) => cmd.run(&rl, &config),
            Commands::List(cmd) => cmd.run(&rl, &config),
            Commands::Analysis(cmd) => cmd.run(&rl, &config),
            Commands::Insights(cmd) => cmd.run(&rl, &config),
            Commands::Export(cmd) => cmd.run(&rl, fs),
            Commands::Cats(cmd) => cmd.run(&rl),
        }
    }
}
