use anyhow::Context;

use crate::base;
use crate::cli;

/// Initialize a dashboard in the current directory
#[derive(clap::Parser)]
pub struct Init {
    /// Restore an existing dashboard's config to defaults
    #[arg(long)]
    reset_config: bool,
}

fn initial_config() -> base::Config {
    base::Config {
        use_colored_output: true,
        use_unicode_symbols: true,
        ..Default::default()
    }
}

impl Init {
    pub fn run(&self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let already_dashboard = fs.is_dashboard();

        let path = fs.path::<base::Config>();
        let config = if self.reset_config || !already_dashboard {
            initial_config()
        } else {
            fs.read::<base::Config>()
                .with_context(|| format!("failed to read '{}'", path.display()))?
        };
        fs.write(&config)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        tracing::info!("wrote '{}'", path.display());

        Ok(if !already_dashboard {
            cli::Output::Str(format!(
                "Dashboard initialized in '{}'",
                fs.dir().display()
            ))
        } else if self.reset_config {
            cli::Output::Str("Dashboard configuration reset to defaults.".to_string())
        } else {
            cli::Output::Str(format!(
                "Dashboard reinitialized in '{}'",
                fs.dir().display()
            ))
        })
    }
}
