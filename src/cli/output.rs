use crate::base;

/// Output of a successful command invocation, to be written to stdout.
#[derive(Debug, PartialEq)]
pub enum Output {
    Str(String),
    Stats(base::tree::forstats::Config),
    Barchart(base::barchart::Config),
    Table(base::table::Config),
    /// Written in order.
    Many(Vec<Output>),
}

const NO_TRANSACTIONS: &str = "No transactions.";

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Str(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::Stats(config) => {
                if config.is_empty() {
                    writeln!(f, "{}", NO_TRANSACTIONS)
                } else {
                    write!(f, "{}", config.to_tree())
                }
            }
            Output::Barchart(config) => {
                if config.is_empty() {
                    writeln!(f, "{}", NO_TRANSACTIONS)
                } else {
                    write!(f, "{}", config.to_barchart())
                }
            }
            Output::Table(config) => {
                if config.is_empty() {
                    writeln!(f, "{}", NO_TRANSACTIONS)
                } else {
                    write!(f, "{}", config)
                }
            }
            Output::Many(outputs) => outputs.iter().try_for_each(|o| write!(f, "{}", o)),
        }
    }
}
