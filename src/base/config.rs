/// Dashboard config.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Prefix every stored amount starts with.
    pub currency_prefix: String,
    /// Terminal width (in columns) below which compact views are rendered.
    pub compact_width: usize,
    pub use_colored_output: bool,
    pub use_unicode_symbols: bool,
}

impl Config {
    pub const DEFAULT_CURRENCY_PREFIX: &str = "Rs. ";
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_prefix: Self::DEFAULT_CURRENCY_PREFIX.to_string(),
            compact_width: 80,
            use_colored_output: false,
            use_unicode_symbols: false,
        }
    }
}

impl std::fmt::Display for Config {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for Config {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl TryFrom<&str> for Config {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
