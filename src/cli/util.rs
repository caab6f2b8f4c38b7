use crate::base;
use crate::cli;

pub fn charset_from_config(config: &base::Config) -> base::Charset {
    let mut charset = base::Charset::default();
    if config.use_unicode_symbols {
        charset = charset.with_unicode()
    }
    if config.use_colored_output {
        charset = charset.with_color()
    }
    charset
}

/// Returns the terminal width in columns, or 0 if stdout is not a terminal.
#[cfg(not(test))]
pub fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0)
        .unwrap_or_default() as usize
}

#[cfg(test)]
pub fn term_width() -> usize {
    0
}

/// Compact when the terminal is known to be narrower than the configured
/// threshold.
pub fn layout_for_width(config: &base::Config, term_width: usize) -> base::Layout {
    if term_width > 0 && term_width < config.compact_width {
        base::Layout::Compact
    } else {
        base::Layout::Full
    }
}

pub fn parse_month(s: &str) -> Result<base::Choice<u8>, String> {
    match s.parse::<base::Choice<u8>>() {
        Ok(base::Choice::Only(m)) if !(1..=12).contains(&m) => {
            Err(format!("'{}' is not a month between 1 and 12", m))
        }
        Ok(choice) => Ok(choice),
        Err(_) => Err(format!("expected a month between 1 and 12 or 'all', got '{}'", s)),
    }
}

pub fn parse_year(s: &str) -> Result<base::Choice<i32>, String> {
    let bad = || format!("expected a four-digit year or 'all', got '{}'", s);
    if s.eq_ignore_ascii_case(base::Choice::<i32>::ALL) {
        return Ok(base::Choice::All);
    }
    if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad());
    }
    s.parse::<i32>().map(base::Choice::Only).map_err(|_| bad())
}

/// If `fullmatch` is false, ensures all patterns start with and end with
/// `*`, except for empty patterns which are left alone. If `fullmatch` is
/// true, does not modify patterns.
pub fn preprocess_categories<'a>(
    categories: &'a [String],
    fullmatch: bool,
) -> std::borrow::Cow<'a, [String]> {
    if fullmatch {
        return categories.into();
    }
    categories
        .iter()
        .map(|s| {
            let mut s2 = s.clone();
            if s2.is_empty() {
                return s2;
            }
            if !s2.starts_with('*') {
                s2.insert(0, '*');
            }
            if !s2.ends_with('*') {
                s2.push('*');
            }
            s2
        })
        .collect::<Vec<_>>()
        .into()
}

/// Returns the strings matching any wildcard pattern in `patterns`, in their
/// original order.
pub fn match_any<'a, I, T>(items: I, patterns: &[T]) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
    T: AsRef<str>,
{
    let patterns = patterns
        .iter()
        .map(|s| wildmatch::WildMatch::new(s.as_ref()))
        .collect::<Vec<_>>();
    items
        .into_iter()
        .filter(|s| patterns.iter().any(|p| p.matches(s)))
        .collect()
}

/// First line of every report.
pub fn header(rl: &base::Recordlist, criteria: &base::Criteria, shown: usize) -> String {
    let mut s = format!("Showing {} of {} transactions", shown, rl.len());
    match criteria.active_count() {
        0 => {}
        1 => s.push_str(" (1 filter active)"),
        n => s.push_str(&format!(" ({} filters active)", n)),
    }
    s
}

/// Notes the records that were left out because they could not be parsed.
pub fn quarantine_note(rl: &base::Recordlist) -> Option<cli::Output> {
    match rl.quarantined().len() {
        0 => None,
        n => Some(cli::Output::Str(format!("Skipped {} malformed record(s).", n))),
    }
}

/// Formats whole units with the currency prefix, e.g. `Rs. 1,200`.
pub fn money(config: &base::Config, units: i64) -> String {
    format!("{}{}", config.currency_prefix, base::cents::Units(units))
}

/// Formats an exact amount with the currency prefix, or `n/a`.
pub fn exact_money(config: &base::Config, cents: Option<base::Cents>) -> String {
    match cents {
        Some(c) => format!("{}{}", config.currency_prefix, c),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub const NOT_AVAILABLE: &str = "n/a";

/// Category totals with their share of the whole, e.g. `Rs. 350 (87.5%)`.
pub fn category_section(
    config: &base::Config,
    categories: &[base::summary::CategorySpending],
) -> base::tree::forstats::Section {
    categories.iter().fold(
        base::tree::forstats::Section::new("Spending by category"),
        |section, c| {
            let value = format!("{} ({:.1}%)", money(config, c.value), c.percentage);
            section.row(c.name.as_str(), value)
        },
    )
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(
        base::Config {
            use_colored_output: false,
            use_unicode_symbols: false,
            ..base::Config::default()
        },
        base::Charset::default(),
    )]
    #[case(
        base::Config {
            use_colored_output: true,
            use_unicode_symbols: false,
            ..base::Config::default()
        },
        base::Charset::default().with_color(),
    )]
    #[case(
        base::Config {
            use_colored_output: false,
            use_unicode_symbols: true,
            ..base::Config::default()
        },
        base::Charset::default().with_unicode(),
    )]
    #[case(
        base::Config {
            use_colored_output: true,
            use_unicode_symbols: true,
            ..base::Config::default()
        },
        base::Charset::default().with_color().with_unicode(),
    )]
    fn test_charset_from_config(#[case] config: base::Config, #[case] want: base::Charset) {
        let got = charset_from_config(&config);
        assert_eq!(got, want);
    }

    #[rstest]
    #[case(0, base::Layout::Full)]
    #[case(40, base::Layout::Compact)]
    #[case(79, base::Layout::Compact)]
    #[case(80, base::Layout::Full)]
    #[case(200, base::Layout::Full)]
    fn test_layout_for_width(#[case] width: usize, #[case] want: base::Layout) {
        assert_eq!(layout_for_width(&base::Config::default(), width), want)
    }

    #[rstest]
    #[case("all", Ok(base::Choice::All))]
    #[case("1", Ok(base::Choice::Only(1)))]
    #[case("12", Ok(base::Choice::Only(12)))]
    #[case("0", Err(()))]
    #[case("13", Err(()))]
    #[case("March", Err(()))]
    fn test_parse_month(#[case] s: &str, #[case] want: Result<base::Choice<u8>, ()>) {
        assert_eq!(parse_month(s).map_err(|_| ()), want)
    }

    #[rstest]
    #[case("ALL", Ok(base::Choice::All))]
    #[case("2025", Ok(base::Choice::Only(2025)))]
    #[case("25", Err(()))]
    #[case("20255", Err(()))]
    #[case("+202", Err(()))]
    fn test_parse_year(#[case] s: &str, #[case] want: Result<base::Choice<i32>, ()>) {
        assert_eq!(parse_year(s).map_err(|_| ()), want)
    }

    #[rstest]
    #[case(&[], /*fullmatch=*/true, &[])]
    #[case(&[], /*fullmatch=*/false, &[])]
    #[case(
        &["1".into(), "".into(), "2*".into(), "**3*3".into()],
        /*fullmatch=*/true,
        &["1", "", "2*", "**3*3"]
    )]
    #[case(
        &["1".into(), "".into(), "2*".into(), "**3*3".into()],
        /*fullmatch=*/false,
        &["*1*", "","*2*", "**3*3*"]
    )]
    fn test_preprocess_categories(
        #[case] categories: &[String],
        #[case] fullmatch: bool,
        #[case] want: &[&str],
    ) {
        let got = preprocess_categories(categories, fullmatch);
        assert_eq!(got, want);
    }

    #[rstest]
    #[case(&["*"], &["Food", "Fuel", "Transport"])]
    #[case(&["F*"], &["Food", "Fuel"])]
    #[case(&["*o*", "Fuel"], &["Food", "Fuel", "Transport"])]
    #[case(&["food"], &[])]
    #[case(&[], &[])]
    fn test_match_any(#[case] patterns: &[&str], #[case] want: &[&str]) {
        let items = ["Food", "Fuel", "Transport"];
        assert_eq!(match_any(items, patterns), want)
    }

    #[test]
    fn test_header_and_note() {
        let rl = r#"
            {"id":"a","vendor":"v","amount":"Rs. 1","date":"01-03-25","category":"Food"}
            {"id":"b","vendor":"v","amount":"oops","date":"01-03-25","category":"Food"}
        "#
        .parse::<base::Recordlist>()
        .unwrap();
        let mut criteria = base::Criteria::default();
        assert_eq!(header(&rl, &criteria, 1), "Showing 1 of 1 transactions");
        criteria.vendor_search = "x".into();
        assert_eq!(
            header(&rl, &criteria, 0),
            "Showing 0 of 1 transactions (1 filter active)"
        );
        criteria.month = base::Choice::Only(3);
        assert_eq!(
            header(&rl, &criteria, 0),
            "Showing 0 of 1 transactions (2 filters active)"
        );
        assert_eq!(
            quarantine_note(&rl),
            Some(cli::Output::Str("Skipped 1 malformed record(s).".into()))
        );
        assert_eq!(quarantine_note(&base::Recordlist::new()), None);
    }

    #[rstest]
    #[case(None, "n/a")]
    #[case(Some(base::Cents(25000)), "Rs. 250.00")]
    fn test_exact_money(#[case] cents: Option<base::Cents>, #[case] want: &str) {
        assert_eq!(exact_money(&base::Config::default(), cents), want)
    }

    #[test]
    fn test_money() {
        assert_eq!(money(&base::Config::default(), 1200), "Rs. 1,200")
    }
}
