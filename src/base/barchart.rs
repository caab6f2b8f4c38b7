use crate::base;

/// Horizontal bars scaled so that the largest value spans the available
/// width.
pub struct Barchart<'a> {
    charset: &'a base::Charset,
    bars: &'a [(String, i64)],
    label_charlen: usize,
    max_val: i64,
    max_barlen: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub term_width: usize,
    /// Label and non-negative value in whole currency units, top to bottom.
    pub bars: Vec<(String, i64)>,
}

impl Config {
    /// One bar per month, oldest first.
    pub fn monthly(
        charset: base::Charset,
        term_width: usize,
        monthly: &[base::summary::MonthlySpending],
    ) -> Self {
        Self {
            charset,
            term_width,
            bars: monthly
                .iter()
                .map(|m| (m.month.to_string(), m.total))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn to_barchart(&self) -> Barchart<'_> {
        let label_charlen = self
            .bars
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or_default();
        let max_val = self
            .bars
            .iter()
            .map(|&(_, v)| v)
            .max()
            .unwrap_or_default();
        let max_barlen = self
            .term_width
            .max(base::util::MIN_TERM_WIDTH)
            .saturating_sub(label_charlen)
            .saturating_sub(base::util::BOUNDING_SPACES_COUNT)
            .saturating_sub(1) // vertical divider just before bar
            .saturating_sub(base::cents::Units(max_val).to_string().len());
        Barchart {
            charset: &self.charset,
            bars: &self.bars,
            label_charlen,
            max_val,
            max_barlen,
        }
    }
}

impl Barchart<'_> {
    fn barlen(&self, val: i64) -> usize {
        if self.max_val <= 0 || val <= 0 {
            return 0;
        }
        let x = (val as f64) / (self.max_val as f64) * (self.max_barlen as f64);
        self.max_barlen.min(x.round() as usize)
    }

    fn draw(&self, w: &mut impl std::fmt::Write, label: &str, val: i64) -> std::fmt::Result {
        write!(w, "{}", label)?;
        for _ in label.chars().count()..self.label_charlen {
            w.write_char(' ')?;
        }
        write!(w, " {}", self.charset.chart_axis)?;
        let barlen = self.barlen(val);
        if barlen > 0 {
            let mut bars = self.charset.chart_bar.to_string().repeat(barlen);
            if self.charset.color {
                bars = colored::Colorize::green(bars.as_str()).to_string();
            }
            w.write_str(&bars)?;
            w.write_char(' ')?;
        }
        writeln!(w, "{}", base::cents::Units(val))
    }
}

impl std::fmt::Display for Barchart<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (label, val) in self.bars.iter() {
            self.draw(f, label, *val)?;
        }
        Ok(())
    }
}
