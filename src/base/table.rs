use crate::base;

const HEADINGS: [&str; 4] = ["Date", "Vendor", "Category", "Amount"];
const GAP: &str = "  ";

/// Records as aligned columns, in the given order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub records: Vec<base::Record>,
}

impl Config {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn cells(r: &base::Record) -> [String; 4] {
        [
            r.date().to_string(),
            r.vendor().to_string(),
            r.category().to_string(),
            r.amount().to_string(),
        ]
    }

    fn widths(&self) -> [usize; 4] {
        let mut widths = HEADINGS.map(|h| h.chars().count());
        for r in self.records.iter() {
            widths[0] = widths[0].max(base::util::DATE_CHARLEN);
            widths[1] = widths[1].max(r.vendor().chars().count());
            widths[2] = widths[2].max(r.category().chars().count());
            widths[3] = widths[3].max(r.amount().charlen());
        }
        widths
    }

    fn write_line<S>(
        f: &mut impl std::fmt::Write,
        cells: &[S; 4],
        widths: &[usize; 4],
    ) -> std::fmt::Result
    where
        S: AsRef<str>,
    {
        for i in 0..3 {
            let cell = cells[i].as_ref();
            f.write_str(cell)?;
            for _ in cell.chars().count()..widths[i] {
                f.write_char(' ')?;
            }
            f.write_str(GAP)?;
        }
        writeln!(f, "{:>width$}", cells[3].as_ref(), width = widths[3])
    }
}

impl std::fmt::Display for Config {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let widths = self.widths();
        Self::write_line(f, &HEADINGS, &widths)?;
        let rules = widths.map(|w| self.charset.dash.to_string().repeat(w));
        Self::write_line(f, &rules, &widths)?;
        for r in self.records.iter() {
            Self::write_line(f, &Self::cells(r), &widths)?;
        }
        Ok(())
    }
}
