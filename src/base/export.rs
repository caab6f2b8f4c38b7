use crate::base;

pub const HEADER: [&str; 4] = ["Date", "Vendor", "Category", "Amount"];

/// One exported line. The amount has no currency prefix.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Row {
    pub date: String,
    pub vendor: String,
    pub category: String,
    pub amount: String,
}

impl From<&base::Record> for Row {
    fn from(r: &base::Record) -> Self {
        Self {
            date: r.date().to_string(),
            vendor: r.vendor().to_string(),
            category: r.category().to_string(),
            amount: r.amount().plain().to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),
    #[cfg(test)]
    #[error("expected header '{expected}', got '{0}'", expected = HEADER.join(","))]
    Header(String),
}

/// Renders `records`, in the given order, under a [`HEADER`] line. Lines are
/// separated by `\n` with none after the last. Fields are quoted only when
/// they contain a comma, quote or line break.
pub fn to_csv<'a, I>(records: I) -> Result<String, ExportError>
where
    I: IntoIterator<Item = &'a base::Record>,
{
    let mut w = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    w.write_record(HEADER)?;
    let mut count = 0;
    for r in records {
        w.serialize(Row::from(r))?;
        count += 1;
    }
    let bytes = w.into_inner().map_err(|e| e.into_error())?;
    let mut s = String::from_utf8(bytes)?;
    if s.ends_with('\n') {
        s.pop();
    }
    tracing::debug!("exported {} rows", count);
    Ok(s)
}

/// Reads back the output of [`to_csv`].
#[cfg(test)]
pub fn parse_csv(s: &str) -> Result<Vec<Row>, ExportError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(s.as_bytes());
    let headers = rdr.headers()?;
    if headers.iter().ne(HEADER) {
        return Err(ExportError::Header(
            headers.iter().collect::<Vec<_>>().join(","),
        ));
    }
    let rows = rdr.deserialize::<Row>().collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Default export file name, e.g. `finance_tracker_2025-03-30.csv`.
pub fn filename(today: base::Date) -> String {
    format!("finance_tracker_{}.csv", today.iso())
}
