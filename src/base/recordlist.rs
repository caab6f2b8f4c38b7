use crate::base;

/// The loaded transactions, newest first, plus the documents that could not
/// be parsed. Never modified after loading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recordlist {
    records: Vec<base::Record>,
    quarantined: Vec<Quarantined>,
}

/// A stored document excluded from every view because it failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quarantined {
    /// Storage identifier, when the document carries one.
    pub id: Option<String>,
    pub error: base::record::ParseError,
}

impl Recordlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses every document. Records are ordered by date descending; records
    /// sharing a date keep their storage order.
    pub fn load(collection: base::Collection, currency_prefix: &str) -> Self {
        let mut rl = Self::new();
        for (i, value) in collection.into_iter().enumerate() {
            let id = base::Document::id_of(&value);
            let parsed = base::Document::try_from(value)
                .map_err(|e| base::record::ParseError::Shape(e.to_string()))
                .and_then(|doc| base::Record::from_document(doc, currency_prefix));
            match parsed {
                Ok(r) => rl.records.push(r),
                Err(error) => {
                    let name = match id {
                        Some(ref id) => format!("'{}'", id),
                        None => format!("#{}", i + 1),
                    };
                    tracing::warn!("skipping document {}: {}", name, error_chain(&error));
                    rl.quarantined.push(Quarantined { id, error });
                }
            }
        }
        rl.records.sort_by(|a, b| b.date().cmp(&a.date()));
        tracing::debug!(
            "loaded {} records, skipped {}",
            rl.records.len(),
            rl.quarantined.len()
        );
        rl
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &base::Record> {
        self.records.iter()
    }

    pub fn quarantined(&self) -> &[Quarantined] {
        &self.quarantined
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.iter()
            .map(base::Record::category)
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Distinct years, newest first.
    pub fn years(&self) -> Vec<i32> {
        let mut years = self.iter().map(|r| r.date().year()).collect::<Vec<_>>();
        years.sort_unstable_by(|a, b| b.cmp(a));
        years.dedup();
        years
    }
}

fn error_chain(e: &dyn std::error::Error) -> String {
    let mut s = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        s.push_str(": ");
        s.push_str(&cause.to_string());
        source = cause.source();
    }
    s
}

impl std::str::FromStr for Recordlist {
    type Err = base::collection::ParseError;

    /// Parses a collection and loads it with the default currency prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let collection = s.parse::<base::Collection>()?;
        Ok(Self::load(
            collection,
            base::Config::DEFAULT_CURRENCY_PREFIX,
        ))
    }
}

impl TryFrom<&str> for Recordlist {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
