use crate::base;

/// A transaction as it is stored: every field is a string, and the storage
/// identifier lives in `id`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Document {
    pub id: String,
    pub vendor: String,
    pub amount: String,
    pub date: String,
    pub category: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl TryFrom<serde_json::Value> for Document {
    type Error = serde_json::Error;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        serde_json::from_value(value)
    }
}

impl Document {
    /// The storage identifier of a stored value of any shape, if it has a
    /// string or numeric `id`.
    pub fn id_of(value: &serde_json::Value) -> Option<String> {
        match value.get("id")? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// Debit/credit tag. Carried along but not consulted by any filter or total.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::VariantNames,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Kind {
    Debit,
    Credit,
}

/// A parsed transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: String,
    vendor: String,
    amount: base::Cents,
    date: base::Date,
    category: String,
    kind: Option<Kind>,
}

impl Record {
    #[cfg(test)]
    pub fn new(
        id: String,
        vendor: String,
        amount: base::Cents,
        date: base::Date,
        category: String,
    ) -> Self {
        Self {
            id,
            vendor,
            amount,
            date,
            category,
            kind: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn amount(&self) -> base::Cents {
        self.amount
    }

    pub fn date(&self) -> base::Date {
        self.date
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    #[allow(dead_code)]
    pub fn kind(&self) -> Option<Kind> {
        self.kind
    }

    /// Converts a stored document, stripping `currency_prefix` from its
    /// amount. An empty or unrecognized `type` leaves [`Record::kind`] unset.
    pub fn from_document(doc: Document, currency_prefix: &str) -> Result<Self, ParseError> {
        let amount =
            base::Cents::parse_prefixed(&doc.amount, currency_prefix).map_err(|source| {
                ParseError::Amount {
                    value: doc.amount.clone(),
                    source,
                }
            })?;
        let date = doc
            .date
            .parse::<base::Date>()
            .map_err(ParseError::Date)?;
        Ok(Self {
            kind: doc.kind.parse::<Kind>().ok(),
            id: doc.id,
            vendor: doc.vendor,
            amount,
            date,
            category: doc.category,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("not a transaction document: {0}")]
    Shape(String),
    #[error("invalid amount '{value}'")]
    Amount {
        value: String,
        source: base::cents::AmountError,
    },
    #[error("invalid date")]
    Date(#[source] base::date::ParseError),
}
