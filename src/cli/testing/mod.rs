mod case;
mod resultmatcher;
mod state;

pub use case::Case;
pub use case::Invocation;
pub use case::MutCase;
pub(crate) use case::generate_testcases;
pub use resultmatcher::ResultMatcher;
pub use state::State;
pub use state::StrState;
pub use state::tempfs;

/// Three parsed transactions spanning two months and two categories.
pub const COLLECTION: &str = r#"
    {"id":"a","vendor":"Fresh Mart","amount":"Rs. 100.00","date":"01-03-25","category":"Food"}
    {"id":"b","vendor":"Cafe Blue","amount":"Rs. 250.00","date":"15-03-25","category":"Food"}
    {"id":"c","vendor":"City Metro","amount":"Rs. 50.00","date":"02-04-25","category":"Transport"}
"#;
