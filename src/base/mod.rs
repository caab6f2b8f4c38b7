pub mod aggregate;
pub mod barchart;
pub mod cents;
pub mod charset;
pub mod collection;
pub mod config;
pub mod date;
pub mod export;
pub mod filter;
pub mod fs;
pub mod record;
pub mod recordlist;
pub mod sort;
pub mod summary;
pub mod table;
pub mod tree;
pub mod util;

pub use aggregate::Aggregate;
pub use cents::Cents;
pub use charset::Charset;
pub use collection::Collection;
pub use config::Config;
pub use date::Date;
pub use date::Month;
pub use filter::Choice;
pub use filter::Criteria;
pub use fs::Fs;
pub use record::Document;
pub use record::Record;
pub use recordlist::Recordlist;
pub use sort::Direction;
pub use sort::SortKey;
pub use summary::Layout;
pub use summary::Summary;
pub use tree::Tree;
