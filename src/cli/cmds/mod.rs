pub mod analysis;
pub mod cats;
pub mod export;
pub mod init;
pub mod insights;
pub mod list;
pub mod overview;
pub mod root;
