pub mod config;
pub mod error;
pub mod jsonl;
pub mod merge;
pub mod models;

pub use crate::config::ConvoSyncConfig;
pub use error::{ConvoSyncError, Result};
pub use jsonl::{load_conversation, read_records, save_conversation, write_records};
pub use merge::{merge, merge_with_report, MergeReport, Merged};
pub use models::record::Record;
