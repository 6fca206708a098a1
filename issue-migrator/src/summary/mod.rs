//! Run summary types and helpers.

mod result;
mod run_summary;

pub use result::{ItemKind, ItemResult, ItemStatus};
pub use run_summary::{KindCounts, RunSummary};
