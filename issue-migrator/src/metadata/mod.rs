//! Labels and milestones.
//!
//! Collects the distinct labels and milestones used by the snapshot, then
//! makes sure each one exists in the target before any issue is created.

mod collect;
mod labels;
mod milestones;

pub use collect::{collect_metadata, CollectedMetadata};
pub use labels::provision_labels;
pub use milestones::{new_milestone, parse_due_on, provision_milestones, MilestoneNumbers};
