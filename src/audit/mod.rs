//! Activity log for Haven
//!
//! Records changes to panel inputs, stash deposits and checklist progress
//! in an append-only JSONL file.
//!
//! # Architecture
//!
//! - `AuditEntry`: one log line with timestamp, operation, entity
//!   information and an optional snapshot of the entity after the change.
//! - `AuditLogger`: appends entries, reads them back, and purges every
//!   entry about one entity type (used when the stash is wiped).

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
