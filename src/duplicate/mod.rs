//! Duplicate artifact detection
//!
//! A logical resource served by more than one physical location on the lookup
//! path makes resolution order-dependent. The checker detects and reports such
//! conflicts; it never decides which copy should win.

pub mod checker;
pub mod report;

pub use checker::DuplicateChecker;
pub use report::{ConflictReport, Severity};
