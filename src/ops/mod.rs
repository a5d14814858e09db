//! Cross-version operations

mod diff;

pub use diff::{diff_tries, Diff, DiffEntry};
