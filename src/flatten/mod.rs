//! Flattening nested JSON into path-keyed records, and CSV tabulation
//!
//! `flatten` projects one nested object into a single-level map with
//! dotted/bracketed path keys; `tabulate`/`write_csv` turn a sequence of
//! such objects into a fully quoted CSV table whose columns are the sorted
//! union of every key seen.

pub mod flattener;
pub mod table;

pub use flattener::{flatten, flatten_with};
pub use table::{tabulate, write_csv};
