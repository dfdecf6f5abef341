//! # Storage Layer
//!
//! The [`DataStore`] trait persists a whole collection of DTOs at once. A
//! service loads everything when it starts and writes everything back when it
//! saves; there are no per-record writes.
//!
//! ## Contract
//!
//! - `load` never fails. A missing file is an empty collection. A file that is
//!   present but damaged yields the rows that could be read; the rest are
//!   logged and skipped. A broken file must not stop the program from starting.
//! - `save` with no items writes nothing, leaving any existing file as it was.
//!   Use `delete` to clear a store.
//! - `save` failures propagate. Losing a write silently is never acceptable.
//! - `delete` of a file that does not exist succeeds.
//!
//! ## Implementations
//!
//! - [`csv_file::CsvFileStore`]: one CSV file per record type. The header row
//!   is [`Dto::FIELDS`] in order, then one row per DTO. Writes go to a
//!   temporary file that is renamed over the target.
//! - [`memory::InMemoryStore`]: keeps rows in memory, for testing services
//!   without touching the filesystem.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── customers.csv   # id,name,phones,birthday,address,email,notes
//! └── bookings.csv    # id,customer_id,date
//! ```
//!
//! Nothing coordinates two processes using the same file: the last save wins.

use crate::dto::Dto;
use crate::error::Result;

pub mod csv_file;
pub mod memory;

pub use csv_file::CsvFileStore;
pub use memory::InMemoryStore;

/// Whole-collection persistence for one DTO type.
pub trait DataStore<D: Dto> {
    /// Read every stored item, in stored order.
    fn load(&self) -> Vec<D>;

    /// Replace the stored collection with `items`. A no-op when `items` is empty.
    fn save(&mut self, items: &[D]) -> Result<()>;

    /// Remove the stored collection entirely.
    fn delete(&mut self) -> Result<()>;
}
