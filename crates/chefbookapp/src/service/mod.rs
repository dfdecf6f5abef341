//! # Services
//!
//! A [`Service`] is the in-memory collection of one record type plus the store
//! it came from. It is the surface UI clients work against.
//!
//! ## Lifecycle
//!
//! ```text
//! Service::new(store)      store.load() -> DTOs -> Record::from_trusted_dto
//!        │
//!        ▼
//!   add / find_mut / delete   (any number of times, memory only)
//!        │
//!        ▼
//! save()  -> every record's DTO -> store.save()     (whole file rewritten)
//! clear() -> records emptied    -> store.delete()
//! ```
//!
//! Unsaved changes are lost if the process stops before `save`. Because
//! `store.save` ignores an empty collection, saving after the last record was
//! deleted leaves the old file in place; use `clear` for that case.
//!
//! ## Generic Over DataStore
//!
//! `Service<R, S: DataStore<R::Dto>>`:
//! - Production: `Service<Customer, CsvFileStore<CustomerDto>>`
//! - Testing: `Service<Customer, InMemoryStore<CustomerDto>>`
//!
//! Lookups are linear scans over a `Vec`. Identity uniqueness is not enforced
//! here; records created through `from_validated_input` get fresh identities.
//!
//! Record-specific queries live in [`customers`] and [`bookings`].

use crate::error::Result;
use crate::model::{Booking, Customer, Record};
use crate::store::DataStore;
use tracing::debug;

pub mod bookings;
pub mod customers;

pub use customers::UpcomingBirthday;

pub type CustomerService<S> = Service<Customer, S>;
pub type BookingService<S> = Service<Booking, S>;

pub struct Service<R: Record, S: DataStore<R::Dto>> {
    store: S,
    records: Vec<R>,
}

impl<R: Record, S: DataStore<R::Dto>> Service<R, S> {
    pub fn new(store: S) -> Self {
        let records: Vec<R> = store
            .load()
            .into_iter()
            .map(R::from_trusted_dto)
            .collect();
        debug!(records = records.len(), "service hydrated");
        Self { store, records }
    }

    pub fn add(&mut self, record: R) {
        self.records.push(record);
    }

    pub fn find(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut R> {
        self.records.iter_mut().find(|record| record.id() == id)
    }

    /// Removes every record with this identity and returns how many went.
    pub fn delete(&mut self, id: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        before - self.records.len()
    }

    pub fn save(&mut self) -> Result<()> {
        let dtos: Vec<R::Dto> = self.records.iter().map(Record::dto).collect();
        self.store.save(&dtos)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.records.clear();
        self.store.delete()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<'a, R: Record, S: DataStore<R::Dto>> IntoIterator for &'a Service<R, S> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
