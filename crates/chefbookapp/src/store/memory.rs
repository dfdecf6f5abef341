use super::DataStore;
use crate::dto::Dto;
use crate::error::Result;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore<D> {
    rows: Vec<D>,
    saves: usize,
    deleted: bool,
}

impl<D: Dto> InMemoryStore<D> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            saves: 0,
            deleted: false,
        }
    }

    pub fn with_rows(rows: Vec<D>) -> Self {
        Self {
            rows,
            ..Self::new()
        }
    }

    pub fn rows(&self) -> &[D] {
        &self.rows
    }

    /// How many saves actually wrote rows.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn was_deleted(&self) -> bool {
        self.deleted
    }
}

impl<D: Dto> DataStore<D> for InMemoryStore<D> {
    fn load(&self) -> Vec<D> {
        self.rows.clone()
    }

    fn save(&mut self, items: &[D]) -> Result<()> {
        if items.is_empty() {
            return Ok(());
        }
        self.rows = items.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        self.rows.clear();
        self.deleted = true;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::dto::{BookingDto, CustomerDto};
    use crate::model::{Booking, Customer, Record};

    pub struct StoreFixture {
        pub customers: InMemoryStore<CustomerDto>,
        pub bookings: InMemoryStore<BookingDto>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                customers: InMemoryStore::new(),
                bookings: InMemoryStore::new(),
            }
        }

        pub fn with_customers(mut self, count: usize) -> Self {
            for i in 0..count {
                let customer = Customer::new(&format!("Test Customer {}", i + 1)).unwrap();
                self.customers.rows.push(customer.dto());
            }
            self
        }

        pub fn with_customer(mut self, customer: Customer) -> Self {
            self.customers.rows.push(customer.dto());
            self
        }

        pub fn with_birthday(mut self, name: &str, birthday: &str) -> Self {
            let mut customer = Customer::new(name).unwrap();
            customer.set_birthday(birthday).unwrap();
            self.customers.rows.push(customer.dto());
            self
        }

        pub fn with_booking(mut self, customer_id: &str, date: &str) -> Self {
            let booking = Booking::new(customer_id, date).unwrap();
            self.bookings.rows.push(booking.dto());
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::BookingDto;

    fn dto(id: &str) -> BookingDto {
        BookingDto {
            id: Some(id.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_save_then_load() {
        let mut store = InMemoryStore::new();
        store.save(&[dto("1"), dto("2")]).unwrap();
        assert_eq!(store.load(), vec![dto("1"), dto("2")]);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_empty_save_keeps_rows() {
        let mut store = InMemoryStore::with_rows(vec![dto("1")]);
        store.save(&[]).unwrap();
        assert_eq!(store.load(), vec![dto("1")]);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_delete_clears_rows() {
        let mut store = InMemoryStore::with_rows(vec![dto("1")]);
        store.delete().unwrap();
        assert!(store.load().is_empty());
        assert!(store.was_deleted());
    }
}
