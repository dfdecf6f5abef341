//! # Chefbook Architecture
//!
//! Chefbook keeps a restaurant's customers and their table bookings in plain
//! CSV files. This crate is the UI-agnostic core; the `chefbook` binary is one
//! client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │ UI client (chefbook CLI)                         │  parses input, renders output
//! ├──────────────────────────────────────────────────┤
//! │ service::Service<R, S>                           │  CRUD and domain queries
//! ├──────────────────────────────────────────────────┤
//! │ model: Customer, Booking (Record)                │  records made of validated fields
//! ├──────────────────────────────────────────────────┤
//! │ dto: CustomerDto, BookingDto                     │  flat string maps, never validate
//! ├──────────────────────────────────────────────────┤
//! │ store::DataStore (CsvFileStore, InMemoryStore)   │  whole-collection persistence
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! Data flows down on save (`Record::dto` then `DataStore::save`) and up on
//! load (`DataStore::load` then `Record::from_trusted_dto`).
//!
//! ## Validation Boundary
//!
//! Everything a user types passes through [`fields::Field::new`] and can be
//! rejected with a [`fields::ValidationError`]. Everything read back from disk
//! goes through the trusted path and is never rejected, so a file written under
//! older rules keeps loading.
//!
//! ## Persistence
//!
//! Each service holds its full collection in memory. Nothing reaches disk until
//! `save`, which rewrites the whole file. See [`store`] for the file format and
//! failure semantics.
//!
//! ## Testing
//!
//! Services are generic over [`store::DataStore`], so business logic is tested
//! against [`store::InMemoryStore`]; fixtures live in `store::memory::fixtures`
//! behind the `test_utils` feature. File behavior is covered by the
//! integration tests against temporary directories.

pub mod config;
pub mod dto;
pub mod error;
pub mod fields;
pub mod model;
pub mod service;
pub mod store;
