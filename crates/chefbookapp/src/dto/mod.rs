//! # Transfer Objects
//!
//! A DTO is the flat form of a record: string keys to string values, with list
//! attributes packed into one `;`-joined string (see [`codec`]). DTOs exist only
//! to be written and read by a [`crate::store::DataStore`]. They never validate.
//!
//! ## Tolerance
//!
//! - Reading ([`Dto::from_flat_map`]): a missing key and an empty value are both
//!   "absent". Unknown keys are ignored.
//! - Writing ([`Dto::to_flat_map`]): an absent value is written as `""`.
//!
//! Neither direction can fail, so a file written by an older or newer build
//! still loads.
//!
//! ## Column Order
//!
//! [`Dto::FIELDS`] lists the keys in the order they appear as file columns.
//! Existing files depend on it: append new keys at the end, never reorder.

use std::collections::HashMap;

pub mod booking;
pub mod codec;
pub mod customer;

pub use booking::BookingDto;
pub use customer::{CustomerDto, NoteDto};

pub type FlatMap = HashMap<String, String>;

pub trait Dto: Sized + Clone + PartialEq + Default {
    /// The declared keys, in file column order.
    const FIELDS: &'static [&'static str];

    fn from_flat_map(map: &FlatMap) -> Self;

    fn to_flat_map(&self) -> FlatMap;

    fn declared_fields() -> &'static [&'static str] {
        Self::FIELDS
    }
}

/// Reads a scalar value, treating a missing key and `""` alike.
pub(crate) fn read_value(map: &FlatMap, key: &str) -> Option<String> {
    map.get(key).filter(|value| !value.is_empty()).cloned()
}

pub(crate) fn write_value(map: &mut FlatMap, key: &str, value: &Option<String>) {
    map.insert(key.to_string(), value.clone().unwrap_or_default());
}
