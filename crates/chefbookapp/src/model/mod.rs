//! # Domain Model
//!
//! Records are built from [`crate::fields`] and come into existence one of two
//! ways, and the call site always says which:
//!
//! - `from_validated_input`: for anything a person typed. Every supplied value
//!   is validated; the first bad one is returned as a [`ValidationError`].
//! - `from_trusted_dto`: for hydration from storage. Nothing is validated, so a
//!   value saved under older rules is kept rather than rejected.
//!
//! Either way the record gets an identity. A supplied one is kept; otherwise a
//! new UUID is generated once and never changes afterwards.
//!
//! Setters validate. Getters return `None` for unset attributes.
//!
//! [`ValidationError`]: crate::fields::ValidationError

use crate::dto::Dto;
use crate::fields::{Field, FieldKind};

pub mod booking;
pub mod customer;

pub use booking::{Booking, BookingInput};
pub use customer::{Customer, CustomerInput, PhoneEdit};

/// A record that can be kept in a [`crate::service::Service`].
pub trait Record: Sized {
    type Dto: Dto;

    fn id(&self) -> &str;

    fn dto(&self) -> Self::Dto;

    fn from_trusted_dto(dto: Self::Dto) -> Self;
}

/// Keeps a stored identity if there is one, otherwise issues a new one.
pub(crate) fn trusted_identity(raw: Option<String>) -> Field {
    match raw {
        Some(id) if !id.is_empty() => Field::trusted(FieldKind::Identity, id),
        _ => Field::generate_identity(),
    }
}

pub(crate) fn trusted_optional(kind: FieldKind, raw: Option<String>) -> Option<Field> {
    raw.filter(|value| !value.is_empty())
        .map(|value| Field::trusted(kind, value))
}

pub(crate) fn validated_optional(
    kind: FieldKind,
    raw: Option<&str>,
) -> Result<Option<Field>, crate::fields::ValidationError> {
    raw.map(|value| Field::new(kind, value)).transpose()
}
