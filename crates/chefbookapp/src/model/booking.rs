use super::{trusted_identity, trusted_optional, validated_optional, Record};
use crate::dto::BookingDto;
use crate::fields::{Field, FieldKind, ValidationError};
use chrono::NaiveDateTime;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingInput {
    pub id: Option<String>,
    pub customer_id: Option<String>,
    /// `DD.MM.YYYY HH:MM`
    pub date: Option<String>,
}

/// A table booking made by a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    id: Field,
    customer_id: Option<Field>,
    date: Option<Field>,
}

impl Booking {
    pub fn new(customer_id: &str, date: &str) -> Result<Self, ValidationError> {
        Self::from_validated_input(BookingInput {
            id: None,
            customer_id: Some(customer_id.to_string()),
            date: Some(date.to_string()),
        })
    }

    pub fn from_validated_input(input: BookingInput) -> Result<Self, ValidationError> {
        let id = match input.id {
            Some(id) => Field::new(FieldKind::Identity, id)?,
            None => Field::generate_identity(),
        };
        Ok(Self {
            id,
            customer_id: validated_optional(FieldKind::Identity, input.customer_id.as_deref())?,
            date: validated_optional(FieldKind::DateTime, input.date.as_deref())?,
        })
    }

    pub fn customer_id(&self) -> Option<&str> {
        self.customer_id.as_ref().map(Field::raw)
    }

    pub fn set_customer_id(&mut self, customer_id: &str) -> Result<(), ValidationError> {
        self.customer_id = Some(Field::new(FieldKind::Identity, customer_id)?);
        Ok(())
    }

    pub fn date(&self) -> Option<NaiveDateTime> {
        self.date.as_ref().and_then(Field::as_date_time)
    }

    /// The booking time as stored, `DD.MM.YYYY HH:MM` for valid values.
    pub fn date_str(&self) -> Option<String> {
        self.date.as_ref().map(Field::render)
    }

    pub fn set_date(&mut self, date: &str) -> Result<(), ValidationError> {
        self.date = Some(Field::new(FieldKind::DateTime, date)?);
        Ok(())
    }
}

impl Record for Booking {
    type Dto = BookingDto;

    fn id(&self) -> &str {
        self.id.raw()
    }

    fn dto(&self) -> BookingDto {
        BookingDto {
            id: Some(self.id.render()),
            customer_id: self.customer_id.as_ref().map(Field::render),
            date: self.date.as_ref().map(Field::render),
        }
    }

    fn from_trusted_dto(dto: BookingDto) -> Self {
        Self {
            id: trusted_identity(dto.id),
            customer_id: trusted_optional(FieldKind::Identity, dto.customer_id),
            date: trusted_optional(FieldKind::DateTime, dto.date),
        }
    }
}
