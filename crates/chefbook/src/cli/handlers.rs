//! Command handlers for the chefbook CLI.
//!
//! [`App`] receives its services ready-made, so the same handlers run against
//! CSV files in production and in-memory stores in tests. Each handler returns
//! the text to print; nothing here writes to stdout.
//!
//! Rules that belong to this client rather than to the core:
//! - customer names are unique: `add` and `set --name` refuse a taken name,
//!   and commands address customers by name;
//! - deleting a customer cancels their bookings;
//! - every mutating command saves the services it touched before returning.

use super::args::{Command, FindBy, NoteCommand, PhoneCommand};
use super::render;
use anyhow::{bail, Result};
use chefbookapp::dto::{BookingDto, CustomerDto};
use chefbookapp::error::ChefbookError;
use chefbookapp::fields::{Field, FieldKind};
use chefbookapp::model::{Booking, Customer, CustomerInput, PhoneEdit, Record};
use chefbookapp::service::{BookingService, CustomerService};
use chefbookapp::store::DataStore;
use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

pub struct App<C, B>
where
    C: DataStore<CustomerDto>,
    B: DataStore<BookingDto>,
{
    customers: CustomerService<C>,
    bookings: BookingService<B>,
    birthday_window: u32,
    now: NaiveDateTime,
}

fn customer_not_found(name: &str) -> ChefbookError {
    ChefbookError::NotFound(format!("customer '{}'", name))
}

fn note_not_found(name: &str, index: usize) -> ChefbookError {
    ChefbookError::NotFound(format!("note {} of '{}'", index, name))
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    let field = Field::new(FieldKind::Date, raw)?;
    match field.as_date() {
        Some(date) => Ok(date),
        None => bail!("'{}' is not a date", raw),
    }
}

impl<C, B> App<C, B>
where
    C: DataStore<CustomerDto>,
    B: DataStore<BookingDto>,
{
    pub fn new(
        customers: CustomerService<C>,
        bookings: BookingService<B>,
        birthday_window: u32,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            customers,
            bookings,
            birthday_window,
            now,
        }
    }

    pub fn customers(&self) -> &CustomerService<C> {
        &self.customers
    }

    pub fn bookings(&self) -> &BookingService<B> {
        &self.bookings
    }

    pub fn dispatch(&mut self, command: Command) -> Result<String> {
        debug!(?command, "dispatching");
        match command {
            Command::Add {
                name,
                phones,
                birthday,
                email,
                address,
            } => self.add(CustomerInput {
                id: None,
                name: Some(name),
                phones,
                birthday,
                address,
                email,
                notes: Vec::new(),
            }),
            Command::Show { name } => Ok(render::customer_detail(self.customer(&name)?)),
            Command::List => Ok(render::customer_list(
                &self.customers.iter().collect::<Vec<_>>(),
            )),
            Command::Delete { name } => self.delete(&name),
            Command::Set {
                name,
                new_name,
                birthday,
                email,
                address,
            } => self.set(&name, new_name, birthday, email, address),
            Command::Unset {
                name,
                birthday,
                email,
                address,
            } => self.unset(&name, birthday, email, address),
            Command::Phone { action } => self.phone(action),
            Command::Note { action } => self.note(action),
            Command::Find(by) => self.find(by),
            Command::ByTags => Ok(render::tagged_customer_list(
                &self.customers.sorted_by_tags(),
            )),
            Command::Birthdays { days } => {
                let days = days.unwrap_or(self.birthday_window);
                let upcoming = self
                    .customers
                    .upcoming_birthdays_from(self.now.date(), days);
                Ok(render::birthdays(&upcoming, days))
            }
            Command::Book { name, date } => self.book(&name, &date),
            Command::Bookings { customer, on } => self.list_bookings(customer, on),
            Command::Cancel { id } => self.cancel(&id),
            Command::Reset { yes } => self.reset(yes),
        }
    }

    // --- Lookup ---

    fn customer(&self, name: &str) -> Result<&Customer> {
        self.customers
            .find_by_name(name)
            .into_iter()
            .next()
            .ok_or_else(|| customer_not_found(name).into())
    }

    fn customer_mut(&mut self, name: &str) -> Result<&mut Customer> {
        let id = self.customer(name)?.id().to_string();
        match self.customers.find_mut(&id) {
            Some(customer) => Ok(customer),
            None => Err(customer_not_found(name).into()),
        }
    }

    fn ensure_name_free(&self, name: &str) -> Result<()> {
        if !self.customers.find_by_name(name).is_empty() {
            bail!("A customer named '{}' already exists", name);
        }
        Ok(())
    }

    fn customer_name(&self, id: &str) -> Option<&str> {
        self.customers.find(id).and_then(Customer::name)
    }

    // --- Persistence ---

    fn save_customers(&mut self) -> Result<()> {
        if self.customers.is_empty() {
            self.customers.clear()?;
        } else {
            self.customers.save()?;
        }
        Ok(())
    }

    fn save_bookings(&mut self) -> Result<()> {
        if self.bookings.is_empty() {
            self.bookings.clear()?;
        } else {
            self.bookings.save()?;
        }
        Ok(())
    }

    // --- Customers ---

    fn add(&mut self, input: CustomerInput) -> Result<String> {
        if let Some(name) = &input.name {
            self.ensure_name_free(name)?;
        }
        let customer = Customer::from_validated_input(input)?;
        let message = format!("Added customer {}.", customer.name().unwrap_or_default());
        self.customers.add(customer);
        self.save_customers()?;
        Ok(render::success(&message))
    }

    fn delete(&mut self, name: &str) -> Result<String> {
        let id = self.customer(name)?.id().to_string();
        self.customers.delete(&id);
        let cancelled = self.bookings.delete_for_customer(&id);
        self.save_customers()?;
        if cancelled > 0 {
            self.save_bookings()?;
        }
        let mut message = format!("Deleted customer {}.", name);
        if cancelled > 0 {
            message.push_str(&format!(" Cancelled {} booking(s).", cancelled));
        }
        Ok(render::success(&message))
    }

    fn set(
        &mut self,
        name: &str,
        new_name: Option<String>,
        birthday: Option<String>,
        email: Option<String>,
        address: Option<String>,
    ) -> Result<String> {
        if new_name.is_none() && birthday.is_none() && email.is_none() && address.is_none() {
            return Ok(render::warning("Nothing to change."));
        }
        if let Some(new_name) = new_name.as_deref().filter(|new_name| *new_name != name) {
            self.ensure_name_free(new_name)?;
        }

        let customer = self.customer_mut(name)?;
        let mut updated = customer.clone();
        if let Some(value) = &new_name {
            updated.set_name(value)?;
        }
        if let Some(value) = &birthday {
            updated.set_birthday(value)?;
        }
        if let Some(value) = &email {
            updated.set_email(value)?;
        }
        if let Some(value) = &address {
            updated.set_address(value)?;
        }
        *customer = updated;

        self.save_customers()?;
        let shown = new_name.as_deref().unwrap_or(name);
        Ok(render::success(&format!("Updated customer {}.", shown)))
    }

    fn unset(&mut self, name: &str, birthday: bool, email: bool, address: bool) -> Result<String> {
        if !(birthday || email || address) {
            return Ok(render::warning("Nothing to change."));
        }
        let customer = self.customer_mut(name)?;
        if birthday {
            customer.clear_birthday();
        }
        if email {
            customer.clear_email();
        }
        if address {
            customer.clear_address();
        }
        self.save_customers()?;
        Ok(render::success(&format!("Updated customer {}.", name)))
    }

    fn phone(&mut self, action: PhoneCommand) -> Result<String> {
        let message = match action {
            PhoneCommand::Add { name, phone } => {
                self.customer_mut(&name)?.add_phone(&phone)?;
                format!("Added phone {} to {}.", phone, name)
            }
            PhoneCommand::Edit { name, old, new } => {
                match self.customer_mut(&name)?.edit_phone(&old, &new)? {
                    PhoneEdit::Replaced => format!("Replaced phone {} with {} for {}.", old, new, name),
                    PhoneEdit::Added => {
                        format!("Phone {} was not on record; added {} to {}.", old, new, name)
                    }
                }
            }
            PhoneCommand::Remove { name, phone } => {
                if !self.customer_mut(&name)?.remove_phone(&phone) {
                    return Err(ChefbookError::NotFound(format!(
                        "phone {} of '{}'",
                        phone, name
                    ))
                    .into());
                }
                format!("Removed phone {} from {}.", phone, name)
            }
        };
        self.save_customers()?;
        Ok(render::success(&message))
    }

    fn note(&mut self, action: NoteCommand) -> Result<String> {
        let message = match action {
            NoteCommand::Add { name, text, tags } => {
                let index = self.customer_mut(&name)?.add_note(&text, &tags)?;
                format!("Added note {} to {}.", index, name)
            }
            NoteCommand::Edit {
                name,
                index,
                text,
                tags,
            } => {
                if !self.customer_mut(&name)?.edit_note(index, &text, &tags)? {
                    return Err(note_not_found(&name, index).into());
                }
                format!("Updated note {} of {}.", index, name)
            }
            NoteCommand::Remove { name, index } => {
                if self.customer_mut(&name)?.remove_note(index).is_none() {
                    return Err(note_not_found(&name, index).into());
                }
                format!("Removed note {} from {}.", index, name)
            }
            NoteCommand::Tag { name, index, tag } => {
                if !self.customer_mut(&name)?.add_tag_to_note(index, &tag)? {
                    return Err(note_not_found(&name, index).into());
                }
                format!("Tagged note {} of {} with #{}.", index, name, tag)
            }
            NoteCommand::Untag { name, index, tag } => {
                if !self.customer_mut(&name)?.remove_tag_from_note(index, &tag) {
                    return Err(note_not_found(&name, index).into());
                }
                format!("Removed #{} from note {} of {}.", tag, index, name)
            }
        };
        self.save_customers()?;
        Ok(render::success(&message))
    }

    fn find(&self, by: FindBy) -> Result<String> {
        let found = if let Some(name) = by.name {
            self.customers.find_by_name(&name)
        } else if let Some(phone) = by.phone {
            self.customers.find_by_phone(&phone)
        } else if let Some(email) = by.email {
            self.customers.find_by_email(&email)
        } else if let Some(tag) = by.tag {
            self.customers.find_by_tag(&tag)
        } else if let Some(note) = by.note {
            self.customers.find_by_note(&note)
        } else if let Some(birthday) = by.birthday {
            self.customers.find_by_birthday(parse_date(&birthday)?)
        } else {
            Vec::new()
        };
        Ok(render::customer_list(&found))
    }

    // --- Bookings ---

    fn book(&mut self, name: &str, date: &str) -> Result<String> {
        let customer_id = self.customer(name)?.id().to_string();
        let booking = Booking::new(&customer_id, date)?;
        let message = format!(
            "Booked {} for {} (booking {}).",
            name,
            booking.date_str().unwrap_or_default(),
            booking.id()
        );
        self.bookings.add(booking);
        self.save_bookings()?;
        Ok(render::success(&message))
    }

    fn list_bookings(&self, customer: Option<String>, on: Option<String>) -> Result<String> {
        let customer_id = match &customer {
            Some(name) => Some(self.customer(name)?.id().to_string()),
            None => None,
        };
        let day = on.as_deref().map(parse_date).transpose()?;

        let mut bookings = match (day, &customer_id) {
            (Some(day), _) => self.bookings.find_on_date(day),
            (None, Some(id)) => self.bookings.find_by_customer(id),
            (None, None) => self.bookings.upcoming_from(self.now),
        };
        if let (Some(_), Some(id)) = (day, &customer_id) {
            bookings.retain(|booking| booking.customer_id() == Some(id.as_str()));
        }

        let rows: Vec<(&Booking, Option<&str>)> = bookings
            .into_iter()
            .map(|booking| {
                let name = booking.customer_id().and_then(|id| self.customer_name(id));
                (booking, name)
            })
            .collect();
        Ok(render::booking_list(&rows))
    }

    fn cancel(&mut self, id: &str) -> Result<String> {
        if self.bookings.delete(id) == 0 {
            return Err(ChefbookError::NotFound(format!("booking '{}'", id)).into());
        }
        self.save_bookings()?;
        Ok(render::success(&format!("Cancelled booking {}.", id)))
    }

    fn reset(&mut self, yes: bool) -> Result<String> {
        if !yes {
            bail!("Refusing to delete all data without --yes");
        }
        let count = (self.customers.len(), self.bookings.len());
        self.customers.clear()?;
        self.bookings.clear()?;
        Ok(render::success(&format!(
            "Deleted {} customer(s) and {} booking(s).",
            count.0, count.1
        )))
    }

    #[cfg(test)]
    fn birthday_date(&self, name: &str) -> Option<String> {
        self.customer(name)
            .ok()
            .and_then(Customer::birthday)
            .map(render::date)
    }
}
