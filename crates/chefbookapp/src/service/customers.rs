//! Customer queries: lookups by attribute and the upcoming-birthdays report.

use super::Service;
use crate::dto::CustomerDto;
use crate::model::Customer;
use crate::store::DataStore;
use chrono::{Datelike, Days, Local, NaiveDate, Weekday};

/// One entry of the upcoming-birthdays report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday<'a> {
    pub customer: &'a Customer,
    /// The next occurrence of the birthday, on or after the reference day.
    pub date: NaiveDate,
    pub days_until: i64,
    /// When to send greetings: weekend birthdays move to the following Monday.
    pub congratulate_on: NaiveDate,
}

impl<S: DataStore<CustomerDto>> Service<Customer, S> {
    pub fn find_by_name(&self, name: &str) -> Vec<&Customer> {
        self.filter(|customer| customer.name() == Some(name))
    }

    pub fn find_by_phone(&self, phone: &str) -> Vec<&Customer> {
        self.filter(|customer| customer.has_phone(phone))
    }

    pub fn find_by_email(&self, email: &str) -> Vec<&Customer> {
        self.filter(|customer| customer.email() == Some(email))
    }

    pub fn find_by_tag(&self, tag: &str) -> Vec<&Customer> {
        self.filter(|customer| customer.has_tag(tag))
    }

    /// Customers with a note containing `fragment`.
    pub fn find_by_note(&self, fragment: &str) -> Vec<&Customer> {
        self.filter(|customer| customer.has_note(fragment))
    }

    pub fn find_by_birthday(&self, birthday: NaiveDate) -> Vec<&Customer> {
        self.filter(|customer| customer.birthday() == Some(birthday))
    }

    /// All customers ordered by their sorted tag lists. Untagged customers
    /// come first; ties keep stored order.
    pub fn sorted_by_tags(&self) -> Vec<&Customer> {
        let mut customers: Vec<&Customer> = self.records.iter().collect();
        customers.sort_by_cached_key(|customer| {
            customer
                .tags()
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<_>>()
        });
        customers
    }

    pub fn upcoming_birthdays(&self, days_ahead: u32) -> Vec<UpcomingBirthday<'_>> {
        self.upcoming_birthdays_from(Local::now().date_naive(), days_ahead)
    }

    /// Birthdays falling within `days_ahead` days of `today`, both ends
    /// included, nearest first.
    pub fn upcoming_birthdays_from(
        &self,
        today: NaiveDate,
        days_ahead: u32,
    ) -> Vec<UpcomingBirthday<'_>> {
        let window = 0..=i64::from(days_ahead);
        let mut upcoming: Vec<UpcomingBirthday<'_>> = self
            .records
            .iter()
            .filter_map(|customer| {
                let date = next_occurrence(customer.birthday()?, today)?;
                let days_until = (date - today).num_days();
                window.contains(&days_until).then(|| UpcomingBirthday {
                    customer,
                    date,
                    days_until,
                    congratulate_on: congratulation_date(date),
                })
            })
            .collect();
        upcoming.sort_by_key(|entry| entry.days_until);
        upcoming
    }

    fn filter(&self, predicate: impl Fn(&Customer) -> bool) -> Vec<&Customer> {
        self.records
            .iter()
            .filter(|customer| predicate(customer))
            .collect()
    }
}

/// The birthday in `year`. 29 February falls on 28 February in common years.
fn occurrence_in(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, birthday.month(), 28))
}

fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = occurrence_in(birthday, today.year())?;
    if this_year >= today {
        Some(this_year)
    } else {
        occurrence_in(birthday, today.year() + 1)
    }
}

pub fn congratulation_date(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Days::new(2),
        Weekday::Sun => date + Days::new(1),
        _ => date,
    }
}
