use super::Service;
use crate::dto::BookingDto;
use crate::model::Booking;
use crate::store::DataStore;
use chrono::{NaiveDate, NaiveDateTime};

impl<S: DataStore<BookingDto>> Service<Booking, S> {
    pub fn find_by_customer(&self, customer_id: &str) -> Vec<&Booking> {
        self.records
            .iter()
            .filter(|booking| booking.customer_id() == Some(customer_id))
            .collect()
    }

    pub fn find_on_date(&self, date: NaiveDate) -> Vec<&Booking> {
        self.find_between(date, date)
    }

    /// Bookings from `start` through `end`, both days included, in
    /// chronological order. Bookings without a readable time never match.
    pub fn find_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Booking> {
        self.chronological(|at| (start..=end).contains(&at.date()))
    }

    /// Bookings at or after `now`, earliest first.
    pub fn upcoming_from(&self, now: NaiveDateTime) -> Vec<&Booking> {
        self.chronological(|at| at >= now)
    }

    /// Removes every booking held by `customer_id`, returning how many went.
    pub fn delete_for_customer(&mut self, customer_id: &str) -> usize {
        let before = self.records.len();
        self.records
            .retain(|booking| booking.customer_id() != Some(customer_id));
        before - self.records.len()
    }

    fn chronological(&self, keep: impl Fn(NaiveDateTime) -> bool) -> Vec<&Booking> {
        let mut matched: Vec<(NaiveDateTime, &Booking)> = self
            .records
            .iter()
            .filter_map(|booking| booking.date().map(|at| (at, booking)))
            .filter(|(at, _)| keep(*at))
            .collect();
        matched.sort_by_key(|(at, _)| *at);
        matched.into_iter().map(|(_, booking)| booking).collect()
    }
}
