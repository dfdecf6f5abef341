//! Plain-text rendering of customers, bookings and the birthdays report.
//!
//! Every function returns a `String`; printing is left to the caller. Styling
//! goes through `colored`, which honours `NO_COLOR`.

use chefbookapp::fields::Note;
use chefbookapp::model::{Booking, Customer, Record};
use chefbookapp::service::UpcomingBirthday;
use chrono::NaiveDate;
use colored::*;

const DATE_FORMAT: &str = "%d.%m.%Y";
const DAY_FORMAT: &str = "%a %d.%m.%Y";
const NONE: &str = "-";

pub fn success(message: &str) -> String {
    message.green().to_string()
}

pub fn warning(message: &str) -> String {
    message.yellow().to_string()
}

fn muted(text: &str) -> String {
    text.dimmed().to_string()
}

fn note_line(index: usize, note: &Note) -> String {
    let mut line = format!("  [{}] {}", index.to_string().yellow(), note.text());
    if !note.tags().is_empty() {
        let tags: Vec<String> = note.tags().iter().map(|tag| format!("#{}", tag)).collect();
        line.push(' ');
        line.push_str(&tags.join(" ").cyan().to_string());
    }
    line
}

/// One line per customer: name, phones and birthday.
pub fn customer_line(customer: &Customer) -> String {
    let phones = customer.phones();
    let phones = if phones.is_empty() {
        NONE.to_string()
    } else {
        phones.join(", ")
    };
    let birthday = customer
        .birthday()
        .map(date)
        .unwrap_or_else(|| NONE.to_string());
    format!(
        "{}  {}  {}",
        customer.name().unwrap_or(NONE).bold(),
        phones,
        muted(&birthday)
    )
}

pub fn customer_list(customers: &[&Customer]) -> String {
    if customers.is_empty() {
        return muted("No customers found.");
    }
    customers
        .iter()
        .map(|customer| customer_line(customer))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Customers with their tags, as listed by `by-tags`.
pub fn tagged_customer_list(customers: &[&Customer]) -> String {
    if customers.is_empty() {
        return muted("No customers found.");
    }
    customers
        .iter()
        .map(|customer| {
            let tags = customer.tags();
            let tags = if tags.is_empty() {
                muted("(no tags)")
            } else {
                tags.join(", ").cyan().to_string()
            };
            format!("{}  {}", customer.name().unwrap_or(NONE).bold(), tags)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn customer_detail(customer: &Customer) -> String {
    let mut lines = vec![
        format!(
            "{} {}",
            customer.name().unwrap_or(NONE).bold(),
            muted(&format!("({})", customer.id()))
        ),
        "--------------------------------".to_string(),
    ];

    let phones = customer.phones();
    let detail = |label: &str, value: Option<String>| {
        format!(
            "{:<10}{}",
            format!("{}:", label),
            value.unwrap_or_else(|| NONE.to_string())
        )
    };
    lines.push(detail(
        "Phones",
        (!phones.is_empty()).then(|| phones.join(", ")),
    ));
    lines.push(detail(
        "Birthday",
        customer.birthday().map(date),
    ));
    lines.push(detail("Email", customer.email().map(str::to_string)));
    lines.push(detail("Address", customer.address().map(str::to_string)));

    if customer.notes().is_empty() {
        lines.push(detail("Notes", None));
    } else {
        lines.push("Notes:".to_string());
        lines.extend(
            customer
                .notes()
                .iter()
                .enumerate()
                .map(|(index, note)| note_line(index, note)),
        );
    }
    lines.join("\n")
}

fn days_label(days: i64) -> String {
    match days {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        n => format!("in {} days", n),
    }
}

pub fn birthdays(upcoming: &[UpcomingBirthday<'_>], days_ahead: u32) -> String {
    if upcoming.is_empty() {
        return muted(&format!("No birthdays in the next {} days.", days_ahead));
    }
    upcoming
        .iter()
        .map(|entry| {
            let mut line = format!(
                "{}  {} ({})",
                entry.customer.name().unwrap_or(NONE).bold(),
                entry.date.format(DATE_FORMAT),
                days_label(entry.days_until)
            );
            if entry.congratulate_on != entry.date {
                line.push_str(&format!(
                    "  congratulate on {}",
                    entry.congratulate_on.format(DAY_FORMAT).to_string().yellow()
                ));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Bookings paired with the name of the customer holding them, if known.
pub fn booking_list(bookings: &[(&Booking, Option<&str>)]) -> String {
    if bookings.is_empty() {
        return muted("No bookings found.");
    }
    bookings
        .iter()
        .map(|(booking, customer)| {
            format!(
                "{}  {}  {}",
                booking.date_str().unwrap_or_else(|| NONE.to_string()),
                customer.unwrap_or("(unknown customer)").bold(),
                muted(booking.id())
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
