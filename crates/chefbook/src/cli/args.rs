use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chefbook", bin_name = "chefbook", version)]
#[command(about = "Customer book and booking register for a restaurant", long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding customers.csv and bookings.csv
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Config file to read instead of the default chefbook.toml
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new customer
    #[command(alias = "a")]
    Add {
        name: String,

        /// Phone number, 10 digits (repeatable)
        #[arg(long = "phone", value_name = "PHONE")]
        phones: Vec<String>,

        /// Birthday as DD.MM.YYYY
        #[arg(long)]
        birthday: Option<String>,

        #[arg(long)]
        email: Option<String>,

        /// "[Address Line 1], [City], [Country]"
        #[arg(long)]
        address: Option<String>,
    },

    /// Show everything known about a customer
    #[command(alias = "v")]
    Show { name: String },

    /// List all customers
    #[command(alias = "ls")]
    List,

    /// Delete a customer and cancel their bookings
    #[command(alias = "rm")]
    Delete { name: String },

    /// Change a customer's details
    Set {
        name: String,

        /// Rename the customer
        #[arg(long = "name", value_name = "NEW_NAME")]
        new_name: Option<String>,

        #[arg(long)]
        birthday: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        address: Option<String>,
    },

    /// Remove optional details from a customer
    Unset {
        name: String,

        #[arg(long)]
        birthday: bool,

        #[arg(long)]
        email: bool,

        #[arg(long)]
        address: bool,
    },

    /// Manage a customer's phone numbers
    Phone {
        #[command(subcommand)]
        action: PhoneCommand,
    },

    /// Manage a customer's notes (indexes start at 0)
    Note {
        #[command(subcommand)]
        action: NoteCommand,
    },

    /// Search customers by one attribute
    Find(FindBy),

    /// List customers ordered by their note tags
    ByTags,

    /// Upcoming birthdays with the day to send greetings
    Birthdays {
        /// How many days ahead to look (default from config)
        #[arg(long)]
        days: Option<u32>,
    },

    /// Book a table for a customer
    Book {
        name: String,

        /// "DD.MM.YYYY HH:MM"
        date: String,
    },

    /// List bookings, upcoming ones unless filtered
    Bookings {
        /// Only this customer's bookings
        #[arg(long)]
        customer: Option<String>,

        /// Only bookings on this day, DD.MM.YYYY
        #[arg(long)]
        on: Option<String>,
    },

    /// Cancel a booking by its id
    Cancel { id: String },

    /// Delete all customers and bookings
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum PhoneCommand {
    /// Add a phone number
    Add { name: String, phone: String },

    /// Replace a phone number, adding the new one if the old is unknown
    Edit {
        name: String,
        old: String,
        new: String,
    },

    /// Remove a phone number
    #[command(alias = "rm")]
    Remove { name: String, phone: String },
}

#[derive(Subcommand, Debug)]
pub enum NoteCommand {
    /// Add a note
    Add {
        name: String,
        text: String,

        /// Tag for the note (repeatable)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },

    /// Replace a note's text and tags
    Edit {
        name: String,
        index: usize,
        text: String,

        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },

    /// Remove a note
    #[command(alias = "rm")]
    Remove { name: String, index: usize },

    /// Add a tag to a note
    Tag {
        name: String,
        index: usize,
        tag: String,
    },

    /// Remove a tag from a note
    Untag {
        name: String,
        index: usize,
        tag: String,
    },
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct FindBy {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// Customers with a note carrying this tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Customers with a note containing this text
    #[arg(long)]
    pub note: Option<String>,

    /// DD.MM.YYYY
    #[arg(long)]
    pub birthday: Option<String>,
}
