use clap::{Parser, Subcommand};

use crate::pricing::constants::DEFAULT_FORM_FILE;

/// Party hall booking: browse menus, quote an event and draft the booking request.
#[derive(Parser, Debug)]
#[command(name = "hall_booking")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the saved in-progress booking form.
    #[arg(long, default_value = DEFAULT_FORM_FILE, global = true)]
    pub form_file: String,

    /// Optional JSON config overriding pricing rules and the recipient number.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Show info-level log output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Walk through menu selection and the booking form interactively.
    Book,

    /// List the fixed menu packages, or show one package's items.
    Packages {
        /// Package to show (65, 75, 85 or 100).
        #[arg(long)]
        id: Option<u32>,
    },

    /// Show the full menu available for customization.
    Menu,

    /// Quote an event without filling the booking form.
    Quote {
        /// Fixed package to quote (65, 75, 85 or 100).
        #[arg(long, conflicts_with = "item", required_unless_present = "item")]
        package: Option<u32>,

        /// Menu item for a custom menu (repeatable).
        #[arg(long)]
        item: Vec<String>,

        /// Number of guests.
        #[arg(long)]
        pax: String,

        /// Event start time (HH:MM, 24h).
        #[arg(long, default_value = "")]
        start: String,

        /// Event end time (HH:MM, 24h).
        #[arg(long, default_value = "")]
        end: String,

        /// Print the quote as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Discard the saved booking form.
    Reset,
}

impl Default for Command {
    fn default() -> Self {
        Command::Book
    }
}
