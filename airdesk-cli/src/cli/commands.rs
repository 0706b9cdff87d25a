//! Subcommand definitions.

use clap::{Args, Subcommand};

/// Paging arguments shared by the list commands.
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Page to show (0-based)
    #[arg(short, long, default_value_t = 0)]
    pub page: u32,

    /// Items per page (defaults to `screen.page_size`)
    #[arg(short, long)]
    pub size: Option<u32>,

    /// Field the server sorts by
    #[arg(long)]
    pub sort: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum FlightsCommand {
    /// List one page of flights
    List(ListArgs),

    /// Show one flight
    Show {
        /// Flight id
        id: String,
    },

    /// Create a flight
    Create(FlightCreateArgs),

    /// Delete a flight
    Delete {
        /// Flight id
        id: String,
    },
}

#[derive(Debug, Clone, Args)]
pub struct FlightCreateArgs {
    #[arg(long)]
    pub flight_number: String,

    /// Departure date, e.g. 2024-01-01
    #[arg(long)]
    pub departure_date: String,

    /// Arrival date, not before the departure date
    #[arg(long)]
    pub arrival_date: String,

    #[arg(long)]
    pub departure_airport: String,

    #[arg(long)]
    pub arrival_airport: String,
}

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// List one page of users
    List(ListArgs),

    /// Create a user
    Create(UserCreateArgs),

    /// Edit a user
    Update(UserUpdateArgs),

    /// Delete a user
    Delete {
        /// User id
        id: String,
    },
}

#[derive(Debug, Clone, Args)]
pub struct UserCreateArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub password: String,

    /// Role, e.g. ADMIN or USER
    #[arg(long)]
    pub role: String,

    #[arg(long)]
    pub phone: Option<String>,
}

/// Fields left out keep their current value.
#[derive(Debug, Clone, Args)]
pub struct UserUpdateArgs {
    /// User id
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub role: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration (token masked)
    Show,

    /// Print the default configuration file path
    Path,
}
