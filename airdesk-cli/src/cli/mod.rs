//! Command-line interface for the `airdesk` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ConfigCommand, FlightCreateArgs, FlightsCommand, ListArgs, UserCreateArgs, UserUpdateArgs,
    UsersCommand,
};

use crate::logging::Verbosity;

/// airdesk - airline back-office console
///
/// Lists, creates, edits and deletes flights and users through the
/// back-office REST API.
#[derive(Debug, Parser)]
#[command(name = "airdesk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage flights
    #[command(subcommand)]
    Flights(FlightsCommand),

    /// Manage users
    #[command(subcommand)]
    Users(UsersCommand),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
        assert_eq!(Cli::command().get_name(), "airdesk");
    }

    #[test]
    fn verbosity_flags() {
        assert_eq!(parse(&["airdesk", "-q", "config", "path"]).verbosity(), Verbosity::Quiet);
        assert_eq!(parse(&["airdesk", "config", "path"]).verbosity(), Verbosity::Normal);
        assert_eq!(parse(&["airdesk", "-v", "config", "path"]).verbosity(), Verbosity::Verbose);
        assert_eq!(parse(&["airdesk", "-vv", "config", "path"]).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn flights_list_defaults() {
        let cli = parse(&["airdesk", "flights", "list"]);
        let Command::Flights(FlightsCommand::List(args)) = cli.command else {
            panic!("expected flights list");
        };
        assert_eq!(args.page, 0);
        assert!(args.size.is_none());
        assert!(args.sort.is_none());
    }

    #[test]
    fn flights_list_with_paging() {
        let cli = parse(&["airdesk", "flights", "list", "--page", "2", "--size", "5", "--sort", "flightNumber"]);
        let Command::Flights(FlightsCommand::List(args)) = cli.command else {
            panic!("expected flights list");
        };
        assert_eq!(args.page, 2);
        assert_eq!(args.size, Some(5));
        assert_eq!(args.sort.as_deref(), Some("flightNumber"));
    }

    #[test]
    fn flights_create_requires_every_field() {
        assert!(Cli::try_parse_from(["airdesk", "flights", "create", "--flight-number", "AA1"]).is_err());

        let cli = parse(&[
            "airdesk", "flights", "create",
            "--flight-number", "AA1",
            "--departure-date", "2024-01-01",
            "--arrival-date", "2024-01-02",
            "--departure-airport", "JFK",
            "--arrival-airport", "GRU",
        ]);
        let Command::Flights(FlightsCommand::Create(args)) = cli.command else {
            panic!("expected flights create");
        };
        assert_eq!(args.arrival_airport, "GRU");
    }

    #[test]
    fn users_update_takes_optional_fields() {
        let cli = parse(&["airdesk", "users", "update", "u1", "--role", "ADMIN"]);
        let Command::Users(UsersCommand::Update(args)) = cli.command else {
            panic!("expected users update");
        };
        assert_eq!(args.id, "u1");
        assert_eq!(args.role.as_deref(), Some("ADMIN"));
        assert!(args.name.is_none());
    }

    #[test]
    fn delete_takes_positional_id() {
        let cli = parse(&["airdesk", "flights", "delete", "42"]);
        assert!(matches!(cli.command, Command::Flights(FlightsCommand::Delete { ref id }) if id == "42"));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["airdesk", "users", "list", "--json", "-c", "/tmp/airdesk.json"]);
        assert!(cli.json);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/airdesk.json")));
    }
}
