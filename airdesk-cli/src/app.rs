//! Command handlers.
//!
//! Every command drives one screen from `airdesk-core` the way the console
//! front end would, then prints the resulting page or record together with
//! the notifications the screen queued.

use std::io::Write;
use std::sync::Arc;

use anyhow::{bail, Context, Result};

use airdesk_api::{ApiClient, FlightsService, ResourceService, UsersService, MAX_PAGE_SIZE};
use airdesk_core::traits::ArrivalNotBeforeDeparture;
use airdesk_core::{
    CoreError, CreateFlightPage, DetailScreen, EditableFields, FlightField, ListScreen,
    ScreenOptions, UserField,
};

use crate::cli::{
    Cli, Command, ConfigCommand, FlightCreateArgs, FlightsCommand, ListArgs, UserCreateArgs,
    UserUpdateArgs, UsersCommand,
};
use crate::config::Config;
use crate::output::{Printer, TableRow};

/// Run one parsed command, writing results to `out`.
///
/// `terminal` lets tables size themselves to the terminal width.
pub async fn run(cli: &Cli, config: &Config, out: &mut dyn Write, terminal: bool) -> Result<()> {
    let mut printer = Printer::new(out, cli.json, config.screen.locale).on_terminal(terminal);

    match &cli.command {
        Command::Config(cmd) => handle_config(cli, config, cmd, &mut printer),
        Command::Flights(cmd) => {
            let client = connect(config)?;
            let flights = Arc::new(FlightsService::new(client));
            handle_flights(config, flights, cmd, &mut printer).await
        }
        Command::Users(cmd) => {
            let client = connect(config)?;
            let users = Arc::new(UsersService::new(client));
            handle_users(config, users, cmd, &mut printer).await
        }
    }
}

fn connect(config: &Config) -> Result<Arc<ApiClient>> {
    let client = ApiClient::new(&config.api).context("Failed to build API client")?;
    tracing::debug!("Using API at {}", client.base_url());
    Ok(Arc::new(client))
}

fn handle_config(
    cli: &Cli,
    config: &Config,
    cmd: &ConfigCommand,
    printer: &mut Printer<'_>,
) -> Result<()> {
    match cmd {
        ConfigCommand::Show => printer.write_json(&config.redacted()),
        ConfigCommand::Path => {
            let path = cli.config.clone().unwrap_or_else(Config::default_config_path);
            printer.line(&path.display().to_string())
        }
    }
}

/// Screen options with the command-line paging overrides applied.
fn list_options(base: ScreenOptions, args: &ListArgs) -> Result<ScreenOptions> {
    let mut options = base;
    if let Some(size) = args.size {
        if !(1..=MAX_PAGE_SIZE).contains(&size) {
            bail!("--size must be between 1 and {MAX_PAGE_SIZE}, got {size}");
        }
        options = options.with_page_size(size);
    }
    if let Some(sort) = &args.sort {
        options.sort.clone_from(sort);
    }
    Ok(options)
}

/// Print the screen's page and queued notifications, then pass `result` through.
async fn finish<S, T>(
    screen: &ListScreen<S>,
    printer: &mut Printer<'_>,
    result: Result<T, CoreError>,
) -> Result<T>
where
    S: ResourceService,
    S::Record: TableRow,
{
    let window = screen.window().await;
    let notifications = screen.take_notifications().await;
    printer.page(&window, &notifications)?;
    Ok(result?)
}

// ===== Flights =====

async fn handle_flights(
    config: &Config,
    service: Arc<FlightsService>,
    cmd: &FlightsCommand,
    printer: &mut Printer<'_>,
) -> Result<()> {
    let language = config.screen.locale;
    match cmd {
        FlightsCommand::List(args) => {
            let options = list_options(config.screen.flights_options(), args)?;
            let screen = ListScreen::new(service, options);
            let result = screen.mount_at(args.page).await;
            finish(&screen, printer, result).await
        }
        FlightsCommand::Show { id } => {
            let mut detail = DetailScreen::new(service, language);
            let result = detail.load(id).await.map(|_| ());
            let notifications = detail.take_notifications();
            printer.record(detail.record(), &notifications)?;
            Ok(result?)
        }
        FlightsCommand::Create(args) => create_flight(service, args, language, printer).await,
        FlightsCommand::Delete { id } => {
            let screen = ListScreen::new(service, config.screen.flights_options());
            mount_or_report(&screen, printer).await?;
            let result = screen.delete(id).await;
            finish(&screen, printer, result).await
        }
    }
}

async fn create_flight(
    service: Arc<FlightsService>,
    args: &FlightCreateArgs,
    language: airdesk_core::Language,
    printer: &mut Printer<'_>,
) -> Result<()> {
    let mut page = CreateFlightPage::new(service, language).with_validator(ArrivalNotBeforeDeparture);
    page.on_field_change(FlightField::FlightNumber, &args.flight_number);
    page.on_field_change(FlightField::DepartureDate, &args.departure_date);
    page.on_field_change(FlightField::ArrivalDate, &args.arrival_date);
    page.on_field_change(FlightField::DepartureAirport, &args.departure_airport);
    page.on_field_change(FlightField::ArrivalAirport, &args.arrival_airport);

    let result = page.submit().await;
    let notifications = page.take_notifications();
    printer.record(page.created(), &notifications)?;
    if let Err(CoreError::Validation(message)) = &result {
        bail!("{message}");
    }
    result.map(|_| ()).context("Flight was not created")
}

/// Mount on the first page; on failure print what the screen reported.
async fn mount_or_report<S>(screen: &ListScreen<S>, printer: &mut Printer<'_>) -> Result<()>
where
    S: ResourceService,
    S::Record: TableRow,
{
    let result = screen.mount().await;
    if result.is_err() {
        return finish(screen, printer, result).await;
    }
    Ok(())
}

// ===== Users =====

async fn handle_users(
    config: &Config,
    service: Arc<UsersService>,
    cmd: &UsersCommand,
    printer: &mut Printer<'_>,
) -> Result<()> {
    match cmd {
        UsersCommand::List(args) => {
            let options = list_options(config.screen.users_options(), args)?;
            let screen = ListScreen::new(service, options);
            let result = screen.mount_at(args.page).await;
            finish(&screen, printer, result).await
        }
        UsersCommand::Create(args) => {
            let screen = ListScreen::new(service, config.screen.users_options());
            mount_or_report(&screen, printer).await?;
            create_user(&screen, args, printer).await
        }
        UsersCommand::Update(args) => {
            let screen = ListScreen::new(Arc::clone(&service), config.screen.users_options());
            mount_or_report(&screen, printer).await?;
            update_user(&screen, service, config, args, printer).await
        }
        UsersCommand::Delete { id } => {
            let screen = ListScreen::new(service, config.screen.users_options());
            mount_or_report(&screen, printer).await?;
            let result = screen.delete(id).await;
            finish(&screen, printer, result).await
        }
    }
}

async fn create_user(
    screen: &ListScreen<UsersService>,
    args: &UserCreateArgs,
    printer: &mut Printer<'_>,
) -> Result<()> {
    let mut form = screen.open_create().await;
    form.on_field_change(UserField::Name, &args.name);
    form.on_field_change(UserField::Email, &args.email);
    form.on_field_change(UserField::Password, &args.password);
    form.on_field_change(UserField::Role, &args.role);
    if let Some(phone) = &args.phone {
        form.on_field_change(UserField::Phone, phone);
    }

    let result = screen.submit_create(&mut form).await.map(|_| ());
    finish(screen, printer, result).await
}

async fn update_user(
    screen: &ListScreen<UsersService>,
    service: Arc<UsersService>,
    config: &Config,
    args: &UserUpdateArgs,
    printer: &mut Printer<'_>,
) -> Result<()> {
    let mut form = match screen.select_for_edit(&args.id).await {
        Ok(form) => form,
        Err(CoreError::RecordNotFound(_)) => {
            // Not on the first page: fetch it directly.
            let mut detail = DetailScreen::new(service, config.screen.locale);
            let loaded = detail.load(&args.id).await.cloned();
            match loaded {
                Ok(user) => screen.select_record(user).await,
                Err(e) => {
                    let notifications = detail.take_notifications();
                    printer.record::<airdesk_api::User>(None, &notifications)?;
                    return Err(e.into());
                }
            }
        }
        Err(e) => return Err(e.into()),
    };

    let changes = [
        (UserField::Name, &args.name),
        (UserField::Email, &args.email),
        (UserField::Phone, &args.phone),
        (UserField::Role, &args.role),
    ];
    for (field, value) in changes {
        if let Some(value) = value {
            tracing::debug!("Setting {} on user {}", airdesk_api::User::field_name(field), args.id);
            form.on_field_change(field, value);
        }
    }

    let result = screen.submit_update(&mut form).await.map(|_| ());
    finish(screen, printer, result).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_overrides_applied() {
        let args = ListArgs {
            page: 0,
            size: Some(25),
            sort: Some("flightNumber".to_string()),
        };
        let options = list_options(ScreenOptions::default(), &args).unwrap();
        assert_eq!(options.page_size, 25);
        assert_eq!(options.sort, "flightNumber");
    }

    #[test]
    fn list_size_out_of_range() {
        let args = ListArgs {
            page: 0,
            size: Some(0),
            sort: None,
        };
        assert!(list_options(ScreenOptions::default(), &args).is_err());
    }
}
