//! Command dispatch

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::application::{CustomerStats, MenuReport, Scenario};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::Shop;

pub fn execute_command(cli: &Cli, settings: &Settings) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Demo) => demo(settings),
        Some(Commands::Report { file }) => report(settings, file.as_deref()),
        Some(Commands::Customers { file }) => customers(settings, file.as_deref()),
        Some(Commands::Config { command }) => config(command, settings),
        // handled in main before dispatch
        Some(Commands::Completion { .. }) => Ok(()),
        None => Err(CliError::Usage(
            "no command given, see --help".to_string(),
        )),
    }
}

/// Run the built-in scenario: place the orders, print the report, then
/// demonstrate that invalid input is rejected without side effects.
#[instrument(skip(settings))]
fn demo(settings: &Settings) -> CliResult<()> {
    let shop = Scenario::demo().build()?;

    output::header("Order log");
    for (_, order) in shop.orders() {
        let customer = shop.customer(order.customer())?;
        let coffee = shop.coffee(order.coffee())?;
        output::detail(&format!(
            "{} ordered {} at {}{:.2}",
            customer.name(),
            coffee.name(),
            settings.currency,
            order.price()
        ));
    }

    output::header("Menu report");
    print_menu_report(&shop, settings)?;

    output::header("Validation");
    let mut probe = Shop::new();
    let alice = probe.add_customer("Alice")?;
    let espresso = probe.add_coffee("Espresso")?;
    let rejected = [
        ("coffee named \"Hi\"", probe.add_coffee("Hi").err()),
        ("customer named \"\"", probe.add_customer("").err()),
        (
            "order at price 15.0",
            probe.place_order(alice, espresso, 15.0).err(),
        ),
    ];
    for (label, err) in rejected {
        match err {
            Some(e) => output::success(&format!("{} rejected: {}", label, e)),
            None => output::warning(&format!("{} unexpectedly accepted", label)),
        }
    }
    Ok(())
}

#[instrument(skip(settings))]
fn report(settings: &Settings, file: Option<&Path>) -> CliResult<()> {
    let path = resolve_scenario_path(settings, file)?;
    debug!("scenario file: {}", path.display());
    let shop = Scenario::load(&path)?.build()?;
    print_menu_report(&shop, settings)
}

#[instrument(skip(settings))]
fn customers(settings: &Settings, file: Option<&Path>) -> CliResult<()> {
    let path = resolve_scenario_path(settings, file)?;
    debug!("scenario file: {}", path.display());
    let shop = Scenario::load(&path)?.build()?;

    for stats in CustomerStats::for_all(&shop)? {
        output::action(
            &stats.name,
            &format!(
                "{} orders, spent {}{:.2}",
                stats.num_orders, settings.currency, stats.total_spent
            ),
        );
        if !stats.coffees.is_empty() {
            output::detail(&format!("coffees: {}", stats.coffees.join(", ")));
        }
    }
    Ok(())
}

fn print_menu_report(shop: &Shop, settings: &Settings) -> CliResult<()> {
    let report = MenuReport::for_shop(shop)?;
    for stats in &report.coffees {
        output::action(
            &stats.name,
            &format!(
                "{} orders, avg {}{:.2}",
                stats.num_orders, settings.currency, stats.average_price
            ),
        );
        if !stats.customers.is_empty() {
            output::detail(&format!("customers: {}", stats.customers.join(", ")));
        }
        match &stats.aficionado {
            Some(name) => output::detail(&format!("top spender: {}", name)),
            None => output::detail("top spender: none"),
        }
    }
    Ok(())
}

fn resolve_scenario_path(settings: &Settings, file: Option<&Path>) -> CliResult<PathBuf> {
    file.map(Path::to_path_buf)
        .or_else(|| settings.scenario_file.clone())
        .ok_or_else(|| {
            CliError::Usage("no scenario file given and none configured".to_string())
        })
}

fn config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&format!("currency = {:?}", settings.currency));
            match &settings.scenario_file {
                Some(path) => output::info(&format!("scenario_file = {:?}", path)),
                None => output::info("scenario_file = (unset)"),
            }
        }
        ConfigCommands::Path => match Settings::global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("no home directory found"),
        },
    }
    Ok(())
}
