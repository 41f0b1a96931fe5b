//! Bistro operator CLI
//!
//! Seeds a restaurant from configuration and runs one command against it:
//! dump the floor-plan graph, query a walking path, browse the menu, or run
//! a scripted order lifecycle.

use anyhow::Context;
use bistro::commands;
use bistro_core::core::{load_config, load_config_or_default};
use bistro_core::{create_restaurant, Config};
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::info;

fn cli() -> Command {
    let json = Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print JSON instead of text");

    Command::new("bistro")
        .version(bistro::VERSION)
        .about("Restaurant operations: floor-plan paths, menu lookup and order lifecycle.")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .global(true)
                .help("Configuration file path (falls back to $BISTRO_CONFIG, then defaults)")
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .global(true)
                .help("Log level or filter directive (trace, debug, info, warn, error)")
        )
        .subcommand(
            Command::new("graph")
                .about("Dump floor-plan vertices and edges")
                .arg(json.clone())
        )
        .subcommand(
            Command::new("path")
                .about("Shortest walking path between two locations")
                .arg(Arg::new("from").required(true).value_name("FROM"))
                .arg(Arg::new("to").required(true).value_name("TO"))
                .arg(json.clone())
        )
        .subcommand(
            Command::new("menu")
                .about("Menu in category, then name order")
                .arg(
                    Arg::new("category")
                        .long("category")
                        .value_name("NAME")
                        .help("Only show this category")
                )
                .arg(json.clone())
        )
        .subcommand(
            Command::new("demo")
                .about("Run a scripted order lifecycle and log each step")
                .arg(
                    Arg::new("orders")
                        .long("orders")
                        .value_name("N")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("4")
                        .help("Number of orders to place")
                )
                .arg(json)
        )
}

/// Explicit `--config` must load; the environment fallback is best effort.
fn resolve_config(matches: &ArgMatches) -> anyhow::Result<Config> {
    match matches.get_one::<String>("config") {
        Some(path) => load_config(path).with_context(|| format!("loading config from {}", path)),
        None => Ok(load_config_or_default(std::env::var("BISTRO_CONFIG").ok().as_deref())),
    }
}

fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();

    bistro::init_tracing(matches.get_one::<String>("log-level").map(String::as_str))?;

    let config = resolve_config(&matches)?;
    let mut restaurant = create_restaurant(&config).context("seeding restaurant")?;
    info!("Starting {} v{}", bistro::NAME, bistro::VERSION);

    let output = match matches.subcommand() {
        Some(("graph", sub)) => commands::graph(&restaurant, sub.get_flag("json"))?,
        Some(("path", sub)) => {
            let from = sub.get_one::<String>("from").context("missing FROM")?;
            let to = sub.get_one::<String>("to").context("missing TO")?;
            commands::path(&restaurant, from, to, sub.get_flag("json"))?
        }
        Some(("menu", sub)) => commands::menu(
            &restaurant,
            sub.get_one::<String>("category").map(String::as_str),
            sub.get_flag("json"),
        )?,
        Some(("demo", sub)) => {
            let orders = sub.get_one::<usize>("orders").copied().unwrap_or(4);
            commands::demo(&mut restaurant, orders, sub.get_flag("json"))?
        }
        _ => anyhow::bail!("no command given"),
    };

    println!("{}", output);
    Ok(())
}
