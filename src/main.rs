use barista::clock::{Clock, InstantClock, TokioClock};
use barista::config::DemoConfig;
use barista::CoffeeMachine;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, Level};

/// Run a sequence of orders against a simulated coffee machine.
#[derive(Parser, Debug)]
#[command(name = "barista", version, about)]
struct Cli {
    /// JSON file with starting stock and orders
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip the simulated hardware delays
    #[arg(long)]
    instant: bool,

    /// Maximum log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = barista::logging::init(cli.log_level) {
        eprintln!("setting default subscriber failed: {err}");
        return ExitCode::FAILURE;
    }

    let config = match &cli.config {
        Some(path) => match DemoConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                error!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => DemoConfig::default(),
    };

    if cli.instant {
        serve(CoffeeMachine::with_clock(InstantClock::new()), &config).await;
    } else {
        serve(CoffeeMachine::with_clock(TokioClock), &config).await;
    }
    ExitCode::SUCCESS
}

async fn serve<C: Clock>(mut machine: CoffeeMachine<C>, config: &DemoConfig) {
    machine.refill_water(config.water);
    machine.refill_coffee(config.coffee);
    machine.refill_milk(config.milk);
    info!(levels = %machine.levels(), heating = machine.is_heating(), "Machine ready");

    for order in &config.orders {
        let receipt = machine.order_drink(order).await;
        info!(
            id = %receipt.id,
            drink = %receipt.drink,
            served = receipt.is_served(),
            "Order closed"
        );
    }

    info!(levels = %machine.levels(), heating = machine.is_heating(), "Machine state");
}
