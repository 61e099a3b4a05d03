/* 3rd party libraries */
use clap::Parser;
use crossbeam_channel as cbc;
use log::{error, info};
use std::io::Write;
use std::path::PathBuf;
use std::thread::Builder;

/* Custom libraries */
use elevator_sim::config;
use elevator_sim::console::{self, Console, ConsoleOutput};
use elevator_sim::elevator::ElevatorCar;
use elevator_sim::shared::Floor;
use elevator_sim::unwrap_or_exit;

/// Single elevator car simulator driven from the console.
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[clap(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Highest floor served, overrides the configuration file
    #[clap(short, long)]
    max_floor: Option<Floor>,

    /// Print status as JSON
    #[clap(long)]
    json: bool,

    /// Log level, overrides the configuration file
    #[clap(long)]
    log_level: Option<String>,
}

/* Main */
fn main() {
    let args = Args::parse();

    // Load the configuration, the logger needs its level before errors can be reported
    let loaded_config = config::load_config(&args.config);
    let log_level = match (&args.log_level, &loaded_config) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.level.clone(),
        (None, Err(_)) => "info".to_string(),
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .init();

    let mut config = unwrap_or_exit!(loaded_config);
    if let Some(max_floor) = args.max_floor {
        config.elevator.max_floor = max_floor;
    }
    if args.json {
        config.console.json_status = true;
    }

    // Create the elevator car
    let car = ElevatorCar::new(config.elevator.max_floor);
    info!(
        "Elevator car serving floors {}..{}",
        car.min_floor(),
        car.max_floor()
    );

    // Initialize channels
    let (input_tx, input_rx) = cbc::unbounded::<String>();
    let (output_tx, output_rx) = cbc::unbounded::<ConsoleOutput>();
    let (_terminate_tx, terminate_rx) = cbc::unbounded::<()>();

    // Start the input reader
    unwrap_or_exit!(console::input::spawn_stdin_reader(input_tx));

    // Start the console
    let console = Console::new(car, &config.console, input_rx, output_tx, terminate_rx);
    let console_thread = unwrap_or_exit!(Builder::new()
        .name("console".into())
        .spawn(move || console.run()));

    // Render console output until the console hangs up
    let mut stdout = std::io::stdout();
    for output in output_rx.iter() {
        let written = match output {
            ConsoleOutput::Line(line) => writeln!(stdout, "{line}"),
            ConsoleOutput::Prompt => write!(stdout, "{}", config.console.prompt)
                .and_then(|_| stdout.flush()),
        };
        if let Err(e) = written {
            error!("Failed to write to stdout: {}", e);
            std::process::exit(1);
        }
    }

    match console_thread.join() {
        Ok(car) => info!("Final state: {}", car.status()),
        Err(_) => {
            error!("Console thread panicked");
            std::process::exit(1);
        }
    }
}
