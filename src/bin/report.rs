use std::path::Path;
use std::process::ExitCode;

use tracing::{error, info};

use thrust_sim::config::{SimConfig, CONFIG_FILE};
use thrust_sim::control::{presets, Hover, ThrottleProgram};
use thrust_sim::io::csv;
use thrust_sim::sim::{fly_with, Flight};
use thrust_sim::{logging, Error, Result};

const MAX_TIME: f64 = 600.0;

fn main() -> ExitCode {
    logging::init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "thrust-report stopped");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = SimConfig::load_or_default(Path::new(CONFIG_FILE))?;

    let mut programs: Vec<Box<dyn ThrottleProgram>> = vec![
        Box::new(presets::full_burn()),
        Box::new(presets::short_hop()),
        Box::new(Hover::new(500.0, config.gravity)),
    ];

    let mut flights = Vec::with_capacity(programs.len());
    for program in programs.iter_mut() {
        let flight = fly_with(&config, program.as_mut(), 0.0, MAX_TIME);
        print_flight(&flight, &config);
        flights.push(flight);
    }

    if let (Some(path), Some(first)) = (&config.telemetry_csv, flights.first()) {
        csv::write_telemetry_file(path, &first.samples).map_err(|e| Error::io(path, e))?;
        info!(path = %path.display(), program = %first.program, "telemetry exported");
    }
    Ok(())
}

fn print_flight(flight: &Flight, config: &SimConfig) {
    println!();
    println!("====================================================================");
    println!("  VERTICAL THRUST FLIGHT — program: {}", flight.program);
    println!("====================================================================");
    println!(
        "  Gravity:       {:>8.1}        Tick rate:    {:>8.0} Hz",
        config.gravity, config.tick_rate
    );
    println!();

    println!("  Flight Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    if flight.events.is_empty() {
        println!("  (none)");
    }
    for e in &flight.events {
        println!(
            "  {:<10} t={:>7.2}s   pos={:>9.1}   vel={:>8.1}",
            e.kind.label(),
            e.time,
            e.position,
            e.velocity
        );
    }
    println!();

    println!("  Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  Apogee:        {:>9.1}", flight.apogee());
    println!("  Max speed:     {:>9.1}", flight.max_speed());
    println!("  Fuel left:     {:>9.1}", flight.final_state.fuel);
    println!("  Flight time:   {:>9.1} s", flight.flight_time());
    match flight.landing {
        Some(l) => println!("  Scored at:     {:>9.1}", l.position),
        None => println!("  Scored at:     {:>9}", "-"),
    }
    println!("  Samples:       {:>9}", flight.samples.len());
    println!("====================================================================");
}
