//! Prints a daily SEIR table for the default outbreak.
//!
//! # Usage
//!
//! ```text
//! cargo run --example outbreak
//! cargo run --example outbreak -- 2.5
//! RUST_LOG=debug cargo run --example outbreak -- 1.8
//! ```
//!
//! The optional argument is the basic reproduction number (default 1.8). The
//! rest of the setup is [`Outbreak::default`]: ten million people, ten
//! thousand exposed, two thousand infectious, 140 days.

use std::error::Error;

use contagion_seir::Outbreak;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let reproduction_number = std::env::args()
        .nth(1)
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()
        .unwrap_or_else(|_| {
            eprintln!("Invalid R0, expected a number, e.g. 2.5");
            std::process::exit(1);
        })
        .unwrap_or(1.8);

    let outbreak = Outbreak {
        reproduction_number,
        ..Outbreak::default()
    };
    let curves = outbreak.simulate()?;

    println!(
        "{:>6} {:>12} {:>12} {:>12} {:>12}",
        "day", "S", "E", "I", "R"
    );
    // Ten samples per day at the default step.
    for k in (0..curves.len()).step_by(10) {
        println!(
            "{:>6.1} {:>12.6} {:>12.6} {:>12.6} {:>12.6}",
            curves.time[k],
            curves.susceptible[k],
            curves.exposed[k],
            curves.infectious[k],
            curves.recovered[k],
        );
    }

    if let Some(peak) = curves.peak_infectious() {
        println!(
            "\npeak infectious: {:.4} of the population on day {:.1}",
            peak.value, peak.time
        );
    }

    Ok(())
}
