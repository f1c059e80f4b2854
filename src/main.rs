use satellite_commander::driver;
use satcom_shared::{Satellite, TracingSink};
use std::cell::RefCell;

use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let satellite = RefCell::new(Satellite::new(Box::new(TracingSink)));
    info!("Running mission: rotate to {}", driver::MISSION_DIRECTION);

    match driver::run_mission(&satellite, driver::MISSION_DIRECTION) {
        Ok(report) => println!("{}", report),
        // Failures are reported but never change the exit code
        Err(e) => eprintln!("Error occurred: {:#}", e),
    }
}
