//! Copy assignment: copy-and-swap a populated resource into an empty one.
//!
//! Run with:
//!   cargo run --example copy_assignment
//!
//! Set `RESBUF_SCENARIO_LEN` to change the buffer length and `RUST_LOG`
//! to change verbosity.

use resbuf::scenario::Scenario;
use resbuf::telemetry::setup_tracing;
use resbuf::{ResourceError, ScenarioConfig};

fn main() -> Result<(), ResourceError> {
    setup_tracing();
    let config = ScenarioConfig::from_env();
    Scenario::CopyAssignment.run(&config)?;
    Ok(())
}
