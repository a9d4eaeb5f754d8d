//! Move assignment: transfer a populated resource into an empty one and print both.
//!
//! Run with:
//!   cargo run --example move_assignment
//!
//! Set `RESBUF_SCENARIO_LEN` to change the buffer length and `RUST_LOG`
//! to change verbosity.

use resbuf::scenario::Scenario;
use resbuf::telemetry::setup_tracing;
use resbuf::{ResourceError, ScenarioConfig};

fn main() -> Result<(), ResourceError> {
    setup_tracing();
    let config = ScenarioConfig::from_env();
    Scenario::MoveAssignment.run(&config)?;
    Ok(())
}
