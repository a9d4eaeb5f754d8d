//! The three demonstration scenarios.
//!
//! Each scenario builds a resource of [`ScenarioConfig::len`] elements,
//! populates it with `0..len`, exercises one lifecycle path and prints the
//! result. All resources are dropped before the scenario returns, so the
//! full transcript (including destructors) is observable through
//! [`crate::ledger`].
//!
//! | Scenario | Path exercised | Printed |
//! |---|---|---|
//! | [`Scenario::CopyConstruction`] | `duplicate` | source, copy |
//! | [`Scenario::CopyAssignment`] | `assign_by_copy` | source |
//! | [`Scenario::MoveAssignment`] | `assign_by_move` | emptied source, target |

use std::fmt;

use crate::config::ScenarioConfig;
use crate::error::ResourceError;
use crate::resource::Resource;

/// One of the demonstration scenarios.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// Construct a second resource as a deep copy of the first.
    CopyConstruction,
    /// Copy-assign the first resource into an empty second one.
    CopyAssignment,
    /// Move-assign the first resource into an empty second one.
    MoveAssignment,
}

impl Scenario {
    /// All scenarios, in presentation order.
    pub const ALL: [Scenario; 3] = [
        Scenario::CopyConstruction,
        Scenario::CopyAssignment,
        Scenario::MoveAssignment,
    ];

    /// Short identifier, matching the example binary name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CopyConstruction => "copy_constructor",
            Self::CopyAssignment => "copy_assignment",
            Self::MoveAssignment => "move_assignment",
        }
    }

    /// Run the scenario.
    pub fn run(&self, config: &ScenarioConfig) -> Result<ScenarioReport, ResourceError> {
        let span = tracing::info_span!("scenario", name = self.name(), len = config.len);
        let _enter = span.enter();
        match self {
            Self::CopyConstruction => copy_construction(config),
            Self::CopyAssignment => copy_assignment(config),
            Self::MoveAssignment => move_assignment(config),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Renders of every resource a scenario printed, in print order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScenarioReport {
    /// Output of [`Resource::render`] for each printed resource.
    pub printed: Vec<String>,
}

impl ScenarioReport {
    fn print(&mut self, resource: &Resource) {
        resource.print();
        self.printed.push(resource.render());
    }
}

/// A resource of `len` elements holding `0, 1, .., len - 1`.
///
/// Fails with [`ResourceError::CapacityExceeded`] when `len` exceeds
/// [`ScenarioConfig::MAX_LEN`], before anything is allocated.
pub fn populated(len: usize) -> Result<Resource, ResourceError> {
    ScenarioConfig::new(len).validate()?;
    let mut r = Resource::with_size(len)?;
    // `len <= MAX_LEN`, so every index fits in `i32`.
    for (value, slot) in (0..=i32::MAX).zip(r.iter_mut()) {
        *slot = value;
    }
    Ok(r)
}

/// Populate, duplicate, print both.
pub fn copy_construction(config: &ScenarioConfig) -> Result<ScenarioReport, ResourceError> {
    let mut report = ScenarioReport::default();
    let r1 = populated(config.len)?;
    let r2 = r1.duplicate()?;

    report.print(&r1);
    report.print(&r2);
    Ok(report)
}

/// Populate, copy-assign into an empty resource, print the source.
pub fn copy_assignment(config: &ScenarioConfig) -> Result<ScenarioReport, ResourceError> {
    let mut report = ScenarioReport::default();
    let r1 = populated(config.len)?;
    let mut r2 = Resource::new();
    r2.assign_by_copy(&r1)?;

    report.print(&r1);
    Ok(report)
}

/// Populate, move-assign into an empty resource, print both.
pub fn move_assignment(config: &ScenarioConfig) -> Result<ScenarioReport, ResourceError> {
    let mut report = ScenarioReport::default();
    let mut r1 = populated(config.len)?;
    let mut r2 = Resource::new();
    r2.assign_by_move(&mut r1);

    report.print(&r1);
    report.print(&r2);
    Ok(report)
}
