//! Tick-stepped snapshot tests.
//!
//! A micro-worldtest steps a small simulation for a fixed number of ticks,
//! records a snapshot before the first step and after every step, and compares
//! the whole report against a golden file.

use crate::snapshot::assert_json_snapshot;
use anyhow::Result;
use blockworld_core::SimTick;
use serde::Serialize;
use std::path::PathBuf;

/// Configuration for a micro-worldtest.
#[derive(Debug, Clone)]
pub struct MicroWorldtestConfig {
    /// Name written into the report.
    pub name: String,
    /// Number of steps; the report holds `ticks + 1` frames.
    pub ticks: u64,
    /// Golden JSON file.
    pub snapshot_path: PathBuf,
}

/// Snapshot captured at one tick.
#[derive(Debug, Clone, Serialize)]
pub struct MicroWorldtestFrame<S> {
    /// Tick number.
    pub tick: SimTick,
    /// Snapshot payload.
    pub snapshot: S,
}

#[derive(Debug, Clone, Serialize)]
struct MicroWorldtestReport<S> {
    name: String,
    frames: Vec<MicroWorldtestFrame<S>>,
}

/// Run a micro-worldtest and assert (or update) its golden file.
pub fn run_micro_worldtest<State, Snapshot, StepFn, SnapFn>(
    config: MicroWorldtestConfig,
    mut state: State,
    mut step: StepFn,
    mut snapshot: SnapFn,
) -> Result<()>
where
    Snapshot: Serialize,
    StepFn: FnMut(SimTick, &mut State),
    SnapFn: FnMut(SimTick, &State) -> Snapshot,
{
    let frames = std::iter::successors(Some(SimTick::ZERO), |tick| Some(tick.advance(1)))
        .take(config.ticks as usize + 1)
        .map(|tick| {
            if tick != SimTick::ZERO {
                step(SimTick(tick.0 - 1), &mut state);
            }
            MicroWorldtestFrame {
                tick,
                snapshot: snapshot(tick, &state),
            }
        })
        .collect();

    let report = MicroWorldtestReport {
        name: config.name,
        frames,
    };
    assert_json_snapshot(config.snapshot_path, &report)
}
