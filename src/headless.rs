use crate::scripted_input::ScriptedInputPlayer;
use anyhow::{Context, Result};
use blockworld_core::SimTick;
use blockworld_sim::{Session, SessionConfig};
use blockworld_testkit::{EventRecord, JsonlSink};
use blockworld_world::TargetOutcome;
use glam::Vec3;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

pub struct HeadlessConfig {
    pub session: SessionConfig,
    pub scripted_input: Option<PathBuf>,
    pub event_log: Option<PathBuf>,
    pub max_ticks: u64,
    pub exit_when_script_finished: bool,
    pub log_generation: bool,
}

/// Totals reported after a headless run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub ticks: u64,
    pub blocks: usize,
    pub trees: usize,
    pub placed: usize,
    pub removed: usize,
    pub final_position: Vec3,
    pub grounded: bool,
}

pub fn run(cfg: HeadlessConfig) -> Result<RunSummary> {
    let mut script = cfg
        .scripted_input
        .as_deref()
        .map(|path| {
            ScriptedInputPlayer::from_path(path)
                .with_context(|| format!("failed to load script {}", path.display()))
        })
        .transpose()?;
    let mut sink = cfg.event_log.as_deref().map(JsonlSink::create).transpose()?;

    let mut session = Session::new(cfg.session).context("invalid session config")?;
    let generated = session.drain_events();
    if let Some(sink) = sink.as_mut().filter(|_| cfg.log_generation) {
        for event in &generated {
            sink.write(&EventRecord {
                tick: SimTick::ZERO,
                kind: "block",
                payload: event,
            })?;
        }
    }

    let (mut placed, mut removed) = (0, 0);
    for _ in 0..cfg.max_ticks {
        if cfg.exit_when_script_finished && script.as_ref().is_some_and(|s| s.finished()) {
            info!(tick = session.tick().0, "script finished");
            break;
        }
        let input = script
            .as_mut()
            .map(ScriptedInputPlayer::advance)
            .unwrap_or_default();
        let out = session.frame(&input);

        for resolved in &out.actions {
            match resolved.outcome {
                TargetOutcome::Placed { .. } => placed += 1,
                TargetOutcome::Removed { .. } => removed += 1,
                _ => {}
            }
        }

        if let Some(sink) = sink.as_mut() {
            for resolved in &out.actions {
                sink.write(&EventRecord {
                    tick: out.tick,
                    kind: "action",
                    payload: resolved,
                })?;
            }
            for event in &out.events {
                sink.write(&EventRecord {
                    tick: out.tick,
                    kind: "block",
                    payload: event,
                })?;
            }
            sink.write(&EventRecord {
                tick: out.tick,
                kind: "pose",
                payload: &out.pose,
            })?;
        }
    }

    if let Some(sink) = sink.as_mut() {
        sink.flush()?;
        info!(records = sink.written(), "event log written");
    }

    let generation = session.generation();
    Ok(RunSummary {
        seed: session.seed(),
        ticks: session.tick().0,
        blocks: session.world().blocks().len(),
        trees: generation.trees,
        placed,
        removed,
        final_position: session.player().position(),
        grounded: session.player().grounded(),
    })
}
