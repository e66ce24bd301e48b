use blockworld_core::{HeldKeys, LookDelta, PointerAction, TickInput};
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize)]
struct ScriptedInputFile {
    steps: Vec<ScriptedStep>,
}

/// One stretch of held input. Actions and slot selection fire on its first tick only.
#[derive(Debug, Clone, Deserialize, Default)]
struct ScriptedStep {
    ticks: u64,
    #[serde(default)]
    forward: bool,
    #[serde(default)]
    backward: bool,
    #[serde(default)]
    left: bool,
    #[serde(default)]
    right: bool,
    #[serde(default)]
    jump: bool,
    #[serde(default)]
    sprint: bool,
    #[serde(default)]
    crouch: bool,
    /// Pointer motion applied on every tick of the step.
    #[serde(default)]
    look_x: f32,
    #[serde(default)]
    look_y: f32,
    #[serde(default)]
    actions: Vec<PointerAction>,
    /// Number key pressed (1 selects the first slot).
    #[serde(default)]
    slot: Option<usize>,
}

pub struct ScriptedInputPlayer {
    steps: Vec<ScriptedStep>,
    index: usize,
    tick_in_step: u64,
}

impl ScriptedInputPlayer {
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> anyhow::Result<Self> {
        let file: ScriptedInputFile = serde_json::from_str(contents)?;
        if file.steps.is_empty() {
            anyhow::bail!("scripted input file contains no steps");
        }
        Ok(Self {
            steps: file.steps,
            index: 0,
            tick_in_step: 0,
        })
    }

    /// Input for the next tick; idle once every step has run.
    pub fn advance(&mut self) -> TickInput {
        while let Some(step) = self.steps.get(self.index) {
            if self.tick_in_step < step.ticks {
                break;
            }
            self.index += 1;
            self.tick_in_step = 0;
        }

        let Some(step) = self.steps.get(self.index) else {
            return TickInput::default();
        };
        let first_tick = self.tick_in_step == 0;
        self.tick_in_step += 1;
        step.to_tick_input(first_tick)
    }

    pub fn finished(&self) -> bool {
        let remaining = self
            .steps
            .iter()
            .skip(self.index)
            .map(|step| step.ticks)
            .sum::<u64>();
        remaining <= self.tick_in_step
    }
}

impl ScriptedStep {
    fn to_tick_input(&self, first_tick: bool) -> TickInput {
        let mut keys = HeldKeys::empty();
        keys.set(HeldKeys::FORWARD, self.forward);
        keys.set(HeldKeys::BACKWARD, self.backward);
        keys.set(HeldKeys::LEFT, self.left);
        keys.set(HeldKeys::RIGHT, self.right);
        keys.set(HeldKeys::JUMP, self.jump);
        keys.set(HeldKeys::SPRINT, self.sprint);
        keys.set(HeldKeys::CROUCH, self.crouch);

        TickInput {
            keys,
            look: LookDelta::new(self.look_x, self.look_y).sanitized(),
            actions: if first_tick {
                self.actions.clone()
            } else {
                Vec::new()
            },
            select_slot: if first_tick {
                self.slot.and_then(|key| key.checked_sub(1))
            } else {
                None
            },
        }
    }
}
