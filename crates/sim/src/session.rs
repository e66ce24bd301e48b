//! Per-frame orchestration of look, hotbar, actions and movement.

use blockworld_camera::{Camera, CameraPose};
use blockworld_core::{scoped_rng, PointerAction, SimTick, TickInput};
use blockworld_player::PlayerController;
use blockworld_world::{
    generate_world, BlockEvent, GenerationStats, Hotbar, Ray, TargetOutcome, Targeting, World,
};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::{ConfigError, SessionConfig, WORLDGEN_DOMAIN};

/// One resolved pointer action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActionOutcome {
    /// Which button fired.
    pub action: PointerAction,
    /// What it did.
    pub outcome: TargetOutcome,
}

/// Everything a renderer needs after one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameOutput {
    /// Tick that produced this output.
    pub tick: SimTick,
    /// Eye pose after movement.
    pub pose: CameraPose,
    /// Registry mutations since the previous frame, in order.
    pub events: Vec<BlockEvent>,
    /// Resolved actions, in input order.
    pub actions: Vec<ActionOutcome>,
    /// Highlighted hotbar slot.
    pub selected_slot: usize,
}

/// A running sandbox.
#[derive(Debug)]
pub struct Session {
    tick: SimTick,
    seed: u64,
    world: World,
    player: PlayerController,
    hotbar: Hotbar,
    targeting: Targeting,
    camera: Camera,
    generation: GenerationStats,
}

impl Session {
    /// Validate `config`, generate the world and spawn the player.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config
            .seed
            .unwrap_or_else(|| rand::thread_rng().gen::<u64>());
        let mut world = World::new();
        let mut rng = scoped_rng(seed, WORLDGEN_DOMAIN);
        let generation = generate_world(&mut world, &config.world, &mut rng);
        info!(seed, blocks = world.blocks().len(), "session started");
        Ok(Self::assemble(config, seed, world, generation))
    }

    /// Start a session over a prebuilt world; no generation runs.
    pub fn with_world(config: SessionConfig, world: World) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_default();
        Ok(Self::assemble(
            config,
            seed,
            world,
            GenerationStats::default(),
        ))
    }

    fn assemble(
        config: SessionConfig,
        seed: u64,
        world: World,
        generation: GenerationStats,
    ) -> Self {
        let player = PlayerController::new(config.player);
        let camera = Camera::new(player.camera_pose());
        Self {
            tick: SimTick::ZERO,
            seed,
            world,
            player,
            hotbar: Hotbar::new(config.hotbar),
            targeting: Targeting::new(config.targeting),
            camera,
            generation,
        }
    }

    /// Ticks simulated so far.
    pub fn tick(&self) -> SimTick {
        self.tick
    }

    /// Seed the world was generated from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The block world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The player.
    pub fn player(&self) -> &PlayerController {
        &self.player
    }

    /// The hotbar.
    pub fn hotbar(&self) -> &Hotbar {
        &self.hotbar
    }

    /// Summary of world generation.
    pub fn generation(&self) -> GenerationStats {
        self.generation
    }

    /// Camera tracking the player's eye.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Resize the viewport used for screen-space picking.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.camera.set_aspect(width, height);
    }

    /// Registry mutations accumulated so far (world generation included).
    pub fn drain_events(&mut self) -> Vec<BlockEvent> {
        self.world.drain_events()
    }

    /// Run one frame: look, slot selection, pointer actions, then movement.
    pub fn frame(&mut self, input: &TickInput) -> FrameOutput {
        self.player.apply_look(input.look);

        if let Some(slot) = input.select_slot {
            if !self.hotbar.select(slot) {
                debug!(slot, "hotbar slot out of range");
            }
        }

        let actions = input
            .actions
            .iter()
            .map(|&action| {
                let pose = self.player.camera_pose();
                let ray = Ray::new(pose.position, pose.forward());
                ActionOutcome {
                    action,
                    outcome: self.resolve_action(action, ray),
                }
            })
            .collect();

        let pose = self.player.tick(&self.world, input.keys);
        self.camera.pose = pose;
        self.tick = self.tick.advance(1);

        FrameOutput {
            tick: self.tick,
            pose,
            events: self.world.drain_events(),
            actions,
            selected_slot: self.hotbar.selected_slot(),
        }
    }

    /// Resolve an action along the ray through a viewport pixel.
    pub fn act_at_screen(
        &mut self,
        action: PointerAction,
        screen_pos: (f32, f32),
        screen_size: (u32, u32),
    ) -> TargetOutcome {
        let (origin, direction) = self.camera.screen_to_ray(screen_pos, screen_size);
        self.resolve_action(action, Ray::new(origin, direction))
    }

    fn resolve_action(&mut self, action: PointerAction, ray: Ray) -> TargetOutcome {
        let feet = self.player.position();
        match action {
            PointerAction::Primary => self.targeting.break_block(&mut self.world, ray, feet),
            PointerAction::Secondary => {
                let block_type = self.hotbar.selected_type();
                self.targeting
                    .place_block(&mut self.world, ray, feet, block_type)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockworld_core::{BlockType, HeldKeys, LookDelta, MAX_LOOK_DELTA};
    use glam::{IVec3, Vec3};

    fn floor_session() -> Session {
        let mut world = World::new();
        for x in -2..=2 {
            for z in -2..=2 {
                world.insert(IVec3::new(x, 0, z), BlockType::Grass);
            }
        }
        world.drain_events();
        let mut config = SessionConfig::default();
        config.player.spawn = Vec3::new(0.5, 1.0001, 0.5);
        Session::with_world(config, world).expect("valid config")
    }

    fn look_down() -> TickInput {
        TickInput {
            look: LookDelta::new(0.0, MAX_LOOK_DELTA),
            ..Default::default()
        }
    }

    #[test]
    fn same_seed_generates_same_world() {
        let config = SessionConfig {
            seed: Some(99),
            world: blockworld_world::WorldGenConfig {
                half_width: 8,
                tree_probability: 0.2,
                ..Default::default()
            },
            ..Default::default()
        };
        let a = Session::new(config.clone()).expect("valid");
        let b = Session::new(config).expect("valid");
        let blocks_a: Vec<_> = a.world().blocks().all().collect();
        let blocks_b: Vec<_> = b.world().blocks().all().collect();
        assert_eq!(blocks_a, blocks_b);
        assert_eq!(a.generation(), b.generation());
        assert_eq!(a.seed(), 99);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SessionConfig {
            hotbar: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(
            Session::with_world(config, World::new()),
            Err(ConfigError::EmptyHotbar)
        ));
    }

    #[test]
    fn idle_frame_advances_tick_without_events() {
        let mut session = floor_session();
        let out = session.frame(&TickInput::default());
        assert_eq!(out.tick, SimTick::ZERO.advance(1));
        assert!(out.events.is_empty());
        assert!(out.actions.is_empty());
        assert_eq!(out.selected_slot, 0);
    }

    #[test]
    fn primary_removes_block_underfoot() {
        let mut session = floor_session();
        let mut input = look_down();
        input.actions.push(PointerAction::Primary);

        let out = session.frame(&input);
        assert_eq!(out.actions.len(), 1);
        match out.actions[0].outcome {
            TargetOutcome::Removed { block, .. } => {
                assert_eq!(block.position, IVec3::ZERO);
            }
            other => panic!("expected removal, got {other:?}"),
        }
        assert!(matches!(out.events[..], [BlockEvent::Removed { .. }]));
        assert!(session.world().find_at(IVec3::ZERO).is_none());
    }

    #[test]
    fn secondary_places_selected_type_on_top_face() {
        let mut session = floor_session();
        let mut input = look_down();
        input.select_slot = Some(2);
        input.actions.push(PointerAction::Secondary);

        let out = session.frame(&input);
        assert_eq!(out.selected_slot, 2);
        match out.actions[0].outcome {
            TargetOutcome::Placed { block, .. } => {
                assert_eq!(block.position, IVec3::new(0, 1, 0));
                assert_eq!(block.block_type, BlockType::ALL[2]);
            }
            other => panic!("expected placement, got {other:?}"),
        }
        assert!(matches!(out.events[..], [BlockEvent::Added { .. }]));
    }

    #[test]
    fn actions_resolve_in_input_order() {
        let mut session = floor_session();
        let mut input = look_down();
        input.actions = vec![PointerAction::Primary, PointerAction::Primary];

        let out = session.frame(&input);
        assert!(matches!(
            out.actions[0].outcome,
            TargetOutcome::Removed { .. }
        ));
        // Nothing remains under the first hole.
        assert_eq!(out.actions[1].outcome, TargetOutcome::NoTarget);
        assert_eq!(out.events.len(), 1);
    }

    #[test]
    fn out_of_range_slot_keeps_selection() {
        let mut session = floor_session();
        let input = TickInput {
            select_slot: Some(50),
            ..Default::default()
        };
        assert_eq!(session.frame(&input).selected_slot, 0);
    }

    #[test]
    fn horizon_view_finds_nothing_on_flat_floor() {
        let mut session = floor_session();
        let input = TickInput {
            actions: vec![PointerAction::Primary],
            ..Default::default()
        };
        let out = session.frame(&input);
        assert_eq!(out.actions[0].outcome, TargetOutcome::NoTarget);
    }

    #[test]
    fn screen_center_ray_matches_forward() {
        let mut session = floor_session();
        session.frame(&look_down());
        session.set_viewport(800, 600);
        let outcome = session.act_at_screen(PointerAction::Primary, (400.0, 300.0), (800, 600));
        assert!(matches!(outcome, TargetOutcome::Removed { .. }));
    }

    #[test]
    fn walking_moves_camera_with_player() {
        let mut session = floor_session();
        let start = session.player().position();
        let out = session.frame(&TickInput::with_keys(HeldKeys::FORWARD));
        assert!(out.pose.position.z < start.z);
        assert_eq!(session.camera().pose, out.pose);
    }
}
