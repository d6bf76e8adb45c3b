//! Round controller.
//!
//! Owns the world and every resource for one game session and drives the
//! phase machine from host input: splash until the first tap, the full
//! simulation while playing, and the crash animation until the player has
//! landed and taps again.

use hecs::{Entity, World};

use crate::components::{CrashKind, Floor};
use crate::config::Config;
use crate::effects::ActiveEffects;
use crate::map::GameMap;
use crate::params::Params;
use crate::phase::{GamePhase, PhaseAction, PhaseMachine, TransitionResult};
use crate::player::{Player, PlayerMode};
use crate::resources::*;
use crate::systems::*;
use crate::{create_floor, create_player, step};

pub struct Game {
    pub world: World,
    pub time: Time,
    pub map: GameMap,
    pub config: Config,
    pub score: Score,
    pub effects: ActiveEffects,
    pub spawner: PowerUpSpawner,
    pub events: Events,
    pub rng: GameRng,
    fsm: PhaseMachine,
    player: Entity,
    floor: Entity,
    round: u32,
    quit: bool,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self::with_config(Config::new(), seed)
    }

    pub fn with_config(config: Config, seed: u64) -> Self {
        let map = GameMap::new(&config);
        let mut world = World::new();
        let mut rng = GameRng::new(seed);
        let (player, floor) = populate_round(&mut world, &map, &config, &mut rng);
        let spawner = first_spawner(&config, &mut rng);

        Self {
            world,
            time: Time::default(),
            map,
            config,
            score: Score::new(),
            effects: ActiveEffects::new(),
            spawner,
            events: Events::new(),
            rng,
            fsm: PhaseMachine::new(),
            player,
            floor,
            round: 1,
            quit: false,
        }
    }

    /// Advance one frame
    ///
    /// Inputs are handled first; only the first phase change per tick is
    /// honoured and later taps in the same batch are dropped. Quit stops
    /// the tick immediately. If the round also ends during this tick, the
    /// later Collided transition is the one returned.
    pub fn tick(&mut self, inputs: &[InputEvent], dt_ms: u32) -> Option<TransitionResult> {
        self.events.clear();
        if self.quit {
            return None;
        }
        self.time.advance(dt_ms.min(Params::MAX_DT_MS));

        let mut transition = None;
        for input in inputs {
            match input {
                InputEvent::Quit => {
                    log::info!("quit requested");
                    self.quit = true;
                    return transition;
                }
                InputEvent::Tap => {
                    if transition.is_none() {
                        transition = self.on_tap();
                    }
                }
            }
        }

        match self.fsm.phase() {
            GamePhase::Splash => {
                scroll_floor(&mut self.world);
                move_player(&mut self.world);
            }
            GamePhase::Playing => {
                let crash = step(
                    &mut self.world,
                    &self.time,
                    &self.map,
                    &self.config,
                    &mut self.score,
                    &mut self.effects,
                    &mut self.spawner,
                    &mut self.events,
                    &mut self.rng,
                );
                if let Some(kind) = crash {
                    transition = Some(self.enter_game_over(kind));
                }
            }
            GamePhase::GameOver => {
                scroll_world(&mut self.world);
                move_player(&mut self.world);
            }
        }

        transition
    }

    fn on_tap(&mut self) -> Option<TransitionResult> {
        match self.fsm.phase() {
            GamePhase::Splash => {
                let result = self.fsm.transition(PhaseAction::Tap);
                self.start_playing();
                Some(result)
            }
            GamePhase::Playing => {
                apply_flap(&mut self.world, &mut self.events);
                None
            }
            GamePhase::GameOver => {
                if !self.player_landed() {
                    return None;
                }
                let result = self.fsm.transition(PhaseAction::Restart);
                self.new_round();
                Some(result)
            }
        }
    }

    fn start_playing(&mut self) {
        self.score.reset();
        if let Ok(mut player) = self.world.get::<&mut Player>(self.player) {
            player.set_mode(PlayerMode::Flying, &mut self.events);
        }
        log::info!("round {} started", self.round);
    }

    fn enter_game_over(&mut self, kind: CrashKind) -> TransitionResult {
        let result = self.fsm.transition(PhaseAction::Collided);
        clear_effects(&mut self.world, &mut self.effects);
        if let Ok(mut player) = self.world.get::<&mut Player>(self.player) {
            player.set_mode(PlayerMode::Crashing, &mut self.events);
        }
        stop_scrolling(&mut self.world);
        log::info!(
            "round {} over: hit {:?} with score {}",
            self.round,
            kind,
            self.score.value
        );
        result
    }

    /// Tear the round down and build a fresh one on the splash screen
    fn new_round(&mut self) {
        self.world.clear();
        let (player, floor) =
            populate_round(&mut self.world, &self.map, &self.config, &mut self.rng);
        self.player = player;
        self.floor = floor;
        self.spawner = first_spawner(&self.config, &mut self.rng);
        self.effects.clear();
        self.score.reset();
        self.fsm.reset();
        self.round += 1;
        self.events.play(Sound::Swoosh);
    }

    /// Whether the crashed player has reached the floor
    pub fn player_landed(&self) -> bool {
        match (self.player(), self.floor()) {
            (Some(player), Some(floor)) => player.bottom() >= floor.y,
            _ => false,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.fsm.phase()
    }

    pub fn player(&self) -> Option<hecs::Ref<'_, Player>> {
        self.world.get::<&Player>(self.player).ok()
    }

    pub fn player_mut(&mut self) -> Option<hecs::RefMut<'_, Player>> {
        self.world.get::<&mut Player>(self.player).ok()
    }

    pub fn floor(&self) -> Option<hecs::Ref<'_, Floor>> {
        self.world.get::<&Floor>(self.floor).ok()
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}

fn populate_round(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    rng: &mut GameRng,
) -> (Entity, Entity) {
    let floor = create_floor(world, config);
    spawn_initial_pipes(world, map, config, rng);
    let player = create_player(world, config);
    (player, floor)
}

fn first_spawner(config: &Config, rng: &mut GameRng) -> PowerUpSpawner {
    let (min, max) = config.powerup_spawn_range();
    PowerUpSpawner::new(rng.gen_range_u32(min, max))
}
