pub mod arena;
pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod snapshot;
pub mod sprites;
pub mod systems;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;
pub use snapshot::*;

use hecs::World;
use systems::*;

/// Run one tick of the joust simulation. Order matters: inputs, motion,
/// platform script, lava, platform collisions, bird collisions, facing,
/// clock.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    config: &Config,
    clock: &mut Clock,
    score: &mut Score,
    flash: &mut ScoreFlash,
    events: &mut Events,
    flags: &mut MatchFlags,
    inputs: &mut InputQueue,
) {
    events.clear();

    // Terminal state is absorbing: drop queued inputs, mutate nothing.
    if score.has_winner(config.win_score).is_some() {
        inputs.drain();
        return;
    }

    let control_live = flags.live() && clock.control_live();
    drain_inputs(world, inputs, flags, control_live);

    // Only motion integration and the clock are gated on the match being
    // live. The collision, lava and platform passes run every tick, so a
    // paused frame stays self-consistent (resting birds stay snapped to
    // their platforms, for instance).
    if flags.live() {
        integrate_birds(world);
    }
    if config.moving_platforms_enabled {
        drive_platforms(world, flags.started);
    }
    if config.lava_enabled {
        lava_pass(world, score, events);
        // A splash can end the match; stop before the bird pass can push
        // the score past the winning total in the same tick.
        if score.has_winner(config.win_score).is_some() {
            return;
        }
    }

    // Foot hitboxes are classified where the birds actually flew, so they
    // are captured before the platform pass rest-snaps anyone.
    let contacts = capture_foot_contacts(world);
    resolve_platform_collisions(world);
    if let Some(contacts) = contacts {
        bird_collision_pass(world, contacts, score, flash, clock, events);
    }
    update_facing(world);

    if flags.live() {
        clock.game_time += 1;
    }
}

/// Spawn a bird for `side` into the world.
pub fn create_bird(world: &mut World, side: Side) -> hecs::Entity {
    world.spawn((Bird::new(side),))
}

/// Spawn both platforms.
pub fn create_platforms(world: &mut World) {
    world.spawn((Platform::upper(),));
    world.spawn((Platform::lower(),));
}

/// A whole match: the world plus every piece of mutable match state. The
/// tick handler is the sole writer; shells queue inputs and flip config
/// toggles between ticks.
pub struct Match {
    pub world: World,
    pub config: Config,
    pub clock: Clock,
    pub score: Score,
    pub flash: ScoreFlash,
    pub events: Events,
    pub flags: MatchFlags,
    pub inputs: InputQueue,
}

impl Match {
    pub fn new(config: Config) -> Self {
        let mut world = World::new();
        create_bird(&mut world, Side::Left);
        create_bird(&mut world, Side::Right);
        create_platforms(&mut world);
        Self {
            world,
            config,
            clock: Clock::new(),
            score: Score::new(),
            flash: ScoreFlash::new(),
            events: Events::new(),
            flags: MatchFlags::new(),
            inputs: InputQueue::new(),
        }
    }

    /// Queue a discrete input; it takes effect at the top of the next
    /// tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.inputs.push(event);
    }

    /// Advance the simulation by one tick.
    pub fn tick(&mut self) {
        step(
            &mut self.world,
            &self.config,
            &mut self.clock,
            &mut self.score,
            &mut self.flash,
            &mut self.events,
            &mut self.flags,
            &mut self.inputs,
        );
    }

    /// Current externally visible state, derived fresh.
    pub fn phase(&self) -> MatchPhase {
        if let Some(winner) = self.score.has_winner(self.config.win_score) {
            return MatchPhase::GameOver(winner);
        }
        if !self.flags.started {
            return MatchPhase::NotStarted;
        }
        if self.flags.paused {
            return MatchPhase::Paused;
        }
        match self.clock.countdown_phase() {
            CountdownPhase::Done => MatchPhase::Playing,
            countdown => MatchPhase::Countdown(countdown),
        }
    }

    /// Per-tick renderer handoff.
    pub fn snapshot(&self) -> FrameSnapshot {
        snapshot::capture(
            &self.world,
            &self.config,
            self.score,
            &self.flash,
            self.phase(),
            self.clock.game_time,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started_match() -> Match {
        let mut game = Match::new(Config::new());
        game.push_input(InputEvent::TogglePause);
        game.tick();
        game
    }

    #[test]
    fn test_new_match_is_not_started() {
        let game = Match::new(Config::new());
        assert_eq!(game.phase(), MatchPhase::NotStarted);
        assert_eq!(game.snapshot().score, Score::new());
    }

    #[test]
    fn test_nothing_moves_before_start() {
        let mut game = Match::new(Config::new());
        let before = game.snapshot();
        for _ in 0..50 {
            game.tick();
        }
        let after = game.snapshot();
        assert_eq!(before.birds[0].pos, after.birds[0].pos);
        assert_eq!(game.clock.game_time, 0);
    }

    #[test]
    fn test_enter_starts_the_countdown() {
        let game = started_match();
        assert_eq!(game.phase(), MatchPhase::Countdown(CountdownPhase::Ready));
        assert_eq!(game.clock.game_time, 1);
    }

    #[test]
    fn test_pause_freezes_positions_and_clock() {
        let mut game = started_match();
        for _ in 0..10 {
            game.tick();
        }
        game.push_input(InputEvent::TogglePause);
        game.tick();
        assert_eq!(game.phase(), MatchPhase::Paused);

        let frozen = game.snapshot();
        let time = game.clock.game_time;
        for _ in 0..20 {
            game.tick();
        }
        assert_eq!(game.snapshot().birds[0].pos, frozen.birds[0].pos);
        assert_eq!(game.clock.game_time, time);
    }

    #[test]
    fn test_game_over_is_absorbing() {
        let mut game = started_match();
        game.score.left = game.config.win_score;

        let winner = match game.phase() {
            MatchPhase::GameOver(side) => side,
            phase => panic!("expected game over, got {phase:?}"),
        };
        assert_eq!(winner, Side::Left);

        let frozen = game.snapshot();
        game.push_input(InputEvent::Move {
            side: Side::Right,
            dir: Dir::Left,
        });
        for _ in 0..30 {
            game.tick();
        }
        let after = game.snapshot();
        assert_eq!(after.score, frozen.score);
        assert_eq!(after.birds[1].pos, frozen.birds[1].pos);
        assert!(game.inputs.is_empty(), "queued inputs are discarded");
    }

    #[test]
    fn test_score_never_exceeds_win_score() {
        let mut game = started_match();
        game.config.lava_enabled = true;
        game.clock.game_time = 200; // past the countdown

        // Drop the right bird into the lava over and over.
        for _ in 0..5000 {
            if let Some((_e, bird)) = game
                .world
                .query_mut::<&mut Bird>()
                .into_iter()
                .find(|(_e, b)| b.side == Side::Right)
            {
                bird.pos.y = 560.0;
            }
            game.tick();
        }
        assert_eq!(game.score.left, game.config.win_score);
    }
}
