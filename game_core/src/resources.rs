use crate::components::{Dir, Side};
use crate::params::Params;

/// Match score. First to `Config::win_score` ends the match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,
    pub right: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Countdown overlay phase, derived from the tick counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownPhase {
    Ready,
    Set,
    Go,
    Done,
}

/// Tick counter. Advances only while the match is live and never resets.
#[derive(Debug, Clone, Copy, Default)]
pub struct Clock {
    pub game_time: u32,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ready [0,25), Set [25,50), Go [50,100), then done.
    pub fn countdown_phase(&self) -> CountdownPhase {
        match self.game_time {
            t if t < Params::READY_END => CountdownPhase::Ready,
            t if t < Params::SET_END => CountdownPhase::Set,
            t if t < Params::GO_END => CountdownPhase::Go,
            _ => CountdownPhase::Done,
        }
    }

    /// Move inputs unlock on the tick "GO!" first shows.
    pub fn control_live(&self) -> bool {
        self.game_time >= Params::SET_END
    }
}

/// Started/paused latch. `paused` begins true; the first unpause marks the
/// match as started.
#[derive(Debug, Clone, Copy)]
pub struct MatchFlags {
    pub started: bool,
    pub paused: bool,
}

impl Default for MatchFlags {
    fn default() -> Self {
        Self {
            started: false,
            paused: true,
        }
    }
}

impl MatchFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        if !self.paused {
            self.started = true;
        }
    }

    /// Live: physics runs and the clock advances.
    pub fn live(&self) -> bool {
        self.started && !self.paused
    }
}

/// "X SCORED!" banner flags with their shared raise tick. Both expire
/// together 100 ticks after the last score.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreFlash {
    pub left: bool,
    pub right: bool,
    pub last_score_tick: u32,
}

impl ScoreFlash {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&mut self, side: Side, tick: u32) {
        match side {
            Side::Left => self.left = true,
            Side::Right => self.right = true,
        }
        self.last_score_tick = tick;
    }

    /// Called on quiet ticks (no score, no bump).
    pub fn expire(&mut self, now: u32) {
        if self.last_score_tick + Params::FLASH_TICKS < now {
            self.left = false;
            self.right = false;
        }
    }
}

/// Things that happened during the current tick, for renderers and sound.
/// Cleared at the start of every tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub bird_bumped: bool,
    pub splashed: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn mark_scored(&mut self, side: Side) {
        match side {
            Side::Left => self.left_scored = true,
            Side::Right => self.right_scored = true,
        }
    }
}

/// One discrete input, queued by the shell and drained at the top of the
/// next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Move { side: Side, dir: Dir },
    TogglePause,
}

/// Input event queue. The shell pushes between ticks, the tick drains once;
/// the tick handler stays the sole writer of match state.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Externally visible match state, derived fresh for every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    NotStarted,
    Countdown(CountdownPhase),
    Playing,
    Paused,
    GameOver(Side),
}
