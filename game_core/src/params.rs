/// Game tuning parameters for Jousty
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (origin top-left, y grows downward)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;
    pub const FLOOR_Y: f32 = 599.0;

    // Bird physics
    pub const GRAVITY: f32 = 0.5; // per tick
    pub const DRAG: f32 = 0.96;
    pub const FLOOR_DAMPING: f32 = -0.1; // soft bounce off the floor
    pub const WALL_REFLECT: f32 = -0.5; // ceiling and side walls
    pub const JUMP_SPEED: f32 = 9.0;
    pub const BOUNCE_KICK: f32 = 20.0; // separation shove on a side-on bump

    // Underside hits amplify rather than damp. Deliberate tuning value,
    // do not change without gameplay sign-off.
    pub const UNDERSIDE_BOUNCE: f32 = -1.25;

    // Platforms
    pub const PLATFORM_MIN_OVERLAP: f32 = 10.0; // filters glancing contact
    pub const UPPER_WALL_SLIDE: f32 = 1.0;
    pub const UPPER_WALL_ROW_DROP: f32 = 50.0;
    pub const UPPER_WALL_JUMP_BACK: f32 = 700.0;
    pub const UPPER_WALL_MAX_Y: f32 = 400.0;
    pub const UPPER_WALL_PARK_X: f32 = 650.0;
    pub const BOTTOM_WALL_STEP: f32 = 2.0;

    // Spawns and respawns
    pub const SPAWN_Y: f32 = 150.0;
    pub const LEFT_SPAWN_X: f32 = 100.0;
    pub const RIGHT_SPAWN_X: f32 = 700.0;
    pub const LOSER_RESPAWN_Y: f32 = 40.0;
    pub const RESPAWN_MIDLINE: f32 = 400.0;

    // Lava
    pub const LAVA_LINE: f32 = 550.0;
    pub const LAVA_RESPAWN_Y: f32 = 100.0;
    pub const LAVA_LAUNCH_VY: f32 = -10.0;

    // Score
    pub const WIN_SCORE: u8 = 10; // first to 10 wins
    pub const FLASH_TICKS: u32 = 100; // "X SCORED!" banner lifetime

    // Countdown thresholds (ticks)
    pub const READY_END: u32 = 25;
    pub const SET_END: u32 = 50;
    pub const GO_END: u32 = 100;

    // Tick rate all the tick-denominated constants above assume
    pub const TICK_HZ: u32 = 50;
}
