use crate::params::Params;

/// Runtime game configuration, including the three option toggles from the
/// settings screen. Toggles may be flipped asynchronously by the shell;
/// the simulation reads them at the top of each tick.
#[derive(Debug, Clone)]
pub struct Config {
    pub win_score: u8,
    pub lava_enabled: bool,
    /// Cosmetic only; carried through to the renderer untouched.
    pub background_enabled: bool,
    pub moving_platforms_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            win_score: Params::WIN_SCORE,
            lava_enabled: false,
            background_enabled: false,
            moving_platforms_enabled: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_a_plain_match() {
        let config = Config::new();
        assert_eq!(config.win_score, 10);
        assert!(!config.lava_enabled);
        assert!(!config.background_enabled);
        assert!(!config.moving_platforms_enabled);
    }
}
