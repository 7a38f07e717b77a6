//! Simulation settings read from the environment.
use std::env;
use std::path::PathBuf;

/// Where the level comes from and how long to run it.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// TOML game configuration. Built-in defaults when unset.
    pub config_path: Option<PathBuf>,
    /// RON map layout. The demo level when unset.
    pub map_path: Option<PathBuf>,
    /// RON scenario. The demo scenario when unset.
    pub scenario_path: Option<PathBuf>,
    /// Scheduler rounds to run.
    pub turns: u32,
    /// Give the player a wandering brain so monsters have something to hunt.
    pub player_wanders: bool,
}

impl SimConfig {
    pub const DEFAULT_TURNS: u32 = 50;

    /// Construct simulation configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DUNGEON_CONFIG` - Path to a game configuration file (TOML)
    /// - `DUNGEON_MAP` - Path to a map layout (RON)
    /// - `DUNGEON_SCENARIO` - Path to a scenario (RON)
    /// - `DUNGEON_TURNS` - Number of rounds to run (default: 50)
    /// - `DUNGEON_PLAYER_WANDERS` - `true`/`false` (default: true)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            config_path: env::var_os("DUNGEON_CONFIG").map(PathBuf::from),
            map_path: env::var_os("DUNGEON_MAP").map(PathBuf::from),
            scenario_path: env::var_os("DUNGEON_SCENARIO").map(PathBuf::from),
            turns: read_env::<u32>("DUNGEON_TURNS").unwrap_or(defaults.turns),
            player_wanders: read_env_bool("DUNGEON_PLAYER_WANDERS")
                .unwrap_or(defaults.player_wanders),
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            map_path: None,
            scenario_path: None,
            turns: Self::DEFAULT_TURNS,
            player_wanders: true,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
