use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use maze_game_core::GridSize;
use maze_game_world::DEFAULT_MAZE_SIZE;
use serde::Deserialize;

/// Largest accepted number of columns or rows.
pub(crate) const MAX_MAZE_SIZE: u32 = 1024;

/// Game settings gathered from the optional config file and the command line.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct GameConfig {
    /// Number of maze columns.
    pub(crate) width: u32,
    /// Number of maze rows.
    pub(crate) height: u32,
    /// Seed of the first maze; drawn from entropy when absent.
    pub(crate) seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_MAZE_SIZE,
            height: DEFAULT_MAZE_SIZE,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads the config file at `path`, falling back to defaults without one.
    pub(crate) fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("failed to parse config toml contents")
    }

    /// Applies command-line values on top of the loaded settings.
    #[must_use]
    pub(crate) fn with_overrides(
        mut self,
        width: Option<u32>,
        height: Option<u32>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(width) = width {
            self.width = width;
        }
        if let Some(height) = height {
            self.height = height;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Rejects dimensions too large to carve in memory.
    ///
    /// Zero dimensions pass through so generation reports them itself.
    pub(crate) fn validate(self) -> Result<Self> {
        if self.width > MAX_MAZE_SIZE || self.height > MAX_MAZE_SIZE {
            bail!(
                "maze size {}x{} exceeds the limit of {MAX_MAZE_SIZE} cells per side",
                self.width,
                self.height
            );
        }
        Ok(self)
    }

    /// Maze dimensions described by the settings.
    #[must_use]
    pub(crate) fn size(&self) -> GridSize {
        GridSize::new(self.width, self.height)
    }

    /// Configured seed, or a fresh random one.
    #[must_use]
    pub(crate) fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
