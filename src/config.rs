//! Settings shared by the runtime and the terminal front-end.

use std::path::PathBuf;

/// Default limit for active chapter and repetition frames.
pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Debug, Clone)]
pub struct Config {
    /// Folder holding the `.txt` scripts; projects live in `projects/` below it.
    pub scripts_dir: PathBuf,
    /// How many chapter and `rpl` frames may be active at once.
    pub max_depth: usize,
    /// Whether `con !...` may reach the host shell.
    pub allow_host_commands: bool,
    /// Whether `print col` renders colors.
    pub color: bool,
    /// RNG seed for reproducible `random`; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scripts_dir: PathBuf::from("Scripts"),
            max_depth: DEFAULT_MAX_DEPTH,
            allow_host_commands: false,
            color: true,
            seed: None,
        }
    }
}

impl Config {
    pub fn with_scripts_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.scripts_dir = dir.into();
        self
    }

    /// Set the frame limit; at least one frame is always allowed.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth.max(1);
        self
    }

    pub fn with_host_commands(mut self, allow: bool) -> Self {
        self.allow_host_commands = allow;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn projects_dir(&self) -> PathBuf {
        self.scripts_dir.join("projects")
    }
}
