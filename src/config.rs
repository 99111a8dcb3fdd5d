use crate::domain::Algorithm;
use crate::error::{Result, ValidationError};

/// Default board is 25x25 = 625 cells
pub const DEFAULT_ROWS: usize = 25;
pub const DEFAULT_COLS: usize = 25;

/// Steps per second while playing
pub const DEFAULT_FREQ: f32 = 10.0;

/// Edges are connected (torus) unless turned off
pub const DEFAULT_WRAP: bool = true;

/// Largest side the front-end lets the user type in
pub const MAX_DIMENSION: usize = 500;

/// Largest board the engine accepts (4096x4096)
pub const MAX_CELLS: usize = 1 << 24;

/// Startup parameters for a simulation session
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    pub rows: usize,
    pub cols: usize,
    pub wrap: bool,
    /// Playback rate in steps per second
    pub freq: f32,
    pub algorithm: Algorithm,
    /// Seed the board on creation (the default randomize density)
    pub randomize_on_start: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            wrap: DEFAULT_WRAP,
            freq: DEFAULT_FREQ,
            algorithm: Algorithm::default(),
            randomize_on_start: true,
        }
    }
}

impl SimConfig {
    pub fn with_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_freq(mut self, freq: f32) -> Self {
        self.freq = freq;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Start from an all-dead board instead of a random one
    pub fn empty(mut self) -> Self {
        self.randomize_on_start = false;
        self
    }

    /// Reject configurations a session could not be built from
    pub fn validate(&self) -> Result<()> {
        ValidationError::check_shape(self.rows, self.cols)?;
        ValidationError::check_frequency(self.freq)?;
        Ok(())
    }
}
