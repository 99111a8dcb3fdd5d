// Domain layer - board, neighborhood, step, resize, seeding
pub mod domain;

// Application layer - session and playback
pub mod application;

pub mod config;
pub mod error;

// Infrastructure layer - UI, rendering, input
pub mod input;
pub mod rendering;
pub mod ui;

// Re-exports for convenience
pub use application::{PlaybackHandle, Session, Snapshot, Stats};
pub use config::SimConfig;
pub use domain::{Algorithm, Cell, Grid};
pub use error::{Result, ValidationError};
