mod playback;
mod session;

pub use playback::{PlaybackHandle, Scheduler};
pub use session::{Session, Snapshot, Stats};
