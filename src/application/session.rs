use std::time::Instant;

use rand::Rng;
use rand::rngs::ThreadRng;

use super::playback::{PlaybackHandle, Scheduler};
use crate::config::SimConfig;
use crate::domain::{Algorithm, Cell, Grid, resize, seeder, step};
use crate::error::{Result, ValidationError};

/// Counters shown next to the board after every intent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stats {
    pub generation: u64,
    pub cells: usize,
    pub alive: usize,
    pub dead: usize,
}

/// Read-only view handed to the renderer
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub stats: Stats,
    pub rows: usize,
    pub cols: usize,
    pub wrap: bool,
    pub running: bool,
    pub freq: f32,
    pub algorithm: Algorithm,
    pub cells: &'a [Cell],
}

/// Session owns one simulation: the board, its counters and its playback.
/// This is the application layer; every user intent goes through it.
pub struct Session<R: Rng = ThreadRng> {
    grid: Grid,
    generation: u64,
    alive: usize,
    algorithm: Algorithm,
    freq: f32,
    scheduler: Scheduler,
    rng: R,
    pub last_step_time_ms: f32,
}

impl Session {
    /// Default 25x25 wrapped board with random content
    pub fn new() -> Self {
        let config = SimConfig::default();
        let mut session = Self::build(&config, rand::rng());
        session.seed_default();
        session
    }

    pub fn with_config(config: SimConfig) -> Result<Self> {
        Session::with_rng(config, rand::rng())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Session<R> {
    /// Create a session drawing its randomness from `rng`
    pub fn with_rng(config: SimConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let mut session = Self::build(&config, rng);
        if config.randomize_on_start {
            session.seed_default();
        }
        Ok(session)
    }

    fn build(config: &SimConfig, rng: R) -> Self {
        Self {
            grid: Grid::new(config.rows, config.cols, config.wrap),
            generation: 0,
            alive: 0,
            algorithm: config.algorithm,
            freq: config.freq,
            scheduler: Scheduler::new(),
            rng,
            last_step_time_ms: 0.0,
        }
    }

    fn seed_default(&mut self) {
        self.alive = seeder::seed_default(&mut self.grid, &mut self.rng);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn alive(&self) -> usize {
        self.alive
    }

    pub fn dead(&self) -> usize {
        self.grid.len() - self.alive
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Playback rate in steps per second
    pub fn freq(&self) -> f32 {
        self.freq
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn wrap(&self) -> bool {
        self.grid.wrap()
    }

    pub fn stats(&self) -> Stats {
        Stats {
            generation: self.generation,
            cells: self.grid.len(),
            alive: self.alive,
            dead: self.dead(),
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let (rows, cols) = self.grid.dimensions();
        Snapshot {
            stats: self.stats(),
            rows,
            cols,
            wrap: self.grid.wrap(),
            running: self.is_running(),
            freq: self.freq,
            algorithm: self.algorithm,
            cells: self.grid.cells(),
        }
    }

    /// Flat index of (row, col), rejecting positions off the board
    pub fn index_of(&self, row: usize, col: usize) -> Result<usize> {
        let (rows, cols) = self.grid.dimensions();
        self.grid
            .index_of(row, col)
            .ok_or(ValidationError::Position { row, col, rows, cols })
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell> {
        let index = self.index_of(row, col)?;
        Ok(self.grid.get(index).unwrap_or_default())
    }

    /// Make one cell alive or dead. Setting a cell to the state it already
    /// has changes nothing.
    pub fn toggle_cell(&mut self, index: usize, set_alive: bool) -> Result<Stats> {
        let cells = self.grid.len();
        let previous = self
            .grid
            .set(index, Cell::from_alive(set_alive))
            .ok_or(ValidationError::CellIndex { index, cells })?;

        match (previous.is_alive(), set_alive) {
            (false, true) => self.alive += 1,
            (true, false) => self.alive -= 1,
            _ => {}
        }
        Ok(self.stats())
    }

    /// Same as [`Session::toggle_cell`], addressed by position
    pub fn set_cell_at(&mut self, row: usize, col: usize, set_alive: bool) -> Result<Stats> {
        let index = self.index_of(row, col)?;
        self.toggle_cell(index, set_alive)
    }

    /// Advance one generation
    pub fn step(&mut self) -> Stats {
        let start = Instant::now();
        self.alive = step::advance(&mut self.grid, self.algorithm);
        self.generation += 1;
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.stats()
    }

    /// Start (or keep) stepping at `freq` steps per second
    pub fn play(&mut self, freq: f32) -> Result<PlaybackHandle> {
        let freq = ValidationError::check_frequency(freq)?;
        if self.is_running() && freq != self.freq {
            self.scheduler.cancel();
        }
        self.freq = freq;
        let handle = self.scheduler.start(freq)?;
        log::debug!("playing at {freq} steps/s");
        Ok(handle)
    }

    /// Stop periodic stepping. Does nothing if already paused.
    pub fn pause(&mut self) -> bool {
        let was_running = self.scheduler.cancel();
        if was_running {
            log::debug!("paused at generation {}", self.generation);
        }
        was_running
    }

    /// Play if paused, pause if playing
    pub fn toggle_playing(&mut self) -> Result<bool> {
        if self.pause() {
            Ok(false)
        } else {
            self.play(self.freq)?;
            Ok(true)
        }
    }

    /// Change the playback rate. Playback (re)starts at the new rate, whether
    /// or not it was running.
    pub fn set_freq(&mut self, freq: f32) -> Result<PlaybackHandle> {
        let freq = ValidationError::check_frequency(freq)?;
        self.pause();
        self.play(freq)
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    /// Host frame hook: runs a step when playback says one is due
    pub fn tick(&mut self, delta_time: f32) -> Option<Stats> {
        self.scheduler
            .advance(delta_time)
            .then(|| self.step())
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) -> Stats {
        self.pause();
        self.grid.clear();
        self.generation = 0;
        self.alive = 0;
        self.stats()
    }

    /// Reseed with `k` live cells, or the default random count when `None`
    pub fn randomize(&mut self, k: Option<usize>) -> Result<Stats> {
        let cells = self.grid.len();
        if let Some(requested) = k.filter(|&k| k > cells) {
            return Err(ValidationError::SeedCount { requested, cells });
        }

        self.pause();
        self.alive = match k {
            Some(k) => seeder::seed(&mut self.grid, k, &mut self.rng)?,
            None => seeder::seed_default(&mut self.grid, &mut self.rng),
        };
        self.generation = 0;
        log::debug!("randomized {} of {cells} cells", self.alive);
        Ok(self.stats())
    }

    /// Reshape the board, keeping every cell whose position survives
    pub fn resize(&mut self, rows: i64, cols: i64) -> Result<Stats> {
        let (rows, cols) = ValidationError::check_dimensions(rows, cols)?;

        self.pause();
        self.alive = resize::resize(&mut self.grid, rows, cols)?;
        self.generation = 0;
        log::debug!("resized to {rows}x{cols}, {} alive", self.alive);
        Ok(self.stats())
    }

    /// Change the edge policy for subsequent steps
    pub fn set_wrap(&mut self, wrap: bool) -> Stats {
        self.pause();
        self.grid.set_wrap(wrap);
        self.generation = 0;
        log::debug!("wrap {}", if wrap { "on" } else { "off" });
        self.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session(rows: usize, cols: usize) -> Session<StdRng> {
        let config = SimConfig::default().with_size(rows, cols).empty();
        Session::with_rng(config, StdRng::seed_from_u64(7)).unwrap()
    }

    fn assert_consistent<R: Rng>(s: &Session<R>) {
        let stats = s.stats();
        assert_eq!(stats.alive + stats.dead, stats.cells);
        assert_eq!(stats.cells, s.grid().len());
        assert_eq!(stats.alive, s.grid().count_alive());
    }

    fn draw<R: Rng>(s: &mut Session<R>, cells: &[(usize, usize)]) {
        for &(r, c) in cells {
            s.set_cell_at(r, c, true).unwrap();
        }
    }

    #[test]
    fn test_default_session_is_seeded() {
        let s = Session::new();
        assert_eq!(s.grid().dimensions(), (25, 25));
        assert!(s.wrap());
        assert_eq!(s.generation(), 0);
        assert!((1..312).contains(&s.alive()));
        assert_consistent(&s);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SimConfig::default().with_size(0, 3);
        assert!(Session::with_rng(config, StdRng::seed_from_u64(1)).is_err());
    }

    #[test]
    fn test_toggle_updates_counts() {
        let mut s = session(5, 5);
        let stats = s.toggle_cell(3, true).unwrap();
        assert_eq!((stats.alive, stats.dead), (1, 24));

        // setting an alive cell alive again is a no-op
        assert_eq!(s.toggle_cell(3, true).unwrap().alive, 1);

        assert_eq!(s.toggle_cell(3, false).unwrap().alive, 0);
        assert_eq!(s.toggle_cell(3, false).unwrap().alive, 0);
        assert_consistent(&s);
    }

    #[test]
    fn test_toggle_out_of_range_rejected() {
        let mut s = session(5, 5);
        assert_eq!(
            s.toggle_cell(25, true),
            Err(ValidationError::CellIndex { index: 25, cells: 25 })
        );
        assert!(s.set_cell_at(5, 0, true).is_err());
        assert_eq!(s.alive(), 0);
    }

    #[test]
    fn test_step_counts_generations() {
        let mut s = session(10, 10);
        draw(&mut s, &[(5, 4), (5, 5), (5, 6)]);

        let stats = s.step();
        assert_eq!(stats.generation, 1);
        assert_eq!(stats.alive, 3);
        assert_eq!(s.cell_at(4, 5), Ok(Cell::Alive));

        s.step();
        assert_eq!(s.generation(), 2);
        assert_eq!(s.cell_at(5, 4), Ok(Cell::Alive));
        assert_consistent(&s);
    }

    #[test]
    fn test_serial_and_parallel_sessions_agree() {
        let mut a = session(20, 30);
        let mut b = session(20, 30);
        a.randomize(Some(200)).unwrap();
        // copy the board cell by cell
        for (i, cell) in a.grid().cells().to_vec().into_iter().enumerate() {
            b.toggle_cell(i, cell.is_alive()).unwrap();
        }
        b.set_algorithm(Algorithm::Parallel);

        for _ in 0..15 {
            assert_eq!(a.step().alive, b.step().alive);
            assert_eq!(a.grid(), b.grid());
        }
    }

    #[test]
    fn test_clear_resets() {
        let mut s = session(6, 6);
        s.randomize(Some(12)).unwrap();
        s.step();
        s.play(5.0).unwrap();

        let stats = s.clear();
        assert_eq!(stats, Stats { generation: 0, cells: 36, alive: 0, dead: 36 });
        assert!(!s.is_running());
    }

    #[test]
    fn test_randomize_exact_and_zero() {
        let mut s = session(5, 5);
        s.step();
        assert_eq!(s.randomize(Some(9)).unwrap().alive, 9);
        assert_eq!(s.generation(), 0);
        assert_consistent(&s);

        assert_eq!(s.randomize(Some(0)).unwrap().alive, 0);
        assert_eq!(s.grid().count_alive(), 0);
    }

    #[test]
    fn test_randomize_default_range() {
        let mut s = session(25, 25);
        for _ in 0..50 {
            let alive = s.randomize(None).unwrap().alive;
            assert!((1..312).contains(&alive));
            assert_consistent(&s);
        }
    }

    #[test]
    fn test_randomize_too_many_rejected_without_pausing() {
        let mut s = session(3, 3);
        s.play(10.0).unwrap();
        assert!(s.randomize(Some(10)).is_err());
        assert!(s.is_running());
    }

    #[test]
    fn test_resize_preserves_and_resets_generation() {
        let mut s = session(5, 5);
        draw(&mut s, &[(1, 1), (1, 2), (1, 3), (3, 0), (4, 4)]);
        s.step();
        s.step();
        let stepped = s.grid().clone();
        let alive = s.alive();

        let stats = s.resize(5, 7).unwrap();
        assert_eq!(stats.generation, 0);
        assert_eq!(stats.alive, alive);
        for r in 0..5 {
            for c in 0..5 {
                assert_eq!(s.grid().get_at(r, c), stepped.get_at(r, c));
            }
        }

        s.resize(5, 5).unwrap();
        assert_eq!(s.grid(), &stepped);
        assert_consistent(&s);
    }

    #[test]
    fn test_resize_validation() {
        let mut s = session(5, 5);
        draw(&mut s, &[(1, 1), (2, 2)]);
        s.step();
        s.play(10.0).unwrap();
        let before = s.grid().clone();

        assert!(s.resize(0, 5).is_err());
        assert!(s.resize(5, -1).is_err());
        assert_eq!(s.grid(), &before);
        assert_eq!(s.generation(), 1);
        assert!(s.is_running());
    }

    #[test]
    fn test_resize_rejects_oversized_board() {
        let mut s = session(5, 5);
        draw(&mut s, &[(2, 1), (2, 2), (2, 3)]);
        let before = s.grid().clone();

        assert!(s.resize(1 << 33, 1 << 33).is_err());
        assert!(s.resize(i64::MAX, 2).is_err());
        assert!(s.resize(5000, 5000).is_err());
        assert_eq!(s.grid(), &before);
        assert_consistent(&s);
    }

    #[test]
    fn test_resize_pauses_playback() {
        let mut s = session(4, 4);
        s.play(10.0).unwrap();
        s.resize(6, 6).unwrap();
        assert!(!s.is_running());
        assert!(s.tick(1.0).is_none());
    }

    #[test]
    fn test_set_wrap_resets_generation_and_changes_rule_edges() {
        let mut s = session(5, 5);
        // blinker straddling the left/right seam
        draw(&mut s, &[(2, 4), (2, 0), (2, 1)]);
        s.step();
        assert_eq!(s.alive(), 3);

        s.set_wrap(false);
        assert_eq!(s.generation(), 0);
        assert!(!s.wrap());

        // vertical blinker at column 0 flips back; (2, 4) does not reappear
        s.step();
        assert_eq!(s.cell_at(2, 4), Ok(Cell::Dead));
        assert_eq!(s.alive(), 2);
        assert_consistent(&s);
    }

    #[test]
    fn test_tick_drives_steps() {
        let mut s = session(8, 8);
        draw(&mut s, &[(3, 3), (3, 4), (4, 3), (4, 4)]);

        assert!(s.tick(1.0).is_none());
        s.play(10.0).unwrap();
        assert!(s.tick(0.05).is_none());
        assert_eq!(s.tick(0.06).map(|st| st.generation), Some(1));

        // a long stall still yields one step
        assert_eq!(s.tick(3.0).map(|st| st.generation), Some(2));

        s.pause();
        assert!(s.tick(1.0).is_none());
        assert_eq!(s.generation(), 2);
    }

    #[test]
    fn test_pause_is_idempotent() {
        let mut s = session(3, 3);
        assert!(!s.pause());
        s.play(1.0).unwrap();
        assert!(s.pause());
        assert!(!s.pause());
    }

    #[test]
    fn test_toggle_playing() {
        let mut s = session(3, 3);
        assert_eq!(s.toggle_playing(), Ok(true));
        assert!(s.is_running());
        assert_eq!(s.toggle_playing(), Ok(false));
        assert!(!s.is_running());
    }

    #[test]
    fn test_play_rejects_bad_frequency() {
        let mut s = session(3, 3);
        assert!(s.play(0.0).is_err());
        assert!(s.set_freq(-5.0).is_err());
        assert!(!s.is_running());
        assert_eq!(s.freq(), 10.0);
    }

    #[test]
    fn test_set_freq_restarts_running_playback() {
        let mut s = session(3, 3);
        let old = s.play(1.0).unwrap();
        s.set_freq(20.0).unwrap();
        assert!(s.is_running());
        assert_eq!(s.freq(), 20.0);
        // at 20 Hz a 0.06s frame is enough
        assert!(s.tick(0.06).is_some());
        // the 1 Hz run is gone
        assert_ne!(s.play(20.0).unwrap(), old);
    }

    #[test]
    fn test_set_freq_while_paused_starts_playback() {
        let mut s = session(3, 3);
        assert!(!s.is_running());
        let handle = s.set_freq(5.0).unwrap();
        assert!(s.is_running());
        assert_eq!(s.freq(), 5.0);
        assert_eq!(s.play(5.0).unwrap(), handle);
        assert!(s.tick(0.25).is_some());
    }

    #[test]
    fn test_playback_keeps_rate_at_uneven_frame_rate() {
        let mut s = session(6, 6);
        s.play(40.0).unwrap();
        for _ in 0..600 {
            s.tick(1.0 / 60.0);
        }
        let generation = s.generation();
        assert!((398..=400).contains(&generation), "generation = {generation}");
    }

    #[test]
    fn test_play_with_new_rate_replaces_run() {
        let mut s = session(3, 3);
        let slow = s.play(1.0).unwrap();
        let same = s.play(1.0).unwrap();
        assert_eq!(slow, same);
        let fast = s.play(4.0).unwrap();
        assert_ne!(slow, fast);
        assert_eq!(s.freq(), 4.0);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut s = session(2, 3);
        s.toggle_cell(4, true).unwrap();
        s.play(2.0).unwrap();

        let snap = s.snapshot();
        assert_eq!((snap.rows, snap.cols), (2, 3));
        assert_eq!(snap.cells.len(), 6);
        assert!(snap.cells[4].is_alive());
        assert!(snap.running);
        assert_eq!(snap.freq, 2.0);
        assert_eq!(snap.stats.alive, 1);
        assert_eq!(snap.stats.dead, 5);
    }

    #[test]
    fn test_independent_sessions() {
        let mut a = session(4, 4);
        let b = session(4, 4);
        a.toggle_cell(0, true).unwrap();
        a.step();
        assert_eq!(b.alive(), 0);
        assert_eq!(b.generation(), 0);
    }
}
