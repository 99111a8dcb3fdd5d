//! Algorithm enum for selecting the step implementation.
//!
//! Both strategies read the old generation and write a fresh one, so they
//! are interchangeable and must agree cell for cell.

/// Available step strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// One pass over the cells on the calling thread
    #[default]
    Serial,
    /// Cells split across the rayon pool, committed after the whole pass
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// The other strategy (front-end toggle)
    pub fn next(self) -> Self {
        match self {
            Algorithm::Serial => Algorithm::Parallel,
            Algorithm::Parallel => Algorithm::Serial,
        }
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    /// Short description for the info panel
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Serial => "cell by cell, single thread",
            Algorithm::Parallel => "cell by cell, rayon pool",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_algorithms_returns_two() {
        assert_eq!(Algorithm::all().len(), 2);
    }

    #[test]
    fn test_default_is_serial() {
        assert_eq!(Algorithm::default(), Algorithm::Serial);
    }

    #[test]
    fn test_next_cycles() {
        assert_eq!(Algorithm::Serial.next(), Algorithm::Parallel);
        assert_eq!(Algorithm::Parallel.next(), Algorithm::Serial);
        assert_eq!(Algorithm::Serial.next().next(), Algorithm::Serial);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = Algorithm::all().iter().map(|a| a.name()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }
}
