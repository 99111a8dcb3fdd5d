mod algorithm;
mod cell;
mod grid;
pub mod neighborhood;
pub mod resize;
pub mod seeder;
pub mod step;

pub use algorithm::Algorithm;
pub use cell::Cell;
pub use grid::Grid;
pub use neighborhood::{Neighbors, neighbors};
pub use step::Generation;
