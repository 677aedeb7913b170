pub mod coordinate;
pub mod matrix;
pub mod symbol;

pub use coordinate::{Coordinate, Direction, next_direction};
pub use matrix::ModuleMatrix;
pub use symbol::{EncodingMode, PlacementStatus, Symbol, Version};
