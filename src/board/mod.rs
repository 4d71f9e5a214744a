pub mod grid;
pub mod moves;
pub mod rules;

pub use grid::{Board, BoardError, Cell, Player};
pub use moves::{Move, DUP_DIRS, JUMP_DIRS};
