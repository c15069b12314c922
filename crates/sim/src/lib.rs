//! Lattice gas cellular automaton core.
//!
//! A discrete W x H grid of bitmask cells evolved by a synchronous
//! stream -> collide rule that conserves particle count and approximates
//! momentum conservation. Two lattice variants are implemented:
//! - HPP: 4 directions on a square lattice
//! - FHP-I: 6 directions on a row-staggered hexagonal lattice
//!
//! Walls are bounce-back reflector cells; the reference domain is a
//! walled tank with an empty circular cavity that fills back in as the
//! gas flows.
//!
//! This crate is framework-agnostic - it handles simulation only.
//! Use the `game` crate for rendering with Macroquad.

pub mod cell;
pub mod color;
pub mod domain;
pub mod grid;
pub mod lattice;
pub mod lga;

pub use cell::Cell;
pub use color::cell_color;
pub use domain::{create_cavity_tank, create_tank, SeedDensity};
pub use grid::Grid;
pub use lattice::{HexDir, Lattice, SquareDir};
pub use lga::LgaSimulation;
