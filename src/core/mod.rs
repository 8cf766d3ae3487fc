//! Core building blocks shared by every other module.

#[macro_use]
pub mod log;
pub mod geometry;
pub mod grid;
