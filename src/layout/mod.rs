//! Lot Layout Module
//!
//! Physical geometry (space coordinates, aisle widths) and the space
//! registry that keeps a lot's space list in sync with its dimensions.

pub mod geometry;
pub mod registry;
