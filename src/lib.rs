//! Customer invitation by great-circle distance.
//!
//! `geo` holds the coordinate model, `distance` the three great-circle
//! formulas, and `select` the radius filter. `reader` and `report` are the
//! file and console ends used by the `invite` binary.

pub mod customer;
pub mod distance;
pub mod geo;
pub mod reader;
pub mod report;
pub mod select;
