//! Geographic primitives for the search heuristic.
//!
//! This module provides radian-based vertex coordinates and the great-circle
//! distance used as the A* lower bound on remaining travel cost.

mod great_circle;

pub use great_circle::{EARTH_RADIUS_M, GeoPoint, great_circle_distance};
