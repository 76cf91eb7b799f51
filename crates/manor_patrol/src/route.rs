//! Patrol routes

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Patrol configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatrolError {
    /// A route needs at least one waypoint
    #[error("patrol route must contain at least one waypoint")]
    EmptyRoute,
}

/// An ordered, cyclic sequence of target positions
///
/// Non-empty by construction; indices wrap around, so an agent walking the
/// route never runs out of targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatrolRoute {
    waypoints: Vec<Vec3>,
}

impl PatrolRoute {
    /// Create a route, rejecting an empty waypoint list
    pub fn new(waypoints: Vec<Vec3>) -> Result<Self, PatrolError> {
        if waypoints.is_empty() {
            return Err(PatrolError::EmptyRoute);
        }
        Ok(Self { waypoints })
    }

    /// Number of waypoints
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Whether the route is empty (never true for a constructed route)
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Waypoint at a wrapped index
    pub fn waypoint(&self, index: usize) -> Vec3 {
        self.waypoints[index % self.waypoints.len()]
    }

    /// The index following `index`, wrapping around
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.waypoints.len()
    }

    /// All waypoints in order
    pub fn waypoints(&self) -> &[Vec3] {
        &self.waypoints
    }
}
