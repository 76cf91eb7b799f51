//! Patrol agent movement

use crate::route::PatrolRoute;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Whether the agent is currently walking a leg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementState {
    /// Dwelling between legs
    Idle,
    /// Interpolating toward the current waypoint
    Moving,
}

/// What the agent does while dwelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdleBehavior {
    Sit,
    Groom,
    Meow,
}

impl IdleBehavior {
    /// The behavior following this one in the dwell rotation
    fn next(self) -> Self {
        match self {
            IdleBehavior::Sit => IdleBehavior::Groom,
            IdleBehavior::Groom => IdleBehavior::Meow,
            IdleBehavior::Meow => IdleBehavior::Sit,
        }
    }
}

/// Patrol tuning
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PatrolConfig {
    /// Fraction of the remaining distance covered per tick
    pub step_fraction: f32,
    /// Arrival distance in world units
    pub arrival_epsilon: f32,
    /// Dwell duration at each waypoint, seconds (0 = no dwell)
    pub dwell_duration: f32,
}

impl Default for PatrolConfig {
    fn default() -> Self {
        Self {
            step_fraction: 0.1,
            arrival_epsilon: 0.15,
            dwell_duration: 4.0,
        }
    }
}

/// An agent walking a cyclic waypoint route
///
/// `advance` is called once per update tick. Movement is a constant
/// fractional step toward the current waypoint, so the agent decelerates
/// into each arrival; the facing angle always points along the direction
/// of travel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatrolAgent {
    route: PatrolRoute,
    config: PatrolConfig,
    position: Vec3,
    facing_angle: f32,
    current_waypoint: usize,
    state: MovementState,
    dwell_remaining: f32,
    idle_behavior: Option<IdleBehavior>,
    next_behavior: IdleBehavior,
    arrivals: u64,
}

impl PatrolAgent {
    /// Create an agent at the first waypoint of its route
    pub fn new(route: PatrolRoute, config: PatrolConfig) -> Self {
        let position = route.waypoint(0);
        Self {
            route,
            config,
            position,
            facing_angle: 0.0,
            current_waypoint: 0,
            state: MovementState::Moving,
            dwell_remaining: 0.0,
            idle_behavior: None,
            next_behavior: IdleBehavior::Sit,
            arrivals: 0,
        }
    }

    /// Place the agent somewhere else (external override)
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Current pose
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Facing angle in radians (atan2 of lateral travel direction)
    pub fn facing_angle(&self) -> f32 {
        self.facing_angle
    }

    /// Index of the waypoint currently being walked toward
    pub fn current_waypoint(&self) -> usize {
        self.current_waypoint
    }

    /// Movement state
    pub fn state(&self) -> MovementState {
        self.state
    }

    /// Dwell behavior in progress, if any
    pub fn idle_behavior(&self) -> Option<IdleBehavior> {
        self.idle_behavior
    }

    /// Total waypoint arrivals so far
    pub fn arrivals(&self) -> u64 {
        self.arrivals
    }

    /// Advance the agent by one tick
    ///
    /// Zero or negative deltas make no progress and are not an error.
    pub fn advance(&mut self, delta: f32) {
        if delta <= 0.0 {
            return;
        }

        match self.state {
            MovementState::Idle => {
                self.dwell_remaining -= delta;
                if self.dwell_remaining <= 0.0 {
                    self.dwell_remaining = 0.0;
                    self.idle_behavior = None;
                    self.state = MovementState::Moving;
                }
            }
            MovementState::Moving => {
                let target = self.route.waypoint(self.current_waypoint);
                let to_target = target - self.position;

                if to_target.length() < self.config.arrival_epsilon {
                    self.arrive();
                } else {
                    self.position += to_target * self.config.step_fraction;
                    self.facing_angle = to_target.x.atan2(to_target.z);
                }
            }
        }
    }

    /// Arrival: advance the cyclic index and begin the dwell
    fn arrive(&mut self) {
        self.arrivals += 1;
        self.current_waypoint = self.route.next_index(self.current_waypoint);
        self.state = MovementState::Idle;
        self.dwell_remaining = self.config.dwell_duration;
        if self.config.dwell_duration > 0.0 {
            self.idle_behavior = Some(self.next_behavior);
            self.next_behavior = self.next_behavior.next();
        }
    }
}
