//! Reference tick payloads.
//!
//! The coordinator owns this schema; these types cover the fields the bundled
//! brains need. Custom brains may bring their own `State`/`Commands` types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A robot as seen in one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Robot {
    pub id: String,
    pub position: Position,
    /// Degrees, clockwise from north
    #[serde(default)]
    pub heading: f64,
    #[serde(default)]
    pub health: f64,
}

/// Snapshot of the match at one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    pub tick: u64,
    /// The robot this agent controls
    pub robot: Robot,
    /// Other robots currently in view
    #[serde(default)]
    pub visible: Vec<Robot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    Move { heading: f64, speed: f64 },
    Turn { degrees: f64 },
    Fire { heading: f64 },
    Scan,
}

/// Response to one tick
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CommandSet {
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl CommandSet {
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
