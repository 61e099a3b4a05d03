/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/
pub type Floor = i32;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Up,
    Down,
    Idle,
}

impl Direction {
    // Signed floor offset of one move in this direction
    pub fn step(&self) -> Floor {
        match *self {
            Direction::Up => 1,
            Direction::Down => -1,
            Direction::Idle => 0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "UP"),
            Direction::Down => write!(f, "DOWN"),
            Direction::Idle => write!(f, "IDLE"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum DoorState {
    Open,
    Closed,
}

impl From<bool> for DoorState {
    fn from(open: bool) -> Self {
        if open {
            DoorState::Open
        } else {
            DoorState::Closed
        }
    }
}

impl fmt::Display for DoorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DoorState::Open => write!(f, "OPEN"),
            DoorState::Closed => write!(f, "CLOSED"),
        }
    }
}

/**
 * Read-only snapshot of an elevator car, taken for display.
 *
 * # Fields
 * - `current_floor`:   Floor the car is standing at.
 * - `direction`:       Committed direction of travel.
 * - `doors`:           Door state at the time of the snapshot.
 * - `above_queue`:     Pending stops to serve while scanning upward, ascending.
 * - `below_queue`:     Pending stops to serve while scanning downward, ascending.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CarStatus {
    pub current_floor: Floor,
    pub direction: Direction,
    pub doors: DoorState,
    pub above_queue: Vec<Floor>,
    pub below_queue: Vec<Floor>,
}

impl fmt::Display for CarStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Status] Floor={}, Dir={}, Doors={}, UpQueue={:?}, DownQueue={:?}",
            self.current_floor, self.direction, self.doors, self.above_queue, self.below_queue
        )
    }
}
