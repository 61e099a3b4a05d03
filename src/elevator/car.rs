use crate::elevator::error::RequestError;
use crate::shared::{CarStatus, Direction, DoorState, Floor};
use log::{debug, info, warn};
use std::collections::BTreeSet;
use std::fmt;

pub const MIN_FLOOR: Floor = 1;
pub const DEFAULT_MAX_FLOOR: Floor = 10;

/**
 * Scheduler state of a single elevator car.
 *
 * The car advances one discrete tick at a time. Pending stops are split in two ordered sets
 * depending on where the requested floor was relative to the car when it was submitted. The sets
 * are never re-partitioned as the car moves; a stop is removed only when the car arrives at it.
 *
 * # Fields
 * - `min_floor`:       Lowest floor served, always `MIN_FLOOR`.
 * - `max_floor`:       Highest floor served, at least `MIN_FLOOR + 1`.
 * - `current_floor`:   Floor the car is standing at.
 * - `direction`:       Committed direction of travel, `Idle` when nothing is committed.
 * - `doors_open`:      Door state. Doors cycle open and closed within a single operation.
 * - `above`:           Stops requested while above the car.
 * - `below`:           Stops requested while below the car.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevatorCar {
    min_floor: Floor,
    max_floor: Floor,
    current_floor: Floor,
    direction: Direction,
    doors_open: bool,
    above: BTreeSet<Floor>,
    below: BTreeSet<Floor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueSide {
    Above,
    Below,
}

/// What happened to an accepted request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Queued(QueueSide),
    ServedImmediately,
}

/// Narration of a single tick, in the order things happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickEvent {
    StandingBy,
    PickedDirection(Direction),
    Moved { direction: Direction, floor: Floor },
    DoorsOpened(Floor),
    DoorsClosed(Floor),
    DirectionSwitched(Direction),
    AllRequestsDone,
}

impl fmt::Display for TickEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TickEvent::StandingBy => write!(f, "No requests. Standing by."),
            TickEvent::PickedDirection(direction) => write!(f, "Picking direction: {direction}"),
            TickEvent::Moved { direction, floor } => write!(f, "Moving {direction} to {floor}"),
            TickEvent::DoorsOpened(floor) => write!(f, "Arrived at floor {floor}. Doors opening..."),
            TickEvent::DoorsClosed(_) => write!(f, "Doors closing."),
            TickEvent::DirectionSwitched(direction) => {
                write!(f, "Switching direction to {direction}.")
            }
            TickEvent::AllRequestsDone => write!(f, "All requests done. Going IDLE."),
        }
    }
}

impl Default for ElevatorCar {
    fn default() -> Self {
        ElevatorCar::new(DEFAULT_MAX_FLOOR)
    }
}

impl ElevatorCar {
    pub fn new(max_floor: Floor) -> ElevatorCar {
        ElevatorCar {
            min_floor: MIN_FLOOR,
            max_floor: max_floor.max(MIN_FLOOR + 1),
            current_floor: MIN_FLOOR,
            direction: Direction::Idle,
            doors_open: false,
            above: BTreeSet::new(),
            below: BTreeSet::new(),
        }
    }

    pub fn min_floor(&self) -> Floor {
        self.min_floor
    }

    pub fn max_floor(&self) -> Floor {
        self.max_floor
    }

    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn doors_open(&self) -> bool {
        self.doors_open
    }

    pub fn has_pending_stops(&self) -> bool {
        !self.above.is_empty() || !self.below.is_empty()
    }

    /**
     * Registers a stop request at `floor`.
     *
     * Hall calls and car selections are handled identically. A request at the current floor is
     * served on the spot and never queued. Out of range floors are rejected without touching
     * any state.
     */
    pub fn submit_request(&mut self, floor: Floor) -> Result<SubmitOutcome, RequestError> {
        if floor < self.min_floor || floor > self.max_floor {
            warn!(
                "Rejected request for floor {} outside [{}..{}]",
                floor, self.min_floor, self.max_floor
            );
            return Err(RequestError::OutOfRange {
                floor,
                min: self.min_floor,
                max: self.max_floor,
            });
        }

        if floor == self.current_floor {
            // Instant door cycle, direction unchanged
            self.doors_open = true;
            info!("Serving floor {} immediately", floor);
            self.doors_open = false;
            return Ok(SubmitOutcome::ServedImmediately);
        }

        let side = if floor > self.current_floor {
            self.above.insert(floor);
            QueueSide::Above
        } else {
            self.below.insert(floor);
            QueueSide::Below
        };

        if self.direction == Direction::Idle {
            self.direction = match side {
                QueueSide::Above => Direction::Up,
                QueueSide::Below => Direction::Down,
            };
        }

        info!(
            "Queued floor {} ({:?}), direction {}",
            floor, side, self.direction
        );
        Ok(SubmitOutcome::Queued(side))
    }

    /// Advances the car by one tick in place.
    pub fn advance(&mut self) -> Vec<TickEvent> {
        let events = self.tick();
        for event in &events {
            debug!("[Tick] {}", event);
        }
        events
    }

    /// Advances the car by `ticks` ticks, at least one.
    pub fn advance_by(&mut self, ticks: u32) -> Vec<TickEvent> {
        (0..ticks.max(1)).flat_map(|_| self.advance()).collect()
    }

    /// Pure form of `advance`: returns the next state and leaves `self` untouched.
    pub fn stepped(&self) -> (ElevatorCar, Vec<TickEvent>) {
        let mut next = self.clone();
        let events = next.tick();
        (next, events)
    }

    pub fn status(&self) -> CarStatus {
        CarStatus {
            current_floor: self.current_floor,
            direction: self.direction,
            doors: DoorState::from(self.doors_open),
            above_queue: self.above.iter().copied().collect(),
            below_queue: self.below.iter().copied().collect(),
        }
    }

    fn tick(&mut self) -> Vec<TickEvent> {
        let mut events = Vec::new();

        if !self.has_pending_stops() {
            self.direction = Direction::Idle;
            self.doors_open = false;
            events.push(TickEvent::StandingBy);
            return events;
        }

        // Direction exhausted, turn around or give up
        if self.direction == Direction::Up && self.above.is_empty() {
            self.direction = if self.below.is_empty() {
                Direction::Idle
            } else {
                Direction::Down
            };
        }
        if self.direction == Direction::Down && self.below.is_empty() {
            self.direction = if self.above.is_empty() {
                Direction::Idle
            } else {
                Direction::Up
            };
        }

        // Choosing a direction takes the whole tick
        if self.direction == Direction::Idle {
            self.direction = self.direction_toward_nearest();
            events.push(TickEvent::PickedDirection(self.direction));
            return events;
        }

        self.move_one_floor();
        events.push(TickEvent::Moved {
            direction: self.direction,
            floor: self.current_floor,
        });

        self.serve_current_floor(&mut events);
        self.reevaluate_direction(&mut events);
        events
    }

    // Ties and missing candidates favour Up
    fn direction_toward_nearest(&self) -> Direction {
        let up_nearest = self.above.range(self.current_floor..).next();
        let down_nearest = self.below.range(..=self.current_floor).next_back();

        let up_distance = up_nearest.map_or(Floor::MAX, |f| (f - self.current_floor).abs());
        let down_distance = down_nearest.map_or(Floor::MAX, |f| (self.current_floor - f).abs());

        if up_distance <= down_distance {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    fn move_one_floor(&mut self) {
        let next_floor = self.current_floor + self.direction.step();
        self.current_floor = next_floor.clamp(self.min_floor, self.max_floor);
    }

    fn serve_current_floor(&mut self, events: &mut Vec<TickEvent>) {
        let floor = self.current_floor;
        let served_above = self.above.remove(&floor);
        let served_below = self.below.remove(&floor);

        if served_above || served_below {
            self.doors_open = true;
            events.push(TickEvent::DoorsOpened(floor));
            info!("Arrived at floor {}", floor);

            self.doors_open = false;
            events.push(TickEvent::DoorsClosed(floor));
        }
    }

    fn reevaluate_direction(&mut self, events: &mut Vec<TickEvent>) {
        if self.direction == Direction::Up && self.above.is_empty() && !self.below.is_empty() {
            self.direction = Direction::Down;
            events.push(TickEvent::DirectionSwitched(Direction::Down));
        } else if self.direction == Direction::Down
            && self.below.is_empty()
            && !self.above.is_empty()
        {
            self.direction = Direction::Up;
            events.push(TickEvent::DirectionSwitched(Direction::Up));
        } else if !self.has_pending_stops() {
            self.direction = Direction::Idle;
            events.push(TickEvent::AllRequestsDone);
        }
    }

    #[cfg(test)]
    pub fn test_set_position(&mut self, floor: Floor, direction: Direction) {
        self.current_floor = floor;
        self.direction = direction;
    }
}
