pub mod car;
pub mod error;

pub use car::ElevatorCar;
pub use car::QueueSide;
pub use car::SubmitOutcome;
pub use car::TickEvent;
pub use error::RequestError;
