pub mod macros;
pub mod structs;

pub use structs::CarStatus;
pub use structs::Direction;
pub use structs::DoorState;
pub use structs::Floor;
