pub mod command;
pub mod console;
pub mod input;

pub use command::Command;
pub use command::CommandError;
pub use console::Console;
pub use console::ConsoleOutput;
