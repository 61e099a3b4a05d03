pub mod config;
pub mod console;
pub mod elevator;
pub mod shared;
