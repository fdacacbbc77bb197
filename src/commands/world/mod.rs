pub mod command;

pub use command::WorldCommand;
