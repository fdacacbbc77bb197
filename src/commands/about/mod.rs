pub mod command;

pub use command::AboutCommand;
