pub mod command;

pub use command::ChunkCommand;
