pub mod command;

pub use command::HelpCommand;
