pub mod command;

pub use command::HealthCommand;
