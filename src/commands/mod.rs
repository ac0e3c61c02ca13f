// src/commands/mod.rs

pub mod command;
pub mod context;
pub mod exit;
pub mod handler;
pub mod health;
pub mod help;
pub mod lang;
pub mod registry;
pub mod version;

pub use command::Command;
pub use context::Session;
pub use handler::{CommandHandler, CommandResult};
pub use registry::CommandRegistry;
