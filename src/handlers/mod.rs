pub mod command_handler;
pub mod connection_handler;
