pub mod config;
pub mod emitters;
pub mod error;
pub mod handlers;
pub mod helpers;
pub mod loggers;
pub mod mapper;
pub mod models;
pub mod server_messages;
pub mod store;
