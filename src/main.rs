use log::info;
use quiz_deck_editor::{
    config::Config,
    error::Result,
    handlers::{command_handler::EditorState, connection_handler::handle_connection},
    loggers::file_logger::init_file_logger,
};
use std::env;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = env::args().nth(1);
    let config = Config::load(config_path.as_deref())?;

    init_file_logger(&config.log_dir)?;
    info!("App started!");

    let address = config.address.clone();
    let state = EditorState::open(config)?;

    let listener = TcpListener::bind(&address).await?;
    info!("Listening on: {}", address);

    while let Ok((stream, addr)) = listener.accept().await {
        tokio::spawn(handle_connection(state.clone(), stream, addr));
    }

    Ok(())
}
