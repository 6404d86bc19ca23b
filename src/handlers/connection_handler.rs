use crate::{
    handlers::command_handler::{execute_command, EditorState},
    helpers::parse_command,
    models::communication::Response,
    server_messages::send_message,
};
use futures_channel::mpsc::unbounded;
use futures_util::{future, pin_mut, StreamExt, TryStreamExt};
use log::{info, warn};
use std::net::SocketAddr;
use tokio::net::TcpStream;
use tungstenite::Message;
use uuid::Uuid;

pub async fn handle_connection(state: EditorState, raw_stream: TcpStream, addr: SocketAddr) {
    info!("Incoming TCP connection from: {}", &addr);

    let ws_stream = match tokio_tungstenite::accept_async(raw_stream).await {
        Ok(stream) => stream,
        Err(error) => {
            warn!("Handshake with {} error: {}", addr, error);
            return;
        }
    };
    info!("WebSocket connection established: {}", &addr);

    let connection_id = Uuid::new_v4().to_string();
    let (tx, rx) = unbounded();
    state.peers.lock().unwrap().insert(connection_id.clone(), tx);

    let (outgoing, incoming) = ws_stream.split();

    let handle_incoming = incoming.try_for_each(|msg| {
        if !(msg.is_text() || msg.is_binary()) {
            return future::ok(());
        }

        let response = match parse_command(&msg) {
            Ok(command) => {
                // Exports touch the disk; keep them off the async workers.
                tokio::task::block_in_place(|| execute_command(command, &state, &connection_id))
            }
            Err(error) => {
                warn!("Error parsing command!: {}", error);
                Response::errorResponse {
                    errorText: error.to_string(),
                }
            }
        };
        send_message(response, &state.peers, &connection_id);

        future::ok(())
    });

    let receive_from_others = rx.map(Ok::<Message, tungstenite::Error>).forward(outgoing);

    pin_mut!(handle_incoming, receive_from_others);
    future::select(handle_incoming, receive_from_others).await;

    info!("{} disconnected", &addr);
    state.peers.lock().unwrap().remove(&connection_id);
}
