use log::{info, warn};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use futures_channel::mpsc::UnboundedSender;
use tungstenite::protocol::Message;

use crate::models::communication::Response;

pub type Tx = UnboundedSender<Message>;
pub type PeerMap = Arc<Mutex<HashMap<String, Tx>>>;

pub fn send_message(response: Response, peer_map: &PeerMap, id: &str) {
    info!("Sending msg to: {}", id);

    let text = match serde_json::to_string(&response) {
        Ok(text) => text,
        Err(error) => {
            warn!("Could not serialize response for {}: {}", id, error);
            return;
        }
    };

    let peers = peer_map.lock().unwrap();
    match peers.get(id) {
        Some(recp) => {
            if let Err(error) = recp.unbounded_send(Message::Text(text)) {
                warn!("Could not send to {}: {}", id, error);
                return;
            }
        }
        None => {
            warn!("No connection with id: {}", id);
            return;
        }
    }

    info!("Message sent successfully to: {}", id);
}
