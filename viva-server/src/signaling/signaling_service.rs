use crate::room::{ConnectionId, RoomHubHandle};
use crate::signaling::SignalingOutput;
use async_trait::async_trait;
use axum::extract::ws::Message;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error};
use viva_core::{IceServerConfig, ServerMessage};

struct SignalingInner {
    connections: DashMap<ConnectionId, mpsc::UnboundedSender<Message>>,
    ice_servers: Vec<IceServerConfig>,
}

/// Per-connection outbound queues plus the route into the room hub.
#[derive(Clone)]
pub struct SignalingService {
    inner: Arc<SignalingInner>,
    hub: RoomHubHandle,
}

impl SignalingService {
    pub fn new(hub: RoomHubHandle, ice_servers: Vec<IceServerConfig>) -> Self {
        Self {
            inner: Arc::new(SignalingInner {
                connections: DashMap::new(),
                ice_servers,
            }),
            hub,
        }
    }

    pub fn hub(&self) -> &RoomHubHandle {
        &self.hub
    }

    pub fn ice_servers(&self) -> Vec<IceServerConfig> {
        self.inner.ice_servers.clone()
    }

    pub fn add_connection(&self, connection: ConnectionId, tx: mpsc::UnboundedSender<Message>) {
        self.inner.connections.insert(connection, tx);
    }

    pub fn remove_connection(&self, connection: ConnectionId) {
        self.inner.connections.remove(&connection);
    }

    /// Closes every socket. Used on shutdown so open connections do not hold the server.
    pub fn close_all(&self) {
        for peer in self.inner.connections.iter() {
            let _ = peer.send(Message::Close(None));
        }
        self.inner.connections.clear();
    }

    pub fn connection_count(&self) -> usize {
        self.inner.connections.len()
    }

    pub fn send_signal(&self, connection: ConnectionId, msg: &ServerMessage) {
        let Some(peer) = self.inner.connections.get(&connection) else {
            debug!("Dropping frame for closed connection {}", connection);
            return;
        };

        match serde_json::to_string(msg) {
            Ok(json) => {
                if let Err(e) = peer.send(Message::Text(json.into())) {
                    error!("Failed to queue frame for {}: {:?}", connection, e);
                }
            }
            Err(e) => error!("Failed to serialize signal message: {}", e),
        }
    }
}

#[async_trait]
impl SignalingOutput for SignalingService {
    async fn send(&self, connection: ConnectionId, message: ServerMessage) {
        self.send_signal(connection, &message);
    }
}
