//! Kitchen display WebSocket handler
//!
//! Displays connect, receive every order event as a JSON text frame, and
//! send nothing meaningful back. A display that falls behind the broadcast
//! channel loses the dropped events and keeps receiving from the current
//! position.

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;

use crate::core::ServerState;
use crate::notify::KdsHub;

/// HTTP handler that upgrades the connection to WebSocket
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<ServerState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state.kds))
}

/// Manage a single kitchen display connection after upgrade
async fn handle_socket(socket: WebSocket, hub: KdsHub) {
    let conn_id = uuid::Uuid::new_v4().to_string();
    tracing::info!(conn_id = %conn_id, observers = hub.observer_count() + 1, "Kitchen display connected");

    let mut rx = hub.subscribe();
    let (mut sink, mut stream) = socket.split();

    // Sender task: forward hub events to the WebSocket sink
    let sender_conn_id = conn_id.clone();
    let send_task = tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    let Ok(text) = serde_json::to_string(&event) else {
                        continue;
                    };
                    if sink.send(Message::Text(text.into())).await.is_err() {
                        tracing::debug!(conn_id = %sender_conn_id, "Kitchen display sink closed");
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(
                        conn_id = %sender_conn_id,
                        skipped,
                        "Kitchen display fell behind, events dropped"
                    );
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    // Receiver loop: displays only ever send pings and close frames
    while let Some(result) = stream.next().await {
        match result {
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(conn_id = %conn_id, error = %e, "Kitchen display receive error");
                break;
            }
        }
    }

    send_task.abort();
    tracing::info!(conn_id = %conn_id, "Kitchen display disconnected");
}
