//! TCP server for the adapter
//!
//! Each client gets its own task. All of them share one [`Session`] behind a
//! single mutex, and the lock is held for a whole command (apply plus
//! snapshot), so exchanges never interleave with other mutations.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{oneshot, Mutex};
use tracing::{debug, info, warn};

use crate::core::Session;
use crate::protocol::*;

/// Session shared by every connected client.
pub type SharedSession = Arc<Mutex<Session>>;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7878,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid socket address {}:{}", self.host, self.port))
    }
}

/// Per-connection protocol state.
#[derive(Debug, Clone, Default)]
pub struct ClientState {
    pub handshaken: bool,
    pub last_seq: Option<u64>,
}

impl ClientState {
    /// Accept `seq` only if it is greater than every seq seen before.
    fn check_and_update_seq(&mut self, seq: u64) -> bool {
        match self.last_seq {
            Some(prev) if seq <= prev => false,
            _ => {
                self.last_seq = Some(seq);
                true
            }
        }
    }
}

/// Start the TCP server
pub async fn run_server(
    config: ServerConfig,
    session: SharedSession,
    ready_tx: Option<oneshot::Sender<SocketAddr>>,
) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(&addr).await?;
    let bound = listener.local_addr()?;
    info!(%bound, "adapter listening");
    if let Some(tx) = ready_tx {
        let _ = tx.send(bound);
    }

    let mut client_id_counter = 0usize;

    // Accept incoming connections
    loop {
        let (socket, addr) = listener.accept().await?;
        client_id_counter += 1;
        let client_id = client_id_counter;

        info!(client_id, %addr, "client connected");

        let session = Arc::clone(&session);
        tokio::spawn(async move {
            if let Err(e) = handle_client(socket, session).await {
                warn!(client_id, error = %e, "client error");
            }
            info!(client_id, "client disconnected");
        });
    }
}

/// Handle a single client connection
async fn handle_client(socket: TcpStream, session: SharedSession) -> anyhow::Result<()> {
    let (reader, mut writer) = socket.into_split();
    let mut lines = BufReader::new(reader).lines();
    let mut client = ClientState::default();
    let mut buf: Vec<u8> = Vec::with_capacity(1024);

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let reply = handle_line(&line, &mut client, &session).await;

        buf.clear();
        serde_json::to_writer(&mut buf, &reply)?;
        buf.push(b'\n');
        writer.write_all(&buf).await?;
        writer.flush().await?;
    }
    Ok(())
}

/// Process one inbound line and produce the reply.
pub async fn handle_line(
    line: &str,
    client: &mut ClientState,
    session: &SharedSession,
) -> ServerMessage {
    let msg = match parse_message(line) {
        Ok(msg) => msg,
        Err(e) => {
            let seq = extract_seq_best_effort(line).unwrap_or(0);
            debug!(error = %e, "unparseable message");
            return ServerMessage::Error(create_error(
                seq,
                ErrorCode::InvalidMessage,
                &format!("invalid message: {e}"),
            ));
        }
    };

    let seq = msg.seq();
    if !client.check_and_update_seq(seq) {
        return ServerMessage::Error(create_error(
            seq,
            ErrorCode::OutOfOrder,
            "seq must increase with every message",
        ));
    }

    match msg {
        ClientMessage::Hello(hello) => {
            client.handshaken = true;
            debug!(client = %hello.client.name, version = %hello.client.version, "hello");
            ServerMessage::Welcome(create_welcome(seq))
        }
        _ if !client.handshaken => ServerMessage::Error(create_error(
            seq,
            ErrorCode::HandshakeRequired,
            "send hello first",
        )),
        ClientMessage::Observe(_) => {
            let snap = session.lock().await.snapshot();
            ServerMessage::Observation(create_observation(seq, &snap))
        }
        ClientMessage::Command(cmd) => {
            let action = match cmd.action {
                WireAction::Known(action) => action,
                WireAction::Unknown(name) => {
                    return ServerMessage::Error(create_error(
                        seq,
                        ErrorCode::InvalidMessage,
                        &format!("unknown action '{name}'"),
                    ));
                }
            };

            let mut guard = session.lock().await;
            match guard.apply(action) {
                Ok(outcome) => {
                    let snap = guard.snapshot();
                    drop(guard);
                    ServerMessage::Ack(create_ack(seq, &outcome, &snap))
                }
                Err(err) => {
                    drop(guard);
                    ServerMessage::Error(create_error(seq, (&err).into(), &err.to_string()))
                }
            }
        }
    }
}
