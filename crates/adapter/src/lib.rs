//! Adapter module - remote control via TCP socket with JSON protocol
//!
//! Lets external programs drive a session through a **line-delimited JSON
//! protocol** over TCP (default `127.0.0.1:7878`).
//!
//! 1. **Connection**: client connects to the TCP socket
//! 2. **Handshake**: client sends `hello`, server responds with `welcome`
//! 3. **Commanding**: client sends `command` with an action name; server
//!    replies with `ack` (outcome plus resulting state) or `error`
//! 4. **Observing**: client sends `observe`; server replies with `observation`
//!
//! Every client message carries a `seq` that must strictly increase per
//! connection. All connections share one session behind a single mutex.
//!
//! # Example Protocol Flow
//!
//! ```text
//! Client -> Server: {"type":"hello","seq":1,"client":{"name":"bot","version":"0.1.0"}}
//! Server -> Client: {"type":"welcome","seq":1,"ts":1700000000000,"protocol_version":"1.0.0","queue_capacity":5,"stack_capacity":3}
//! Client -> Server: {"type":"command","seq":2,"action":"reserve"}
//! Server -> Client: {"type":"ack","seq":2,"ts":1700000000001,"status":"ok","outcome":"reserved","piece":{"kind":"I","id":0},"observation":{...}}
//! Client -> Server: {"type":"command","seq":3,"action":"multiExchange"}
//! Server -> Client: {"type":"error","seq":3,"ts":1700000000002,"code":"insufficient_elements","message":"..."}
//! ```
//!
//! # Testing
//!
//! ```bash
//! nc 127.0.0.1 7878
//! {"type":"hello","seq":1,"client":{"name":"test","version":"1.0.0"}}
//! ```

pub mod protocol;
pub mod runtime;
pub mod server;

pub use piece_reserve_core as core;
pub use piece_reserve_types as types;

pub use protocol::*;
pub use runtime::serve_blocking;
pub use server::{handle_line, run_server, ClientState, ServerConfig, SharedSession};
