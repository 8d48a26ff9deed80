//! Protocol module - JSON message types for the adapter
//!
//! Line-delimited JSON. All messages carry `type` and `seq`; server messages
//! also carry `ts` (timestamp in ms).

use serde::{Deserialize, Serialize};

use crate::core::{ActionOutcome, ContainerError, SessionSnapshot};
use crate::types::{MenuAction, Piece, PieceKind, QUEUE_CAPACITY, STACK_CAPACITY};

pub const PROTOCOL_VERSION: &str = "1.0.0";

// ============== Client -> Server Messages ==============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientInfo {
    pub name: String,
    pub version: String,
}

/// Client hello message (first message to establish connection)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelloMessage {
    pub seq: u64,
    pub client: ClientInfo,
}

/// Apply one menu action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandMessage {
    pub seq: u64,
    pub action: WireAction,
}

/// Request the current state without changing it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ObserveMessage {
    pub seq: u64,
}

/// Action name as carried on the wire.
///
/// Unknown names are kept so the server can report them instead of failing
/// the whole message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireAction {
    Known(MenuAction),
    Unknown(String),
}

impl<'de> Deserialize<'de> for WireAction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(match MenuAction::from_str(&s) {
            Some(action) => WireAction::Known(action),
            None => WireAction::Unknown(s),
        })
    }
}

impl Serialize for WireAction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            WireAction::Known(action) => serializer.serialize_str(action.as_str()),
            WireAction::Unknown(s) => serializer.serialize_str(s),
        }
    }
}

/// Parsed incoming message
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    Hello(HelloMessage),
    Command(CommandMessage),
    Observe(ObserveMessage),
}

impl ClientMessage {
    pub fn seq(&self) -> u64 {
        match self {
            ClientMessage::Hello(m) => m.seq,
            ClientMessage::Command(m) => m.seq,
            ClientMessage::Observe(m) => m.seq,
        }
    }
}

/// Parse a JSON message from a string
pub fn parse_message(json: &str) -> Result<ClientMessage, serde_json::Error> {
    serde_json::from_str(json)
}

/// Pull `seq` out of a line that failed to parse, so the error can echo it.
pub fn extract_seq_best_effort(s: &str) -> Option<u64> {
    let start = s.find("\"seq\"")?;
    let after_key = &s[start + 5..];
    let colon = after_key.find(':')?;
    let rest = after_key[colon + 1..].trim_start();
    let end = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if end == 0 {
        return None;
    }
    rest[..end].parse::<u64>().ok()
}

// ============== Server -> Client Messages ==============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WelcomeType {
    #[serde(rename = "welcome")]
    Welcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AckType {
    #[serde(rename = "ack")]
    Ack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AckStatus {
    #[serde(rename = "ok")]
    Ok,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorType {
    #[serde(rename = "error")]
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObservationType {
    #[serde(rename = "observation")]
    Observation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    HandshakeRequired,
    InvalidMessage,
    OutOfOrder,
    EmptyContainer,
    FullContainer,
    InsufficientElements,
}

impl From<&ContainerError> for ErrorCode {
    fn from(value: &ContainerError) -> Self {
        match value {
            ContainerError::Empty => ErrorCode::EmptyContainer,
            ContainerError::Full { .. } => ErrorCode::FullContainer,
            ContainerError::InsufficientElements { .. } => ErrorCode::InsufficientElements,
        }
    }
}

/// Welcome message (response to hello)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeMessage {
    #[serde(rename = "type")]
    pub msg_type: WelcomeType,
    pub seq: u64,
    pub ts: u64,
    pub protocol_version: String,
    pub queue_capacity: usize,
    pub stack_capacity: usize,
}

/// Piece kind as carried on the wire (uppercase letter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKindWire {
    I,
    O,
    T,
    L,
}

impl From<PieceKind> for PieceKindWire {
    fn from(value: PieceKind) -> Self {
        match value {
            PieceKind::I => PieceKindWire::I,
            PieceKind::O => PieceKindWire::O,
            PieceKind::T => PieceKindWire::T,
            PieceKind::L => PieceKindWire::L,
        }
    }
}

impl From<PieceKindWire> for PieceKind {
    fn from(value: PieceKindWire) -> Self {
        match value {
            PieceKindWire::I => PieceKind::I,
            PieceKindWire::O => PieceKind::O,
            PieceKindWire::T => PieceKind::T,
            PieceKindWire::L => PieceKind::L,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceWire {
    pub kind: PieceKindWire,
    pub id: u64,
}

impl From<Piece> for PieceWire {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind.into(),
            id: value.id,
        }
    }
}

impl From<PieceWire> for Piece {
    fn from(value: PieceWire) -> Self {
        Piece::new(value.kind.into(), value.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueSlotWire {
    pub slot: usize,
    pub kind: PieceKindWire,
    pub id: u64,
}

/// Container contents, shared by observations and acks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateBody {
    /// Front first.
    pub queue: Vec<QueueSlotWire>,
    /// Top first.
    pub stack: Vec<PieceWire>,
    pub next_id: u64,
}

impl From<&SessionSnapshot> for StateBody {
    fn from(snap: &SessionSnapshot) -> Self {
        Self {
            queue: snap
                .queue
                .iter()
                .map(|e| QueueSlotWire {
                    slot: e.slot,
                    kind: e.piece.kind.into(),
                    id: e.piece.id,
                })
                .collect(),
            stack: snap.stack.iter().map(|p| PieceWire::from(*p)).collect(),
            next_id: snap.next_id,
        }
    }
}

/// Game state observation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationMessage {
    #[serde(rename = "type")]
    pub msg_type: ObservationType,
    pub seq: u64,
    pub ts: u64,
    #[serde(flatten)]
    pub state: StateBody,
}

/// Acknowledgment of an applied command, with the resulting state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AckMessage {
    #[serde(rename = "type")]
    pub msg_type: AckType,
    pub seq: u64,
    pub ts: u64,
    pub status: AckStatus,
    pub outcome: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub piece: Option<PieceWire>,
    pub observation: StateBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorMessage {
    #[serde(rename = "type")]
    pub msg_type: ErrorType,
    pub seq: u64,
    pub ts: u64,
    pub code: ErrorCode,
    pub message: String,
}

/// Any message the server sends.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ServerMessage {
    Welcome(WelcomeMessage),
    Ack(AckMessage),
    Observation(ObservationMessage),
    Error(ErrorMessage),
}

// ============== Utility Functions ==============

/// Create a hello message
pub fn create_hello(seq: u64, client_name: &str) -> ClientMessage {
    ClientMessage::Hello(HelloMessage {
        seq,
        client: ClientInfo {
            name: client_name.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    })
}

/// Create a welcome message
pub fn create_welcome(seq: u64) -> WelcomeMessage {
    WelcomeMessage {
        msg_type: WelcomeType::Welcome,
        seq,
        ts: current_timestamp_ms(),
        protocol_version: PROTOCOL_VERSION.to_string(),
        queue_capacity: QUEUE_CAPACITY,
        stack_capacity: STACK_CAPACITY,
    }
}

pub fn create_observation(seq: u64, snap: &SessionSnapshot) -> ObservationMessage {
    ObservationMessage {
        msg_type: ObservationType::Observation,
        seq,
        ts: current_timestamp_ms(),
        state: snap.into(),
    }
}

/// Create an acknowledgment
pub fn create_ack(seq: u64, outcome: &ActionOutcome, snap: &SessionSnapshot) -> AckMessage {
    AckMessage {
        msg_type: AckType::Ack,
        seq,
        ts: current_timestamp_ms(),
        status: AckStatus::Ok,
        outcome: outcome.as_str().to_string(),
        piece: outcome.piece().map(PieceWire::from),
        observation: snap.into(),
    }
}

/// Create an error message
pub fn create_error(seq: u64, code: ErrorCode, message: &str) -> ErrorMessage {
    ErrorMessage {
        msg_type: ErrorType::Error,
        seq,
        ts: current_timestamp_ms(),
        code,
        message: message.to_string(),
    }
}

/// Get current timestamp in milliseconds
fn current_timestamp_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
