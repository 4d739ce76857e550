//! Engine.IO v4 / Socket.IO v5 text-frame codec (transport-only).
//!
//! # Design
//! - One WebSocket text message is one Engine.IO packet; no polling
//!   transport, no binary attachments.
//! - Only the default namespace is joined; traffic for others is ignored.
//! - Keep this module DOM-free so the runner can be tested natively.

use frameboard_api_models::DeviceMap;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::core::events::PushEvent;

/// Push event name carrying the device collection.
pub const DEVICE_UPDATE_EVENT: &str = "device_update";

/// Engine.IO open handshake.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Handshake {
    /// Session id.
    pub sid: String,
    /// Server ping period in milliseconds.
    #[serde(default)]
    pub ping_interval: u32,
    /// Grace period after a missed ping in milliseconds.
    #[serde(default)]
    pub ping_timeout: u32,
}

/// Decoded inbound frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Frame {
    /// Engine.IO session opened; the client must send [`encode_connect`].
    Open(Handshake),
    /// Engine.IO close.
    Close,
    /// Engine.IO ping; answer with [`encode_pong`].
    Ping(String),
    /// Engine.IO pong, upgrade or noop.
    Noop,
    /// Socket.IO disconnect from the namespace.
    Disconnected,
    /// Socket.IO connect refused.
    ConnectError(String),
    /// Something the dashboard consumes.
    Push(PushEvent),
    /// Well-formed but irrelevant (other events, acks, other namespaces).
    Ignored,
}

/// Malformed frame.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameDecodeError {
    /// Zero-length message.
    #[error("empty frame")]
    Empty,
    /// Unknown Engine.IO packet type.
    #[error("unknown engine packet type {0:?}")]
    EnginePacket(char),
    /// Unknown Socket.IO packet type.
    #[error("unknown socket packet type {0:?}")]
    SocketPacket(char),
    /// Open payload was not a handshake.
    #[error("invalid handshake: {0}")]
    Handshake(String),
    /// Event payload could not be decoded.
    #[error("invalid event payload: {0}")]
    Payload(String),
}

/// Namespace join sent after the Engine.IO open.
#[must_use]
pub const fn encode_connect() -> &'static str {
    "40"
}

/// Reply to an Engine.IO ping.
#[must_use]
pub fn encode_pong(payload: &str) -> String {
    format!("3{payload}")
}

/// Decode one text message.
///
/// # Errors
///
/// Returns [`FrameDecodeError`] when the message is not a valid packet.
pub fn decode_frame(text: &str) -> Result<Frame, FrameDecodeError> {
    let mut chars = text.chars();
    let kind = chars.next().ok_or(FrameDecodeError::Empty)?;
    let rest = chars.as_str();
    match kind {
        '0' => serde_json::from_str(rest)
            .map(Frame::Open)
            .map_err(|err| FrameDecodeError::Handshake(err.to_string())),
        '1' => Ok(Frame::Close),
        '2' => Ok(Frame::Ping(rest.to_string())),
        '3' | '5' | '6' => Ok(Frame::Noop),
        '4' => decode_socket_packet(rest),
        other => Err(FrameDecodeError::EnginePacket(other)),
    }
}

fn decode_socket_packet(text: &str) -> Result<Frame, FrameDecodeError> {
    let mut chars = text.chars();
    let kind = chars.next().ok_or(FrameDecodeError::Empty)?;
    let (namespace, rest) = split_namespace(chars.as_str());
    let payload = rest.trim_start_matches(|ch: char| ch.is_ascii_digit());
    let default_namespace = namespace == "/";
    match kind {
        '0' if default_namespace => Ok(Frame::Push(PushEvent::Connected)),
        '1' if default_namespace => Ok(Frame::Disconnected),
        '2' if default_namespace => decode_event(payload),
        '4' if default_namespace => Ok(Frame::ConnectError(connect_error_message(payload))),
        '0'..='6' => Ok(Frame::Ignored),
        other => Err(FrameDecodeError::SocketPacket(other)),
    }
}

fn split_namespace(text: &str) -> (&str, &str) {
    if !text.starts_with('/') {
        return ("/", text);
    }
    text.split_once(',').unwrap_or((text, ""))
}

fn decode_event(payload: &str) -> Result<Frame, FrameDecodeError> {
    let value: Value =
        serde_json::from_str(payload).map_err(|err| FrameDecodeError::Payload(err.to_string()))?;
    let Value::Array(mut args) = value else {
        return Err(FrameDecodeError::Payload("event is not an array".into()));
    };
    if args.is_empty() {
        return Err(FrameDecodeError::Payload("event has no name".into()));
    }
    let name = args.remove(0);
    if name.as_str() != Some(DEVICE_UPDATE_EVENT) {
        return Ok(Frame::Ignored);
    }
    let devices = args
        .into_iter()
        .next()
        .ok_or_else(|| FrameDecodeError::Payload("device_update without data".into()))?;
    serde_json::from_value::<DeviceMap>(devices)
        .map(|devices| Frame::Push(PushEvent::DeviceUpdate(devices)))
        .map_err(|err| FrameDecodeError::Payload(err.to_string()))
}

fn connect_error_message(payload: &str) -> String {
    serde_json::from_str::<Value>(payload)
        .ok()
        .and_then(|value| value.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| payload.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_yields_handshake() {
        let frame = decode_frame(r#"0{"sid":"abc","upgrades":[],"pingInterval":25000,"pingTimeout":20000,"maxPayload":1000000}"#)
            .expect("open");
        assert_eq!(
            frame,
            Frame::Open(Handshake {
                sid: "abc".into(),
                ping_interval: 25_000,
                ping_timeout: 20_000,
            })
        );
        assert_eq!(encode_connect(), "40");
    }

    #[test]
    fn ping_is_answered_with_matching_pong() {
        assert_eq!(decode_frame("2"), Ok(Frame::Ping(String::new())));
        assert_eq!(decode_frame("2probe"), Ok(Frame::Ping("probe".into())));
        assert_eq!(encode_pong("probe"), "3probe");
        assert_eq!(encode_pong(""), "3");
    }

    #[test]
    fn namespace_connect_is_the_connect_event() {
        assert_eq!(
            decode_frame(r#"40{"sid":"xyz"}"#),
            Ok(Frame::Push(PushEvent::Connected))
        );
        assert_eq!(decode_frame("40/admin,{}"), Ok(Frame::Ignored));
    }

    #[test]
    fn device_update_carries_full_snapshot() {
        let frame = decode_frame(
            r#"42["device_update",{"dev1":{"ip":"10.0.0.4","active":true,"group_id":null,"was_assigned":false}}]"#,
        )
        .expect("event");
        let Frame::Push(PushEvent::DeviceUpdate(devices)) = frame else {
            panic!("expected device update, got {frame:?}");
        };
        assert_eq!(devices.len(), 1);
        assert_eq!(devices["dev1"].ip, "10.0.0.4");
        assert!(devices["dev1"].is_unassigned());
    }

    #[test]
    fn ack_id_and_default_namespace_prefix_are_skipped() {
        let frame = decode_frame(r#"42/,17["device_update",{}]"#).expect("event");
        assert_eq!(frame, Frame::Push(PushEvent::DeviceUpdate(DeviceMap::new())));
    }

    #[test]
    fn other_events_are_ignored() {
        assert_eq!(decode_frame(r#"42["status",{"ok":true}]"#), Ok(Frame::Ignored));
        assert_eq!(decode_frame("43[]"), Ok(Frame::Ignored));
        assert_eq!(decode_frame("6"), Ok(Frame::Noop));
    }

    #[test]
    fn malformed_frames_are_errors() {
        assert_eq!(decode_frame(""), Err(FrameDecodeError::Empty));
        assert_eq!(decode_frame("9"), Err(FrameDecodeError::EnginePacket('9')));
        assert_eq!(decode_frame("49"), Err(FrameDecodeError::SocketPacket('9')));
        assert!(matches!(
            decode_frame(r#"42["device_update"]"#),
            Err(FrameDecodeError::Payload(_))
        ));
        assert!(matches!(
            decode_frame("42{not json"),
            Err(FrameDecodeError::Payload(_))
        ));
    }

    #[test]
    fn connect_error_surfaces_message() {
        assert_eq!(
            decode_frame(r#"44{"message":"Not authorized"}"#),
            Ok(Frame::ConnectError("Not authorized".into()))
        );
    }
}
