//! Push channel runner for the app shell.
//!
//! # Design
//! - One WebSocket session at a time; a closed or failed session is retried
//!   with exponential backoff, reset once a session joins the namespace.
//! - Framing lives in `services::socket`; this module only moves text.
//! - Expose an abortable handle so the root component can stop the loop on
//!   unmount.

use futures_util::SinkExt;
use futures_util::future::{AbortHandle, abortable};
use futures_util::stream::{SplitSink, StreamExt};
use gloo_net::websocket::Message;
use gloo_net::websocket::futures::WebSocket;
use gloo_timers::future::TimeoutFuture;
use thiserror::Error;
use yew::Callback;

use crate::app::diagnostics;
use crate::core::events::{ChannelState, PushEvent};
use crate::core::logic::backoff_delay_ms;
use crate::services::socket::{Frame, decode_frame, encode_connect, encode_pong};

/// Running push channel; `close` stops reconnecting.
pub(crate) struct SocketHandle {
    abort: AbortHandle,
}

impl SocketHandle {
    pub(crate) fn close(&self) {
        self.abort.abort();
    }
}

#[derive(Debug, Error)]
enum SessionError {
    #[error("could not open socket: {0}")]
    Open(String),
    #[error("socket failed: {0}")]
    Transport(String),
    #[error("namespace refused: {0}")]
    Refused(String),
}

/// Spawn the reconnecting session loop.
pub(crate) fn connect_socket(
    url: String,
    on_event: Callback<PushEvent>,
    on_state: Callback<ChannelState>,
) -> SocketHandle {
    let (task, abort) = abortable(run_socket_loop(url, on_event, on_state));
    yew::platform::spawn_local(async move {
        let _ = task.await;
    });
    SocketHandle { abort }
}

async fn run_socket_loop(url: String, on_event: Callback<PushEvent>, on_state: Callback<ChannelState>) {
    let mut attempt = 0u32;
    loop {
        on_state.emit(ChannelState::Connecting);
        let mut joined = false;
        if let Err(err) = run_session(&url, &on_event, &on_state, &mut joined).await {
            diagnostics::reject("Push channel", &err);
        }
        if joined {
            attempt = 0;
        }
        let retry_in_ms = backoff_delay_ms(attempt);
        on_state.emit(ChannelState::Disconnected { retry_in_ms });
        TimeoutFuture::new(retry_in_ms).await;
        attempt = attempt.saturating_add(1);
    }
}

async fn run_session(
    url: &str,
    on_event: &Callback<PushEvent>,
    on_state: &Callback<ChannelState>,
    joined: &mut bool,
) -> Result<(), SessionError> {
    let socket = WebSocket::open(url).map_err(|err| SessionError::Open(err.to_string()))?;
    let (mut outbound, mut inbound) = socket.split();
    while let Some(message) = inbound.next().await {
        let text = match message {
            Ok(Message::Text(text)) => text,
            Ok(Message::Bytes(_)) => continue,
            Err(err) => return Err(SessionError::Transport(err.to_string())),
        };
        match decode_frame(&text) {
            Ok(Frame::Open(_)) => send(&mut outbound, encode_connect().to_string()).await?,
            Ok(Frame::Ping(payload)) => send(&mut outbound, encode_pong(&payload)).await?,
            Ok(Frame::Push(PushEvent::Connected)) => {
                *joined = true;
                on_state.emit(ChannelState::Connected);
                on_event.emit(PushEvent::Connected);
            }
            Ok(Frame::Push(event)) => on_event.emit(event),
            Ok(Frame::Close | Frame::Disconnected) => return Ok(()),
            Ok(Frame::ConnectError(message)) => return Err(SessionError::Refused(message)),
            Ok(Frame::Noop | Frame::Ignored) => {}
            Err(err) => diagnostics::reject("Ignoring push frame", &err),
        }
    }
    Ok(())
}

async fn send(outbound: &mut SplitSink<WebSocket, Message>, text: String) -> Result<(), SessionError> {
    outbound
        .send(Message::Text(text))
        .await
        .map_err(|err| SessionError::Transport(err.to_string()))
}
