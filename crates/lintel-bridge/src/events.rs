// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Event adapter: named native event broadcasts as subscribable streams.
//
// The bus itself belongs to the bridge implementation — this layer only
// wraps a receiver. Each subscription attaches a fresh listener and sees
// only emissions made after it attached; independent subscribers each
// receive every emission; dropping the stream detaches the listener.
// There is no error channel: a native-side failure never terminates the
// stream.

use std::collections::HashMap;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use parking_lot::Mutex;
use serde_json::Value;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tracing::warn;

use crate::traits::NativeBridge;

/// Name-keyed broadcast channels for native event payloads.
///
/// Channels are created lazily on first subscription and live for the bus
/// lifetime. Emitting into a name nobody listens on drops the payload,
/// exactly like the global event target this stands in for.
pub struct EventBus {
    capacity: usize,
    channels: Mutex<HashMap<String, broadcast::Sender<Value>>>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            channels: Mutex::new(HashMap::new()),
        }
    }

    /// Attach a fresh listener to `event`.
    pub fn subscribe(&self, event: &str) -> broadcast::Receiver<Value> {
        self.channels
            .lock()
            .entry(event.to_owned())
            .or_insert_with(|| broadcast::channel(self.capacity).0)
            .subscribe()
    }

    /// Broadcast `payload` to every current listener of `event`. Returns
    /// how many listeners received it.
    pub fn emit(&self, event: &str, payload: Value) -> usize {
        match self.channels.lock().get(event) {
            Some(tx) => tx.send(payload).unwrap_or(0),
            None => 0,
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(lintel_core::BridgeConfig::default().event_channel_capacity)
    }
}

/// An infinite stream of payloads for one named native event.
pub struct EventStream {
    event: String,
    inner: BroadcastStream<Value>,
}

impl EventStream {
    pub fn new(event: impl Into<String>, receiver: broadcast::Receiver<Value>) -> Self {
        Self {
            event: event.into(),
            inner: BroadcastStream::new(receiver),
        }
    }

    /// Attach a fresh listener for `event` on the given bridge.
    pub fn subscribe(bridge: &dyn NativeBridge, event: &str) -> Self {
        Self::new(event, bridge.subscribe(event))
    }

    /// The event name this stream watches.
    pub fn event(&self) -> &str {
        &self.event
    }
}

impl Stream for EventStream {
    type Item = Value;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Value>> {
        loop {
            match Pin::new(&mut self.inner).poll_next(cx) {
                Poll::Ready(Some(Ok(payload))) => return Poll::Ready(Some(payload)),
                Poll::Ready(Some(Err(BroadcastStreamRecvError::Lagged(missed)))) => {
                    // A slow subscriber skips what it missed; the stream
                    // itself must not end.
                    warn!(event = %self.event, missed, "event subscriber lagged");
                }
                Poll::Ready(None) => return Poll::Ready(None),
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}
