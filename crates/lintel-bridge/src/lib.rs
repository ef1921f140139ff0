// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Lintel Bridge — the seam between declarative plugin proxies and whatever
// native runtime hosts the app. This crate defines the `NativeBridge` trait,
// the generic method dispatcher that shapes proxy calls into bridge
// invocations, live property reads, and the event-stream adapter.
//
// Real iOS/Android transports are injected by the embedding runtime; this
// crate only ships the detached stub (desktop/CI) and an in-memory bridge
// for tests.

use std::sync::Arc;

pub mod dispatch;
pub mod events;
pub mod property;
pub mod stub;
pub mod testing;
pub mod traits;

pub use dispatch::Dispatcher;
pub use events::{EventBus, EventStream};
pub use stub::StubBridge;
pub use traits::{BridgeCall, NativeBridge, NativeCallback, Slot};

/// Bridge used when no native runtime injected one — detached builds.
///
/// Every call fails with `PluginNotAvailable`, every property reads as
/// absent, and event channels stay silent.
pub fn detached_bridge() -> Arc<dyn NativeBridge> {
    Arc::new(StubBridge::new())
}
