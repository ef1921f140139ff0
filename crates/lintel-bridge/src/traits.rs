// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The native bridge contract.
//
// A `NativeBridge` is whatever the embedding runtime provides to reach
// native plugin code: a webview message channel on device, the stub on
// desktop, an in-memory fake in tests. Proxies never talk to it directly —
// the dispatcher does, using the shapes declared here.

use lintel_core::error::Result;
use lintel_core::types::Platform;
use serde_json::Value;
use tokio::sync::broadcast;

/// Single-shot completion callback handed to the native side.
pub type NativeCallback = Box<dyn FnOnce(Value) + Send + 'static>;

/// One position in a shaped native argument list: either a plain value or
/// an injected completion callback.
pub enum Slot {
    Value(Value),
    Success(NativeCallback),
    Error(NativeCallback),
}

impl std::fmt::Debug for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Success(_) => f.write_str("Success(..)"),
            Self::Error(_) => f.write_str("Error(..)"),
        }
    }
}

/// A fully shaped invocation ready to cross the bridge.
#[derive(Debug)]
pub struct BridgeCall {
    /// Dotted reference path of the target plugin (e.g. `"admob.banner"`).
    pub path: String,
    /// Native method name.
    pub method: String,
    /// Arguments in native declaration order, callbacks already spliced in.
    pub args: Vec<Slot>,
}

/// The injected native runtime seam.
///
/// Implementations must return `LintelError::PluginNotAvailable` when the
/// reference path has no native entry — never silently drop a call.
pub trait NativeBridge: Send + Sync {
    /// Platform this bridge runs on.
    fn platform(&self) -> Platform;

    /// Human-readable platform name (e.g. "Android 15", "Detached (stub)").
    fn platform_name(&self) -> &str;

    /// Invoke a native method with callback slots. Completion (if any)
    /// arrives later through the callbacks; the immediate return only
    /// reports whether the call could be issued at all.
    fn exec(&self, call: BridgeCall) -> Result<()>;

    /// Invoke a native method that returns its value immediately.
    fn exec_sync(&self, path: &str, method: &str, args: Vec<Value>) -> Result<Value>;

    /// Read a native property. Absent values (missing plugin, missing
    /// permission) are `None`, not errors.
    fn read_property(&self, path: &str, name: &str) -> Option<Value>;

    /// Attach a fresh listener to a named native event channel. Each call
    /// returns an independent receiver that sees only emissions after this
    /// point.
    fn subscribe(&self, event: &str) -> broadcast::Receiver<Value>;
}
