// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// In-memory scriptable bridge for contract tests.
//
// Tests register a handler per `path.method`, seed properties, and emit
// events; the handler receives the exact slot vector the dispatcher
// shaped, so callback positions can be asserted and fired precisely.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;
use tokio::sync::broadcast;

use lintel_core::error::{LintelError, Result};
use lintel_core::types::Platform;

use crate::events::EventBus;
use crate::traits::{BridgeCall, NativeBridge, NativeCallback, Slot};

type ExecHandler = Arc<dyn Fn(Vec<Slot>) + Send + Sync>;
type SyncHandler = Arc<dyn Fn(Vec<Value>) -> Value + Send + Sync>;

/// A shaped call decomposed for assertion-side use: plain values plus the
/// first success/error callback, each with the position it occupied.
pub struct ShapedCall {
    pub values: Vec<(usize, Value)>,
    pub success: Option<(usize, NativeCallback)>,
    pub error: Option<(usize, NativeCallback)>,
}

/// Decompose a slot vector into values and callbacks.
pub fn split_slots(slots: Vec<Slot>) -> ShapedCall {
    let mut call = ShapedCall {
        values: Vec::new(),
        success: None,
        error: None,
    };
    for (index, slot) in slots.into_iter().enumerate() {
        match slot {
            Slot::Value(v) => call.values.push((index, v)),
            Slot::Success(cb) if call.success.is_none() => call.success = Some((index, cb)),
            Slot::Error(cb) if call.error.is_none() => call.error = Some((index, cb)),
            // Duplicate callbacks are dropped — one completion pair per call.
            Slot::Success(_) | Slot::Error(_) => {}
        }
    }
    call
}

/// Scriptable `NativeBridge` double.
pub struct FakeBridge {
    platform: Platform,
    exec_handlers: Mutex<HashMap<String, ExecHandler>>,
    sync_handlers: Mutex<HashMap<String, SyncHandler>>,
    properties: Mutex<HashMap<String, Value>>,
    calls: Mutex<Vec<String>>,
    events: EventBus,
}

impl FakeBridge {
    pub fn new() -> Self {
        Self::with_platform(Platform::Android)
    }

    pub fn with_platform(platform: Platform) -> Self {
        Self {
            platform,
            exec_handlers: Mutex::new(HashMap::new()),
            sync_handlers: Mutex::new(HashMap::new()),
            properties: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            events: EventBus::default(),
        }
    }

    /// Script the native side of `path.method` for callback-slot calls.
    pub fn on_exec(
        &self,
        path_method: &str,
        handler: impl Fn(Vec<Slot>) + Send + Sync + 'static,
    ) {
        self.exec_handlers
            .lock()
            .insert(path_method.to_owned(), Arc::new(handler));
    }

    /// Script the native side of `path.method` for synchronous calls.
    pub fn on_exec_sync(
        &self,
        path_method: &str,
        handler: impl Fn(Vec<Value>) -> Value + Send + Sync + 'static,
    ) {
        self.sync_handlers
            .lock()
            .insert(path_method.to_owned(), Arc::new(handler));
    }

    /// Seed or mutate a native property.
    pub fn set_property(&self, path: &str, name: &str, value: Value) {
        self.properties
            .lock()
            .insert(format!("{path}.{name}"), value);
    }

    /// Remove a native property (simulates a revoked permission).
    pub fn clear_property(&self, path: &str, name: &str) {
        self.properties.lock().remove(&format!("{path}.{name}"));
    }

    /// Broadcast a native event. Returns the number of listeners reached.
    pub fn emit(&self, event: &str, payload: Value) -> usize {
        self.events.emit(event, payload)
    }

    /// Every `path.method` that crossed the bridge, in order.
    pub fn recorded_calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

impl Default for FakeBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeBridge for FakeBridge {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn platform_name(&self) -> &str {
        "Fake"
    }

    fn exec(&self, call: BridgeCall) -> Result<()> {
        let key = format!("{}.{}", call.path, call.method);
        self.calls.lock().push(key.clone());
        // Clone the handler out so it can re-enter the bridge if it wants.
        let handler = self.exec_handlers.lock().get(&key).cloned();
        match handler {
            Some(handler) => {
                handler(call.args);
                Ok(())
            }
            None => Err(LintelError::PluginNotAvailable { reference: key }),
        }
    }

    fn exec_sync(&self, path: &str, method: &str, args: Vec<Value>) -> Result<Value> {
        let key = format!("{path}.{method}");
        self.calls.lock().push(key.clone());
        let handler = self.sync_handlers.lock().get(&key).cloned();
        match handler {
            Some(handler) => Ok(handler(args)),
            None => Err(LintelError::PluginNotAvailable { reference: key }),
        }
    }

    fn read_property(&self, path: &str, name: &str) -> Option<Value> {
        self.properties.lock().get(&format!("{path}.{name}")).cloned()
    }

    fn subscribe(&self, event: &str) -> broadcast::Receiver<Value> {
        self.events.subscribe(event)
    }
}
