// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub bridge for desktop/CI builds where no native runtime is present.
//
// Every invocation fails with `PluginNotAvailable`, every property reads
// as absent, and event channels exist but never emit. Real transports are
// injected by the embedding mobile runtime.

use serde_json::Value;
use tokio::sync::broadcast;
use tracing::{debug, warn};

use lintel_core::error::{LintelError, Result};
use lintel_core::types::Platform;

use crate::events::EventBus;
use crate::traits::{BridgeCall, NativeBridge};

/// No-op bridge returned on hosts without a native side.
pub struct StubBridge {
    events: EventBus,
}

impl StubBridge {
    pub fn new() -> Self {
        Self {
            events: EventBus::default(),
        }
    }
}

impl Default for StubBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeBridge for StubBridge {
    fn platform(&self) -> Platform {
        Platform::Detached
    }

    fn platform_name(&self) -> &str {
        "Detached (stub)"
    }

    fn exec(&self, call: BridgeCall) -> Result<()> {
        warn!(path = %call.path, method = %call.method, "exec on stub bridge");
        Err(LintelError::PluginNotAvailable {
            reference: format!("{}.{}", call.path, call.method),
        })
    }

    fn exec_sync(&self, path: &str, method: &str, _args: Vec<Value>) -> Result<Value> {
        warn!(path, method, "exec_sync on stub bridge");
        Err(LintelError::PluginNotAvailable {
            reference: format!("{path}.{method}"),
        })
    }

    fn read_property(&self, path: &str, name: &str) -> Option<Value> {
        debug!(path, name, "property read on stub bridge");
        None
    }

    fn subscribe(&self, event: &str) -> broadcast::Receiver<Value> {
        // A live but forever-silent channel: subscribers park instead of
        // observing a spurious end-of-stream.
        self.events.subscribe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_calls_fail_with_plugin_not_available() {
        let bridge = StubBridge::new();
        let err = bridge
            .exec_sync("admob.banner", "config", vec![])
            .expect_err("stub must fail");
        match err {
            LintelError::PluginNotAvailable { reference } => {
                assert_eq!(reference, "admob.banner.config");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn properties_read_as_absent() {
        let bridge = StubBridge::new();
        assert_eq!(bridge.read_property("cordova.plugins.uid", "UUID"), None);
    }

    #[test]
    fn subscriptions_stay_silent_but_alive() {
        let bridge = StubBridge::new();
        let mut rx = bridge.subscribe("admob.banner.events.LOAD");
        assert!(matches!(
            rx.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));
    }
}
