// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Anyline OCR bindings (`io-anyline-cordova`). One operation: hand the
// licence key and an SDK-specific config to the native scanner and get
// back whatever the scan produced.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use lintel_bridge::{Dispatcher, NativeBridge};
use lintel_core::error::Result;
use lintel_core::types::{MethodSpec, Platform, PluginDescriptor};

/// Options for one scan run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanOptions {
    /// Anyline licence key.
    pub license_key: String,
    /// SDK-specific view and scan-mode configuration, passed through
    /// untouched.
    pub config: Value,
}

/// Proxy for the Anyline OCR scanner.
#[derive(Clone)]
pub struct Anyline {
    dispatcher: Dispatcher,
}

impl Anyline {
    pub const DESCRIPTOR: PluginDescriptor = PluginDescriptor {
        name: "Anyline",
        reference: "Anyline",
        package: "io-anyline-cordova",
        platforms: &[Platform::Android, Platform::Ios],
    };

    const SCAN: MethodSpec = MethodSpec::promise("scan");

    pub fn new(bridge: Arc<dyn NativeBridge>) -> Self {
        Self {
            dispatcher: Dispatcher::new(bridge),
        }
    }

    /// Open the native scanner and resolve once something was captured.
    /// The result payload is the SDK's, opaque to this layer.
    pub async fn scan(&self, options: &ScanOptions) -> Result<Value> {
        self.dispatcher
            .invoke(
                &Self::DESCRIPTOR,
                &Self::SCAN,
                vec![serde_json::to_value(options)?],
            )
            .await
    }
}
