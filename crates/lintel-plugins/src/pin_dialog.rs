// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PIN dialog bindings (`cordova-plugin-pin-dialog`): a numeric password
// prompt rendered by the native side.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use lintel_bridge::{Dispatcher, NativeBridge};
use lintel_core::error::Result;
use lintel_core::types::{CallMode, MethodSpec, Platform, PluginDescriptor, SlotIndex};

/// What the user did with the dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptResult {
    /// 1-based index of the button pressed.
    pub button_index: u32,
    /// The PIN the user typed.
    pub input1: String,
}

/// Proxy for the native PIN dialog.
#[derive(Clone)]
pub struct PinDialog {
    dispatcher: Dispatcher,
}

impl PinDialog {
    pub const DESCRIPTOR: PluginDescriptor = PluginDescriptor {
        name: "PinDialog",
        reference: "plugins.pinDialog",
        package: "cordova-plugin-pin-dialog",
        platforms: &[Platform::Android, Platform::Ios],
    };

    // The native signature is prompt(message, success, title, buttons);
    // the error slot lands past that arity and is never invoked.
    const PROMPT: MethodSpec = MethodSpec {
        name: "prompt",
        mode: CallMode::Promise {
            success: SlotIndex::At(1),
            error: SlotIndex::At(4),
        },
    };

    pub fn new(bridge: Arc<dyn NativeBridge>) -> Self {
        Self {
            dispatcher: Dispatcher::new(bridge),
        }
    }

    /// Show the PIN dialog and resolve with the pressed button and typed
    /// PIN.
    ///
    /// Known limitation carried over from the native binding: no error
    /// callback is wired, so a native-side failure never rejects — the
    /// returned future simply never settles.
    pub async fn prompt(
        &self,
        message: &str,
        title: &str,
        buttons: &[&str],
    ) -> Result<PromptResult> {
        let args = vec![
            Value::from(message),
            Value::from(title),
            serde_json::to_value(buttons)?,
        ];
        let raw = self
            .dispatcher
            .invoke(&Self::DESCRIPTOR, &Self::PROMPT, args)
            .await?;
        Ok(serde_json::from_value(raw)?)
    }
}
