// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Generic method dispatcher.
//
// Every proxy method funnels through here: the dispatcher reads the
// method's declared `CallMode`, shapes the native argument list (splicing
// completion callbacks into their configured positions), issues the call
// through the injected bridge, and adapts whatever comes back into the
// declared return shape — a settled future, an immediate value, or nothing.
//
// Callback positions follow the hybrid runtime's splice rules:
// an index within the current argument list inserts, an index past it
// pads with nulls and places the callback at exactly the declared
// position. A callback placed past the native method's arity is therefore
// never invoked — which is how a binding declares "no error callback
// exists".

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;
use tokio::sync::oneshot;
use tracing::{Instrument, debug, instrument, warn};

use lintel_core::config::BridgeConfig;
use lintel_core::error::{LintelError, Result};
use lintel_core::types::{CallId, CallMode, MethodSpec, PluginDescriptor, SlotIndex};

use crate::traits::{BridgeCall, NativeBridge, NativeCallback, Slot};

/// Shared dispatcher all proxy types compose with.
#[derive(Clone)]
pub struct Dispatcher {
    bridge: Arc<dyn NativeBridge>,
    config: BridgeConfig,
}

impl Dispatcher {
    pub fn new(bridge: Arc<dyn NativeBridge>) -> Self {
        Self::with_config(bridge, BridgeConfig::default())
    }

    pub fn with_config(bridge: Arc<dyn NativeBridge>, config: BridgeConfig) -> Self {
        Self { bridge, config }
    }

    /// The injected bridge, for property reads and event subscriptions.
    pub fn bridge(&self) -> &Arc<dyn NativeBridge> {
        &self.bridge
    }

    /// Issue a promise-mode call and await its native completion.
    ///
    /// Resolves with the payload the native success slot was fired with;
    /// fails with `NativeCallFailed` carrying the error slot's payload
    /// verbatim. If the native side drops both callbacks without firing
    /// either, the returned future never settles — matching the hybrid
    /// runtime this layer proxies, where such promises stay pending.
    pub async fn invoke(
        &self,
        plugin: &PluginDescriptor,
        spec: &MethodSpec,
        args: Vec<Value>,
    ) -> Result<Value> {
        let CallMode::Promise { success, error } = spec.mode else {
            return Err(LintelError::Bridge(format!(
                "{}.{} is not a promise-mode method",
                plugin.reference, spec.name
            )));
        };
        self.check_platform(plugin);

        let call_id = CallId::new();
        let span = tracing::debug_span!(
            "bridge_call",
            %call_id,
            plugin = plugin.name,
            method = spec.name,
        );

        let bridge = Arc::clone(&self.bridge);
        let path = plugin.reference.to_owned();
        let method = spec.name.to_owned();

        async move {
            let (tx, rx) = oneshot::channel::<std::result::Result<Value, Value>>();
            // Both callbacks share one sender; first to fire settles the call.
            let settle = Arc::new(Mutex::new(Some(tx)));

            let on_success: NativeCallback = {
                let settle = Arc::clone(&settle);
                Box::new(move |payload| {
                    if let Some(tx) = settle.lock().take() {
                        let _ = tx.send(Ok(payload));
                    }
                })
            };
            let on_error: NativeCallback = {
                let settle = Arc::clone(&settle);
                Box::new(move |payload| {
                    if let Some(tx) = settle.lock().take() {
                        let _ = tx.send(Err(payload));
                    }
                })
            };

            let slots = shape_slots(args, on_success, on_error, success, error);
            bridge.exec(BridgeCall {
                path: path.clone(),
                method: method.clone(),
                args: slots,
            })?;

            match rx.await {
                Ok(Ok(payload)) => {
                    debug!("native call resolved");
                    Ok(payload)
                }
                Ok(Err(payload)) => Err(LintelError::NativeCallFailed {
                    method: format!("{path}.{method}"),
                    payload,
                }),
                Err(_) => {
                    // Native side released both callbacks without firing
                    // either. The proxied runtime leaves such calls pending
                    // forever; do the same instead of inventing an error.
                    debug!("native side dropped completion callbacks; call will never settle");
                    std::future::pending().await
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Issue a synchronous call and return the native value untransformed.
    #[instrument(skip(self, args), fields(plugin = plugin.name, method = spec.name))]
    pub fn invoke_sync(
        &self,
        plugin: &PluginDescriptor,
        spec: &MethodSpec,
        args: Vec<Value>,
    ) -> Result<Value> {
        self.check_platform(plugin);
        self.bridge.exec_sync(plugin.reference, spec.name, args)
    }

    /// Issue a call and discard any native result.
    #[instrument(skip(self, args), fields(plugin = plugin.name, method = spec.name))]
    pub fn fire(
        &self,
        plugin: &PluginDescriptor,
        spec: &MethodSpec,
        args: Vec<Value>,
    ) -> Result<()> {
        self.check_platform(plugin);
        let slots = args.into_iter().map(Slot::Value).collect();
        self.bridge.exec(BridgeCall {
            path: plugin.reference.to_owned(),
            method: spec.name.to_owned(),
            args: slots,
        })
    }

    fn check_platform(&self, plugin: &PluginDescriptor) {
        if !self.config.warn_unsupported_platform {
            return;
        }
        let platform = self.bridge.platform();
        if !plugin.supports(platform) {
            warn!(
                plugin = plugin.name,
                %platform,
                "plugin does not list this platform; install {} or expect the call to fail",
                plugin.package,
            );
        }
    }
}

/// Splice the success and error callbacks into the argument list at their
/// configured positions.
///
/// The lower explicit index is placed first so both land where declared;
/// appended callbacks go success-then-error after all arguments.
fn shape_slots(
    args: Vec<Value>,
    on_success: NativeCallback,
    on_error: NativeCallback,
    success_at: SlotIndex,
    error_at: SlotIndex,
) -> Vec<Slot> {
    let mut slots: Vec<Slot> = args.into_iter().map(Slot::Value).collect();

    let success_first = match (success_at, error_at) {
        (SlotIndex::At(s), SlotIndex::At(e)) => s <= e,
        (SlotIndex::At(_), SlotIndex::Append) => true,
        (SlotIndex::Append, SlotIndex::At(_)) => false,
        (SlotIndex::Append, SlotIndex::Append) => true,
    };

    if success_first {
        place(&mut slots, success_at, Slot::Success(on_success));
        place(&mut slots, error_at, Slot::Error(on_error));
    } else {
        place(&mut slots, error_at, Slot::Error(on_error));
        place(&mut slots, success_at, Slot::Success(on_success));
    }
    slots
}

/// Put `slot` at `index`: insert when in range, pad with nulls and place
/// when past the end (a sparse set on the hybrid runtime's argument array).
fn place(slots: &mut Vec<Slot>, index: SlotIndex, slot: Slot) {
    match index {
        SlotIndex::Append => slots.push(slot),
        SlotIndex::At(i) if i <= slots.len() => slots.insert(i, slot),
        SlotIndex::At(i) => {
            while slots.len() < i {
                slots.push(Slot::Value(Value::Null));
            }
            slots.push(slot);
        }
    }
}
