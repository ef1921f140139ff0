// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Lintel.
//
// The proxy layer performs no recovery: every failure surfaces directly to
// the caller at the point of the call. Native error payloads are carried
// verbatim — nothing here classifies or rewrites what the native SDK said.

use thiserror::Error;

/// Top-level error type for all Lintel operations.
#[derive(Debug, Error)]
pub enum LintelError {
    /// The native bridge has no entry at the given reference path — the
    /// plugin is not installed, or the platform does not support it.
    #[error("no native plugin at {reference} (plugin not installed or platform unsupported)")]
    PluginNotAvailable { reference: String },

    /// The native side invoked the configured error slot. `payload` is the
    /// native SDK's error value, unmodified.
    #[error("native call {method} failed: {payload}")]
    NativeCallFailed {
        method: String,
        payload: serde_json::Value,
    },

    /// A bridge implementation reported a transport fault.
    #[error("bridge error: {0}")]
    Bridge(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, LintelError>;
