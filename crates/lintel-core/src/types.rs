// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Lintel proxy layer.
//
// A binding is declared as data: a `PluginDescriptor` names the native
// capability a proxy type stands for, and each of its methods carries a
// `MethodSpec` describing how the generic dispatcher must shape the call.
// Both are `'static` consts — declared once, never mutated, alive for the
// process lifetime.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a single dispatched bridge call. Used in tracing
/// spans to correlate a call with its eventual native completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallId(pub Uuid);

impl CallId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CallId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CallId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mobile platforms a native plugin can support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Android,
    Ios,
    /// Desktop or CI host without a native runtime (stub bridge).
    Detached,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Android => write!(f, "Android"),
            Self::Ios => write!(f, "iOS"),
            Self::Detached => write!(f, "Detached"),
        }
    }
}

/// Static metadata attached to a proxy type: which native plugin it stands
/// for and where that plugin lives on the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginDescriptor {
    /// Human-readable plugin name (e.g. `"AdMobFree"`).
    pub name: &'static str,
    /// Dotted lookup path on the native bridge (e.g. `"admob.banner"`).
    pub reference: &'static str,
    /// Installable native plugin id, quoted in "not installed" warnings
    /// (e.g. `"cordova-plugin-admob-free"`).
    pub package: &'static str,
    /// Platforms the native plugin ships for.
    pub platforms: &'static [Platform],
}

impl PluginDescriptor {
    pub fn supports(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }
}

/// Where the dispatcher places an injected callback in the native argument
/// list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotIndex {
    /// After all declared arguments (the common case).
    Append,
    /// At a fixed position. An index past the native method's arity is
    /// legal: the callback is placed but the native side never reads it,
    /// so that completion path is unreachable.
    At(usize),
}

/// How a proxy method's call crosses the bridge and what comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallMode {
    /// Deferred result: the dispatcher injects a success and an error
    /// callback at the given positions and settles a future when one of
    /// them fires.
    Promise {
        success: SlotIndex,
        error: SlotIndex,
    },
    /// Immediate native return value, no deferral. Used by configuration
    /// setters that mutate native state and echo it back.
    Sync,
    /// Invoke and discard any result.
    FireAndForget,
}

impl CallMode {
    /// Promise mode with both callbacks appended — the default wiring.
    pub const PROMISE: Self = Self::Promise {
        success: SlotIndex::Append,
        error: SlotIndex::Append,
    };
}

/// Capability-table entry for one proxy method: consulted by the dispatcher
/// on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodSpec {
    /// Native method name, forwarded verbatim.
    pub name: &'static str,
    pub mode: CallMode,
}

impl MethodSpec {
    pub const fn promise(name: &'static str) -> Self {
        Self {
            name,
            mode: CallMode::PROMISE,
        }
    }

    pub const fn sync(name: &'static str) -> Self {
        Self {
            name,
            mode: CallMode::Sync,
        }
    }

    pub const fn fire_and_forget(name: &'static str) -> Self {
        Self {
            name,
            mode: CallMode::FireAndForget,
        }
    }
}
