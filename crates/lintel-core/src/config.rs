// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bridge configuration.

use serde::{Deserialize, Serialize};

/// Settings for the proxy layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Buffer capacity of each named event channel. Subscribers that fall
    /// more than this many payloads behind skip the missed ones.
    pub event_channel_capacity: usize,
    /// Log a warning when a call targets a plugin whose descriptor does not
    /// list the bridge's platform.
    pub warn_unsupported_platform: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            event_channel_capacity: 32,
            warn_unsupported_platform: true,
        }
    }
}
