// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Device identifier bindings (`cordova-plugin-uid`). Android-only.
//
// Every accessor is a live read of native state — nothing is cached, and
// a missing value (plugin absent, READ_PHONE_STATE not granted) is `None`
// rather than an error. Requesting the permission is the app's business,
// not this layer's.

use std::sync::Arc;

use lintel_bridge::NativeBridge;
use lintel_bridge::property::live_read_string;
use lintel_core::types::{Platform, PluginDescriptor};

/// Proxy for the device identifier plugin.
#[derive(Clone)]
pub struct Uid {
    bridge: Arc<dyn NativeBridge>,
}

impl Uid {
    pub const DESCRIPTOR: PluginDescriptor = PluginDescriptor {
        name: "Uid",
        reference: "cordova.plugins.uid",
        package: "cordova-plugin-uid",
        platforms: &[Platform::Android],
    };

    pub fn new(bridge: Arc<dyn NativeBridge>) -> Self {
        Self { bridge }
    }

    /// Device Universally Unique Identifier.
    pub fn uuid(&self) -> Option<String> {
        self.read("UUID")
    }

    /// International Mobile Station Equipment Identity.
    pub fn imei(&self) -> Option<String> {
        self.read("IMEI")
    }

    /// International Mobile Subscriber Identity.
    pub fn imsi(&self) -> Option<String> {
        self.read("IMSI")
    }

    /// SIM Integrated Circuit Card Identifier.
    pub fn iccid(&self) -> Option<String> {
        self.read("ICCID")
    }

    /// Media Access Control address.
    pub fn mac(&self) -> Option<String> {
        self.read("MAC")
    }

    fn read(&self, name: &str) -> Option<String> {
        live_read_string(self.bridge.as_ref(), Self::DESCRIPTOR.reference, name)
    }
}
