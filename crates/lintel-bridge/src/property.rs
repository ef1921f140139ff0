// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Live property reads.
//
// A property proxy is not a cached field: every access re-queries the
// native side, so the caller always sees the current value. An absent
// value (plugin missing, permission not granted) is `None` — never an
// error.

use serde_json::Value;
use tracing::trace;

use crate::traits::NativeBridge;

/// Read the current native value of `reference.name`.
pub fn live_read(bridge: &dyn NativeBridge, reference: &str, name: &str) -> Option<Value> {
    let value = bridge.read_property(reference, name);
    trace!(reference, name, present = value.is_some(), "property read");
    value
}

/// Read a native string property. Non-string native values read as absent.
pub fn live_read_string(bridge: &dyn NativeBridge, reference: &str, name: &str) -> Option<String> {
    live_read(bridge, reference, name).and_then(|v| match v {
        Value::String(s) => Some(s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeBridge;
    use serde_json::json;

    #[test]
    fn reads_are_live_not_cached() {
        let bridge = FakeBridge::new();
        bridge.set_property("cordova.plugins.uid", "IMEI", json!("351756051523999"));
        assert_eq!(
            live_read_string(&bridge, "cordova.plugins.uid", "IMEI").as_deref(),
            Some("351756051523999"),
        );

        // Native-side mutation between reads must be observed.
        bridge.set_property("cordova.plugins.uid", "IMEI", json!("490154203237518"));
        assert_eq!(
            live_read_string(&bridge, "cordova.plugins.uid", "IMEI").as_deref(),
            Some("490154203237518"),
        );
    }

    #[test]
    fn absent_property_is_none_not_an_error() {
        let bridge = FakeBridge::new();
        assert_eq!(live_read(&bridge, "cordova.plugins.uid", "MAC"), None);
    }

    #[test]
    fn non_string_value_reads_as_absent_for_string_helper() {
        let bridge = FakeBridge::new();
        bridge.set_property("some.plugin", "count", json!(3));
        assert_eq!(live_read_string(&bridge, "some.plugin", "count"), None);
        // The raw read still surfaces it.
        assert_eq!(live_read(&bridge, "some.plugin", "count"), Some(json!(3)));
    }
}
