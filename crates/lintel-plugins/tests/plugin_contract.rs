// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// End-to-end contract tests: every binding driven against the in-memory
// bridge, asserting the adaptation contract (not ad/OCR/dialog logic,
// which lives on the native side).

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};
use tokio_stream::StreamExt;

use lintel_bridge::testing::{FakeBridge, split_slots};
use lintel_bridge::{NativeBridge, detached_bridge};
use lintel_core::error::LintelError;
use lintel_plugins::admob::{self, AdMob, BannerConfig};
use lintel_plugins::anyline::{Anyline, ScanOptions};
use lintel_plugins::pin_dialog::{PinDialog, PromptResult};
use lintel_plugins::uid::Uid;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[tokio::test]
async fn banner_prepare_resolves_after_delayed_native_success() {
    init_tracing();
    let bridge = Arc::new(FakeBridge::new());
    bridge.on_exec("admob.banner.prepare", |slots| {
        let call = split_slots(slots);
        let (_, on_success) = call.success.expect("success slot");
        // Native completion arrives later, off the calling stack.
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            on_success(Value::Null);
        });
    });

    let admob = AdMob::new(bridge);
    let resolved = admob.banner.prepare().await.expect("prepare resolves");
    assert_eq!(resolved, Value::Null);
}

#[tokio::test]
async fn banner_prepare_rejects_when_plugin_missing() {
    init_tracing();
    let admob = AdMob::new(detached_bridge());
    let err = admob.banner.prepare().await.expect_err("must reject");
    assert!(matches!(err, LintelError::PluginNotAvailable { .. }));
}

#[test]
fn banner_config_echoes_the_applied_config() {
    init_tracing();
    let bridge = Arc::new(FakeBridge::new());
    bridge.on_exec_sync("admob.banner.config", |args| {
        args.into_iter().next().unwrap_or(Value::Null)
    });

    let admob = AdMob::new(bridge);
    let requested = BannerConfig {
        id: Some("ca-app-pub-3940256099942544/6300978111".into()),
        is_testing: Some(true),
        auto_show: Some(false),
        banner_at_top: Some(true),
        size: Some("SMART_BANNER".into()),
        ..Default::default()
    };
    let applied = admob.banner.config(&requested).expect("config echo");
    assert_eq!(applied, requested);
}

#[tokio::test]
async fn interstitial_is_ready_payload_is_passed_through() {
    init_tracing();
    let bridge = Arc::new(FakeBridge::new());
    bridge.on_exec("admob.interstitial.isReady", |slots| {
        let call = split_slots(slots);
        let (_, on_success) = call.success.expect("success slot");
        on_success(json!(true));
    });

    let admob = AdMob::new(bridge);
    assert_eq!(
        admob.interstitial.is_ready().await.expect("is_ready"),
        json!(true)
    );
}

#[tokio::test]
async fn ad_events_reach_only_live_subscribers() {
    init_tracing();
    let bridge = Arc::new(FakeBridge::new());
    let admob = AdMob::new(Arc::clone(&bridge) as Arc<dyn NativeBridge>);

    // Emissions before anyone subscribes go nowhere.
    assert_eq!(bridge.emit(admob::events::BANNER_LOAD, json!(1)), 0);

    let mut first = admob.on(admob::events::BANNER_LOAD);
    let mut second = admob.on(admob::events::BANNER_LOAD);
    assert_eq!(bridge.emit(admob::events::BANNER_LOAD, json!(2)), 2);

    assert_eq!(first.next().await, Some(json!(2)));
    assert_eq!(second.next().await, Some(json!(2)));

    // Dropping one stream detaches only that listener.
    drop(first);
    assert_eq!(bridge.emit(admob::events::BANNER_LOAD, json!(3)), 1);
    assert_eq!(second.next().await, Some(json!(3)));

    // Channels are independent per event name.
    let mut reward = admob.on(admob::events::REWARD_VIDEO_REWARD);
    assert_eq!(
        bridge.emit(admob::events::REWARD_VIDEO_REWARD, json!({"amount": 10})),
        1
    );
    assert_eq!(reward.next().await, Some(json!({"amount": 10})));
}

#[tokio::test]
async fn anyline_scan_forwards_options_and_returns_opaque_result() {
    init_tracing();
    let bridge = Arc::new(FakeBridge::new());
    bridge.on_exec("Anyline.scan", |slots| {
        let call = split_slots(slots);
        let (_, options) = &call.values[0];
        assert_eq!(options["licenseKey"], json!("license-123"));
        let (_, on_success) = call.success.expect("success slot");
        on_success(json!({ "text": "A 123 456", "confidence": 98 }));
    });

    let anyline = Anyline::new(bridge);
    let result = anyline
        .scan(&ScanOptions {
            license_key: "license-123".into(),
            config: json!({ "scanMode": "LICENSE_PLATE" }),
        })
        .await
        .expect("scan resolves");
    assert_eq!(result, json!({ "text": "A 123 456", "confidence": 98 }));
}

#[tokio::test]
async fn pin_prompt_resolves_with_the_exact_native_object() {
    init_tracing();
    let bridge = Arc::new(FakeBridge::new());
    bridge.on_exec("plugins.pinDialog.prompt", |mut slots| {
        // The native method reads four parameters: message, success
        // callback, title, buttons. The fifth slot (the error callback)
        // is beyond its arity and must never be touched.
        assert_eq!(slots.len(), 5);
        slots.truncate(4);

        let call = split_slots(slots);
        assert!(call.error.is_none());
        let (position, on_success) = call.success.expect("success slot");
        assert_eq!(position, 1);
        assert_eq!(call.values[0], (0, json!("Enter your PIN")));
        assert_eq!(call.values[1], (2, json!("Verify PIN")));
        assert_eq!(call.values[2], (3, json!(["OK", "Cancel"])));

        on_success(json!({ "buttonIndex": 1, "input1": "1234" }));
    });

    let dialog = PinDialog::new(bridge);
    let result = dialog
        .prompt("Enter your PIN", "Verify PIN", &["OK", "Cancel"])
        .await
        .expect("prompt resolves");
    assert_eq!(
        result,
        PromptResult {
            button_index: 1,
            input1: "1234".into(),
        }
    );
}

#[tokio::test]
async fn pin_prompt_native_failure_has_no_rejection_path() {
    init_tracing();
    let bridge = Arc::new(FakeBridge::new());
    bridge.on_exec("plugins.pinDialog.prompt", |mut slots| {
        // A failing native implementation still only sees its four
        // declared parameters; with no error callback among them it has
        // nothing to fire, so the callbacks are simply released.
        slots.truncate(4);
        drop(slots);
    });

    let dialog = PinDialog::new(bridge);
    let pending = dialog.prompt("Enter your PIN", "Verify PIN", &["OK", "Cancel"]);
    let timed_out = tokio::time::timeout(Duration::from_millis(50), pending).await;
    assert!(timed_out.is_err(), "prompt must stay pending, not reject");
}

#[test]
fn uid_properties_are_live_reads() {
    init_tracing();
    let bridge = Arc::new(FakeBridge::new());
    let uid = Uid::new(Arc::clone(&bridge) as Arc<dyn NativeBridge>);

    // Nothing granted yet: absent, not an error.
    assert_eq!(uid.imei(), None);

    bridge.set_property("cordova.plugins.uid", "IMEI", json!("351756051523999"));
    bridge.set_property("cordova.plugins.uid", "UUID", json!("f3a9c1d2"));
    assert_eq!(uid.imei().as_deref(), Some("351756051523999"));
    assert_eq!(uid.uuid().as_deref(), Some("f3a9c1d2"));

    // A native-side change shows up on the next read.
    bridge.set_property("cordova.plugins.uid", "IMEI", json!("490154203237518"));
    assert_eq!(uid.imei().as_deref(), Some("490154203237518"));

    // And a revoked permission reads as absent again.
    bridge.clear_property("cordova.plugins.uid", "IMEI");
    assert_eq!(uid.imei(), None);
}
