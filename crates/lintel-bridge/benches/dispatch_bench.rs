// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for method dispatch through the fake bridge:
// synchronous pass-through and full promise-mode round trips.

use std::sync::Arc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use serde_json::json;

use lintel_bridge::Dispatcher;
use lintel_bridge::testing::{FakeBridge, split_slots};
use lintel_core::types::{MethodSpec, Platform, PluginDescriptor};

const BENCH_PLUGIN: PluginDescriptor = PluginDescriptor {
    name: "BenchPlugin",
    reference: "bench.plugin",
    package: "cordova-plugin-bench",
    platforms: &[Platform::Android, Platform::Ios],
};

fn bench_sync_dispatch(c: &mut Criterion) {
    let bridge = Arc::new(FakeBridge::new());
    bridge.on_exec_sync("bench.plugin.config", |args| {
        args.into_iter().next().unwrap_or(serde_json::Value::Null)
    });
    let dispatcher = Dispatcher::new(bridge);
    let spec = MethodSpec::sync("config");

    c.bench_function("sync_dispatch", |b| {
        b.iter(|| {
            let value = dispatcher
                .invoke_sync(
                    &BENCH_PLUGIN,
                    &spec,
                    vec![json!({"id": "unit", "isTesting": true})],
                )
                .expect("sync dispatch");
            black_box(value)
        })
    });
}

fn bench_promise_dispatch(c: &mut Criterion) {
    let bridge = Arc::new(FakeBridge::new());
    bridge.on_exec("bench.plugin.prepare", |slots| {
        let call = split_slots(slots);
        let (_, on_success) = call.success.expect("success slot");
        on_success(json!("ready"));
    });
    let dispatcher = Dispatcher::new(bridge);
    let spec = MethodSpec::promise("prepare");

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("runtime");

    c.bench_function("promise_dispatch", |b| {
        b.iter(|| {
            let value = rt
                .block_on(dispatcher.invoke(&BENCH_PLUGIN, &spec, vec![]))
                .expect("promise dispatch");
            black_box(value)
        })
    });
}

criterion_group!(benches, bench_sync_dispatch, bench_promise_dispatch);
criterion_main!(benches);
