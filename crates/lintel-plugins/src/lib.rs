// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Lintel Plugins — declarative bindings over the shared dispatcher. Each
// module declares one native plugin surface: its descriptor, its method
// capability table, and thin typed methods whose real behaviour lives on
// the other side of the injected bridge.

pub mod admob;
pub mod anyline;
pub mod pin_dialog;
pub mod uid;

pub use admob::{AdMob, AdMobBanner, AdMobInterstitial, AdMobRewardVideo};
pub use anyline::Anyline;
pub use pin_dialog::PinDialog;
pub use uid::Uid;
