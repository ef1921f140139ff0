// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// AdMob Free bindings: banner, interstitial, and reward-video surfaces of
// the `cordova-plugin-admob-free` native plugin, plus its lifecycle event
// channels.
//
// All configuration fields are optional — an absent field means "leave the
// native default alone". The tri-state child/family fields distinguish
// "set to true", "set to false", and "do not call the native setter".

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use lintel_bridge::{Dispatcher, EventStream, NativeBridge};
use lintel_core::error::Result;
use lintel_core::types::{MethodSpec, Platform, PluginDescriptor};

/// Banner ad configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerConfig {
    /// Ad unit ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Receive test ads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_testing: Option<bool>,
    /// Show the ad automatically once loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_show: Option<bool>,
    /// Child-directed treatment. Unset means the native tagging call is
    /// not made at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub for_child: Option<bool>,
    /// "Designed for Families" flag. Android-only; unset skips the call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub for_family: Option<bool>,
    /// Location targeting as `[latitude, longitude]`. Android-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<[f64; 2]>,
    /// Put the banner at the top of the screen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_at_top: Option<bool>,
    /// Allow the banner to overlap the webview.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlap: Option<bool>,
    /// Avoid status-bar overlap on iOS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_top_bar: Option<bool>,
    /// Banner size tag (e.g. `"SMART_BANNER"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

/// Interstitial ad configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterstitialConfig {
    /// Ad unit ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Receive test ads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_testing: Option<bool>,
    /// Show the ad automatically once loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub for_child: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub for_family: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<[f64; 2]>,
}

/// Reward-video ad configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardVideoConfig {
    /// Ad unit ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Receive test ads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_testing: Option<bool>,
    /// Show the ad automatically once loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub for_child: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub for_family: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<[f64; 2]>,
}

/// Native event names broadcast by the AdMob plugin, for use with
/// [`AdMob::on`].
pub mod events {
    pub const BANNER_LOAD: &str = "admob.banner.events.LOAD";
    pub const BANNER_LOAD_FAIL: &str = "admob.banner.events.LOAD_FAIL";
    pub const BANNER_OPEN: &str = "admob.banner.events.OPEN";
    pub const BANNER_CLOSE: &str = "admob.banner.events.CLOSE";
    pub const BANNER_EXIT_APP: &str = "admob.banner.events.EXIT_APP";

    pub const INTERSTITIAL_LOAD: &str = "admob.interstitial.events.LOAD";
    pub const INTERSTITIAL_LOAD_FAIL: &str = "admob.interstitial.events.LOAD_FAIL";
    pub const INTERSTITIAL_OPEN: &str = "admob.interstitial.events.OPEN";
    pub const INTERSTITIAL_CLOSE: &str = "admob.interstitial.events.CLOSE";
    pub const INTERSTITIAL_EXIT_APP: &str = "admob.interstitial.events.EXIT_APP";

    pub const REWARD_VIDEO_LOAD: &str = "admob.rewardvideo.events.LOAD";
    pub const REWARD_VIDEO_LOAD_FAIL: &str = "admob.rewardvideo.events.LOAD_FAIL";
    pub const REWARD_VIDEO_OPEN: &str = "admob.rewardvideo.events.OPEN";
    pub const REWARD_VIDEO_CLOSE: &str = "admob.rewardvideo.events.CLOSE";
    pub const REWARD_VIDEO_EXIT_APP: &str = "admob.rewardvideo.events.EXIT_APP";
    pub const REWARD_VIDEO_START: &str = "admob.rewardvideo.events.START";
    pub const REWARD_VIDEO_REWARD: &str = "admob.rewardvideo.events.REWARD";
}

/// Banner ad surface (`admob.banner`).
#[derive(Clone)]
pub struct AdMobBanner {
    dispatcher: Dispatcher,
}

impl AdMobBanner {
    pub const DESCRIPTOR: PluginDescriptor = PluginDescriptor {
        name: "AdMobFree",
        reference: "admob.banner",
        package: "cordova-plugin-admob-free",
        platforms: &[Platform::Android, Platform::Ios],
    };

    const CONFIG: MethodSpec = MethodSpec::sync("config");
    const PREPARE: MethodSpec = MethodSpec::promise("prepare");
    const SHOW: MethodSpec = MethodSpec::promise("show");
    const HIDE: MethodSpec = MethodSpec::promise("hide");
    const REMOVE: MethodSpec = MethodSpec::promise("remove");

    pub fn new(bridge: Arc<dyn NativeBridge>) -> Self {
        Self {
            dispatcher: Dispatcher::new(bridge),
        }
    }

    /// Update the banner configuration. The native side applies it
    /// immediately and echoes the applied config back.
    pub fn config(&self, options: &BannerConfig) -> Result<BannerConfig> {
        let echoed = self.dispatcher.invoke_sync(
            &Self::DESCRIPTOR,
            &Self::CONFIG,
            vec![serde_json::to_value(options)?],
        )?;
        Ok(serde_json::from_value(echoed)?)
    }

    /// Load a banner ad.
    pub async fn prepare(&self) -> Result<Value> {
        self.dispatcher
            .invoke(&Self::DESCRIPTOR, &Self::PREPARE, Vec::new())
            .await
    }

    /// Show the banner.
    pub async fn show(&self) -> Result<Value> {
        self.dispatcher
            .invoke(&Self::DESCRIPTOR, &Self::SHOW, Vec::new())
            .await
    }

    /// Hide the banner without destroying it.
    pub async fn hide(&self) -> Result<Value> {
        self.dispatcher
            .invoke(&Self::DESCRIPTOR, &Self::HIDE, Vec::new())
            .await
    }

    /// Remove the banner.
    pub async fn remove(&self) -> Result<Value> {
        self.dispatcher
            .invoke(&Self::DESCRIPTOR, &Self::REMOVE, Vec::new())
            .await
    }
}

/// Interstitial ad surface (`admob.interstitial`).
#[derive(Clone)]
pub struct AdMobInterstitial {
    dispatcher: Dispatcher,
}

impl AdMobInterstitial {
    pub const DESCRIPTOR: PluginDescriptor = PluginDescriptor {
        name: "AdMobFree",
        reference: "admob.interstitial",
        package: "cordova-plugin-admob-free",
        platforms: &[Platform::Android, Platform::Ios],
    };

    const CONFIG: MethodSpec = MethodSpec::sync("config");
    const IS_READY: MethodSpec = MethodSpec::promise("isReady");
    const PREPARE: MethodSpec = MethodSpec::promise("prepare");
    const SHOW: MethodSpec = MethodSpec::promise("show");

    pub fn new(bridge: Arc<dyn NativeBridge>) -> Self {
        Self {
            dispatcher: Dispatcher::new(bridge),
        }
    }

    /// Update the interstitial configuration; echoes the applied config.
    pub fn config(&self, options: &InterstitialConfig) -> Result<InterstitialConfig> {
        let echoed = self.dispatcher.invoke_sync(
            &Self::DESCRIPTOR,
            &Self::CONFIG,
            vec![serde_json::to_value(options)?],
        )?;
        Ok(serde_json::from_value(echoed)?)
    }

    /// Whether an interstitial is loaded and ready to show. The payload is
    /// whatever the native SDK reports, passed through untouched.
    pub async fn is_ready(&self) -> Result<Value> {
        self.dispatcher
            .invoke(&Self::DESCRIPTOR, &Self::IS_READY, Vec::new())
            .await
    }

    /// Load an interstitial ad.
    pub async fn prepare(&self) -> Result<Value> {
        self.dispatcher
            .invoke(&Self::DESCRIPTOR, &Self::PREPARE, Vec::new())
            .await
    }

    /// Show the interstitial.
    pub async fn show(&self) -> Result<Value> {
        self.dispatcher
            .invoke(&Self::DESCRIPTOR, &Self::SHOW, Vec::new())
            .await
    }
}

/// Reward-video ad surface (`admob.rewardvideo`).
#[derive(Clone)]
pub struct AdMobRewardVideo {
    dispatcher: Dispatcher,
}

impl AdMobRewardVideo {
    pub const DESCRIPTOR: PluginDescriptor = PluginDescriptor {
        name: "AdMobFree",
        reference: "admob.rewardvideo",
        package: "cordova-plugin-admob-free",
        platforms: &[Platform::Android, Platform::Ios],
    };

    const CONFIG: MethodSpec = MethodSpec::sync("config");
    const IS_READY: MethodSpec = MethodSpec::promise("isReady");
    const PREPARE: MethodSpec = MethodSpec::promise("prepare");
    const SHOW: MethodSpec = MethodSpec::promise("show");

    pub fn new(bridge: Arc<dyn NativeBridge>) -> Self {
        Self {
            dispatcher: Dispatcher::new(bridge),
        }
    }

    /// Update the reward-video configuration; echoes the applied config.
    pub fn config(&self, options: &RewardVideoConfig) -> Result<RewardVideoConfig> {
        let echoed = self.dispatcher.invoke_sync(
            &Self::DESCRIPTOR,
            &Self::CONFIG,
            vec![serde_json::to_value(options)?],
        )?;
        Ok(serde_json::from_value(echoed)?)
    }

    /// Whether a reward video is loaded and ready to show.
    pub async fn is_ready(&self) -> Result<Value> {
        self.dispatcher
            .invoke(&Self::DESCRIPTOR, &Self::IS_READY, Vec::new())
            .await
    }

    /// Load a reward video.
    pub async fn prepare(&self) -> Result<Value> {
        self.dispatcher
            .invoke(&Self::DESCRIPTOR, &Self::PREPARE, Vec::new())
            .await
    }

    /// Show the reward video.
    pub async fn show(&self) -> Result<Value> {
        self.dispatcher
            .invoke(&Self::DESCRIPTOR, &Self::SHOW, Vec::new())
            .await
    }
}

/// Umbrella over the three ad surfaces plus the plugin's event channels.
pub struct AdMob {
    bridge: Arc<dyn NativeBridge>,
    pub banner: AdMobBanner,
    pub interstitial: AdMobInterstitial,
    pub reward_video: AdMobRewardVideo,
}

impl AdMob {
    pub fn new(bridge: Arc<dyn NativeBridge>) -> Self {
        Self {
            banner: AdMobBanner::new(Arc::clone(&bridge)),
            interstitial: AdMobInterstitial::new(Arc::clone(&bridge)),
            reward_video: AdMobRewardVideo::new(Arc::clone(&bridge)),
            bridge,
        }
    }

    /// Watch a named ad lifecycle event (see [`events`]). Each call
    /// attaches a fresh, independent listener.
    pub fn on(&self, event: &str) -> EventStream {
        EventStream::subscribe(self.bridge.as_ref(), event)
    }
}
