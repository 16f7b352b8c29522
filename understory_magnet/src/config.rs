// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunables for drag recognition and magnetic snapping.

/// Default slop distance, in pixels, before a press becomes a drag.
pub const DEFAULT_TOUCH_SLOP: f64 = 8.0;

/// Default longest press, in milliseconds, still recognized as a tap.
pub const DEFAULT_TAP_TIMEOUT_MS: u64 = 200;

/// Default duration, in milliseconds, of the snap animation requested on release.
pub const DEFAULT_SNAP_DURATION_MS: u64 = 300;

/// Configuration for a [`MagnetState`](crate::MagnetState).
///
/// ```
/// use understory_magnet::MagnetConfig;
///
/// let config = MagnetConfig::default()
///     .with_touch_slop(10.0)
///     .with_magnetic(false);
/// assert_eq!(config.touch_slop, 10.0);
/// assert!(!config.magnetic);
/// assert_eq!(config.tap_timeout_ms, 200);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MagnetConfig {
    /// Pointer displacement that must be *exceeded* before a drag starts.
    ///
    /// This is device dependent; hosts usually scale a platform value by display density.
    pub touch_slop: f64,
    /// A release strictly sooner than this after the press counts as a tap.
    pub tap_timeout_ms: u64,
    /// Duration handed to the host for the snap animation.
    pub snap_duration_ms: u64,
    /// Whether a drag ends by snapping to the nearest side edge.
    pub magnetic: bool,
}

impl Default for MagnetConfig {
    fn default() -> Self {
        Self {
            touch_slop: DEFAULT_TOUCH_SLOP,
            tap_timeout_ms: DEFAULT_TAP_TIMEOUT_MS,
            snap_duration_ms: DEFAULT_SNAP_DURATION_MS,
            magnetic: true,
        }
    }
}

impl MagnetConfig {
    /// Sets the slop distance. Negative and NaN values are read as zero.
    #[must_use]
    pub fn with_touch_slop(mut self, touch_slop: f64) -> Self {
        self.touch_slop = touch_slop.max(0.0);
        self
    }

    /// Sets the tap timeout.
    #[must_use]
    pub fn with_tap_timeout_ms(mut self, tap_timeout_ms: u64) -> Self {
        self.tap_timeout_ms = tap_timeout_ms;
        self
    }

    /// Sets the snap animation duration.
    #[must_use]
    pub fn with_snap_duration_ms(mut self, snap_duration_ms: u64) -> Self {
        self.snap_duration_ms = snap_duration_ms;
        self
    }

    /// Enables or disables magnetic edge snapping.
    #[must_use]
    pub fn with_magnetic(mut self, magnetic: bool) -> Self {
        self.magnetic = magnetic;
        self
    }

    /// Squared slop distance, used to compare against squared displacements.
    pub(crate) fn slop_squared(&self) -> f64 {
        let slop = self.touch_slop.max(0.0);
        slop * slop
    }
}
