// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Magnet: drag tracking and magnetic edge snapping for floating UI elements.
//!
//! A floating element (a chat head, a floating action bubble, a picture-in-picture
//! window) can be tapped or dragged around its container. When a drag ends it
//! optionally "snaps" to whichever side edge is closer, while its vertical
//! position is only kept inside the container.
//!
//! The crate is split into three layers:
//!
//! - [`Bounds`]: container and element dimensions plus the pure snap computation.
//! - [`MagnetState`]: a two-phase (`Idle` / `Dragging`) state machine that turns
//!   press / move / release samples into element positions and a [`Release`] outcome.
//! - [`DragMagnetController`]: an adapter that drives a [`MagnetState`] from
//!   [`PointerEvent`]s and applies the results through a [`MagnetHost`].
//!
//! The host owns the element position, the clock, and animations. Nothing here
//! renders, schedules, or interpolates.
//!
//! ## Usage
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_magnet::{Bounds, MagnetConfig, MagnetState, Release};
//!
//! let mut magnet = MagnetState::new(
//!     MagnetConfig::default(),
//!     Bounds::new(Size::new(360.0, 640.0), Size::new(48.0, 48.0)),
//! );
//!
//! // Press on the element sitting at (300, 50) and drag it left and down.
//! magnet.on_down(Point::new(300.0, 50.0), Point::new(320.0, 70.0), 0);
//! let moved = magnet.on_move(Point::new(120.0, 400.0)).unwrap();
//! assert_eq!(moved.position, Point::new(100.0, 380.0));
//!
//! // Its centre (124) is left of the midpoint (180), so it snaps to the left edge.
//! let Release::Snap(animation) = magnet.on_release(moved.position, 600) else {
//!     unreachable!()
//! };
//! assert_eq!(animation.to, Point::new(0.0, 380.0));
//! assert_eq!(animation.duration_ms, 300);
//! ```
//!
//! ## Bounds
//!
//! Bounds are never re-derived automatically. After the container is resized
//! (for example on rotation) the host calls [`MagnetState::update_bounds`] or
//! [`DragMagnetController::update_bounds`]. Zero, negative, or NaN dimensions
//! are read as zero, in which case every snap target collapses to the origin.
//!
//! ## Logging
//!
//! State transitions are reported through [`tracing`] at `debug` level and
//! per-sample movement at `trace` level. The crate never installs a subscriber.
//!
//! ## Features
//!
//! - `std` (default): build against the standard library.
//! - `libm`: use `libm` for Kurbo's float math in `no_std` builds.
//!
//! This crate is `no_std` compatible.

#![no_std]

mod bounds;
mod config;
mod controller;
mod state;

pub use bounds::Bounds;
pub use config::{
    DEFAULT_SNAP_DURATION_MS, DEFAULT_TAP_TIMEOUT_MS, DEFAULT_TOUCH_SLOP, MagnetConfig,
};
pub use controller::{DragMagnetController, MagnetHost, PointerEvent};
pub use state::{MagnetPhase, MagnetState, MoveUpdate, PointerSession, Release, SnapAnimation};
