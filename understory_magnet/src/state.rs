// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-phase drag state machine with tap recognition and magnetic release.
//!
//! ## Usage
//!
//! 1) Call [`MagnetState::on_down`] with the element and pointer positions when a press starts.
//! 2) Feed every pointer sample to [`MagnetState::on_move`]. Samples inside the slop radius are
//!    ignored; once the radius is exceeded the state enters [`MagnetPhase::Dragging`] and each
//!    sample yields the new element position.
//! 3) End with [`MagnetState::on_release`] (or [`MagnetState::on_cancel`], which behaves the same)
//!    and act on the returned [`Release`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_magnet::{Bounds, MagnetConfig, MagnetPhase, MagnetState, Release};
//!
//! let bounds = Bounds::new(Size::new(400.0, 800.0), Size::new(50.0, 50.0));
//! let mut magnet = MagnetState::new(MagnetConfig::default(), bounds);
//!
//! magnet.on_down(Point::new(10.0, 100.0), Point::new(30.0, 120.0), 0);
//!
//! // Inside the slop radius: nothing moves.
//! assert!(magnet.on_move(Point::new(33.0, 124.0)).is_none());
//! assert_eq!(magnet.phase(), MagnetPhase::Idle);
//!
//! // Past it: the element follows the pointer.
//! let update = magnet.on_move(Point::new(330.0, 220.0)).unwrap();
//! assert!(update.started);
//! assert_eq!(update.position, Point::new(310.0, 200.0));
//!
//! // Released right of the midpoint: snap to the right edge.
//! match magnet.on_release(update.position, 400) {
//!     Release::Snap(anim) => assert_eq!(anim.to, Point::new(350.0, 200.0)),
//!     other => panic!("expected a snap, got {other:?}"),
//! }
//! assert_eq!(magnet.phase(), MagnetPhase::Idle);
//! ```

use kurbo::{Point, Vec2};

use crate::bounds::Bounds;
use crate::config::MagnetConfig;

/// Phase of the interaction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MagnetPhase {
    /// No drag in progress. A press that has not left the slop radius is still `Idle`.
    #[default]
    Idle,
    /// The element is following the pointer.
    Dragging,
}

/// State captured at the start of one press.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerSession {
    /// Element position when the press started.
    pub origin: Point,
    /// Pointer position when the press started.
    pub pointer_origin: Point,
    /// Whether the pointer has left the slop radius during this press.
    pub dragging: bool,
    /// Host clock reading, in milliseconds, when the press started.
    pub started_at: u64,
}

impl PointerSession {
    /// Cumulative pointer displacement since the press started.
    #[must_use]
    pub fn displacement(&self, pointer: Point) -> Vec2 {
        pointer - self.pointer_origin
    }

    /// Element position implied by `pointer`: origin plus displacement.
    #[must_use]
    pub fn follow(&self, pointer: Point) -> Point {
        self.origin + self.displacement(pointer)
    }
}

/// Result of a pointer sample that moved the element.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MoveUpdate {
    /// New element position.
    pub position: Point,
    /// `true` only for the sample that crossed the slop radius.
    pub started: bool,
}

/// An animated move the host should run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SnapAnimation {
    /// Position the element is released at.
    pub from: Point,
    /// Position the element should come to rest at.
    pub to: Point,
    /// Animation length in milliseconds.
    pub duration_ms: u64,
}

impl SnapAnimation {
    /// Returns `true` if the animation changes the horizontal position.
    #[must_use]
    pub fn moves_x(&self) -> bool {
        self.from.x != self.to.x
    }

    /// Returns `true` if the animation changes the vertical position.
    #[must_use]
    pub fn moves_y(&self) -> bool {
        self.from.y != self.to.y
    }
}

/// Outcome of ending a press.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Release {
    /// No press was in progress.
    None,
    /// A short press that never became a drag.
    Tap,
    /// A press that never became a drag but was held too long to be a tap.
    Held,
    /// A drag ended with snapping disabled; the element stays where it was dropped.
    Dropped,
    /// A drag ended and the element should animate to a side edge.
    Snap(SnapAnimation),
}

/// Drag recognizer and magnetic snap decision for one floating element.
///
/// Holds at most one [`PointerSession`]. Starting a press discards any previous one.
#[derive(Clone, Debug, Default)]
pub struct MagnetState {
    config: MagnetConfig,
    bounds: Bounds,
    session: Option<PointerSession>,
}

impl MagnetState {
    /// Creates an idle state machine.
    #[must_use]
    pub fn new(config: MagnetConfig, bounds: Bounds) -> Self {
        Self {
            config,
            bounds,
            session: None,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &MagnetConfig {
        &self.config
    }

    /// Returns the current bounds.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Replaces the bounds used for the next snap computation.
    ///
    /// Hosts call this after the container is resized or rotated.
    pub fn update_bounds(&mut self, bounds: Bounds) {
        tracing::debug!(?bounds, "magnet bounds updated");
        self.bounds = bounds;
    }

    /// Enables or disables magnetic snapping. Takes effect at the next release.
    pub fn set_magnetic(&mut self, magnetic: bool) {
        self.config.magnetic = magnetic;
    }

    /// Returns the live session, if a press is in progress.
    #[must_use]
    pub fn session(&self) -> Option<&PointerSession> {
        self.session.as_ref()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> MagnetPhase {
        match self.session {
            Some(PointerSession { dragging: true, .. }) => MagnetPhase::Dragging,
            _ => MagnetPhase::Idle,
        }
    }

    /// Returns `true` while the element is following the pointer.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase() == MagnetPhase::Dragging
    }

    /// Starts a press with the element at `element` and the pointer at `pointer`.
    pub fn on_down(&mut self, element: Point, pointer: Point, now: u64) {
        if self.session.is_some() {
            tracing::trace!("discarding previous pointer session");
        }
        self.session = Some(PointerSession {
            origin: element,
            pointer_origin: pointer,
            dragging: false,
            started_at: now,
        });
    }

    /// Processes a pointer sample.
    ///
    /// Returns the new element position once dragging, or `None` while the press is still
    /// within the slop radius or when no press is in progress.
    pub fn on_move(&mut self, pointer: Point) -> Option<MoveUpdate> {
        let slop_squared = self.config.slop_squared();
        let session = self.session.as_mut()?;

        let mut started = false;
        if !session.dragging {
            if session.displacement(pointer).hypot2() <= slop_squared {
                return None;
            }
            session.dragging = true;
            started = true;
            tracing::debug!(origin = ?session.origin, "drag started");
        }

        let position = session.follow(pointer);
        tracing::trace!(?position, "drag moved");
        Some(MoveUpdate { position, started })
    }

    /// Ends the press with the element at `current`.
    ///
    /// `now` is compared against the press start to recognize taps.
    pub fn on_release(&mut self, current: Point, now: u64) -> Release {
        let Some(session) = self.session.take() else {
            return Release::None;
        };

        if !session.dragging {
            let held = now.saturating_sub(session.started_at);
            return if held < self.config.tap_timeout_ms {
                tracing::debug!(held_ms = held, "tap");
                Release::Tap
            } else {
                Release::Held
            };
        }

        if !self.config.magnetic {
            return Release::Dropped;
        }

        let animation = SnapAnimation {
            from: current,
            to: self.snap_target(current),
            duration_ms: self.config.snap_duration_ms,
        };
        tracing::debug!(from = ?animation.from, to = ?animation.to, "magnetic snap");
        Release::Snap(animation)
    }

    /// Ends the press because the host cancelled it. Behaves exactly like [`Self::on_release`].
    pub fn on_cancel(&mut self, current: Point, now: u64) -> Release {
        self.on_release(current, now)
    }

    /// Snap target for an element at `current` under the current bounds.
    #[must_use]
    pub fn snap_target(&self, current: Point) -> Point {
        self.bounds.snap_target(current)
    }

    /// Drops any live session without producing a release outcome.
    pub fn reset(&mut self) {
        self.session = None;
    }
}
