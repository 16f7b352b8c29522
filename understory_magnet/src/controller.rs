// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-driven adapter: routes pointer events through [`MagnetState`] and applies the results.
//!
//! [`MagnetState`] only computes. [`DragMagnetController`] wires it to a [`MagnetHost`], which
//! owns the element position, the clock, and the animation primitive. The host is borrowed for
//! the duration of each call and never stored.

use kurbo::Point;

use crate::bounds::Bounds;
use crate::config::MagnetConfig;
use crate::state::{MagnetPhase, MagnetState, Release, SnapAnimation};

/// Pointer input in container coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent {
    /// The pointer was pressed at the given position.
    Down(Point),
    /// The pointer moved to the given position.
    Move(Point),
    /// The pointer was released.
    Up,
    /// The platform cancelled the interaction.
    Cancel,
}

/// What a floating element's host provides to, and receives from, the controller.
pub trait MagnetHost {
    /// Current element position.
    fn position(&self) -> Point;

    /// Moves the element immediately.
    fn set_position(&mut self, position: Point);

    /// Starts an animated move; the host owns the animation.
    fn animate_to(&mut self, animation: SnapAnimation);

    /// Monotonic clock in milliseconds.
    fn now_millis(&self) -> u64;

    /// Called once for a recognized tap.
    fn on_tap(&mut self) {}

    /// Called when a press turns into a drag.
    fn on_drag_start(&mut self) {}
}

/// Drag-and-snap behaviour for one floating element.
///
/// ```
/// use kurbo::{Point, Size};
/// use understory_magnet::{
///     Bounds, DragMagnetController, MagnetConfig, MagnetHost, PointerEvent, SnapAnimation,
/// };
///
/// #[derive(Default)]
/// struct Bubble {
///     position: Point,
///     clock: u64,
///     taps: u32,
///     snapped_to: Option<Point>,
/// }
///
/// impl MagnetHost for Bubble {
///     fn position(&self) -> Point { self.position }
///     fn set_position(&mut self, position: Point) { self.position = position; }
///     fn animate_to(&mut self, animation: SnapAnimation) { self.snapped_to = Some(animation.to); }
///     fn now_millis(&self) -> u64 { self.clock }
///     fn on_tap(&mut self) { self.taps += 1; }
/// }
///
/// let mut bubble = Bubble::default();
/// let mut controller = DragMagnetController::init(
///     MagnetConfig::default(),
///     Bounds::new(Size::new(400.0, 800.0), Size::new(50.0, 50.0)),
/// );
///
/// controller.handle(&mut bubble, PointerEvent::Down(Point::new(20.0, 20.0)));
/// bubble.clock = 80;
/// controller.handle(&mut bubble, PointerEvent::Up);
/// assert_eq!(bubble.taps, 1);
///
/// controller.handle(&mut bubble, PointerEvent::Down(Point::new(20.0, 20.0)));
/// controller.handle(&mut bubble, PointerEvent::Move(Point::new(320.0, 120.0)));
/// assert_eq!(bubble.position, Point::new(300.0, 100.0));
/// controller.handle(&mut bubble, PointerEvent::Up);
/// assert_eq!(bubble.snapped_to, Some(Point::new(350.0, 100.0)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct DragMagnetController {
    state: MagnetState,
}

impl DragMagnetController {
    /// Creates a controller. Call from the host's composition root when the element is created.
    #[must_use]
    pub fn init(config: MagnetConfig, bounds: Bounds) -> Self {
        Self {
            state: MagnetState::new(config, bounds),
        }
    }

    /// Drops any in-flight press. Call when the element is torn down.
    ///
    /// The controller stays usable; a later `Down` starts fresh.
    pub fn dispose(&mut self) {
        self.state.reset();
    }

    /// Replaces the container and element dimensions.
    pub fn update_bounds(&mut self, bounds: Bounds) {
        self.state.update_bounds(bounds);
    }

    /// Enables or disables magnetic snapping.
    pub fn set_magnetic(&mut self, magnetic: bool) {
        self.state.set_magnetic(magnetic);
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> MagnetPhase {
        self.state.phase()
    }

    /// Read access to the underlying state machine.
    #[must_use]
    pub fn state(&self) -> &MagnetState {
        &self.state
    }

    /// Handles one pointer event, calling back into `host` as needed.
    ///
    /// Returns the release outcome for `Up` and `Cancel`, and [`Release::None`] otherwise.
    pub fn handle<H: MagnetHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: PointerEvent,
    ) -> Release {
        match event {
            PointerEvent::Down(pointer) => {
                self.state.on_down(host.position(), pointer, host.now_millis());
                Release::None
            }
            PointerEvent::Move(pointer) => {
                if let Some(update) = self.state.on_move(pointer) {
                    if update.started {
                        host.on_drag_start();
                    }
                    host.set_position(update.position);
                }
                Release::None
            }
            PointerEvent::Up | PointerEvent::Cancel => {
                let release = self.state.on_release(host.position(), host.now_millis());
                match release {
                    Release::Tap => host.on_tap(),
                    Release::Snap(animation) => host.animate_to(animation),
                    Release::None | Release::Held | Release::Dropped => {}
                }
                release
            }
        }
    }
}
