// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Container and element dimensions, and the magnetic snap computation over them.
//!
//! [`Bounds`] is supplied by the host and replaced through
//! [`MagnetState::update_bounds`](crate::MagnetState::update_bounds) whenever the
//! container is resized. Nothing here re-derives the container size on its own.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_magnet::Bounds;
//!
//! let bounds = Bounds::new(Size::new(400.0, 800.0), Size::new(50.0, 50.0));
//!
//! // Centre at x = 125, left of the midpoint: snap to the left edge.
//! assert_eq!(bounds.snap_target(Point::new(100.0, 300.0)), Point::new(0.0, 300.0));
//!
//! // Centre at x = 305, right of the midpoint: snap to the right edge.
//! // The vertical position is clamped, not snapped.
//! assert_eq!(bounds.snap_target(Point::new(280.0, 900.0)), Point::new(350.0, 750.0));
//! ```

use kurbo::{Point, Size};

/// Dimensions of the container and of the element floating inside it.
///
/// Negative or NaN dimensions are read as zero by every computation on this type.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Bounds {
    /// Size of the container the element moves within (`W`, `H`).
    pub container: Size,
    /// Size of the floating element (`w`, `h`).
    pub element: Size,
}

impl Bounds {
    /// Creates bounds from container and element sizes.
    #[must_use]
    pub const fn new(container: Size, element: Size) -> Self {
        Self { container, element }
    }

    /// Returns `true` if either the container or the element has no area.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let container = sanitize(self.container);
        let element = sanitize(self.element);
        container.width == 0.0
            || container.height == 0.0
            || element.width == 0.0
            || element.height == 0.0
    }

    /// Largest x the element may take while staying inside the container.
    ///
    /// Floored at zero when the element is wider than the container.
    #[must_use]
    pub fn max_x(&self) -> f64 {
        let container = sanitize(self.container);
        let element = sanitize(self.element);
        (container.width - element.width).max(0.0)
    }

    /// Largest y the element may take while staying inside the container.
    ///
    /// Floored at zero when the element is taller than the container.
    #[must_use]
    pub fn max_y(&self) -> f64 {
        let container = sanitize(self.container);
        let element = sanitize(self.element);
        (container.height - element.height).max(0.0)
    }

    /// Computes where an element at `current` comes to rest after a magnetic release.
    ///
    /// Horizontally the element goes to whichever side edge its centre is closer
    /// to: `0` when the centre lies left of the container midpoint, otherwise
    /// `W - w`. Vertically it is only clamped into `[0, H - h]`.
    ///
    /// Degenerate bounds (see [`Self::is_degenerate`]) always yield the origin.
    ///
    /// This is a pure function of `self` and `current`.
    #[must_use]
    pub fn snap_target(&self, current: Point) -> Point {
        if self.is_degenerate() {
            return Point::ZERO;
        }

        let container = sanitize(self.container);
        let element = sanitize(self.element);

        let center_x = current.x + element.width / 2.0;
        let x = if center_x < container.width / 2.0 {
            0.0
        } else {
            self.max_x()
        };

        Point::new(x, self.clamp_y(current.y))
    }

    /// Clamps a vertical position into `[0, H - h]`.
    #[must_use]
    pub fn clamp_y(&self, y: f64) -> f64 {
        // `max` first so a NaN input lands on the top edge.
        y.max(0.0).min(self.max_y())
    }
}

fn sanitize(size: Size) -> Size {
    // `f64::max` returns the non-NaN operand.
    Size::new(size.width.max(0.0), size.height.max(0.0))
}
