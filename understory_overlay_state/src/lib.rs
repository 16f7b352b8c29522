// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Overlay State: content / loading / empty / error switching for a container.
//!
//! Many screens show their real content most of the time and temporarily cover
//! it with a loading spinner, an "empty" placeholder, or an error panel. This
//! crate tracks which of those is showing and produces the [`OverlayEvent`]s a
//! host needs to apply to its view tree. It does not create views itself:
//! overlays are *realized* by the host from a layout handle of its choosing the
//! first time they are needed, and are reused afterwards.
//!
//! ## Usage
//!
//! ```rust
//! use understory_overlay_state::{OverlayEvent, OverlayKind, StateOverlay, ViewState};
//!
//! // `L` is whatever the host uses to describe an overlay; here a string.
//! let mut overlay = StateOverlay::<&str>::new();
//! overlay.set_layout(OverlayKind::Loading, "spinner");
//!
//! let events = overlay.show(ViewState::Loading);
//! assert_eq!(
//!     events.as_slice(),
//!     &[
//!         OverlayEvent::ContainerShown,
//!         OverlayEvent::Realize { kind: OverlayKind::Loading, layout: "spinner" },
//!         OverlayEvent::Show(OverlayKind::Loading),
//!     ]
//! );
//!
//! // Back to content: the overlay is hidden, then the container.
//! let events = overlay.show(ViewState::Content);
//! assert_eq!(
//!     events.as_slice(),
//!     &[OverlayEvent::Hide(OverlayKind::Loading), OverlayEvent::ContainerHidden]
//! );
//!
//! // Showing loading again reuses the realized overlay.
//! let events = overlay.show(ViewState::Loading);
//! assert_eq!(
//!     events.as_slice(),
//!     &[OverlayEvent::ContainerShown, OverlayEvent::Show(OverlayKind::Loading)]
//! );
//! ```
//!
//! ## Missing layouts
//!
//! A state whose overlay has no registered layout still shows the (empty)
//! container, so the content underneath is covered. Registering a layout later
//! takes effect on the next [`StateOverlay::show`] for that state. Registering a
//! layout for an overlay that is already realized has no effect.
//!
//! This crate is `no_std` compatible.

#![no_std]

use smallvec::SmallVec;

/// Which presentation a container is in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewState {
    /// The real content is visible; the overlay container is hidden.
    #[default]
    Content,
    /// Work is in progress.
    Loading,
    /// There is nothing to show.
    Empty,
    /// Something failed.
    Error,
}

impl ViewState {
    /// The overlay shown in this state, if any.
    #[must_use]
    pub const fn overlay(self) -> Option<OverlayKind> {
        match self {
            Self::Content => None,
            Self::Loading => Some(OverlayKind::Loading),
            Self::Empty => Some(OverlayKind::Empty),
            Self::Error => Some(OverlayKind::Error),
        }
    }
}

impl From<OverlayKind> for ViewState {
    fn from(kind: OverlayKind) -> Self {
        match kind {
            OverlayKind::Loading => Self::Loading,
            OverlayKind::Empty => Self::Empty,
            OverlayKind::Error => Self::Error,
        }
    }
}

/// One of the overlays that can cover the content.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    /// Loading indicator.
    Loading,
    /// Empty placeholder.
    Empty,
    /// Error panel.
    Error,
}

impl OverlayKind {
    /// All overlay kinds.
    pub const ALL: [Self; 3] = [Self::Loading, Self::Empty, Self::Error];

    const fn index(self) -> usize {
        match self {
            Self::Loading => 0,
            Self::Empty => 1,
            Self::Error => 2,
        }
    }
}

/// A change the host applies to its view tree, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OverlayEvent<L> {
    /// Make the overlay container visible.
    ContainerShown,
    /// Hide the overlay container, revealing the content.
    ContainerHidden,
    /// Create the overlay for `kind` from `layout` and add it to the container, initially hidden.
    Realize {
        /// The overlay being created.
        kind: OverlayKind,
        /// The host's layout handle registered for it.
        layout: L,
    },
    /// Make a realized overlay visible.
    Show(OverlayKind),
    /// Hide a realized overlay.
    Hide(OverlayKind),
}

/// Events produced by one transition.
///
/// A transition produces at most four events, so this never allocates.
pub type OverlayEvents<L> = SmallVec<[OverlayEvent<L>; 4]>;

#[derive(Clone, Debug)]
struct Slot<L> {
    layout: Option<L>,
    realized: bool,
}

impl<L> Default for Slot<L> {
    fn default() -> Self {
        Self {
            layout: None,
            realized: false,
        }
    }
}

/// Tracks the current [`ViewState`] of one container and which overlays exist.
#[derive(Clone, Debug)]
pub struct StateOverlay<L> {
    state: ViewState,
    container_visible: bool,
    visible: Option<OverlayKind>,
    slots: [Slot<L>; 3],
}

impl<L> Default for StateOverlay<L> {
    fn default() -> Self {
        Self {
            state: ViewState::Content,
            container_visible: false,
            visible: None,
            slots: [Slot::default(), Slot::default(), Slot::default()],
        }
    }
}

impl<L: Clone> StateOverlay<L> {
    /// Creates a tracker in [`ViewState::Content`] with the container hidden.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Brings the host in line with a freshly created tracker.
    ///
    /// Call once from the composition root after the container exists. Always
    /// ends with [`OverlayEvent::ContainerHidden`] so the container starts hidden
    /// no matter how the host created it.
    pub fn init(&mut self) -> OverlayEvents<L> {
        let mut events = OverlayEvents::new();
        if let Some(kind) = self.visible.take() {
            events.push(OverlayEvent::Hide(kind));
        }
        events.push(OverlayEvent::ContainerHidden);
        self.state = ViewState::Content;
        self.container_visible = false;
        events
    }

    /// Forgets every realized overlay. Call when the host tears down the container.
    ///
    /// Registered layouts are kept, so overlays are realized again after the
    /// container is rebuilt.
    pub fn dispose(&mut self) {
        self.state = ViewState::Content;
        self.visible = None;
        self.container_visible = false;
        for slot in &mut self.slots {
            slot.realized = false;
        }
    }

    /// Registers the layout used to realize `kind`.
    ///
    /// Has no effect on an overlay that is already realized.
    pub fn set_layout(&mut self, kind: OverlayKind, layout: L) {
        let slot = &mut self.slots[kind.index()];
        if slot.realized {
            tracing::debug!(?kind, "ignoring layout for realized overlay");
            return;
        }
        slot.layout = Some(layout);
    }

    /// The layout registered for `kind`, if any.
    #[must_use]
    pub fn layout(&self, kind: OverlayKind) -> Option<&L> {
        self.slots[kind.index()].layout.as_ref()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Returns `true` if the overlay container is visible.
    #[must_use]
    pub fn is_container_visible(&self) -> bool {
        self.container_visible
    }

    /// The overlay currently visible inside the container, if any.
    #[must_use]
    pub fn visible_overlay(&self) -> Option<OverlayKind> {
        self.visible
    }

    /// Returns `true` if the host has been asked to realize `kind`.
    #[must_use]
    pub fn is_realized(&self, kind: OverlayKind) -> bool {
        self.slots[kind.index()].realized
    }

    /// Switches to `state`, returning the events that take the host there.
    ///
    /// Returns no events when the host already shows `state`.
    pub fn show(&mut self, state: ViewState) -> OverlayEvents<L> {
        let mut events = OverlayEvents::new();
        let target = state.overlay();

        if target.is_some() && !self.container_visible {
            events.push(OverlayEvent::ContainerShown);
            self.container_visible = true;
        }

        if let Some(current) = self.visible.filter(|&v| Some(v) != target) {
            events.push(OverlayEvent::Hide(current));
            self.visible = None;
        }

        match target {
            None => {
                if self.container_visible {
                    events.push(OverlayEvent::ContainerHidden);
                    self.container_visible = false;
                }
            }
            Some(kind) if self.visible != Some(kind) => {
                let slot = &mut self.slots[kind.index()];
                let pending = if slot.realized { None } else { slot.layout.clone() };
                if let Some(layout) = pending {
                    events.push(OverlayEvent::Realize { kind, layout });
                    slot.realized = true;
                }
                if slot.realized {
                    events.push(OverlayEvent::Show(kind));
                    self.visible = Some(kind);
                }
            }
            Some(_) => {}
        }

        if self.state != state {
            tracing::debug!(from = ?self.state, to = ?state, "view state changed");
            self.state = state;
        }
        events
    }

    /// Shorthand for `show(ViewState::Content)`.
    pub fn show_content(&mut self) -> OverlayEvents<L> {
        self.show(ViewState::Content)
    }

    /// Shorthand for `show(ViewState::Loading)`.
    pub fn show_loading(&mut self) -> OverlayEvents<L> {
        self.show(ViewState::Loading)
    }

    /// Shorthand for `show(ViewState::Empty)`.
    pub fn show_empty(&mut self) -> OverlayEvents<L> {
        self.show(ViewState::Empty)
    }

    /// Shorthand for `show(ViewState::Error)`.
    pub fn show_error(&mut self) -> OverlayEvents<L> {
        self.show(ViewState::Error)
    }
}
