// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Atelier Cursor
//!
//! Shared cursor state for the Atelier studio site: the last known
//! pointer position and a free-form *intent label* set by whichever
//! interactive element is currently hovered (e.g. `"VIEW"`, `"CLICK"`,
//! a team member's name). The custom pointer overlay reads this state;
//! every interactive element writes to it.
//!
//! ## Model
//!
//! - [`CursorProvider`] - one explicitly constructed instance per mounted
//!   tree. On mount it registers a pointer-move listener with a
//!   [`PointerEvents`] source (the window stand-in); on drop it removes
//!   the same registration.
//! - [`CursorHandle`] - the subscription point components hold. Reads and
//!   writes go through the provider's shared state; using a handle after
//!   the provider was unmounted is an integration bug and panics rather
//!   than silently returning defaults.
//! - [`HoverRegion`] - enter/leave helper for interactive elements. The
//!   label is last-writer-wins with no stacking: when hover regions nest
//!   or overlap, whichever enter/leave fired last determines the label.
//!
//! Every pointer-move event is processed synchronously and in arrival
//! order; there is no debouncing or coalescing.

pub mod error;
pub mod events;
pub mod hover;
pub mod provider;

pub use error::CursorError;
pub use events::{EventBus, ListenerId, PointerEvents, PointerListener, PointerMove, Position};
pub use hover::HoverRegion;
pub use provider::{CursorHandle, CursorProvider};
