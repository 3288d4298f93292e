//! # pointer-state
//!
//! Authoritative pointer-device state for interactive real-time applications:
//! a poll-based snapshot API over a mutable state store, bridging asynchronous
//! platform input events (window-space) to the logical rendering resolution
//! (backbuffer-space), plus edge-triggered button notifications.
//!
//! # Architecture
//!
//! ```text
//! Platform event loop (external)
//!       ↓ raw events, dimension changes
//! ┌─────────────────────────┐
//! │  Mouse<P>               │ ← owned by the host application
//! │  - RawPointerState      │
//! │  - observer lists       │
//! └─────────────────────────┘
//!       ↓ get_state()                 ↓ handle_button transitions
//! PointerSnapshot (scaled,       pressed/released observers
//! immutable, value-equal)        (synchronous, in order)
//! ```
//!
//! Window-system calls (relative-mode toggling, cursor warps) are delegated
//! through the [`PlatformBackend`] trait; this crate never touches a window
//! handle itself.
//!
//! # Usage Example
//!
//! ```rust,no_run
//! use pointer_state::{Extent, Mouse, MouseButton, PlatformBackend, WindowHandle};
//!
//! # fn example<P: PlatformBackend>(platform: P) -> Result<(), Box<dyn std::error::Error>> {
//! let mut mouse = Mouse::new(
//!     platform,
//!     Extent::new(800, 600)?,
//!     Extent::new(1920, 1080)?,
//! );
//! mouse.set_window_handle(Some(WindowHandle(0x5eed)));
//!
//! // Event pump feeds raw window-space input
//! mouse.handle_move(400, 300);
//! mouse.handle_button(MouseButton::Left, true);
//!
//! // Application polls a scaled, immutable snapshot
//! let state = mouse.get_state();
//! assert_eq!(state.position(), (960, 540));
//! assert!(state.is_pressed(MouseButton::Left));
//!
//! // Edge-triggered notifications
//! mouse.on_pressed(|button| println!("pressed {:?}", button));
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency
//!
//! Single-threaded cooperative model: every mutating entry point takes
//! `&mut self`, so the single-writer discipline the design assumes is a
//! compile-time fact. Nothing blocks, suspends, or locks; callers needing
//! multi-threaded access wrap the [`Mouse`] in their own synchronization.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Button identity and pressed/released state
pub mod button;

/// Error types
pub mod error;

/// Mouse state front-end
pub mod mouse;

/// Observer registration and dispatch
pub mod observer;

/// Platform backend contract
pub mod platform;

/// Pointer snapshots and coordinate scaling
pub mod snapshot;

/// Raw state store and validated extents
pub mod state;

// Re-export main types for convenience
pub use button::{ButtonState, MouseButton};
pub use error::{PointerError, Result};
pub use mouse::Mouse;
pub use observer::ButtonObserver;
pub use platform::{PlatformBackend, WindowHandle};
pub use snapshot::PointerSnapshot;
pub use state::Extent;
