//! Animated programmatic scrolling to a tab's panel
//!
//! A seek eases the panel surface to the exact offset of a target panel,
//! one frame at a time, and reports whether it got there without being
//! interrupted.
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure easing functions (cubic, quintic, exponential, in-out)
//! - `timing` - Time calculation utilities (progress, interpolation, duration)
//! - `config` - Duration helpers over `SeekConfig`
//!
//! ## L3 Molecular Layer
//! - `controller` - Seek controller combining atoms
//!
//! # Usage
//!
//! ```ignore
//! use fluid_tabs_core::seek::SeekController;
//!
//! let mut seek = SeekController::new(config.seek.clone(), Axis::Horizontal);
//!
//! // Start a seek to the third panel
//! let ticket = seek.seek_to(2, &mut surface, now);
//!
//! // Each frame, advance until an outcome is reported
//! if let Some(outcome) = seek.advance(&mut surface, now) {
//!     println!("{:?}", outcome);
//! }
//!
//! // Or await the ticket from async code
//! let completed: bool = ticket.await;
//! ```

// L4 Atomic Layer
pub mod config;
pub mod easing;
pub mod timing;

// L3 Molecular Layer
pub mod controller;

// Re-exports for convenient access
pub use config::{SeekConfig, SeekConfigExt};
pub use controller::{SeekController, SeekOutcome, SeekStatus, SeekTicket};
pub use easing::{EasingType, EasingTypeExt};
