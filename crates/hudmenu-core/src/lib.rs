//! # Display, Input, and Host Collaborators
//!
//! Hudmenu draws menus on top of a running game. The game is never linked
//! directly: everything the menu touches goes through a handful of small
//! traits that the host implements once.
//!
//! - `InputSource`: per-frame control state plus the pointer.
//! - `Renderer`: sprites, rects, text, and host overlays.
//! - `AudioBackend`: fire-and-forget frontend cues.
//! - `AssetStreamer`: texture dictionary streaming.
//! - `WorldHost`: camera and HUD side effects.
//!
//! A host lends all of them to the menu for one frame through a
//! `FrameContext`.
//!
//! ## Logical coordinates
//!
//! Positions are expressed in a space `REFERENCE_HEIGHT` units tall whose
//! width follows the aspect ratio. `DisplayContext` carries the live aspect
//! ratio and safe zone and does the hit-testing:
//!
//! ```rust
//! use hudmenu_core::*;
//!
//! let display = DisplayContext::default();
//! let row = Size::new(512.0, 44.2);
//! // Normalized cursor roughly over the first row.
//! let cursor = Vec2::new(0.05, 0.01);
//! assert!(display.contains(Vec2::new(0.0, 0.0), row, cursor));
//! ```
//!
//! ## Scoped resources
//!
//! Overlays acquired from an `OverlayHost` are registered on a
//! `ResourceScope`, which releases them exactly once, either on `dispose()`
//! or when the owner is dropped.

pub mod assets;
pub mod atlas;
pub mod audio;
pub mod color;
pub mod config;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod headless;
pub mod input;
pub mod prelude;
pub mod render_api;
pub mod scope;
pub mod tests;
pub mod text;

pub use assets::*;
pub use atlas::*;
pub use audio::*;
pub use color::*;
pub use config::*;
pub use error::*;
pub use frame::*;
pub use geometry::*;
pub use input::*;
pub use render_api::*;
pub use scope::*;
