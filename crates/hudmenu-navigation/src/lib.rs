//! # Menu registry
//!
//! `MenuRegistry` owns a set of menus and drives them once per frame.
//! Submenus are ordinary menus joined to a parent by a link row:
//!
//! ```rust
//! use hudmenu_core::headless::HeadlessHost;
//! use hudmenu_navigation::MenuRegistry;
//! use hudmenu_ui::{Menu, MenuEvent};
//!
//! let mut registry = MenuRegistry::new();
//! let main = registry.register(Menu::new("Interaction"));
//! let style = registry
//!     .create_submenu(main, "Style", "", "Walk Style", "Change how you walk")
//!     .unwrap();
//! assert_eq!(registry.parent_of(style), Some(main));
//!
//! let mut host = HeadlessHost::new();
//! registry.get_mut(main).unwrap().open();
//! let events = registry.tick(&mut host.frame(0));
//! assert_eq!(events, vec![(main, MenuEvent::Opened)]);
//! ```

mod error;
mod registry;

pub use error::NavError;
pub use registry::*;
