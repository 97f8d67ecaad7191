//! # Menus
//!
//! A `Menu` is a titled list of `MenuItem` rows with a selection window,
//! debounced keyboard/gamepad navigation, pointer hover and clicks, and
//! audio feedback. Build one, add rows, open it, and call `draw` every
//! frame:
//!
//! ```rust
//! use hudmenu_core::headless::HeadlessHost;
//! use hudmenu_ui::*;
//!
//! let mut host = HeadlessHost::new();
//! let mut menu = Menu::new("Garage").with_description("Pick a car");
//! menu.add_item(MenuItem::new("Repair", "Fix everything"));
//! menu.add_item(MenuItem::checkbox("Bulletproof tyres", "", false));
//! menu.open();
//!
//! menu.draw(&mut host.frame(0));
//! assert_eq!(menu.take_events(), vec![MenuEvent::Opened]);
//! ```
//!
//! Menus never call back into user code. Everything they decide is queued
//! as a `MenuEvent` and drained with `take_events`, so a frame's outcome
//! can be inspected after the fact.

pub mod debounce;
pub mod event;
pub mod item;
pub mod layout;
pub mod menu;
pub mod selection;

pub use event::*;
pub use item::*;
pub use menu::*;
pub use selection::SelectionWindow;
