//! # Menu items
//!
//! A `MenuItem` is one row. The row kind is a closed set:
//!
//! - `Plain`: a label, optionally showing a text or icon value.
//! - `Checkbox`: flips `checked` when activated.
//! - `List`: cycles through owned values with left/right.
//! - `ExternalList`: left/right only asks its owner to change the value,
//!   which is pushed back with `MenuItem::set_value`.
//!
//! A pointer click on a list row cycles its value instead of activating it.
//! Keyboard and gamepad accept still activate the row.

use std::any::Any;
use std::fmt;

use hudmenu_core::{
    COMMON_MENU, Color, CursorSprite, Font, Justify, MenuError, Renderer, ShopIcon, Size,
    TextStyle, Vec2,
};

use crate::event::{HorizontalDirection, ItemId, MenuEvent};
use crate::layout::*;

/// Value shown on the right edge of a row.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ItemValue {
    #[default]
    None,
    Text(String),
    Icon(ShopIcon),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ItemKind {
    Plain,
    Checkbox { checked: bool },
    List { values: Vec<String>, index: usize },
    ExternalList,
}

/// Per-frame interaction flags for drawing a row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowState {
    pub selected: bool,
    pub hovered: bool,
    /// Pointer is inside the narrower interact hotspot.
    pub interact_hovered: bool,
}

pub struct MenuItem {
    id: ItemId,
    text: String,
    description: String,
    enabled: bool,
    ignore_click: bool,
    interaction_cursor: CursorSprite,
    icon: ShopIcon,
    value: ItemValue,
    tag: Option<Box<dyn Any>>,
    kind: ItemKind,
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("id", &self.id)
            .field("text", &self.text)
            .field("enabled", &self.enabled)
            .field("kind", &self.kind)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

impl MenuItem {
    fn with_kind(text: impl Into<String>, description: impl Into<String>, kind: ItemKind) -> Self {
        let ignore_click = matches!(kind, ItemKind::List { .. } | ItemKind::ExternalList);
        Self {
            id: ItemId::next(),
            text: text.into(),
            description: description.into(),
            enabled: true,
            ignore_click,
            interaction_cursor: CursorSprite::None,
            icon: ShopIcon::None,
            value: ItemValue::None,
            tag: None,
            kind,
        }
    }

    pub fn new(text: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_kind(text, description, ItemKind::Plain)
    }

    pub fn checkbox(text: impl Into<String>, description: impl Into<String>, checked: bool) -> Self {
        Self::with_kind(text, description, ItemKind::Checkbox { checked })
    }

    /// A cycling list over `values`, starting at `index`.
    pub fn list<V: ToString>(
        text: impl Into<String>,
        description: impl Into<String>,
        values: impl IntoIterator<Item = V>,
        index: usize,
    ) -> Result<Self, MenuError> {
        let values: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
        if values.is_empty() {
            return Err(MenuError::EmptyList);
        }
        if index >= values.len() {
            return Err(MenuError::ListIndexOutOfRange {
                index,
                len: values.len(),
            });
        }
        Ok(Self::with_kind(
            text,
            description,
            ItemKind::List { values, index },
        ))
    }

    /// A list whose value is owned elsewhere; `value` is the initial display.
    pub fn external_list(
        text: impl Into<String>,
        description: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let mut item = Self::with_kind(text, description, ItemKind::ExternalList);
        item.value = ItemValue::Text(value.into());
        item
    }

    pub fn with_icon(mut self, icon: ShopIcon) -> Self {
        self.icon = icon;
        self
    }

    pub fn with_value(mut self, value: ItemValue) -> Self {
        self.value = value;
        self
    }

    pub fn with_interaction_cursor(mut self, cursor: CursorSprite) -> Self {
        self.interaction_cursor = cursor;
        self
    }

    pub fn with_tag<T: Any>(mut self, tag: T) -> Self {
        self.tag = Some(Box::new(tag));
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn ignores_click(&self) -> bool {
        self.ignore_click
    }

    /// Has no effect on list rows, which always ignore accept.
    pub fn set_ignore_click(&mut self, ignore: bool) {
        if !self.is_list() {
            self.ignore_click = ignore;
        }
    }

    pub fn interaction_cursor(&self) -> CursorSprite {
        self.interaction_cursor
    }

    pub fn set_interaction_cursor(&mut self, cursor: CursorSprite) {
        self.interaction_cursor = cursor;
    }

    pub fn icon(&self) -> ShopIcon {
        self.icon
    }

    pub fn value(&self) -> &ItemValue {
        &self.value
    }

    /// External assignment of the displayed value.
    pub fn set_value(&mut self, value: ItemValue) {
        self.value = value;
    }

    pub fn tag<T: Any>(&self) -> Option<&T> {
        self.tag.as_ref()?.downcast_ref::<T>()
    }

    pub fn tag_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.tag.as_mut()?.downcast_mut::<T>()
    }

    pub fn set_tag<T: Any>(&mut self, tag: T) {
        self.tag = Some(Box::new(tag));
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    fn is_list(&self) -> bool {
        matches!(self.kind, ItemKind::List { .. } | ItemKind::ExternalList)
    }

    pub fn checked(&self) -> Option<bool> {
        match self.kind {
            ItemKind::Checkbox { checked } => Some(checked),
            _ => None,
        }
    }

    pub fn set_checked(&mut self, value: bool) {
        if let ItemKind::Checkbox { checked } = &mut self.kind {
            *checked = value;
        }
    }

    pub fn list_index(&self) -> Option<usize> {
        match self.kind {
            ItemKind::List { index, .. } => Some(index),
            _ => None,
        }
    }

    /// The value a list row currently shows.
    pub fn current_value(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::List { values, index } => values.get(*index).map(String::as_str),
            ItemKind::ExternalList => match &self.value {
                ItemValue::Text(t) => Some(t.as_str()),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn set_list_index(&mut self, new_index: usize) -> Result<(), MenuError> {
        if let ItemKind::List { values, index } = &mut self.kind {
            if new_index >= values.len() {
                return Err(MenuError::ListIndexOutOfRange {
                    index: new_index,
                    len: values.len(),
                });
            }
            *index = new_index;
        }
        Ok(())
    }

    /// Activation callback, run after the menu reported the selection.
    pub fn on_selected(&mut self, index: usize) -> Option<MenuEvent> {
        let item = self.id;
        match &mut self.kind {
            ItemKind::Checkbox { checked } => {
                *checked = !*checked;
                Some(MenuEvent::CheckboxChanged {
                    item,
                    index,
                    checked: *checked,
                })
            }
            _ => None,
        }
    }

    /// Left/right callback for the row at `index`.
    pub fn on_navigate(&mut self, index: usize, direction: HorizontalDirection) -> Option<MenuEvent> {
        let item = self.id;
        match &mut self.kind {
            ItemKind::List {
                values,
                index: list_index,
            } => {
                let previous = *list_index;
                let len = values.len() as isize;
                *list_index = (previous as isize + direction.delta()).rem_euclid(len) as usize;
                Some(MenuEvent::ListIndexChanged {
                    item,
                    index,
                    list_index: *list_index,
                    previous_list_index: previous,
                })
            }
            ItemKind::ExternalList => Some(MenuEvent::ExternalNavigateRequested {
                item,
                index,
                direction,
            }),
            _ => None,
        }
    }

    fn label_color(&self, selected: bool) -> Color {
        match (self.enabled, selected) {
            (false, _) => Color::GRAY,
            (true, true) => Color::DARK_TEXT,
            (true, false) => Color::WHITE,
        }
    }

    /// Draws the row with its top-left at `pos`.
    ///
    /// With `sprites` false only text is drawn. Returns the cursor the menu
    /// should show this frame when the row claims it.
    pub fn draw(
        &self,
        r: &mut dyn Renderer,
        pos: Vec2,
        size: Size,
        state: RowState,
        sprites: bool,
    ) -> Option<CursorSprite> {
        let text_pos = pos.offset(TEXT_X_OFFSET, TEXT_Y_OFFSET);
        let mut cursor = None;

        if state.selected || state.hovered {
            if sprites {
                let tint = if state.selected {
                    Color::WHITE
                } else {
                    Color::highlight()
                };
                let center = pos.offset(size.width / 2.0, size.height / 2.0);
                r.draw_sprite(COMMON_MENU, "gradient_nav", center, size, 0.0, tint);
            }
            if state.selected
                && state.interact_hovered
                && self.interaction_cursor != CursorSprite::None
            {
                cursor = Some(self.interaction_cursor);
            }
        }

        let shift = if sprites {
            draw_icon(r, text_pos, state.selected, self.icon, ICON_SIZE)
        } else {
            0.0
        };
        let style = TextStyle::new(
            TEXT_SCALE,
            self.label_color(state.selected),
            Justify::Left,
            Font::ChaletLondon,
        );
        r.draw_text(&self.text, text_pos.offset(shift, 0.0), &style);

        let anchor = pos.offset(size.width, size.height);
        self.draw_value(r, anchor, state.selected, sprites);
        cursor
    }

    fn draw_value(&self, r: &mut dyn Renderer, anchor: Vec2, selected: bool, sprites: bool) {
        match &self.kind {
            ItemKind::Checkbox { checked } => {
                if !self.enabled || !sprites {
                    return;
                }
                let icon = if *checked {
                    ShopIcon::BoxTick
                } else {
                    ShopIcon::BoxBlank
                };
                draw_icon(r, anchor.offset(-42.0, -40.0), selected, icon, CHECKBOX_SIZE);
            }
            ItemKind::List { .. } | ItemKind::ExternalList => {
                if let Some(text) = self.current_value() {
                    self.draw_cycling_value(r, text, anchor, selected, sprites);
                }
            }
            ItemKind::Plain => match &self.value {
                ItemValue::None => {}
                ItemValue::Text(text) => {
                    let style = TextStyle::new(
                        TEXT_SCALE,
                        self.label_color(selected),
                        Justify::Right,
                        Font::ChaletLondon,
                    );
                    r.draw_text(text, anchor.offset(-14.0, -40.0), &style);
                }
                ItemValue::Icon(icon) => {
                    if sprites {
                        draw_icon(r, anchor.offset(-40.0, -40.0), selected, *icon, ICON_SIZE);
                    }
                }
            },
        }
    }

    fn draw_cycling_value(
        &self,
        r: &mut dyn Renderer,
        text: &str,
        anchor: Vec2,
        selected: bool,
        sprites: bool,
    ) {
        let active = selected && self.enabled;
        let inset = if active { 28.0 } else { 14.0 };
        let style = TextStyle::new(
            TEXT_SCALE,
            self.label_color(selected),
            Justify::Right,
            Font::ChaletLondon,
        );
        r.draw_text(text, anchor.offset(-inset, -40.0), &style);

        if !active || !sprites {
            return;
        }
        let arrow = Size::square(ARROW_SIZE);
        r.draw_sprite(
            COMMON_MENU,
            "arrowright",
            anchor.offset(-18.0, -21.0),
            arrow,
            0.0,
            Color::BLACK,
        );
        let width = r.measure_text_width(text, Font::ChaletLondon, TEXT_SCALE);
        r.draw_sprite(
            COMMON_MENU,
            "arrowleft",
            anchor.offset(-(18.0 + width + 16.0), -21.0),
            arrow,
            0.0,
            Color::BLACK,
        );
    }
}

/// Draws `icon` centred just right of `pos`; returns how far the label
/// should shift to make room.
fn draw_icon(r: &mut dyn Renderer, pos: Vec2, highlighted: bool, icon: ShopIcon, side: f32) -> f32 {
    let Some(sprite) = icon.sprite(highlighted) else {
        return 0.0;
    };
    r.draw_sprite(
        COMMON_MENU,
        sprite,
        pos.offset(15.0, 18.0),
        Size::square(side),
        0.0,
        Color::WHITE,
    );
    ICON_LABEL_SHIFT
}

#[cfg(test)]
mod tests {
    use super::*;
    use hudmenu_core::headless::{DrawCall, RecordingRenderer};

    fn abc(index: usize) -> MenuItem {
        MenuItem::list("Colour", "", ["A", "B", "C"], index).unwrap()
    }

    #[test]
    fn test_list_round_trip() {
        let mut item = abc(1);
        assert!(item.ignores_click());
        item.on_navigate(0, HorizontalDirection::Left);
        item.on_navigate(0, HorizontalDirection::Right);
        assert_eq!(item.list_index(), Some(1));
        assert_eq!(item.current_value(), Some("B"));
    }

    #[test]
    fn test_list_wraps_both_ways() {
        let mut item = abc(0);
        let ev = item.on_navigate(3, HorizontalDirection::Left);
        assert_eq!(item.list_index(), Some(2));
        assert_eq!(
            ev,
            Some(MenuEvent::ListIndexChanged {
                item: item.id(),
                index: 3,
                list_index: 2,
                previous_list_index: 0,
            })
        );
        item.on_navigate(3, HorizontalDirection::Right);
        assert_eq!(item.current_value(), Some("A"));
    }

    #[test]
    fn test_list_construction_errors() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            MenuItem::list("x", "", empty, 0),
            Err(MenuError::EmptyList)
        ));
        assert!(matches!(
            MenuItem::list("x", "", [1, 2], 2),
            Err(MenuError::ListIndexOutOfRange { index: 2, len: 2 })
        ));
        let mut item = abc(0);
        assert!(item.set_list_index(5).is_err());
        assert!(item.set_list_index(2).is_ok());
        assert_eq!(item.current_value(), Some("C"));
    }

    #[test]
    fn test_list_ignore_click_is_fixed() {
        let mut item = MenuItem::external_list("Vehicle", "", "Adder");
        item.set_ignore_click(false);
        assert!(item.ignores_click());

        let mut plain = MenuItem::new("Plain", "");
        assert!(!plain.ignores_click());
        plain.set_ignore_click(true);
        assert!(plain.ignores_click());
    }

    #[test]
    fn test_checkbox_toggle() {
        let mut item = MenuItem::checkbox("God mode", "", false);
        let ev = item.on_selected(4);
        assert_eq!(item.checked(), Some(true));
        assert_eq!(
            ev,
            Some(MenuEvent::CheckboxChanged {
                item: item.id(),
                index: 4,
                checked: true,
            })
        );
        assert_eq!(MenuItem::new("x", "").on_selected(0), None);
    }

    #[test]
    fn test_external_list_only_requests() {
        let mut item = MenuItem::external_list("Vehicle", "", "Adder");
        let ev = item.on_navigate(2, HorizontalDirection::Right);
        assert_eq!(
            ev,
            Some(MenuEvent::ExternalNavigateRequested {
                item: item.id(),
                index: 2,
                direction: HorizontalDirection::Right,
            })
        );
        assert_eq!(item.current_value(), Some("Adder"));

        item.set_value(ItemValue::Text("Zentorno".into()));
        assert_eq!(item.current_value(), Some("Zentorno"));
    }

    #[test]
    fn test_tag_downcasts() {
        let mut item = MenuItem::new("Spawn", "").with_tag(42u32);
        assert_eq!(item.tag::<u32>(), Some(&42));
        assert_eq!(item.tag::<String>(), None);
        if let Some(t) = item.tag_mut::<u32>() {
            *t += 1;
        }
        assert_eq!(item.tag::<u32>(), Some(&43));
    }

    #[test]
    fn test_draw_selected_list_row() {
        let mut r = RecordingRenderer::new();
        let item = abc(1);
        let state = RowState {
            selected: true,
            hovered: false,
            interact_hovered: false,
        };
        let cursor = item.draw(&mut r, Vec2::new(0.0, 100.0), Size::new(512.0, 44.2), state, true);
        assert_eq!(cursor, None);
        assert_eq!(r.sprites(), vec!["gradient_nav", "arrowright", "arrowleft"]);
        assert_eq!(r.texts(), vec!["Colour", "B"]);

        let label = r.calls.iter().find_map(|c| match c {
            DrawCall::Text { text, style, .. } if text == "Colour" => Some(style.color),
            _ => None,
        });
        assert_eq!(label, Some(Color::DARK_TEXT));
    }

    #[test]
    fn test_draw_disabled_checkbox_hides_box() {
        let mut r = RecordingRenderer::new();
        let item = MenuItem::checkbox("Locked", "", true).disabled();
        item.draw(&mut r, Vec2::default(), Size::new(512.0, 44.2), RowState::default(), true);
        assert!(r.sprites().is_empty());
        let color = r.calls.iter().find_map(|c| match c {
            DrawCall::Text { style, .. } => Some(style.color),
            _ => None,
        });
        assert_eq!(color, Some(Color::GRAY));
    }

    #[test]
    fn test_interaction_cursor_override() {
        let mut r = RecordingRenderer::new();
        let item = MenuItem::new("Grab", "").with_interaction_cursor(CursorSprite::PreGrab);
        let size = Size::new(512.0, 44.2);
        let hovered_only = RowState {
            selected: false,
            hovered: true,
            interact_hovered: true,
        };
        assert_eq!(item.draw(&mut r, Vec2::default(), size, hovered_only, true), None);

        let selected = RowState {
            selected: true,
            ..hovered_only
        };
        assert_eq!(
            item.draw(&mut r, Vec2::default(), size, selected, true),
            Some(CursorSprite::PreGrab)
        );
    }

    #[test]
    fn test_draw_without_sprites_keeps_text() {
        let mut r = RecordingRenderer::new();
        let item = MenuItem::new("Armor", "")
            .with_icon(ShopIcon::Armor)
            .with_value(ItemValue::Text("$500".into()));
        let state = RowState {
            selected: true,
            ..Default::default()
        };
        item.draw(&mut r, Vec2::default(), Size::new(512.0, 44.2), state, false);
        assert!(r.sprites().is_empty());
        assert_eq!(r.texts(), vec!["Armor", "$500"]);
    }
}
