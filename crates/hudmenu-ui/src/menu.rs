//! # Menu controller
//!
//! `Menu` owns its rows, the selection window, and the per-frame input
//! state machine. A host calls `draw` once per frame while the menu is
//! visible; everything the menu decides is reported through `take_events`.
//!
//! One frame runs, in order:
//!
//! 1. Capture host controls and stream the textures the menu needs.
//! 2. Draw the banner, description header, and rows. While drawing, each
//!    row is hit-tested against the pointer (whole row, interact hotspot,
//!    right-edge navigate hotspot) and handles its own clicks and
//!    left/right input.
//! 3. Close on a click outside the menu when click-out is enabled.
//! 4. Draw the scrollbar, selected description, and button hints.
//! 5. Resolve keyboard/gamepad navigation by priority: cancel, accept,
//!    held down, held up, wheel.
//! 6. Pan the camera while the pointer rests on a screen edge.
//!
//! Navigation input is dropped while the `InputGate` is waiting. Every
//! selection change, activation, open, close, and left/right step queues
//! one audio cue unless `suppress_audio_next_call` was called just before.

use std::rc::Rc;

use smallvec::SmallVec;
use web_time::Duration;

use hudmenu_core::{
    ASSET_WAIT, BannerType, COMMON_MENU, Color, Control, Cue, CursorSprite, Font, FrameContext,
    HintAction, InputDevice, InstructionalHint, Justify, MenuConfig, NavDirection,
    OverlayHandle, OverlayHost, OverlayKind, Passthrough, ResourceScope, ScreenEdge, Size,
    TextStyle, Vec2, ensure_loaded, play_and_release,
};

use crate::debounce::*;
use crate::event::{HorizontalDirection, ItemId, MenuEvent};
use crate::item::{MenuItem, RowState};
use crate::layout::*;
use crate::selection::SelectionWindow;

const WHEEL_EPSILON: f32 = 1e-5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Overlays {
    description: OverlayHandle,
    instructional: OverlayHandle,
}

pub struct Menu {
    title: String,
    description: Option<String>,
    banner: BannerType,
    config: MenuConfig,
    items: Vec<MenuItem>,
    window: SelectionWindow,
    visible: bool,
    gate: InputGate,
    open_debounce_pending: bool,
    using_scroll_bar: bool,
    mouse_on_screen_edge: bool,
    last_drawn_rows: usize,
    suppress_audio: bool,
    pending_cues: SmallVec<[Cue; 4]>,
    events: Vec<MenuEvent>,
    overlays: Option<Overlays>,
    scope: ResourceScope,
    asset_wait: Duration,
}

impl Menu {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            banner: BannerType::None,
            config: MenuConfig::default(),
            items: Vec::new(),
            window: SelectionWindow::default(),
            visible: false,
            gate: InputGate::default(),
            open_debounce_pending: false,
            using_scroll_bar: false,
            mouse_on_screen_edge: false,
            last_drawn_rows: 0,
            suppress_audio: false,
            pending_cues: SmallVec::new(),
            events: Vec::new(),
            overlays: None,
            scope: ResourceScope::new(),
            asset_wait: ASSET_WAIT,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = (!description.is_empty()).then_some(description);
        self
    }

    pub fn with_banner(mut self, banner: BannerType) -> Self {
        self.banner = banner;
        self
    }

    pub fn with_config(mut self, config: MenuConfig) -> Self {
        self.config = config;
        self.config.max_drawable_items = self.config.max_drawable_items.max(1);
        self.clamp_window();
        self
    }

    /// How long one frame may block waiting for a texture dictionary.
    pub fn with_asset_wait(mut self, wait: Duration) -> Self {
        self.asset_wait = wait;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn banner(&self) -> BannerType {
        self.banner
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// Edits the configuration in place; the selection window is re-clamped
    /// afterwards.
    pub fn configure(&mut self, f: impl FnOnce(&mut MenuConfig)) {
        f(&mut self.config);
        self.config.max_drawable_items = self.config.max_drawable_items.max(1);
        self.clamp_window();
    }

    // ---- Items ----

    pub fn add_item(&mut self, item: MenuItem) -> ItemId {
        let id = item.id();
        self.items.push(item);
        id
    }

    pub fn remove_item(&mut self, id: ItemId) -> Option<MenuItem> {
        let index = self.index_of(id)?;
        let item = self.items.remove(index);
        self.clamp_window();
        Some(item)
    }

    pub fn clear_items(&mut self) {
        self.items.clear();
        self.clamp_window();
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|i| i.id() == id)
    }

    pub fn item(&self, id: ItemId) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.id() == id)
    }

    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut MenuItem> {
        self.items.iter_mut().find(|i| i.id() == id)
    }

    pub fn item_at(&self, index: usize) -> Option<&MenuItem> {
        self.items.get(index)
    }

    pub fn item_at_mut(&mut self, index: usize) -> Option<&mut MenuItem> {
        self.items.get_mut(index)
    }

    // ---- Selection ----

    /// `None` while the menu has no rows.
    pub fn selected_index(&self) -> Option<usize> {
        (!self.items.is_empty()).then_some(self.window.selected)
    }

    pub fn scroll_index(&self) -> usize {
        self.window.scroll
    }

    pub fn selected_item(&self) -> Option<&MenuItem> {
        self.items.get(self.window.selected)
    }

    /// Moves the selection to `index` (clamped) and reports the change.
    pub fn select(&mut self, index: usize) {
        if self.items.is_empty() {
            return;
        }
        let previous = self.window.selected;
        self.window
            .select(index, self.items.len(), self.config.max_drawable_items);
        if self.window.selected != previous {
            self.index_changed(previous);
        }
    }

    pub fn move_down(&mut self) {
        self.step_selection(true);
    }

    pub fn move_up(&mut self) {
        self.step_selection(false);
    }

    fn step_selection(&mut self, forward: bool) {
        let previous = self.window.selected;
        let (count, max) = (self.items.len(), self.config.max_drawable_items);
        let moved = if forward {
            self.window.increase(count, max)
        } else {
            self.window.decrease(count, max)
        };
        if moved {
            self.index_changed(previous);
        }
    }

    fn clamp_window(&mut self) {
        self.window
            .clamp(self.items.len(), self.config.max_drawable_items);
    }

    // ---- Visibility ----

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Opening seeds a short input debounce on the next drawn frame so the
    /// press that opened the menu is not read as menu input.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        if visible {
            log::debug!("menu `{}` opened", self.title);
            self.open_debounce_pending = true;
            self.raise(Some(Cue::Select), MenuEvent::Opened);
        } else {
            log::debug!("menu `{}` closed", self.title);
            self.using_scroll_bar = false;
            self.raise(Some(Cue::Back), MenuEvent::Closed);
        }
    }

    pub fn open(&mut self) {
        self.set_visible(true);
    }

    pub fn close(&mut self) {
        self.set_visible(false);
    }

    /// Closes the menu as if the user pressed cancel.
    pub fn back(&mut self) {
        if !self.visible {
            return;
        }
        self.set_visible(false);
        self.events.push(MenuEvent::Back);
    }

    // ---- Events and audio ----

    /// Silences the cue of the next cue-bearing event only.
    pub fn suppress_audio_next_call(&mut self) {
        self.suppress_audio = true;
    }

    pub fn events(&self) -> &[MenuEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<MenuEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn pending_cues(&self) -> &[Cue] {
        &self.pending_cues
    }

    /// Plays queued cues with this menu's sound profile.
    pub fn flush_cues(&mut self, audio: &mut dyn hudmenu_core::AudioBackend) {
        for cue in self.pending_cues.drain(..) {
            play_and_release(audio, cue, self.config.sound_profile);
        }
    }

    fn raise(&mut self, cue: Option<Cue>, event: MenuEvent) {
        if let Some(cue) = cue {
            if !self.suppress_audio {
                self.pending_cues.push(cue);
            }
            self.suppress_audio = false;
        }
        self.events.push(event);
    }

    fn index_changed(&mut self, previous_index: usize) {
        let index = self.window.selected;
        let (Some(item), Some(previous)) = (self.items.get(index), self.items.get(previous_index))
        else {
            return;
        };
        let event = MenuEvent::IndexChanged {
            item: item.id(),
            index,
            previous_item: previous.id(),
            previous_index,
        };
        log::trace!("menu `{}` index {previous_index} -> {index}", self.title);
        self.raise(Some(Cue::NavUpDown), event);
    }

    fn activate(&mut self, index: usize) {
        let Some(item) = self.items.get(index) else {
            return;
        };
        let event = MenuEvent::ItemSelected {
            item: item.id(),
            index,
        };
        self.raise(Some(Cue::Select), event);
        if let Some(follow_up) = self.items[index].on_selected(index) {
            self.events.push(follow_up);
        }
    }

    fn navigate(&mut self, index: usize, direction: HorizontalDirection) {
        let Some(item) = self.items.get_mut(index) else {
            return;
        };
        let id = item.id();
        let item_event = item.on_navigate(index, direction);
        if let Some(ev) = item_event {
            self.events.push(ev);
        }
        self.raise(
            Some(Cue::NavLeftRight),
            MenuEvent::NavigatedLeftRight {
                item: id,
                index,
                direction,
            },
        );
    }

    // ---- Overlays ----

    /// Acquires the description and button-hint overlays. They are released
    /// once, on `dispose` or when the menu is dropped.
    pub fn attach_overlays(&mut self, host: Rc<dyn OverlayHost>) {
        if self.overlays.is_some() {
            return;
        }
        let description = host.acquire(OverlayKind::Description);
        let instructional = host.acquire(OverlayKind::InstructionalButtons);
        for handle in [description, instructional] {
            let host = host.clone();
            self.scope.add_disposer(move || host.release(handle));
        }
        self.overlays = Some(Overlays {
            description,
            instructional,
        });
    }

    pub fn has_overlays(&self) -> bool {
        self.overlays.is_some()
    }

    pub fn dispose(&mut self) {
        self.scope.dispose();
        self.overlays = None;
    }

    // ---- Frame ----

    /// Runs one frame. Does nothing while hidden apart from playing any
    /// queued cues.
    pub fn draw(&mut self, frame: &mut FrameContext<'_>) {
        if self.visible {
            self.run_frame(frame);
        }
        self.flush_cues(frame.audio);
    }

    fn run_frame(&mut self, frame: &mut FrameContext<'_>) {
        if self.open_debounce_pending {
            self.open_debounce_pending = false;
            self.gate.arm(frame.now, OPEN_DEBOUNCE);
        }

        self.capture_controls(frame);
        let sprites = ensure_loaded(frame.assets, COMMON_MENU, self.asset_wait);
        let banner_ready = match self.banner.texture() {
            Some(tex) if tex.dictionary != COMMON_MENU => {
                ensure_loaded(frame.assets, tex.dictionary, self.asset_wait)
            }
            Some(_) => sprites,
            None => false,
        };
        frame.world.hide_help_text();

        let scrollable = self.items.len() > self.config.max_drawable_items;
        let mut y = self.config.offset_y;
        if banner_ready {
            y += self.draw_banner(frame);
        }
        if self.draw_description(frame, y, scrollable) {
            y += ITEM_HEIGHT;
        }

        self.handle_rows(frame, &mut y, sprites, scrollable);
        if !self.visible {
            return;
        }

        if scrollable {
            self.draw_scroll_bar(frame, &mut y, sprites);
        }
        self.draw_selected_description(frame, y);
        self.draw_instructional_buttons(frame);

        self.handle_nav_input(frame);
        if !self.visible {
            return;
        }
        self.handle_camera_rotation(frame);
    }

    fn capture_controls(&self, frame: &mut FrameContext<'_>) {
        let device = frame.input.device();
        if device == InputDevice::MouseAndKeyboard {
            frame.input.show_cursor();
        }
        frame
            .input
            .capture(Passthrough::for_frame(self.config.navigation_mode, device));
    }

    fn draw_banner(&self, frame: &mut FrameContext<'_>) -> f32 {
        let Some(tex) = self.banner.texture() else {
            return 0.0;
        };
        let (w, ox, oy) = (self.config.width, self.config.offset_x, self.config.offset_y);
        let height = frame
            .renderer
            .texture_resolution(tex.dictionary, tex.sprite)
            .height;
        let size = Size::new(w, height);
        frame.renderer.draw_sprite(
            tex.dictionary,
            tex.sprite,
            Vec2::new(w / 2.0 + ox, height / 2.0 + oy),
            size,
            0.0,
            Color::WHITE,
        );
        let title = TextStyle::new(1.0, Color::WHITE, Justify::Center, Font::HouseScript);
        frame.renderer.draw_text(
            &self.title,
            Vec2::new(w / 2.0 + ox, height / 4.0 + oy),
            &title,
        );
        height
    }

    fn draw_description(&self, frame: &mut FrameContext<'_>, y: f32, scrollable: bool) -> bool {
        let Some(description) = self.description.as_deref() else {
            return false;
        };
        let (w, ox) = (self.config.width, self.config.offset_x);
        frame.renderer.draw_rect(
            Vec2::new(w / 2.0 + ox, HEADER_HEIGHT / 2.0 + y),
            Size::new(w, HEADER_HEIGHT),
            Color::BLACK,
        );
        let color = self.config.description_color;
        let left = TextStyle::new(TEXT_SCALE, color, Justify::Left, Font::ChaletLondon);
        frame.renderer.draw_text(
            description,
            Vec2::new(ox + TEXT_X_OFFSET, y + TEXT_Y_OFFSET),
            &left,
        );
        if scrollable {
            let right = TextStyle::new(TEXT_SCALE, color, Justify::Right, Font::ChaletLondon);
            let counter = format!("{} / {}", self.window.selected + 1, self.items.len());
            frame.renderer.draw_text(
                &counter,
                Vec2::new(w + TEXT_X_OFFSET + ox - ITEM_COUNT_X_OFFSET, y + TEXT_Y_OFFSET),
                &right,
            );
        }
        true
    }

    fn handle_rows(&mut self, frame: &mut FrameContext<'_>, y: &mut f32, sprites: bool, scrollable: bool) {
        let (w, ox) = (self.config.width, self.config.offset_x);
        if sprites && self.last_drawn_rows > 0 {
            let height = ITEM_HEIGHT * self.last_drawn_rows as f32;
            frame.renderer.draw_sprite(
                COMMON_MENU,
                "gradient_bgd",
                Vec2::new(w / 2.0 + ox, height / 2.0 + *y),
                Size::new(w, height - 2.0),
                0.0,
                Color::WHITE,
            );
        }

        // Row flags read one selection snapshot for the whole pass.
        let selected_index = self.window.selected;
        let range = self
            .window
            .visible_range(self.items.len(), self.config.max_drawable_items);
        let cursor = frame.input.cursor();
        let row_size = Size::new(w, ITEM_HEIGHT);
        let mut cursor_claimed = false;
        let mut over_menu = false;
        let mut drawn = 0usize;

        for index in range {
            let top = Vec2::new(ox, *y + ITEM_HEIGHT * drawn as f32);
            let hover = frame.display.contains(top, row_size, cursor);
            let interact = frame
                .display
                .contains(top, Size::new(w / INTERACT_RATIO, ITEM_HEIGHT), cursor);
            let nav_right = frame.display.contains(
                Vec2::new(ox + w - NAV_HOTSPOT_WIDTH, top.y),
                Size::new(NAV_HOTSPOT_WIDTH, ITEM_HEIGHT),
                cursor,
            );
            over_menu |= hover;
            let selected = index == selected_index;

            if self.items[index].is_enabled() {
                self.handle_row_input(frame, index, selected, hover, interact, nav_right);
            }

            let state = RowState {
                selected,
                hovered: hover,
                interact_hovered: interact,
            };
            if let Some(sprite) =
                self.items[index].draw(frame.renderer, top, row_size, state, sprites)
            {
                frame.renderer.set_cursor_sprite(sprite);
                cursor_claimed = true;
            }
            drawn += 1;
        }

        *y += ITEM_HEIGHT * drawn as f32;
        // The scroll bar counts as part of the menu for click-out.
        if scrollable {
            over_menu |= frame.display.contains(
                Vec2::new(ox, *y),
                Size::new(w, SCROLL_BAR_HEIGHT),
                cursor,
            );
        }
        self.last_drawn_rows = drawn;

        if !over_menu
            && self.config.allow_click_out
            && frame.input.is_pressed(Control::CursorAccept)
        {
            self.set_visible(false);
            return;
        }

        if !cursor_claimed && !self.mouse_on_screen_edge {
            frame.renderer.set_cursor_sprite(CursorSprite::Normal);
        }
    }

    fn is_nav_just_pressed(&self, frame: &FrameContext<'_>, dir: NavDirection) -> bool {
        let alternate = self.config.navigation_mode.alternate(dir);
        frame.input.is_just_pressed(dir.dedicated()) || frame.input.is_just_pressed(alternate)
    }

    fn is_nav_pressed(&self, frame: &FrameContext<'_>, dir: NavDirection) -> bool {
        let alternate = self.config.navigation_mode.alternate(dir);
        frame.input.is_pressed(dir.dedicated()) || frame.input.is_pressed(alternate)
    }

    fn is_nav_just_released(&self, frame: &FrameContext<'_>, dir: NavDirection) -> bool {
        let alternate = self.config.navigation_mode.alternate(dir);
        frame.input.is_just_released(dir.dedicated()) || frame.input.is_just_released(alternate)
    }

    fn handle_row_input(
        &mut self,
        frame: &mut FrameContext<'_>,
        index: usize,
        selected: bool,
        hover: bool,
        interact: bool,
        nav_right: bool,
    ) {
        let now = frame.now;
        let item = &self.items[index];
        let can_select = selected && item.is_enabled() && !self.gate.is_waiting(now);
        let ignore_click = item.ignores_click();
        let has_interact_cursor = item.interaction_cursor() != CursorSprite::None;

        if can_select && ignore_click {
            if self.is_nav_just_pressed(frame, NavDirection::Left) {
                self.navigate(index, HorizontalDirection::Left);
                self.gate.arm(now, CLICK_DEBOUNCE);
            } else if self.is_nav_just_pressed(frame, NavDirection::Right) {
                self.navigate(index, HorizontalDirection::Right);
                self.gate.arm(now, CLICK_DEBOUNCE);
            }
        }

        if !hover || !frame.input.is_just_pressed(Control::CursorAccept) {
            return;
        }

        if can_select {
            if ignore_click && !(has_interact_cursor && interact) {
                let direction = if nav_right {
                    HorizontalDirection::Right
                } else {
                    HorizontalDirection::Left
                };
                self.navigate(index, direction);
            } else {
                self.activate(index);
            }
            self.gate.arm(now, CLICK_DEBOUNCE);
        } else if self.window.selected != index {
            let previous = self.window.selected;
            self.window
                .select(index, self.items.len(), self.config.max_drawable_items);
            self.index_changed(previous);
            self.gate.arm(now, CLICK_DEBOUNCE);
        }
    }

    fn draw_scroll_bar(&mut self, frame: &mut FrameContext<'_>, y: &mut f32, sprites: bool) {
        let (w, ox) = (self.config.width, self.config.offset_x);
        let top = *y;
        let half = SCROLL_BAR_HEIGHT / 2.0;
        let center = Vec2::new(w / 2.0 + ox, top + half + 0.5);

        frame.renderer.draw_rect(
            center,
            Size::new(w, SCROLL_BAR_HEIGHT),
            Color::BLACK.with_alpha(180),
        );
        if sprites {
            frame.renderer.draw_sprite(
                COMMON_MENU,
                "shop_arrows_upanddown",
                center,
                Size::square(SCROLL_BAR_ICON),
                0.0,
                Color::WHITE,
            );
        }
        *y += SCROLL_BAR_HEIGHT + 0.5;

        if self.gate.is_waiting(frame.now) {
            return;
        }

        let cursor = frame.input.cursor();
        let half_size = Size::new(w, half);
        let forward = if frame.display.contains(Vec2::new(ox, top), half_size, cursor) {
            frame
                .renderer
                .draw_rect(center.offset(0.0, -half / 2.0), half_size, Color::highlight());
            false
        } else if frame
            .display
            .contains(Vec2::new(ox, top + half), half_size, cursor)
        {
            frame
                .renderer
                .draw_rect(center.offset(0.0, half / 2.0), half_size, Color::highlight());
            true
        } else {
            return;
        };

        if !frame.input.is_pressed(Control::FrontendAccept) {
            return;
        }
        self.gate.step(frame.now, self.config.accelerated_scrolling);
        self.step_selection(forward);
        self.using_scroll_bar = true;
    }

    fn draw_selected_description(&self, frame: &mut FrameContext<'_>, y: f32) {
        let Some(overlays) = self.overlays else {
            return;
        };
        let Some(item) = self.selected_item() else {
            return;
        };
        if item.description().is_empty() {
            return;
        }
        let (w, ox) = (self.config.width, self.config.offset_x);
        frame.renderer.draw_text_field(
            overlays.description,
            item.description(),
            Vec2::new(w / 2.0 + ox, y + 7.0),
            Size::new(w, 0.0),
        );
    }

    fn draw_instructional_buttons(&self, frame: &mut FrameContext<'_>) {
        let Some(overlays) = self.overlays else {
            return;
        };
        let Some(item) = self.selected_item() else {
            return;
        };
        let mut hints: SmallVec<[InstructionalHint; 2]> = SmallVec::new();
        if item.is_enabled() {
            hints.push(InstructionalHint {
                action: HintAction::Select,
                label: "HUD_INPUT2",
            });
        }
        hints.push(InstructionalHint {
            action: HintAction::Back,
            label: "HUD_INPUT3",
        });
        frame
            .renderer
            .draw_instructional_buttons(overlays.instructional, &hints);
    }

    fn handle_nav_input(&mut self, frame: &mut FrameContext<'_>) {
        let now = frame.now;
        let waiting = self.gate.is_waiting(now);
        let accelerated = self.config.accelerated_scrolling;

        if frame.input.is_just_pressed(Control::NavCancel) {
            if !waiting {
                self.back();
            }
            return;
        }

        if frame.input.is_just_pressed(Control::NavAccept) {
            if self.items.is_empty() || waiting {
                return;
            }
            let index = self.window.selected;
            if self.items[index].is_enabled() {
                self.activate(index);
            }
            return;
        }

        if self.is_nav_pressed(frame, NavDirection::Down) {
            if !waiting {
                self.gate.step(now, accelerated);
                self.step_selection(true);
            }
            return;
        }
        if self.is_nav_just_released(frame, NavDirection::Down) {
            self.gate.arm(now, release_delay(accelerated));
            return;
        }
        if self.is_nav_pressed(frame, NavDirection::Up) {
            if !waiting {
                self.gate.step(now, accelerated);
                self.step_selection(false);
            }
            return;
        }
        if self.is_nav_just_released(frame, NavDirection::Up) {
            self.gate.arm(now, release_delay(accelerated));
            return;
        }
        if frame.input.is_just_released(Control::NavAccept) {
            self.gate.reset(now);
            return;
        }

        let wheel = frame.input.normal(Control::ScrollUp) - frame.input.normal(Control::ScrollDown);
        if (wheel - 1.0).abs() < WHEEL_EPSILON {
            if !waiting && !self.using_scroll_bar {
                self.step_selection(false);
                self.gate.arm(now, WHEEL_DEBOUNCE);
            }
        } else if (wheel + 1.0).abs() < WHEEL_EPSILON {
            if !waiting && !self.using_scroll_bar {
                self.step_selection(true);
                self.gate.arm(now, WHEEL_DEBOUNCE);
            }
        } else {
            // Idle: once the current window lapses the ramp starts over.
            if self.using_scroll_bar && !waiting {
                self.using_scroll_bar = false;
            }
            if self.using_scroll_bar || waiting {
                return;
            }
            self.gate.reset(now);
            self.gate.consecutive = 0;
        }
    }

    fn handle_camera_rotation(&mut self, frame: &mut FrameContext<'_>) {
        match frame.display.edge_under(frame.input.cursor()) {
            Some(ScreenEdge::Right) => {
                self.mouse_on_screen_edge = true;
                frame.world.adjust_camera_heading(-CAMERA_PAN_STEP);
                frame.renderer.set_cursor_sprite(CursorSprite::RightArrow);
            }
            Some(ScreenEdge::Left) => {
                self.mouse_on_screen_edge = true;
                frame.world.adjust_camera_heading(CAMERA_PAN_STEP);
                frame.renderer.set_cursor_sprite(CursorSprite::LeftArrow);
            }
            None => self.mouse_on_screen_edge = false,
        }
    }

    /// Read-only view of the debounce state.
    pub fn input_gate(&self) -> InputGate {
        self.gate
    }

    pub fn is_using_scroll_bar(&self) -> bool {
        self.using_scroll_bar
    }
}

impl Drop for Menu {
    fn drop(&mut self) {
        self.scope.dispose();
    }
}
