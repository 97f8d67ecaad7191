//! Deterministic host collaborators for tests, demos, and tooling that
//! drive menus without a game attached.

use std::cell::RefCell;
use std::collections::HashSet;

use crate::{
    AssetStreamer, AudioBackend, Color, Control, CursorSprite, DisplayContext, Font,
    FrameContext, GameTime, HintAction, InputDevice, InputSource, InstructionalHint,
    OverlayHandle, OverlayHost, OverlayKind, Passthrough, Renderer, Size, SoundHandle, TextStyle,
    Vec2, WorldHost,
};
use crate::text::{MAX_TEXT_CHUNK, chunk_graphemes};

/// Input whose state is set by hand, one frame at a time.
///
/// Edge queries compare against the state captured by the last
/// `next_frame` call.
#[derive(Debug)]
pub struct ScriptedInput {
    device: InputDevice,
    held: HashSet<Control>,
    prev_held: HashSet<Control>,
    wheel: f32,
    cursor: Vec2,
    pub captured: Vec<Passthrough>,
    /// Host controls the last capture left enabled.
    pub enabled: Vec<Control>,
    pub cursor_shown: usize,
}

impl Default for ScriptedInput {
    fn default() -> Self {
        Self {
            device: InputDevice::MouseAndKeyboard,
            held: HashSet::new(),
            prev_held: HashSet::new(),
            wheel: 0.0,
            // Parked mid-screen so edge panning stays quiet.
            cursor: Vec2::new(0.5, 0.5),
            captured: Vec::new(),
            enabled: Vec::new(),
            cursor_shown: 0,
        }
    }
}

impl ScriptedInput {
    pub fn new(device: InputDevice) -> Self {
        Self {
            device,
            ..Default::default()
        }
    }

    pub fn press(&mut self, control: Control) {
        self.held.insert(control);
    }

    pub fn release(&mut self, control: Control) {
        self.held.remove(&control);
    }

    /// Wheel notch for this frame: `+1.0` is up, `-1.0` is down.
    pub fn scroll(&mut self, delta: f32) {
        self.wheel = delta;
    }

    pub fn move_cursor(&mut self, x: f32, y: f32) {
        self.cursor = Vec2::new(x, y);
    }

    pub fn set_device(&mut self, device: InputDevice) {
        self.device = device;
    }

    /// Latches the held set for edge detection and clears the wheel.
    pub fn next_frame(&mut self) {
        self.prev_held = self.held.clone();
        self.wheel = 0.0;
    }
}

impl InputSource for ScriptedInput {
    fn is_pressed(&self, control: Control) -> bool {
        self.held.contains(&control)
    }

    fn is_just_pressed(&self, control: Control) -> bool {
        self.held.contains(&control) && !self.prev_held.contains(&control)
    }

    fn is_just_released(&self, control: Control) -> bool {
        !self.held.contains(&control) && self.prev_held.contains(&control)
    }

    fn normal(&self, control: Control) -> f32 {
        match control {
            Control::ScrollUp => self.wheel.max(0.0),
            Control::ScrollDown => (-self.wheel).max(0.0),
            Control::CursorX => self.cursor.x,
            Control::CursorY => self.cursor.y,
            _ => 0.0,
        }
    }

    fn device(&self) -> InputDevice {
        self.device
    }

    fn capture(&mut self, passthrough: Passthrough) {
        self.enabled = passthrough.controls().into_vec();
        self.captured.push(passthrough);
    }

    fn show_cursor(&mut self) {
        self.cursor_shown += 1;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Sprite {
        atlas: String,
        id: String,
        center: Vec2,
        size: Size,
        tint: Color,
    },
    Rect {
        center: Vec2,
        size: Size,
        color: Color,
    },
    Text {
        text: String,
        pos: Vec2,
        style: TextStyle,
    },
    /// Text pushed into a host text component, one entry per piece.
    TextField {
        handle: OverlayHandle,
        chunks: Vec<String>,
        pos: Vec2,
    },
    Hints(Vec<HintAction>),
    Cursor(CursorSprite),
}

/// Renderer that keeps every call. Text is measured at a fixed advance of
/// ten units per character at scale 1.
#[derive(Debug)]
pub struct RecordingRenderer {
    pub calls: Vec<DrawCall>,
    pub texture_size: Size,
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            texture_size: Size::new(512.0, 128.0),
        }
    }
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn sprites(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Sprite { id, .. } => Some(id.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn last_cursor(&self) -> Option<CursorSprite> {
        self.calls.iter().rev().find_map(|c| match c {
            DrawCall::Cursor(sprite) => Some(*sprite),
            _ => None,
        })
    }
}

impl Renderer for RecordingRenderer {
    fn draw_sprite(
        &mut self,
        atlas: &str,
        id: &str,
        center: Vec2,
        size: Size,
        _rotation: f32,
        tint: Color,
    ) {
        self.calls.push(DrawCall::Sprite {
            atlas: atlas.to_string(),
            id: id.to_string(),
            center,
            size,
            tint,
        });
    }

    fn draw_rect(&mut self, center: Vec2, size: Size, color: Color) {
        self.calls.push(DrawCall::Rect {
            center,
            size,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, style: &TextStyle) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            pos,
            style: *style,
        });
    }

    fn draw_text_field(&mut self, handle: OverlayHandle, text: &str, pos: Vec2, _size: Size) {
        self.calls.push(DrawCall::TextField {
            handle,
            chunks: chunk_graphemes(text, MAX_TEXT_CHUNK)
                .into_iter()
                .map(str::to_string)
                .collect(),
            pos,
        });
    }

    fn measure_text_width(&self, text: &str, _font: Font, scale: f32) -> f32 {
        text.chars().count() as f32 * 10.0 * scale
    }

    fn texture_resolution(&self, _atlas: &str, _id: &str) -> Size {
        self.texture_size
    }

    fn set_cursor_sprite(&mut self, sprite: CursorSprite) {
        self.calls.push(DrawCall::Cursor(sprite));
    }

    fn draw_instructional_buttons(&mut self, _handle: OverlayHandle, hints: &[InstructionalHint]) {
        self.calls
            .push(DrawCall::Hints(hints.iter().map(|h| h.action).collect()));
    }
}

#[derive(Debug, Default)]
pub struct RecordingAudio {
    /// `(cue, sound set)` in play order.
    pub played: Vec<(String, String)>,
    pub released: Vec<SoundHandle>,
    next: i32,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cues(&self) -> Vec<&str> {
        self.played.iter().map(|(cue, _)| cue.as_str()).collect()
    }

    pub fn clear(&mut self) {
        self.played.clear();
        self.released.clear();
    }
}

impl AudioBackend for RecordingAudio {
    fn play_cue(&mut self, name: &str, sound_set: &str) -> SoundHandle {
        self.played.push((name.to_string(), sound_set.to_string()));
        self.next += 1;
        SoundHandle(self.next)
    }

    fn release(&mut self, handle: SoundHandle) {
        self.released.push(handle);
    }
}

/// Texture streaming that either loads on request or never loads.
#[derive(Debug, Default)]
pub struct StreamingAssets {
    loaded: HashSet<String>,
    blocked: HashSet<String>,
    pub requests: Vec<String>,
}

impl StreamingAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests for `dictionary` never complete.
    pub fn block(&mut self, dictionary: &str) {
        self.blocked.insert(dictionary.to_string());
        self.loaded.remove(dictionary);
    }
}

impl AssetStreamer for StreamingAssets {
    fn is_loaded(&self, dictionary: &str) -> bool {
        self.loaded.contains(dictionary)
    }

    fn request(&mut self, dictionary: &str) {
        self.requests.push(dictionary.to_string());
        if !self.blocked.contains(dictionary) {
            self.loaded.insert(dictionary.to_string());
        }
    }

    fn pump(&mut self) {}
}

#[derive(Debug, Default)]
pub struct RecordingWorld {
    pub camera_heading: f32,
    pub help_hidden: usize,
}

impl WorldHost for RecordingWorld {
    fn adjust_camera_heading(&mut self, delta: f32) {
        self.camera_heading += delta;
    }

    fn hide_help_text(&mut self) {
        self.help_hidden += 1;
    }
}

/// Overlay host that hands out sequential handles and logs releases.
#[derive(Debug, Default)]
pub struct RecordingOverlays {
    acquired: RefCell<Vec<(OverlayKind, OverlayHandle)>>,
    released: RefCell<Vec<OverlayHandle>>,
}

impl RecordingOverlays {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquired(&self) -> Vec<(OverlayKind, OverlayHandle)> {
        self.acquired.borrow().clone()
    }

    pub fn released(&self) -> Vec<OverlayHandle> {
        self.released.borrow().clone()
    }

    /// Handles acquired and not yet released.
    pub fn live(&self) -> usize {
        self.acquired
            .borrow()
            .len()
            .saturating_sub(self.released.borrow().len())
    }
}

impl OverlayHost for RecordingOverlays {
    fn acquire(&self, kind: OverlayKind) -> OverlayHandle {
        let mut acquired = self.acquired.borrow_mut();
        let handle = OverlayHandle(acquired.len() as u32 + 1);
        acquired.push((kind, handle));
        handle
    }

    fn release(&self, handle: OverlayHandle) {
        self.released.borrow_mut().push(handle);
    }
}

/// All headless collaborators bundled so a frame can be lent out in one call.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    pub display: DisplayContext,
    pub input: ScriptedInput,
    pub renderer: RecordingRenderer,
    pub audio: RecordingAudio,
    pub assets: StreamingAssets,
    pub world: RecordingWorld,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&mut self, now: GameTime) -> FrameContext<'_> {
        FrameContext {
            now,
            display: self.display,
            input: &mut self.input,
            renderer: &mut self.renderer,
            audio: &mut self.audio,
            assets: &mut self.assets,
            world: &mut self.world,
        }
    }
}
