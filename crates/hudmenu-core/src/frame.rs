use crate::{AssetStreamer, AudioBackend, DisplayContext, InputSource, Renderer};

/// Host monotonic frame clock, in milliseconds.
pub type GameTime = u64;

/// Game-world side effects a menu may cause while open.
pub trait WorldHost {
    /// Rotates the gameplay camera relative to its current heading, in degrees.
    fn adjust_camera_heading(&mut self, delta: f32);
    fn hide_help_text(&mut self);
}

/// Everything a menu needs for one frame, borrowed from the host.
pub struct FrameContext<'a> {
    pub now: GameTime,
    pub display: DisplayContext,
    pub input: &'a mut dyn InputSource,
    pub renderer: &'a mut dyn Renderer,
    pub audio: &'a mut dyn AudioBackend,
    pub assets: &'a mut dyn AssetStreamer,
    pub world: &'a mut dyn WorldHost,
}
