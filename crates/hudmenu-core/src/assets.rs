use web_time::{Duration, Instant};

/// How long a frame may wait for a texture dictionary before drawing without it.
pub const ASSET_WAIT: Duration = Duration::from_millis(500);

/// Host texture streaming.
pub trait AssetStreamer {
    fn is_loaded(&self, dictionary: &str) -> bool;
    fn request(&mut self, dictionary: &str);
    /// Called between readiness polls; hosts yield to their scheduler here.
    fn pump(&mut self) {
        std::thread::yield_now();
    }
}

/// Requests `dictionary` and polls until it is loaded or `timeout` passes.
///
/// Returns whether the dictionary is usable. A miss is logged and the caller
/// skips whatever depended on it for this frame.
pub fn ensure_loaded(assets: &mut dyn AssetStreamer, dictionary: &str, timeout: Duration) -> bool {
    if assets.is_loaded(dictionary) {
        return true;
    }
    assets.request(dictionary);
    let deadline = Instant::now() + timeout;
    while !assets.is_loaded(dictionary) {
        if Instant::now() >= deadline {
            log::warn!("texture dictionary `{dictionary}` not ready after {timeout:?}");
            return false;
        }
        assets.pump();
    }
    true
}
