use hudmenu_core::GameTime;

/// Input ignored right after a menu opens.
pub const OPEN_DEBOUNCE: GameTime = 10;
/// Re-arm after a pointer click or a left/right step.
pub const CLICK_DEBOUNCE: GameTime = 10;
pub const WHEEL_DEBOUNCE: GameTime = 20;
/// Re-arm after releasing a held direction without acceleration.
pub const RELEASE_DEBOUNCE: GameTime = 170;

const FAST_SCROLL_DELAY: GameTime = 75;
const ACCELERATED_SCROLL_DELAY: GameTime = 300;
const BASE_SCROLL_DELAY: GameTime = 175;
/// Consecutive steps before the accelerated ramp kicks in.
const FAST_AFTER: u32 = 4;

pub fn scroll_delay(consecutive: u32, accelerated: bool) -> GameTime {
    match (accelerated, consecutive >= FAST_AFTER) {
        (true, true) => FAST_SCROLL_DELAY,
        (true, false) => ACCELERATED_SCROLL_DELAY,
        (false, _) => BASE_SCROLL_DELAY,
    }
}

pub fn release_delay(accelerated: bool) -> GameTime {
    if accelerated { 0 } else { RELEASE_DEBOUNCE }
}

/// Deadline before which navigation input is dropped, plus the run length
/// of consecutive held-direction steps that drives acceleration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputGate {
    pub wait_until: GameTime,
    pub consecutive: u32,
}

impl InputGate {
    pub fn is_waiting(&self, now: GameTime) -> bool {
        now < self.wait_until
    }

    pub fn arm(&mut self, now: GameTime, delay: GameTime) {
        self.wait_until = now + delay;
    }

    pub fn reset(&mut self, now: GameTime) {
        self.wait_until = now;
    }

    /// Counts one held-direction step and arms the ramp delay for it.
    /// Returns the delay that was armed.
    pub fn step(&mut self, now: GameTime, accelerated: bool) -> GameTime {
        self.consecutive += 1;
        let delay = scroll_delay(self.consecutive, accelerated);
        self.arm(now, delay);
        delay
    }
}
