//! # Selection window
//!
//! A menu shows at most `max` rows starting at `scroll`. Every operation
//! keeps `scroll <= selected < scroll + max` and
//! `scroll <= count.saturating_sub(max)` for a non-empty list.
//!
//! Moving past either end wraps: forward past the last row lands on the
//! first with the window at the top, backward past the first lands on the
//! last with the window showing the final page.

use std::ops::Range;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionWindow {
    pub selected: usize,
    pub scroll: usize,
}

impl SelectionWindow {
    /// Advances one row. Returns `false` for an empty list.
    pub fn increase(&mut self, count: usize, max: usize) -> bool {
        if count == 0 {
            return false;
        }
        self.selected += 1;
        if self.selected - self.scroll >= max {
            self.scroll += 1;
        }
        if self.selected >= count {
            self.selected = 0;
            self.scroll = 0;
        }
        true
    }

    /// Retreats one row. Returns `false` for an empty list.
    pub fn decrease(&mut self, count: usize, max: usize) -> bool {
        if count == 0 {
            return false;
        }
        if self.selected == 0 {
            self.selected = count - 1;
            self.scroll = count.saturating_sub(max);
            return true;
        }
        self.selected -= 1;
        if self.selected < self.scroll {
            self.scroll -= 1;
        }
        true
    }

    /// Jumps to `index` (clamped), moving the window as little as possible.
    pub fn select(&mut self, index: usize, count: usize, max: usize) {
        self.selected = index;
        self.clamp(count, max);
    }

    /// Restores the invariants after the item count or row budget changed.
    pub fn clamp(&mut self, count: usize, max: usize) {
        if count == 0 {
            *self = Self::default();
            return;
        }
        let max = max.max(1);
        self.selected = self.selected.min(count - 1);
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.selected >= self.scroll + max {
            self.scroll = self.selected + 1 - max;
        }
        self.scroll = self.scroll.min(count.saturating_sub(max));
    }

    pub fn visible_range(&self, count: usize, max: usize) -> Range<usize> {
        self.scroll.min(count)..(self.scroll + max).min(count)
    }
}
