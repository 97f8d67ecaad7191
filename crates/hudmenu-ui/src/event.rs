use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ITEM_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of a menu item, unique for the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

impl ItemId {
    pub(crate) fn next() -> Self {
        ItemId(NEXT_ITEM_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalDirection {
    Left,
    Right,
}

impl HorizontalDirection {
    pub fn delta(self) -> isize {
        match self {
            HorizontalDirection::Left => -1,
            HorizontalDirection::Right => 1,
        }
    }
}

/// Everything a menu reports to the outside, in the order it happened.
#[derive(Clone, Debug, PartialEq)]
pub enum MenuEvent {
    Opened,
    Closed,
    /// The user backed out with cancel. Always follows `Closed`.
    Back,
    IndexChanged {
        item: ItemId,
        index: usize,
        previous_item: ItemId,
        previous_index: usize,
    },
    ItemSelected {
        item: ItemId,
        index: usize,
    },
    NavigatedLeftRight {
        item: ItemId,
        index: usize,
        direction: HorizontalDirection,
    },
    CheckboxChanged {
        item: ItemId,
        index: usize,
        checked: bool,
    },
    ListIndexChanged {
        item: ItemId,
        index: usize,
        list_index: usize,
        previous_list_index: usize,
    },
    /// An externally driven list wants to move; its owner decides the value.
    ExternalNavigateRequested {
        item: ItemId,
        index: usize,
        direction: HorizontalDirection,
    },
}
