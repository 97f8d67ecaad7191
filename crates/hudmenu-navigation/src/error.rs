use hudmenu_ui::ItemId;

use crate::MenuId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    #[error("menu {0:?} is not registered")]
    UnknownMenu(MenuId),
    #[error("menu {menu:?} has no item {item:?}")]
    UnknownItem { menu: MenuId, item: ItemId },
}
