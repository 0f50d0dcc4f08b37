//! Menu source port - abstracts where flat menu entries come from.

use crate::domain::entities::MenuEntry;
use crate::error::MenuResult;

/// Supplies the flat entry list for one menu.
///
/// The backend serves several menus keyed by identifier; `None` picks the
/// source's default (the first menu it knows about).
pub trait MenuSource: Send + Sync {
    fn load_entries(&self, identifier: Option<&str>) -> MenuResult<Vec<MenuEntry>>;
}
