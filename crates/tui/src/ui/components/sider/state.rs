use laba_types::{DEFAULT_SELECTED_KEY, MENU_ITEMS, MenuItem, find_item};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

/// A menu entry as it appears on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuRow {
    pub item: &'static MenuItem,
    /// 0 for top-level entries, 1 for submenu children
    pub depth: u8,
}

/// Inline menu state for the sider.
///
/// The menu tree itself is static; this only tracks what the menu widget
/// shows: which submenus are open, which leaf is highlighted as selected, and
/// where the keyboard cursor sits. None of it feeds back into the shell state.
#[derive(Debug, Clone)]
pub struct MenuState {
    items: &'static [MenuItem],
    open_keys: Vec<&'static str>,
    selected_key: &'static str,
    cursor_key: &'static str,
    pub f_menu: FocusFlag,
    /// Last rendered area of the menu; used for mouse hit testing.
    pub last_area: Rect,
    /// Last rendered row areas, parallel to `visible_rows`.
    pub row_areas: Vec<Rect>,
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new(MENU_ITEMS)
    }
}

impl MenuState {
    pub fn new(items: &'static [MenuItem]) -> Self {
        let first = items.first().map(|item| item.key).unwrap_or(DEFAULT_SELECTED_KEY);
        Self {
            items,
            open_keys: Vec::new(),
            selected_key: DEFAULT_SELECTED_KEY,
            cursor_key: first,
            f_menu: FocusFlag::named("sider.menu"),
            last_area: Rect::default(),
            row_areas: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn items(&self) -> &'static [MenuItem] {
        self.items
    }

    pub fn selected_key(&self) -> &'static str {
        self.selected_key
    }

    #[cfg(test)]
    pub fn cursor_key(&self) -> &'static str {
        self.cursor_key
    }

    pub fn is_open(&self, key: &str) -> bool {
        self.open_keys.iter().any(|open| *open == key)
    }

    /// Returns `true` when `item` is the selected leaf or a submenu holding it.
    pub fn is_selected_branch(&self, item: &MenuItem) -> bool {
        item.key == self.selected_key || item.children.iter().any(|child| child.key == self.selected_key)
    }

    /// Rows currently on screen. Collapsed menus show top-level entries only.
    pub fn visible_rows(&self, collapsed: bool) -> Vec<MenuRow> {
        let mut rows = Vec::with_capacity(self.items.len());
        for item in self.items {
            rows.push(MenuRow { item, depth: 0 });
            if !collapsed && self.is_open(item.key) {
                rows.extend(item.children.iter().map(|child| MenuRow { item: child, depth: 1 }));
            }
        }
        rows
    }

    /// Index of the cursor within `visible_rows(collapsed)`.
    pub fn cursor_index(&self, collapsed: bool) -> usize {
        self.visible_rows(collapsed)
            .iter()
            .position(|row| row.item.key == self.cursor_key)
            .unwrap_or(0)
    }

    pub fn move_cursor(&mut self, delta: isize, collapsed: bool) {
        let rows = self.visible_rows(collapsed);
        if rows.is_empty() {
            return;
        }
        let current = self.cursor_index(collapsed) as isize;
        let next = (current + delta).clamp(0, rows.len() as isize - 1) as usize;
        self.cursor_key = rows[next].item.key;
    }

    /// Enter/Space on the cursor row: select a leaf or toggle a submenu.
    ///
    /// Collapsed menus cannot expand submenus inline, so activating one there
    /// is a no-op.
    pub fn activate(&mut self, collapsed: bool) {
        let rows = self.visible_rows(collapsed);
        let Some(row) = rows.get(self.cursor_index(collapsed)).copied() else {
            return;
        };
        if row.item.is_submenu() {
            if !collapsed {
                self.toggle_open(row.item.key);
            }
        } else {
            self.selected_key = row.item.key;
        }
    }

    /// Opens the submenu under the cursor.
    pub fn open_at_cursor(&mut self, collapsed: bool) {
        if collapsed {
            return;
        }
        if let Some(item) = find_item(self.items, self.cursor_key)
            && item.is_submenu()
            && !self.is_open(item.key)
        {
            self.open_keys.push(item.key);
        }
    }

    /// Closes the submenu under the cursor, or the one containing it.
    pub fn close_at_cursor(&mut self, collapsed: bool) {
        if collapsed {
            return;
        }
        let target = match self.parent_of(self.cursor_key) {
            Some(parent) => parent.key,
            None => self.cursor_key,
        };
        if self.is_open(target) {
            self.open_keys.retain(|key| *key != target);
            self.cursor_key = target;
        }
    }

    /// Moves the cursor onto a visible row and activates it (mouse click).
    pub fn click_row(&mut self, index: usize, collapsed: bool) {
        if let Some(row) = self.visible_rows(collapsed).get(index) {
            self.cursor_key = row.item.key;
            self.activate(collapsed);
        }
    }

    /// Keeps the cursor on a visible row after the sider collapses.
    pub fn sync_collapsed(&mut self, collapsed: bool) {
        if collapsed && let Some(parent) = self.parent_of(self.cursor_key) {
            self.cursor_key = parent.key;
        }
    }

    fn toggle_open(&mut self, key: &'static str) {
        if self.is_open(key) {
            self.open_keys.retain(|open| *open != key);
        } else {
            self.open_keys.push(key);
        }
    }

    fn parent_of(&self, key: &str) -> Option<&'static MenuItem> {
        self.items
            .iter()
            .find(|item| item.children.iter().any(|child| child.key == key))
    }
}

impl HasFocus for MenuState {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.leaf_widget(self);
    }

    fn focus(&self) -> FocusFlag {
        self.f_menu.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(state: &MenuState, collapsed: bool) -> Vec<&'static str> {
        state.visible_rows(collapsed).iter().map(|row| row.item.label).collect()
    }

    #[test]
    fn starts_closed_with_default_selection() {
        let state = MenuState::default();
        assert_eq!(labels(&state, false), ["Option 1", "Option 2", "User", "Team", "Files"]);
        assert_eq!(state.selected_key(), "1");
        assert_eq!(state.cursor_key(), "1");
    }

    #[test]
    fn activating_a_submenu_toggles_it_open() {
        let mut state = MenuState::default();
        state.move_cursor(2, false);
        assert_eq!(state.cursor_key(), "sub1");
        state.activate(false);
        assert_eq!(
            labels(&state, false),
            ["Option 1", "Option 2", "User", "Tom", "Bill", "Alex", "Team", "Files"]
        );
        assert_eq!(state.visible_rows(false)[3].depth, 1);
        state.activate(false);
        assert_eq!(labels(&state, false).len(), 5);
    }

    #[test]
    fn activating_a_leaf_selects_it() {
        let mut state = MenuState::default();
        state.move_cursor(3, false);
        state.open_at_cursor(false);
        state.move_cursor(2, false);
        assert_eq!(state.cursor_key(), "8");
        state.activate(false);
        assert_eq!(state.selected_key(), "8");
        let team = state.items()[3];
        assert!(state.is_selected_branch(&team));
    }

    #[test]
    fn close_from_child_moves_cursor_to_parent() {
        let mut state = MenuState::default();
        state.move_cursor(2, false);
        state.open_at_cursor(false);
        state.move_cursor(1, false);
        assert_eq!(state.cursor_key(), "3");
        state.close_at_cursor(false);
        assert_eq!(state.cursor_key(), "sub1");
        assert!(!state.is_open("sub1"));
    }

    #[test]
    fn collapsed_menu_shows_top_level_only() {
        let mut state = MenuState::default();
        state.move_cursor(2, false);
        state.activate(false);
        state.move_cursor(2, false);
        assert_eq!(state.cursor_key(), "4");

        state.sync_collapsed(true);
        assert_eq!(state.cursor_key(), "sub1");
        assert_eq!(labels(&state, true).len(), 5);

        state.activate(true);
        assert!(state.is_open("sub1"), "collapsed activation must not close the submenu");
        assert_eq!(labels(&state, false).len(), 8);
    }

    #[test]
    fn cursor_movement_is_clamped() {
        let mut state = MenuState::default();
        state.move_cursor(-3, false);
        assert_eq!(state.cursor_key(), "1");
        state.move_cursor(99, false);
        assert_eq!(state.cursor_key(), "9");
    }

    #[test]
    fn click_row_selects_leaf() {
        let mut state = MenuState::default();
        state.click_row(4, false);
        assert_eq!(state.selected_key(), "9");
        state.click_row(42, false);
        assert_eq!(state.selected_key(), "9");
    }
}
