//! Static sider menu table.
//!
//! The menu is a two-level tree defined once as `const` data. Entries carry no
//! navigation behavior; selecting one only moves the highlight.

/// Icons available to menu entries and header controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconRef {
    PieChart,
    Desktop,
    User,
    Team,
    File,
    /// Shown on the collapse button while the sider is expanded
    MenuFold,
    /// Shown on the collapse button while the sider is collapsed
    MenuUnfold,
}

impl IconRef {
    /// Single-cell glyph used when painting the icon in a terminal.
    pub const fn glyph(self) -> &'static str {
        match self {
            IconRef::PieChart => "◔",
            IconRef::Desktop => "▣",
            IconRef::User => "◉",
            IconRef::Team => "◎",
            IconRef::File => "▤",
            IconRef::MenuFold => "«",
            IconRef::MenuUnfold => "»",
        }
    }
}

/// A single entry of the sider menu.
///
/// `children` is empty for leaves. Nesting never goes deeper than one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: Option<IconRef>,
    pub children: &'static [MenuItem],
}

impl MenuItem {
    const fn leaf(label: &'static str, key: &'static str, icon: Option<IconRef>) -> Self {
        Self {
            key,
            label,
            icon,
            children: &[],
        }
    }

    const fn submenu(label: &'static str, key: &'static str, icon: IconRef, children: &'static [MenuItem]) -> Self {
        Self {
            key,
            label,
            icon: Some(icon),
            children,
        }
    }

    /// Returns `true` when the entry expands into child entries.
    pub fn is_submenu(&self) -> bool {
        !self.children.is_empty()
    }

    /// Child entries, or `None` for leaves.
    pub fn children(&self) -> Option<&'static [MenuItem]> {
        if self.children.is_empty() { None } else { Some(self.children) }
    }
}

/// Key of the entry highlighted when the shell first renders.
pub const DEFAULT_SELECTED_KEY: &str = "1";

const USER_ITEMS: &[MenuItem] = &[
    MenuItem::leaf("Tom", "3", None),
    MenuItem::leaf("Bill", "4", None),
    MenuItem::leaf("Alex", "5", None),
];

const TEAM_ITEMS: &[MenuItem] = &[MenuItem::leaf("Team 1", "6", None), MenuItem::leaf("Team 2", "8", None)];

/// The sider menu, top-level entries in display order.
pub const MENU_ITEMS: &[MenuItem] = &[
    MenuItem::leaf("Option 1", "1", Some(IconRef::PieChart)),
    MenuItem::leaf("Option 2", "2", Some(IconRef::Desktop)),
    MenuItem::submenu("User", "sub1", IconRef::User, USER_ITEMS),
    MenuItem::submenu("Team", "sub2", IconRef::Team, TEAM_ITEMS),
    MenuItem::leaf("Files", "9", Some(IconRef::File)),
];

/// Looks up an entry by key anywhere in the two-level tree `items`.
pub fn find_item(items: &'static [MenuItem], key: &str) -> Option<&'static MenuItem> {
    items.iter().find_map(|item| {
        if item.key == key {
            Some(item)
        } else {
            item.children.iter().find(|child| child.key == key)
        }
    })
}
