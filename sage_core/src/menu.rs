//! Dropdown menu state for the landing page navigation.
//!
//! Two logical states: closed, or open on exactly one menu. Every transition
//! is total - there is no error path, and an out-of-domain menu id cannot be
//! constructed thanks to the closed [`MenuId`] enum.

/// Identifier for one of the navigation dropdown menus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuId {
    /// Product features (invoicing, cashflow, ...).
    Features,
    /// Industries served.
    Industry,
    /// Help and documentation resources.
    Resources,
}

impl MenuId {
    /// All menus, in navigation-bar display order.
    pub const ALL: [MenuId; 3] = [MenuId::Features, MenuId::Industry, MenuId::Resources];

    /// Trigger label shown on the navigation button.
    pub fn label(self) -> &'static str {
        match self {
            MenuId::Features => "Features",
            MenuId::Industry => "Industry",
            MenuId::Resources => "Resources",
        }
    }

    /// Lowercase name, used in the open panel's ARIA label ("features menu").
    pub fn name(self) -> &'static str {
        match self {
            MenuId::Features => "features",
            MenuId::Industry => "industry",
            MenuId::Resources => "resources",
        }
    }

    /// Ordered item labels for this menu (the static menu catalog).
    pub fn items(self) -> &'static [&'static str] {
        match self {
            MenuId::Features => &["Invoicing", "Cashflow", "Payroll", "Reports"],
            MenuId::Industry => &["Creative", "Handymen", "Non-profit", "Self-employed"],
            MenuId::Resources => &["Help Center", "Guides", "Pricing FAQ", "Contact"],
        }
    }
}

/// Which dropdown menu, if any, is currently open.
///
/// At most one menu is open at a time: opening one closes any other, and
/// toggling the open menu closes it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: Option<MenuId>,
}

impl MenuState {
    /// Fresh state with every menu closed.
    pub fn new() -> Self {
        Self { open: None }
    }

    /// The currently open menu, if any.
    pub fn open(&self) -> Option<MenuId> {
        self.open
    }

    /// Whether `id` is the open menu.
    pub fn is_open(&self, id: MenuId) -> bool {
        self.open == Some(id)
    }

    /// Open `id`, or close it if it is already open.
    pub fn toggle(&mut self, id: MenuId) {
        self.open = if self.open == Some(id) { None } else { Some(id) };
    }

    /// Close whatever is open. No-op when everything already is closed.
    pub fn close(&mut self) {
        self.open = None;
    }

    /// Items of the open menu, or an empty slice while closed.
    pub fn items(&self) -> &'static [&'static str] {
        self.open.map(MenuId::items).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_closed_with_no_items() {
        let state = MenuState::new();
        assert_eq!(state.open(), None);
        assert!(state.items().is_empty());
    }

    #[test]
    fn toggle_opens_each_menu_from_closed() {
        for id in MenuId::ALL {
            let mut state = MenuState::new();
            state.toggle(id);
            assert_eq!(state.open(), Some(id));
            assert!(state.is_open(id));
        }
    }

    #[test]
    fn toggle_same_menu_closes_it() {
        for id in MenuId::ALL {
            let mut state = MenuState::new();
            state.toggle(id);
            state.toggle(id);
            assert_eq!(state.open(), None);
        }
    }

    #[test]
    fn toggle_other_menu_replaces_open_one() {
        for a in MenuId::ALL {
            for b in MenuId::ALL {
                if a == b {
                    continue;
                }
                let mut state = MenuState::new();
                state.toggle(a);
                state.toggle(b);
                assert_eq!(state.open(), Some(b));
                assert!(!state.is_open(a));
            }
        }
    }

    #[test]
    fn close_is_idempotent_from_any_state() {
        let mut state = MenuState::new();
        state.close();
        assert_eq!(state.open(), None);

        state.toggle(MenuId::Industry);
        state.close();
        assert_eq!(state.open(), None);
        state.close();
        assert_eq!(state.open(), None);
    }

    #[test]
    fn items_follow_catalog_order_for_open_menu() {
        let mut state = MenuState::new();
        state.toggle(MenuId::Features);
        assert_eq!(state.items(), ["Invoicing", "Cashflow", "Payroll", "Reports"]);
    }

    #[test]
    fn items_empty_for_unopened_menus() {
        let mut state = MenuState::new();
        state.toggle(MenuId::Features);
        // Catalog lookup for a menu that is not open still works directly.
        assert_eq!(
            MenuId::Industry.items(),
            ["Creative", "Handymen", "Non-profit", "Self-employed"]
        );
        state.close();
        assert!(state.items().is_empty());
    }

    // Outside pointer press and Escape both funnel into close().

    #[test]
    fn outside_press_closes_open_menu() {
        let mut state = MenuState::new();
        state.toggle(MenuId::Features);
        state.close();
        assert_eq!(state.open(), None);
    }

    #[test]
    fn escape_closes_open_menu() {
        let mut state = MenuState::new();
        state.toggle(MenuId::Industry);
        state.close();
        assert_eq!(state.open(), None);
    }

    #[test]
    fn switching_menus_swaps_items() {
        let mut state = MenuState::new();
        state.toggle(MenuId::Features);
        state.toggle(MenuId::Resources);
        assert_eq!(state.open(), Some(MenuId::Resources));
        assert_eq!(state.items(), ["Help Center", "Guides", "Pricing FAQ", "Contact"]);
    }
}
