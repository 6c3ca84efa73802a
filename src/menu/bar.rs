//! In-memory menu bar

use super::{Menu, MenuHost};

/// Menu host that keeps installed menus in installation order
#[derive(Debug, Default, Clone)]
pub struct MenuBar {
    menus: Vec<Menu>,
}

impl MenuBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a menu by name
    pub fn get(&self, name: &str) -> Option<&Menu> {
        self.menus.iter().find(|m| m.name == name)
    }

    /// Number of installed menus with this name
    pub fn count(&self, name: &str) -> usize {
        self.menus.iter().filter(|m| m.name == name).count()
    }

    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }
}

impl MenuHost for MenuBar {
    fn remove_menu(&mut self, name: &str) {
        let before = self.menus.len();
        self.menus.retain(|m| m.name != name);

        if self.menus.len() != before {
            tracing::trace!(menu = %name, "Removed menu");
        }
    }

    fn install_menu(&mut self, menu: Menu) {
        tracing::trace!(menu = %menu.name, options = menu.len(), "Installed menu");
        self.menus.push(menu);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{MenuOption, APPS_MENU};

    #[test]
    fn test_install_and_remove() {
        let mut bar = MenuBar::new();
        bar.install_menu(Menu::new("File", vec![]));
        bar.install_menu(Menu::new(APPS_MENU, vec![MenuOption::add_repository()]));
        assert_eq!(bar.menus().len(), 2);

        bar.remove_menu(APPS_MENU);
        assert_eq!(bar.menus().len(), 1);
        assert!(bar.get(APPS_MENU).is_none());
        assert!(bar.get("File").is_some());
    }

    #[test]
    fn test_remove_clears_every_copy() {
        let mut bar = MenuBar::new();
        bar.install_menu(Menu::new(APPS_MENU, vec![]));
        bar.install_menu(Menu::new(APPS_MENU, vec![]));
        assert_eq!(bar.count(APPS_MENU), 2);

        bar.remove_menu(APPS_MENU);
        assert_eq!(bar.count(APPS_MENU), 0);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut bar = MenuBar::new();
        bar.remove_menu(APPS_MENU);
        assert!(bar.menus().is_empty());
    }
}
