//! Host menus
//!
//! The Apps menu is a flat list of labelled options. Options carry a
//! [`MenuAction`] describing what activation does; the synchronizer
//! executes it. Hosts implement [`MenuHost`] to display menus.

mod bar;

pub use bar::MenuBar;

/// Name of the menu the synchronizer owns
pub const APPS_MENU: &str = "Apps";

/// Label of the trailing option that opens the add-repository form
pub const ADD_REPOSITORY_LABEL: &str = "Add Repository...";

/// Label shown in place of a repository whose listing could not be loaded
pub fn error_label(base_url: &str) -> String {
    format!("Error loading from {}", base_url)
}

/// What activating a menu option does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// Fetch `<base_url><path>` and hand it to the app launcher
    LaunchApp { base_url: String, path: String },

    /// Open the add-repository prompt
    AddRepository,

    /// Do nothing (error placeholders)
    Inert,
}

/// A labelled menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub label: String,
    pub action: MenuAction,
}

impl MenuOption {
    pub fn launch(
        label: impl Into<String>,
        base_url: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            action: MenuAction::LaunchApp {
                base_url: base_url.into(),
                path: path.into(),
            },
        }
    }

    /// Placeholder for a repository that failed to load
    pub fn load_error(base_url: &str) -> Self {
        Self {
            label: error_label(base_url),
            action: MenuAction::Inert,
        }
    }

    pub fn add_repository() -> Self {
        Self {
            label: ADD_REPOSITORY_LABEL.to_string(),
            action: MenuAction::AddRepository,
        }
    }
}

/// A named, ordered list of options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub name: String,
    pub options: Vec<MenuOption>,
}

impl Menu {
    pub fn new(name: impl Into<String>, options: Vec<MenuOption>) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }

    /// Find the first option with the given label
    pub fn find(&self, label: &str) -> Option<&MenuOption> {
        self.options.iter().find(|o| o.label == label)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Numbered plain-text rendering for terminals
    pub fn render(&self) -> String {
        let mut out = format!("{}\n", self.name);
        for (i, option) in self.options.iter().enumerate() {
            out.push_str(&format!("  {:>2}. {}\n", i + 1, option.label));
        }
        out
    }
}

/// A UI surface that displays menus
pub trait MenuHost {
    /// Remove every installed menu with this name
    fn remove_menu(&mut self, name: &str);

    /// Install a menu
    fn install_menu(&mut self, menu: Menu);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_menu() -> Menu {
        Menu::new(
            APPS_MENU,
            vec![
                MenuOption::launch("Calculator", "https://a.test/", "calc.html"),
                MenuOption::load_error("https://b.test/"),
                MenuOption::add_repository(),
            ],
        )
    }

    #[test]
    fn test_error_label() {
        assert_eq!(
            error_label("https://a.test/"),
            "Error loading from https://a.test/"
        );
    }

    #[test]
    fn test_find_by_label() {
        let menu = sample_menu();
        let option = menu.find("Calculator").unwrap();
        assert_eq!(
            option.action,
            MenuAction::LaunchApp {
                base_url: "https://a.test/".to_string(),
                path: "calc.html".to_string(),
            }
        );
        assert!(menu.find("Missing").is_none());
    }

    #[test]
    fn test_error_option_is_inert() {
        let menu = sample_menu();
        assert_eq!(menu.options[1].action, MenuAction::Inert);
    }

    #[test]
    fn test_render() {
        let rendered = sample_menu().render();
        assert_eq!(
            rendered,
            "Apps\n   1. Calculator\n   2. Error loading from https://b.test/\n   3. Add Repository...\n"
        );
    }
}
