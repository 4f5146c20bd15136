//! Root screen of the in-game menu
//!
//! Shown every time the menu opens:
//! - Options: opens the options screen
//! - Save and exit game
//! - Return to game

use super::menu::{create_label, MenuAction, MenuItem, MenuPage};
use super::screen::{Screen, ScreenId};
use crate::backend::MenuBackend;

pub struct RootScreen<B: MenuBackend> {
    page: MenuPage<B>,
    options_screen: ScreenId,
}

impl<B: MenuBackend> RootScreen<B> {
    /// Creates the root screen; "options" links to `options_screen`
    pub fn new(options_screen: ScreenId) -> Self {
        RootScreen {
            page: MenuPage::new(),
            options_screen,
        }
    }
}

impl<B: MenuBackend> Screen<B> for RootScreen<B> {
    fn name(&self) -> &'static str {
        "root"
    }

    fn page(&self) -> &MenuPage<B> {
        &self.page
    }

    fn page_mut(&mut self) -> &mut MenuPage<B> {
        &mut self.page
    }

    fn build_items(&self, backend: &mut B) -> Vec<MenuItem<B::Label>> {
        vec![
            MenuItem::linked("options", create_label(backend, "options"), self.options_screen),
            MenuItem::terminal(
                "save",
                create_label(backend, "save and exit game"),
                MenuAction::SaveAndExit,
            ),
            MenuItem::terminal(
                "back",
                create_label(backend, "return to game"),
                MenuAction::ReturnToGame,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::testing::TestBackend;
    use crate::backend::Label;

    #[test]
    fn test_root_items() {
        let mut backend = TestBackend::new();
        let mut screen: RootScreen<TestBackend> = RootScreen::new(ScreenId::new(1));
        screen.load(&mut backend).unwrap();

        let items = screen.page().items();
        let names: Vec<&str> = items.iter().map(|item| item.name()).collect();
        assert_eq!(names, vec!["options", "save", "back"]);
        assert_eq!(items[1].label().text(), "save and exit game");

        assert_eq!(items[0].linked_screen(), Some(ScreenId::new(1)));
        assert_eq!(items[1].action(), Some(MenuAction::SaveAndExit));
        assert_eq!(items[2].action(), Some(MenuAction::ReturnToGame));
        assert_eq!(screen.page().selected_index(), 0);
    }
}
