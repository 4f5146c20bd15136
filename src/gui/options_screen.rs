//! Options screen of the in-game menu
//!
//! Lists the option categories. The category screens themselves belong to the
//! host, so every item here is terminal and reported back as a [`MenuAction`].

use super::menu::{create_label, MenuAction, MenuItem, MenuPage};
use super::screen::Screen;
use crate::backend::MenuBackend;

const ITEMS: [(&str, &str, MenuAction); 5] = [
    ("sound", "sound options", MenuAction::SoundOptions),
    ("video", "video options", MenuAction::VideoOptions),
    ("automap", "automap options", MenuAction::AutomapOptions),
    ("configure", "configure options", MenuAction::ConfigureOptions),
    ("previous", "previous menu", MenuAction::PreviousMenu),
];

pub struct OptionsScreen<B: MenuBackend> {
    page: MenuPage<B>,
}

impl<B: MenuBackend> OptionsScreen<B> {
    pub fn new() -> Self {
        OptionsScreen {
            page: MenuPage::new(),
        }
    }
}

impl<B: MenuBackend> Default for OptionsScreen<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: MenuBackend> Screen<B> for OptionsScreen<B> {
    fn name(&self) -> &'static str {
        "options"
    }

    fn page(&self) -> &MenuPage<B> {
        &self.page
    }

    fn page_mut(&mut self) -> &mut MenuPage<B> {
        &mut self.page
    }

    fn build_items(&self, backend: &mut B) -> Vec<MenuItem<B::Label>> {
        ITEMS
            .iter()
            .map(|&(name, text, action)| MenuItem::terminal(name, create_label(backend, text), action))
            .collect()
    }
}
