//! Menu screens
//!
//! A screen is one page of the in-game menu. Every variant keeps its state in
//! a [`MenuPage`] and only decides which items it shows; the default methods
//! of [`Screen`] forward navigation, animation and rendering to that page.

use super::menu::{MenuAction, MenuItem, MenuPage};
use crate::backend::MenuBackend;
use crate::error::MenuError;

/// Position of a screen in the controller's screen list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenId(usize);

impl ScreenId {
    /// The screen shown whenever the menu opens
    pub const ROOT: ScreenId = ScreenId(0);

    pub const fn new(index: usize) -> Self {
        ScreenId(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

/// Result of confirming the selected item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// The screen deactivated itself; the target screen should become active
    Transition(ScreenId),
    /// A terminal item was confirmed
    Action(MenuAction),
    /// Nothing to confirm (screen not loaded)
    Ignored,
}

pub trait Screen<B: MenuBackend> {
    /// Stable screen name used in logs and errors
    fn name(&self) -> &'static str;

    fn page(&self) -> &MenuPage<B>;

    fn page_mut(&mut self) -> &mut MenuPage<B>;

    /// Builds this screen's fixed item list, in display order
    fn build_items(&self, backend: &mut B) -> Vec<MenuItem<B::Label>>;

    fn load(&mut self, backend: &mut B) -> Result<(), MenuError> {
        let items = self.build_items(backend);
        let name = self.name();
        self.page_mut().load(backend, name, items)
    }

    fn unload(&mut self) {
        self.page_mut().unload();
    }

    fn advance(&mut self, elapsed: f64) {
        self.page_mut().advance(elapsed);
    }

    fn is_active(&self) -> bool {
        self.page().is_active()
    }

    fn set_active(&mut self, active: bool) {
        self.page_mut().set_active(active);
    }

    fn select_next(&mut self) {
        self.page_mut().select_next();
    }

    fn select_previous(&mut self) {
        self.page_mut().select_previous();
    }

    fn confirm(&mut self) -> Confirmation {
        self.page_mut().confirm()
    }

    fn render(&mut self, surface: &mut B::Surface) -> Result<(), String> {
        self.page_mut().render(surface)
    }

    fn reset(&mut self) {
        self.page_mut().reset();
    }
}
