//! In-game menu controller
//!
//! [`IngameMenu`] owns every screen of the overlay menu and is the only thing
//! the host game talks to. It has two states:
//!
//! - `Closed`: advance/render/input do nothing and no screen is active
//! - `Open`: exactly one screen is active and receives input
//!
//! The menu only opens after a successful [`IngameMenu::load`].
//!
//! Confirming a linked item moves activation forward along the screen tree.
//! There is no way back except closing the menu: every reopen starts on the
//! root screen with its first item selected.
//!
//! # Example
//!
//! ```ignore
//! let mut menu = IngameMenu::standard();
//! menu.load(&mut backend)?;
//!
//! // Escape pressed
//! menu.toggle();
//!
//! // Arrow keys / Return
//! menu.on_select_down();
//! if let Some(action) = menu.on_enter() {
//!     match action {
//!         MenuAction::ReturnToGame => menu.toggle(),
//!         _ => { /* ... */ }
//!     }
//! }
//!
//! // Every frame
//! menu.advance(elapsed)?;
//! menu.render(&mut canvas)?;
//! ```

use super::menu::MenuAction;
use super::options_screen::OptionsScreen;
use super::root_screen::RootScreen;
use super::screen::{Confirmation, Screen, ScreenId};
use crate::backend::MenuBackend;
use crate::error::MenuError;

/// Index of the options screen in [`IngameMenu::standard`]
pub const OPTIONS_SCREEN: ScreenId = ScreenId::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    Open,
}

pub struct IngameMenu<'a, B: MenuBackend> {
    state: MenuState,
    is_loaded: bool,
    screens: Vec<Box<dyn Screen<B> + 'a>>,
}

impl<'a, B: MenuBackend + 'a> IngameMenu<'a, B> {
    /// Creates a closed menu over `screens`; the first one is the root
    pub fn new(screens: Vec<Box<dyn Screen<B> + 'a>>) -> Self {
        IngameMenu {
            state: MenuState::Closed,
            is_loaded: false,
            screens,
        }
    }

    /// The root and options screens
    pub fn standard() -> Self {
        let screens: Vec<Box<dyn Screen<B> + 'a>> = vec![
            Box::new(RootScreen::<B>::new(OPTIONS_SCREEN)),
            Box::new(OptionsScreen::<B>::new()),
        ];
        Self::new(screens)
    }

    /// Loads every screen, stopping at the first failure
    ///
    /// On failure every screen is unloaded again and the menu stays closed,
    /// so a partly built menu can never be opened.
    pub fn load(&mut self, backend: &mut B) -> Result<(), MenuError> {
        self.is_loaded = false;
        self.state = MenuState::Closed;
        for screen in &mut self.screens {
            screen.set_active(false);
        }

        if let Err(err) = self.load_screens(backend) {
            for screen in &mut self.screens {
                screen.unload();
            }
            log::error!("In-game menu failed to load: {}", err);
            return Err(err);
        }

        self.is_loaded = true;
        log::info!("In-game menu loaded ({} screens)", self.screens.len());
        Ok(())
    }

    fn load_screens(&mut self, backend: &mut B) -> Result<(), MenuError> {
        if self.screens.is_empty() {
            return Err(MenuError::NoScreens);
        }

        for screen in &mut self.screens {
            screen.load(backend)?;
            log::debug!(
                "Loaded menu screen '{}' ({} items)",
                screen.name(),
                screen.page().items().len()
            );
        }
        self.check_links()
    }

    fn check_links(&self) -> Result<(), MenuError> {
        for screen in &self.screens {
            for item in screen.page().items() {
                let Some(target) = item.linked_screen() else {
                    continue;
                };
                if target.index() >= self.screens.len() {
                    return Err(MenuError::UnknownScreen {
                        screen: screen.name(),
                        item: item.name().to_string(),
                        target: target.index(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    /// Opens or closes the menu
    ///
    /// Opening resets every screen and activates only the root. An unloaded
    /// menu never opens.
    pub fn toggle(&mut self) {
        if !self.is_loaded {
            log::warn!("In-game menu toggled before it was loaded");
            return;
        }

        self.state = match self.state {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };

        match self.state {
            MenuState::Open => self.reset(),
            MenuState::Closed => {
                for screen in &mut self.screens {
                    screen.set_active(false);
                }
            }
        }

        log::debug!("In-game menu {:?}", self.state);
    }

    fn reset(&mut self) {
        for (i, screen) in self.screens.iter_mut().enumerate() {
            screen.reset();
            screen.set_active(i == ScreenId::ROOT.index());
        }
    }

    /// Advances every screen's animations while the menu is open
    pub fn advance(&mut self, elapsed: f64) -> Result<(), MenuError> {
        if !self.is_loaded {
            return Err(MenuError::NotLoaded);
        }
        if !self.is_open() {
            return Ok(());
        }

        for screen in &mut self.screens {
            screen.advance(elapsed);
        }
        Ok(())
    }

    /// Renders the menu; inactive screens draw nothing
    pub fn render(&mut self, surface: &mut B::Surface) -> Result<(), String> {
        if !self.is_open() {
            return Ok(());
        }

        for screen in &mut self.screens {
            screen.render(surface)?;
        }
        Ok(())
    }

    pub fn on_select_down(&mut self) {
        if let Some(screen) = self.active_screen_mut() {
            screen.select_next();
        }
    }

    pub fn on_select_up(&mut self) {
        if let Some(screen) = self.active_screen_mut() {
            screen.select_previous();
        }
    }

    /// Confirms the selected item of the active screen
    ///
    /// Returns the action of a confirmed terminal item. Linked items switch
    /// the active screen and return `None`.
    pub fn on_enter(&mut self) -> Option<MenuAction> {
        let current = self.active_screen()?;
        let from = self.screens[current.index()].name();

        let confirmation = self.screens[current.index()].confirm();
        match confirmation {
            Confirmation::Transition(next) => {
                match self.screens.get_mut(next.index()) {
                    Some(screen) => {
                        screen.set_active(true);
                        log::debug!("Menu screen '{}' -> '{}'", from, screen.name());
                    }
                    None => {
                        log::error!("Menu screen '{}' links to missing screen {}", from, next.index());
                        self.screens[current.index()].set_active(true);
                    }
                }
                None
            }
            Confirmation::Action(action) => {
                log::info!("Menu action: {}", action);
                Some(action)
            }
            Confirmation::Ignored => None,
        }
    }

    /// The screen currently receiving input, if the menu is open
    pub fn active_screen(&self) -> Option<ScreenId> {
        self.screens
            .iter()
            .position(|screen| screen.is_active())
            .map(ScreenId::new)
    }

    fn active_screen_mut(&mut self) -> Option<&mut Box<dyn Screen<B> + 'a>> {
        self.screens.iter_mut().find(|screen| screen.is_active())
    }

    pub fn screen(&self, id: ScreenId) -> Option<&(dyn Screen<B> + 'a)> {
        self.screens.get(id.index()).map(|screen| screen.as_ref())
    }

    pub fn screen_count(&self) -> usize {
        self.screens.len()
    }
}
