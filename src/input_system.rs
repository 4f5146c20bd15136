use crate::backend::MenuBackend;
use crate::gui::{IngameMenu, MenuAction};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

/// Menu commands the host can trigger from input
///
/// The host decides when "select up/down/enter" happened; this enum is that
/// decision, decoupled from the SDL2 events that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    ToggleMenu,
    SelectUp,
    SelectDown,
    Confirm,
    Quit,
}

/// Input context determines which keys reach the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Normal gameplay - only the menu toggle is handled
    Playing,
    /// The overlay menu is open
    Menu,
}

/// What the host has to act on after an event reached the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Quit,
    Action(MenuAction),
}

/// Translates SDL2 events into [`MenuCommand`]s
///
/// The context must match the menu state at the time each event is handled;
/// `dispatch` refreshes it per event so a toggle earlier in the same batch is
/// seen by the keys after it.
pub struct InputSystem {
    pub context: InputContext,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::Playing,
        }
    }

    pub fn update_context(&mut self, menu_open: bool) {
        self.context = if menu_open {
            InputContext::Menu
        } else {
            InputContext::Playing
        };
    }

    /// Applies one event to `menu`
    pub fn dispatch<'a, B: MenuBackend + 'a>(
        &mut self,
        event: &Event,
        menu: &mut IngameMenu<'a, B>,
    ) -> Option<HostEvent> {
        self.update_context(menu.is_open());

        match self.handle_event(event)? {
            MenuCommand::Quit => Some(HostEvent::Quit),
            MenuCommand::ToggleMenu => {
                menu.toggle();
                None
            }
            MenuCommand::SelectUp => {
                menu.on_select_up();
                None
            }
            MenuCommand::SelectDown => {
                menu.on_select_down();
                None
            }
            MenuCommand::Confirm => menu.on_enter().map(HostEvent::Action),
        }
    }

    pub fn handle_event(&self, event: &Event) -> Option<MenuCommand> {
        match event {
            Event::Quit { .. } => Some(MenuCommand::Quit),
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => self.handle_keydown(*key),
            _ => None,
        }
    }

    fn handle_keydown(&self, key: Keycode) -> Option<MenuCommand> {
        match self.context {
            InputContext::Playing => match key {
                Keycode::Escape => Some(MenuCommand::ToggleMenu),
                _ => None,
            },
            InputContext::Menu => match key {
                Keycode::Escape => Some(MenuCommand::ToggleMenu),
                Keycode::Up => Some(MenuCommand::SelectUp),
                Keycode::Down => Some(MenuCommand::SelectDown),
                Keycode::Return | Keycode::Space => Some(MenuCommand::Confirm),
                _ => None,
            },
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}
