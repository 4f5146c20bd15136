//! Base Menu Component
//!
//! [`MenuPage`] is the list state every menu screen shares: the ordered
//! items, which one is selected, whether the page is active, and the two
//! spinning selection indicators. It also owns the vertical-stack layout used
//! to render the page.

use super::screen::{Confirmation, ScreenId};
use crate::backend::{AnimatedSprite, Label, MenuBackend, Surface};
use crate::config::{MenuLayout, RowStride, SELECTION_ANIMATION};
use crate::error::MenuError;
use std::fmt;

/// Terminal actions reported to the host when an unlinked item is confirmed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    SaveAndExit,
    ReturnToGame,
    SoundOptions,
    VideoOptions,
    AutomapOptions,
    ConfigureOptions,
    PreviousMenu,
}

impl MenuAction {
    pub fn name(&self) -> &'static str {
        match self {
            MenuAction::SaveAndExit => "save and exit",
            MenuAction::ReturnToGame => "return to game",
            MenuAction::SoundOptions => "sound options",
            MenuAction::VideoOptions => "video options",
            MenuAction::AutomapOptions => "automap options",
            MenuAction::ConfigureOptions => "configure options",
            MenuAction::PreviousMenu => "previous menu",
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What confirming an item does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemTarget {
    /// Switch to another screen
    Screen(ScreenId),
    /// Report an action to the host
    Action(MenuAction),
}

/// A single row of a menu page
#[derive(Debug, Clone)]
pub struct MenuItem<L> {
    name: &'static str,
    label: L,
    target: ItemTarget,
}

impl<L> MenuItem<L> {
    /// An item that opens another screen when confirmed
    pub fn linked(name: &'static str, label: L, screen: ScreenId) -> Self {
        MenuItem {
            name,
            label,
            target: ItemTarget::Screen(screen),
        }
    }

    /// An item that reports `action` when confirmed
    pub fn terminal(name: &'static str, label: L, action: MenuAction) -> Self {
        MenuItem {
            name,
            label,
            target: ItemTarget::Action(action),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn label(&self) -> &L {
        &self.label
    }

    pub fn linked_screen(&self) -> Option<ScreenId> {
        match self.target {
            ItemTarget::Screen(id) => Some(id),
            ItemTarget::Action(_) => None,
        }
    }

    pub fn action(&self) -> Option<MenuAction> {
        match self.target {
            ItemTarget::Action(action) => Some(action),
            ItemTarget::Screen(_) => None,
        }
    }
}

/// Creates a backend label showing `text`
pub fn create_label<B: MenuBackend>(backend: &mut B, text: &str) -> B::Label {
    let mut label = backend.create_label();
    label.set_text(text);
    label
}

struct Indicators<S> {
    left: S,
    right: S,
}

/// Navigation and layout state of one menu screen
///
/// Selection is stored as an index, so exactly one item is selected as long
/// as the page has items. Pages are empty until `load`.
pub struct MenuPage<B: MenuBackend> {
    is_active: bool,
    items: Vec<MenuItem<B::Label>>,
    selected_index: usize,
    total_height: u32,
    indicators: Option<Indicators<B::Sprite>>,
    layout: MenuLayout,
}

impl<B: MenuBackend> MenuPage<B> {
    pub fn new() -> Self {
        MenuPage {
            is_active: false,
            items: Vec::new(),
            selected_index: 0,
            total_height: 0,
            indicators: None,
            layout: MenuLayout::default(),
        }
    }

    /// Installs `items` with the first one selected and loads the indicators
    pub fn load(
        &mut self,
        backend: &mut B,
        screen: &'static str,
        items: Vec<MenuItem<B::Label>>,
    ) -> Result<(), MenuError> {
        if items.is_empty() {
            return Err(MenuError::EmptyScreen(screen));
        }

        let left = load_indicator(backend)?;
        let right = load_indicator(backend)?;

        self.total_height = items.iter().map(|item| item.label.size().1).sum();
        self.items = items;
        self.selected_index = 0;
        self.layout = backend.layout();
        self.indicators = Some(Indicators { left, right });

        Ok(())
    }

    /// Drops the items and indicators, returning the page to its unloaded state
    pub fn unload(&mut self) {
        self.is_active = false;
        self.items.clear();
        self.selected_index = 0;
        self.total_height = 0;
        self.indicators = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.indicators.is_some()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    pub fn items(&self) -> &[MenuItem<B::Label>] {
        &self.items
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_item(&self) -> Option<&MenuItem<B::Label>> {
        self.items.get(self.selected_index)
    }

    pub fn total_height(&self) -> u32 {
        self.total_height
    }

    /// Move selection down (stops at the last item)
    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.items.len() {
            self.selected_index += 1;
        }
    }

    /// Move selection up (stops at the first item)
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn reset(&mut self) {
        self.selected_index = 0;
    }

    /// Confirms the selected item
    ///
    /// A linked item deactivates this page and resets its selection before
    /// the target screen is returned; the caller activates the target.
    pub fn confirm(&mut self) -> Confirmation {
        let target = match self.selected_item() {
            Some(item) => item.target,
            None => return Confirmation::Ignored,
        };

        match target {
            ItemTarget::Screen(next) => {
                self.is_active = false;
                self.reset();
                Confirmation::Transition(next)
            }
            ItemTarget::Action(action) => Confirmation::Action(action),
        }
    }

    pub fn advance(&mut self, elapsed: f64) {
        if let Some(indicators) = self.indicators.as_mut() {
            indicators.left.advance(elapsed);
            indicators.right.advance(elapsed);
        }
    }

    /// Renders the items as a vertical stack centered on `surface`
    pub fn render(&mut self, surface: &mut B::Surface) -> Result<(), String> {
        if !self.is_active {
            return Ok(());
        }
        let Some(indicators) = self.indicators.as_mut() else {
            return Ok(());
        };

        let (surface_width, surface_height) = surface.size();
        let surface_width = surface_width as i32;
        let start_y = (surface_height as i32 - self.total_height as i32) / 2;
        let (_, indicator_height) = indicators.left.current_frame_size();
        let first_height = self
            .items
            .first()
            .map(|item| item.label.size().1)
            .unwrap_or(0);
        let margin = self.layout.indicator_margin;

        let mut row_y = start_y;
        for (i, item) in self.items.iter_mut().enumerate() {
            let (label_width, label_height) = item.label.size();
            let row_x = (surface_width - label_width as i32) / 2;

            item.label.set_position(row_x, row_y);
            item.label.render(surface)?;

            if i == self.selected_index {
                let indicator_y = row_y + indicator_height as i32;
                indicators.left.set_position(margin, indicator_y);
                indicators.right.set_position(surface_width - margin, indicator_y);
            }

            let stride = match self.layout.row_stride {
                RowStride::PerItem => label_height,
                RowStride::FirstItem => first_height,
            };
            row_y += stride as i32;
        }

        indicators.left.render(surface)?;
        indicators.right.render(surface)?;

        Ok(())
    }
}

impl<B: MenuBackend> Default for MenuPage<B> {
    fn default() -> Self {
        Self::new()
    }
}

fn load_indicator<B: MenuBackend>(backend: &mut B) -> Result<B::Sprite, MenuError> {
    let mut sprite = backend.load_sprite(SELECTION_ANIMATION)?;
    sprite.play_forward();
    sprite.set_blend(true);
    Ok(sprite)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::testing::{Drawn, TestBackend, TestSurface, LABEL_HEIGHT, SPRITE_SIZE};

    fn loaded_page(backend: &mut TestBackend, texts: &[&'static str]) -> MenuPage<TestBackend> {
        let items = texts
            .iter()
            .map(|text| MenuItem::terminal(*text, create_label(backend, text), MenuAction::ReturnToGame))
            .collect();
        let mut page = MenuPage::new();
        page.load(backend, "test", items).unwrap();
        page
    }

    #[test]
    fn test_load_selects_first_and_sums_height() {
        let mut backend = TestBackend::new().with_label_height("b", 35);
        let page = loaded_page(&mut backend, &["a", "b", "c"]);

        assert!(page.is_loaded());
        assert!(!page.is_active());
        assert_eq!(page.selected_index(), 0);
        assert_eq!(page.total_height(), LABEL_HEIGHT * 2 + 35);
        assert_eq!(backend.sprites_loaded, 2);
    }

    #[test]
    fn test_load_rejects_empty_item_list() {
        let mut backend = TestBackend::new();
        let mut page: MenuPage<TestBackend> = MenuPage::new();
        let result = page.load(&mut backend, "empty", Vec::new());
        assert!(matches!(result, Err(MenuError::EmptyScreen("empty"))));
    }

    #[test]
    fn test_load_propagates_sprite_failure() {
        let mut backend = TestBackend {
            missing_sprites: true,
            ..TestBackend::new()
        };
        let label = create_label(&mut backend, "a");
        let mut page: MenuPage<TestBackend> = MenuPage::new();
        let result = page.load(
            &mut backend,
            "root",
            vec![MenuItem::terminal("a", label, MenuAction::ReturnToGame)],
        );

        assert!(matches!(result, Err(MenuError::AssetLoadFailed { .. })));
        assert!(!page.is_loaded());
    }

    #[test]
    fn test_unload_clears_page() {
        let mut backend = TestBackend::new();
        let mut page = loaded_page(&mut backend, &["a", "b"]);
        page.set_active(true);
        page.select_next();

        page.unload();
        assert!(!page.is_loaded());
        assert!(!page.is_active());
        assert!(page.items().is_empty());
        assert_eq!(page.selected_index(), 0);
        assert_eq!(page.total_height(), 0);
        assert_eq!(page.confirm(), Confirmation::Ignored);
    }

    #[test]
    fn test_indicators_play_with_blend() {
        let mut backend = TestBackend::new();
        let page = loaded_page(&mut backend, &["a"]);
        let indicators = page.indicators.as_ref().unwrap();
        assert!(indicators.left.playing && indicators.left.blend);
        assert!(indicators.right.playing && indicators.right.blend);
    }

    #[test]
    fn test_selection_clamps_at_edges() {
        let mut backend = TestBackend::new();
        let mut page = loaded_page(&mut backend, &["a", "b", "c"]);

        page.select_previous();
        assert_eq!(page.selected_index(), 0);

        page.select_next();
        page.select_next();
        assert_eq!(page.selected_index(), 2);

        page.select_next();
        assert_eq!(page.selected_index(), 2);
    }

    #[test]
    fn test_next_then_previous_returns_to_same_item() {
        let mut backend = TestBackend::new();
        let mut page = loaded_page(&mut backend, &["a", "b", "c", "d"]);

        page.select_next();
        assert_eq!(page.selected_item().unwrap().name(), "b");
        page.select_next();
        page.select_previous();
        assert_eq!(page.selected_item().unwrap().name(), "b");
        page.select_previous();
        page.select_next();
        assert_eq!(page.selected_item().unwrap().name(), "b");
    }

    #[test]
    fn test_unloaded_page_navigation_is_noop() {
        let mut page: MenuPage<TestBackend> = MenuPage::new();
        page.select_next();
        page.select_previous();
        assert_eq!(page.selected_index(), 0);
        assert!(page.selected_item().is_none());
        assert_eq!(page.confirm(), Confirmation::Ignored);
    }

    #[test]
    fn test_confirm_linked_item_deactivates_and_resets() {
        let mut backend = TestBackend::new();
        let items = vec![
            MenuItem::terminal("a", create_label(&mut backend, "a"), MenuAction::SaveAndExit),
            MenuItem::linked("b", create_label(&mut backend, "b"), ScreenId::new(3)),
        ];
        let mut page = MenuPage::new();
        page.load(&mut backend, "test", items).unwrap();
        page.set_active(true);

        page.select_next();
        assert_eq!(page.confirm(), Confirmation::Transition(ScreenId::new(3)));
        assert!(!page.is_active());
        assert_eq!(page.selected_index(), 0);
    }

    #[test]
    fn test_confirm_terminal_item_keeps_state() {
        let mut backend = TestBackend::new();
        let items = vec![
            MenuItem::terminal("a", create_label(&mut backend, "a"), MenuAction::SaveAndExit),
            MenuItem::terminal("b", create_label(&mut backend, "b"), MenuAction::ReturnToGame),
        ];
        let mut page = MenuPage::new();
        page.load(&mut backend, "test", items).unwrap();
        page.set_active(true);
        page.select_next();

        assert_eq!(page.confirm(), Confirmation::Action(MenuAction::ReturnToGame));
        assert!(page.is_active());
        assert_eq!(page.selected_index(), 1);
    }

    #[test]
    fn test_advance_reaches_both_indicators() {
        let mut backend = TestBackend::new();
        let mut page = loaded_page(&mut backend, &["a"]);
        page.advance(0.25);
        page.advance(0.25);

        let indicators = page.indicators.as_ref().unwrap();
        assert_eq!(indicators.left.elapsed, 0.5);
        assert_eq!(indicators.right.elapsed, 0.5);
        assert_eq!(page.selected_index(), 0);
    }

    #[test]
    fn test_inactive_page_renders_nothing() {
        let mut backend = TestBackend::new();
        let mut page = loaded_page(&mut backend, &["a", "b"]);
        let mut surface = TestSurface::new(640, 360);

        page.render(&mut surface).unwrap();
        assert!(surface.drawn.is_empty());
    }

    #[test]
    fn test_render_centers_stack_and_tracks_selection() {
        let mut backend = TestBackend::new();
        let mut page = loaded_page(&mut backend, &["ab", "cdef", "g"]);
        page.set_active(true);
        page.select_next();

        let mut surface = TestSurface::new(640, 360);
        page.render(&mut surface).unwrap();

        // 3 rows of 20px centered in 360px start at 150
        assert_eq!(
            surface.labels(),
            vec![
                ("ab".to_string(), 310, 150),
                ("cdef".to_string(), 300, 170),
                ("g".to_string(), 315, 190),
            ]
        );

        let indicator_y = 170 + SPRITE_SIZE.1 as i32;
        assert_eq!(surface.sprites(), vec![(100, indicator_y), (540, indicator_y)]);
        assert!(matches!(surface.drawn.last(), Some(Drawn::Sprite { .. })));
    }

    #[test]
    fn test_render_per_item_stride() {
        let mut backend = TestBackend::new().with_label_height("tall", 40);
        let mut page = loaded_page(&mut backend, &["a", "tall", "b"]);
        page.set_active(true);

        let mut surface = TestSurface::new(200, 200);
        page.render(&mut surface).unwrap();

        // total height 80, start at 60
        let ys: Vec<i32> = surface.labels().iter().map(|(_, _, y)| *y).collect();
        assert_eq!(ys, vec![60, 80, 120]);
    }

    #[test]
    fn test_render_first_item_stride() {
        let mut backend = TestBackend::new().with_label_height("tall", 40);
        backend.layout = MenuLayout {
            row_stride: RowStride::FirstItem,
            indicator_margin: 10,
        };
        let mut page = loaded_page(&mut backend, &["a", "tall", "b"]);
        page.set_active(true);
        page.select_next();
        page.select_next();

        let mut surface = TestSurface::new(200, 200);
        page.render(&mut surface).unwrap();

        let ys: Vec<i32> = surface.labels().iter().map(|(_, _, y)| *y).collect();
        assert_eq!(ys, vec![60, 80, 100]);

        let indicator_y = 100 + SPRITE_SIZE.1 as i32;
        assert_eq!(surface.sprites(), vec![(10, indicator_y), (190, indicator_y)]);
    }

    #[test]
    fn test_menu_action_display() {
        assert_eq!(MenuAction::SaveAndExit.to_string(), "save and exit");
        assert_eq!(MenuAction::PreviousMenu.name(), "previous menu");
    }
}
