//! Slide-over navigation drawer

use super::screen::Screen;

/// Drawer visibility and menu cursor
#[derive(Debug, Clone, Default)]
pub struct Drawer {
    open: bool,
    highlight: usize,
}

impl Drawer {
    /// Whether the drawer is visible
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Show the drawer with the cursor on `current` (if it is a menu entry)
    pub fn open(&mut self, current: Screen) {
        self.open = true;
        self.highlight = Screen::menu()
            .iter()
            .position(|s| *s == current)
            .unwrap_or(0);
    }

    /// Hide the drawer
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Open if closed, close if open
    pub fn toggle(&mut self, current: Screen) {
        if self.open {
            self.close();
        } else {
            self.open(current);
        }
    }

    /// Cursor position in [`Screen::menu`]
    pub fn highlight(&self) -> usize {
        self.highlight
    }

    /// Screen under the cursor
    pub fn highlighted(&self) -> Screen {
        Screen::menu()[self.highlight.min(Screen::menu().len() - 1)]
    }

    /// Move the cursor down (wraps)
    pub fn next(&mut self) {
        self.highlight = (self.highlight + 1) % Screen::menu().len();
    }

    /// Move the cursor up (wraps)
    pub fn prev(&mut self) {
        let len = Screen::menu().len();
        self.highlight = (self.highlight + len - 1) % len;
    }

    /// Put the cursor on a specific screen
    pub fn point_at(&mut self, screen: Screen) {
        if let Some(idx) = Screen::menu().iter().position(|s| *s == screen) {
            self.highlight = idx;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_points_at_current_screen() {
        let mut drawer = Drawer::default();
        drawer.open(Screen::Chat);
        assert!(drawer.is_open());
        assert_eq!(drawer.highlighted(), Screen::Chat);

        drawer.close();
        drawer.open(Screen::Auth);
        assert_eq!(drawer.highlighted(), Screen::Feed);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut drawer = Drawer::default();
        drawer.open(Screen::Feed);
        drawer.prev();
        assert_eq!(drawer.highlighted(), Screen::Search);
        drawer.next();
        assert_eq!(drawer.highlighted(), Screen::Feed);
    }

    #[test]
    fn test_toggle() {
        let mut drawer = Drawer::default();
        drawer.toggle(Screen::Feed);
        assert!(drawer.is_open());
        drawer.toggle(Screen::Feed);
        assert!(!drawer.is_open());
    }
}
