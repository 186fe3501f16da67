//! Component-local UI state. Each value has a single owning component and is
//! modelled as a tagged variant instead of a flag plus a side payload.

use clap::ValueEnum;
use serde::Serialize;

pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Key {
    Escape,
    Other,
}

/// Modal / hover target: nothing shown, or one entity shown by key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Overlay<K> {
    #[default]
    Closed,
    Showing(K),
}

impl<K: PartialEq> Overlay<K> {
    pub fn open(&mut self, key: K) {
        *self = Overlay::Showing(key);
    }

    pub fn close(&mut self) {
        *self = Overlay::Closed;
    }

    /// Click semantics of the experience timeline: clicking the active node closes it.
    pub fn toggle(&mut self, key: K) {
        if self.is_showing(&key) {
            self.close();
        } else {
            self.open(key);
        }
    }

    pub fn on_key(&mut self, key: Key) {
        if key == Key::Escape {
            self.close();
        }
    }

    pub fn is_showing(&self, key: &K) -> bool {
        matches!(self, Overlay::Showing(k) if k == key)
    }

    pub fn current(&self) -> Option<&K> {
        match self {
            Overlay::Showing(k) => Some(k),
            Overlay::Closed => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Menu {
    #[default]
    Closed,
    Open,
}

impl Menu {
    pub fn toggle(&mut self) {
        *self = match self {
            Menu::Closed => Menu::Open,
            Menu::Open => Menu::Closed,
        };
    }
}

/// "Back to top" affordance driven by the vertical scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BackToTop {
    #[default]
    Hidden,
    Visible,
}

impl BackToTop {
    pub fn for_offset(offset: f64) -> Self {
        if offset > BACK_TO_TOP_THRESHOLD {
            BackToTop::Visible
        } else {
            BackToTop::Hidden
        }
    }

    /// Feeds one scroll sample. Returns true when visibility flipped.
    pub fn observe(&mut self, offset: f64) -> bool {
        let next = Self::for_offset(offset);
        let changed = next != *self;
        *self = next;
        changed
    }
}

/// Everything a rendered page carries besides content: the open modal (keyed
/// by title, or institution on the home page), the experience timeline node,
/// the mobile menu and the back-to-top button.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub modal: Overlay<String>,
    pub timeline: Overlay<usize>,
    pub menu: Menu,
    pub back_to_top: BackToTop,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_open_close() {
        let mut modal: Overlay<String> = Overlay::default();
        assert_eq!(modal.current(), None);

        modal.open("GNN-Based Anomaly Detection".to_string());
        assert!(modal.is_showing(&"GNN-Based Anomaly Detection".to_string()));

        modal.on_key(Key::Other);
        assert!(modal.current().is_some());

        modal.on_key(Key::Escape);
        assert_eq!(modal, Overlay::Closed);
    }

    #[test]
    fn test_overlay_toggle_same_key_closes() {
        let mut hover = Overlay::Closed;
        hover.toggle(2usize);
        assert_eq!(hover, Overlay::Showing(2));
        hover.toggle(1);
        assert_eq!(hover, Overlay::Showing(1));
        hover.toggle(1);
        assert_eq!(hover, Overlay::Closed);
    }

    #[test]
    fn test_menu_toggle() {
        let mut menu = Menu::default();
        menu.toggle();
        assert_eq!(menu, Menu::Open);
        menu.toggle();
        assert_eq!(menu, Menu::Closed);
    }

    #[test]
    fn test_back_to_top_threshold_is_exclusive() {
        assert_eq!(BackToTop::for_offset(300.0), BackToTop::Hidden);
        assert_eq!(BackToTop::for_offset(300.5), BackToTop::Visible);
    }

    #[test]
    fn test_back_to_top_reports_flips_only() {
        let mut button = BackToTop::default();
        assert!(!button.observe(120.0));
        assert!(button.observe(450.0));
        assert!(!button.observe(900.0));
        assert!(button.observe(0.0));
    }
}
