//! Scroll-derived navigation state.

use crate::options::NavigationOptions;

/// UI flags recomputed from the window's vertical scroll offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// Show the back-to-top button.
    pub back_to_top_visible: bool,
    /// Draw the navbar with its solid background.
    pub nav_scrolled: bool,
}

impl ScrollState {
    /// Derive the flags for scroll offset `y` (CSS pixels).
    ///
    /// The back-to-top boundary is inclusive: with the default 300 px
    /// threshold, 299 hides the button and 300 shows it.
    #[must_use]
    pub fn from_offset(y: f64, options: &NavigationOptions) -> Self {
        Self {
            back_to_top_visible: y >= options.back_to_top_offset,
            nav_scrolled: y > options.solid_nav_offset,
        }
    }

    /// CSS class list for the navigation bar.
    #[must_use]
    pub const fn nav_class(self) -> &'static str {
        if self.nav_scrolled {
            "navbar scrolled"
        } else {
            "navbar"
        }
    }

    /// CSS class list for the back-to-top button.
    #[must_use]
    pub const fn back_to_top_class(self) -> &'static str {
        if self.back_to_top_visible {
            "back-to-top visible"
        } else {
            "back-to-top"
        }
    }
}

/// Mobile navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Whether the menu is expanded.
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    /// Flip the menu open or closed (menu button).
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close the menu (a navigation link was followed).
    pub fn close(&mut self) {
        self.open = false;
    }

    /// CSS class list for the link container.
    #[must_use]
    pub const fn links_class(self) -> &'static str {
        if self.open {
            "nav-links open"
        } else {
            "nav-links"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_to_top_boundary_is_inclusive() {
        let opts = NavigationOptions::default();
        assert!(!ScrollState::from_offset(0.0, &opts).back_to_top_visible);
        assert!(!ScrollState::from_offset(299.0, &opts).back_to_top_visible);
        assert!(!ScrollState::from_offset(299.9, &opts).back_to_top_visible);
        assert!(ScrollState::from_offset(300.0, &opts).back_to_top_visible);
        assert!(ScrollState::from_offset(1200.0, &opts).back_to_top_visible);
        assert_eq!(
            ScrollState::from_offset(299.0, &opts).back_to_top_class(),
            "back-to-top"
        );
        assert_eq!(
            ScrollState::from_offset(300.0, &opts).back_to_top_class(),
            "back-to-top visible"
        );
    }

    #[test]
    fn navbar_turns_solid_past_threshold() {
        let opts = NavigationOptions::default();
        let top = ScrollState::from_offset(50.0, &opts);
        assert!(!top.nav_scrolled);
        assert_eq!(top.nav_class(), "navbar");
        let scrolled = ScrollState::from_offset(51.0, &opts);
        assert!(scrolled.nav_scrolled);
        assert_eq!(scrolled.nav_class(), "navbar scrolled");
    }

    #[test]
    fn custom_threshold() {
        let opts = NavigationOptions {
            back_to_top_offset: 500.0,
            ..NavigationOptions::default()
        };
        assert!(!ScrollState::from_offset(300.0, &opts).back_to_top_visible);
        assert!(ScrollState::from_offset(500.0, &opts).back_to_top_visible);
    }

    #[test]
    fn menu_toggles_and_closes() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.links_class(), "nav-links open");
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }
}
