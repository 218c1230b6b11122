//! Site chrome: the mobile navigation menu, smooth scrolling, and the
//! header scroll shadow.

/// Fixed header height compensated for when scrolling to an anchor.
const HEADER_OFFSET: f64 = 80.0;

/// Scroll depth past which the header casts its raised shadow.
const ELEVATION_THRESHOLD: f64 = 10.0;

/// View effects for the mobile menu. The pair is always emitted together
/// so the visual state and the assistive-technology state cannot drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEffect {
    /// Show or hide the slide-out link list.
    SetMenuOpen(bool),
    /// Mirror the state on the toggle button's `aria-expanded`.
    SetAriaExpanded(bool),
}

/// The hamburger menu. Opens on toggle; closes on toggle, on following a
/// link, or on a click outside the menu.
#[derive(Debug, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> Vec<NavEffect> {
        self.open = !self.open;
        self.emit()
    }

    /// A nav link was followed; the menu collapses behind it.
    pub fn link_clicked(&mut self) -> Vec<NavEffect> {
        self.close()
    }

    /// A click landed outside both the menu and its toggle.
    pub fn outside_clicked(&mut self) -> Vec<NavEffect> {
        self.close()
    }

    fn close(&mut self) -> Vec<NavEffect> {
        if !self.open {
            return vec![];
        }
        self.open = false;
        self.emit()
    }

    fn emit(&self) -> Vec<NavEffect> {
        vec![
            NavEffect::SetMenuOpen(self.open),
            NavEffect::SetAriaExpanded(self.open),
        ]
    }
}

/// Destination page offset for a smooth scroll to an anchor, given the
/// anchor's viewport-relative top and the current page scroll offset.
pub fn scroll_target(element_top: f64, page_offset: f64) -> f64 {
    element_top + page_offset - HEADER_OFFSET
}

/// Header shadow elevation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Elevation {
    Resting,
    Raised,
}

/// Elevation for the current scroll position.
pub fn header_elevation(scroll_y: f64) -> Elevation {
    if scroll_y > ELEVATION_THRESHOLD {
        Elevation::Raised
    } else {
        Elevation::Resting
    }
}
