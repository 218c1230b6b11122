//! Gallery lightbox state machine.
//!
//! A single cursor over a fixed image list. Stepping wraps in both
//! directions; keyboard bindings are live only while the overlay is open.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{SiteError, SiteResult};

/// One gallery image as harvested from the page markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

/// Keys the lightbox responds to while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
}

/// View effects emitted by lightbox transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxEffect {
    /// Swap the displayed image.
    ShowImage { src: String, alt: String },
    SetOverlayVisible(bool),
    /// Page scrolling is locked while the overlay is up.
    SetScrollLock(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Closed,
    Open { cursor: usize },
}

/// The gallery overlay. The image list is fixed at initialization; the
/// cursor is always a valid index while open.
#[derive(Debug)]
pub struct Lightbox {
    images: Vec<ImageRef>,
    state: State,
}

impl Lightbox {
    pub fn new(images: Vec<ImageRef>) -> Self {
        Lightbox {
            images,
            state: State::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, State::Open { .. })
    }

    /// Index of the displayed image, if open.
    pub fn cursor(&self) -> Option<usize> {
        match self.state {
            State::Open { cursor } => Some(cursor),
            State::Closed => None,
        }
    }

    /// A thumbnail was clicked. Rejected when the gallery is empty or the
    /// index is out of range.
    pub fn open(&mut self, index: usize) -> SiteResult<Vec<LightboxEffect>> {
        if self.images.is_empty() {
            return Err(SiteError::EmptyGallery);
        }
        if index >= self.images.len() {
            return Err(SiteError::UnknownImage(index));
        }

        trace!(index, "lightbox opened");
        self.state = State::Open { cursor: index };
        Ok(vec![
            self.show_current(),
            LightboxEffect::SetOverlayVisible(true),
            LightboxEffect::SetScrollLock(true),
        ])
    }

    /// Close trigger: the close button, a background click, or Escape.
    pub fn close(&mut self) -> Vec<LightboxEffect> {
        match self.state {
            State::Closed => vec![],
            State::Open { .. } => {
                self.state = State::Closed;
                vec![
                    LightboxEffect::SetOverlayVisible(false),
                    LightboxEffect::SetScrollLock(false),
                ]
            }
        }
    }

    /// Step forward, wrapping past the last image.
    pub fn next(&mut self) -> Vec<LightboxEffect> {
        self.step(|cursor, len| (cursor + 1) % len)
    }

    /// Step backward, wrapping past the first image.
    pub fn prev(&mut self) -> Vec<LightboxEffect> {
        self.step(|cursor, len| (cursor + len - 1) % len)
    }

    /// Keyboard input. Inactive while closed.
    pub fn key_pressed(&mut self, key: Key) -> Vec<LightboxEffect> {
        if !self.is_open() {
            return vec![];
        }
        match key {
            Key::Escape => self.close(),
            Key::ArrowLeft => self.prev(),
            Key::ArrowRight => self.next(),
        }
    }

    fn step(&mut self, advance: impl Fn(usize, usize) -> usize) -> Vec<LightboxEffect> {
        match self.state {
            State::Closed => vec![],
            State::Open { cursor } => {
                let cursor = advance(cursor, self.images.len());
                self.state = State::Open { cursor };
                vec![self.show_current()]
            }
        }
    }

    fn show_current(&self) -> LightboxEffect {
        let State::Open { cursor } = self.state else {
            unreachable!("show_current is only called while open");
        };
        let image = &self.images[cursor];
        LightboxEffect::ShowImage {
            src: image.src.clone(),
            alt: image.alt.clone(),
        }
    }
}
