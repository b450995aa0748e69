//! Cyclic slide navigation.
//!
//! [`SlideNavigator`] holds the position inside a fixed sequence of slides.
//! It never looks at slide content, only at the slide count, so the same
//! navigator drives any renderer.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TimelineError};

/// A navigation request coming from the page controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavEvent {
    /// Next arrow.
    Advance,
    /// Previous arrow.
    Retreat,
    /// Indicator dot at the given position.
    JumpTo(usize),
}

/// Render state of one slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideState {
    /// Position in the sequence.
    pub index: usize,
    /// Whether this slide is the visible one.
    pub active: bool,
}

/// Render state of one indicator dot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicator {
    /// Position the dot jumps to when selected.
    pub index: usize,
    /// 1-based label, e.g. "Slide 1".
    pub label: String,
    /// Whether this dot matches the visible slide.
    pub active: bool,
}

/// Current position in a fixed, ordered slide sequence.
///
/// Invariant: when `len > 0`, `current < len`. An empty navigator has no
/// position and ignores `advance`/`retreat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawNavigator")]
pub struct SlideNavigator {
    current: usize,
    len: usize,
}

/// Unchecked wire form of [`SlideNavigator`].
#[derive(Deserialize)]
struct RawNavigator {
    current: usize,
    len: usize,
}

impl TryFrom<RawNavigator> for SlideNavigator {
    type Error = TimelineError;

    fn try_from(raw: RawNavigator) -> Result<Self> {
        // an empty navigator is only valid at its default position
        if raw.len == 0 && raw.current == 0 {
            return Ok(Self::default());
        }
        let mut navigator = Self::new(raw.len);
        navigator.jump_to(raw.current)?;
        Ok(navigator)
    }
}

impl SlideNavigator {
    /// Create a navigator over `len` slides, positioned on the first one.
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no slides.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the visible slide, `None` when there are no slides.
    pub fn current(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.current)
    }

    /// Whether the slide at `index` is the visible one.
    pub fn is_active(&self, index: usize) -> bool {
        self.current() == Some(index)
    }

    /// Move to the next slide, wrapping from the last to the first.
    pub fn advance(&mut self) {
        if self.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.len;
        log::debug!("slideshow: advance to {}/{}", self.current, self.len);
    }

    /// Move to the previous slide, wrapping from the first to the last.
    pub fn retreat(&mut self) {
        if self.is_empty() {
            return;
        }
        self.current = self.current.checked_sub(1).unwrap_or(self.len - 1);
        log::debug!("slideshow: retreat to {}/{}", self.current, self.len);
    }

    /// Move directly to `index`.
    ///
    /// Returns [`TimelineError::OutOfRange`] and leaves the position unchanged
    /// when `index` is not a valid slide position.
    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(TimelineError::out_of_range(index, self.len));
        }
        self.current = index;
        log::debug!("slideshow: jump to {}/{}", self.current, self.len);
        Ok(())
    }

    /// Apply a navigation event in place.
    pub fn apply(&mut self, event: NavEvent) -> Result<()> {
        match event {
            NavEvent::Advance => self.advance(),
            NavEvent::Retreat => self.retreat(),
            NavEvent::JumpTo(index) => self.jump_to(index)?,
        }
        Ok(())
    }

    /// Pure transition: the state reached from `self` by `event`.
    pub fn transition(self, event: NavEvent) -> Result<Self> {
        let mut next = self;
        next.apply(event)?;
        Ok(next)
    }

    /// Active flag for every slide position.
    pub fn slide_states(&self) -> Vec<SlideState> {
        (0..self.len)
            .map(|index| SlideState {
                index,
                active: self.is_active(index),
            })
            .collect()
    }

    /// Indicator dots, one per slide, labeled with 1-based positions.
    pub fn indicators(&self) -> Vec<Indicator> {
        (0..self.len)
            .map(|index| Indicator {
                index,
                label: format!("Slide {}", index + 1),
                active: self.is_active(index),
            })
            .collect()
    }
}
