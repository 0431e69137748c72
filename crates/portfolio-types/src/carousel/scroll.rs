//! Carousel scrolling.

use std::cell::Cell;

/// Direction of one navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

impl ScrollDirection {
    /// Signed vertical distance for one step of `item_height` pixels.
    pub fn delta(self, item_height: f64) -> f64 {
        match self {
            Self::Up => -item_height,
            Self::Down => item_height,
        }
    }
}

/// A scroll container the carousel owns a handle to.
pub trait ScrollSurface {
    /// Scroll by `delta_px` relative to the current offset, animated.
    /// Clamping at either end is the surface's business.
    fn scroll_by(&self, delta_px: f64);
}

/// In-memory scroll container with native-style clamping.
#[derive(Debug, Clone)]
pub struct Viewport {
    offset: Cell<f64>,
    item_height: f64,
    item_count: usize,
}

impl Viewport {
    pub fn new(item_height: f64, item_count: usize) -> Self {
        Self { offset: Cell::new(0.0), item_height, item_count }
    }

    pub fn offset(&self) -> f64 {
        self.offset.get()
    }

    /// Largest reachable offset: last item snapped to the top.
    pub fn max_offset(&self) -> f64 {
        self.item_count.saturating_sub(1) as f64 * self.item_height
    }

    /// Index of the item currently snapped into view.
    pub fn index(&self) -> usize {
        Self::index_at(self.offset(), self.item_height, self.item_count)
    }

    /// Snapped item index for a raw scroll offset.
    ///
    /// Rounds to the nearest slot so a half-finished smooth scroll reports
    /// the slot it is about to land on.
    pub fn index_at(offset: f64, item_height: f64, item_count: usize) -> usize {
        if item_count == 0 || item_height <= 0.0 || !offset.is_finite() {
            return 0;
        }
        let slot = (offset.max(0.0) / item_height).round() as usize;
        slot.min(item_count - 1)
    }
}

impl ScrollSurface for Viewport {
    fn scroll_by(&self, delta_px: f64) {
        let next = (self.offset() + delta_px).clamp(0.0, self.max_offset());
        self.offset.set(next);
    }
}
