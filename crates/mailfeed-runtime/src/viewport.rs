use std::cell::Cell;

/// Scroll position of the rendering surface.
///
/// Content height is not part of this: the engine derives it from the
/// rendered feed.
pub trait Viewport {
    fn scroll_top(&self) -> f64;
    fn viewport_height(&self) -> f64;
}

/// A viewport with no backing GUI, positioned by hand
#[derive(Debug, Default)]
pub struct StaticViewport {
    scroll_top: Cell<f64>,
    height: Cell<f64>,
}

impl StaticViewport {
    pub fn new(height: f64) -> Self {
        Self {
            scroll_top: Cell::new(0.0),
            height: Cell::new(height),
        }
    }

    pub fn scroll_to(&self, top: f64) {
        self.scroll_top.set(top.max(0.0));
    }

    pub fn resize(&self, height: f64) {
        self.height.set(height.max(0.0));
    }
}

impl Viewport for StaticViewport {
    fn scroll_top(&self) -> f64 {
        self.scroll_top.get()
    }

    fn viewport_height(&self) -> f64 {
        self.height.get()
    }
}
