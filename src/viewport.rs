//! Zoom commands issued by the page against whatever map engine is mounted.
//! Nothing here holds state; limits such as max zoom belong to the engine.

pub trait Viewport {
    fn zoom_in(&self);
    fn zoom_out(&self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportCommand {
    ZoomIn,
    ZoomOut,
}

impl ViewportCommand {
    pub fn apply(self, viewport: &dyn Viewport) {
        match self {
            ViewportCommand::ZoomIn => viewport.zoom_in(),
            ViewportCommand::ZoomOut => viewport.zoom_out(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewportCommand::ZoomIn => "+",
            ViewportCommand::ZoomOut => "\u{2212}",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ViewportCommand::ZoomIn => "Zoom in",
            ViewportCommand::ZoomOut => "Zoom out",
        }
    }
}
