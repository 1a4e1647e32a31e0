//! Terminal frame sink for the render loop.

use anyhow::Result;

use crate::core::{FrameSink, SessionSnapshot};
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

/// Draws session snapshots to the terminal from the render thread.
///
/// The sink owns the renderer while a game runs; take it back with
/// [`TerminalSink::into_renderer`] once the render loop is stopped.
pub struct TerminalSink {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
}

impl TerminalSink {
    pub fn new(mut renderer: TerminalRenderer) -> Self {
        renderer.invalidate();
        Self {
            renderer,
            view: GameView::new(),
            fb: FrameBuffer::new(0, 0),
        }
    }

    pub fn into_renderer(self) -> TerminalRenderer {
        self.renderer
    }
}

impl FrameSink for TerminalSink {
    type Error = anyhow::Error;

    fn present(&mut self, frame: &SessionSnapshot) -> Result<()> {
        let (w, h) = TerminalRenderer::viewport_size();
        self.view
            .render_into(frame, Viewport::new(w, h), &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}
