use crate::{
    foundation::error::LinesquareResult,
    render::{
        backend::FrameRGBA,
        cpu::CpuBackend,
        surface::{DisplayList, RecordingSurface},
    },
    widget::scene::Scene,
};

/// Record the scene's current state as a display list.
pub fn record_scene(scene: &Scene) -> DisplayList {
    let mut surface = RecordingSurface::new(scene.canvas());
    scene.render(&mut surface);
    surface.finish()
}

/// Record and rasterize the scene's current state.
pub fn render_frame(scene: &Scene, backend: &mut CpuBackend) -> LinesquareResult<FrameRGBA> {
    backend.render(&record_scene(scene))
}
