use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::{consts::BACKGROUND, error::LinesquareResult},
    render::backend::FrameRGBA,
};

/// Create `path`'s parent directory if it has one.
pub fn ensure_parent_dir(path: &Path) -> LinesquareResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Write `frame` as an opaque PNG.
pub fn write_png(path: &Path, frame: &FrameRGBA) -> LinesquareResult<()> {
    ensure_parent_dir(path)?;
    let rgba = frame.to_opaque_rgba8(BACKGROUND)?;
    image::save_buffer_with_format(
        path,
        &rgba,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}
