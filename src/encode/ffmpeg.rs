use std::{
    path::PathBuf,
    process::{Child, ChildStdin, Command, Stdio},
};

use crate::{
    encode::png::ensure_parent_dir,
    foundation::{
        consts::BACKGROUND,
        core::{Fps, Rgba8},
        error::{LinesquareError, LinesquareResult},
    },
    render::backend::{FrameRGBA, flatten_to_opaque_rgba8},
};

/// Settings for an MP4 encode.
#[derive(Clone, Debug)]
pub struct EncodeConfig {
    /// Frame width, must be even.
    pub width: u32,
    /// Frame height, must be even.
    pub height: u32,
    /// Output frame rate.
    pub fps: Fps,
    /// Destination file.
    pub out_path: PathBuf,
    /// Replace an existing output file.
    pub overwrite: bool,
}

impl EncodeConfig {
    /// Reject settings ffmpeg's yuv420p output cannot take.
    pub fn validate(&self) -> LinesquareResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(LinesquareError::validation(
                "encode width/height must be non-zero",
            ));
        }
        if !self.width.is_multiple_of(2) || !self.height.is_multiple_of(2) {
            return Err(LinesquareError::validation(
                "encode width/height must be even (required for yuv420p mp4 output)",
            ));
        }
        Ok(())
    }
}

/// Whether an `ffmpeg` binary can be spawned.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Streams raw RGBA frames into a system `ffmpeg` process.
pub struct FfmpegEncoder {
    cfg: EncodeConfig,
    bg: Rgba8,
    child: Child,
    stdin: Option<ChildStdin>,
    scratch: Vec<u8>,
}

impl FfmpegEncoder {
    /// Validate `cfg` and spawn ffmpeg.
    pub fn new(cfg: EncodeConfig) -> LinesquareResult<Self> {
        cfg.validate()?;
        ensure_parent_dir(&cfg.out_path)?;

        if !cfg.overwrite && cfg.out_path.exists() {
            return Err(LinesquareError::validation(format!(
                "output file '{}' already exists",
                cfg.out_path.display()
            )));
        }

        if !is_ffmpeg_on_path() {
            return Err(LinesquareError::encode(
                "ffmpeg is required for MP4 encoding, but was not found on PATH",
            ));
        }

        let mut cmd = Command::new("ffmpeg");
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        if cfg.overwrite {
            cmd.arg("-y");
        } else {
            cmd.arg("-n");
        }

        cmd.args([
            "-loglevel",
            "error",
            "-f",
            "rawvideo",
            "-pix_fmt",
            "rgba",
            "-s",
            &format!("{}x{}", cfg.width, cfg.height),
            "-r",
            &format!("{}/{}", cfg.fps.num, cfg.fps.den),
            "-i",
            "pipe:0",
            "-an",
            "-c:v",
            "libx264",
            "-pix_fmt",
            "yuv420p",
            "-movflags",
            "+faststart",
        ])
        .arg(&cfg.out_path);

        let mut child = cmd.spawn().map_err(|e| {
            LinesquareError::encode(format!(
                "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
            ))
        })?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| LinesquareError::encode("failed to open ffmpeg stdin"))?;

        tracing::debug!(out = %cfg.out_path.display(), "ffmpeg spawned");
        Ok(Self {
            scratch: vec![0u8; (cfg.width as usize) * (cfg.height as usize) * 4],
            cfg,
            bg: BACKGROUND,
            child,
            stdin: Some(stdin),
        })
    }

    /// Flatten and write one frame.
    pub fn encode_frame(&mut self, frame: &FrameRGBA) -> LinesquareResult<()> {
        if frame.width != self.cfg.width || frame.height != self.cfg.height {
            return Err(LinesquareError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, self.cfg.width, self.cfg.height
            )));
        }

        flatten_to_opaque_rgba8(&mut self.scratch, &frame.data, frame.premultiplied, self.bg)?;

        let Some(stdin) = self.stdin.as_mut() else {
            return Err(LinesquareError::encode("ffmpeg encoder is already finalized"));
        };

        use std::io::Write as _;
        stdin.write_all(&self.scratch).map_err(|e| {
            LinesquareError::encode(format!("failed to write frame to ffmpeg stdin: {e}"))
        })?;
        Ok(())
    }

    /// Close stdin and wait for ffmpeg to exit.
    pub fn finish(mut self) -> LinesquareResult<()> {
        drop(self.stdin.take());

        let output = self.child.wait_with_output().map_err(|e| {
            LinesquareError::encode(format!("failed to wait for ffmpeg to finish: {e}"))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(LinesquareError::encode(format!(
                "ffmpeg exited with status {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
