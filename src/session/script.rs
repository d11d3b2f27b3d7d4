use std::{path::Path, time::Duration};

use anyhow::Context as _;

use crate::foundation::{
    consts::TICK_MS,
    core::{Canvas, Fps},
    error::{LinesquareError, LinesquareResult},
};

fn default_tick_ms() -> u32 {
    TICK_MS
}

/// A scripted interaction: which frames receive a tap, and for how long to play.
///
/// One frame corresponds to one clock tick.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TapScript {
    /// Host surface size.
    pub canvas: Canvas,
    /// Clock delay in milliseconds; also sets the output frame rate.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u32,
    /// Number of frames to play.
    pub duration: u64,
    /// Frame indices that receive a tap. Several taps on one frame are applied in turn.
    #[serde(default)]
    pub taps: Vec<u64>,
}

impl TapScript {
    /// Parse and validate a JSON script.
    pub fn from_json_str(s: &str) -> LinesquareResult<Self> {
        let script: Self =
            serde_json::from_str(s).map_err(|e| LinesquareError::serde(e.to_string()))?;
        script.validate()?;
        Ok(script)
    }

    /// Read, parse and validate a JSON script file.
    pub fn from_path(path: &Path) -> LinesquareResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read tap script '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_string(&self) -> LinesquareResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| LinesquareError::serde(e.to_string()))
    }

    /// Check canvas, timing and tap placement.
    pub fn validate(&self) -> LinesquareResult<()> {
        self.canvas.validate()?;
        if self.tick_ms == 0 {
            return Err(LinesquareError::validation("tick_ms must be > 0"));
        }
        if self.duration == 0 {
            return Err(LinesquareError::validation("duration must be > 0"));
        }
        if let Some(&late) = self.taps.iter().find(|&&f| f >= self.duration) {
            return Err(LinesquareError::validation(format!(
                "tap at frame {late} is outside duration {}",
                self.duration
            )));
        }
        Ok(())
    }

    /// Output frame rate, one frame per tick.
    pub fn fps(&self) -> LinesquareResult<Fps> {
        Fps::from_tick_ms(self.tick_ms)
    }

    /// Clock delay.
    pub fn tick_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.tick_ms))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/script.rs"]
mod tests;
