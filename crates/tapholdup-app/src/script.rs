//! Gesture scripts: timed input for the demo.

use std::path::Path;
use std::time::Duration;

use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use tapholdup_core::{ButtonStyle, PointerEvent, StyleError};
use thiserror::Error;

/// Script errors.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Script parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid style: {0}")]
    Style(#[from] StyleError),
    #[error("Step {index} at {at_ms}ms comes before the previous step")]
    OutOfOrder { index: usize, at_ms: u64 },
}

/// What a step does to the button.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptAction {
    Pointer { event: PointerEvent },
    ResetLongHold,
    EnableLongHold { enabled: bool },
}

/// One action at a time offset from the start of the script.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    pub at_ms: u64,
    #[serde(flatten)]
    pub action: ScriptAction,
}

impl ScriptStep {
    pub fn at(&self) -> Duration {
        Duration::from_millis(self.at_ms)
    }
}

/// A button style, its size, and the steps to replay against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureScript {
    #[serde(default)]
    pub style: ButtonStyle,
    #[serde(default = "default_size")]
    pub size: Size,
    pub steps: Vec<ScriptStep>,
}

fn default_size() -> Size {
    Size::new(200.0, 200.0)
}

impl GestureScript {
    /// Load and validate a script from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse and validate a script.
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        let script: Self = serde_json::from_str(json)?;
        script.validate()?;
        Ok(script)
    }

    /// Check the style and that steps are in time order.
    pub fn validate(&self) -> Result<(), ScriptError> {
        self.style.validate()?;
        for (index, pair) in self.steps.windows(2).enumerate() {
            if pair[1].at_ms < pair[0].at_ms {
                return Err(ScriptError::OutOfOrder {
                    index: index + 1,
                    at_ms: pair[1].at_ms,
                });
            }
        }
        Ok(())
    }

    /// Press at the center and release after 100ms.
    pub fn tap() -> Self {
        Self::press_for(100)
    }

    /// Press at the center and release after 900ms.
    pub fn long_hold() -> Self {
        Self::press_for(900)
    }

    fn press_for(millis: u64) -> Self {
        let size = default_size();
        let center = Point::new(size.width / 2.0, size.height / 2.0);
        Self {
            style: ButtonStyle::default(),
            size,
            steps: vec![
                ScriptStep {
                    at_ms: 0,
                    action: ScriptAction::Pointer {
                        event: PointerEvent::Down { position: center },
                    },
                },
                ScriptStep {
                    at_ms: millis,
                    action: ScriptAction::Pointer {
                        event: PointerEvent::Up { position: center },
                    },
                },
            ],
        }
    }

    /// Time of the last step.
    pub fn duration(&self) -> Duration {
        self.steps.last().map(ScriptStep::at).unwrap_or_default()
    }
}
