//! The `(configuration ...)` block at the top of every script.

use crate::foundation::error::{BoardcastError, BoardcastResult};
use crate::script::sexpr::{Value, parse_plist};

/// Frames per second used when the script does not specify one.
pub const DEFAULT_FPS: u32 = 60;

/// Space name used when the script does not specify one.
pub const DEFAULT_START_SPACE: &str = "start";

/// Render configuration for one input file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Configuration {
    /// Output frame rate.
    pub fps: u32,
    /// Path to the initial background image; its size fixes the canvas.
    pub background_image: String,
    /// Fallback space for object entries that omit theirs.
    pub start_space: String,
    /// Optional font file used by the `text` command.
    pub font: Option<String>,
}

impl Configuration {
    /// Read a `(configuration :key value ...)` form.
    pub fn from_value(value: &Value) -> BoardcastResult<Self> {
        let (head, pairs) = parse_plist(value)?;
        if head != "configuration" {
            return Err(BoardcastError::malformed(format!(
                "expected a (configuration ...) form, got ({head} ...)"
            )));
        }

        let mut fps = DEFAULT_FPS;
        let mut background_image = None;
        let mut start_space = DEFAULT_START_SPACE.to_string();
        let mut font = None;

        for (key, value) in pairs {
            match key.as_str() {
                "fps" => {
                    let v = value.as_int().ok_or_else(|| {
                        BoardcastError::malformed("configuration :fps must be an integer")
                    })?;
                    fps = u32::try_from(v).ok().filter(|v| *v > 0).ok_or_else(|| {
                        BoardcastError::malformed("configuration :fps must be positive")
                    })?;
                }
                "background_image" => {
                    background_image = Some(string_value(&value, ":background-image")?);
                }
                "start_space" => {
                    start_space = string_value(&value, ":start-space")?;
                }
                "font" => {
                    font = Some(string_value(&value, ":font")?);
                }
                other => {
                    return Err(BoardcastError::malformed(format!(
                        "unknown configuration key ':{other}'"
                    )));
                }
            }
        }

        let background_image = background_image.ok_or_else(|| {
            BoardcastError::malformed("configuration is missing :background-image")
        })?;
        Ok(Self {
            fps,
            background_image,
            start_space,
            font,
        })
    }
}

fn string_value(value: &Value, key: &str) -> BoardcastResult<String> {
    value
        .as_name()
        .map(str::to_string)
        .ok_or_else(|| BoardcastError::malformed(format!("configuration {key} must be a string")))
}
