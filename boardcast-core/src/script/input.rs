//! The script input file: four fixed top-level sections, parsed to
//! completion before anything executes. A parse error anywhere is fatal.

use std::path::Path;

use anyhow::Context;

use crate::command::{Command, parse_command};
use crate::foundation::core::Coord;
use crate::foundation::error::{BoardcastError, BoardcastResult};
use crate::script::config::Configuration;
use crate::script::sexpr::{Value, parse_many};

/// One entry of the `(objects ...)` section: a token that is on the board
/// when the render starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectData {
    /// The player/object name.
    pub name: String,
    /// Image reference (file path or `discord:` id).
    pub image_path: String,
    /// Starting space; `None` falls back to the configured start space.
    pub space: Option<String>,
}

impl ObjectData {
    fn from_value(value: &Value) -> BoardcastResult<Self> {
        let items = value
            .as_list()
            .filter(|items| items.first().is_some_and(|head| head.is_symbol("object")))
            .ok_or_else(|| BoardcastError::malformed("expected an (object ...) form"))?;
        match &items[1..] {
            [name, image] => Ok(Self {
                name: name_value(name, "object name")?,
                image_path: name_value(image, "object image path")?,
                space: None,
            }),
            [name, image, space] => Ok(Self {
                name: name_value(name, "object name")?,
                image_path: name_value(image, "object image path")?,
                space: Some(name_value(space, "object space")?),
            }),
            _ => Err(BoardcastError::malformed(
                "expected (object NAME IMAGE [SPACE])",
            )),
        }
    }
}

/// The full contents of a parsed script.
#[derive(Debug)]
pub struct InputFile {
    /// The `(configuration ...)` section.
    pub config: Configuration,
    /// The `(spaces ...)` section, with coordinates flipped to `(y, x)`.
    pub spaces: Vec<(String, Coord)>,
    /// The `(objects ...)` section.
    pub objects: Vec<ObjectData>,
    /// The `(commands ...)` section, fully parsed.
    pub commands: Vec<Command>,
}

impl InputFile {
    /// Parse a whole script from text.
    pub fn parse_str(text: &str) -> BoardcastResult<Self> {
        let sections = parse_many(text)?;
        if sections.len() < 4 {
            return Err(BoardcastError::malformed(
                "expected at least 4 sections in the input file",
            ));
        }

        let config = Configuration::from_value(&sections[0])?;
        let spaces = parse_spaces(&sections[1])?;
        let objects = section_items(&sections[2], "objects")?
            .iter()
            .map(ObjectData::from_value)
            .collect::<BoardcastResult<Vec<_>>>()?;
        let commands = section_items(&sections[3], "commands")?
            .iter()
            .map(parse_command)
            .collect::<BoardcastResult<Vec<_>>>()?;

        Ok(Self {
            config,
            spaces,
            objects,
            commands,
        })
    }

    /// Read and parse a script file.
    pub fn read_file(path: &Path) -> BoardcastResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read script '{}'", path.display()))?;
        Self::parse_str(&text)
    }
}

fn parse_spaces(value: &Value) -> BoardcastResult<Vec<(String, Coord)>> {
    let mut spaces = Vec::new();
    for entry in section_items(value, "spaces")? {
        let items = entry
            .as_list()
            .ok_or_else(|| BoardcastError::malformed("expected a (NAME (X Y)) space entry"))?;
        let [name, coord] = items else {
            return Err(BoardcastError::malformed(
                "expected a (NAME (X Y)) space entry",
            ));
        };
        let name = name_value(name, "space name")?;
        let coord = parse_coord(coord)?;
        spaces.push((name, coord));
    }
    Ok(spaces)
}

// Coordinates are written (x y) in the file and stored as (y, x).
fn parse_coord(value: &Value) -> BoardcastResult<Coord> {
    let items = value
        .as_list()
        .ok_or_else(|| BoardcastError::malformed("expected an (X Y) coordinate"))?;
    let [x, y] = items else {
        return Err(BoardcastError::malformed("expected an (X Y) coordinate"));
    };
    Ok(Coord::new(coord_component(y)?, coord_component(x)?))
}

fn coord_component(value: &Value) -> BoardcastResult<i32> {
    let v = value
        .as_int()
        .ok_or_else(|| BoardcastError::malformed("coordinates must be integers"))?;
    i32::try_from(v)
        .map_err(|_| BoardcastError::malformed(format!("coordinate {v} is out of range")))
}

// A section is (HEAD item item ...); returns the items.
fn section_items<'a>(value: &'a Value, head: &str) -> BoardcastResult<&'a [Value]> {
    let items = value
        .as_list()
        .ok_or_else(|| BoardcastError::malformed(format!("expected a ({head} ...) section")))?;
    match items.split_first() {
        Some((first, rest)) if first.is_symbol(head) => Ok(rest),
        _ => Err(BoardcastError::malformed(format!(
            "expected a ({head} ...) section"
        ))),
    }
}

fn name_value(value: &Value, what: &str) -> BoardcastResult<String> {
    value
        .as_name()
        .map(str::to_string)
        .ok_or_else(|| BoardcastError::malformed(format!("expected a string for {what}")))
}

#[cfg(test)]
#[path = "../../tests/unit/script/input.rs"]
mod tests;
