//! The live scene: an insertion-ordered set of objects, stepped and drawn
//! one frame at a time.

use crate::engine::object::{SceneObject, StepOutcome};
use crate::engine::sprite::Sprite;
use crate::engine::text::{STATUS_TEXT_NAME, StatusText};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{BoardcastError, BoardcastResult};
use crate::render::composite::{FrameCanvas, ImageRgba};

// An object slot. The name and z-index are cached outside the object so that
// lookups and draw-order sorting never touch a slot whose object is
// temporarily checked out during stepping.
#[derive(Debug)]
struct Entry {
    id: u64,
    name: Option<String>,
    z_index: i32,
    object: Option<SceneObject>,
}

/// Owns the drawable/steppable objects and the current background image.
///
/// Name lookups are deliberate linear scans: the scene holds a handful of
/// objects, and a side index would be more bookkeeping than the scan.
#[derive(Debug)]
pub struct GameEngine {
    entries: Vec<Entry>,
    next_id: u64,
    background: ImageRgba,
}

impl GameEngine {
    /// A scene with no objects over the given background.
    pub fn new(background: ImageRgba) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            background,
        }
    }

    /// The image blitted under every frame.
    pub fn background(&self) -> &ImageRgba {
        &self.background
    }

    pub(crate) fn set_background(&mut self, image: ImageRgba) {
        self.background = image;
    }

    /// Number of live objects.
    pub fn object_count(&self) -> usize {
        self.entries.len()
    }

    /// Register an object. Named objects must be unique: a second object
    /// with the same name is rejected with
    /// [`BoardcastError::DuplicateObject`].
    pub fn add_object(&mut self, object: SceneObject) -> BoardcastResult<()> {
        let name = object.name().map(str::to_string);
        if let Some(name) = &name
            && self.has_object(name)
        {
            return Err(BoardcastError::DuplicateObject(name.clone()));
        }
        tracing::debug!(name = name.as_deref(), "add object");
        self.entries.push(Entry {
            id: self.next_id,
            name,
            z_index: object.z_index(),
            object: Some(object),
        });
        self.next_id += 1;
        Ok(())
    }

    /// Remove the object with the given name.
    pub fn remove_object(&mut self, name: &str) -> BoardcastResult<()> {
        let pos = self
            .entries
            .iter()
            .position(|entry| entry.name.as_deref() == Some(name))
            .ok_or_else(|| BoardcastError::ObjectNotFound(name.to_string()))?;
        tracing::debug!(name, "remove object");
        self.entries.remove(pos);
        Ok(())
    }

    /// True if an object with the given name is registered.
    pub fn has_object(&self, name: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.name.as_deref() == Some(name))
    }

    /// The named object.
    pub fn find_object(&self, name: &str) -> BoardcastResult<&SceneObject> {
        self.entries
            .iter()
            .find(|entry| entry.name.as_deref() == Some(name))
            .and_then(|entry| entry.object.as_ref())
            .ok_or_else(|| BoardcastError::ObjectNotFound(name.to_string()))
    }

    /// The named sprite.
    pub fn sprite(&self, name: &str) -> BoardcastResult<&Sprite> {
        match self.find_object(name)? {
            SceneObject::Sprite(sprite) => Ok(sprite),
            _ => Err(BoardcastError::ObjectNotFound(name.to_string())),
        }
    }

    pub(crate) fn sprite_mut(&mut self, name: &str) -> BoardcastResult<&mut Sprite> {
        self.entries
            .iter_mut()
            .filter(|entry| entry.name.as_deref() == Some(name))
            .find_map(|entry| match entry.object.as_mut() {
                Some(SceneObject::Sprite(sprite)) => Some(sprite),
                _ => None,
            })
            .ok_or_else(|| BoardcastError::ObjectNotFound(name.to_string()))
    }

    /// The status text, if one is currently on screen.
    pub fn status_text(&self) -> Option<&StatusText> {
        match self.find_object(STATUS_TEXT_NAME) {
            Ok(SceneObject::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub(crate) fn status_text_mut(&mut self) -> Option<&mut StatusText> {
        self.entries
            .iter_mut()
            .find_map(|entry| match entry.object.as_mut() {
                Some(SceneObject::Text(text)) => Some(text),
                _ => None,
            })
    }

    /// Advance every object by one frame.
    ///
    /// The set of objects stepped this frame is a snapshot taken before the
    /// first step: objects added during stepping first step next frame, and
    /// removals take effect immediately without disturbing the iteration.
    /// Each object is checked out of its slot while it steps, so it can
    /// freely mutate the rest of the scene through `self`.
    pub fn step(&mut self, frame: FrameIndex) -> BoardcastResult<()> {
        let snapshot: Vec<u64> = self.entries.iter().map(|entry| entry.id).collect();
        for id in snapshot {
            let Some(pos) = self.entries.iter().position(|entry| entry.id == id) else {
                continue; // removed by an earlier step this frame
            };
            let Some(mut object) = self.entries[pos].object.take() else {
                continue;
            };
            let outcome = object.step(frame, self)?;
            // The slot may have shifted (or vanished) while the object ran.
            if let Some(pos) = self.entries.iter().position(|entry| entry.id == id) {
                match outcome {
                    StepOutcome::Keep => self.entries[pos].object = Some(object),
                    StepOutcome::Remove => {
                        self.entries.remove(pos);
                    }
                }
            }
        }
        Ok(())
    }

    /// Draw the frame: background first, then every object in ascending
    /// z-index order (stable, so ties keep insertion order).
    pub fn render(&self, frame: FrameIndex, canvas: &mut FrameCanvas) -> BoardcastResult<()> {
        canvas.fill(&self.background)?;
        let mut order: Vec<usize> = (0..self.entries.len()).collect();
        order.sort_by_key(|&i| self.entries[i].z_index);
        for i in order {
            if let Some(object) = self.entries[i].object.as_ref() {
                object.draw(frame, canvas);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/engine.rs"]
mod tests;
