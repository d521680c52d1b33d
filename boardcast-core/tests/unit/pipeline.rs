use super::*;

use crate::foundation::core::{Coord, Rgba8};
use crate::foundation::error::BoardcastError;
use crate::render::composite::ImageRgba;

struct StubImages;

impl ResolveImage for StubImages {
    fn resolve(&mut self, path: &str) -> BoardcastResult<ImageRgba> {
        // The background decides the canvas size; everything else is a token.
        if path.starts_with("bg") {
            Ok(ImageRgba::solid(64, 48, Rgba8::BLACK))
        } else {
            Ok(ImageRgba::solid(4, 4, Rgba8::BLACK))
        }
    }
}

struct StubText;

impl RasterizeText for StubText {
    fn rasterize(&mut self, _text: &str) -> BoardcastResult<ImageRgba> {
        Ok(ImageRgba::solid(8, 2, Rgba8::BLACK))
    }
}

fn plan(script: &str) -> BoardcastResult<GameRenderer> {
    let input = InputFile::parse_str(script)?;
    plan_script(&input, &mut StubImages, &mut StubText)
}

const SCRIPT: &str = r#"
(configuration :background-image "bg.png")
(spaces
  (start (100 100))
  (den (500 300)))
(objects
  (object alice "alice.png" start)
  (object bob "bob.png" start))
(commands
  (move alice den)
  (wait 10))
"#;

#[test]
fn plans_a_complete_schedule() {
    let renderer = plan(SCRIPT).unwrap();
    assert_eq!(renderer.fps(), crate::script::config::DEFAULT_FPS);
    assert_eq!(renderer.total_frames(), 70);
    let size = renderer.frame_size();
    assert_eq!((size.width, size.height), (64, 48));
}

#[test]
fn initial_cohabitants_start_offset_apart() {
    let renderer = plan(SCRIPT).unwrap();
    let engine = renderer.engine();
    assert_eq!(
        engine.sprite("alice").unwrap().position(),
        Coord::new(100, 84)
    );
    assert_eq!(engine.sprite("bob").unwrap().position(), Coord::new(100, 116));
}

#[test]
fn objects_fall_back_to_the_start_space() {
    let script = SCRIPT.replace("(object bob \"bob.png\" start)", "(object bob \"bob.png\")");
    let renderer = plan(&script).unwrap();
    assert!(renderer.engine().has_object("bob"));
}

#[test]
fn unknown_space_fails_before_any_frame_exists() {
    let script = SCRIPT.replace("(move alice den)", "(move alice attic)");
    let err = plan(&script).unwrap_err();
    assert!(matches!(err, BoardcastError::UnknownSpace(space) if space == "attic"));
}

#[test]
fn duplicate_initial_objects_are_rejected() {
    let script = SCRIPT.replace("(object bob \"bob.png\" start)", "(object alice \"b.png\" den)");
    let err = plan(&script).unwrap_err();
    assert!(matches!(err, BoardcastError::DuplicatePlayer(_)));
}

#[test]
fn text_without_a_font_is_a_load_error() {
    let script = SCRIPT.replace("(wait 10)", "(text \"hi\")");
    let input = InputFile::parse_str(&script).unwrap();
    let err = plan_script(&input, &mut StubImages, &mut MissingFont).unwrap_err();
    assert!(matches!(err, BoardcastError::Resource(_)));
}

#[test]
fn single_frame_rendering_replays_from_zero() {
    let mut renderer = plan(SCRIPT).unwrap();
    let canvas = render_single_frame(&mut renderer, 65).unwrap();
    assert_eq!((canvas.width(), canvas.height()), (64, 48));
    // By frame 65 the move (frames 0..60) has landed.
    let pos = renderer.engine().sprite("alice").unwrap().position();
    assert_eq!(pos, Coord::new(300, 500));
}
