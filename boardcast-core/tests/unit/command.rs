use super::*;

use crate::engine::engine::GameEngine;
use crate::foundation::core::{Coord, FrameIndex, Rgba8};
use crate::script::sexpr::parse;

struct StubImages;

impl ResolveImage for StubImages {
    fn resolve(&mut self, _path: &str) -> crate::foundation::error::BoardcastResult<ImageRgba> {
        Ok(ImageRgba::solid(4, 4, Rgba8::BLACK))
    }
}

struct StubText;

impl RasterizeText for StubText {
    fn rasterize(&mut self, _text: &str) -> crate::foundation::error::BoardcastResult<ImageRgba> {
        Ok(ImageRgba::solid(2, 2, Rgba8::BLACK))
    }
}

struct Fixture {
    board: Board,
    timeline: Timeline,
    images: StubImages,
    text: StubText,
}

impl Fixture {
    fn new() -> Self {
        let mut board = Board::new([
            ("start".to_string(), Coord::new(100, 100)),
            ("den".to_string(), Coord::new(300, 500)),
        ]);
        board.add_player("alice", "start").unwrap();
        board.add_player("bob", "den").unwrap();
        Self {
            board,
            timeline: Timeline::new(),
            images: StubImages,
            text: StubText,
        }
    }

    fn run(&mut self, source: &str) -> crate::foundation::error::BoardcastResult<()> {
        let command = parse_command(&parse(source).unwrap())?;
        let mut ctx = ExecContext {
            board: &mut self.board,
            timeline: &mut self.timeline,
            images: &mut self.images,
            text: &mut self.text,
            canvas: Canvas {
                width: 4,
                height: 4,
            },
        };
        command.execute(&mut ctx)
    }
}

#[test]
fn unknown_tag_and_bad_arity() {
    assert!(matches!(
        parse_command(&parse("(dance)").unwrap()).unwrap_err(),
        BoardcastError::UnknownCommand(tag) if tag == "dance"
    ));
    assert!(matches!(
        parse_command(&parse("(move alice)").unwrap()).unwrap_err(),
        BoardcastError::CommandParse(_)
    ));
    assert!(matches!(
        parse_command(&parse("(wait soon)").unwrap()).unwrap_err(),
        BoardcastError::CommandParse(_)
    ));
}

#[test]
fn swap_rejects_a_player_with_itself() {
    assert!(matches!(
        parse_command(&parse("(swap alice alice)").unwrap()).unwrap_err(),
        BoardcastError::CommandParse(_)
    ));
}

#[test]
fn registry_covers_every_documented_tag() {
    for tag in [
        "move",
        "swap",
        "shuffle",
        "add",
        "remove",
        "change-background",
        "text",
        "hide-text",
        "wait",
    ] {
        assert!(
            COMMAND_REGISTRY.iter().any(|(name, _)| *name == tag),
            "missing tag {tag}"
        );
    }
}

#[test]
fn wait_then_move_schedules_at_the_waited_moment() {
    let mut fx = Fixture::new();
    fx.run("(wait 30)").unwrap();
    fx.run("(move alice den)").unwrap();

    assert_eq!(fx.board.space_of("alice").unwrap(), "den");
    // The long move advances the scope by 60 on top of the wait.
    assert_eq!(fx.timeline.moment(), 90);

    let (mut manager, _) = std::mem::take(&mut fx.timeline).finish();
    let mut engine = GameEngine::new(ImageRgba::solid(4, 4, Rgba8::BLACK));
    engine
        .add_object(SceneObject::Sprite(Sprite::new(
            "alice",
            Coord::new(100, 100),
            ImageRgba::solid(2, 2, Rgba8::BLACK),
        )))
        .unwrap();
    engine
        .add_object(SceneObject::Sprite(Sprite::new(
            "bob",
            Coord::new(300, 500),
            ImageRgba::solid(2, 2, Rgba8::BLACK),
        )))
        .unwrap();

    // Nothing due before the waited moment.
    for f in 0..30 {
        manager.step(FrameIndex(f), &mut engine).unwrap();
    }
    assert_eq!(engine.object_count(), 2);
    manager.step(FrameIndex(30), &mut engine).unwrap();
    // Alice's long move plus bob's short re-centering on the vacated space.
    assert_eq!(engine.object_count(), 4);
}

#[test]
fn negative_wait_is_invalid() {
    let mut fx = Fixture::new();
    let err = fx.run("(wait -5)").unwrap_err();
    assert!(matches!(err, BoardcastError::InvalidAdvance(-5)));
}

#[test]
fn swap_round_trip_restores_spaces() {
    let mut fx = Fixture::new();
    fx.run("(swap alice bob)").unwrap();
    assert_eq!(fx.board.space_of("alice").unwrap(), "den");
    assert_eq!(fx.board.space_of("bob").unwrap(), "start");

    fx.run("(swap alice bob)").unwrap();
    assert_eq!(fx.board.space_of("alice").unwrap(), "start");
    assert_eq!(fx.board.space_of("bob").unwrap(), "den");
    assert_eq!(fx.timeline.moment(), 120);
}

#[test]
fn shuffle_moves_sources_to_original_destination_spaces() {
    let mut fx = Fixture::new();
    fx.board.add_player("carol", "den").unwrap();
    fx.run("(shuffle (alice bob) (bob carol) (carol alice))")
        .unwrap();
    // carol's target space is alice's ORIGINAL space, not her new one.
    assert_eq!(fx.board.space_of("alice").unwrap(), "den");
    assert_eq!(fx.board.space_of("bob").unwrap(), "den");
    assert_eq!(fx.board.space_of("carol").unwrap(), "start");
}

#[test]
fn failed_commands_schedule_nothing() {
    let mut fx = Fixture::new();
    let err = fx.run("(move alice nowhere)").unwrap_err();
    assert!(matches!(err, BoardcastError::UnknownSpace(_)));

    let (manager, total) = std::mem::take(&mut fx.timeline).finish();
    assert_eq!(manager.pending_moments(), 0);
    assert_eq!(total, 0);
    // The board mutation never happened either.
    assert_eq!(fx.board.space_of("alice").unwrap(), "start");
}

#[test]
fn add_then_remove_schedules_sixty_frames_total() {
    let mut fx = Fixture::new();
    fx.run("(add carol \"carol.png\" den)").unwrap();
    assert_eq!(fx.timeline.moment(), 30);
    assert!(fx.board.contains("carol"));

    fx.run("(remove carol)").unwrap();
    assert_eq!(fx.timeline.moment(), 60);
    assert!(!fx.board.contains("carol"));
}

#[test]
fn add_rejects_existing_players() {
    let mut fx = Fixture::new();
    let err = fx.run("(add alice \"a.png\" den)").unwrap_err();
    assert!(matches!(err, BoardcastError::DuplicatePlayer(_)));
}

#[test]
fn change_background_validates_size_and_advances() {
    let mut fx = Fixture::new();
    fx.run("(change-background \"next.png\")").unwrap();
    assert_eq!(fx.timeline.moment(), 60);
}

#[test]
fn change_background_rejects_mismatched_size() {
    let mut fx = Fixture::new();
    let command = parse_command(&parse("(change-background \"next.png\")").unwrap()).unwrap();
    let mut ctx = ExecContext {
        board: &mut fx.board,
        timeline: &mut fx.timeline,
        images: &mut fx.images,
        text: &mut fx.text,
        canvas: Canvas {
            width: 8,
            height: 8,
        },
    };
    let err = command.execute(&mut ctx).unwrap_err();
    assert!(matches!(err, BoardcastError::Resource(_)));
}

#[test]
fn text_upserts_and_hide_text_tolerates_absence() {
    let mut fx = Fixture::new();
    fx.run("(hide-text)").unwrap();
    fx.run("(text \"round one\")").unwrap();
    fx.run("(text \"round two\")").unwrap();
    fx.run("(hide-text)").unwrap();
    // Text commands take no time of their own.
    assert_eq!(fx.timeline.moment(), 0);

    let (mut manager, _) = std::mem::take(&mut fx.timeline).finish();
    let mut engine = GameEngine::new(ImageRgba::solid(4, 4, Rgba8::BLACK));
    manager.step(FrameIndex(0), &mut engine).unwrap();
    // Upsert then removal: the singleton is gone, and nothing errored.
    assert!(engine.status_text().is_none());
    assert_eq!(engine.object_count(), 0);
}

#[test]
fn text_events_mutate_the_singleton_in_place() {
    let mut fx = Fixture::new();
    fx.run("(text \"one\")").unwrap();
    fx.run("(wait 10)").unwrap();
    fx.run("(text \"two\")").unwrap();

    let (mut manager, _) = std::mem::take(&mut fx.timeline).finish();
    let mut engine = GameEngine::new(ImageRgba::solid(4, 4, Rgba8::BLACK));
    manager.step(FrameIndex(0), &mut engine).unwrap();
    assert_eq!(engine.status_text().unwrap().text(), "one");
    manager.step(FrameIndex(10), &mut engine).unwrap();
    assert_eq!(engine.status_text().unwrap().text(), "two");
    assert_eq!(engine.object_count(), 1);
}
