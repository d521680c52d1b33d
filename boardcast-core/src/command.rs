//! The user-scriptable command set.
//!
//! Each command is a pure data record parsed from one `(tag args...)` form.
//! Executing a command mutates the board immediately and schedules the
//! matching animation on the timeline at its current moment; nothing touches
//! the engine until playback.

use crate::assets::resolve::ResolveImage;
use crate::assets::text::RasterizeText;
use crate::board::board::Board;
use crate::board::movement::{MovementKind, MovementPlanner};
use crate::engine::controllers::{FadeBackgroundController, FadeObjectController};
use crate::engine::object::SceneObject;
use crate::engine::sprite::Sprite;
use crate::engine::text::{STATUS_TEXT_NAME, StatusText};
use crate::engine::timeline::Timeline;
use crate::foundation::core::Canvas;
use crate::foundation::error::{BoardcastError, BoardcastResult};
use crate::render::composite::ImageRgba;
use crate::script::sexpr::Value;

/// Everything a command needs while the schedule is being built.
pub struct ExecContext<'a> {
    /// The authoritative board state.
    pub board: &'a mut Board,
    /// The schedule under construction.
    pub timeline: &'a mut Timeline,
    /// Image resolution capability (filesystem or Discord).
    pub images: &'a mut dyn ResolveImage,
    /// Text rasterization capability.
    pub text: &'a mut dyn RasterizeText,
    /// Output canvas size, for validating backgrounds.
    pub canvas: Canvas,
}

/// One scripted operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Move a player to a new space with a long animation.
    Move {
        /// The player to move.
        player: String,
        /// Destination space name.
        destination: String,
    },
    /// Exchange the spaces of two distinct players.
    Swap {
        /// One player.
        first: String,
        /// The other player.
        second: String,
    },
    /// Generalized swap: each source player moves to the original space of
    /// its paired destination player, all in parallel.
    Shuffle {
        /// `(source, destination)` player pairs.
        pairs: Vec<(String, String)>,
    },
    /// Add a new player with a fade-in.
    Add {
        /// New player name.
        player: String,
        /// Image reference (file path or `discord:` id).
        image: String,
        /// Space to appear on.
        space: String,
    },
    /// Remove a player with a fade-out.
    Remove {
        /// The player to remove.
        player: String,
    },
    /// Cross-fade the background to a new image.
    ChangeBackground {
        /// Image reference for the new background.
        image: String,
    },
    /// Show (or replace) the status text.
    Text {
        /// The string to display.
        text: String,
    },
    /// Remove the status text; a no-op if none is shown.
    HideText,
    /// Advance the timeline without scheduling anything.
    Wait {
        /// Frames to wait. Negative values are rejected at execution.
        frames: i64,
    },
}

type CommandParser = fn(&[Value]) -> BoardcastResult<Command>;

/// Maps script tags to their argument parsers.
pub const COMMAND_REGISTRY: &[(&str, CommandParser)] = &[
    ("move", parse_move),
    ("swap", parse_swap),
    ("shuffle", parse_shuffle),
    ("add", parse_add),
    ("remove", parse_remove),
    ("change-background", parse_change_background),
    ("text", parse_text),
    ("hide-text", parse_hide_text),
    ("wait", parse_wait),
];

/// Parse one `(tag args...)` form into a [`Command`]. Unknown tags fail with
/// [`BoardcastError::UnknownCommand`]; bad arity or argument types fail with
/// [`BoardcastError::CommandParse`].
pub fn parse_command(value: &Value) -> BoardcastResult<Command> {
    let items = value
        .as_list()
        .ok_or_else(|| BoardcastError::command_parse("expected a (tag args...) list"))?;
    let Some((head, args)) = items.split_first() else {
        return Err(BoardcastError::command_parse(
            "expected a non-empty command list",
        ));
    };
    let tag = head
        .as_symbol()
        .ok_or_else(|| BoardcastError::command_parse("expected a symbol command tag"))?;
    let parser = COMMAND_REGISTRY
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, parser)| *parser)
        .ok_or_else(|| BoardcastError::UnknownCommand(tag.to_string()))?;
    parser(args)
}

impl Command {
    /// Execute the command: mutate the board now, schedule the animation at
    /// the timeline's current moment, and advance the moment past it.
    pub fn execute(&self, ctx: &mut ExecContext<'_>) -> BoardcastResult<()> {
        match self {
            Self::Move {
                player,
                destination,
            } => {
                let mut planner = MovementPlanner::begin(ctx.board)?;
                planner.add_player(ctx.board, player, MovementKind::Long)?;
                ctx.board.set_player(player, destination)?;
                planner.commit(ctx.board, ctx.timeline)
            }

            Self::Swap { first, second } => {
                let mut planner = MovementPlanner::begin(ctx.board)?;
                planner.add_player(ctx.board, first, MovementKind::Long)?;
                planner.add_player(ctx.board, second, MovementKind::Long)?;
                // Read both before writing either, so the exchange is atomic.
                let first_space = ctx.board.space_of(first)?.to_string();
                let second_space = ctx.board.space_of(second)?.to_string();
                ctx.board.set_player(first, &second_space)?;
                ctx.board.set_player(second, &first_space)?;
                planner.commit(ctx.board, ctx.timeline)
            }

            Self::Shuffle { pairs } => {
                let mut planner = MovementPlanner::begin(ctx.board)?;
                let mut original_spaces: Vec<(String, String)> = Vec::with_capacity(pairs.len());
                for (source, _) in pairs {
                    planner.add_player(ctx.board, source, MovementKind::Long)?;
                    original_spaces.push((source.clone(), ctx.board.space_of(source)?.to_string()));
                }
                for (source, destination) in pairs {
                    let space = match original_spaces
                        .iter()
                        .find(|(name, _)| name == destination)
                    {
                        Some((_, space)) => space.clone(),
                        // Destination player is not itself moving; its
                        // current space is its original one.
                        None => ctx.board.space_of(destination)?.to_string(),
                    };
                    ctx.board.set_player(source, &space)?;
                }
                planner.commit(ctx.board, ctx.timeline)
            }

            Self::Add {
                player,
                image,
                space,
            } => {
                let mut planner = MovementPlanner::begin(ctx.board)?;
                let anchor = ctx.board.space_coord(space)?;
                let image = ctx.images.resolve(image)?;
                ctx.board.add_player(player, space)?;
                // The newcomer joins the scope as a trivial short movement so
                // the fade-in's duration is covered even on an empty board.
                planner.add_player(ctx.board, player, MovementKind::Short)?;
                let sprite = Sprite::hidden(player.clone(), anchor, image);
                ctx.timeline.append(FadeObjectController::fade_in_event(
                    sprite,
                    MovementKind::Short.length_frames(),
                ));
                planner.commit(ctx.board, ctx.timeline)
            }

            Self::Remove { player } => {
                let planner = MovementPlanner::begin(ctx.board)?;
                ctx.board.remove_player(player)?;
                ctx.timeline.append(FadeObjectController::fade_out_event(
                    player.clone(),
                    MovementKind::Short.length_frames(),
                ));
                planner.commit(ctx.board, ctx.timeline)
            }

            Self::ChangeBackground { image } => {
                let image = ctx.images.resolve(image)?;
                if image.width() != ctx.canvas.width || image.height() != ctx.canvas.height {
                    return Err(BoardcastError::resource(format!(
                        "background image is {}x{} but the canvas is {}x{}",
                        image.width(),
                        image.height(),
                        ctx.canvas.width,
                        ctx.canvas.height
                    )));
                }
                let frames = MovementKind::Long.length_frames();
                ctx.timeline
                    .append(FadeBackgroundController::event(image, frames));
                ctx.timeline.advance(frames as i64)
            }

            Self::Text { text } => {
                let image = ctx.text.rasterize(text)?;
                ctx.timeline.append(set_text_event(text.clone(), image));
                Ok(())
            }

            Self::HideText => {
                ctx.timeline.append(hide_text_event());
                Ok(())
            }

            Self::Wait { frames } => ctx.timeline.advance(*frames),
        }
    }
}

fn set_text_event(text: String, image: ImageRgba) -> crate::engine::event_manager::Event {
    Box::new(move |engine| {
        if let Some(existing) = engine.status_text_mut() {
            existing.set(text, image);
            Ok(())
        } else {
            engine.add_object(SceneObject::Text(StatusText::new(text, image)))
        }
    })
}

fn hide_text_event() -> crate::engine::event_manager::Event {
    Box::new(|engine| {
        if engine.has_object(STATUS_TEXT_NAME) {
            engine.remove_object(STATUS_TEXT_NAME)?;
        }
        Ok(())
    })
}

fn parse_move(args: &[Value]) -> BoardcastResult<Command> {
    let [player, destination] = args else {
        return Err(arity("move", "PLAYER SPACE", args));
    };
    Ok(Command::Move {
        player: name_arg("move", player)?,
        destination: name_arg("move", destination)?,
    })
}

fn parse_swap(args: &[Value]) -> BoardcastResult<Command> {
    let [first, second] = args else {
        return Err(arity("swap", "PLAYER PLAYER", args));
    };
    let first = name_arg("swap", first)?;
    let second = name_arg("swap", second)?;
    if first == second {
        return Err(BoardcastError::command_parse(format!(
            "swap requires two distinct players, got '{first}' twice"
        )));
    }
    Ok(Command::Swap { first, second })
}

fn parse_shuffle(args: &[Value]) -> BoardcastResult<Command> {
    if args.is_empty() {
        return Err(arity("shuffle", "(PLAYER PLAYER)...", args));
    }
    let mut pairs = Vec::with_capacity(args.len());
    for arg in args {
        let pair = arg.as_list().ok_or_else(|| {
            BoardcastError::command_parse("shuffle expects (SOURCE DESTINATION) pairs")
        })?;
        let [source, destination] = pair else {
            return Err(BoardcastError::command_parse(
                "shuffle expects (SOURCE DESTINATION) pairs",
            ));
        };
        pairs.push((name_arg("shuffle", source)?, name_arg("shuffle", destination)?));
    }
    Ok(Command::Shuffle { pairs })
}

fn parse_add(args: &[Value]) -> BoardcastResult<Command> {
    let [player, image, space] = args else {
        return Err(arity("add", "PLAYER IMAGE SPACE", args));
    };
    Ok(Command::Add {
        player: name_arg("add", player)?,
        image: name_arg("add", image)?,
        space: name_arg("add", space)?,
    })
}

fn parse_remove(args: &[Value]) -> BoardcastResult<Command> {
    let [player] = args else {
        return Err(arity("remove", "PLAYER", args));
    };
    Ok(Command::Remove {
        player: name_arg("remove", player)?,
    })
}

fn parse_change_background(args: &[Value]) -> BoardcastResult<Command> {
    let [image] = args else {
        return Err(arity("change-background", "IMAGE", args));
    };
    Ok(Command::ChangeBackground {
        image: name_arg("change-background", image)?,
    })
}

fn parse_text(args: &[Value]) -> BoardcastResult<Command> {
    let [text] = args else {
        return Err(arity("text", "STRING", args));
    };
    let text = text
        .as_str()
        .ok_or_else(|| BoardcastError::command_parse("text expects a quoted string"))?;
    Ok(Command::Text {
        text: text.to_string(),
    })
}

fn parse_hide_text(args: &[Value]) -> BoardcastResult<Command> {
    if !args.is_empty() {
        return Err(arity("hide-text", "", args));
    }
    Ok(Command::HideText)
}

fn parse_wait(args: &[Value]) -> BoardcastResult<Command> {
    let [frames] = args else {
        return Err(arity("wait", "FRAMES", args));
    };
    let frames = frames
        .as_int()
        .ok_or_else(|| BoardcastError::command_parse("wait expects an integer frame count"))?;
    Ok(Command::Wait { frames })
}

fn name_arg(tag: &str, value: &Value) -> BoardcastResult<String> {
    value
        .as_name()
        .map(str::to_string)
        .ok_or_else(|| BoardcastError::command_parse(format!("{tag} expects a name, got {value:?}")))
}

fn arity(tag: &str, usage: &str, args: &[Value]) -> BoardcastError {
    let usage = if usage.is_empty() {
        format!("({tag})")
    } else {
        format!("({tag} {usage})")
    };
    BoardcastError::command_parse(format!("expected {usage}, got {} argument(s)", args.len()))
}

#[cfg(test)]
#[path = "../tests/unit/command.rs"]
mod tests;
