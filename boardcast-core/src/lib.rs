//! boardcast renders a scripted multiplayer board-game sequence (tokens
//! moving between named spaces, fading in and out, background changes,
//! status text) into a frame-by-frame video.
//!
//! # Pipeline overview
//!
//! 1. **Load**: parse the S-expression script into an [`InputFile`]
//!    (configuration, spaces, initial objects, commands).
//! 2. **Plan**: execute every [`Command`] against the [`Board`] and a
//!    [`Timeline`]. Commands mutate board state immediately but only
//!    *schedule* their animations, each at the timeline's current moment;
//!    image and font IO is front-loaded here too. The result is a complete,
//!    immutable [`EventManager`] schedule.
//! 3. **Render**: the [`GameEngine`] plays the schedule frame by frame —
//!    firing due events, stepping animation controllers, compositing the
//!    canvas — and a [`FrameSink`] (normally the system `ffmpeg`) encodes
//!    each frame.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: a script, once parsed, renders to a fixed total
//!   frame count equal to the timeline's final moment; there is no wall
//!   clock anywhere.
//! - **All-or-nothing**: any syntax, semantic, or resource error aborts
//!   before the first frame is rendered.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod board;
mod command;
mod encode;
mod engine;
mod foundation;
mod pipeline;
mod render;
mod script;

/// Discord avatar fetching and caching, used by `discord:` image references.
pub mod discord;

pub use assets::decode::{decode_image, load_image};
pub use assets::resolve::{
    DISCORD_AVATAR_SIZE, DISCORD_PREFIX, FsImageResolver, ResolveImage,
};
pub use assets::text::{
    MissingFont, RasterizeText, STATUS_TEXT_SIZE_PX, TextBrush, TextRasterizer,
};
pub use board::board::Board;
pub use board::movement::{MovementKind, MovementPlanner};
pub use command::{COMMAND_REGISTRY, Command, ExecContext, parse_command};
pub use encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, ensure_parent_dir, is_ffmpeg_on_path};
pub use encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use engine::controllers::{
    BACKGROUND_Z_INDEX, FadeBackgroundController, FadeObjectController, MoveObjectController,
};
pub use engine::engine::GameEngine;
pub use engine::event_manager::{Event, EventManager};
pub use engine::object::{SceneObject, StepOutcome};
pub use engine::sprite::Sprite;
pub use engine::text::{STATUS_TEXT_NAME, StatusText};
pub use engine::timeline::Timeline;
pub use foundation::core::{Canvas, Coord, FrameIndex, Rgba8, lerp, lerp_coord};
pub use foundation::error::{BoardcastError, BoardcastResult, MAX_OCCUPANTS};
pub use pipeline::{
    plan_script, render_single_frame, render_to_mp4, renderer_from_file,
};
pub use render::composite::{FrameCanvas, ImageRgba, draw_centered};
pub use render::frame::{FrameRenderer, GameRenderer};
pub use render::video::VideoRenderer;
pub use script::config::{Configuration, DEFAULT_FPS, DEFAULT_START_SPACE};
pub use script::input::{InputFile, ObjectData};
pub use script::sexpr::{Value, parse, parse_many, parse_plist};
