//! The load → plan → render pipeline.
//!
//! Everything fallible happens up front: the script is parsed to completion,
//! then every command executes against the board and timeline (resolving
//! images and rasterizing text as it goes). Only when the whole schedule has
//! been built without error does any frame get rendered.

use std::path::Path;

use crate::assets::resolve::{FsImageResolver, ResolveImage};
use crate::assets::text::{MissingFont, RasterizeText, TextRasterizer};
use crate::board::board::Board;
use crate::command::ExecContext;
use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
use crate::engine::engine::GameEngine;
use crate::engine::object::SceneObject;
use crate::engine::sprite::Sprite;
use crate::engine::timeline::Timeline;
use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::error::BoardcastResult;
use crate::render::composite::FrameCanvas;
use crate::render::frame::{FrameRenderer, GameRenderer};
use crate::render::video::VideoRenderer;
use crate::script::input::InputFile;

/// Execute every command of a parsed script, producing a renderer that holds
/// the initial scene and the complete event schedule.
#[tracing::instrument(skip_all)]
pub fn plan_script(
    input: &InputFile,
    images: &mut dyn ResolveImage,
    text: &mut dyn RasterizeText,
) -> BoardcastResult<GameRenderer> {
    let background = images.resolve(&input.config.background_image)?;
    let canvas = Canvas {
        width: background.width(),
        height: background.height(),
    };

    let mut board = Board::new(input.spaces.iter().cloned());
    for object in &input.objects {
        let space = object.space.as_deref().unwrap_or(&input.config.start_space);
        board.add_player(&object.name, space)?;
    }

    // Initial sprites are placed after every object is on the board, so
    // shared starting spaces get their offset layout from frame 0.
    let mut engine = GameEngine::new(background);
    for object in &input.objects {
        let position = board.position(&object.name)?;
        let image = images.resolve(&object.image_path)?;
        engine.add_object(SceneObject::Sprite(Sprite::new(
            object.name.clone(),
            position,
            image,
        )))?;
    }

    let mut timeline = Timeline::new();
    let mut ctx = ExecContext {
        board: &mut board,
        timeline: &mut timeline,
        images,
        text,
        canvas,
    };
    for command in &input.commands {
        command.execute(&mut ctx)?;
    }

    let (events, total_frames) = timeline.finish();
    tracing::debug!(total_frames, "schedule built");
    Ok(GameRenderer::new(
        engine,
        events,
        input.config.fps,
        total_frames,
        canvas,
    ))
}

/// Load a script file and build its renderer. Asset paths (including the
/// configured font) resolve relative to the script's directory.
pub fn renderer_from_file(path: &Path) -> BoardcastResult<GameRenderer> {
    let input = InputFile::read_file(path)?;
    let root = path.parent().unwrap_or_else(|| Path::new("."));
    let mut images = FsImageResolver::new(root);
    match &input.config.font {
        Some(font) => {
            let mut text = TextRasterizer::from_font_path(&root.join(font))?;
            plan_script(&input, &mut images, &mut text)
        }
        None => plan_script(&input, &mut images, &mut MissingFont),
    }
}

/// Render a prepared schedule to an MP4 file via the system `ffmpeg`.
pub fn render_to_mp4(renderer: GameRenderer, out_path: &Path, overwrite: bool) -> BoardcastResult<()> {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts {
        out_path: out_path.to_path_buf(),
        overwrite,
    });
    VideoRenderer::new(renderer).render(&mut sink)
}

/// Render frames `0..=frame` sequentially and return the last canvas. The
/// renderer is stateful, so earlier frames must be played through to get a
/// faithful later one.
pub fn render_single_frame(
    renderer: &mut GameRenderer,
    frame: u64,
) -> BoardcastResult<FrameCanvas> {
    let size = renderer.frame_size();
    let mut canvas = FrameCanvas::new(size.width, size.height);
    for f in 0..=frame {
        renderer.render_frame(FrameIndex(f), &mut canvas)?;
    }
    Ok(canvas)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
