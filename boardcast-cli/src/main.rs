use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

/// Render a board-game script to video.
#[derive(Parser, Debug)]
#[command(name = "boardcast", version)]
struct Cli {
    /// Input script file.
    input: PathBuf,

    /// Output file: MP4 by default, PNG with --frame.
    #[arg(short = 'o', long = "out")]
    out: PathBuf,

    /// Render only this frame (0-based) and write it as a PNG.
    #[arg(long)]
    frame: Option<u64>,

    /// Overwrite the output if it already exists.
    #[arg(long, default_value_t = true)]
    overwrite: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let renderer = boardcast::renderer_from_file(&cli.input)
        .with_context(|| format!("load script '{}'", cli.input.display()))?;

    match cli.frame {
        Some(frame) => cmd_frame(renderer, frame, &cli.out),
        None => cmd_render(renderer, &cli.out, cli.overwrite),
    }
}

fn cmd_frame(
    mut renderer: boardcast::GameRenderer,
    frame: u64,
    out: &PathBuf,
) -> anyhow::Result<()> {
    let canvas = boardcast::render_single_frame(&mut renderer, frame)?;

    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        out,
        canvas.data(),
        canvas.width(),
        canvas.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;

    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_render(
    renderer: boardcast::GameRenderer,
    out: &PathBuf,
    overwrite: bool,
) -> anyhow::Result<()> {
    boardcast::render_to_mp4(renderer, out, overwrite)?;
    eprintln!("wrote {}", out.display());
    Ok(())
}
