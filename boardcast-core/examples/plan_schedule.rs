//! Build a schedule from an inline script with stub assets and print what
//! the planner produced. Run with: cargo run --example plan_schedule

use boardcast::{
    BoardcastResult, FrameRenderer, ImageRgba, InMemorySink, InputFile, RasterizeText,
    ResolveImage, Rgba8, VideoRenderer, plan_script,
};

const SCRIPT: &str = r#"
(configuration :fps 30 :background-image "bg.png")
(spaces
  (start (100 100))
  (den (500 300)))
(objects
  (object alice "alice.png" start)
  (object bob "bob.png" start))
(commands
  (move alice den)
  (swap alice bob)
  (wait 15)
  (remove bob))
"#;

struct StubImages;

impl ResolveImage for StubImages {
    fn resolve(&mut self, path: &str) -> BoardcastResult<ImageRgba> {
        let size = if path.starts_with("bg") { 640 } else { 32 };
        Ok(ImageRgba::solid(size, size, Rgba8::BLACK))
    }
}

struct StubText;

impl RasterizeText for StubText {
    fn rasterize(&mut self, _text: &str) -> BoardcastResult<ImageRgba> {
        Ok(ImageRgba::solid(64, 16, Rgba8::BLACK))
    }
}

fn main() -> BoardcastResult<()> {
    let input = InputFile::parse_str(SCRIPT)?;
    let renderer = plan_script(&input, &mut StubImages, &mut StubText)?;

    println!(
        "{} frames at {} fps ({:.1}s)",
        renderer.total_frames(),
        renderer.fps(),
        renderer.total_frames() as f64 / f64::from(renderer.fps())
    );

    let mut sink = InMemorySink::new();
    VideoRenderer::new(renderer).render(&mut sink)?;
    println!("rendered {} frames in memory", sink.frames().len());
    Ok(())
}
