use super::*;

#[test]
fn begin_clears_previously_captured_frames() {
    let cfg = SinkConfig {
        width: 2,
        height: 2,
        fps: 30,
    };
    let mut sink = InMemorySink::new();
    sink.begin(cfg).unwrap();
    sink.push_frame(FrameIndex(0), &FrameCanvas::new(2, 2)).unwrap();
    sink.end().unwrap();
    assert_eq!(sink.frames().len(), 1);

    sink.begin(cfg).unwrap();
    assert!(sink.frames().is_empty());
    assert_eq!(sink.config(), Some(cfg));
}
