use super::*;

fn frame(w: u32, h: u32, v: u8) -> FrameRGBA {
    FrameRGBA {
        width: w,
        height: h,
        data: [v, v, v, 255].repeat((w * h) as usize),
        premultiplied: true,
    }
}

fn cfg() -> SinkConfig {
    SinkConfig {
        width: 4,
        height: 2,
        fps: Fps::default(),
    }
}

#[test]
fn in_memory_sink_keeps_frames_in_order() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(0), &frame(4, 2, 1)).unwrap();
    sink.push_frame(FrameIndex(3), &frame(6, 2, 2)).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.config().map(|c| c.width), Some(4));
    let idx: Vec<_> = sink.frames().iter().map(|(i, _)| *i).collect();
    assert_eq!(idx, vec![FrameIndex(0), FrameIndex(3)]);
    assert_eq!(sink.frames()[1].1.width, 6);

    sink.begin(cfg()).unwrap();
    assert!(sink.frames().is_empty());
}

#[test]
fn png_sink_writes_numbered_files() {
    let dir = std::env::temp_dir().join(format!("mehdiffer-png-sink-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);

    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(7), &frame(4, 2, 9)).unwrap();
    sink.end().unwrap();

    let path = dir.join("frame_000007.png");
    assert_eq!(sink.written(), &[path.clone()]);
    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (4, 2));
    assert_eq!(img.get_pixel(1, 1).0, [9, 9, 9, 255]);
}

#[test]
fn unwritable_png_path_is_reported() {
    let err = write_png(Path::new("/proc/mehdiffer/denied.png"), &frame(1, 1, 0)).unwrap_err();
    assert!(matches!(err, PortalError::Other(_)));
}
