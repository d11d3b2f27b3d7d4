use super::*;

fn solid(width: u32, height: u32, px: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width,
        height,
        data: px.repeat((width * height) as usize),
        premultiplied: true,
    }
}

fn cfg() -> SinkConfig {
    SinkConfig {
        width: 4,
        height: 2,
        fps: Fps::from_tick_ms(20).unwrap(),
    }
}

#[test]
fn in_memory_sink_captures_frames_in_order() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(0), &solid(4, 2, [1, 2, 3, 255]))
        .unwrap();
    sink.push_frame(FrameIndex(1), &solid(4, 2, [4, 5, 6, 255]))
        .unwrap();
    sink.end().unwrap();

    assert_eq!(sink.config(), Some(cfg()));
    assert!(sink.is_ended());
    let idx: Vec<_> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 1]);
}

#[test]
fn png_sequence_sink_writes_numbered_files() {
    let dir = PathBuf::from("target").join("png_sequence_unit");
    let _ = std::fs::remove_dir_all(&dir);

    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(0), &solid(4, 2, [0x31, 0x1B, 0x92, 255]))
        .unwrap();
    sink.push_frame(FrameIndex(1), &solid(4, 2, [0, 0, 0, 0]))
        .unwrap();
    sink.end().unwrap();
    assert_eq!(sink.written(), 2);

    let first = image::open(dir.join("frame_00000.png")).unwrap().to_rgba8();
    assert_eq!(first.dimensions(), (4, 2));
    assert_eq!(first.get_pixel(0, 0).0, [0x31, 0x1B, 0x92, 255]);

    // Transparent pixels are flattened over the background colour.
    let second = image::open(sink.frame_path(FrameIndex(1))).unwrap().to_rgba8();
    assert_eq!(second.get_pixel(3, 1).0, [0xBD, 0xBD, 0xBD, 255]);
}

#[test]
fn ffmpeg_sink_rejects_frames_before_begin() {
    let mut sink = FfmpegSink::new("target/never.mp4", true);
    assert!(
        sink.push_frame(FrameIndex(0), &solid(4, 2, [0, 0, 0, 255]))
            .is_err()
    );
    assert!(sink.end().is_err());
}
