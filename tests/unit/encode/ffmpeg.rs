use super::*;

fn cfg(width: u32, height: u32) -> EncodeConfig {
    EncodeConfig {
        width,
        height,
        fps: Fps::from_tick_ms(20).unwrap(),
        out_path: PathBuf::from("target/out.mp4"),
        overwrite: true,
    }
}

#[test]
fn config_validation_catches_bad_values() {
    assert!(cfg(0, 10).validate().is_err());
    assert!(cfg(11, 10).validate().is_err());
    assert!(cfg(10, 11).validate().is_err());
    assert!(cfg(360, 720).validate().is_ok());
}

#[test]
fn refuses_to_clobber_without_overwrite() {
    let dir = PathBuf::from("target").join("ffmpeg_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let existing = dir.join("exists.mp4");
    std::fs::write(&existing, b"x").unwrap();

    let mut c = cfg(16, 16);
    c.out_path = existing;
    c.overwrite = false;
    let err = FfmpegEncoder::new(c).err().unwrap();
    assert!(err.to_string().contains("already exists"));
}
