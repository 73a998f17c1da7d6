use super::*;
use std::collections::HashMap;

#[test]
fn defaults_are_valid() {
    let cfg = PlaybackConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.wedge_frames, 12);
    assert!(cfg.preview.color);
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg = PlaybackConfig::from_json(r#"{ "fps": 12, "preview": { "double_spaced": true } }"#)
        .unwrap();
    assert_eq!(cfg.fps, 12);
    assert_eq!(cfg.transition_frames, 15);
    assert!(cfg.preview.double_spaced);
    assert!(cfg.preview.color);
}

#[test]
fn unknown_fields_are_config_errors() {
    let err = PlaybackConfig::from_json(r#"{ "fsp": 12 }"#).unwrap_err();
    assert!(matches!(err, HexError::Config(_)));
}

#[test]
fn env_overrides_win_and_garbage_is_ignored() {
    let env: HashMap<&str, &str> = [
        ("HEXGLOW_FPS", "60"),
        ("HEXGLOW_TRANSITION_FRAMES", "not-a-number"),
        ("HEXGLOW_SEED", " 1234 "),
    ]
    .into_iter()
    .collect();
    let cfg = PlaybackConfig::default().with_overrides(|k| env.get(k).map(|v| v.to_string()));
    assert_eq!(cfg.fps, 60);
    assert_eq!(cfg.transition_frames, 15);
    assert_eq!(cfg.random_seed, Some(1234));
}

#[test]
fn validation_catches_bad_counts() {
    let zero_fps = PlaybackConfig {
        fps: 0,
        ..PlaybackConfig::default()
    };
    assert!(zero_fps.validate().is_err());

    let odd_waves = PlaybackConfig {
        wave_frames: 41,
        ..PlaybackConfig::default()
    };
    let err = odd_waves.validate().unwrap_err();
    assert!(err.to_string().contains("wave_frames"));

    let one_wedge = PlaybackConfig {
        wedge_frames: 1,
        ..PlaybackConfig::default()
    };
    assert!(matches!(one_wedge.validate(), Err(HexError::Validation(_))));
}

#[test]
fn from_path_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("playback.json");
    std::fs::write(&path, r#"{ "random_frames": 3, "spectrum_frames": 8 }"#).unwrap();
    let cfg = PlaybackConfig::from_path(&path).unwrap();
    assert_eq!(cfg.random_frames, 3);
    assert_eq!(cfg.spectrum_frames, 8);
}

#[test]
fn missing_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PlaybackConfig::from_path(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, HexError::Config(_)));
}

#[test]
fn frame_duration_follows_fps() {
    let cfg = PlaybackConfig {
        fps: 4,
        ..PlaybackConfig::default()
    };
    assert_eq!(cfg.frame_duration(), std::time::Duration::from_millis(250));
}
