use super::*;
use crate::{params::model::ColorMode, volume::units::DisplayUnit};

#[test]
fn capacity_keys_parse() {
    assert_eq!("large".parse::<Capacity>().unwrap(), Capacity::LARGE);
    assert_eq!("dvd".parse::<Capacity>().unwrap(), Capacity::DVD);
    assert_eq!("1234".parse::<Capacity>().unwrap(), Capacity(1234));
    assert!(matches!(
        "bluray".parse::<Capacity>(),
        Err(RawscopeError::Configuration(_))
    ));
}

#[test]
fn default_model_is_small_and_quiet() {
    let r = VolumeCalculator::default().compute(&ParameterModel::default());
    assert_eq!(r.frame_bits, BigUint::from(1024u32));
    assert_eq!(r.frame_bytes, BigUint::from(128u32));
    assert_eq!(r.total_frames, BigUint::from(5u32));
    assert_eq!(r.total_bytes, BigUint::from(640u32));
    assert!(!r.alert_triggered);
    assert_eq!(r.displayed_frame_value, "128.00 Bytes");
    assert_eq!(r.displayed_total_value, "640.00 Bytes");
}

#[test]
fn alert_is_strictly_greater_than_capacity() {
    // Default model totals 640 bytes.
    let model = ParameterModel::default();
    let at = VolumeCalculator::new(Capacity(640)).compute(&model);
    assert!(!at.alert_triggered);
    let below = VolumeCalculator::new(Capacity(639)).compute(&model);
    assert!(below.alert_triggered);
}

#[test]
fn breakdown_mentions_every_factor() {
    let model = ParameterModel::default()
        .with_size(1920, 1080)
        .with_fps(30)
        .with_duration_secs(60)
        .with_bits_per_channel(8)
        .with_color_mode(ColorMode::Color)
        .with_display_unit(DisplayUnit::Auto);
    let r = VolumeCalculator::default().compute(&model);
    let [frame_line, total_line] = r.breakdown();
    assert_eq!(
        frame_line,
        "1,920 px × 1,080 px × 8 bit × 3 channels = 6.22 MB"
    );
    assert_eq!(total_line, "6.22 MB × 30 fps × 60 s = 11.19 GB");
}
