use super::*;

#[test]
fn two_levels_is_binary() {
    let mut v = -10.0;
    while v <= 300.0 {
        let q = quantize(v, 2);
        assert!(q == 0 || q == 255, "{v} -> {q}");
        v += 0.37;
    }
    assert_eq!(quantize(127.0, 2), 0);
    assert_eq!(quantize(128.0, 2), 255);
}

#[test]
fn full_depth_stays_within_one_code_value() {
    for i in 0..=2550 {
        let v = f64::from(i) / 10.0;
        let q = f64::from(quantize(v, 256));
        assert!((q - v.round()).abs() <= 1.0, "{v} -> {q}");
    }
    assert_eq!(quantize(127.0, 256), 127);
    assert_eq!(quantize(128.0, 256), 129);
}

#[test]
fn output_is_monotonic_and_pinned_at_the_ends() {
    for levels in MIN_LEVELS..=MAX_LEVELS {
        let mut prev = 0u8;
        for v in [-1e9, -0.5, 0.0, 63.7, 128.0, 254.6, 255.0, 255.4, 1e9] {
            let q = quantize(v, levels);
            assert!(q >= prev, "levels={levels} v={v}");
            prev = q;
        }
        assert_eq!(quantize(0.0, levels), 0);
        assert!(quantize(255.0, levels) >= 254, "levels={levels}");
    }
    for bits in 1..=8 {
        assert_eq!(quantize(255.0, levels_for_bits(bits)), 255, "bits={bits}");
    }
}

#[test]
fn degenerate_inputs_are_guarded() {
    assert_eq!(quantize(200.0, 0), quantize(200.0, 2));
    assert_eq!(quantize(200.0, 1), quantize(200.0, 2));
    assert_eq!(quantize(200.0, 100_000), quantize(200.0, 256));
    assert_eq!(quantize(f64::NAN, 4), 0);
    assert_eq!(quantize(f64::INFINITY, 4), 255);
    assert_eq!(quantize(f64::NEG_INFINITY, 4), 0);
}

#[test]
fn four_levels_use_the_256_step_ladder() {
    // Rungs at 0, 85.3, 170.7, 256 (clamped).
    assert_eq!(quantize(0.0, 4), 0);
    assert_eq!(quantize(60.0, 4), 85);
    assert_eq!(quantize(130.0, 4), 171);
    assert_eq!(quantize(250.0, 4), 255);
}

#[test]
fn eight_levels_match_the_256_step_ladder_everywhere() {
    let step = 256.0 / 7.0;
    for v in 0..=255 {
        let v = f64::from(v);
        let expected = ((v / step).round() * step).round().min(255.0) as u8;
        assert_eq!(quantize(v, 8), expected, "{v}");
    }
    assert_eq!(quantize(40.0, 8), 37);
}

#[test]
fn levels_for_bits_is_power_of_two() {
    assert_eq!(levels_for_bits(1), 2);
    assert_eq!(levels_for_bits(8), 256);
    assert_eq!(levels_for_bits(12), 256);
}
