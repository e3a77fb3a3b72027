use super::*;

#[test]
fn unit_channels_span_zero_to_one() {
    assert_eq!(Rgb8::BLACK.to_unit(), [0.0, 0.0, 0.0]);
    assert_eq!(Rgb8::new(255, 255, 255).to_unit(), [1.0, 1.0, 1.0]);

    let [r, g, b] = Rgb8::MUTED.to_unit();
    assert!((r - 140.0 / 255.0).abs() < 1e-12);
    assert_eq!(r, g);
    assert_eq!(g, b);
}

#[test]
fn default_color_is_black() {
    assert_eq!(Rgb8::default(), Rgb8::BLACK);
}
