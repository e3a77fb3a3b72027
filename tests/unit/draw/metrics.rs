use super::*;

#[test]
fn win_ansi_maps_ascii_and_dashes() {
    assert_eq!(encode_win_ansi("Jan 01"), b"Jan 01".to_vec());
    assert_eq!(encode_win_ansi("a\u{2013}b"), vec![b'a', 0x96, b'b']);
    assert_eq!(encode_win_ansi("\u{00e9}"), b"?".to_vec());
}

#[test]
fn helvetica_widths_match_afm() {
    // H=722, e=556, l=222, l=222, o=556
    let w = text_width(FontFamily::Helvetica, FontStyle::Regular, 1000.0, "Hello");
    assert!((w - 2278.0).abs() < 1e-9);

    let bold = text_width(FontFamily::Helvetica, FontStyle::Bold, 10.0, "Home");
    // H=722, o=611, m=889, e=556
    assert!((bold - 27.78).abs() < 1e-9);
}

#[test]
fn courier_is_monospaced() {
    let w = text_width(FontFamily::Courier, FontStyle::Bold, 10.0, "iWm.");
    assert!((w - 24.0).abs() < 1e-9);
}
