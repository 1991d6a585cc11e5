use super::*;

#[test]
fn format_size_picks_unit() {
    assert_eq!(format_size(None), "");
    assert_eq!(format_size(Some(512)), "512 B");
    assert_eq!(format_size(Some(2048)), "2.0 KB");
    assert_eq!(format_size(Some(3 * 1024 * 1024 + 512 * 1024)), "3.5 MB");
}
