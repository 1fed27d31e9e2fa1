use tuitree::text::{char_width, clip_columns, display_width};

#[test]
fn test_display_width() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width("├─ 日本"), 7);
    assert_eq!(char_width('日'), 2);
}

#[test]
fn test_clip_pads_and_truncates() {
    assert_eq!(clip_columns("hello", 0, 3), "hel");
    assert_eq!(clip_columns("hello", 2, 5), "llo  ");
    assert_eq!(clip_columns("hi", 5, 3), "   ");
    assert_eq!(clip_columns("hello", 0, 0), "");
}

#[test]
fn test_clip_wide_characters_at_edges() {
    // Left half of 日 scrolled away
    assert_eq!(clip_columns("日本", 1, 3), " 本");
    // 本 does not fit in the last column
    assert_eq!(clip_columns("日本", 0, 3), "日 ");
}
