use tuitree::{Glyphs, Orientation, Rect, Scrollbar};

fn vertical(length: u16, max: usize) -> Scrollbar {
    let mut bar = Scrollbar::new(Orientation::Vertical, Rect::new(9, 0, 1, length));
    bar.set_max(max);
    bar
}

#[test]
fn test_increment_and_decrement_clamp() {
    let mut bar = vertical(10, 2);
    bar.increment();
    bar.increment();
    bar.increment();
    assert_eq!(bar.value(), 2);
    bar.decrement();
    bar.decrement();
    bar.decrement();
    assert_eq!(bar.value(), 0);
}

#[test]
fn test_big_steps_clamp() {
    let mut bar = vertical(10, 30);
    bar.set_big_change(12);
    bar.big_increment();
    assert_eq!(bar.value(), 12);
    bar.big_increment();
    bar.big_increment();
    assert_eq!(bar.value(), 30);
    bar.big_decrement();
    assert_eq!(bar.value(), 18);
    bar.big_decrement();
    bar.big_decrement();
    assert_eq!(bar.value(), 0);
}

#[test]
fn test_top_bottom_and_clamp() {
    let mut bar = vertical(10, 7);
    bar.to_bottom();
    assert_eq!(bar.value(), 7);
    bar.to_top();
    assert_eq!(bar.value(), 0);

    bar.set_value(50);
    assert!(bar.clamp());
    assert_eq!(bar.value(), 7);
    assert!(!bar.clamp());
}

#[test]
fn test_thumb_position() {
    let mut bar = vertical(10, 14);
    assert_eq!(bar.thumb_position(), Some(1));
    bar.set_value(7);
    assert_eq!(bar.thumb_position(), Some(4));
    bar.to_bottom();
    assert_eq!(bar.thumb_position(), Some(8));

    assert_eq!(vertical(2, 5).thumb_position(), None);
    assert_eq!(vertical(5, 0).thumb_position(), Some(1));
}

#[test]
fn test_mouse_down_outside_is_not_handled() {
    let mut bar = vertical(10, 5);
    assert!(!bar.on_mouse_down(3, 3));
    assert!(!bar.on_mouse_down(9, 10));
    assert_eq!(bar.value(), 0);
}

#[test]
fn test_mouse_down_on_track_pages() {
    let mut bar = vertical(10, 100);
    bar.set_big_change(10);
    assert!(bar.on_mouse_down(9, 5));
    assert_eq!(bar.value(), 10);

    // Thumb now at (7 * 10 / 100) + 1 = 1; clicking on it does nothing
    assert!(bar.on_mouse_down(9, 1));
    assert_eq!(bar.value(), 10);
}

#[test]
fn test_horizontal_geometry() {
    let mut bar = Scrollbar::horizontal_for(20, 6);
    assert_eq!(bar.rect(), Rect::new(0, 5, 19, 1));
    bar.set_max(3);
    assert!(bar.on_mouse_down(18, 5));
    assert_eq!(bar.value(), 1);

    bar.fit_to(30, 8);
    assert_eq!(bar.rect(), Rect::new(0, 7, 29, 1));
    assert_eq!(bar.length(), 29);
}

#[test]
fn test_render() {
    let mut bar = vertical(6, 10);
    assert_eq!(bar.render(Glyphs::Ascii), "^#...v");
    bar.to_bottom();
    assert_eq!(bar.render(Glyphs::Ascii), "^...#v");
    assert_eq!(bar.render(Glyphs::Unicode), "▲░░░█▼");

    let horizontal = Scrollbar::horizontal_for(5, 3);
    assert_eq!(horizontal.render(Glyphs::Ascii), "<#.>");
}
