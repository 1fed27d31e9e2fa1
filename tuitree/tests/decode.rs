use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{
    Event, KeyCode, KeyEvent as CtKeyEvent, KeyEventKind, KeyModifiers,
    MouseButton as CtButton, MouseEvent as CtMouseEvent, MouseEventKind as CtKind,
};
use tuitree::{
    InputDecoder, InputEvent, Key, KeyEvent, MouseButton, MouseEvent, MouseEventKind, Rect, Tree,
    TreeView, TreeViewConfig,
};

fn mouse(kind: CtKind, column: u16, row: u16) -> Event {
    Event::Mouse(CtMouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn press(column: u16, row: u16) -> Event {
    mouse(CtKind::Down(CtButton::Left), column, row)
}

fn release(column: u16, row: u16) -> Event {
    mouse(CtKind::Up(CtButton::Left), column, row)
}

fn kinds(decoder: &mut InputDecoder, events: &[(Event, Instant)]) -> Vec<MouseEventKind> {
    events
        .iter()
        .filter_map(|(event, at)| decoder.decode_at(event, *at))
        .filter_map(|input| match input {
            InputEvent::Mouse(mouse) => Some(mouse.kind),
            InputEvent::Key(_) => None,
        })
        .collect()
}

// ============================================================================
// Plain conversion
// ============================================================================

#[test]
fn test_keys_pass_through_and_releases_are_dropped() {
    let mut decoder = InputDecoder::new();
    let press = Event::Key(CtKeyEvent::new(KeyCode::Down, KeyModifiers::SHIFT));
    assert_eq!(
        decoder.decode(&press),
        Some(InputEvent::Key(KeyEvent::new(Key::Down, tuitree::Modifiers::shift())))
    );

    let mut release = CtKeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;
    assert_eq!(decoder.decode(&Event::Key(release)), None);
    assert_eq!(decoder.decode(&Event::Resize(80, 24)), None);
}

#[test]
fn test_wheel_and_moves() {
    let mut decoder = InputDecoder::new();
    assert_eq!(
        decoder.decode(&mouse(CtKind::ScrollDown, 3, 4)),
        Some(InputEvent::Mouse(MouseEvent::new(MouseEventKind::WheelDown, 3, 4)))
    );
    assert_eq!(decoder.decode(&mouse(CtKind::Moved, 3, 4)), None);
}

// ============================================================================
// Double clicks
// ============================================================================

#[test]
fn test_two_quick_clicks_on_one_cell_make_a_double_click() {
    let start = Instant::now();
    let mut decoder = InputDecoder::new();
    let later = |ms| start + Duration::from_millis(ms);

    let got = kinds(
        &mut decoder,
        &[
            (press(5, 2), later(0)),
            (release(5, 2), later(10)),
            (press(5, 2), later(100)),
            (release(5, 2), later(120)),
        ],
    );
    assert_eq!(
        got,
        vec![
            MouseEventKind::Down(MouseButton::Left),
            MouseEventKind::Up(MouseButton::Left),
            MouseEventKind::Down(MouseButton::Left),
            MouseEventKind::DoubleClick(MouseButton::Left),
        ]
    );
}

#[test]
fn test_third_click_starts_over() {
    let start = Instant::now();
    let mut decoder = InputDecoder::new();
    let later = |ms| start + Duration::from_millis(ms);

    let got = kinds(
        &mut decoder,
        &[
            (release(5, 2), later(0)),
            (release(5, 2), later(50)),
            (release(5, 2), later(100)),
        ],
    );
    assert_eq!(
        got,
        vec![
            MouseEventKind::Up(MouseButton::Left),
            MouseEventKind::DoubleClick(MouseButton::Left),
            MouseEventKind::Up(MouseButton::Left),
        ]
    );
}

#[test]
fn test_slow_or_moved_clicks_stay_single() {
    let start = Instant::now();
    let mut decoder = InputDecoder::with_interval(Duration::from_millis(200));
    let later = |ms| start + Duration::from_millis(ms);
    let up = MouseEventKind::Up(MouseButton::Left);

    // Too slow
    let got = kinds(&mut decoder, &[(release(5, 2), later(0)), (release(5, 2), later(300))]);
    assert_eq!(got, vec![up, up]);

    // Different cell
    let got = kinds(&mut decoder, &[(release(1, 1), later(400)), (release(2, 1), later(410))]);
    assert_eq!(got, vec![up, up]);

    // Different button
    let right = mouse(CtKind::Up(CtButton::Right), 2, 1);
    let got = kinds(&mut decoder, &[(right, later(420))]);
    assert_eq!(got, vec![MouseEventKind::Up(MouseButton::Right)]);
}

#[test]
fn test_real_double_click_activates_row() {
    let mut tree = Tree::new("root");
    let root = tree.root();
    let ids = tree.add_children(root, ["a", "b", "c"]).unwrap();

    let count = Rc::new(Cell::new(0));
    let seen = Rc::clone(&count);
    let mut view = TreeView::with_action(Rect::new(0, 0, 20, 6), move || seen.set(seen.get() + 1))
        .with_config(TreeViewConfig::new().hide_root());
    view.set_tree(tree);
    view.reflow();

    let start = Instant::now();
    let mut decoder = InputDecoder::new();
    for (i, event) in [press(4, 1), release(4, 1), press(4, 1), release(4, 1)]
        .iter()
        .enumerate()
    {
        let at = start + Duration::from_millis(40 * i as u64);
        if let Some(input) = decoder.decode_at(event, at) {
            view.handle_event(input);
        }
    }

    assert_eq!(view.selected(), Some(ids[1]));
    assert_eq!(count.get(), 1);
}
