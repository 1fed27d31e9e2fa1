//! Input events as widgets see them, and their decoding from crossterm.
//!
//! Terminals report presses and releases only. [`InputDecoder`] adds
//! double clicks by pairing releases on the same cell.

use std::time::{Duration, Instant};

/// Input delivered to a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Key press, routed to the focused widget
    Key(KeyEvent),
    /// Mouse press, release or wheel, routed by position
    Mouse(MouseEvent),
}

/// A key together with the modifiers held while it was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// A key pressed without modifiers.
    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::new())
    }
}

impl From<Key> for KeyEvent {
    fn from(key: Key) -> Self {
        Self::plain(key)
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }

    pub fn any(&self) -> bool {
        !self.none()
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// What the mouse did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    Down(MouseButton),
    Up(MouseButton),
    DoubleClick(MouseButton),
    WheelUp,
    WheelDown,
}

/// Mouse event. Coordinates are relative to the receiving widget once
/// a container has routed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub x: u16,
    pub y: u16,
}

impl MouseEvent {
    pub fn new(kind: MouseEventKind, x: u16, y: u16) -> Self {
        Self { kind, x, y }
    }

    pub fn down(x: u16, y: u16) -> Self {
        Self::new(MouseEventKind::Down(MouseButton::Left), x, y)
    }

    pub fn up(x: u16, y: u16) -> Self {
        Self::new(MouseEventKind::Up(MouseButton::Left), x, y)
    }

    pub fn double_click(x: u16, y: u16) -> Self {
        Self::new(MouseEventKind::DoubleClick(MouseButton::Left), x, y)
    }

    pub fn is_wheel(&self) -> bool {
        matches!(self.kind, MouseEventKind::WheelUp | MouseEventKind::WheelDown)
    }

    /// Same event, shifted into a child's coordinate space.
    pub fn translate(&self, dx: u16, dy: u16) -> Self {
        Self {
            kind: self.kind,
            x: self.x.saturating_sub(dx),
            y: self.y.saturating_sub(dy),
        }
    }
}

impl InputEvent {
    /// Convert a raw terminal event. Returns `None` for events the widgets
    /// have no use for (key releases, resize, focus, mouse motion).
    pub fn from_crossterm(event: &crossterm::event::Event) -> Option<Self> {
        use crossterm::event::{Event as CtEvent, KeyEventKind};
        match event {
            CtEvent::Key(key) if key.kind != KeyEventKind::Release => {
                Some(InputEvent::Key(KeyEvent::new(key.code.into(), key.modifiers.into())))
            }
            CtEvent::Mouse(mouse) => MouseEvent::from_crossterm(mouse).map(InputEvent::Mouse),
            _ => None,
        }
    }
}

/// Longest gap between two releases that still counts as a double click.
pub const DOUBLE_CLICK_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy)]
struct Click {
    button: MouseButton,
    x: u16,
    y: u16,
    at: Instant,
}

/// Stateful decoder for terminal events.
///
/// A release of the same button on the same cell as the previous release,
/// within the double click interval, is reported as
/// [`MouseEventKind::DoubleClick`] instead of a second `Up`. A third
/// release starts over.
#[derive(Debug, Clone)]
pub struct InputDecoder {
    interval: Duration,
    last_click: Option<Click>,
}

impl Default for InputDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl InputDecoder {
    pub fn new() -> Self {
        Self::with_interval(DOUBLE_CLICK_INTERVAL)
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            last_click: None,
        }
    }

    /// Decode an event received now.
    pub fn decode(&mut self, event: &crossterm::event::Event) -> Option<InputEvent> {
        self.decode_at(event, Instant::now())
    }

    /// Decode an event received at `now`.
    pub fn decode_at(
        &mut self,
        event: &crossterm::event::Event,
        now: Instant,
    ) -> Option<InputEvent> {
        let input = InputEvent::from_crossterm(event)?;
        let InputEvent::Mouse(mouse) = input else {
            return Some(input);
        };
        let MouseEventKind::Up(button) = mouse.kind else {
            return Some(input);
        };

        let repeated = self.last_click.take().is_some_and(|last| {
            last.button == button
                && last.x == mouse.x
                && last.y == mouse.y
                && now.saturating_duration_since(last.at) <= self.interval
        });
        if repeated {
            log::trace!("[input] double click at {},{}", mouse.x, mouse.y);
            let kind = MouseEventKind::DoubleClick(button);
            return Some(InputEvent::Mouse(MouseEvent::new(kind, mouse.x, mouse.y)));
        }

        self.last_click = Some(Click {
            button,
            x: mouse.x,
            y: mouse.y,
            at: now,
        });
        Some(input)
    }
}

impl MouseEvent {
    pub fn from_crossterm(mouse: &crossterm::event::MouseEvent) -> Option<Self> {
        use crossterm::event::MouseEventKind as CtKind;
        let kind = match mouse.kind {
            CtKind::Down(btn) => MouseEventKind::Down(btn.into()),
            CtKind::Up(btn) => MouseEventKind::Up(btn.into()),
            CtKind::ScrollUp => MouseEventKind::WheelUp,
            CtKind::ScrollDown => MouseEventKind::WheelDown,
            _ => return None,
        };
        Some(Self::new(kind, mouse.column, mouse.row))
    }
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Char('\0'), // Placeholder for unsupported keys
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
