//! Browse a directory tree. Directories load their entries when opened.
//!
//! Enter or a double click activates an entry.
//!
//! Run with `cargo run --example browser [path]`, quit with `q` or Esc.
//! Log output goes to `browser.log`.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use simplelog::{Config, LevelFilter, WriteLogger};
use tuitree::{
    FocusRing, InputDecoder, InputEvent, Key, KeyEvent, NodeId, Rect, Tree, TreeView,
    TreeViewConfig,
};

fn main() -> io::Result<()> {
    let log_file = File::create("browser.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let root = std::env::args().nth(1).unwrap_or_else(|| ".".to_string());

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;

    let result = run(&root);

    execute!(stdout, cursor::Show, DisableMouseCapture, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(root: &str) -> io::Result<()> {
    let (width, height) = terminal::size()?;

    let mut tree = Tree::new(root);
    let root_id = tree.root();
    load_entries(&mut tree, root_id);

    let mut view = TreeView::with_action(Rect::new(0, 0, width, height), || {
        log::info!("activated");
    })
    .with_config(TreeViewConfig::new().page_step(10))
    .on_expand(|tree, id, expanded| {
        if expanded {
            load_entries(tree, id);
        }
    });
    view.set_tree(tree);
    view.set_selected(Some(root_id)).map_err(io::Error::other)?;
    view.reflow();

    let mut ring = FocusRing::new();
    let index = ring.push(view);
    let mut decoder = InputDecoder::new();

    loop {
        draw(&ring, index)?;

        let raw = event::read()?;
        if let event::Event::Resize(width, height) = raw {
            if let Some(view) = ring.get_mut::<TreeView>(index) {
                view.set_rect(Rect::new(0, 0, width, height));
            }
            continue;
        }
        let Some(event) = decoder.decode(&raw) else {
            continue;
        };
        if let InputEvent::Key(KeyEvent {
            key: Key::Char('q') | Key::Escape,
            ..
        }) = event
        {
            return Ok(());
        }
        ring.handle(event);
    }
}

/// Replace the children of `id` with the entries of the directory it names.
fn load_entries(tree: &mut Tree, id: NodeId) {
    let path = path_of(tree, id);
    let entries = match std::fs::read_dir(&path) {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!("cannot read {}: {}", path.display(), err);
            return;
        }
    };

    let mut entries: Vec<(String, bool)> = entries
        .filter_map(Result::ok)
        .map(|entry| {
            let is_dir = entry.file_type().is_ok_and(|kind| kind.is_dir());
            (entry.file_name().to_string_lossy().into_owned(), is_dir)
        })
        .collect();
    entries.sort();

    if tree.clear_children(id).is_err() {
        return;
    }
    for (name, is_dir) in entries {
        let Ok(child) = tree.add_child(id, name) else {
            return;
        };
        if let Some(node) = tree.node_mut(child) {
            node.set_expandable(is_dir);
        }
    }
    log::debug!("loaded {} entries from {}", tree.children(id).len(), path.display());
}

fn path_of(tree: &Tree, id: NodeId) -> PathBuf {
    let mut parts: Vec<&str> = std::iter::once(id)
        .chain(tree.ancestors(id))
        .filter_map(|node| tree.label(node))
        .collect();
    parts.reverse();
    parts.into_iter().collect()
}

fn draw(ring: &FocusRing, index: usize) -> io::Result<()> {
    let Some(widget) = ring.widget(index) else {
        return Ok(());
    };
    let rect = widget.rect();
    let mut stdout = io::stdout();

    queue!(stdout, Clear(ClearType::All))?;
    for (row, line) in widget.render().iter().enumerate() {
        queue!(stdout, cursor::MoveTo(rect.x, rect.y + row as u16))?;
        if line.highlighted {
            queue!(
                stdout,
                SetAttribute(Attribute::Reverse),
                Print(&line.text),
                SetAttribute(Attribute::Reset)
            )?;
        } else {
            queue!(stdout, Print(&line.text))?;
        }
    }
    stdout.flush()
}
