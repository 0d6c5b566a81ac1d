//! Common utilities for the terminal demos.

use anyhow::Result;
use crossterm::{
    ExecutableCommand, QueueableCommand,
    cursor::MoveTo,
    event::{self, Event, KeyCode, KeyEvent},
    style::{Color as TermColor, Print, ResetColor, SetForegroundColor},
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use curvelab::{Color, DrawArea, Line, Point, RenderedGraph};
use std::io::{Write, stdout};
use std::fs::OpenOptions;
use std::panic;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Log file the demos write to. The terminal belongs to the graph.
pub const LOG_FILE: &str = "curvelab-demo.log";

/// Installs a subscriber filtered by `RUST_LOG` that appends to [`LOG_FILE`].
///
/// Nothing is opened unless `RUST_LOG` is set.
pub fn init_tracing() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Draw area matching the terminal, leaving `reserved_rows` for text.
pub fn terminal_area(reserved_rows: u16) -> Result<DrawArea> {
    let (cols, rows) = terminal::size()?;
    let rows = rows.saturating_sub(reserved_rows).max(4);
    Ok(DrawArea::sized(f64::from(cols.max(8) - 1), f64::from(rows - 1))?)
}

/// A character grid that graph geometry is rasterized onto.
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Option<(char, Color)>>,
}

impl Canvas {
    pub fn new(area: &DrawArea) -> Self {
        let width = area.right().ceil() as usize + 1;
        let height = area.bottom().ceil() as usize + 1;
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    fn set(&mut self, point: Point, glyph: char, color: Color) {
        if point.x < 0.0 || point.y < 0.0 {
            return;
        }
        let (x, y) = (point.x.round() as usize, point.y.round() as usize);
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = Some((glyph, color));
        }
    }

    fn line(&mut self, line: &Line, glyph: char) {
        let steps = (line.to.x - line.from.x)
            .abs()
            .max((line.to.y - line.from.y).abs())
            .ceil()
            .max(1.0) as usize;
        for i in 0..=steps {
            // Dashes are measured in cells here rather than points
            if let Some([on, off]) = line.dash
                && (i as f64) % (on + off) >= on
            {
                continue;
            }
            let f = i as f64 / steps as f64;
            let point = Point::new(
                line.from.x + (line.to.x - line.from.x) * f,
                line.from.y + (line.to.y - line.from.y) * f,
            );
            self.set(point, glyph, line.color);
        }
    }

    /// Rasterizes axes first so curves draw over them.
    pub fn draw(&mut self, graph: &RenderedGraph) {
        self.line(&graph.axis.vertical, '│');
        self.line(&graph.axis.baseline, '─');
        if let Some(target) = &graph.axis.target {
            self.line(target, '┄');
        }
        for path in &graph.paths {
            for pair in path.points.windows(2) {
                let segment = Line {
                    from: pair[0],
                    to: pair[1],
                    width: path.width,
                    color: path.color,
                    dash: None,
                };
                self.line(&segment, '•');
            }
        }
    }

    /// Writes the grid starting at terminal row `top`.
    pub fn print(&self, out: &mut dyn Write, top: u16) -> Result<()> {
        for (row, cells) in self.cells.chunks(self.width).enumerate() {
            out.queue(MoveTo(0, top + row as u16))?;
            for cell in cells {
                match cell {
                    Some((glyph, color)) => {
                        let (r, g, b) = color.to_rgb8();
                        out.queue(SetForegroundColor(TermColor::Rgb { r, g, b }))?;
                        out.queue(Print(glyph))?;
                    }
                    None => {
                        out.queue(Print(' '))?;
                    }
                }
            }
        }
        out.queue(ResetColor)?;
        Ok(())
    }
}

/// Key handling result that controls the event loop
pub enum KeyAction {
    Continue,
    Redraw,
    Exit,
}

pub fn is_quit_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
}

/// Runs a full-screen demo: `draw` paints the screen, `key_handler` reacts
/// to key presses.
pub fn run_interactive<S, D, K>(mut state: S, mut draw: D, mut key_handler: K) -> Result<()>
where
    D: FnMut(&S, &mut dyn Write) -> Result<()>,
    K: FnMut(&mut S, &KeyEvent) -> Result<KeyAction>,
{
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(crossterm::cursor::Hide)?;

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        cleanup_terminal();
        original_hook(panic_info);
    }));

    let result = (|| -> Result<()> {
        let mut out = stdout();
        redraw(&state, &mut draw, &mut out)?;
        loop {
            if !event::poll(Duration::from_millis(50))? {
                continue;
            }
            match event::read()? {
                Event::Key(key_event) => match key_handler(&mut state, &key_event)? {
                    KeyAction::Continue => {}
                    KeyAction::Redraw => redraw(&state, &mut draw, &mut out)?,
                    KeyAction::Exit => return Ok(()),
                },
                Event::Resize(..) => redraw(&state, &mut draw, &mut out)?,
                _ => {}
            }
        }
    })();

    cleanup_terminal();
    result
}

fn redraw<S, D>(state: &S, draw: &mut D, out: &mut impl Write) -> Result<()>
where
    D: FnMut(&S, &mut dyn Write) -> Result<()>,
{
    out.queue(Clear(ClearType::All))?;
    draw(state, out)?;
    out.flush()?;
    Ok(())
}

/// Restores the cursor, main screen and cooked mode.
fn cleanup_terminal() {
    let _ = stdout().execute(crossterm::cursor::Show);
    let _ = stdout().execute(LeaveAlternateScreen);
    let _ = disable_raw_mode();
}
