//! Compares the three configurable spring families on one graph.
//!
//! Press 1, 2 or 3 to show or hide a curve.
//! Press Q or ESC to quit.
//!
//! With `RUST_LOG` set, logs go to `curvelab-demo.log` in the working directory.

mod common;

use anyhow::Result;
use common::{Canvas, KeyAction, init_tracing, is_quit_key, run_interactive, terminal_area};
use crossterm::{QueueableCommand, cursor::MoveTo, event::KeyCode, style::Print};
use curvelab::{Comparison, CurveRenderer, curve};
use std::io::Write;

fn draw(comparison: &Comparison, out: &mut dyn Write) -> Result<()> {
    let area = terminal_area(comparison.len() as u16 + 2)?;
    let graph = comparison.render(&area, &CurveRenderer::default())?;
    let mut canvas = Canvas::new(&area);
    canvas.draw(&graph);
    canvas.print(out, 0)?;

    let mut row = area.bottom() as u16 + 1;
    out.queue(MoveTo(0, row))?;
    out.queue(Print(format!(
        "shared window: x{:.2}",
        comparison.shared_time_scale()
    )))?;
    for (i, slot) in comparison.slots().iter().enumerate() {
        row += 1;
        let mark = if slot.active { "on " } else { "off" };
        out.queue(MoveTo(0, row))?;
        out.queue(Print(format!("[{}] {} {}", i + 1, mark, slot.spec)))?;
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing()?;

    let mut comparison = Comparison::new();
    comparison.push(curve!("spring(bounce: 0.3)"))?;
    comparison.push(curve!("interpolatingSpring(stiffness: 170, damping: 15)"))?;
    comparison.push(curve!("interactiveSpring(response: 0.4, dampingFraction: 0.7)"))?;

    run_interactive(comparison, draw, |comparison, key| {
        if is_quit_key(key) {
            return Ok(KeyAction::Exit);
        }
        let KeyCode::Char(c @ '1'..='3') = key.code else {
            return Ok(KeyAction::Continue);
        };
        let index = c as usize - '1' as usize;
        comparison.toggle(index)?;
        Ok(KeyAction::Redraw)
    })
}
