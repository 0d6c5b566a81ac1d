//! Plots one or more curve descriptors in the terminal.
//!
//! Usage: `cargo run --example plot_curve -- "spring(bounce: 0.4)" easeOut`
//!
//! Press UP/DOWN to step the first parameter of the first curve.
//! Press Q or ESC to quit.
//!
//! With `RUST_LOG` set, logs go to `curvelab-demo.log` in the working directory.

mod common;

use anyhow::{Result, bail};
use common::{Canvas, KeyAction, init_tracing, is_quit_key, run_interactive, terminal_area};
use crossterm::{QueueableCommand, cursor::MoveTo, event::KeyCode, style::Print};
use curvelab::{Comparison, CurveRenderer, CurveSpec, MAX_SLOTS, TimingCurve};
use std::io::Write;

struct PlotState {
    comparison: Comparison,
    renderer: CurveRenderer,
}

impl PlotState {
    /// Moves the first parameter of the first curve by `steps` table steps.
    fn nudge(&mut self, steps: f64) -> Result<()> {
        let Some(slot) = self.comparison.slots().first() else {
            return Ok(());
        };
        let spec = &slot.spec;
        let Some(param) = spec.family().param_specs().first() else {
            return Ok(());
        };
        let value = param.snap(param.clamp(spec.param(param.key) + steps * param.step));
        let updated = spec.with_param(param.key, value)?;
        self.comparison.replace(0, updated)?;
        Ok(())
    }
}

fn draw(state: &PlotState, out: &mut dyn Write) -> Result<()> {
    let area = terminal_area(2)?;
    let graph = state.comparison.render(&area, &state.renderer)?;
    let mut canvas = Canvas::new(&area);
    canvas.draw(&graph);
    canvas.print(out, 0)?;

    let legend = state
        .comparison
        .slots()
        .iter()
        .map(|slot| {
            format!(
                "{}: {} (x{:.2})",
                slot.spec.family().title(),
                slot.spec,
                slot.spec.time_scale()
            )
        })
        .collect::<Vec<_>>()
        .join("  ");
    out.queue(MoveTo(0, area.bottom() as u16 + 1))?;
    out.queue(Print(legend))?;
    Ok(())
}

fn main() -> Result<()> {
    init_tracing()?;

    let mut descriptors: Vec<String> = std::env::args().skip(1).collect();
    if descriptors.is_empty() {
        descriptors.push("bouncy".to_string());
    }
    if descriptors.len() > MAX_SLOTS {
        bail!("at most {MAX_SLOTS} curves can be plotted together");
    }

    let mut comparison = Comparison::new();
    for descriptor in &descriptors {
        let spec: CurveSpec = descriptor.parse()?;
        comparison.push(spec)?;
    }

    let state = PlotState {
        comparison,
        renderer: CurveRenderer::default(),
    };

    run_interactive(state, draw, |state, key| {
        if is_quit_key(key) {
            return Ok(KeyAction::Exit);
        }
        match key.code {
            KeyCode::Up => state.nudge(1.0)?,
            KeyCode::Down => state.nudge(-1.0)?,
            _ => return Ok(KeyAction::Continue),
        }
        Ok(KeyAction::Redraw)
    })
}
