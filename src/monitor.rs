//! Visualization and interaction boundary for the training loop.
//!
//! The trainer only ever talks to the [`EpochMonitor`] trait, so tests can
//! drive it headless while the shipped [`ConsoleMonitor`] renders an ASCII
//! scatter plot of the decision boundary and blocks on a one-line prompt.

use crate::common_types::{Example, Weights};
use num_traits::{AsPrimitive, Float};
use ordered_float::OrderedFloat;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

const PLOT_COLS: usize = 61;
const PLOT_ROWS: usize = 21;

/// Signal returned by the monitor after each epoch's checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepSignal {
    Continue,
    Quit,
}

/// Read-only snapshot of the trainer state handed to the monitor once per
/// epoch. Mistake lists are in ascending index order.
#[derive(Debug)]
pub struct EpochView<'a, F> {
    pub epoch: usize,
    pub negatives: &'a [Example<F>],
    pub positives: &'a [Example<F>],
    pub mistakes_neg: &'a [usize],
    pub mistakes_pos: &'a [usize],
    pub error_history: &'a [usize],
    pub weights: &'a Weights<F>,
    pub distance_history: &'a [F],
}

impl<F> EpochView<'_, F> {
    pub fn num_errors(&self) -> usize {
        self.mistakes_neg.len() + self.mistakes_pos.len()
    }
}

/// Per-epoch visualization and continue/stop decision.
pub trait EpochMonitor<F> {
    /// Renders the current classification state and both histories, then
    /// blocks for a single continue/stop decision.
    fn render_and_prompt(&mut self, view: &EpochView<'_, F>) -> StepSignal;
}

/// Interactive monitor over a line-based input and a text output. Quits on
/// any input line containing `q` (case-sensitive), or when input ends.
pub struct ConsoleMonitor<R, W> {
    input: R,
    output: W,
}

impl ConsoleMonitor<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        ConsoleMonitor::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleMonitor<R, W> {
    pub fn new(input: R, output: W) -> Self {
        ConsoleMonitor { input, output }
    }

    fn render<F>(&mut self, view: &EpochView<'_, F>) -> io::Result<StepSignal>
    where
        F: Float + AsPrimitive<f64>,
    {
        draw_plot(&mut self.output, view)?;

        writeln!(
            self.output,
            "Number of errors in iteration {}:\t{}",
            view.epoch,
            view.num_errors()
        )?;
        let w = &view.weights.components;
        writeln!(
            self.output,
            "weights:\t{:.4} {:.4} {:.4}",
            w[0].as_(),
            w[1].as_(),
            w[2].as_()
        )?;
        writeln!(self.output, "error history: {:?}", view.error_history)?;
        if !view.distance_history.is_empty() {
            let distances: Vec<f64> =
                view.distance_history.iter().map(|d| d.as_()).collect();
            writeln!(self.output, "distance to feasible: {distances:.4?}")?;
        }

        write!(self.output, "Press enter to continue, q to quit. >> ")?;
        self.output.flush()?;

        let mut line = String::new();
        let bytes_read = self.input.read_line(&mut line)?;
        if bytes_read == 0 || line.contains('q') {
            Ok(StepSignal::Quit)
        } else {
            Ok(StepSignal::Continue)
        }
    }
}

impl<R, W, F> EpochMonitor<F> for ConsoleMonitor<R, W>
where
    R: BufRead,
    W: Write,
    F: Float + AsPrimitive<f64>,
{
    fn render_and_prompt(&mut self, view: &EpochView<'_, F>) -> StepSignal {
        // A broken console is equivalent to the user walking away.
        self.render(view).unwrap_or(StepSignal::Quit)
    }
}

/// Maps a coordinate into a grid cell, or `None` when it falls outside.
fn cell(value: f64, lo: f64, step: f64, len: usize) -> Option<usize> {
    if step <= 0.0 {
        return None;
    }
    let idx = ((value - lo) / step).round();
    if idx < 0.0 || idx >= len as f64 {
        None
    } else {
        Some(idx as usize)
    }
}

fn draw_plot<W, F>(out: &mut W, view: &EpochView<'_, F>) -> io::Result<()>
where
    W: Write,
    F: Float + AsPrimitive<f64>,
{
    // Glyphs: correctly classified examples keep their class marker,
    // mistakes of either class render as 'X'.
    let mut points: Vec<(f64, f64, char)> = Vec::new();
    for (i, x) in view.negatives.iter().enumerate() {
        let glyph = if view.mistakes_neg.binary_search(&i).is_ok() {
            'X'
        } else {
            'o'
        };
        points.push((x.coords[0].as_(), x.coords[1].as_(), glyph));
    }
    for (i, x) in view.positives.iter().enumerate() {
        let glyph = if view.mistakes_pos.binary_search(&i).is_ok() {
            'X'
        } else {
            '+'
        };
        points.push((x.coords[0].as_(), x.coords[1].as_(), glyph));
    }
    if points.is_empty() {
        return Ok(());
    }

    let min_x = points.iter().map(|p| OrderedFloat(p.0)).min();
    let max_x = points.iter().map(|p| OrderedFloat(p.0)).max();
    let min_y = points.iter().map(|p| OrderedFloat(p.1)).min();
    let max_y = points.iter().map(|p| OrderedFloat(p.1)).max();
    let (Some(min_x), Some(max_x), Some(min_y), Some(max_y)) = (min_x, max_x, min_y, max_y)
    else {
        return Ok(());
    };

    let pad_x = ((max_x.into_inner() - min_x.into_inner()) * 0.1).max(1.0);
    let pad_y = ((max_y.into_inner() - min_y.into_inner()) * 0.1).max(1.0);
    let lo_x = min_x.into_inner() - pad_x;
    let hi_x = max_x.into_inner() + pad_x;
    let lo_y = min_y.into_inner() - pad_y;
    let hi_y = max_y.into_inner() + pad_y;
    let step_x = (hi_x - lo_x) / (PLOT_COLS - 1) as f64;
    let step_y = (hi_y - lo_y) / (PLOT_ROWS - 1) as f64;

    let mut grid = vec![vec![' '; PLOT_COLS]; PLOT_ROWS];

    // Decision boundary: w1*x + w2*y + b = 0.
    let w = &view.weights.components;
    let (w1, w2, b) = (w[0].as_(), w[1].as_(), w[2].as_());
    if w2.abs() > f64::EPSILON {
        for col in 0..PLOT_COLS {
            let x = lo_x + col as f64 * step_x;
            let y = -(w1 * x + b) / w2;
            if let Some(row) = cell(y, lo_y, step_y, PLOT_ROWS) {
                grid[row][col] = '*';
            }
        }
    } else if w1.abs() > f64::EPSILON {
        // Vertical boundary at x = -b / w1.
        if let Some(col) = cell(-b / w1, lo_x, step_x, PLOT_COLS) {
            for row in grid.iter_mut() {
                row[col] = '*';
            }
        }
    }

    for &(x, y, glyph) in &points {
        if let (Some(col), Some(row)) = (
            cell(x, lo_x, step_x, PLOT_COLS),
            cell(y, lo_y, step_y, PLOT_ROWS),
        ) {
            grid[row][col] = glyph;
        }
    }

    writeln!(
        out,
        "x: [{lo_x:.2}, {hi_x:.2}]  y: [{lo_y:.2}, {hi_y:.2}]  (o neg, + pos, X mistake, * boundary)"
    )?;
    for row in grid.iter().rev() {
        let line: String = row.iter().collect();
        writeln!(out, "{line}")?;
    }
    Ok(())
}
