use super::{Frame, Navigator};
use derive_setters::Setters;
use image_histogram::Histogram;
use std::io::{self, BufRead, Write};

const HELP: &str = "Navigate with the keyboard, then press Enter:
  n, d, right arrow, down arrow or empty line : next image
  p, a, left arrow, up arrow                  : previous image
  q                                           : quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "" | "n" | "d" | "right" | "down" | "\x1b[c" | "\x1b[b" => Command::Next,
            "p" | "a" | "left" | "up" | "\x1b[d" | "\x1b[a" => Command::Previous,
            "q" | "quit" | "exit" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// Draws frames as text and pages through them on line-based input.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct TextViewer {
    #[derivative(Default(value = "60"))]
    bar_width: usize,

    #[derivative(Default(value = "16"))]
    rows: usize,
}

impl TextViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the current frame, then reacts to one command per input line
    /// until `q` or end of input.
    pub fn run<'a, N, F, R, W>(
        &self,
        mut navigator: Navigator<N>,
        render: F,
        input: R,
        mut output: W,
    ) -> io::Result<()>
    where
        N: AsRef<str>,
        F: Fn(&str) -> Option<Frame<'a>>,
        R: BufRead,
        W: Write,
    {
        writeln!(output, "{HELP}")?;
        self.show(&navigator, &render, &mut output)?;

        for line in input.lines() {
            match Command::parse(&line?) {
                Command::Next => {
                    navigator.advance();
                }
                Command::Previous => {
                    navigator.retreat();
                }
                Command::Quit => break,
                Command::Unknown(cmd) => {
                    writeln!(output, "unknown command: {cmd}")?;
                    continue;
                }
            }

            self.show(&navigator, &render, &mut output)?;
        }

        writeln!(output)?;
        output.flush()
    }

    fn show<'a, N, F, W>(&self, navigator: &Navigator<N>, render: &F, out: &mut W) -> io::Result<()>
    where
        N: AsRef<str>,
        F: Fn(&str) -> Option<Frame<'a>>,
        W: Write,
    {
        let Some(name) = navigator.current() else {
            return writeln!(out, "nothing to show");
        };

        match render(name.as_ref()) {
            Some(frame) => self.draw(&frame, out)?,
            None => writeln!(out, "{}: nothing to show", name.as_ref())?,
        }

        write!(out, "[{}/{}] > ", navigator.index() + 1, navigator.len())?;
        out.flush()
    }

    pub fn draw<W: Write>(&self, frame: &Frame<'_>, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(
            out,
            "Image: {} ({}) {}x{}",
            frame.variant,
            frame.variant.label(),
            frame.image.width(),
            frame.image.height()
        )?;
        writeln!(
            out,
            "Mean: {:.1}, Min: {}, Max: {}",
            frame.stats.mean, frame.stats.min, frame.stats.max
        )?;

        match &frame.histogram {
            Some(histogram) => self.draw_histogram(frame.variant.name(), histogram, out),
            None => writeln!(out, "Histogram: {} unavailable", frame.variant),
        }
    }

    fn draw_histogram<W: Write>(
        &self,
        name: &str,
        histogram: &Histogram,
        out: &mut W,
    ) -> io::Result<()> {
        let columns = self.columns(histogram);
        let peak = columns.iter().copied().max().unwrap_or(0);
        let rows = self.rows.max(1);

        writeln!(
            out,
            "Histogram: {name} ({} levels, {} pixels, peak {peak} per column)",
            histogram.num_levels(),
            histogram.total()
        )?;

        // at least one row for every non-empty column
        let heights: Vec<usize> = columns
            .iter()
            .map(|&count| match peak {
                0 => 0,
                _ => (count * rows as u64).div_ceil(peak) as usize,
            })
            .collect();

        for row in (1..=rows).rev() {
            let line: String = heights
                .iter()
                .map(|&h| if h >= row { '#' } else { ' ' })
                .collect();
            writeln!(out, "|{}", line.trim_end())?;
        }

        writeln!(out, "+{}", "-".repeat(columns.len()))?;

        let last = histogram.num_levels().saturating_sub(1);
        if columns.len() > 1 {
            writeln!(out, " 0{last:>width$}", width = columns.len() - 1)
        } else {
            writeln!(out, " 0")
        }
    }

    /// Sums neighbouring levels so the chart fits in `bar_width` columns.
    fn columns(&self, histogram: &Histogram) -> Vec<u64> {
        let levels = histogram.num_levels();
        if levels == 0 {
            return vec![];
        }

        let count = self.bar_width.clamp(1, levels);
        (0..count)
            .map(|c| {
                let (start, end) = (c * levels / count, (c + 1) * levels / count);
                histogram.counts()[start..end].iter().sum()
            })
            .collect()
    }
}
