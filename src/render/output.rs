//! Writers for the rendered line stream.
//!
//! `Text` follows the line grammar from `Line`'s `Display`; `Json` writes
//! one tagged object per line (NDJSON) for scripts.

use std::io::{self, Write};

use clap::ValueEnum;

use crate::error::Result;
use crate::graph::CommitGraph;
use crate::models::Line;
use crate::render::{RenderStats, Renderer};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub struct LineWriter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> LineWriter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn write_line(&mut self, line: &Line) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", line)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, line)?;
                self.out.write_all(b"\n")?;
            }
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Stream the rendering of `graph` into `out`.
pub fn render_to<W: Write>(graph: &CommitGraph, out: W, format: OutputFormat) -> Result<RenderStats> {
    let mut writer = LineWriter::new(out, format);
    let stats = Renderer::new(graph).render(|line| writer.write_line(&line))?;
    writer.finish()?;
    Ok(stats)
}

/// Render to stdout through a buffered writer.
pub fn render_to_stdout(graph: &CommitGraph, format: OutputFormat) -> Result<RenderStats> {
    let stdout = io::stdout();
    render_to(graph, io::BufWriter::new(stdout.lock()), format)
}
