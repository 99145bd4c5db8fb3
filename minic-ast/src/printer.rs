//! Tree printer
//! 
//! Every node type implements [`Render`], emitting its own label line and then
//! rendering its children one level deeper. Lines go through a [`Printer`],
//! which applies indentation, enforces the configured depth limit, and hands
//! finished lines to a [`LineSink`].

use log::trace;
use minic_common::{AstError, AstResult, RenderConfig};
use std::fmt;
use std::io;

/// Destination for rendered lines
pub trait LineSink {
    fn write_line(&mut self, line: &str) -> AstResult<()>;
}

impl LineSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> AstResult<()> {
        self.push(line.to_string());
        Ok(())
    }
}

/// Streams lines to an `io::Write`, one newline-terminated line per call
pub struct IoSink<W: io::Write> {
    writer: W,
}

impl<W: io::Write> IoSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: io::Write> LineSink for IoSink<W> {
    fn write_line(&mut self, line: &str) -> AstResult<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }
}

/// Adapts a `fmt::Formatter` so nodes can implement `Display`
pub struct FmtSink<'a, 'b> {
    formatter: &'a mut fmt::Formatter<'b>,
}

impl<'a, 'b> FmtSink<'a, 'b> {
    pub fn new(formatter: &'a mut fmt::Formatter<'b>) -> Self {
        Self { formatter }
    }
}

impl LineSink for FmtSink<'_, '_> {
    fn write_line(&mut self, line: &str) -> AstResult<()> {
        writeln!(self.formatter, "{}", line)?;
        Ok(())
    }
}

/// Line emitter shared by all nodes during one rendering pass
pub struct Printer<'a> {
    sink: &'a mut dyn LineSink,
    config: &'a RenderConfig,
    lines_emitted: usize,
}

impl<'a> Printer<'a> {
    pub fn new(sink: &'a mut dyn LineSink, config: &'a RenderConfig) -> Self {
        Self {
            sink,
            config,
            lines_emitted: 0,
        }
    }

    /// Emit `text` at `level`
    pub fn line(&mut self, level: usize, text: impl fmt::Display) -> AstResult<()> {
        if let Some(limit) = self.config.max_depth {
            if level > limit {
                return Err(AstError::DepthLimitExceeded { depth: level, limit });
            }
        }

        let line = format!("{}{}", self.config.indentation(level), text);
        trace!("emit[{}] {}", level, line);
        self.sink.write_line(&line)?;
        self.lines_emitted += 1;
        Ok(())
    }

    pub fn lines_emitted(&self) -> usize {
        self.lines_emitted
    }
}

/// The capability every node type implements: render itself at an
/// indentation level.
pub trait Render {
    fn render(&self, printer: &mut Printer<'_>, level: usize) -> AstResult<()>;
}

/// Convenience entry points available on every [`Render`] type
pub trait RenderExt: Render {
    /// Collect the rendered lines using the default configuration
    fn render_lines(&self, level: usize) -> AstResult<Vec<String>> {
        self.render_lines_with(&RenderConfig::default(), level)
    }

    fn render_lines_with(&self, config: &RenderConfig, level: usize) -> AstResult<Vec<String>> {
        let mut lines = Vec::new();
        let mut printer = Printer::new(&mut lines, config);
        self.render(&mut printer, level)?;
        Ok(lines)
    }

    /// Render at level 0 into a single newline-terminated string
    fn render_to_string(&self) -> AstResult<String> {
        let lines = self.render_lines(0)?;
        let mut out = String::new();
        for line in lines {
            out.push_str(&line);
            out.push('\n');
        }
        Ok(out)
    }

    /// Stream the rendered lines into `writer`
    fn write_to<W: io::Write>(&self, writer: W, level: usize) -> AstResult<W>
    where
        Self: Sized,
    {
        self.write_to_with(&RenderConfig::default(), writer, level)
    }

    fn write_to_with<W: io::Write>(
        &self,
        config: &RenderConfig,
        writer: W,
        level: usize,
    ) -> AstResult<W>
    where
        Self: Sized,
    {
        let mut sink = IoSink::new(writer);
        let mut printer = Printer::new(&mut sink, config);
        self.render(&mut printer, level)?;
        Ok(sink.into_inner())
    }
}

impl<T: Render + ?Sized> RenderExt for T {}

impl<T: Render + ?Sized> Render for Box<T> {
    fn render(&self, printer: &mut Printer<'_>, level: usize) -> AstResult<()> {
        (**self).render(printer, level)
    }
}

/// Implement `Display` by rendering at level 0 with the default configuration
macro_rules! display_via_render {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    let config = minic_common::RenderConfig::default();
                    let mut sink = $crate::printer::FmtSink::new(f);
                    let mut printer = $crate::printer::Printer::new(&mut sink, &config);
                    $crate::printer::Render::render(self, &mut printer, 0)
                        .map_err(|_| std::fmt::Error)
                }
            }
        )+
    };
}

pub(crate) use display_via_render;
