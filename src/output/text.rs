//! Indented text output
//!
//! One line per node: the indent unit repeated `depth` times, then the bare
//! name. Nodes with children are drawn blue and bold when color is on.

use std::io::{self, Write};

use termcolor::{BufferedStandardStream, Color, ColorChoice, ColorSpec, NoColor, WriteColor};

use crate::error::{Error, Result};
use crate::tree::{PathTree, Visit};

use super::config::OutputConfig;

/// Renders a sorted [`PathTree`] as indented lines.
pub struct TextRenderer {
    config: OutputConfig,
}

impl TextRenderer {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Write every node to `out`, stopping at the first failed write.
    pub fn render<W: WriteColor>(&self, tree: &PathTree, out: &mut W) -> Result<()> {
        tree.walk_depth(|visit| self.write_node(out, visit))
            .map_err(Error::Render)
    }

    /// Render to a plain string.
    pub fn format(&self, tree: &PathTree) -> String {
        let mut out = NoColor::new(Vec::new());
        self.render(tree, &mut out)
            .expect("writing to a Vec cannot fail");
        String::from_utf8_lossy(&out.into_inner()).into_owned()
    }

    /// Render to stdout.
    ///
    /// Color is written whenever `use_color` is set; terminal detection is
    /// left to the caller.
    pub fn print(&self, tree: &PathTree) -> Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let mut stdout = BufferedStandardStream::stdout(choice);
        self.render(tree, &mut stdout)?;
        stdout.flush().map_err(Error::Render)
    }

    fn write_node<W: WriteColor>(&self, out: &mut W, visit: Visit<'_>) -> io::Result<()> {
        for _ in 0..visit.depth {
            out.write_all(self.config.indent.as_bytes())?;
        }
        if self.config.use_color && !visit.is_leaf {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            write!(out, "{}", visit.name)?;
            out.reset()?;
            writeln!(out)
        } else {
            writeln!(out, "{}", visit.name)
        }
    }
}
