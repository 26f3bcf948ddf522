//! Event-to-markup echo handler.
//!
//! Writes every event back out as markup, which makes it both a debugging
//! aid and a crude serializer: feeding a document through the tokenizer and
//! an [`EchoHandler`] reproduces equivalent markup on the other side.

use std::io::Write;

use ibis_dom::Attributes;

use crate::error::ParseError;
use crate::handler::Handler;

/// A [`Handler`] that re-serializes the event stream to a writer.
pub struct EchoHandler<W: Write> {
    out: W,
}

impl<W: Write> EchoHandler<W> {
    /// Echo events to `out`.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_attrs(&mut self, attrs: &Attributes) -> Result<(), ParseError> {
        for (name, value) in attrs.iter() {
            write!(self.out, " {name}=\"{value}\"")?;
        }
        Ok(())
    }
}

impl<W: Write> Handler for EchoHandler<W> {
    fn processing_instruction(&mut self, name: &str, attrs: &Attributes) -> Result<(), ParseError> {
        write!(self.out, "<?{name}")?;
        self.write_attrs(attrs)?;
        write!(self.out, ">")?;
        Ok(())
    }

    fn open(&mut self, tag: &str, attrs: &Attributes) -> Result<(), ParseError> {
        write!(self.out, "<{tag}")?;
        self.write_attrs(attrs)?;
        write!(self.out, ">")?;
        Ok(())
    }

    fn empty(&mut self, tag: &str, attrs: &Attributes) -> Result<(), ParseError> {
        write!(self.out, "<{tag}")?;
        self.write_attrs(attrs)?;
        write!(self.out, "/>")?;
        Ok(())
    }

    fn close(&mut self, tag: &str) -> Result<(), ParseError> {
        write!(self.out, "</{tag}>")?;
        Ok(())
    }

    fn text(&mut self, content: &str) -> Result<(), ParseError> {
        write!(self.out, "{content}")?;
        Ok(())
    }

    fn cdata(&mut self, content: &str) -> Result<(), ParseError> {
        write!(self.out, "<![CDATA[{content}]]>")?;
        Ok(())
    }

    fn doctype(&mut self, content: &str) -> Result<(), ParseError> {
        write!(self.out, "<!DOCTYPE{content}>")?;
        Ok(())
    }

    fn comment(&mut self, content: &str) -> Result<(), ParseError> {
        write!(self.out, "<!--{content}-->")?;
        Ok(())
    }
}
