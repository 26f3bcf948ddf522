use std::collections::HashMap;
use std::mem;

use strum_macros::Display;

use ibis_common::warning::warn_once;
use ibis_dom::Attributes;

use crate::error::ParseError;
use crate::handler::Handler;

/// The tokenizer's scanning mode.
///
/// Exactly one mode is active at a time; every input character is consumed
/// by the active mode's handler, which may hand the same character to
/// another mode after a transition (bounded re-dispatch, never a loop).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Mode {
    /// Scanning character data between tags.
    Text,
    /// Scanning a tag name after `<`.
    Tag,
    /// Scanning an attribute name or value inside a tag.
    Attribute,
    /// Scanning the interior of a comment/CDATA/doctype block; nothing in
    /// it is tokenized until the registered end delimiter.
    Passthrough,
}

/// Which kind of tag the scanner is currently building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TagKind {
    /// An opening tag: `<a>`.
    Open,
    /// A closing tag: `</a>`.
    Close,
    /// A self-closing tag: `<a/>`.
    Empty,
    /// A processing instruction: `<?a?>`.
    ProcessingInstruction,
}

/// The function invoked when a passthrough block completes, with the block's
/// interior (end delimiter stripped).
pub type EmitFn<H> = fn(&mut H, &str) -> Result<(), ParseError>;

/// A registered passthrough block type.
struct Passthrough<H> {
    /// End delimiter; the block closes at a `>` preceded by this (an empty
    /// delimiter closes at the first `>`).
    end: String,
    emit: EmitFn<H>,
}

/// Streaming tokenizer for permissive XML/HTML-like markup.
///
/// Feed it characters with [`parse`](Tokenizer::parse) and it drives the
/// supplied [`Handler`] with structural events. All scanning state lives in
/// the instance; after a parse completes the instance resets itself and can
/// be reused for the next document.
///
/// There is no rejection path. Every character lands in some state, and the
/// only recovery action is force-closing a tag when a stray `<` shows up
/// inside one. Truncated input at end of stream drops the partial tag or
/// attribute silently.
pub struct Tokenizer<H: Handler> {
    mode: Mode,
    buffer: String,
    tag_name: Option<String>,
    attr_name: Option<String>,
    attrs: Attributes,
    quoted_value: bool,
    tag_kind: TagKind,
    passthrough: HashMap<String, Passthrough<H>>,
    // Bound when mode == Passthrough.
    active_end: String,
    active_emit: Option<EmitFn<H>>,
    line: usize,
    column: usize,
}

impl<H: Handler> Tokenizer<H> {
    /// Create a tokenizer with the built-in passthrough blocks registered:
    /// `<!-- -->` comments, `<![CDATA[ ]]>` sections, and `<!DOCTYPE >`
    /// declarations.
    #[must_use]
    pub fn new() -> Self {
        let mut tokenizer = Tokenizer {
            mode: Mode::Text,
            buffer: String::new(),
            tag_name: None,
            attr_name: None,
            attrs: Attributes::new(),
            quoted_value: false,
            tag_kind: TagKind::Open,
            passthrough: HashMap::new(),
            active_end: String::new(),
            active_emit: None,
            line: 1,
            column: 0,
        };
        tokenizer.register("!--", "--", |handler: &mut H, comment| handler.comment(comment));
        tokenizer.register("![CDATA[", "]]", |handler, cdata| handler.cdata(cdata));
        tokenizer.register("!DOCTYPE", "", |handler, doctype| handler.doctype(doctype));
        tokenizer
    }

    /// Register a passthrough block type: when a tag begins with `start`,
    /// everything up to a `>` preceded by `end` is accumulated verbatim and
    /// handed to `emit` with both delimiters stripped.
    ///
    /// Registration is only possible between parses: `parse` holds the
    /// tokenizer exclusively until the stream is exhausted.
    pub fn register(&mut self, start: &str, end: &str, emit: EmitFn<H>) {
        let _ = self.passthrough.insert(
            start.to_string(),
            Passthrough {
                end: end.to_string(),
                emit,
            },
        );
    }

    /// Current line (1-based), for diagnostics only.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Current column (0 at the start of each line), for diagnostics only.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Consume a character stream to exhaustion, driving `handler`.
    ///
    /// On exhaustion, any unflushed character data is emitted as one final
    /// `text` event, and all state resets so the instance can be reused.
    /// A tag left unterminated at end of stream produces no event.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by a `handler` callback; the
    /// tokenizer still resets, but events after the failure point are lost.
    pub fn parse<I>(&mut self, input: I, handler: &mut H) -> Result<(), ParseError>
    where
        I: IntoIterator<Item = char>,
    {
        let parsed = self.drive(input, handler);
        self.reset();
        parsed
    }

    /// Convenience wrapper over [`parse`](Tokenizer::parse) for in-memory
    /// sources.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by a `handler` callback.
    pub fn parse_str(&mut self, src: &str, handler: &mut H) -> Result<(), ParseError> {
        self.parse(src.chars(), handler)
    }

    fn drive<I>(&mut self, input: I, handler: &mut H) -> Result<(), ParseError>
    where
        I: IntoIterator<Item = char>,
    {
        for c in input {
            if c == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
            self.step(c, handler)?;
        }

        // Trailing character data with no tag after it still counts.
        if self.mode == Mode::Text && !self.buffer.is_empty() {
            let text = mem::take(&mut self.buffer);
            handler.text(&text)?;
        }
        Ok(())
    }

    /// Dispatch one character to the active mode. Mode handlers re-enter
    /// this dispatcher (through the specific scan methods) when a character
    /// terminates one construct and belongs to the next; the re-dispatch
    /// depth is bounded by the number of modes.
    fn step(&mut self, c: char, handler: &mut H) -> Result<(), ParseError> {
        match self.mode {
            Mode::Text => self.scan_text(c, handler),
            Mode::Tag => self.scan_tag(c, handler),
            Mode::Attribute => self.scan_attribute(c, handler),
            Mode::Passthrough => self.scan_passthrough(c, handler),
        }
    }

    fn scan_text(&mut self, c: char, handler: &mut H) -> Result<(), ParseError> {
        if c == '<' {
            if !self.buffer.is_empty() {
                let text = mem::take(&mut self.buffer);
                handler.text(&text)?;
            }
            self.mode = Mode::Tag;
            Ok(())
        } else {
            self.buffer.push(c);
            Ok(())
        }
    }

    fn scan_tag(&mut self, c: char, handler: &mut H) -> Result<(), ParseError> {
        match c {
            // A '<' inside a tag: the author never closed it. Force the tag
            // shut with whatever has been scanned and hand the '<' back to
            // the dispatcher as the start of the next construct.
            '<' => {
                warn_once(
                    "Tokenizer",
                    &format!(
                        "stray '<' inside tag near line {}, column {}",
                        self.line, self.column
                    ),
                );
                self.finish_tag(handler)?;
                self.step(c, handler)
            }
            '>' => self.finish_tag(handler),
            '?' => {
                self.tag_kind = TagKind::ProcessingInstruction;
                Ok(())
            }
            _ => {
                // A non-space character right after scanned whitespace is
                // the boundary between the tag name and its first attribute.
                if !self.buffer.is_empty()
                    && !c.is_whitespace()
                    && self.buffer.ends_with(char::is_whitespace)
                {
                    if self.tag_name.is_none() {
                        self.tag_name = Some(self.buffer.trim().to_string());
                    }
                    self.buffer.clear();
                    self.mode = Mode::Attribute;
                    self.scan_attribute(c, handler)
                } else if let Some(entry) = self.passthrough.get(self.buffer.trim()) {
                    self.active_end = entry.end.clone();
                    self.active_emit = Some(entry.emit);
                    self.buffer.clear();
                    self.mode = Mode::Passthrough;
                    self.scan_passthrough(c, handler)
                } else {
                    self.buffer.push(c);
                    Ok(())
                }
            }
        }
    }

    /// End-of-tag resolution, reached at `>` or by forced closure.
    fn finish_tag(&mut self, handler: &mut H) -> Result<(), ParseError> {
        if self.tag_name.is_none() {
            let mut name = self.buffer.trim();
            if let Some(stripped) = name.strip_prefix('/') {
                self.tag_kind = TagKind::Close;
                name = stripped;
            }
            if let Some(stripped) = name.strip_suffix('/') {
                name = stripped;
            }
            self.tag_name = Some(name.to_string());
        }
        if self.buffer.ends_with('/') {
            self.tag_kind = TagKind::Empty;
        }

        let name = self.tag_name.take().unwrap_or_default();
        let attrs = mem::take(&mut self.attrs);
        let emitted = match self.tag_kind {
            TagKind::Open => handler.open(&name, &attrs),
            TagKind::Close => handler.close(&name),
            TagKind::Empty => handler.empty(&name, &attrs),
            TagKind::ProcessingInstruction => handler.processing_instruction(&name, &attrs),
        };

        // Tag-scoped state resets unconditionally, emitter outcome aside.
        self.buffer.clear();
        self.mode = Mode::Text;
        self.tag_kind = TagKind::Open;
        emitted
    }

    fn scan_attribute(&mut self, c: char, handler: &mut H) -> Result<(), ParseError> {
        if self.quoted_value {
            if c == '"' {
                self.commit_attribute();
            } else {
                self.buffer.push(c);
            }
            return Ok(());
        }
        match c {
            '=' => {
                self.attr_name = Some(mem::take(&mut self.buffer));
                Ok(())
            }
            '"' => {
                self.quoted_value = true;
                Ok(())
            }
            ' ' => {
                self.commit_attribute();
                Ok(())
            }
            '>' => {
                // The '/' of a self-closing tag lands at the end of the
                // value buffer; it only becomes visible once the '>' arrives.
                if self.buffer.ends_with('/') {
                    let _ = self.buffer.pop();
                    self.tag_kind = TagKind::Empty;
                }
                self.commit_attribute();
                self.scan_tag(c, handler)
            }
            _ => {
                self.buffer.push(c);
                Ok(())
            }
        }
    }

    /// Commit the pending attribute. With no name scanned yet, the whole
    /// buffer is a value-less attribute name (empty names are dropped, so
    /// stray whitespace commits nothing). Scanning resumes in Tag mode so
    /// the tag can carry further attributes or terminate.
    fn commit_attribute(&mut self) {
        let name = self
            .attr_name
            .take()
            .unwrap_or_else(|| mem::take(&mut self.buffer));
        if !name.is_empty() {
            self.attrs.insert(name, mem::take(&mut self.buffer));
        }
        self.buffer.clear();
        self.quoted_value = false;
        self.mode = Mode::Tag;
    }

    fn scan_passthrough(&mut self, c: char, handler: &mut H) -> Result<(), ParseError> {
        if c == '>' && self.buffer.ends_with(self.active_end.as_str()) {
            self.buffer.truncate(self.buffer.len() - self.active_end.len());
            let content = mem::take(&mut self.buffer);
            let emit = self.active_emit.take();
            self.active_end.clear();
            self.mode = Mode::Text;
            match emit {
                Some(emit) => emit(handler, &content),
                None => Ok(()),
            }
        } else {
            self.buffer.push(c);
            Ok(())
        }
    }

    /// Restore the initial configuration so the instance can scan another
    /// document. Registered passthrough blocks survive a reset.
    fn reset(&mut self) {
        self.buffer.clear();
        self.tag_name = None;
        self.attr_name = None;
        self.attrs.clear();
        self.quoted_value = false;
        self.mode = Mode::Text;
        self.tag_kind = TagKind::Open;
        self.active_end.clear();
        self.active_emit = None;
        self.line = 1;
        self.column = 0;
    }
}

impl<H: Handler> Default for Tokenizer<H> {
    fn default() -> Self {
        Self::new()
    }
}
