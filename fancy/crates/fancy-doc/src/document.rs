//! Line store with incremental re-tokenization.
//!
//! A [`Document`] keeps every line together with its tokens and the
//! [`LineInfo`] it ended in. Editing a line re-tokenizes that line and then
//! walks forward only while the carried state keeps changing, so typing
//! inside ordinary code touches one line and typing `/*` re-colors the
//! lines below it up to the next point where the state agrees again.

use std::ops::Range;

use fancy_lex::{changes_require_propagation, tokenize_line, LineInfo, Token};

use crate::error::{DocumentError, Result};

/// The lines whose tokens an edit recomputed, as a half-open index range.
pub type Relexed = Range<usize>;

/// One line of a document and its tokenization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    text: String,
    tokens: Vec<Token>,
    line_info: LineInfo,
}

impl Line {
    fn new(text: String, previous: Option<&LineInfo>) -> Self {
        let tokenized = tokenize_line(&text, previous);
        Self {
            text,
            tokens: tokenized.tokens,
            line_info: tokenized.line_info,
        }
    }

    /// Tokenizes the line again and returns the state it ended in before.
    fn retokenize(&mut self, previous: Option<&LineInfo>) -> LineInfo {
        let tokenized = tokenize_line(&self.text, previous);
        self.tokens = tokenized.tokens;
        std::mem::replace(&mut self.line_info, tokenized.line_info)
    }

    /// The line text, without a newline.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The tokens covering the line.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The state the line ends in.
    pub fn line_info(&self) -> LineInfo {
        self.line_info
    }
}

/// A tokenized document.
///
/// A document always has at least one line. Stored line texts contain no
/// `\n` and never end in `\r`: text passed to an edit is split on `\n`
/// into as many lines as it holds, and trailing `\r`s are dropped from
/// each.
///
/// # Example
///
/// ```
/// use fancy_doc::Document;
/// use fancy_lex::TokenType;
///
/// let mut doc = Document::from_source("a = 1;\nb = 2;\nc = 3;");
///
/// // Opening a block comment re-colors everything below it.
/// let relexed = doc.set_line(0, "a = 1; /*").unwrap();
/// assert_eq!(relexed, 0..3);
/// assert_eq!(doc.line(2).unwrap().tokens()[0].kind, TokenType::Comment);
///
/// // An edit that keeps the state touches only its own line.
/// let relexed = doc.set_line(1, "still a comment").unwrap();
/// assert_eq!(relexed, 1..2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Line>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a document with a single empty line.
    pub fn new() -> Self {
        Self {
            lines: vec![Line::new(String::new(), None)],
        }
    }

    /// Creates a document from text, splitting it into lines on `\n`.
    ///
    /// Trailing `\r`s are dropped from every line.
    pub fn from_source(source: &str) -> Self {
        let mut lines: Vec<Line> = Vec::new();

        for text in split_lines(source) {
            let previous = lines.last().map(|line| line.line_info);
            lines.push(Line::new(text, previous.as_ref()));
        }

        tracing::debug!(lines = lines.len(), "tokenized document");
        Self { lines }
    }

    /// Returns the number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the document is a single empty line.
    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].text.is_empty()
    }

    /// Returns the line at `index`.
    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// Iterates over the lines in order.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    /// Returns the text of the document, lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Returns the state the last line ends in.
    pub fn last_line_info(&self) -> LineInfo {
        self.lines
            .last()
            .map(|line| line.line_info)
            .unwrap_or_default()
    }

    /// Replaces the text of line `index`.
    ///
    /// Text holding newlines replaces the line with several lines. Returns
    /// the lines that were tokenized again.
    pub fn set_line(&mut self, index: usize, text: impl AsRef<str>) -> Result<Relexed> {
        self.check_index(index, self.lines.len())?;
        Ok(self.splice(index, 1, split_lines(text.as_ref())))
    }

    /// Inserts text so that its first line ends up at `index`.
    ///
    /// `index` may equal [`len`](Self::len) to append. Text holding
    /// newlines inserts several lines.
    pub fn insert_line(&mut self, index: usize, text: impl AsRef<str>) -> Result<Relexed> {
        self.check_index(index, self.lines.len() + 1)?;
        Ok(self.splice(index, 0, split_lines(text.as_ref())))
    }

    /// Removes line `index`.
    ///
    /// Removing the only line leaves a single empty line.
    pub fn remove_line(&mut self, index: usize) -> Result<Relexed> {
        self.check_index(index, self.lines.len())?;

        if self.lines.len() == 1 {
            self.lines[0] = Line::new(String::new(), None);
            return Ok(0..1);
        }

        Ok(self.splice(index, 1, Vec::new()))
    }

    /// Replaces `count` lines at `index` with `texts`, tokenizes the new
    /// lines, and propagates into the following lines if the state they
    /// start in changed.
    fn splice(&mut self, index: usize, count: usize, texts: Vec<String>) -> Relexed {
        let incoming = self.state_before(index);
        let old_outgoing = match count {
            0 => incoming.unwrap_or_default(),
            _ => self.lines[index + count - 1].line_info,
        };

        let mut previous = incoming;
        let replacement: Vec<Line> = texts
            .into_iter()
            .map(|text| {
                let line = Line::new(text, previous.as_ref());
                previous = Some(line.line_info);
                line
            })
            .collect();
        let new_outgoing = previous.unwrap_or_default();

        let end = index + replacement.len();
        self.lines.splice(index..index + count, replacement);
        tracing::trace!(index, removed = count, inserted = end - index, "spliced lines");

        if end < self.lines.len()
            && changes_require_propagation(Some(&old_outgoing), Some(&new_outgoing))
        {
            return index..self.propagate_from(end).end;
        }
        index..end
    }

    /// Returns the state line `index` starts in.
    fn state_before(&self, index: usize) -> Option<LineInfo> {
        index
            .checked_sub(1)
            .and_then(|previous| self.lines.get(previous))
            .map(|line| line.line_info)
    }

    /// Re-tokenizes from `start` until a line ends in the same state as
    /// before, or the document ends.
    fn propagate_from(&mut self, start: usize) -> Relexed {
        let mut index = start;

        while index < self.lines.len() {
            let previous = self.state_before(index);
            let line = &mut self.lines[index];
            let old = line.retokenize(previous.as_ref());
            let new = line.line_info;
            tracing::trace!(line = index, ?new, "re-tokenized line");
            index += 1;

            if !changes_require_propagation(Some(&old), Some(&new)) {
                break;
            }
        }

        tracing::debug!(start, end = index, "propagation finished");
        start..index
    }

    fn check_index(&self, index: usize, limit: usize) -> Result<()> {
        if index >= limit {
            return Err(DocumentError::LineOutOfRange {
                index,
                len: self.lines.len(),
            });
        }
        Ok(())
    }
}

/// Splits text into line texts without `\n` or a trailing `\r`.
fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect()
}
