//! Markup-to-text extraction used to measure translations against `MAX_LENGTH`.
//!
//! `MAX_LENGTH` directives are written for strings without HTML, so the
//! countdown measures what a reader would see: the `textContent` of the body
//! the markup parses into. The capability is a trait so the widget does not
//! depend on a particular host facility:
//!
//! - [`EmbeddedParser`] is a small pure-Rust tokenizer that follows the HTML
//!   parsing rules which affect visible text (tags, comments, character
//!   references, raw-text elements, head elements before the body).
//! - [`BrowserParser`] asks the browser's `DOMParser` and falls back to the
//!   embedded parser when there is no DOM to ask.

use std::fmt;
use std::rc::Rc;

/// Renders markup to the plain text a browser would display for it.
pub trait ExtractText {
    fn extract_text(&self, markup: &str) -> String;
}

/// Shared handle to an [`ExtractText`] implementation, usable as a Yew prop.
///
/// Two handles are equal when they point to the same extractor, so passing the
/// same handle on every render does not count as a prop change.
#[derive(Clone)]
pub struct TextExtractor(Rc<dyn ExtractText>);

impl TextExtractor {
    pub fn new(extractor: impl ExtractText + 'static) -> Self {
        Self(Rc::new(extractor))
    }

    pub fn embedded() -> Self {
        Self::new(EmbeddedParser)
    }

    pub fn browser() -> Self {
        Self::new(BrowserParser)
    }
}

impl ExtractText for TextExtractor {
    fn extract_text(&self, markup: &str) -> String {
        self.0.extract_text(markup)
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::embedded()
    }
}

impl PartialEq for TextExtractor {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for TextExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TextExtractor")
    }
}

/// Text extraction through the host `DOMParser`.
///
/// Outside a browser (native builds, tests) it behaves like [`EmbeddedParser`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserParser;

impl ExtractText for BrowserParser {
    fn extract_text(&self, markup: &str) -> String {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(text) = dom_text_content(markup) {
                return text;
            }
        }
        EmbeddedParser.extract_text(markup)
    }
}

/// `body.textContent` of `markup` parsed as `text/html`, or `None` when the
/// browser refuses to build a parser.
#[cfg(target_arch = "wasm32")]
fn dom_text_content(markup: &str) -> Option<String> {
    use web_sys::{DomParser, SupportedType};

    let document = DomParser::new()
        .and_then(|parser| parser.parse_from_string(markup, SupportedType::TextHtml))
        .ok()?;

    Some(
        document
            .body()
            .and_then(|body| body.text_content())
            .unwrap_or_default(),
    )
}

/// Pure-Rust approximation of `DOMParser` + `body.textContent`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedParser;

impl ExtractText for EmbeddedParser {
    fn extract_text(&self, markup: &str) -> String {
        let normalized = normalize_newlines(markup);
        Extraction::new(&normalized).run()
    }
}

/// Elements whose content is kept verbatim until the matching end tag.
const RAW_TEXT: &[&str] = &[
    "script", "style", "xmp", "iframe", "noembed", "noframes",
];

/// Elements whose content runs to the matching end tag with references decoded.
const ESCAPABLE_RAW_TEXT: &[&str] = &["textarea", "title"];

/// Elements that land in `<head>` (not the body) when they appear before any content.
const HEAD_WITH_CONTENT: &[&str] = &["title", "style", "script"];
const HEAD_VOID: &[&str] = &["meta", "link", "base", "basefont", "bgsound"];

fn normalize_newlines(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

fn is_html_whitespace(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\x0C' | '\r' | ' ')
}

fn ends_tag_name(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | b'\x0C' | b'\r' | b' ' | b'/' | b'>')
}

struct Extraction<'a> {
    input: &'a str,
    pos: usize,
    out: String,
    in_body: bool,
}

impl<'a> Extraction<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            out: String::new(),
            in_body: false,
        }
    }

    fn run(mut self) -> String {
        while self.pos < self.input.len() {
            let rest = &self.input[self.pos..];
            if rest.starts_with('<') {
                if !self.markup() {
                    // A `<` that opens nothing is ordinary text.
                    let end = self.next_lt(self.pos + 1);
                    self.text(self.pos, end);
                }
            } else {
                let end = self.next_lt(self.pos);
                self.text(self.pos, end);
            }
        }
        self.out
    }

    fn next_lt(&self, from: usize) -> usize {
        self.input[from..]
            .find('<')
            .map_or(self.input.len(), |i| from + i)
    }

    /// Consumes the markup construct at `pos`. Returns `false` when the `<`
    /// does not start one.
    fn markup(&mut self) -> bool {
        let rest = &self.input[self.pos..];
        let next = rest.as_bytes().get(1).copied();

        if rest.starts_with("<!--") {
            self.pos = self.comment_end(self.pos + 4);
        } else if matches!(next, Some(b'!') | Some(b'?')) {
            self.pos = self.bogus_end(self.pos + 2);
        } else if next == Some(b'/') {
            match rest.as_bytes().get(2).copied() {
                Some(b'>') => self.pos += 3,
                Some(b) if b.is_ascii_alphabetic() => {
                    self.pos = self.tag_end(self.pos + 2).unwrap_or(self.input.len());
                }
                // `</` at end of input is text.
                None => return false,
                Some(_) => self.pos = self.bogus_end(self.pos + 2),
            }
        } else if next.is_some_and(|b| b.is_ascii_alphabetic()) {
            self.start_tag();
        } else {
            return false;
        }
        true
    }

    fn start_tag(&mut self) {
        let name_start = self.pos + 1;
        let name_len = self.input.as_bytes()[name_start..]
            .iter()
            .position(|&b| ends_tag_name(b))
            .unwrap_or(self.input.len() - name_start);
        let name = self.input[name_start..name_start + name_len].to_ascii_lowercase();

        let Some(after_tag) = self.tag_end(name_start + name_len) else {
            // A tag cut off by the end of input is dropped.
            self.pos = self.input.len();
            return;
        };
        self.pos = after_tag;

        match name.as_str() {
            "html" | "head" => return,
            "body" => {
                self.in_body = true;
                return;
            }
            _ => {}
        }

        if name == "template" {
            // Template content is a separate fragment, not part of the body text.
            let (_, resume) = self.raw_text_end(&name);
            self.pos = resume;
            return;
        }

        if !self.in_body {
            if HEAD_VOID.contains(&name.as_str()) {
                return;
            }
            if HEAD_WITH_CONTENT.contains(&name.as_str()) {
                let (_, resume) = self.raw_text_end(&name);
                self.pos = resume;
                return;
            }
        }
        self.in_body = true;

        if name == "plaintext" {
            let content = &self.input[self.pos..];
            self.out.push_str(content);
            self.pos = self.input.len();
        } else if RAW_TEXT.contains(&name.as_str()) {
            let (content_end, resume) = self.raw_text_end(&name);
            self.out.push_str(&self.input[self.pos..content_end]);
            self.pos = resume;
        } else if ESCAPABLE_RAW_TEXT.contains(&name.as_str()) {
            let (content_end, resume) = self.raw_text_end(&name);
            let mut content = &self.input[self.pos..content_end];
            if name == "textarea" {
                content = content.strip_prefix('\n').unwrap_or(content);
            }
            let decoded = decode_references(content);
            self.out.push_str(&decoded);
            self.pos = resume;
        }
    }

    /// Appends the text in `start..end`, decoding character references.
    fn text(&mut self, start: usize, end: usize) {
        let mut raw = &self.input[start..end];
        self.pos = end;
        if !self.in_body {
            raw = raw.trim_start_matches(is_html_whitespace);
            if raw.is_empty() {
                return;
            }
            self.in_body = true;
        }
        let decoded = decode_references(raw);
        self.out.push_str(&decoded);
    }

    /// Index just past the `>` closing a tag whose name ends before `from`.
    /// Quoted attribute values may contain `>`.
    fn tag_end(&self, from: usize) -> Option<usize> {
        let bytes = self.input.as_bytes();
        let mut quote: Option<u8> = None;
        let mut after_equals = false;

        for (offset, &b) in bytes[from..].iter().enumerate() {
            match quote {
                Some(q) => {
                    if b == q {
                        quote = None;
                    }
                    continue;
                }
                None => match b {
                    b'>' => return Some(from + offset + 1),
                    b'"' | b'\'' if after_equals => {
                        quote = Some(b);
                        continue;
                    }
                    _ => {}
                },
            }
            if b == b'=' {
                after_equals = true;
            } else if !b.is_ascii_whitespace() {
                after_equals = false;
            }
        }
        None
    }

    /// End of a comment whose body starts at `from`.
    fn comment_end(&self, from: usize) -> usize {
        let rest = &self.input[from..];
        if rest.starts_with('>') {
            return from + 1;
        }
        if rest.starts_with("->") {
            return from + 2;
        }
        let closers = [("-->", 3), ("--!>", 4)];
        closers
            .iter()
            .filter_map(|(closer, len)| rest.find(closer).map(|i| from + i + len))
            .min()
            .unwrap_or(self.input.len())
    }

    /// End of a bogus comment or doctype: the next `>` or the end of input.
    fn bogus_end(&self, from: usize) -> usize {
        self.input[from..]
            .find('>')
            .map_or(self.input.len(), |i| from + i + 1)
    }

    /// Finds `</name` for the raw-text element opened just before `pos`.
    /// Returns where its content ends and where parsing resumes.
    fn raw_text_end(&self, name: &str) -> (usize, usize) {
        let bytes = self.input.as_bytes();
        let mut search = self.pos;

        while let Some(i) = self.input[search..].find("</") {
            let candidate = search + i;
            let name_start = candidate + 2;
            let name_end = name_start + name.len();
            let matches_name = self
                .input
                .get(name_start..name_end)
                .is_some_and(|n| n.eq_ignore_ascii_case(name));
            if matches_name && bytes.get(name_end).is_some_and(|&b| ends_tag_name(b)) {
                let resume = self.tag_end(name_end).unwrap_or(self.input.len());
                return (candidate, resume);
            }
            search = candidate + 2;
        }
        (self.input.len(), self.input.len())
    }
}

/// Decodes named and numeric character references in a run of text, with the
/// full HTML named-reference table. Unknown or malformed references are kept
/// as written.
pub fn decode_references(text: &str) -> String {
    htmlize::unescape(text).into_owned()
}
