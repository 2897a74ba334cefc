// Copyright 2026 The Tangle Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Text measurement boundary.
//!
//! Item labels are authored in a small LaTeX-like dialect and translated to
//! provider markup before measurement. The real provider (the text-layout
//! collaborator of the canvas) implements [`TextMetrics`]; for headless or
//! off-screen layout, [`MeasureScope`] falls back to a deterministic
//! character-count estimator scoped to the measuring call.

const CHAR_WIDTH: f64 = 7.0; // at LINE_HEIGHT px
const LINE_HEIGHT: f64 = 14.0;

/// Width, height, and vertical top-offset of a rendered label.
///
/// Purely derived from a `(markup, font_size)` pair; providers must be
/// deterministic for identical input.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LabelMetrics {
    pub width: f64,
    pub height: f64,
    pub top: f64,
}

/// Measures rendered label text. Set the font size before the markup;
/// accessors report the metrics of the most recently set markup.
pub trait TextMetrics {
    fn set_font_size(&mut self, px: f64);
    fn set_markup(&mut self, markup: &str);
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn top(&self) -> f64;

    fn metrics(&self) -> LabelMetrics {
        LabelMetrics {
            width: self.width(),
            height: self.height(),
            top: self.top(),
        }
    }
}

/// Character-count text estimator: each visible character is CHAR_WIDTH
/// wide at a LINE_HEIGHT line, scaled linearly by font size. Markup tags
/// and entities do not contribute width. A rough approximation suitable
/// for layout planning, not precise text rendering.
#[derive(Clone, Debug)]
pub struct CharMetrics {
    font_size: f64,
    width: f64,
    height: f64,
}

impl CharMetrics {
    pub fn new() -> Self {
        Self {
            font_size: LINE_HEIGHT,
            width: 0.0,
            height: 0.0,
        }
    }
}

impl Default for CharMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMetrics for CharMetrics {
    fn set_font_size(&mut self, px: f64) {
        self.font_size = px;
    }

    fn set_markup(&mut self, markup: &str) {
        let scale = self.font_size / LINE_HEIGHT;
        let mut lines = 0usize;
        let mut max_chars = 0usize;
        for line in markup.split('\n') {
            lines += 1;
            max_chars = max_chars.max(visible_char_count(line));
        }
        self.width = max_chars as f64 * CHAR_WIDTH * scale;
        self.height = lines as f64 * LINE_HEIGHT * scale;
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn top(&self) -> f64 {
        0.0
    }
}

/// Count characters that occupy horizontal space: tags are skipped, and an
/// entity reference counts as a single glyph.
fn visible_char_count(line: &str) -> usize {
    let mut count = 0usize;
    let mut in_tag = false;
    let mut in_entity = false;
    for c in line.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            '&' if !in_tag => {
                in_entity = true;
                count += 1;
            }
            ';' if in_entity => in_entity = false,
            _ if in_tag || in_entity => {}
            _ => count += 1,
        }
    }
    count
}

/// A measurement context scoped to the calls that need it.
///
/// When the caller has a live provider (the canvas text-layout collaborator)
/// it is borrowed; otherwise a throwaway [`CharMetrics`] is owned by the
/// scope and released when the scope drops, on every exit path.
pub enum MeasureScope<'a> {
    Borrowed(&'a mut dyn TextMetrics),
    Owned(CharMetrics),
}

impl<'a> MeasureScope<'a> {
    pub fn new(provider: Option<&'a mut dyn TextMetrics>) -> Self {
        match provider {
            Some(p) => MeasureScope::Borrowed(p),
            None => MeasureScope::Owned(CharMetrics::new()),
        }
    }

    pub fn measure(&mut self, markup: &str, font_size: f64) -> LabelMetrics {
        let provider: &mut dyn TextMetrics = match self {
            MeasureScope::Borrowed(p) => &mut **p,
            MeasureScope::Owned(c) => c,
        };
        provider.set_font_size(font_size);
        provider.set_markup(markup);
        provider.metrics()
    }
}

/// Translate the LaTeX-like label dialect to provider markup: `_{...}`
/// and `_x` become `<sub>`, `^{...}` and `^x` become `<sup>`, and markup
/// metacharacters are escaped.
pub fn latex_to_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '_' | '^' => {
                let tag = if c == '_' { "sub" } else { "sup" };
                let mut body = String::new();
                if chars.peek() == Some(&'{') {
                    chars.next();
                    for inner in chars.by_ref() {
                        if inner == '}' {
                            break;
                        }
                        body.push(inner);
                    }
                } else if let Some(single) = chars.next() {
                    body.push(single);
                }
                if !body.is_empty() {
                    out.push('<');
                    out.push_str(tag);
                    out.push('>');
                    out.push_str(&escape_markup(&body));
                    out.push_str("</");
                    out.push_str(tag);
                    out.push('>');
                }
            }
            _ => push_escaped(&mut out, c),
        }
    }
    out
}

fn escape_markup(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        push_escaped(&mut out, c);
    }
    out
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        _ => out.push(c),
    }
}
