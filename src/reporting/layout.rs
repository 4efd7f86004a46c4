//! Page layout of the report in PDF points (origin bottom-left, A4).
//!
//! Layout is kept apart from PDF encoding so that page breaks and the text
//! placed on each page can be inspected directly.

use super::document::ReportDocument;
use super::fonts::text_width;

pub const PAGE_WIDTH: f32 = 595.2756;
pub const PAGE_HEIGHT: f32 = 841.8898;

const CENTER_X: f32 = 297.5;
const LEFT_MARGIN: f32 = 50.0;
const INDENT: f32 = 65.0;
const RIGHT_MARGIN: f32 = 545.0;

const TITLE_Y: f32 = 780.0;
const HEADER_LABEL_Y: f32 = 805.0;
const FOOTER_Y: f32 = 30.0;
const META_Y: [f32; 3] = [750.0, 730.0, 710.0];
const RULE_Y: f32 = 700.0;
const SECTION_Y: f32 = 680.0;

/// Where the first entry goes on page 1.
pub const BODY_TOP: f32 = 660.0;
/// Where entries resume on continuation pages.
pub const CONTINUATION_TOP: f32 = 780.0;
/// Below this a new page is started before the next entry.
pub const BOTTOM_LIMIT: f32 = 60.0;

const LINE_STEP: f32 = 16.0;
const BLOCK_GAP: f32 = 24.0;
/// Vertical space consumed by one question/answer/recommendation block.
pub const ENTRY_STEP: f32 = 2.0 * LINE_STEP + BLOCK_GAP;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
    Oblique,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        x: f32,
        y: f32,
        size: f32,
        style: FontStyle,
        text: String,
    },
    Rule {
        from_x: f32,
        to_x: f32,
        y: f32,
        thickness: f32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub number: usize,
    pub ops: Vec<DrawOp>,
}

impl Page {
    /// A fresh page carrying its header label and `Page N` footer.
    fn new(number: usize, header_label: &str) -> Self {
        let mut page = Self { number, ops: Vec::new() };
        if !header_label.is_empty() {
            let size = 9.0;
            let x = RIGHT_MARGIN - text_width(header_label, size);
            page.text(x, HEADER_LABEL_Y, size, FontStyle::Regular, header_label);
        }
        page.centered(FOOTER_Y, 10.0, FontStyle::Regular, &format!("Page {}", number));
        page
    }

    fn text(&mut self, x: f32, y: f32, size: f32, style: FontStyle, text: &str) {
        self.ops.push(DrawOp::Text {
            x,
            y,
            size,
            style,
            text: text.to_string(),
        });
    }

    fn centered(&mut self, y: f32, size: f32, style: FontStyle, text: &str) {
        let x = CENTER_X - text_width(text, size) / 2.0;
        self.text(x, y, size, style, text);
    }

    /// All text drawn on this page, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            DrawOp::Rule { .. } => None,
        })
    }
}

/// Lay the document out over as many pages as it needs. The result is never
/// empty and never ends with a page that holds no entries (unless the
/// document has no entries at all).
pub fn paginate(doc: &ReportDocument) -> Vec<Page> {
    let mut current = Page::new(1, &doc.header_label);

    current.centered(TITLE_Y, 20.0, FontStyle::Bold, &doc.title);
    let meta = [
        format!("Timestamp: {}", doc.timestamp),
        format!("Company: {}", doc.company),
        format!("Email: {}", doc.email),
    ];
    for (line, y) in meta.iter().zip(META_Y) {
        current.text(LEFT_MARGIN, y, 12.0, FontStyle::Regular, line);
    }
    current.ops.push(DrawOp::Rule {
        from_x: LEFT_MARGIN,
        to_x: RIGHT_MARGIN,
        y: RULE_Y,
        thickness: 1.0,
    });
    current.text(LEFT_MARGIN, SECTION_Y, 14.0, FontStyle::Bold, "Responses:");

    let mut finished = Vec::new();
    let mut y = BODY_TOP;

    for entry in &doc.entries {
        if y < BOTTOM_LIMIT {
            let next = Page::new(current.number + 1, &doc.header_label);
            finished.push(std::mem::replace(&mut current, next));
            y = CONTINUATION_TOP;
        }

        current.text(
            LEFT_MARGIN,
            y,
            11.0,
            FontStyle::Bold,
            &format!("({}) {}", entry.number, entry.question),
        );
        y -= LINE_STEP;
        current.text(INDENT, y, 11.0, FontStyle::Regular, &format!("Answer: {}", entry.answer));
        y -= LINE_STEP;
        current.text(
            INDENT,
            y,
            10.0,
            FontStyle::Oblique,
            &format!("Recommendation: {}", entry.recommendation),
        );
        y -= BLOCK_GAP;
    }

    finished.push(current);
    finished
}
