//! Document block data model.

use serde::Serialize;

use crate::language::language_code;

/// Block type codes understood by the docx API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BlockType {
    Text = 2,
    Heading1 = 3,
    Heading2 = 4,
    Heading3 = 5,
    Heading4 = 6,
    Heading5 = 7,
    Heading6 = 8,
    Heading7 = 9,
    Heading8 = 10,
    Heading9 = 11,
    Bullet = 12,
    Ordered = 13,
    Code = 14,
    Quote = 15,
    Divider = 22,
}

impl BlockType {
    /// Numeric value carried in the `block_type` wire field.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Wire field the block's payload is nested under.
    ///
    /// The docx API keys a block's content by its type name, never by a
    /// generic body field. Covering every type here keeps a table omission
    /// a compile error rather than a silent fallback.
    pub fn payload_key(self) -> &'static str {
        match self {
            BlockType::Text => "text",
            BlockType::Heading1 => "heading1",
            BlockType::Heading2 => "heading2",
            BlockType::Heading3 => "heading3",
            BlockType::Heading4 => "heading4",
            BlockType::Heading5 => "heading5",
            BlockType::Heading6 => "heading6",
            BlockType::Heading7 => "heading7",
            BlockType::Heading8 => "heading8",
            BlockType::Heading9 => "heading9",
            BlockType::Bullet => "bullet",
            BlockType::Ordered => "ordered",
            BlockType::Code => "code",
            BlockType::Quote => "quote",
            BlockType::Divider => "divider",
        }
    }
}

/// Heading depth. The schema reserves nine levels; the Markdown classifier
/// only ever emits the first six.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    H7,
    H8,
    H9,
}

impl HeadingLevel {
    /// Convert a `#` count into a level, clamping anything deeper than six.
    pub fn from_depth(depth: usize) -> Self {
        match depth {
            0 | 1 => HeadingLevel::H1,
            2 => HeadingLevel::H2,
            3 => HeadingLevel::H3,
            4 => HeadingLevel::H4,
            5 => HeadingLevel::H5,
            _ => HeadingLevel::H6,
        }
    }

    /// The block type for a heading at this level.
    pub fn block_type(self) -> BlockType {
        match self {
            HeadingLevel::H1 => BlockType::Heading1,
            HeadingLevel::H2 => BlockType::Heading2,
            HeadingLevel::H3 => BlockType::Heading3,
            HeadingLevel::H4 => BlockType::Heading4,
            HeadingLevel::H5 => BlockType::Heading5,
            HeadingLevel::H6 => BlockType::Heading6,
            HeadingLevel::H7 => BlockType::Heading7,
            HeadingLevel::H8 => BlockType::Heading8,
            HeadingLevel::H9 => BlockType::Heading9,
        }
    }
}

/// Inline style flags for a text run.
///
/// False flags are omitted from the wire form, so a default style
/// serializes as an empty object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextStyle {
    #[serde(skip_serializing_if = "is_false")]
    pub bold: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub italic: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub strikethrough: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub underline: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub inline_code: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Link target attached to a text run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub url: String,
}

/// A contiguous span of text sharing one style combination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    pub content: String,

    #[serde(rename = "text_element_style", skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
}

/// The element shape block payloads carry: a run nested under `text_run`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextElement {
    pub text_run: TextRun,
}

impl TextElement {
    /// An unstyled run.
    pub fn plain(content: impl Into<String>) -> Self {
        TextElement {
            text_run: TextRun {
                content: content.into(),
                style: None,
            },
        }
    }

    /// A run carrying the given style.
    pub fn styled(content: impl Into<String>, style: TextStyle) -> Self {
        TextElement {
            text_run: TextRun {
                content: content.into(),
                style: Some(style),
            },
        }
    }
}

/// Style record for a code block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeStyle {
    /// Numeric language code from the alias table.
    pub language: u8,
    /// The docx API defaults code blocks to no soft wrapping.
    pub wrap: bool,
}

/// One structural unit of a document.
///
/// Order within a parse result is significant and equals source line order.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Text { elements: Vec<TextElement> },
    Heading { level: HeadingLevel, elements: Vec<TextElement> },
    Bullet { elements: Vec<TextElement> },
    Ordered { elements: Vec<TextElement> },
    Quote { elements: Vec<TextElement> },
    Code { elements: Vec<TextElement>, style: CodeStyle },
    Divider,
}

impl Block {
    /// A plain paragraph block.
    pub fn text(elements: Vec<TextElement>) -> Self {
        Block::Text { elements }
    }

    /// A heading block at the given level.
    pub fn heading(level: HeadingLevel, elements: Vec<TextElement>) -> Self {
        Block::Heading { level, elements }
    }

    /// An unordered list item block.
    pub fn bullet(elements: Vec<TextElement>) -> Self {
        Block::Bullet { elements }
    }

    /// An ordered list item block. The renderer auto-numbers, so no index
    /// is stored.
    pub fn ordered(elements: Vec<TextElement>) -> Self {
        Block::Ordered { elements }
    }

    /// A quote block.
    pub fn quote(elements: Vec<TextElement>) -> Self {
        Block::Quote { elements }
    }

    /// A code block with its content as a single verbatim run and the
    /// language alias resolved through the code table.
    pub fn code(content: &str, language: &str) -> Self {
        Block::Code {
            elements: vec![TextElement::plain(content)],
            style: CodeStyle {
                language: language_code(language),
                wrap: false,
            },
        }
    }

    /// The block's wire type.
    pub fn block_type(&self) -> BlockType {
        match self {
            Block::Text { .. } => BlockType::Text,
            Block::Heading { level, .. } => level.block_type(),
            Block::Bullet { .. } => BlockType::Bullet,
            Block::Ordered { .. } => BlockType::Ordered,
            Block::Quote { .. } => BlockType::Quote,
            Block::Code { .. } => BlockType::Code,
            Block::Divider => BlockType::Divider,
        }
    }
}
