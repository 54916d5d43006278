//! Markdown to document block converter.
//!
//! Converts freeform Markdown into the ordered, typed block sequence the
//! Lark docx API expects as the body of an append-children request. The
//! conversion is total: malformed Markdown degrades to plain-text blocks
//! instead of failing.

pub mod inline;
pub mod parser;

pub use larkdown_blocks::{
    language_code, to_document_update, Block, BlockType, CodeStyle, DocumentUpdate, HeadingLevel,
    Link, TextElement, TextRun, TextStyle,
};

pub use inline::parse_inline;
pub use parser::{markdown_to_update, parse_markdown};
