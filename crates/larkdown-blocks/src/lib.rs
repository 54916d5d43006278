//! Typed document blocks for the Lark docx schema.
//!
//! This crate models the content blocks a Lark document is built from and
//! serializes them into the exact wire shape the docx API expects: each
//! block's payload nested under a field named after its type.

pub mod block;
pub mod language;
pub mod wire;

pub use block::{Block, BlockType, CodeStyle, HeadingLevel, Link, TextElement, TextRun, TextStyle};
pub use language::{language_code, PLAINTEXT};
pub use wire::{to_document_update, DocumentUpdate};
