//! Line-oriented block classifier.
//!
//! Walks a Markdown document line by line and classifies each line (or
//! fenced group of lines) into one document block. The only carried state
//! is whether the walk is inside a code fence; everything outside a fence
//! is decided per line, so blank lines separate blocks instead of merging
//! paragraphs.

use std::sync::LazyLock;

use larkdown_blocks::{to_document_update, Block, DocumentUpdate, HeadingLevel};
use regex::Regex;

use crate::inline::parse_inline;

static DIVIDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-{3,}|\*{3,}|_{3,})$").expect("Invalid divider regex"));

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("Invalid heading regex"));

static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*+]\s+(.+)$").expect("Invalid bullet regex"));

static ORDERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.\s+(.+)$").expect("Invalid ordered regex"));

/// Convert a Markdown document into an ordered block sequence.
///
/// Total over any input: lines that match no rule become plain text
/// blocks, and a fence left open at end of input is flushed as a final
/// code block.
pub fn parse_markdown(markdown: &str) -> Vec<Block> {
    let lines: Vec<&str> = markdown.split('\n').collect();
    let mut blocks = Vec::new();

    let mut in_code_block = false;
    let mut code_lines: Vec<&str> = Vec::new();
    let mut code_language = "plaintext";

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];

        // Fence lines toggle code mode; nothing inside is reinterpreted.
        if line.starts_with("```") {
            if !in_code_block {
                in_code_block = true;
                let tag = line[3..].trim();
                code_language = if tag.is_empty() { "plaintext" } else { tag };
                code_lines.clear();
            } else {
                in_code_block = false;
                blocks.push(Block::code(&code_lines.join("\n"), code_language));
            }
            i += 1;
            continue;
        }

        if in_code_block {
            code_lines.push(line);
            i += 1;
            continue;
        }

        if line.trim().is_empty() {
            i += 1;
            continue;
        }

        let trimmed = line.trim();

        if DIVIDER.is_match(trimmed) {
            blocks.push(Block::Divider);
            i += 1;
            continue;
        }

        if let Some(caps) = HEADING.captures(line) {
            let level = HeadingLevel::from_depth(caps[1].len());
            blocks.push(Block::heading(level, parse_inline(caps[2].trim())));
            i += 1;
            continue;
        }

        if let Some(rest) = line.strip_prefix('>') {
            blocks.push(Block::quote(parse_inline(rest.trim())));
            i += 1;
            continue;
        }

        if let Some(caps) = BULLET.captures(line) {
            blocks.push(Block::bullet(parse_inline(caps[1].trim())));
            i += 1;
            continue;
        }

        if let Some(caps) = ORDERED.captures(line) {
            blocks.push(Block::ordered(parse_inline(caps[1].trim())));
            i += 1;
            continue;
        }

        // Table rows render as one plaintext code block; the run extends
        // over every following line that still contains a pipe.
        if line.contains('|') && trimmed.starts_with('|') {
            let start = i;
            i += 1;
            while i < lines.len() && lines[i].contains('|') {
                i += 1;
            }
            blocks.push(Block::code(&lines[start..i].join("\n"), "plaintext"));
            continue;
        }

        blocks.push(Block::text(parse_inline(trimmed)));
        i += 1;
    }

    // Unterminated fence: keep what was captured.
    if in_code_block && !code_lines.is_empty() {
        blocks.push(Block::code(&code_lines.join("\n"), code_language));
    }

    tracing::debug!(blocks = blocks.len(), "converted markdown document");
    blocks
}

/// Convert a Markdown document straight into the request body for an
/// append-children call.
pub fn markdown_to_update(markdown: &str) -> DocumentUpdate {
    to_document_update(parse_markdown(markdown))
}
