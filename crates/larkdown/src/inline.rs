//! Inline style scanner.
//!
//! Detects styled spans (links, bold, italic, inline code, strikethrough)
//! in one line of text and splits it into styled runs. Every pattern scans
//! the whole line independently, collecting overlapping candidates; a
//! greedy left-to-right pass then keeps the earliest non-overlapping spans
//! and splices plain runs into the gaps.

use std::sync::LazyLock;

use larkdown_blocks::{Link, TextElement, TextStyle};
use regex::{Captures, Regex};

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("Invalid link regex"));

static BOLD_ITALIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*\*([^*_]+)\*\*\*|___([^*_]+)___").expect("Invalid bold italic regex")
});

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*_]+)\*\*|__([^*_]+)__").expect("Invalid bold regex"));

static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*_]+)\*|_([^*_]+)_").expect("Invalid italic regex"));

static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("Invalid inline code regex"));

static STRIKETHROUGH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~~([^~]+)~~").expect("Invalid strikethrough regex"));

/// A styled span candidate, offsets in bytes over the scanned line.
struct Candidate {
    start: usize,
    end: usize,
    element: TextElement,
}

/// Split one line of text into styled runs.
///
/// Delimiters are stripped from styled runs; unmatched spans are emitted
/// verbatim as plain runs. Empty input yields no runs.
pub fn parse_inline(text: &str) -> Vec<TextElement> {
    let mut candidates = Vec::new();

    // Collection order doubles as pattern precedence: the sort below is
    // stable, so candidates starting at the same offset keep this order.
    collect_candidates(&LINK, text, link_run, &mut candidates);
    collect_candidates(&BOLD_ITALIC, text, bold_italic_run, &mut candidates);
    collect_candidates(&BOLD, text, bold_run, &mut candidates);
    collect_candidates(&ITALIC, text, italic_run, &mut candidates);
    collect_candidates(&INLINE_CODE, text, inline_code_run, &mut candidates);
    collect_candidates(&STRIKETHROUGH, text, strikethrough_run, &mut candidates);

    if candidates.is_empty() {
        if text.is_empty() {
            return Vec::new();
        }
        return vec![TextElement::plain(text)];
    }

    candidates.sort_by_key(|candidate| candidate.start);

    // Greedy overlap filter: first span at a position wins, anything
    // starting before it ends is dropped.
    let mut kept = Vec::new();
    let mut current_end = 0;
    for candidate in candidates {
        if candidate.start >= current_end {
            current_end = candidate.end;
            kept.push(candidate);
        }
    }

    let mut elements = Vec::new();
    let mut pos = 0;
    for candidate in kept {
        if candidate.start > pos {
            elements.push(TextElement::plain(&text[pos..candidate.start]));
        }
        pos = candidate.end;
        elements.push(candidate.element);
    }
    if pos < text.len() {
        elements.push(TextElement::plain(&text[pos..]));
    }

    elements
}

/// Collect every match of `re` over `text`, including spans that overlap
/// an earlier match of the same pattern: the search restarts just past
/// each match's first byte, and the overlap filter arbitrates later.
fn collect_candidates(
    re: &Regex,
    text: &str,
    build: fn(&Captures) -> TextElement,
    out: &mut Vec<Candidate>,
) {
    let mut at = 0;
    while at <= text.len() {
        let Some(caps) = re.captures_at(text, at) else {
            break;
        };
        let span = caps.get(0).expect("whole-match group always present");
        out.push(Candidate {
            start: span.start(),
            end: span.end(),
            element: build(&caps),
        });
        // All delimiters are ASCII, so start + 1 stays on a char boundary.
        at = span.start() + 1;
    }
}

/// Content of whichever alternation branch matched.
fn alt_content<'t>(caps: &Captures<'t>) -> &'t str {
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str())
        .unwrap_or("")
}

fn link_run(caps: &Captures) -> TextElement {
    TextElement::styled(
        &caps[1],
        TextStyle {
            link: Some(Link {
                url: caps[2].to_string(),
            }),
            ..TextStyle::default()
        },
    )
}

fn bold_italic_run(caps: &Captures) -> TextElement {
    TextElement::styled(
        alt_content(caps),
        TextStyle {
            bold: true,
            italic: true,
            ..TextStyle::default()
        },
    )
}

fn bold_run(caps: &Captures) -> TextElement {
    TextElement::styled(
        alt_content(caps),
        TextStyle {
            bold: true,
            ..TextStyle::default()
        },
    )
}

fn italic_run(caps: &Captures) -> TextElement {
    TextElement::styled(
        alt_content(caps),
        TextStyle {
            italic: true,
            ..TextStyle::default()
        },
    )
}

fn inline_code_run(caps: &Captures) -> TextElement {
    TextElement::styled(
        &caps[1],
        TextStyle {
            inline_code: true,
            ..TextStyle::default()
        },
    )
}

fn strikethrough_run(caps: &Captures) -> TextElement {
    TextElement::styled(
        &caps[1],
        TextStyle {
            strikethrough: true,
            ..TextStyle::default()
        },
    )
}
