//! Wire serialization for the docx block schema.
//!
//! A serialized block is a two-field object: the numeric `block_type` and
//! the payload nested under the field named after that type. The match in
//! [`Block`]'s `Serialize` impl is exhaustive, so every variant is forced
//! to pick its payload shape explicitly.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::block::{Block, CodeStyle, TextElement};

/// Payload of text-like blocks (paragraphs, headings, list items, quotes).
/// The API expects a style record even when it carries nothing.
#[derive(Serialize)]
struct TextPayload<'a> {
    elements: &'a [TextElement],
    style: Empty,
}

/// Payload of code blocks.
#[derive(Serialize)]
struct CodePayload<'a> {
    elements: &'a [TextElement],
    style: &'a CodeStyle,
}

/// Serializes as `{}`.
#[derive(Serialize)]
struct Empty {}

impl Serialize for Block {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let block_type = self.block_type();
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("block_type", &block_type.code())?;
        match self {
            Block::Text { elements }
            | Block::Heading { elements, .. }
            | Block::Bullet { elements }
            | Block::Ordered { elements }
            | Block::Quote { elements } => {
                map.serialize_entry(
                    block_type.payload_key(),
                    &TextPayload {
                        elements,
                        style: Empty {},
                    },
                )?;
            }
            Block::Code { elements, style } => {
                map.serialize_entry(block_type.payload_key(), &CodePayload { elements, style })?;
            }
            Block::Divider => {
                map.serialize_entry(block_type.payload_key(), &Empty {})?;
            }
        }
        map.end()
    }
}

/// Request body for appending blocks under a parent block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentUpdate {
    pub children: Vec<Block>,
}

/// Wrap a block sequence as an append-children request body. Block order
/// is preserved as-is.
pub fn to_document_update(children: Vec<Block>) -> DocumentUpdate {
    DocumentUpdate { children }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::block::{BlockType, HeadingLevel, Link, TextStyle};

    fn wire(block: &Block) -> serde_json::Value {
        serde_json::to_value(block).unwrap()
    }

    #[test]
    fn text_block_payload_sits_under_text_key() {
        let block = Block::text(vec![TextElement::plain("hello")]);

        assert_eq!(
            wire(&block),
            json!({
                "block_type": 2,
                "text": {
                    "elements": [{ "text_run": { "content": "hello" } }],
                    "style": {}
                }
            })
        );
    }

    #[test]
    fn payload_key_round_trips_for_every_block_type() {
        let elements = vec![TextElement::plain("x")];
        let cases = vec![
            (Block::text(elements.clone()), BlockType::Text),
            (
                Block::heading(HeadingLevel::H1, elements.clone()),
                BlockType::Heading1,
            ),
            (
                Block::heading(HeadingLevel::H5, elements.clone()),
                BlockType::Heading5,
            ),
            (
                Block::heading(HeadingLevel::H9, elements.clone()),
                BlockType::Heading9,
            ),
            (Block::bullet(elements.clone()), BlockType::Bullet),
            (Block::ordered(elements.clone()), BlockType::Ordered),
            (Block::quote(elements.clone()), BlockType::Quote),
            (Block::code("x", "plaintext"), BlockType::Code),
            (Block::Divider, BlockType::Divider),
        ];

        for (block, expected) in cases {
            let value = wire(&block);
            assert_eq!(value["block_type"], json!(expected.code()));
            assert!(
                value.get(expected.payload_key()).is_some(),
                "payload for {expected:?} missing under {:?}",
                expected.payload_key()
            );
        }
    }

    #[test]
    fn code_block_carries_language_and_wrap() {
        let block = Block::code("print(1)", "py");

        assert_eq!(
            wire(&block),
            json!({
                "block_type": 14,
                "code": {
                    "elements": [{ "text_run": { "content": "print(1)" } }],
                    "style": { "language": 40, "wrap": false }
                }
            })
        );
    }

    #[test]
    fn divider_block_has_empty_payload() {
        assert_eq!(
            wire(&Block::Divider),
            json!({ "block_type": 22, "divider": {} })
        );
    }

    #[test]
    fn style_flags_are_omitted_when_false() {
        let element = TextElement::styled(
            "bold",
            TextStyle {
                bold: true,
                ..TextStyle::default()
            },
        );

        assert_eq!(
            serde_json::to_value(&element).unwrap(),
            json!({
                "text_run": {
                    "content": "bold",
                    "text_element_style": { "bold": true }
                }
            })
        );
    }

    #[test]
    fn link_style_serializes_url_object() {
        let element = TextElement::styled(
            "Go",
            TextStyle {
                link: Some(Link {
                    url: "https://go.dev".to_string(),
                }),
                ..TextStyle::default()
            },
        );

        assert_eq!(
            serde_json::to_value(&element).unwrap(),
            json!({
                "text_run": {
                    "content": "Go",
                    "text_element_style": { "link": { "url": "https://go.dev" } }
                }
            })
        );
    }

    #[test]
    fn document_update_wraps_children_in_order() {
        let update = to_document_update(vec![
            Block::heading(HeadingLevel::H1, vec![TextElement::plain("Title")]),
            Block::Divider,
        ]);

        let value = serde_json::to_value(&update).unwrap();
        let children = value["children"].as_array().unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0]["block_type"], json!(3));
        assert_eq!(children[1]["block_type"], json!(22));
    }
}
