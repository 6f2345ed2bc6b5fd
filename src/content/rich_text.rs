//! Portable-text style rich content.
//!
//! Long-form descriptions arrive either as a plain string or as the CMS
//! export's block list: `{"_type": "block", "children": [{"_type":
//! "span", "text": ...}]}`. Only `block` entries carry text; images and
//! other embeds flatten to nothing.

use serde::{Deserialize, Serialize};

/// One textual run inside a block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    #[serde(default)]
    pub text: String,
}

/// One rich-text block.
///
/// Unknown `_type` values deserialize as [`Block::Other`] and contribute
/// no text, so a content export with image or embed blocks still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type", rename_all = "lowercase")]
pub enum Block {
    Block {
        #[serde(default)]
        children: Vec<Span>,
    },
    #[serde(other)]
    Other,
}

/// A description field: plain text or rich blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Text(String),
    Blocks(Vec<Block>),
}

impl Description {
    /// Flatten to plain text: the textual runs of every `block` entry,
    /// in document order, joined by single spaces.
    pub fn plain_text(&self) -> String {
        match self {
            Description::Text(text) => text.clone(),
            Description::Blocks(blocks) => {
                let mut runs: Vec<&str> = Vec::new();
                for block in blocks {
                    if let Block::Block { children } = block {
                        for span in children {
                            if !span.text.is_empty() {
                                runs.push(&span.text);
                            }
                        }
                    }
                }
                runs.join(" ")
            }
        }
    }
}
