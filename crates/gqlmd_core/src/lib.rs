//! Core utilities for gqlmd.
//!
//! This crate provides the markup primitives shared by the printer:
//! - `text`: MDX escaping and slug generation
//! - `markdown`: Markdown/MDX fragments (headings, code spans, links)

pub mod markdown;
pub mod text;

pub use markdown::{HeadingLevel, MARKDOWN_CODE_INDENTATION, MARKDOWN_EOL, MARKDOWN_EOP};
pub use text::{escape_mdx, slugify};
