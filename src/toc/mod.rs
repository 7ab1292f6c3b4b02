pub mod anchor;
pub mod generator;
pub mod parser;
pub mod tree;

pub use generator::render_toc;
pub use parser::extract_headings;
pub use tree::build_tree;

use crate::utils::error::BoxResult;

/// Generate a table of contents from Markdown content.
///
/// Scans the content for hash and underline headings (skipping hash
/// headings inside HTML comment blocks), rebuilds the section hierarchy,
/// and renders it as a numbered list of anchor links. A document without
/// headings yields an empty string.
pub fn generate_toc(content: &str) -> BoxResult<String> {
    let headings = extract_headings(content)?;
    log::debug!("Extracted {} headings", headings.len());

    let root = build_tree(headings);
    Ok(render_toc(&root))
}
