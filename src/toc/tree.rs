use serde::{Serialize, Deserialize};

use super::parser::HeadingEntry;

/// A node in the document outline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Section title; `None` marks a placeholder bridging a skipped level
    pub name: Option<String>,
    /// Subsections in document order
    pub children: Vec<Section>,
}

impl Section {
    fn new(name: Option<String>) -> Self {
        Section {
            name,
            children: Vec::new(),
        }
    }
}

/// Rebuild the section tree from the flat heading sequence.
///
/// A stack of open sections tracks the current ancestry. A heading at or
/// above the current depth closes the deeper open sections; a heading more
/// than one level deeper gets unnamed placeholder sections pushed in
/// between, so `#` followed directly by `###` still nests two levels down.
pub fn build_tree(headings: Vec<HeadingEntry>) -> Section {
    let mut stack: Vec<Section> = vec![Section::new(None)];

    for entry in headings {
        while stack.len() - 1 > entry.depth {
            attach_top(&mut stack);
        }
        while stack.len() - 1 < entry.depth {
            stack.push(Section::new(None));
        }
        stack.push(Section::new(Some(entry.text)));
    }

    // Fold everything still open back into the root
    while stack.len() > 1 {
        attach_top(&mut stack);
    }
    stack.pop().unwrap()
}

/// Close the top section by attaching it to its parent's children
fn attach_top(stack: &mut Vec<Section>) {
    let completed = stack.pop().unwrap();
    stack.last_mut().unwrap().children.push(completed);
}
