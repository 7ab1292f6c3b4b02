use std::collections::HashMap;

/// Generates `#anchor` links from heading names.
///
/// Tracks how many times each base slug has been produced, so repeated
/// headings get `-1`, `-2`, ... suffixes in document order. One instance
/// covers exactly one rendering pass; counts must not leak across
/// documents.
#[derive(Debug, Default)]
pub struct AnchorLinks {
    /// Count of how many times each base slug has been used
    used: HashMap<String, usize>,
}

impl AnchorLinks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchor link for a heading name, `#` prefix included.
    ///
    /// The base slug is the lowercased name with spaces turned into
    /// hyphens; punctuation and non-ASCII characters pass through
    /// untouched. A heading literally named like an already suffixed slug
    /// (`Step 3` twice, then `Step 3-1`) still collides with it.
    pub fn link_for(&mut self, name: &str) -> String {
        let base: String = name
            .to_lowercase()
            .chars()
            .map(|c| if c == ' ' { '-' } else { c })
            .collect();

        let count = self.used.entry(base.clone()).or_insert(0);
        *count += 1;

        if *count == 1 {
            format!("#{}", base)
        } else {
            format!("#{}-{}", base, *count - 1)
        }
    }
}
