use super::anchor::AnchorLinks;
use super::tree::Section;

/// Render the section tree as an indented, numbered list of anchor links
pub fn render_toc(root: &Section) -> String {
    let mut output = String::new();
    let mut anchors = AnchorLinks::new();
    render_children(root, 0, &mut anchors, &mut output);
    output
}

/// Append one list level to the output.
///
/// Numbering counts every child of the parent, placeholders included, but
/// a placeholder emits no line of its own; its children just render one
/// level deeper.
fn render_children(
    section: &Section,
    depth: usize,
    anchors: &mut AnchorLinks,
    output: &mut String,
) {
    for (i, child) in section.children.iter().enumerate() {
        if let Some(name) = &child.name {
            output.push_str(&format!(
                "{}{}. [{}]({})\n",
                indent(depth),
                i + 1,
                name,
                anchors.link_for(name)
            ));
        }
        render_children(child, depth + 1, anchors, output);
    }
}

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}
