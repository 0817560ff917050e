//! Serializes an abbreviation tree to a markup fragment.
//!
//! Output goes into a growable `String`; an optional byte cap turns oversized
//! output into an explicit [`RenderError::CapacityExceeded`] rather than a
//! silent truncation. A node with `repeat_count == 0` contributes nothing,
//! which is valid output, not an error.

use thiserror::Error;

use crate::ast::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The rendered output would exceed the configured byte cap.
    #[error("rendered output needs at least {needed} bytes but the cap is {limit}")]
    CapacityExceeded { needed: usize, limit: usize },
}

/// Knobs for one render call.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Placeholder text for the content of leaf elements. Escaped on output.
    pub content: String,
    /// Maximum output size in bytes; `None` means unbounded.
    pub max_output: Option<usize>,
}

/// Render one tree to a markup fragment.
pub fn render(node: &Node, opts: &RenderOptions) -> Result<String, RenderError> {
    let mut out = String::new();
    render_into(node, opts, &mut out)?;
    Ok(out)
}

fn render_into(node: &Node, opts: &RenderOptions, out: &mut String) -> Result<(), RenderError> {
    if node.repeat_count == 0 {
        return Ok(());
    }

    // The open tag is identical across repetitions; build it once.
    let mut open = String::new();
    open.push('<');
    open.push_str(&node.label);
    if !node.class_name.is_empty() {
        open.push_str(" class=\"");
        push_escaped(&node.class_name, &mut open);
        open.push('"');
    }
    if let Some(id) = &node.id {
        open.push_str(" id=\"");
        push_escaped(id, &mut open);
        open.push('"');
    }
    open.push('>');

    for _ in 0..node.repeat_count {
        emit(out, &open, opts.max_output)?;
        if node.children.is_empty() {
            let mut content = String::new();
            push_escaped(&opts.content, &mut content);
            emit(out, &content, opts.max_output)?;
        } else {
            for child in &node.children {
                render_into(child, opts, out)?;
            }
        }
        emit(out, "</", opts.max_output)?;
        emit(out, &node.label, opts.max_output)?;
        emit(out, ">", opts.max_output)?;
    }
    Ok(())
}

/// Append `piece`, failing loudly if the cap would be crossed. The cap is
/// checked before writing, so a failed render never leaves `out` over the
/// limit.
fn emit(out: &mut String, piece: &str, cap: Option<usize>) -> Result<(), RenderError> {
    if let Some(limit) = cap {
        let needed = out.len() + piece.len();
        if needed > limit {
            return Err(RenderError::CapacityExceeded { needed, limit });
        }
    }
    out.push_str(piece);
    Ok(())
}

/// Markup-escape `text` into `dest`: `&`, `"`, `<`, `>` are never written
/// raw, so attribute values and content are safe for untrusted input.
fn push_escaped(text: &str, dest: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => dest.push_str("&amp;"),
            '"' => dest.push_str("&quot;"),
            '<' => dest.push_str("&lt;"),
            '>' => dest.push_str("&gt;"),
            other => dest.push(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_content(content: &str) -> RenderOptions {
        RenderOptions {
            content: content.to_string(),
            max_output: None,
        }
    }

    #[test]
    fn bare_node_renders_one_element() {
        let out = render(&Node::new("div"), &RenderOptions::default()).unwrap();
        assert_eq!(out, "<div></div>");
    }

    #[test]
    fn class_attribute_only_when_nonempty() {
        let out = render(&Node::new("div").with_class("root"), &with_content("it")).unwrap();
        assert_eq!(out, "<div class=\"root\">it</div>");
    }

    #[test]
    fn id_attribute_only_when_present() {
        let out = render(
            &Node::new("p").with_class("lead").with_id("intro"),
            &RenderOptions::default(),
        )
        .unwrap();
        assert_eq!(out, "<p class=\"lead\" id=\"intro\"></p>");
    }

    #[test]
    fn repeat_count_writes_consecutive_copies() {
        let node = Node::new("div").with_class("root").with_count(3);
        let out = render(&node, &with_content("it")).unwrap();
        assert_eq!(
            out,
            "<div class=\"root\">it</div><div class=\"root\">it</div><div class=\"root\">it</div>"
        );
    }

    #[test]
    fn repeat_count_zero_emits_nothing() {
        let node = Node::new("div").with_count(0);
        let out = render(&node, &with_content("it")).unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn suppressed_child_vanishes_from_parent_content() {
        let node = Node::new("ul").with_children(vec![
            Node::new("li").with_count(0),
            Node::new("li"),
        ]);
        let out = render(&node, &RenderOptions::default()).unwrap();
        assert_eq!(out, "<ul><li></li></ul>");
    }

    #[test]
    fn children_render_inside_parent_in_order() {
        let node = Node::new("ul").with_children(vec![Node::new("li").with_count(2)]);
        let out = render(&node, &RenderOptions::default()).unwrap();
        assert_eq!(out, "<ul><li></li><li></li></ul>");
    }

    #[test]
    fn placeholder_content_fills_leaves_not_parents() {
        let node = Node::new("ul").with_children(vec![Node::new("li")]);
        let out = render(&node, &with_content("it")).unwrap();
        assert_eq!(out, "<ul><li>it</li></ul>");
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let node = Node::new("div").with_class("a&b");
        let opts = with_content("<\"quoted\">");
        let out = render(&node, &opts).unwrap();
        assert_eq!(
            out,
            "<div class=\"a&amp;b\">&lt;&quot;quoted&quot;&gt;</div>"
        );
    }

    #[test]
    fn cap_overflow_fails_instead_of_truncating() {
        let node = Node::new("div").with_count(1000);
        let opts = RenderOptions {
            content: String::new(),
            max_output: Some(64),
        };
        let err = render(&node, &opts).unwrap_err();
        assert!(matches!(err, RenderError::CapacityExceeded { limit: 64, .. }));
    }

    #[test]
    fn output_within_cap_is_unaffected() {
        let node = Node::new("div");
        let opts = RenderOptions {
            content: String::new(),
            max_output: Some(64),
        };
        assert_eq!(render(&node, &opts).unwrap(), "<div></div>");
    }
}
