//! Minimal render seam.
//!
//! Rendering proper (styling, layout, interactivity) lives in the host
//! application; this seam exists so the core can define the unknown-type
//! policy: a tag with no registry entry renders as a visible placeholder
//! in place of the block, never as an error that takes down the page.

use crate::BlockRegistry;
use pagecraft_document::{BlockInstance, Document, ThemeConfig};

/// Renders one block to markup.
pub type Renderer = fn(&BlockInstance, &ThemeConfig) -> String;

/// Render a single block, substituting a placeholder for unknown tags.
pub fn render_block(block: &BlockInstance, theme: &ThemeConfig, registry: &BlockRegistry) -> String {
    match registry.renderer(&block.block_type) {
        Some(renderer) => renderer(block, theme),
        None => {
            tracing::warn!(tag = %block.block_type, block = %block.id, "unknown block type");
            format!(
                "<div class=\"pc-unknown-block\">Unknown block: {}</div>",
                block.block_type
            )
        }
    }
}

/// Render a whole document in block order.
pub fn render_document(doc: &Document, registry: &BlockRegistry) -> String {
    doc.components
        .iter()
        .map(|block| render_block(block, &doc.theme, registry))
        .collect::<Vec<_>>()
        .join("\n")
}

fn prop_str<'a>(block: &'a BlockInstance, key: &str) -> &'a str {
    block.props.get(key).and_then(|v| v.as_str()).unwrap_or("")
}

pub(crate) fn hero(block: &BlockInstance, theme: &ThemeConfig) -> String {
    format!(
        "<section class=\"pc-hero\" style=\"background:{}\"><h1>{}</h1><p>{}</p><button>{}</button></section>",
        theme.colors.primary,
        prop_str(block, "title"),
        prop_str(block, "subtitle"),
        prop_str(block, "cta_label"),
    )
}

pub(crate) fn text(block: &BlockInstance, _theme: &ThemeConfig) -> String {
    format!(
        "<section class=\"pc-text\" style=\"text-align:{}\"><h2>{}</h2><p>{}</p></section>",
        prop_str(block, "align"),
        prop_str(block, "heading"),
        prop_str(block, "content"),
    )
}

pub(crate) fn image(block: &BlockInstance, _theme: &ThemeConfig) -> String {
    format!(
        "<img class=\"pc-image\" src=\"{}\" alt=\"{}\"/>",
        prop_str(block, "src"),
        prop_str(block, "alt"),
    )
}

pub(crate) fn gallery(block: &BlockInstance, _theme: &ThemeConfig) -> String {
    let count = block
        .props
        .get("images")
        .and_then(|v| v.as_array())
        .map(|a| a.len())
        .unwrap_or(0);
    format!("<section class=\"pc-gallery\" data-images=\"{}\"></section>", count)
}

pub(crate) fn cta(block: &BlockInstance, theme: &ThemeConfig) -> String {
    let color = match prop_str(block, "button_color") {
        "" => theme.colors.accent.as_str(),
        custom => custom,
    };
    format!(
        "<section class=\"pc-cta\"><h2>{}</h2><button style=\"background:{}\">{}</button></section>",
        prop_str(block, "heading"),
        color,
        prop_str(block, "button_label"),
    )
}

pub(crate) fn features(block: &BlockInstance, _theme: &ThemeConfig) -> String {
    format!(
        "<section class=\"pc-features\"><h2>{}</h2></section>",
        prop_str(block, "heading"),
    )
}

pub(crate) fn testimonial(block: &BlockInstance, _theme: &ThemeConfig) -> String {
    format!(
        "<blockquote class=\"pc-testimonial\">{}<cite>{}</cite></blockquote>",
        prop_str(block, "quote"),
        prop_str(block, "author"),
    )
}

pub(crate) fn contact(block: &BlockInstance, _theme: &ThemeConfig) -> String {
    format!(
        "<section class=\"pc-contact\"><h2>{}</h2><form data-to=\"{}\"></form></section>",
        prop_str(block, "heading"),
        prop_str(block, "email"),
    )
}

pub(crate) fn footer(block: &BlockInstance, theme: &ThemeConfig) -> String {
    format!(
        "<footer class=\"pc-footer\" style=\"color:{}\">{}</footer>",
        theme.colors.text,
        prop_str(block, "text"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_document::Props;

    #[test]
    fn test_unknown_type_renders_placeholder_not_error() {
        let registry = BlockRegistry::builtin();
        let mut doc = Document::new();
        doc.add_block("from-a-future-version", Props::new());

        let html = render_document(&doc, &registry);

        assert!(html.contains("pc-unknown-block"));
        assert!(html.contains("from-a-future-version"));
    }

    #[test]
    fn test_known_blocks_render_their_props() {
        let registry = BlockRegistry::builtin();
        let mut doc = Document::new();
        let id = doc.add_block("hero", registry.default_props("hero").unwrap());
        let mut patch = Props::new();
        patch.insert("title".to_string(), serde_json::json!("Launch Day"));
        doc.update_block(id, patch);

        let html = render_document(&doc, &registry);

        assert!(html.contains("Launch Day"));
        assert!(html.contains(&doc.theme.colors.primary));
    }

    #[test]
    fn test_document_renders_in_block_order() {
        let registry = BlockRegistry::builtin();
        let mut doc = Document::new();
        doc.add_block("text", registry.default_props("text").unwrap());
        doc.add_block("footer", registry.default_props("footer").unwrap());

        let html = render_document(&doc, &registry);
        let text_pos = html.find("pc-text").unwrap();
        let footer_pos = html.find("pc-footer").unwrap();
        assert!(text_pos < footer_pos);
    }
}
