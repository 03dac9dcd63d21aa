//! The block registry: tag → {renderer, default props, schema}.

use crate::render::{self, Renderer};
use crate::schema::{PropertyField, PropertyKind, PropertySchema};
use pagecraft_document::Props;
use serde_json::json;

/// Everything the editor needs to know about one block type.
pub struct BlockDescriptor {
    /// Type tag stored in block instances.
    pub tag: &'static str,

    /// Palette label.
    pub label: &'static str,

    /// Palette grouping.
    pub category: &'static str,

    /// Props a freshly added block starts with.
    pub default_props: Props,

    /// Editable-property schema for the property panel.
    pub schema: PropertySchema,

    pub renderer: Renderer,
}

/// Static lookup table of available block types.
pub struct BlockRegistry {
    entries: Vec<BlockDescriptor>,
}

impl BlockRegistry {
    /// The stock block library.
    pub fn builtin() -> Self {
        Self {
            entries: builtin_entries(),
        }
    }

    pub fn get(&self, tag: &str) -> Option<&BlockDescriptor> {
        self.entries.iter().find(|e| e.tag == tag)
    }

    pub fn renderer(&self, tag: &str) -> Option<Renderer> {
        self.get(tag).map(|e| e.renderer)
    }

    pub fn schema(&self, tag: &str) -> Option<&PropertySchema> {
        self.get(tag).map(|e| &e.schema)
    }

    /// Clone of the default props for `tag`, ready to hand to
    /// `Document::add_block`.
    pub fn default_props(&self, tag: &str) -> Option<Props> {
        self.get(tag).map(|e| e.default_props.clone())
    }

    pub fn list_by_category(&self, category: &str) -> Vec<&BlockDescriptor> {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    /// Distinct categories in palette order.
    pub fn categories(&self) -> Vec<&'static str> {
        let mut seen = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.category) {
                seen.push(entry.category);
            }
        }
        seen
    }

    pub fn all(&self) -> &[BlockDescriptor] {
        &self.entries
    }
}

fn props(pairs: &[(&str, serde_json::Value)]) -> Props {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn builtin_entries() -> Vec<BlockDescriptor> {
    vec![
        BlockDescriptor {
            tag: "hero",
            label: "Hero Banner",
            category: "headers",
            default_props: props(&[
                ("title", json!("Your headline here")),
                ("subtitle", json!("Supporting copy that sells the idea")),
                ("cta_label", json!("Get Started")),
                ("background_image", json!("")),
            ]),
            schema: vec![
                PropertyField::new("title", "Title", PropertyKind::Text),
                PropertyField::new("subtitle", "Subtitle", PropertyKind::LongText),
                PropertyField::new("cta_label", "Button Label", PropertyKind::Text),
                PropertyField::new("background_image", "Background", PropertyKind::Image),
            ],
            renderer: render::hero,
        },
        BlockDescriptor {
            tag: "text",
            label: "Text Section",
            category: "content",
            default_props: props(&[
                ("heading", json!("Section heading")),
                ("content", json!("Write something compelling.")),
                ("align", json!("left")),
            ]),
            schema: vec![
                PropertyField::new("heading", "Heading", PropertyKind::Text),
                PropertyField::new("content", "Content", PropertyKind::LongText),
                PropertyField::new(
                    "align",
                    "Alignment",
                    PropertyKind::Select {
                        options: vec![
                            "left".to_string(),
                            "center".to_string(),
                            "right".to_string(),
                        ],
                    },
                ),
            ],
            renderer: render::text,
        },
        BlockDescriptor {
            tag: "image",
            label: "Image",
            category: "media",
            default_props: props(&[("src", json!("")), ("alt", json!("")), ("width", json!(100))]),
            schema: vec![
                PropertyField::new("src", "Image", PropertyKind::Image),
                PropertyField::new("alt", "Alt Text", PropertyKind::Text),
                PropertyField::new(
                    "width",
                    "Width (%)",
                    PropertyKind::Number {
                        min: 10.0,
                        max: 100.0,
                    },
                ),
            ],
            renderer: render::image,
        },
        BlockDescriptor {
            tag: "gallery",
            label: "Image Gallery",
            category: "media",
            default_props: props(&[("images", json!([])), ("columns", json!(3))]),
            schema: vec![
                PropertyField::new("images", "Images", PropertyKind::StructuredList),
                PropertyField::new(
                    "columns",
                    "Columns",
                    PropertyKind::Number { min: 1.0, max: 6.0 },
                ),
            ],
            renderer: render::gallery,
        },
        BlockDescriptor {
            tag: "cta",
            label: "Call to Action",
            category: "conversion",
            default_props: props(&[
                ("heading", json!("Ready to start?")),
                ("button_label", json!("Sign Up")),
                ("button_color", json!("")),
            ]),
            schema: vec![
                PropertyField::new("heading", "Heading", PropertyKind::Text),
                PropertyField::new("button_label", "Button Label", PropertyKind::Text),
                PropertyField::new("button_color", "Button Color", PropertyKind::Color),
            ],
            renderer: render::cta,
        },
        BlockDescriptor {
            tag: "features",
            label: "Feature Grid",
            category: "content",
            default_props: props(&[("heading", json!("Why choose us")), ("items", json!([]))]),
            schema: vec![
                PropertyField::new("heading", "Heading", PropertyKind::Text),
                PropertyField::new("items", "Features", PropertyKind::StructuredList),
            ],
            renderer: render::features,
        },
        BlockDescriptor {
            tag: "testimonial",
            label: "Testimonial",
            category: "content",
            default_props: props(&[
                ("quote", json!("This changed everything for us.")),
                ("author", json!("A happy customer")),
            ]),
            schema: vec![
                PropertyField::new("quote", "Quote", PropertyKind::LongText),
                PropertyField::new("author", "Author", PropertyKind::Text),
            ],
            renderer: render::testimonial,
        },
        BlockDescriptor {
            tag: "contact",
            label: "Contact Form",
            category: "conversion",
            default_props: props(&[
                ("heading", json!("Get in touch")),
                ("email", json!("hello@example.com")),
            ]),
            schema: vec![
                PropertyField::new("heading", "Heading", PropertyKind::Text),
                PropertyField::new("email", "Destination Email", PropertyKind::Text),
            ],
            renderer: render::contact,
        },
        BlockDescriptor {
            tag: "footer",
            label: "Footer",
            category: "footers",
            default_props: props(&[("text", json!("© 2026 Your Company"))]),
            schema: vec![PropertyField::new("text", "Footer Text", PropertyKind::Text)],
            renderer: render::footer,
        },
    ]
}
