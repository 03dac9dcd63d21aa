//! Built-in template catalog.

use crate::template::{SiteType, Template};
use pagecraft_document::{BlockInstance, ThemeColors, ThemeConfig, ThemeFonts, ThemeMode};
use pagecraft_registry::BlockRegistry;
use serde_json::json;

/// Read-only catalog of seed templates, filterable by site type.
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    /// The stock catalog, seeded from the given registry's default props.
    pub fn builtin(registry: &BlockRegistry) -> Self {
        Self {
            templates: builtin_templates(registry),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn list_by_site_type(&self, site_type: SiteType) -> Vec<&Template> {
        self.templates
            .iter()
            .filter(|t| t.site_type == site_type)
            .collect()
    }

    pub fn all(&self) -> &[Template] {
        &self.templates
    }
}

/// A seed block: registry defaults overlaid with template-specific props.
fn seed_block(
    registry: &BlockRegistry,
    tag: &str,
    overrides: &[(&str, serde_json::Value)],
    order: u32,
) -> BlockInstance {
    let mut props = registry.default_props(tag).unwrap_or_default();
    for (key, value) in overrides {
        props.insert(key.to_string(), value.clone());
    }
    BlockInstance::new(tag, props, order)
}

fn builtin_templates(registry: &BlockRegistry) -> Vec<Template> {
    vec![
        Template {
            id: "campaign-launch",
            name: "Campaign Launch",
            description: "Hero, pitch, and a single strong call to action",
            site_type: SiteType::Campaign,
            components: vec![
                seed_block(
                    registry,
                    "hero",
                    &[
                        ("title", json!("Join the movement")),
                        ("subtitle", json!("Every signature counts.")),
                        ("cta_label", json!("Sign Now")),
                    ],
                    0,
                ),
                seed_block(
                    registry,
                    "text",
                    &[
                        ("heading", json!("Why it matters")),
                        ("content", json!("Explain the cause in two sentences.")),
                    ],
                    1,
                ),
                seed_block(
                    registry,
                    "cta",
                    &[("heading", json!("Add your name")), ("button_label", json!("Sign Now"))],
                    2,
                ),
                seed_block(registry, "footer", &[], 3),
            ],
            theme: ThemeConfig {
                colors: ThemeColors {
                    primary: "#dc2626".to_string(),
                    secondary: "#991b1b".to_string(),
                    background: "#ffffff".to_string(),
                    text: "#111827".to_string(),
                    accent: "#f59e0b".to_string(),
                },
                fonts: ThemeFonts::default(),
                mode: ThemeMode::Light,
            },
        },
        Template {
            id: "business-classic",
            name: "Business Classic",
            description: "Feature grid, testimonial, and contact form",
            site_type: SiteType::Business,
            components: vec![
                seed_block(
                    registry,
                    "hero",
                    &[
                        ("title", json!("Grow your business")),
                        ("subtitle", json!("Tools that scale with you.")),
                    ],
                    0,
                ),
                seed_block(registry, "features", &[], 1),
                seed_block(registry, "testimonial", &[], 2),
                seed_block(registry, "contact", &[], 3),
                seed_block(registry, "footer", &[], 4),
            ],
            theme: ThemeConfig::default(),
        },
        Template {
            id: "portfolio-minimal",
            name: "Minimal Portfolio",
            description: "Gallery-first single page",
            site_type: SiteType::Portfolio,
            components: vec![
                seed_block(
                    registry,
                    "hero",
                    &[("title", json!("Selected Work")), ("cta_label", json!("Contact"))],
                    0,
                ),
                seed_block(registry, "gallery", &[], 1),
                seed_block(registry, "footer", &[], 2),
            ],
            theme: ThemeConfig {
                colors: ThemeColors {
                    primary: "#111827".to_string(),
                    secondary: "#374151".to_string(),
                    background: "#0b0f19".to_string(),
                    text: "#f9fafb".to_string(),
                    accent: "#34d399".to_string(),
                },
                fonts: ThemeFonts {
                    heading: "Playfair Display".to_string(),
                    body: "Inter".to_string(),
                },
                mode: ThemeMode::Dark,
            },
        },
        Template {
            id: "event-invite",
            name: "Event Invite",
            description: "Date-forward page with an RSVP call to action",
            site_type: SiteType::Event,
            components: vec![
                seed_block(
                    registry,
                    "hero",
                    &[
                        ("title", json!("You're invited")),
                        ("subtitle", json!("Save the date.")),
                        ("cta_label", json!("RSVP")),
                    ],
                    0,
                ),
                seed_block(
                    registry,
                    "text",
                    &[("heading", json!("Schedule")), ("content", json!("Doors open at 7pm."))],
                    1,
                ),
                seed_block(
                    registry,
                    "cta",
                    &[("heading", json!("Reserve your seat")), ("button_label", json!("RSVP"))],
                    2,
                ),
            ],
            theme: ThemeConfig::default(),
        },
    ]
}
