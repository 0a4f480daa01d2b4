//! Resume document domain models.
//!
//! The wire form (JSON/YAML) uses camelCase field names so that documents
//! exported by earlier revisions of the editor keep loading unchanged. Every
//! container carries `#[serde(default)]`: a field absent from a stored
//! document resolves to the default value instead of failing the load.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Section ids of the five built-in sections, in default display order.
pub const BUILTIN_SECTION_IDS: [&str; 5] =
    ["summary", "experience", "education", "projects", "skills"];

/// Id of the summary section, which renders in the document header and is
/// excluded from the drag/reorder affordance.
pub const SUMMARY_SECTION_ID: &str = "summary";

/// Generates a fresh client-side identifier for entities and custom sections.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Icon identifiers selectable for contact entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ContactIconType {
    Mail,
    Phone,
    MapPin,
    Globe,
    Linkedin,
    Github,
    Twitter,
    Instagram,
    Facebook,
    Youtube,
    Dribbble,
    Behance,
    #[default]
    Link,
    User,
    Briefcase,
    Calendar,
    MessageCircle,
    AtSign,
}

/// A free-form contact entry beyond the base personal-info fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactItem {
    pub id: String,
    /// Icon shown next to the value.
    #[serde(rename = "type")]
    pub kind: ContactIconType,
    pub value: String,
    /// Explicit link target. When absent, a target is derived from `value`
    /// at render time (see [`crate::link::derive_href`]).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Display position among custom contacts, 1-based.
    pub order: u32,
}

impl ContactItem {
    /// Creates a new contact entry with a generated id.
    pub fn new(kind: ContactIconType, value: impl Into<String>, order: u32) -> Self {
        Self {
            id: generate_id(),
            kind,
            value: value.into(),
            href: None,
            order,
        }
    }
}

/// Per-field icon overrides for the base contact fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactIconConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_icon: Option<ContactIconType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_icon: Option<ContactIconType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_icon: Option<ContactIconType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_icon: Option<ContactIconType>,
}

/// Name, contact fields and free-text summary shown in the document header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub summary: String,
    pub icon_config: ContactIconConfig,
    pub contacts: Vec<ContactItem>,
}

/// A work experience entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    /// When set, the rendered end date is the localized present marker and
    /// the stored `end_date` is empty.
    pub current: bool,
    /// Ordered bullet lines. Kept non-empty (at least one blank line) so the
    /// bullet editor always has a row to edit.
    pub description: Vec<String>,
}

impl Experience {
    /// Creates a blank entry with a generated id and one empty bullet line.
    pub fn new() -> Self {
        Self {
            id: generate_id(),
            description: vec![String::new()],
            ..Default::default()
        }
    }
}

/// An education entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub major: String,
    pub location: String,
    pub gpa: String,
    pub start_date: String,
    pub end_date: String,
    pub description: Vec<String>,
}

impl Education {
    /// Creates a blank entry with a generated id and one empty bullet line.
    pub fn new() -> Self {
        Self {
            id: generate_id(),
            description: vec![String::new()],
            ..Default::default()
        }
    }
}

/// A project entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub role: String,
    pub url: String,
    pub start_date: String,
    pub end_date: String,
    /// Same one-way semantics as [`Experience::current`].
    pub current: bool,
    pub description: Vec<String>,
    pub technologies: Vec<String>,
}

impl Project {
    /// Creates a blank entry with a generated id and one empty bullet line.
    pub fn new() -> Self {
        Self {
            id: generate_id(),
            description: vec![String::new()],
            ..Default::default()
        }
    }
}

/// A skill group: a category label with its items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub id: String,
    pub category: String,
    pub items: Vec<String>,
}

impl Skill {
    /// Creates a blank skill group with a generated id.
    pub fn new() -> Self {
        Self {
            id: generate_id(),
            ..Default::default()
        }
    }
}

/// An item inside a user-added custom section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomSectionItem {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub description: Vec<String>,
}

impl CustomSectionItem {
    /// Creates a blank item with a generated id and one empty bullet line.
    pub fn new() -> Self {
        Self {
            id: generate_id(),
            description: vec![String::new()],
            ..Default::default()
        }
    }
}

/// Content of a user-added section, keyed by the same id as its
/// [`SectionConfig`] entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomSection {
    pub id: String,
    pub items: Vec<CustomSectionItem>,
}

/// Descriptor for one section in the ordered section registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionConfig {
    pub id: String,
    /// User-facing title. Empty for built-in sections that take their title
    /// from the caller-supplied labels at render time.
    pub title: String,
    pub visible: bool,
    /// Display position. Reassigned densely (1..N) on reorder; a deletion
    /// may leave a gap until the next reorder.
    pub order: u32,
    pub is_custom: bool,
}

/// Presentation settings. No effect on data semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeConfig {
    pub primary_color: String,
    pub font_family: String,
    pub font_size: f32,
    pub spacing: f32,
    pub line_height: f32,
    pub enable_links: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary_color: "#3b82f6".to_string(),
            font_family: "Inter".to_string(),
            font_size: 11.0,
            spacing: 8.0,
            line_height: 1.5,
            enable_links: true,
        }
    }
}

/// The root resume document aggregate. One instance per session, mutated
/// exclusively through [`crate::resume::store::ResumeStore`] operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub custom_sections: Vec<CustomSection>,
    pub sections: Vec<SectionConfig>,
    pub theme: ThemeConfig,
}

impl Default for ResumeData {
    fn default() -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            experience: Vec::new(),
            education: Vec::new(),
            projects: Vec::new(),
            skills: Vec::new(),
            custom_sections: Vec::new(),
            sections: BUILTIN_SECTION_IDS
                .iter()
                .enumerate()
                .map(|(idx, id)| SectionConfig {
                    id: (*id).to_string(),
                    title: String::new(),
                    visible: true,
                    order: idx as u32 + 1,
                    is_custom: false,
                })
                .collect(),
            theme: ThemeConfig::default(),
        }
    }
}

impl ResumeData {
    /// Looks up a section descriptor by id.
    pub fn section(&self, id: &str) -> Option<&SectionConfig> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Looks up the content of a custom section by id.
    pub fn custom_section(&self, id: &str) -> Option<&CustomSection> {
        self.custom_sections.iter().find(|cs| cs.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document_has_five_builtin_sections() {
        let resume = ResumeData::default();
        assert_eq!(resume.sections.len(), 5);
        for (idx, section) in resume.sections.iter().enumerate() {
            assert_eq!(section.id, BUILTIN_SECTION_IDS[idx]);
            assert_eq!(section.order, idx as u32 + 1);
            assert!(section.visible);
            assert!(!section.is_custom);
        }
        assert!(resume.experience.is_empty());
        assert!(resume.custom_sections.is_empty());
    }

    #[test]
    fn test_default_theme() {
        let theme = ThemeConfig::default();
        assert_eq!(theme.primary_color, "#3b82f6");
        assert_eq!(theme.font_family, "Inter");
        assert_eq!(theme.font_size, 11.0);
        assert!(theme.enable_links);
    }

    #[test]
    fn test_entity_constructors_seed_one_blank_bullet() {
        assert_eq!(Experience::new().description, vec![String::new()]);
        assert_eq!(Education::new().description, vec![String::new()]);
        assert_eq!(Project::new().description, vec![String::new()]);
        assert_eq!(CustomSectionItem::new().description, vec![String::new()]);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(Experience::new().id, Experience::new().id);
    }

    #[test]
    fn test_icon_type_kebab_case_wire_form() {
        let json = serde_json::to_string(&ContactIconType::MessageCircle).unwrap();
        assert_eq!(json, "\"message-circle\"");
        let parsed: ContactIconType = serde_json::from_str("\"at-sign\"").unwrap();
        assert_eq!(parsed, ContactIconType::AtSign);
    }

    #[test]
    fn test_contact_item_wire_form_uses_type_key() {
        let contact = ContactItem::new(ContactIconType::Github, "github.com/jane", 1);
        let value = serde_json::to_value(&contact).unwrap();
        assert_eq!(value["type"], "github");
        // href is absent, not null
        assert!(value.get("href").is_none());
    }

    #[test]
    fn test_document_loads_with_missing_fields() {
        // A stored document from an older schema revision: no theme, no
        // customSections, partial personalInfo.
        let json = r#"{"personalInfo":{"name":"Jane"},"sections":[]}"#;
        let resume: ResumeData = serde_json::from_str(json).unwrap();
        assert_eq!(resume.personal_info.name, "Jane");
        assert_eq!(resume.personal_info.email, "");
        assert_eq!(resume.theme, ThemeConfig::default());
        assert!(resume.custom_sections.is_empty());
    }
}
