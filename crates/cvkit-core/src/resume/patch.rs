//! Partial-update types for store mutations.
//!
//! Each patch mirrors its target with every field optional; `apply` performs
//! the shallow merge the store contracts require. None means "leave as is",
//! never "clear" — clearing a text field is expressed with `Some("")`.

use serde::{Deserialize, Serialize};

use super::model::{
    ContactIconConfig, ContactIconType, ContactItem, CustomSectionItem, Education, Experience,
    PersonalInfo, Project, SectionConfig, Skill, ThemeConfig,
};

/// Partial update for [`PersonalInfo`] (icon config and contacts have their
/// own operations).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfoPatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub summary: Option<String>,
}

impl PersonalInfoPatch {
    pub(crate) fn apply(self, target: &mut PersonalInfo) {
        if let Some(name) = self.name {
            target.name = name;
        }
        if let Some(title) = self.title {
            target.title = title;
        }
        if let Some(email) = self.email {
            target.email = email;
        }
        if let Some(phone) = self.phone {
            target.phone = phone;
        }
        if let Some(location) = self.location {
            target.location = location;
        }
        if let Some(website) = self.website {
            target.website = website;
        }
        if let Some(summary) = self.summary {
            target.summary = summary;
        }
    }
}

/// Partial update for [`ContactIconConfig`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconConfigPatch {
    pub email_icon: Option<ContactIconType>,
    pub phone_icon: Option<ContactIconType>,
    pub location_icon: Option<ContactIconType>,
    pub website_icon: Option<ContactIconType>,
}

impl IconConfigPatch {
    pub(crate) fn apply(self, target: &mut ContactIconConfig) {
        if self.email_icon.is_some() {
            target.email_icon = self.email_icon;
        }
        if self.phone_icon.is_some() {
            target.phone_icon = self.phone_icon;
        }
        if self.location_icon.is_some() {
            target.location_icon = self.location_icon;
        }
        if self.website_icon.is_some() {
            target.website_icon = self.website_icon;
        }
    }
}

/// Partial update for [`ThemeConfig`]. No bounds enforcement here; value
/// ranges (e.g. font size) are a UI concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemePatch {
    pub primary_color: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
    pub spacing: Option<f32>,
    pub line_height: Option<f32>,
    pub enable_links: Option<bool>,
}

impl ThemePatch {
    pub(crate) fn apply(self, target: &mut ThemeConfig) {
        if let Some(primary_color) = self.primary_color {
            target.primary_color = primary_color;
        }
        if let Some(font_family) = self.font_family {
            target.font_family = font_family;
        }
        if let Some(font_size) = self.font_size {
            target.font_size = font_size;
        }
        if let Some(spacing) = self.spacing {
            target.spacing = spacing;
        }
        if let Some(line_height) = self.line_height {
            target.line_height = line_height;
        }
        if let Some(enable_links) = self.enable_links {
            target.enable_links = enable_links;
        }
    }
}

/// Partial update for a [`SectionConfig`] entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionConfigPatch {
    pub title: Option<String>,
    pub visible: Option<bool>,
    pub order: Option<u32>,
}

impl SectionConfigPatch {
    pub(crate) fn apply(self, target: &mut SectionConfig) {
        if let Some(title) = self.title {
            target.title = title;
        }
        if let Some(visible) = self.visible {
            target.visible = visible;
        }
        if let Some(order) = self.order {
            target.order = order;
        }
    }
}

/// Partial update for an [`Experience`] entry.
///
/// Setting `current` to true clears the stored end date; flipping it back
/// does not restore it. The discard is deliberate and one-way.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: Option<bool>,
    pub description: Option<Vec<String>>,
}

impl ExperiencePatch {
    pub(crate) fn apply(self, target: &mut Experience) {
        if let Some(company) = self.company {
            target.company = company;
        }
        if let Some(position) = self.position {
            target.position = position;
        }
        if let Some(location) = self.location {
            target.location = location;
        }
        if let Some(start_date) = self.start_date {
            target.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            target.end_date = end_date;
        }
        if let Some(description) = self.description {
            target.description = description;
        }
        if let Some(current) = self.current {
            target.current = current;
            if current {
                target.end_date.clear();
            }
        }
    }
}

/// Partial update for an [`Education`] entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationPatch {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub major: Option<String>,
    pub location: Option<String>,
    pub gpa: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<Vec<String>>,
}

impl EducationPatch {
    pub(crate) fn apply(self, target: &mut Education) {
        if let Some(school) = self.school {
            target.school = school;
        }
        if let Some(degree) = self.degree {
            target.degree = degree;
        }
        if let Some(major) = self.major {
            target.major = major;
        }
        if let Some(location) = self.location {
            target.location = location;
        }
        if let Some(gpa) = self.gpa {
            target.gpa = gpa;
        }
        if let Some(start_date) = self.start_date {
            target.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            target.end_date = end_date;
        }
        if let Some(description) = self.description {
            target.description = description;
        }
    }
}

/// Partial update for a [`Project`] entry. Same one-way `current` semantics
/// as [`ExperiencePatch`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub url: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: Option<bool>,
    pub description: Option<Vec<String>>,
    pub technologies: Option<Vec<String>>,
}

impl ProjectPatch {
    pub(crate) fn apply(self, target: &mut Project) {
        if let Some(name) = self.name {
            target.name = name;
        }
        if let Some(role) = self.role {
            target.role = role;
        }
        if let Some(url) = self.url {
            target.url = url;
        }
        if let Some(start_date) = self.start_date {
            target.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            target.end_date = end_date;
        }
        if let Some(description) = self.description {
            target.description = description;
        }
        if let Some(technologies) = self.technologies {
            target.technologies = technologies;
        }
        if let Some(current) = self.current {
            target.current = current;
            if current {
                target.end_date.clear();
            }
        }
    }
}

/// Partial update for a [`Skill`] group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillPatch {
    pub category: Option<String>,
    pub items: Option<Vec<String>>,
}

impl SkillPatch {
    pub(crate) fn apply(self, target: &mut Skill) {
        if let Some(category) = self.category {
            target.category = category;
        }
        if let Some(items) = self.items {
            target.items = items;
        }
    }
}

/// Partial update for a [`ContactItem`]. Position changes go through
/// `reorder_contacts`, not here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactPatch {
    #[serde(rename = "type")]
    pub kind: Option<ContactIconType>,
    pub value: Option<String>,
    pub href: Option<String>,
}

impl ContactPatch {
    pub(crate) fn apply(self, target: &mut ContactItem) {
        if let Some(kind) = self.kind {
            target.kind = kind;
        }
        if let Some(value) = self.value {
            target.value = value;
        }
        if self.href.is_some() {
            target.href = self.href;
        }
    }
}

/// Partial update for a [`CustomSectionItem`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomSectionItemPatch {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub date: Option<String>,
    pub description: Option<Vec<String>>,
}

impl CustomSectionItemPatch {
    pub(crate) fn apply(self, target: &mut CustomSectionItem) {
        if let Some(title) = self.title {
            target.title = title;
        }
        if let Some(subtitle) = self.subtitle {
            target.subtitle = subtitle;
        }
        if let Some(date) = self.date {
            target.date = date;
        }
        if let Some(description) = self.description {
            target.description = description;
        }
    }
}
