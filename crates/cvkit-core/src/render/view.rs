//! The render projection: stored snapshot in, display shape out.
//!
//! This is the single source of the rendered document structure. The live
//! preview, the PDF exporter and the PNG exporter (which rasterizes the
//! preview's output) all consume this projection, so rules like the present
//! marker substitution and same-employer grouping are applied exactly once.

use crate::link::derive_href;
use crate::resume::model::{
    ContactIconType, CustomSectionItem, ResumeData, SUMMARY_SECTION_ID, SectionConfig,
};

use super::labels::RenderLabels;

/// A single contact line in the rendered header.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedContact {
    pub icon: ContactIconType,
    pub value: String,
    /// Link target, already derived and scheme-checked. `None` renders as
    /// plain text.
    pub href: Option<String>,
}

/// The rendered document header. The summary always lives here, never in the
/// body.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderedHeader {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub contacts: Vec<RenderedContact>,
}

/// One entry inside a rendered body section.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderedEntry {
    /// Primary heading (company, school, project name, ...). `None` when
    /// suppressed because the previous entry carries the same heading.
    pub heading: Option<String>,
    /// Secondary line (position, degree, role, ...). Empty when absent.
    pub subheading: String,
    /// Formatted date range with the present marker already substituted.
    pub date_range: String,
    /// Non-blank bullet lines.
    pub bullets: Vec<String>,
    /// Trailing detail line (technology list, skill items). Empty when absent.
    pub meta: String,
}

/// A rendered body section.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSection {
    pub id: String,
    pub title: String,
    pub entries: Vec<RenderedEntry>,
}

/// The complete rendered document shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderedResume {
    pub header: RenderedHeader,
    pub sections: Vec<RenderedSection>,
}

/// Formats a date range, substituting the present marker for the end date of
/// an ongoing entry. Every exporter goes through this function so their
/// output is textually identical.
pub fn date_range(start: &str, end: &str, current: bool, labels: &RenderLabels) -> String {
    let end_part = if current { labels.present.as_str() } else { end };
    match (start.is_empty(), end_part.is_empty()) {
        (true, true) => String::new(),
        (false, true) => start.to_string(),
        (true, false) => end_part.to_string(),
        (false, false) => format!("{start} - {end_part}"),
    }
}

/// Computes the rendered shape of a document snapshot.
pub fn project(resume: &ResumeData, labels: &RenderLabels) -> RenderedResume {
    RenderedResume {
        header: project_header(resume),
        sections: project_sections(resume, labels),
    }
}

fn project_header(resume: &ResumeData) -> RenderedHeader {
    let info = &resume.personal_info;
    let icons = &info.icon_config;
    let links_enabled = resume.theme.enable_links;

    let link = |value: &str| {
        if links_enabled {
            derive_href(value)
        } else {
            None
        }
    };

    let mut contacts = Vec::new();
    let base = [
        (icons.email_icon.unwrap_or(ContactIconType::Mail), &info.email, true),
        (icons.phone_icon.unwrap_or(ContactIconType::Phone), &info.phone, true),
        (icons.location_icon.unwrap_or(ContactIconType::MapPin), &info.location, false),
        (icons.website_icon.unwrap_or(ContactIconType::Globe), &info.website, true),
    ];
    for (icon, value, linkable) in base {
        if value.is_empty() {
            continue;
        }
        contacts.push(RenderedContact {
            icon,
            value: value.clone(),
            href: if linkable { link(value) } else { None },
        });
    }

    let mut custom: Vec<_> = info.contacts.iter().filter(|c| !c.value.is_empty()).collect();
    custom.sort_by_key(|c| c.order);
    for contact in custom {
        // an explicit href wins over derivation but still passes the same
        // scheme check
        let href = if links_enabled {
            match &contact.href {
                Some(explicit) => derive_href(explicit),
                None => derive_href(&contact.value),
            }
        } else {
            None
        };
        contacts.push(RenderedContact {
            icon: contact.kind,
            value: contact.value.clone(),
            href,
        });
    }

    RenderedHeader {
        name: info.name.clone(),
        title: info.title.clone(),
        summary: info.summary.clone(),
        contacts,
    }
}

fn project_sections(resume: &ResumeData, labels: &RenderLabels) -> Vec<RenderedSection> {
    let mut visible: Vec<&SectionConfig> = resume
        .sections
        .iter()
        .filter(|s| s.visible && s.id != SUMMARY_SECTION_ID)
        .collect();
    visible.sort_by_key(|s| s.order);

    visible
        .into_iter()
        .filter_map(|section| {
            let entries = section_entries(resume, section, labels)?;
            Some(RenderedSection {
                id: section.id.clone(),
                title: section_title(section, labels),
                entries,
            })
        })
        .collect()
}

fn section_title(section: &SectionConfig, labels: &RenderLabels) -> String {
    if !section.title.is_empty() {
        return section.title.clone();
    }
    labels
        .builtin_section_title(&section.id)
        .unwrap_or_default()
        .to_string()
}

/// Returns the entries of a section, or `None` when the section has no
/// content and is skipped entirely.
fn section_entries(
    resume: &ResumeData,
    section: &SectionConfig,
    labels: &RenderLabels,
) -> Option<Vec<RenderedEntry>> {
    match section.id.as_str() {
        "experience" if !resume.experience.is_empty() => Some(
            resume
                .experience
                .iter()
                .enumerate()
                .map(|(idx, exp)| {
                    // compact display: repeat employers collapse under one heading,
                    // comparing to the immediately preceding entry only
                    let repeated = idx > 0 && resume.experience[idx - 1].company == exp.company;
                    let mut subheading = exp.position.clone();
                    if !exp.location.is_empty() {
                        push_detail(&mut subheading, " · ", &exp.location);
                    }
                    RenderedEntry {
                        heading: (!repeated).then(|| exp.company.clone()),
                        subheading,
                        date_range: date_range(&exp.start_date, &exp.end_date, exp.current, labels),
                        bullets: bullet_lines(&exp.description),
                        meta: String::new(),
                    }
                })
                .collect(),
        ),
        "education" if !resume.education.is_empty() => Some(
            resume
                .education
                .iter()
                .enumerate()
                .map(|(idx, edu)| {
                    let repeated = idx > 0 && resume.education[idx - 1].school == edu.school;
                    let mut subheading = edu.degree.clone();
                    if !edu.major.is_empty() {
                        push_detail(&mut subheading, " - ", &edu.major);
                    }
                    if !edu.gpa.is_empty() {
                        push_detail(&mut subheading, " · ", &format!("GPA: {}", edu.gpa));
                    }
                    RenderedEntry {
                        heading: (!repeated).then(|| edu.school.clone()),
                        subheading,
                        date_range: date_range(&edu.start_date, &edu.end_date, false, labels),
                        bullets: bullet_lines(&edu.description),
                        meta: String::new(),
                    }
                })
                .collect(),
        ),
        "projects" if !resume.projects.is_empty() => Some(
            resume
                .projects
                .iter()
                .map(|proj| {
                    let meta = if proj.technologies.is_empty() {
                        String::new()
                    } else {
                        format!("{}: {}", labels.technologies, proj.technologies.join(", "))
                    };
                    RenderedEntry {
                        heading: Some(proj.name.clone()),
                        subheading: proj.role.clone(),
                        date_range: date_range(&proj.start_date, &proj.end_date, proj.current, labels),
                        bullets: bullet_lines(&proj.description),
                        meta,
                    }
                })
                .collect(),
        ),
        "skills" if !resume.skills.is_empty() => Some(
            resume
                .skills
                .iter()
                .map(|skill| RenderedEntry {
                    heading: (!skill.category.is_empty()).then(|| skill.category.clone()),
                    meta: skill.items.join(" • "),
                    ..Default::default()
                })
                .collect(),
        ),
        _ if section.is_custom => {
            let content = resume.custom_section(&section.id)?;
            if content.items.is_empty() {
                return None;
            }
            Some(content.items.iter().map(custom_entry).collect())
        }
        _ => None,
    }
}

fn custom_entry(item: &CustomSectionItem) -> RenderedEntry {
    RenderedEntry {
        heading: (!item.title.is_empty()).then(|| item.title.clone()),
        subheading: item.subtitle.clone(),
        date_range: item.date.clone(),
        bullets: bullet_lines(&item.description),
        meta: String::new(),
    }
}

/// Drops blank bullet lines (the editor keeps at least one empty row around;
/// it never renders).
fn bullet_lines(description: &[String]) -> Vec<String> {
    description
        .iter()
        .filter(|line| !line.trim().is_empty())
        .cloned()
        .collect()
}

fn push_detail(target: &mut String, separator: &str, detail: &str) {
    if !target.is_empty() {
        target.push_str(separator);
    }
    target.push_str(detail);
}
