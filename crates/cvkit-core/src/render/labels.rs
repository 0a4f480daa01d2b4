//! Caller-supplied display strings.
//!
//! Localization lives with the caller; the projection only needs the handful
//! of strings it substitutes into the rendered document. Defaults are
//! English.

/// Display strings used by the render projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderLabels {
    /// Title of the summary section.
    pub summary: String,
    /// Title of the experience section.
    pub experience: String,
    /// Title of the education section.
    pub education: String,
    /// Title of the projects section.
    pub projects: String,
    /// Title of the skills section.
    pub skills: String,
    /// Prefix for a project's technology list.
    pub technologies: String,
    /// Marker substituted for the end date of an ongoing entry.
    pub present: String,
}

impl Default for RenderLabels {
    fn default() -> Self {
        Self {
            summary: "Summary".to_string(),
            experience: "Experience".to_string(),
            education: "Education".to_string(),
            projects: "Projects".to_string(),
            skills: "Skills".to_string(),
            technologies: "Technologies".to_string(),
            present: "Present".to_string(),
        }
    }
}

impl RenderLabels {
    /// Returns the label for a built-in section id, or `None` for custom ids.
    pub fn builtin_section_title(&self, section_id: &str) -> Option<&str> {
        match section_id {
            "summary" => Some(&self.summary),
            "experience" => Some(&self.experience),
            "education" => Some(&self.education),
            "projects" => Some(&self.projects),
            "skills" => Some(&self.skills),
            _ => None,
        }
    }
}
