//! Versionless structural merge for stored documents.
//!
//! There is no schema version number anywhere: a stored document is merged
//! against the current default shape at field-group granularity, so a
//! document saved under an older schema gains newly introduced fields
//! without losing user data. The merge never hard-fails; anything
//! unusable resolves to the default.

use serde_json::{Map, Value};
use tracing::warn;

use cvkit_core::resume::ResumeData;

/// Merges a stored document value against the current default shape.
///
/// Granularity follows the document's field groups:
/// - `personalInfo` and `theme`: shallow per-field merge, stored wins.
/// - List collections (`experience`, `education`, `projects`, `skills`,
///   `customSections`): stored value wins wholesale if present.
/// - `sections`: every stored section is kept; a missing `title` falls back
///   to the empty string (localized titles are a presentation concern).
///
/// The merge is idempotent: feeding a current-schema document through it
/// reproduces that document.
pub fn merge_with_default(stored: &Value) -> ResumeData {
    let default = ResumeData::default();
    let Some(stored_obj) = stored.as_object() else {
        if !stored.is_null() {
            warn!("stored document is not an object; using default");
        }
        return default;
    };

    let mut merged = match serde_json::to_value(&default) {
        Ok(Value::Object(map)) => map,
        _ => return default,
    };

    merge_field_group(&mut merged, stored_obj, "personalInfo");
    merge_field_group(&mut merged, stored_obj, "theme");

    for key in ["experience", "education", "projects", "skills", "customSections"] {
        if let Some(value) = stored_obj.get(key) {
            merged.insert(key.to_string(), value.clone());
        }
    }

    if let Some(Value::Array(sections)) = stored_obj.get("sections") {
        let sections = sections
            .iter()
            .cloned()
            .map(|mut section| {
                if let Value::Object(obj) = &mut section {
                    obj.entry("title").or_insert_with(|| Value::String(String::new()));
                }
                section
            })
            .collect();
        merged.insert("sections".to_string(), Value::Array(sections));
    }

    match serde_json::from_value(Value::Object(merged)) {
        Ok(resume) => resume,
        Err(err) => {
            warn!(error = %err, "merged document failed to deserialize; using default");
            ResumeData::default()
        }
    }
}

/// Shallow per-field merge of one object-valued field group: stored keys win,
/// default keys fill the gaps.
fn merge_field_group(merged: &mut Map<String, Value>, stored: &Map<String, Value>, key: &str) {
    let Some(Value::Object(stored_group)) = stored.get(key) else {
        return;
    };
    if let Some(Value::Object(default_group)) = merged.get_mut(key) {
        for (field, value) in stored_group {
            default_group.insert(field.clone(), value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvkit_core::resume::{Experience, ThemeConfig};
    use serde_json::json;

    #[test]
    fn test_merge_is_idempotent_for_current_schema() {
        let mut resume = ResumeData::default();
        resume.personal_info.name = "Jane".to_string();
        resume.experience.push(Experience {
            company: "Acme".to_string(),
            ..Experience::new()
        });
        resume.theme.font_size = 12.5;

        let stored = serde_json::to_value(&resume).unwrap();
        assert_eq!(merge_with_default(&stored), resume);
    }

    #[test]
    fn test_missing_field_groups_fall_back_to_default() {
        let stored = json!({ "personalInfo": { "name": "Jane" } });
        let merged = merge_with_default(&stored);
        assert_eq!(merged.personal_info.name, "Jane");
        assert_eq!(merged.personal_info.email, "");
        assert_eq!(merged.theme, ThemeConfig::default());
        // no stored sections: the five built-ins come from the default
        assert_eq!(merged.sections.len(), 5);
    }

    #[test]
    fn test_theme_merges_per_field() {
        let stored = json!({ "theme": { "fontSize": 13.0 } });
        let merged = merge_with_default(&stored);
        assert_eq!(merged.theme.font_size, 13.0);
        assert_eq!(merged.theme.primary_color, "#3b82f6");
        assert!(merged.theme.enable_links);
    }

    #[test]
    fn test_stored_lists_win_wholesale() {
        // an explicitly empty stored list stays empty; no element-level merge
        let stored = json!({
            "experience": [{ "id": "e1", "company": "Acme" }],
            "skills": []
        });
        let merged = merge_with_default(&stored);
        assert_eq!(merged.experience.len(), 1);
        assert_eq!(merged.experience[0].company, "Acme");
        assert!(merged.skills.is_empty());
    }

    #[test]
    fn test_stored_sections_kept_with_title_fallback() {
        let stored = json!({
            "sections": [
                { "id": "experience", "visible": true, "order": 1 },
                { "id": "custom-1", "title": "Awards", "visible": true, "order": 2, "isCustom": true }
            ]
        });
        let merged = merge_with_default(&stored);
        assert_eq!(merged.sections.len(), 2);
        // no hardcoded localized title is synthesized here
        assert_eq!(merged.sections[0].title, "");
        assert_eq!(merged.sections[1].title, "Awards");
        assert!(merged.sections[1].is_custom);
    }

    #[test]
    fn test_non_object_input_resolves_to_default() {
        assert_eq!(merge_with_default(&Value::Null), ResumeData::default());
        assert_eq!(merge_with_default(&json!("garbage")), ResumeData::default());
        assert_eq!(merge_with_default(&json!([1, 2, 3])), ResumeData::default());
    }

    #[test]
    fn test_unknown_stored_fields_are_ignored() {
        let stored = json!({
            "personalInfo": { "name": "Jane", "pronouns": "they/them" },
            "somethingNew": { "a": 1 }
        });
        let merged = merge_with_default(&stored);
        assert_eq!(merged.personal_info.name, "Jane");
    }
}
