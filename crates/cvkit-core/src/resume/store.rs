//! The resume document store.
//!
//! `ResumeStore` holds the single document snapshot and exposes the named
//! mutation operations the editor, preview and exporters go through. Every
//! operation produces a new snapshot behind a fresh `Arc`, so observers can
//! use pointer equality to detect that *something* ran; whether content
//! changed is a structural comparison. Not-found conditions are silent
//! no-ops by contract, never errors.

use std::sync::Arc;

use tracing::debug;

use super::model::{
    ContactItem, CustomSection, CustomSectionItem, Education, Experience, Project, ResumeData,
    SectionConfig, Skill, generate_id,
};
use super::patch::{
    ContactPatch, CustomSectionItemPatch, EducationPatch, ExperiencePatch, IconConfigPatch,
    PersonalInfoPatch, ProjectPatch, SectionConfigPatch, SkillPatch, ThemePatch,
};

/// Holds the current [`ResumeData`] snapshot and applies mutations to it.
///
/// This is an explicit context object: construct one per session and pass it
/// to whatever drives it. There is no global instance.
#[derive(Debug)]
pub struct ResumeStore {
    snapshot: Arc<ResumeData>,
}

impl Default for ResumeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeStore {
    /// Creates a store holding the fixed default document.
    pub fn new() -> Self {
        Self {
            snapshot: Arc::new(ResumeData::default()),
        }
    }

    /// Creates a store holding an already-hydrated document.
    pub fn with_snapshot(resume: ResumeData) -> Self {
        Self {
            snapshot: Arc::new(resume),
        }
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> Arc<ResumeData> {
        Arc::clone(&self.snapshot)
    }

    /// Swaps in `next` as the new snapshot and returns it.
    fn commit(&mut self, next: ResumeData) -> Arc<ResumeData> {
        self.snapshot = Arc::new(next);
        Arc::clone(&self.snapshot)
    }

    /// Clones the current snapshot as the starting point of a mutation.
    fn working_copy(&self) -> ResumeData {
        (*self.snapshot).clone()
    }

    // ------------------------------------------------------------------
    // Personal info / theme / sections
    // ------------------------------------------------------------------

    /// Shallow-merges the given fields into the personal info block.
    pub fn update_personal_info(&mut self, patch: PersonalInfoPatch) -> Arc<ResumeData> {
        let mut next = self.working_copy();
        patch.apply(&mut next.personal_info);
        self.commit(next)
    }

    /// Shallow-merges the given icon choices into the icon config.
    pub fn update_icon_config(&mut self, patch: IconConfigPatch) -> Arc<ResumeData> {
        let mut next = self.working_copy();
        patch.apply(&mut next.personal_info.icon_config);
        self.commit(next)
    }

    /// Shallow-merges the given fields into the theme.
    pub fn update_theme(&mut self, patch: ThemePatch) -> Arc<ResumeData> {
        let mut next = self.working_copy();
        patch.apply(&mut next.theme);
        self.commit(next)
    }

    /// Updates a section descriptor by id. No-op if the id is unknown.
    pub fn update_section_config(&mut self, id: &str, patch: SectionConfigPatch) -> Arc<ResumeData> {
        let mut next = self.working_copy();
        if let Some(section) = next.sections.iter_mut().find(|s| s.id == id) {
            patch.apply(section);
        }
        self.commit(next)
    }

    /// Reorders the section registry.
    ///
    /// `ordered_ids` gives the desired sequence for the movable sections.
    /// The section named by `pinned` (the summary section in practice) keeps
    /// its current index regardless of where, or whether, it appears in
    /// `ordered_ids`. Unknown ids are ignored; known sections missing from
    /// the list keep their relative order after the listed ones. `order`
    /// fields are reassigned densely to 1..N.
    pub fn reorder_sections(&mut self, ordered_ids: &[String], pinned: Option<&str>) -> Arc<ResumeData> {
        let mut next = self.working_copy();

        let pinned_at = pinned.and_then(|id| next.sections.iter().position(|s| s.id == id));
        let mut movable: Vec<SectionConfig> = Vec::with_capacity(next.sections.len());
        let mut pinned_section = None;
        for (idx, section) in next.sections.drain(..).enumerate() {
            if Some(idx) == pinned_at {
                pinned_section = Some(section);
            } else {
                movable.push(section);
            }
        }

        // Listed sections first, in the given order; unlisted ones keep
        // their relative order behind them.
        let mut reordered: Vec<SectionConfig> = Vec::with_capacity(movable.len());
        for id in ordered_ids {
            if let Some(pos) = movable.iter().position(|s| &s.id == id) {
                reordered.push(movable.remove(pos));
            }
        }
        reordered.append(&mut movable);

        if let (Some(section), Some(idx)) = (pinned_section, pinned_at) {
            let idx = idx.min(reordered.len());
            reordered.insert(idx, section);
        }

        for (idx, section) in reordered.iter_mut().enumerate() {
            section.order = idx as u32 + 1;
        }
        next.sections = reordered;
        self.commit(next)
    }

    // ------------------------------------------------------------------
    // Entity collections
    // ------------------------------------------------------------------

    /// Appends an experience entry.
    pub fn add_experience(&mut self, entry: Experience) -> Arc<ResumeData> {
        let mut next = self.working_copy();
        next.experience.push(entry);
        self.commit(next)
    }

    /// Patches an experience entry by id. No-op if the id is unknown.
    pub fn update_experience(&mut self, id: &str, patch: ExperiencePatch) -> Arc<ResumeData> {
        let mut next = self.working_copy();
        if let Some(entry) = next.experience.iter_mut().find(|e| e.id == id) {
            patch.apply(entry);
        }
        self.commit(next)
    }

    /// Removes an experience entry by id. No-op if the id is unknown.
    pub fn delete_experience(&mut self, id: &str) -> Arc<ResumeData> {
        let mut next = self.working_copy();
        next.experience.retain(|e| e.id != id);
        self.commit(next)
    }

    /// Appends an education entry.
    pub fn add_education(&mut self, entry: Education) -> Arc<ResumeData> {
        let mut next = self.working_copy();
        next.education.push(entry);
        self.commit(next)
    }

    /// Patches an education entry by id. No-op if the id is unknown.
    pub fn update_education(&mut self, id: &str, patch: EducationPatch) -> Arc<ResumeData> {
        let mut next = self.working_copy();
        if let Some(entry) = next.education.iter_mut().find(|e| e.id == id) {
            patch.apply(entry);
        }
        self.commit(next)
    }

    /// Removes an education entry by id. No-op if the id is unknown.
    pub fn delete_education(&mut self, id: &str) -> Arc<ResumeData> {
        let mut next = self.working_copy();
        next.education.retain(|e| e.id != id);
        self.commit(next)
    }

    /// Appends a project entry.
    pub fn add_project(&mut self, entry: Project) -> Arc<ResumeData> {
        let mut next = self.working_copy();
        next.projects.push(entry);
        self.commit(next)
    }

    /// Patches a project entry by id. No-op if the id is unknown.
    pub fn update_project(&mut self, id: &str, patch: ProjectPatch) -> Arc<ResumeData> {
        let mut next = self.working_copy();
        if let Some(entry) = next.projects.iter_mut().find(|p| p.id == id) {
            patch.apply(entry);
        }
        self.commit(next)
    }

    /// Removes a project entry by id. No-op if the id is unknown.
    pub fn delete_project(&mut self, id: &str) -> Arc<ResumeData> {
        let mut next = self.working_copy();
        next.projects.retain(|p| p.id != id);
        self.commit(next)
    }

    /// Appends a skill group.
    pub fn add_skill(&mut self, entry: Skill) -> Arc<ResumeData> {
        let mut next = self.working_copy();
        next.skills.push(entry);
        self.commit(next)
    }

    /// Patches a skill group by id. No-op if the id is unknown.
    pub fn update_skill(&mut self, id: &str, patch: SkillPatch) -> Arc<ResumeData> {
        let mut next = self.working_copy();
        if let Some(entry) = next.skills.iter_mut().find(|s| s.id == id) {
            patch.apply(entry);
        }
        self.commit(next)
    }

    /// Removes a skill group by id. No-op if the id is unknown.
    pub fn delete_skill(&mut self, id: &str) -> Arc<ResumeData> {
        let mut next = self.working_copy();
        next.skills.retain(|s| s.id != id);
        self.commit(next)
    }

    // ------------------------------------------------------------------
    // Custom sections
    // ------------------------------------------------------------------

    /// Adds a user-defined section: a visible `SectionConfig` appended at
    /// the end of the registry plus an empty content entry under the same
    /// id. Returns the generated id so the caller can focus the new section.
    pub fn add_custom_section(&mut self, title: &str) -> (String, Arc<ResumeData>) {
        let mut next = self.working_copy();
        let id = generate_id();
        let order = next.sections.len() as u32 + 1;
        next.sections.push(SectionConfig {
            id: id.clone(),
            title: title.to_string(),
            visible: true,
            order,
            is_custom: true,
        });
        next.custom_sections.push(CustomSection {
            id: id.clone(),
            items: Vec::new(),
        });
        debug!(section_id = %id, "added custom section");
        (id, self.commit(next))
    }

    /// Removes a custom section's registry entry and its content together.
    /// No-op if the id is unknown.
    pub fn delete_custom_section(&mut self, id: &str) -> Arc<ResumeData> {
        let mut next = self.working_copy();
        next.sections.retain(|s| s.id != id);
        next.custom_sections.retain(|cs| cs.id != id);
        self.commit(next)
    }

    /// Appends an item to a custom section. No-op if the section is unknown.
    pub fn add_custom_section_item(
        &mut self,
        section_id: &str,
        item: CustomSectionItem,
    ) -> Arc<ResumeData> {
        let mut next = self.working_copy();
        if let Some(section) = next.custom_sections.iter_mut().find(|cs| cs.id == section_id) {
            section.items.push(item);
        }
        self.commit(next)
    }

    /// Patches an item in a custom section. No-op if section or item is unknown.
    pub fn update_custom_section_item(
        &mut self,
        section_id: &str,
        item_id: &str,
        patch: CustomSectionItemPatch,
    ) -> Arc<ResumeData> {
        let mut next = self.working_copy();
        if let Some(section) = next.custom_sections.iter_mut().find(|cs| cs.id == section_id) {
            if let Some(item) = section.items.iter_mut().find(|i| i.id == item_id) {
                patch.apply(item);
            }
        }
        self.commit(next)
    }

    /// Removes an item from a custom section. No-op if section or item is unknown.
    pub fn delete_custom_section_item(&mut self, section_id: &str, item_id: &str) -> Arc<ResumeData> {
        let mut next = self.working_copy();
        if let Some(section) = next.custom_sections.iter_mut().find(|cs| cs.id == section_id) {
            section.items.retain(|i| i.id != item_id);
        }
        self.commit(next)
    }

    // ------------------------------------------------------------------
    // Contacts
    // ------------------------------------------------------------------

    /// Appends a contact entry.
    pub fn add_contact(&mut self, contact: ContactItem) -> Arc<ResumeData> {
        let mut next = self.working_copy();
        next.personal_info.contacts.push(contact);
        self.commit(next)
    }

    /// Patches a contact entry by id. No-op if the id is unknown.
    pub fn update_contact(&mut self, id: &str, patch: ContactPatch) -> Arc<ResumeData> {
        let mut next = self.working_copy();
        if let Some(contact) = next.personal_info.contacts.iter_mut().find(|c| c.id == id) {
            patch.apply(contact);
        }
        self.commit(next)
    }

    /// Removes a contact entry by id. No-op if the id is unknown.
    pub fn delete_contact(&mut self, id: &str) -> Arc<ResumeData> {
        let mut next = self.working_copy();
        next.personal_info.contacts.retain(|c| c.id != id);
        self.commit(next)
    }

    /// Reorders contacts to match `ordered_ids`, then reassigns `order`
    /// densely to 1..N. Unlisted contacts keep their relative order behind
    /// the listed ones.
    pub fn reorder_contacts(&mut self, ordered_ids: &[String]) -> Arc<ResumeData> {
        let mut next = self.working_copy();
        let mut remaining = std::mem::take(&mut next.personal_info.contacts);
        let mut reordered: Vec<ContactItem> = Vec::with_capacity(remaining.len());
        for id in ordered_ids {
            if let Some(pos) = remaining.iter().position(|c| &c.id == id) {
                reordered.push(remaining.remove(pos));
            }
        }
        reordered.append(&mut remaining);
        for (idx, contact) in reordered.iter_mut().enumerate() {
            contact.order = idx as u32 + 1;
        }
        next.personal_info.contacts = reordered;
        self.commit(next)
    }

    // ------------------------------------------------------------------
    // Wholesale replacement
    // ------------------------------------------------------------------

    /// Replaces the entire document. The caller is responsible for the
    /// document being well-formed; no validation happens here.
    pub fn import_data(&mut self, resume: ResumeData) -> Arc<ResumeData> {
        debug!("importing document wholesale");
        self.commit(resume)
    }

    /// Replaces the document with the fixed default.
    pub fn reset(&mut self) -> Arc<ResumeData> {
        debug!("resetting document to default");
        self.commit(ResumeData::default())
    }
}
