//! The resume use-case service.
//!
//! `ResumeService` owns the in-memory store and the repository, and is the
//! one place the two meet: every mutation goes through the store for the
//! new snapshot and through the repository to make it durable before the
//! snapshot is handed back to the caller.

use std::sync::Arc;

use tracing::{info, warn};

use cvkit_core::render::{self, RenderLabels, RenderedResume};
use cvkit_core::resume::{
    ContactItem, ContactPatch, CustomSectionItem, CustomSectionItemPatch, Education,
    EducationPatch, Experience, ExperiencePatch, IconConfigPatch, PersonalInfoPatch, Project,
    ProjectPatch, ResumeData, ResumeStore, SectionConfigPatch, Skill, SkillPatch, ThemePatch,
};
use cvkit_core::{CvError, Result};
use cvkit_infrastructure::codec::{self, DataFormat};
use cvkit_infrastructure::repository::ResumeRepository;
use cvkit_infrastructure::state_store::StateStore;

use crate::export::{ExportFormat, ExportPayload, ImageRenderer, PdfRenderer};

/// Application service for the resume document.
pub struct ResumeService {
    store: ResumeStore,
    repository: ResumeRepository,
    labels: RenderLabels,
}

impl ResumeService {
    /// Loads the persisted document from the given state store and builds a
    /// service around it. A missing or unusable stored document starts the
    /// service from the default document; startup never fails.
    pub async fn hydrate(state_store: Arc<dyn StateStore>) -> Self {
        let repository = ResumeRepository::new(state_store);
        let resume = repository.hydrate().await;
        Self {
            store: ResumeStore::with_snapshot(resume),
            repository,
            labels: RenderLabels::default(),
        }
    }

    /// The current document snapshot.
    pub fn snapshot(&self) -> Arc<ResumeData> {
        self.store.snapshot()
    }

    /// The current document projected for display.
    pub fn rendered(&self) -> RenderedResume {
        render::project(&self.store.snapshot(), &self.labels)
    }

    async fn persist(&self, snapshot: Arc<ResumeData>) -> Result<Arc<ResumeData>> {
        self.repository.persist(&snapshot).await?;
        Ok(snapshot)
    }

    // --- personal info, theme and layout ---

    pub async fn update_personal_info(&mut self, patch: PersonalInfoPatch) -> Result<Arc<ResumeData>> {
        let snapshot = self.store.update_personal_info(patch);
        self.persist(snapshot).await
    }

    pub async fn update_icon_config(&mut self, patch: IconConfigPatch) -> Result<Arc<ResumeData>> {
        let snapshot = self.store.update_icon_config(patch);
        self.persist(snapshot).await
    }

    pub async fn update_theme(&mut self, patch: ThemePatch) -> Result<Arc<ResumeData>> {
        let snapshot = self.store.update_theme(patch);
        self.persist(snapshot).await
    }

    pub async fn update_section_config(
        &mut self,
        id: &str,
        patch: SectionConfigPatch,
    ) -> Result<Arc<ResumeData>> {
        let snapshot = self.store.update_section_config(id, patch);
        self.persist(snapshot).await
    }

    /// Reorders sections. Listed ids come first in the given order, unlisted
    /// ones keep their relative order, and `pinned` (if any) keeps its
    /// current position regardless of the requested order.
    pub async fn reorder_sections(
        &mut self,
        ordered_ids: &[String],
        pinned: Option<&str>,
    ) -> Result<Arc<ResumeData>> {
        let snapshot = self.store.reorder_sections(ordered_ids, pinned);
        self.persist(snapshot).await
    }

    // --- list entries ---

    pub async fn add_experience(&mut self, entry: Experience) -> Result<Arc<ResumeData>> {
        let snapshot = self.store.add_experience(entry);
        self.persist(snapshot).await
    }

    pub async fn update_experience(
        &mut self,
        id: &str,
        patch: ExperiencePatch,
    ) -> Result<Arc<ResumeData>> {
        let snapshot = self.store.update_experience(id, patch);
        self.persist(snapshot).await
    }

    pub async fn delete_experience(&mut self, id: &str) -> Result<Arc<ResumeData>> {
        let snapshot = self.store.delete_experience(id);
        self.persist(snapshot).await
    }

    pub async fn add_education(&mut self, entry: Education) -> Result<Arc<ResumeData>> {
        let snapshot = self.store.add_education(entry);
        self.persist(snapshot).await
    }

    pub async fn update_education(
        &mut self,
        id: &str,
        patch: EducationPatch,
    ) -> Result<Arc<ResumeData>> {
        let snapshot = self.store.update_education(id, patch);
        self.persist(snapshot).await
    }

    pub async fn delete_education(&mut self, id: &str) -> Result<Arc<ResumeData>> {
        let snapshot = self.store.delete_education(id);
        self.persist(snapshot).await
    }

    pub async fn add_project(&mut self, entry: Project) -> Result<Arc<ResumeData>> {
        let snapshot = self.store.add_project(entry);
        self.persist(snapshot).await
    }

    pub async fn update_project(&mut self, id: &str, patch: ProjectPatch) -> Result<Arc<ResumeData>> {
        let snapshot = self.store.update_project(id, patch);
        self.persist(snapshot).await
    }

    pub async fn delete_project(&mut self, id: &str) -> Result<Arc<ResumeData>> {
        let snapshot = self.store.delete_project(id);
        self.persist(snapshot).await
    }

    pub async fn add_skill(&mut self, entry: Skill) -> Result<Arc<ResumeData>> {
        let snapshot = self.store.add_skill(entry);
        self.persist(snapshot).await
    }

    pub async fn update_skill(&mut self, id: &str, patch: SkillPatch) -> Result<Arc<ResumeData>> {
        let snapshot = self.store.update_skill(id, patch);
        self.persist(snapshot).await
    }

    pub async fn delete_skill(&mut self, id: &str) -> Result<Arc<ResumeData>> {
        let snapshot = self.store.delete_skill(id);
        self.persist(snapshot).await
    }

    // --- custom sections ---

    /// Adds a custom section and returns its generated id with the snapshot.
    pub async fn add_custom_section(&mut self, title: &str) -> Result<(String, Arc<ResumeData>)> {
        let (id, snapshot) = self.store.add_custom_section(title);
        let snapshot = self.persist(snapshot).await?;
        Ok((id, snapshot))
    }

    pub async fn delete_custom_section(&mut self, id: &str) -> Result<Arc<ResumeData>> {
        let snapshot = self.store.delete_custom_section(id);
        self.persist(snapshot).await
    }

    pub async fn add_custom_section_item(
        &mut self,
        section_id: &str,
        item: CustomSectionItem,
    ) -> Result<Arc<ResumeData>> {
        let snapshot = self.store.add_custom_section_item(section_id, item);
        self.persist(snapshot).await
    }

    pub async fn update_custom_section_item(
        &mut self,
        section_id: &str,
        item_id: &str,
        patch: CustomSectionItemPatch,
    ) -> Result<Arc<ResumeData>> {
        let snapshot = self.store.update_custom_section_item(section_id, item_id, patch);
        self.persist(snapshot).await
    }

    pub async fn delete_custom_section_item(
        &mut self,
        section_id: &str,
        item_id: &str,
    ) -> Result<Arc<ResumeData>> {
        let snapshot = self.store.delete_custom_section_item(section_id, item_id);
        self.persist(snapshot).await
    }

    // --- contacts ---

    pub async fn add_contact(&mut self, contact: ContactItem) -> Result<Arc<ResumeData>> {
        let snapshot = self.store.add_contact(contact);
        self.persist(snapshot).await
    }

    pub async fn update_contact(&mut self, id: &str, patch: ContactPatch) -> Result<Arc<ResumeData>> {
        let snapshot = self.store.update_contact(id, patch);
        self.persist(snapshot).await
    }

    pub async fn delete_contact(&mut self, id: &str) -> Result<Arc<ResumeData>> {
        let snapshot = self.store.delete_contact(id);
        self.persist(snapshot).await
    }

    pub async fn reorder_contacts(&mut self, ordered_ids: &[String]) -> Result<Arc<ResumeData>> {
        let snapshot = self.store.reorder_contacts(ordered_ids);
        self.persist(snapshot).await
    }

    // --- import, export and reset ---

    /// Imports a document from a file's name and contents. The format is
    /// sniffed from the extension, the content parsed and merged, and only
    /// then does the result replace the current document; a failure at any
    /// step leaves the current document untouched.
    pub async fn import_file(&mut self, file_name: &str, content: &str) -> Result<Arc<ResumeData>> {
        let format = DataFormat::from_file_name(file_name)?;
        let resume = codec::parse(format, content).map_err(|err| {
            warn!(file_name, error = %err, "import rejected");
            err
        })?;
        info!(file_name, "imported document");
        let snapshot = self.store.import_data(resume);
        self.persist(snapshot).await
    }

    /// Replaces the document with the default one.
    pub async fn reset(&mut self) -> Result<Arc<ResumeData>> {
        let snapshot = self.store.reset();
        self.persist(snapshot).await
    }

    /// Exports the current document as pretty-printed JSON.
    pub fn export_json(&self) -> Result<ExportPayload> {
        let json = codec::to_json(&self.store.snapshot())?;
        Ok(ExportPayload::new(ExportFormat::Json, json.into_bytes()))
    }

    /// Exports the current document as YAML.
    pub fn export_yaml(&self) -> Result<ExportPayload> {
        let yaml = codec::to_yaml(&self.store.snapshot())?;
        Ok(ExportPayload::new(ExportFormat::Yaml, yaml.into_bytes()))
    }

    /// Exports the current document as PDF through the given renderer. A
    /// renderer failure surfaces as an export error with no partial output.
    pub async fn export_pdf(&self, renderer: &dyn PdfRenderer) -> Result<ExportPayload> {
        let bytes = renderer
            .render_pdf(&self.store.snapshot(), &self.labels)
            .await
            .map_err(|e| CvError::export(e.to_string()))?;
        Ok(ExportPayload::new(ExportFormat::Pdf, bytes))
    }

    /// Exports the preview projection as PNG through the given renderer.
    pub async fn export_png(&self, renderer: &dyn ImageRenderer) -> Result<ExportPayload> {
        let bytes = renderer
            .render_png(&self.rendered())
            .await
            .map_err(|e| CvError::export(e.to_string()))?;
        Ok(ExportPayload::new(ExportFormat::Png, bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cvkit_infrastructure::state_store::MemoryStateStore;

    use crate::export::RenderError;

    async fn service() -> ResumeService {
        ResumeService::hydrate(Arc::new(MemoryStateStore::new())).await
    }

    #[tokio::test]
    async fn test_hydrate_on_empty_store_starts_from_default() {
        let svc = service().await;
        assert_eq!(*svc.snapshot(), ResumeData::default());
    }

    #[tokio::test]
    async fn test_mutations_survive_a_restart() {
        let state_store = Arc::new(MemoryStateStore::new());

        let mut svc = ResumeService::hydrate(state_store.clone()).await;
        svc.update_personal_info(PersonalInfoPatch {
            name: Some("Jane Doe".to_string()),
            ..PersonalInfoPatch::default()
        })
        .await
        .unwrap();
        svc.add_experience(Experience {
            company: "Acme".to_string(),
            ..Experience::new()
        })
        .await
        .unwrap();

        let restarted = ResumeService::hydrate(state_store).await;
        let snapshot = restarted.snapshot();
        assert_eq!(snapshot.personal_info.name, "Jane Doe");
        assert_eq!(snapshot.experience.len(), 1);
    }

    #[tokio::test]
    async fn test_import_replaces_document_wholesale() {
        let mut svc = service().await;
        svc.add_skill(Skill {
            category: "Languages".to_string(),
            ..Skill::new()
        })
        .await
        .unwrap();

        let snapshot = svc
            .import_file("resume.json", r#"{ "personalInfo": { "name": "Imported" } }"#)
            .await
            .unwrap();
        assert_eq!(snapshot.personal_info.name, "Imported");
        // the imported document had no skills, so none survive
        assert!(snapshot.skills.is_empty());
    }

    #[tokio::test]
    async fn test_import_of_unsupported_extension_leaves_document_intact() {
        let mut svc = service().await;
        svc.update_personal_info(PersonalInfoPatch {
            name: Some("Jane".to_string()),
            ..PersonalInfoPatch::default()
        })
        .await
        .unwrap();

        let err = svc.import_file("resume.pdf", "%PDF-1.7").await.unwrap_err();
        assert!(err.is_unsupported_format());
        assert_eq!(svc.snapshot().personal_info.name, "Jane");
    }

    #[tokio::test]
    async fn test_import_of_malformed_content_leaves_document_intact() {
        let mut svc = service().await;
        svc.update_personal_info(PersonalInfoPatch {
            name: Some("Jane".to_string()),
            ..PersonalInfoPatch::default()
        })
        .await
        .unwrap();

        let err = svc.import_file("resume.json", "{ not json").await.unwrap_err();
        assert!(err.is_serialization());
        assert_eq!(svc.snapshot().personal_info.name, "Jane");
    }

    #[tokio::test]
    async fn test_import_yaml_round_trips_through_export() {
        let mut svc = service().await;
        svc.update_personal_info(PersonalInfoPatch {
            name: Some("Jane".to_string()),
            ..PersonalInfoPatch::default()
        })
        .await
        .unwrap();

        let payload = svc.export_yaml().unwrap();
        let yaml = String::from_utf8(payload.bytes).unwrap();

        let mut other = service().await;
        let snapshot = other.import_file("resume.yaml", &yaml).await.unwrap();
        assert_eq!(*snapshot, *svc.snapshot());
    }

    #[tokio::test]
    async fn test_reset_returns_to_default_and_persists() {
        let state_store = Arc::new(MemoryStateStore::new());
        let mut svc = ResumeService::hydrate(state_store.clone()).await;
        svc.add_custom_section("Awards").await.unwrap();
        svc.reset().await.unwrap();

        assert_eq!(*svc.snapshot(), ResumeData::default());
        let restarted = ResumeService::hydrate(state_store).await;
        assert_eq!(*restarted.snapshot(), ResumeData::default());
    }

    #[tokio::test]
    async fn test_export_json_payload() {
        let svc = service().await;
        let payload = svc.export_json().unwrap();
        assert_eq!(payload.file_name, "resume.json");
        let value: serde_json::Value = serde_json::from_slice(&payload.bytes).unwrap();
        assert!(value.get("personalInfo").is_some());
    }

    struct FailingPdfRenderer;

    #[async_trait]
    impl PdfRenderer for FailingPdfRenderer {
        async fn render_pdf(
            &self,
            _resume: &ResumeData,
            _labels: &RenderLabels,
        ) -> std::result::Result<Vec<u8>, RenderError> {
            Err("font not found".into())
        }
    }

    #[tokio::test]
    async fn test_pdf_renderer_failure_is_an_export_error() {
        let svc = service().await;
        let err = svc.export_pdf(&FailingPdfRenderer).await.unwrap_err();
        assert!(err.is_export());
    }

    struct StubImageRenderer;

    #[async_trait]
    impl ImageRenderer for StubImageRenderer {
        async fn render_png(
            &self,
            rendered: &RenderedResume,
        ) -> std::result::Result<Vec<u8>, RenderError> {
            Ok(rendered.header.name.as_bytes().to_vec())
        }
    }

    #[tokio::test]
    async fn test_png_export_sees_the_preview_projection() {
        let mut svc = service().await;
        svc.update_personal_info(PersonalInfoPatch {
            name: Some("Jane Doe".to_string()),
            ..PersonalInfoPatch::default()
        })
        .await
        .unwrap();

        let payload = svc.export_png(&StubImageRenderer).await.unwrap();
        assert_eq!(payload.file_name, "resume.png");
        assert_eq!(payload.bytes, b"Jane Doe");
    }
}
