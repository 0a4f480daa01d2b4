//! The resume document: models, partial updates and the store.

pub mod model;
pub mod patch;
pub mod store;

pub use model::{
    BUILTIN_SECTION_IDS, ContactIconConfig, ContactIconType, ContactItem, CustomSection,
    CustomSectionItem, Education, Experience, PersonalInfo, Project, ResumeData,
    SUMMARY_SECTION_ID, SectionConfig, Skill, ThemeConfig, generate_id,
};
pub use patch::{
    ContactPatch, CustomSectionItemPatch, EducationPatch, ExperiencePatch, IconConfigPatch,
    PersonalInfoPatch, ProjectPatch, SectionConfigPatch, SkillPatch, ThemePatch,
};
pub use store::ResumeStore;
