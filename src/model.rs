//! Wire types for the Resume Document.
//!
//! The document is externally supplied and schema-less: every section is
//! optional, and missing fields deserialize to empty text instead of failing
//! the whole document. Rendering is attempted with whatever the source
//! returns; absent optional sections are hidden rather than rendered empty.

use serde::Deserialize;

/// The complete resume payload, fetched fresh on every page build.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    pub personal_info: Option<PersonalInfo>,
    pub skills: Option<Vec<Skill>>,
    pub education: Option<Vec<EducationEntry>>,
    pub experience: Option<Vec<ExperienceEntry>>,
    pub achievements: Option<Vec<Achievement>>,
    /// Canonical key is `interests`. The legacy feed shipped this list under
    /// `interests/` (trailing slash), so both spellings are accepted.
    #[serde(alias = "interests/")]
    pub interests: Option<Vec<String>>,
}

/// Header block: identity, bio and contact links.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub profile_picture: String,
    pub contact: Contact,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    pub email: String,
    pub linkedin: String,
    pub github: String,
}

/// One skill row; `value` (0-100) drives the progress-bar width.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub name: String,
    pub level: String,
    pub value: u8,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub status: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub start_year: String,
    pub end_year: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Achievement {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub link: String,
}
