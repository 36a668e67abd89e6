//! Section renderers: pure functions from a slice of the Resume Document to
//! markup for one container.
//!
//! Renderers perform presence checks only, no validation. Every renderer is
//! idempotent; re-invoking with the same input yields the same markup.
//! Optional sections (achievements, interests) return `None` for an empty or
//! absent slice so the shell can hide the enclosing region instead of showing
//! an empty list.

use crate::model::{
    Achievement, EducationEntry, ExperienceEntry, PersonalInfo, ResumeDocument, Skill,
};

/// Shown in place of a missing profile picture URL.
pub const PLACEHOLDER_PICTURE: &str = "https://placehold.co/150x150/cccccc/ffffff?text=Error";

/// Markup for every section of the document, ready to splice into the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSections {
    pub personal_info: String,
    pub skills: String,
    pub education: String,
    pub experience: String,
    /// `None` hides the achievements region entirely.
    pub achievements: Option<String>,
    /// `None` hides the interests region entirely.
    pub interests: Option<String>,
}

/// Escape text for interpolation into element content.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text for interpolation into a double-quoted attribute value.
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Header block: picture, name, title, bio and contact links.
pub fn personal_info(info: &PersonalInfo) -> String {
    let picture = if info.profile_picture.is_empty() {
        PLACEHOLDER_PICTURE
    } else {
        &info.profile_picture
    };
    format!(
        concat!(
            "<img src=\"{picture}\" alt=\"Profile picture of {name_attr}\">",
            "<h1>{name}</h1>",
            "<p class=\"title\">{title}</p>",
            "<p class=\"bio\">{bio}</p>",
            "<div class=\"contact-links\">",
            "<a href=\"mailto:{email}\" target=\"_blank\">Email</a> | ",
            "<a href=\"{linkedin}\" target=\"_blank\">LinkedIn</a> | ",
            "<a href=\"{github}\" target=\"_blank\">GitHub</a>",
            "</div>"
        ),
        picture = escape_attr(picture),
        name_attr = escape_attr(&info.name),
        name = escape_text(&info.name),
        title = escape_text(&info.title),
        bio = escape_text(&info.bio),
        email = escape_attr(&info.contact.email),
        linkedin = escape_attr(&info.contact.linkedin),
        github = escape_attr(&info.contact.github),
    )
}

/// One row per skill, in input order, with a progress bar sized by `value`.
pub fn skills(skills: &[Skill]) -> String {
    skills
        .iter()
        .map(|skill| {
            format!(
                concat!(
                    "<div class=\"skill\">",
                    "<div class=\"skill-info\">",
                    "<span>{name} ({level})</span>",
                    "<span>{value}%</span>",
                    "</div>",
                    "<div class=\"progress-bar\">",
                    "<div class=\"progress\" style=\"width: {value}%;\"></div>",
                    "</div>",
                    "</div>"
                ),
                name = escape_text(&skill.name),
                level = escape_text(&skill.level),
                value = skill.value,
            )
        })
        .collect()
}

/// One entry block per education item, in input order.
pub fn education(entries: &[EducationEntry]) -> String {
    entries
        .iter()
        .map(|edu| {
            format!(
                concat!(
                    "<div class=\"entry\">",
                    "<h3>{degree}</h3>",
                    "<p><strong>{institution}</strong></p>",
                    "<p class=\"period\">{status}</p>",
                    "<p>{description}</p>",
                    "</div>"
                ),
                degree = escape_text(&edu.degree),
                institution = escape_text(&edu.institution),
                status = escape_text(&edu.status),
                description = escape_text(&edu.description),
            )
        })
        .collect()
}

/// One entry block per experience item, in input order.
pub fn experience(entries: &[ExperienceEntry]) -> String {
    entries
        .iter()
        .map(|exp| {
            format!(
                concat!(
                    "<div class=\"entry\">",
                    "<h3>{role}</h3>",
                    "<p><strong>{company}</strong></p>",
                    "<p class=\"period\">{start} - {end}</p>",
                    "<p>{description}</p>",
                    "</div>"
                ),
                role = escape_text(&exp.role),
                company = escape_text(&exp.company),
                start = escape_text(&exp.start_year),
                end = escape_text(&exp.end_year),
                description = escape_text(&exp.description),
            )
        })
        .collect()
}

/// One list item per achievement; `None` when the slice is empty.
pub fn achievements(items: &[Achievement]) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    Some(
        items
            .iter()
            .map(|ach| {
                format!(
                    "<li><a href=\"{link}\" target=\"_blank\">{title}</a> - {issuer} ({date})</li>",
                    link = escape_attr(&ach.link),
                    title = escape_text(&ach.title),
                    issuer = escape_text(&ach.issuer),
                    date = escape_text(&ach.date),
                )
            })
            .collect(),
    )
}

/// One list item per interest; `None` when the slice is empty.
pub fn interests(items: &[String]) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    Some(
        items
            .iter()
            .map(|interest| format!("<li>{}</li>", escape_text(interest)))
            .collect(),
    )
}

/// Render every section of the document.
///
/// A missing required section renders as empty markup for that block (the
/// container simply stays blank); missing optional sections come back `None`.
pub fn sections(doc: &ResumeDocument) -> RenderedSections {
    RenderedSections {
        personal_info: doc
            .personal_info
            .as_ref()
            .map(personal_info)
            .unwrap_or_default(),
        skills: doc.skills.as_deref().map(skills).unwrap_or_default(),
        education: doc.education.as_deref().map(education).unwrap_or_default(),
        experience: doc
            .experience
            .as_deref()
            .map(experience)
            .unwrap_or_default(),
        achievements: doc.achievements.as_deref().and_then(achievements),
        interests: doc.interests.as_deref().and_then(interests),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Contact;

    fn sample_doc() -> ResumeDocument {
        serde_json::from_str(
            r#"{
                "personalInfo": {"name": "Jane", "title": "Engineer", "bio": "Hi",
                                 "profilePicture": "p.png",
                                 "contact": {"email": "j@e.com", "linkedin": "l", "github": "g"}},
                "skills": [{"name": "Rust", "level": "Advanced", "value": 90},
                           {"name": "SQL", "level": "Basic", "value": 40}],
                "education": [{"degree": "BSc", "institution": "U", "status": "2020", "description": "CS"}],
                "experience": [{"role": "Dev", "company": "Acme", "startYear": "2020", "endYear": "2024", "description": "Work"}],
                "achievements": [{"title": "Award", "issuer": "Org", "date": "2023", "link": "x"}],
                "interests": ["Reading", "Chess"]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn rendering_is_idempotent() {
        let doc = sample_doc();
        assert_eq!(sections(&doc), sections(&doc));
    }

    #[test]
    fn skills_render_in_input_order_with_progress_width() {
        let doc = sample_doc();
        let html = skills(doc.skills.as_deref().unwrap());
        let rust = html.find("Rust").unwrap();
        let sql = html.find("SQL").unwrap();
        assert!(rust < sql);
        assert!(html.contains("width: 90%"));
        assert!(html.contains("width: 40%"));
    }

    #[test]
    fn empty_optional_sections_are_none() {
        assert_eq!(achievements(&[]), None);
        assert_eq!(interests(&[]), None);
        let doc = ResumeDocument::default();
        let rendered = sections(&doc);
        assert!(rendered.achievements.is_none());
        assert!(rendered.interests.is_none());
        assert_eq!(rendered.personal_info, "");
        assert_eq!(rendered.skills, "");
    }

    #[test]
    fn achievements_render_one_item_per_entry() {
        let doc = sample_doc();
        let html = achievements(doc.achievements.as_deref().unwrap()).unwrap();
        assert_eq!(html.matches("<li>").count(), 1);
        assert!(html.contains("Award"));
        assert!(html.contains("Org"));
    }

    #[test]
    fn missing_picture_uses_placeholder() {
        let info = PersonalInfo {
            name: "A".into(),
            contact: Contact::default(),
            ..Default::default()
        };
        assert!(personal_info(&info).contains(PLACEHOLDER_PICTURE));
    }

    #[test]
    fn data_is_escaped() {
        let html = interests(&["<script>".to_string()]).unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
