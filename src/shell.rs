//! The pre-existing HTML shell, treated as an external collaborator.
//!
//! `PageShell` parses a shell document, verifies that every named container
//! the page depends on is present, and splices rendered section markup and
//! region visibility back into the document text. Applying a view never
//! mutates the shell itself, so `apply` is idempotent: the same view always
//! produces the same output.

use scraper::{Html, Selector};

use crate::error::{Error, Result};
use crate::render::RenderedSections;
use crate::theme::Theme;

/// Loading indicator region.
pub const LOADER: &str = "loader";
/// Static error panel, shown when both data sources fail.
pub const ERROR_PANEL: &str = "error-message";
/// Top-level resume region, shown on successful render.
pub const RESUME: &str = "resume-container";
pub const PERSONAL_INFO: &str = "personal-info";
pub const SKILLS: &str = "skills-container";
pub const EDUCATION: &str = "education-container";
pub const EXPERIENCE: &str = "experience-container";
pub const ACHIEVEMENTS: &str = "achievements-container";
pub const INTERESTS: &str = "interests-container";
/// Enclosing region of the achievements list, hidden when the list is empty.
pub const ACHIEVEMENTS_SECTION: &str = "achievements-section";
/// Enclosing region of the interests list, hidden when the list is empty.
pub const INTERESTS_SECTION: &str = "interests-section";
pub const THEME_TOGGLE: &str = "theme-switcher";
/// Full-viewport drawing surface for the background animation.
pub const CANVAS: &str = "matrix-bg";

/// Marker class carried by content cards before they scroll into view.
pub const HIDDEN_CLASS: &str = "hidden";

const REQUIRED_IDS: &[&str] = &[
    LOADER,
    ERROR_PANEL,
    RESUME,
    PERSONAL_INFO,
    SKILLS,
    EDUCATION,
    EXPERIENCE,
    ACHIEVEMENTS,
    INTERESTS,
    ACHIEVEMENTS_SECTION,
    INTERESTS_SECTION,
    THEME_TOGGLE,
    CANVAS,
];

/// Which of the three top-level regions is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    /// Loading indicator shown, everything else hidden.
    Loading,
    /// Resume container shown with rendered sections.
    Rendered,
    /// Static error panel shown. Terminal; no retry.
    Failed,
}

/// Everything `apply` needs to produce the final page.
#[derive(Debug, Clone)]
pub struct PageView<'a> {
    pub state: PageState,
    /// Required when `state` is `Rendered`; ignored otherwise.
    pub sections: Option<&'a RenderedSections>,
    pub theme: Theme,
}

/// A validated HTML shell.
pub struct PageShell {
    html: String,
}

impl PageShell {
    /// Parse and validate a shell document. Every container the page writes
    /// to must be present; a missing id is a `ShellError`.
    pub fn parse(html: &str) -> Result<Self> {
        let doc = Html::parse_document(html);
        for id in REQUIRED_IDS {
            let sel = id_selector(id)?;
            if doc.select(&sel).next().is_none() {
                return Err(Error::ShellError(format!(
                    "required container '#{}' not found",
                    id
                )));
            }
        }
        Ok(Self {
            html: html.to_string(),
        })
    }

    /// The shell bundled with the crate.
    pub fn builtin() -> Result<Self> {
        Self::parse(include_str!("../assets/shell.html"))
    }

    /// Ids of elements carrying the `hidden` marker class, in document order.
    /// These are the cards the Reveal Observer registers after the first
    /// successful render.
    pub fn hidden_card_ids(&self) -> Vec<String> {
        let doc = Html::parse_document(&self.html);
        let sel = match Selector::parse(&format!(".{}", HIDDEN_CLASS)) {
            Ok(sel) => sel,
            Err(_) => return Vec::new(),
        };
        doc.select(&sel)
            .filter_map(|el| el.value().attr("id").map(|id| id.to_string()))
            .collect()
    }

    /// Splice a view into the shell and return the final page document.
    pub fn apply(&self, view: &PageView<'_>) -> Result<String> {
        let doc = Html::parse_document(&self.html);
        let mut out = doc.root_element().html();

        // Theme: body marker class and toggle glyph.
        set_body_class(&mut out, &doc, view.theme == Theme::Dark)?;
        splice(
            &mut out,
            &doc,
            THEME_TOGGLE,
            Some(view.theme.toggle_glyph()),
            None,
        )?;

        match view.state {
            PageState::Loading => {
                splice(&mut out, &doc, LOADER, None, Some("block"))?;
                splice(&mut out, &doc, ERROR_PANEL, None, Some("none"))?;
                splice(&mut out, &doc, RESUME, None, Some("none"))?;
            }
            PageState::Failed => {
                splice(&mut out, &doc, LOADER, None, Some("none"))?;
                splice(&mut out, &doc, ERROR_PANEL, None, Some("flex"))?;
                splice(&mut out, &doc, RESUME, None, Some("none"))?;
            }
            PageState::Rendered => {
                let sections = view.sections.ok_or_else(|| {
                    Error::ShellError("rendered view without sections".to_string())
                })?;
                splice(&mut out, &doc, PERSONAL_INFO, Some(&sections.personal_info), None)?;
                splice(&mut out, &doc, SKILLS, Some(&sections.skills), None)?;
                splice(&mut out, &doc, EDUCATION, Some(&sections.education), None)?;
                splice(&mut out, &doc, EXPERIENCE, Some(&sections.experience), None)?;
                match &sections.achievements {
                    Some(content) => splice(&mut out, &doc, ACHIEVEMENTS, Some(content), None)?,
                    None => splice(&mut out, &doc, ACHIEVEMENTS_SECTION, None, Some("none"))?,
                }
                match &sections.interests {
                    Some(content) => splice(&mut out, &doc, INTERESTS, Some(content), None)?,
                    None => splice(&mut out, &doc, INTERESTS_SECTION, None, Some("none"))?,
                }
                splice(&mut out, &doc, LOADER, None, Some("none"))?;
                splice(&mut out, &doc, ERROR_PANEL, None, Some("none"))?;
                splice(&mut out, &doc, RESUME, None, Some("block"))?;
            }
        }

        Ok(format!("<!DOCTYPE html>\n{}", out))
    }
}

fn id_selector(id: &str) -> Result<Selector> {
    Selector::parse(&format!("#{}", id))
        .map_err(|_| Error::ShellError(format!("invalid container id '{}'", id)))
}

/// Serialized pieces of one region of the document.
struct Region {
    outer: String,
    open: String,
    tag: String,
}

fn region(doc: &Html, id: &str) -> Result<Region> {
    let sel = id_selector(id)?;
    let el = doc
        .select(&sel)
        .next()
        .ok_or_else(|| Error::ShellError(format!("required container '#{}' not found", id)))?;
    let outer = el.html();
    let gt = outer
        .find('>')
        .ok_or_else(|| Error::ShellError(format!("malformed region '#{}'", id)))?;
    Ok(Region {
        open: outer[..=gt].to_string(),
        tag: el.value().name().to_string(),
        outer,
    })
}

/// Replace a region's inner markup and/or its `display` style in `out`.
///
/// `out` must be the serialized form of `doc` with no prior edits inside this
/// region's subtree. Regions are identified by unique ids, so a single
/// replacement is unambiguous.
fn splice(
    out: &mut String,
    doc: &Html,
    id: &str,
    inner: Option<&str>,
    display: Option<&str>,
) -> Result<()> {
    let region = region(doc, id)?;
    let new_open = match display {
        Some(value) => set_display(&region.open, value),
        None => region.open.clone(),
    };
    match inner {
        Some(content) => {
            let replacement = format!("{}{}</{}>", new_open, content, region.tag);
            replace_once(out, &region.outer, &replacement, id)
        }
        None if new_open != region.open => replace_once(out, &region.open, &new_open, id),
        None => Ok(()),
    }
}

fn replace_once(out: &mut String, old: &str, new: &str, what: &str) -> Result<()> {
    match out.find(old) {
        Some(pos) => {
            out.replace_range(pos..pos + old.len(), new);
            Ok(())
        }
        None => Err(Error::ShellError(format!(
            "could not update region '#{}'",
            what
        ))),
    }
}

/// Rewrite the `display` declaration inside an opening tag.
fn set_display(open: &str, value: &str) -> String {
    let style = format!("display:{}", value);
    if let Some(start) = open.find("style=\"") {
        let vstart = start + "style=\"".len();
        if let Some(rel_end) = open[vstart..].find('"') {
            let mut s = String::with_capacity(open.len());
            s.push_str(&open[..vstart]);
            s.push_str(&style);
            s.push_str(&open[vstart + rel_end..]);
            return s;
        }
    }
    let mut s = open[..open.len() - 1].to_string();
    s.push_str(" style=\"");
    s.push_str(&style);
    s.push_str("\">");
    s
}

/// Add or remove the `dark-theme` marker class on `<body>`.
fn set_body_class(out: &mut String, doc: &Html, dark: bool) -> Result<()> {
    let sel = Selector::parse("body")
        .map_err(|_| Error::ShellError("invalid body selector".to_string()))?;
    let el = doc
        .select(&sel)
        .next()
        .ok_or_else(|| Error::ShellError("shell has no <body>".to_string()))?;
    let outer = el.html();
    let gt = outer
        .find('>')
        .ok_or_else(|| Error::ShellError("malformed <body> tag".to_string()))?;
    let open = &outer[..=gt];

    let new_open = if let Some(start) = open.find("class=\"") {
        let vstart = start + "class=\"".len();
        let rel_end = open[vstart..]
            .find('"')
            .ok_or_else(|| Error::ShellError("malformed <body> class".to_string()))?;
        let current = &open[vstart..vstart + rel_end];
        let mut tokens: Vec<&str> = current
            .split_whitespace()
            .filter(|t| *t != "dark-theme")
            .collect();
        if dark {
            tokens.push("dark-theme");
        }
        let mut s = String::with_capacity(open.len());
        s.push_str(&open[..vstart]);
        s.push_str(&tokens.join(" "));
        s.push_str(&open[vstart + rel_end..]);
        s
    } else if dark {
        let mut s = open[..open.len() - 1].to_string();
        s.push_str(" class=\"dark-theme\">");
        s
    } else {
        return Ok(());
    };

    if new_open != open {
        replace_once(out, open, &new_open, "body")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render;
    use crate::model::ResumeDocument;

    fn rendered_view(sections: &RenderedSections) -> String {
        let shell = PageShell::builtin().unwrap();
        shell
            .apply(&PageView {
                state: PageState::Rendered,
                sections: Some(sections),
                theme: Theme::Light,
            })
            .unwrap()
    }

    fn display_of(html: &str, id: &str) -> Option<String> {
        let doc = Html::parse_document(html);
        let sel = Selector::parse(&format!("#{}", id)).unwrap();
        let el = doc.select(&sel).next()?;
        el.value().attr("style").map(|s| s.to_string())
    }

    #[test]
    fn builtin_shell_parses() {
        assert!(PageShell::builtin().is_ok());
    }

    #[test]
    fn missing_container_is_rejected() {
        let html = "<html><body><div id=\"loader\"></div></body></html>";
        match PageShell::parse(html) {
            Err(Error::ShellError(msg)) => assert!(msg.contains("not found")),
            other => panic!("expected ShellError, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn hidden_cards_are_listed_in_document_order() {
        let shell = PageShell::builtin().unwrap();
        let ids = shell.hidden_card_ids();
        assert_eq!(
            ids,
            vec![
                PERSONAL_INFO,
                "skills-section",
                "education-section",
                "experience-section",
                ACHIEVEMENTS_SECTION,
                INTERESTS_SECTION,
            ]
        );
    }

    #[test]
    fn failed_view_shows_error_panel_and_hides_loader() {
        let shell = PageShell::builtin().unwrap();
        let html = shell
            .apply(&PageView {
                state: PageState::Failed,
                sections: None,
                theme: Theme::Light,
            })
            .unwrap();
        assert_eq!(display_of(&html, LOADER).as_deref(), Some("display:none"));
        assert_eq!(display_of(&html, ERROR_PANEL).as_deref(), Some("display:flex"));
        assert_eq!(display_of(&html, RESUME).as_deref(), Some("display:none"));
        // Section containers stay untouched.
        let doc = Html::parse_document(&html);
        let sel = Selector::parse(&format!("#{}", SKILLS)).unwrap();
        assert_eq!(doc.select(&sel).next().unwrap().inner_html(), "");
    }

    #[test]
    fn rendered_view_shows_resume_and_splices_sections() {
        let doc: ResumeDocument = serde_json::from_str(
            r#"{"personalInfo": {"name": "Jane"}, "skills": [{"name": "Rust", "level": "A", "value": 90}]}"#,
        )
        .unwrap();
        let sections = render::sections(&doc);
        let html = rendered_view(&sections);
        assert_eq!(display_of(&html, LOADER).as_deref(), Some("display:none"));
        assert_eq!(display_of(&html, RESUME).as_deref(), Some("display:block"));
        assert!(html.contains("<h1>Jane</h1>"));
        assert!(html.contains("width: 90%"));
        // Absent optional sections hide their parents.
        assert_eq!(
            display_of(&html, ACHIEVEMENTS_SECTION).as_deref(),
            Some("display:none")
        );
        assert_eq!(
            display_of(&html, INTERESTS_SECTION).as_deref(),
            Some("display:none")
        );
    }

    #[test]
    fn apply_is_idempotent() {
        let doc = ResumeDocument::default();
        let sections = render::sections(&doc);
        assert_eq!(rendered_view(&sections), rendered_view(&sections));
    }

    #[test]
    fn dark_theme_sets_body_class_and_glyph() {
        let shell = PageShell::builtin().unwrap();
        let view = PageView {
            state: PageState::Loading,
            sections: None,
            theme: Theme::Dark,
        };
        let html = shell.apply(&view).unwrap();
        let doc = Html::parse_document(&html);
        let body = doc.select(&Selector::parse("body").unwrap()).next().unwrap();
        assert!(body.value().attr("class").unwrap_or("").contains("dark-theme"));
        let toggle = doc
            .select(&Selector::parse(&format!("#{}", THEME_TOGGLE)).unwrap())
            .next()
            .unwrap();
        assert_eq!(toggle.inner_html(), Theme::Dark.toggle_glyph());
    }
}
