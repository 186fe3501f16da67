use serde::Serialize;

use crate::models::content::ContentSnapshot;

pub const COPYRIGHT_YEAR: u16 = 2026;

/// Shown under every page.
#[derive(Debug, Serialize)]
pub struct Footer<'a> {
    pub github: &'a str,
    pub linkedin: &'a str,
    pub mailto: String,
    pub copyright: String,
}

pub fn build(content: &ContentSnapshot) -> Footer<'_> {
    let personal = &content.personal;
    Footer {
        github: &personal.social.github,
        linkedin: &personal.social.linkedin,
        mailto: format!("mailto:{}", personal.canonical_email()),
        copyright: format!(
            "© {COPYRIGHT_YEAR} {}. Built with passion and code.",
            personal.name
        ),
    }
}
