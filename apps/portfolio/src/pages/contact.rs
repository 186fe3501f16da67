use serde::Serialize;

use crate::models::content::{ContentSnapshot, SocialLinks};
use crate::models::contact::Toast;

#[derive(Debug, Serialize)]
pub struct ContactView<'a> {
    /// Compose-box recipient; also the failure-toast fallback.
    pub to: &'a str,
    pub copyable_emails: [&'a str; 2],
    pub location: &'a str,
    pub social: &'a SocialLinks,
    pub success_text: String,
    pub failure_text: String,
}

pub fn build(content: &ContentSnapshot) -> ContactView<'_> {
    let personal = &content.personal;
    let to = personal.canonical_email();

    ContactView {
        to,
        copyable_emails: [to, &personal.email],
        location: &personal.location,
        social: &personal.social,
        success_text: Toast::Success.text(to),
        failure_text: Toast::Failure.text(to),
    }
}
