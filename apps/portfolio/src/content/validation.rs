use std::collections::HashSet;

use tracing::warn;

use crate::content::ContentError;
use crate::models::content::ContentSnapshot;

/// Checks load-time invariants of the content document.
///
/// Duplicate unique keys and a missing canonical email reject the document.
/// Soft expectations (highlighted author present, one current education entry)
/// only log a warning.
pub fn validate_snapshot(snapshot: &ContentSnapshot) -> Result<(), ContentError> {
    if snapshot.personal.canonical_email().is_empty() {
        return Err(ContentError::MissingCanonicalEmail);
    }

    ensure_unique("project", snapshot.projects.iter().map(|p| p.title.as_str()))?;
    ensure_unique(
        "publication",
        snapshot.publications.iter().map(|p| p.title.as_str()),
    )?;
    ensure_unique(
        "education",
        snapshot.education.iter().map(|e| e.institution.as_str()),
    )?;
    ensure_unique(
        "experience",
        snapshot.experience.iter().map(|e| e.company.as_str()),
    )?;

    let name = snapshot.personal.name.as_str();
    for publication in &snapshot.publications {
        if !publication.authors.contains(name) {
            warn!(
                "Publication '{}' does not list '{}' among its authors",
                publication.title, name
            );
        }
    }

    let current = snapshot.education.iter().filter(|e| e.current).count();
    if !snapshot.education.is_empty() && current != 1 {
        warn!("Expected one current education entry, found {current}");
    }

    Ok(())
}

fn ensure_unique<'a>(
    kind: &'static str,
    keys: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(ContentError::DuplicateKey {
                kind,
                key: key.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentRepository;

    fn snapshot() -> ContentSnapshot {
        ContentRepository::embedded().unwrap().get().as_ref().clone()
    }

    #[test]
    fn test_embedded_document_is_valid() {
        assert!(validate_snapshot(&snapshot()).is_ok());
    }

    #[test]
    fn test_duplicate_project_title_rejected() {
        let mut s = snapshot();
        let first = s.projects[0].clone();
        s.projects.push(first);
        let err = validate_snapshot(&s).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateKey { kind: "project", .. }));
    }

    #[test]
    fn test_duplicate_company_rejected() {
        let mut s = snapshot();
        s.experience[1].company = s.experience[0].company.clone();
        assert!(matches!(
            validate_snapshot(&s),
            Err(ContentError::DuplicateKey { kind: "experience", .. })
        ));
    }

    #[test]
    fn test_missing_canonical_email_rejected() {
        let mut s = snapshot();
        s.personal.email_alt.clear();
        assert!(matches!(
            validate_snapshot(&s),
            Err(ContentError::MissingCanonicalEmail)
        ));
    }

    #[test]
    fn test_soft_expectations_only_warn() {
        let mut s = snapshot();
        s.publications[0].authors = "Someone Else".to_string();
        for entry in &mut s.education {
            entry.current = true;
        }
        assert!(validate_snapshot(&s).is_ok());
    }
}
