use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Personal {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub bio: String,
    pub email: String,
    pub email_alt: String,
    pub social: SocialLinks,
    pub resume_path: String,
    pub profile_image: String,
    pub location: String,
}

impl Personal {
    /// The single address outbound replies and the failure-toast fallback point to.
    pub fn canonical_email(&self) -> &str {
        &self.email_alt
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillCategory {
    pub key: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub title: String,
    pub category: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Publication {
    pub title: String,
    pub authors: String,
    pub venue: String,
    pub year: String,
    pub status: String,
    #[serde(rename = "abstract")]
    pub summary: String,
    pub keywords: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    pub date: String,
}

impl Publication {
    /// Lower-cased status with every whitespace run replaced by one `-`
    /// ("In Progress" → "in-progress"). Edge runs are kept, not trimmed.
    pub fn status_slug(&self) -> String {
        let mut slug = String::with_capacity(self.status.len());
        let mut in_run = false;
        for c in self.status.to_lowercase().chars() {
            if c.is_whitespace() {
                if !in_run {
                    slug.push('-');
                }
                in_run = true;
            } else {
                slug.push(c);
                in_run = false;
            }
        }
        slug
    }

    pub fn is_published(&self) -> bool {
        self.status.eq_ignore_ascii_case("published")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub dates: String,
    pub gpa: String,
    pub coursework: Vec<String>,
    #[serde(default)]
    pub current: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub location: String,
    pub dates: String,
    pub description: String,
    pub tech_highlights: Vec<String>,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavLink {
    pub name: String,
    pub path: String,
    pub icon: String,
}

/// The whole content document. Never mutated once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentSnapshot {
    pub personal: Personal,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub publications: Vec<Publication>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub nav_links: Vec<NavLink>,
}

impl ContentSnapshot {
    pub fn skills(&self, key: &str) -> Option<&[String]> {
        self.skills
            .iter()
            .find(|c| c.key == key)
            .map(|c| c.skills.as_slice())
    }

    pub fn project(&self, title: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.title == title)
    }

    pub fn publication(&self, title: &str) -> Option<&Publication> {
        self.publications.iter().find(|p| p.title == title)
    }

    pub fn education(&self, institution: &str) -> Option<&EducationEntry> {
        self.education.iter().find(|e| e.institution == institution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn publication(status: &str) -> Publication {
        Publication {
            title: "T".to_string(),
            authors: "A".to_string(),
            venue: "V".to_string(),
            year: "2025".to_string(),
            status: status.to_string(),
            summary: String::new(),
            keywords: vec![],
            link: None,
            date: "2025".to_string(),
        }
    }

    #[test]
    fn test_status_slug_collapses_whitespace() {
        assert_eq!(publication("In Progress").status_slug(), "in-progress");
        assert_eq!(publication("Under   Review").status_slug(), "under-review");
        assert_eq!(publication("Published").status_slug(), "published");
    }

    #[test]
    fn test_status_slug_keeps_edge_whitespace_as_dashes() {
        assert_eq!(publication(" In Progress ").status_slug(), "-in-progress-");
        assert_eq!(publication("\tUnder\n Review").status_slug(), "-under-review");
    }

    #[test]
    fn test_is_published_ignores_case() {
        assert!(publication("PUBLISHED").is_published());
        assert!(!publication("In Progress").is_published());
    }

    #[test]
    fn test_project_optional_links_default_to_none() {
        let json = r#"{
            "title": "X",
            "category": "Data Science",
            "description": "d",
            "tech_stack": ["Rust"]
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert!(project.github.is_none());
        assert!(project.demo.is_none());
        assert!(!project.featured);
    }

    #[test]
    fn test_publication_abstract_field_name() {
        let json = r#"{
            "title": "T", "authors": "A", "venue": "V", "year": "2024",
            "status": "Published", "abstract": "About things",
            "keywords": [], "link": null, "date": "2024"
        }"#;
        let publication: Publication = serde_json::from_str(json).unwrap();
        assert_eq!(publication.summary, "About things");
        assert!(publication.link.is_none());
    }
}
