use serde::Serialize;

use crate::content::catalog::Badge;
use crate::models::content::{ContentSnapshot, Project};

#[derive(Debug, Serialize)]
pub struct ProjectCard<'a> {
    pub title: &'a str,
    pub category: &'a str,
    pub badge: Badge,
    pub description: &'a str,
    pub tech_stack: &'a [String],
    pub github: Option<&'a str>,
    pub demo: Option<&'a str>,
    pub featured: bool,
}

impl<'a> From<&'a Project> for ProjectCard<'a> {
    fn from(project: &'a Project) -> Self {
        Self {
            title: &project.title,
            category: &project.category,
            badge: project.badge(),
            description: &project.description,
            tech_stack: &project.tech_stack,
            github: project.github.as_deref(),
            demo: project.demo.as_deref(),
            featured: project.featured,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectsView<'a> {
    pub projects: Vec<ProjectCard<'a>>,
}

pub fn build(content: &ContentSnapshot) -> ProjectsView<'_> {
    ProjectsView {
        projects: content.projects.iter().map(ProjectCard::from).collect(),
    }
}
