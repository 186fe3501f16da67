use serde::Serialize;

use crate::content::catalog::{skill_category_label, SKILL_CATEGORIES};
use crate::content::highlight::{highlight, Segment, BIO_MARKERS};
use crate::models::content::{ContentSnapshot, EducationEntry, ExperienceEntry, SocialLinks};

#[derive(Debug, Serialize)]
pub struct Hero<'a> {
    pub name: &'a str,
    pub title: &'a str,
    pub tagline: &'a str,
    pub resume_path: &'a str,
    pub email: &'a str,
    pub social: &'a SocialLinks,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Stat {
    pub value: usize,
    pub suffix: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct About<'a> {
    pub profile_image: &'a str,
    pub bio: Vec<Segment<'a>>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Serialize)]
pub struct SkillGroup<'a> {
    pub key: &'a str,
    pub label: &'a str,
    pub skills: &'a [String],
}

#[derive(Debug, Serialize)]
pub struct HomeView<'a> {
    pub hero: Hero<'a>,
    pub about: About<'a>,
    pub education: &'a [EducationEntry],
    pub experience: &'a [ExperienceEntry],
    /// Index of the expanded experience timeline node.
    pub active_experience: Option<usize>,
    pub skills: Vec<SkillGroup<'a>>,
}

pub fn stats(content: &ContentSnapshot) -> Vec<Stat> {
    let published = content
        .publications
        .iter()
        .filter(|p| p.is_published())
        .count();

    vec![
        Stat {
            value: content.publications.len(),
            suffix: "+",
            label: "Publications",
        },
        Stat {
            value: content.projects.len(),
            suffix: "+",
            label: "Projects",
        },
        Stat {
            value: published,
            suffix: "",
            label: "Published Papers",
        },
    ]
}

/// Known categories come first in catalogue order, then any others as listed.
fn skill_groups(content: &ContentSnapshot) -> Vec<SkillGroup<'_>> {
    let known = SKILL_CATEGORIES.iter().filter_map(|&(key, label)| {
        content
            .skills(key)
            .map(|skills| SkillGroup { key, label, skills })
    });

    let unknown = content
        .skills
        .iter()
        .filter(|c| skill_category_label(&c.key).is_none())
        .map(|c| SkillGroup {
            key: &c.key,
            label: &c.key,
            skills: &c.skills,
        });

    known.chain(unknown).collect()
}

pub fn build(content: &ContentSnapshot) -> HomeView<'_> {
    let personal = &content.personal;

    HomeView {
        hero: Hero {
            name: &personal.name,
            title: &personal.title,
            tagline: &personal.tagline,
            resume_path: &personal.resume_path,
            email: personal.canonical_email(),
            social: &personal.social,
        },
        about: About {
            profile_image: &personal.profile_image,
            bio: highlight(&personal.bio, BIO_MARKERS),
            stats: stats(content),
        },
        education: &content.education,
        experience: &content.experience,
        active_experience: None,
        skills: skill_groups(content),
    }
}
