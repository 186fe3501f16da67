// Page views for the four destinations. Each is a pure function of the content
// snapshot; none keeps state across pages.

pub mod contact;
pub mod footer;
pub mod home;
pub mod projects;
pub mod research;

use serde::Serialize;

use crate::content::catalog::NavIcon;
use crate::errors::AppError;
use crate::models::content::{ContentSnapshot, EducationEntry};
use crate::ui::{BackToTop, Menu, ViewState};

#[derive(Debug, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Page<'a> {
    Home(home::HomeView<'a>),
    Projects(projects::ProjectsView<'a>),
    Research(research::ResearchView<'a>),
    Contact(contact::ContactView<'a>),
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct NavEntry<'a> {
    pub name: &'a str,
    pub path: &'a str,
    pub icon: Option<NavIcon>,
    pub active: bool,
}

/// Detail overlay opened from a card on the current page.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Modal<'a> {
    Education(&'a EducationEntry),
    Project(projects::ProjectCard<'a>),
    Publication(research::PublicationCard<'a>),
}

#[derive(Debug, Serialize)]
pub struct SiteView<'a> {
    pub nav: Vec<NavEntry<'a>>,
    pub menu: Menu,
    #[serde(flatten)]
    pub page: Page<'a>,
    pub modal: Option<Modal<'a>>,
    pub footer: footer::Footer<'a>,
    pub back_to_top: BackToTop,
}

fn normalize(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        p => p,
    }
}

/// Resolves a path to its page view. Trailing slashes are ignored.
pub fn route<'a>(content: &'a ContentSnapshot, path: &str) -> Option<Page<'a>> {
    match normalize(path) {
        "/" => Some(Page::Home(home::build(content))),
        "/projects" => Some(Page::Projects(projects::build(content))),
        "/research" => Some(Page::Research(research::build(content))),
        "/contact" => Some(Page::Contact(contact::build(content))),
        _ => None,
    }
}

pub fn nav<'a>(content: &'a ContentSnapshot, current_path: &str) -> Vec<NavEntry<'a>> {
    content
        .nav_links
        .iter()
        .map(|link| NavEntry {
            name: &link.name,
            path: &link.path,
            icon: link.icon(),
            active: link.path == current_path,
        })
        .collect()
}

/// Looks up the entity a modal is keyed by on the given page.
fn modal<'a>(content: &'a ContentSnapshot, path: &str, key: &str) -> Option<Modal<'a>> {
    match path {
        "/" => content.education(key).map(Modal::Education),
        "/projects" => content.project(key).map(|p| Modal::Project(p.into())),
        "/research" => content
            .publication(key)
            .map(|p| Modal::Publication(research::PublicationCard::new(p, &content.personal.name))),
        _ => None,
    }
}

pub fn render<'a>(
    content: &'a ContentSnapshot,
    path: &str,
    ui: &ViewState,
) -> Result<SiteView<'a>, AppError> {
    let path = normalize(path);
    let mut page =
        route(content, path).ok_or_else(|| AppError::NotFound(format!("No page at '{path}'")))?;

    let modal = match ui.modal.current() {
        Some(key) => Some(modal(content, path, key).ok_or_else(|| {
            AppError::NotFound(format!("Nothing to open for '{key}' on {path}"))
        })?),
        None => None,
    };

    if let (Page::Home(home), Some(&index)) = (&mut page, ui.timeline.current()) {
        if index >= content.experience.len() {
            return Err(AppError::NotFound(format!("No experience entry #{index}")));
        }
        home.active_experience = Some(index);
    }

    Ok(SiteView {
        nav: nav(content, path),
        menu: ui.menu,
        page,
        modal,
        footer: footer::build(content),
        back_to_top: ui.back_to_top,
    })
}
