use serde::Serialize;

use crate::content::highlight::{highlight_author, Segment};
use crate::models::content::{ContentSnapshot, Publication};

#[derive(Debug, Serialize)]
pub struct PublicationCard<'a> {
    pub title: &'a str,
    pub authors: Vec<Segment<'a>>,
    pub venue: &'a str,
    pub year: &'a str,
    pub date: &'a str,
    pub status: &'a str,
    pub status_slug: String,
    #[serde(rename = "abstract")]
    pub summary: &'a str,
    pub keywords: &'a [String],
    pub link: Option<&'a str>,
}

impl<'a> PublicationCard<'a> {
    pub fn new(publication: &'a Publication, highlighted_name: &str) -> Self {
        Self {
            title: &publication.title,
            authors: highlight_author(&publication.authors, highlighted_name),
            venue: &publication.venue,
            year: &publication.year,
            date: &publication.date,
            status: &publication.status,
            status_slug: publication.status_slug(),
            summary: &publication.summary,
            keywords: &publication.keywords,
            link: publication.link.as_deref(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResearchView<'a> {
    pub publications: Vec<PublicationCard<'a>>,
}

pub fn build(content: &ContentSnapshot) -> ResearchView<'_> {
    let name = content.personal.name.as_str();
    ResearchView {
        publications: content
            .publications
            .iter()
            .map(|p| PublicationCard::new(p, name))
            .collect(),
    }
}
