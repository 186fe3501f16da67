//! Fixed lookup tables that decorate content: skill category labels, project
//! badges and navigation icons. Unknown keys never error.

use serde::Serialize;

use crate::models::content::{NavLink, Project};

/// Skill category keys in display order with their section labels.
pub const SKILL_CATEGORIES: &[(&str, &str)] = &[
    ("programming", "Programming Languages"),
    ("ds_and_ml", "Data Science & Machine Learning"),
    ("frameworks_and_tools", "Frameworks & Tools"),
    ("cloud_and_db", "Cloud & Databases"),
    ("visualization", "Visualization & BI"),
];

pub fn skill_category_label(key: &str) -> Option<&'static str> {
    SKILL_CATEGORIES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    DataScience,
    ComputerVision,
    GenerativeAi,
    MachineLearning,
    DeepLearning,
    TimeSeries,
}

impl Badge {
    pub fn for_category(category: &str) -> Self {
        match category {
            "Data Science" => Badge::DataScience,
            "Computer Vision" => Badge::ComputerVision,
            "Generative AI" => Badge::GenerativeAi,
            "Deep Learning" => Badge::DeepLearning,
            "Time Series" => Badge::TimeSeries,
            _ => Badge::MachineLearning,
        }
    }
}

impl Project {
    pub fn badge(&self) -> Badge {
        Badge::for_category(&self.category)
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NavIcon {
    Home,
    Code,
    Book,
    Mail,
}

impl NavIcon {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "home" => Some(NavIcon::Home),
            "code" => Some(NavIcon::Code),
            "book" => Some(NavIcon::Book),
            "mail" => Some(NavIcon::Mail),
            _ => None,
        }
    }
}

impl NavLink {
    pub fn icon(&self) -> Option<NavIcon> {
        NavIcon::from_key(&self.icon)
    }
}
