use std::collections::HashSet;

use log::Level;
use serde::Deserialize;

use crate::error::SiteError;

/// Clearance kept between the fixed navbar and a scrolled-to section.
pub const HEADER_OFFSET: f64 = 100.0;

/// Length of an in-page smooth scroll. Older notes mention 800ms, the page ships 200ms.
pub const SCROLL_DURATION_MS: f64 = 200.0;

/// Share of a reveal block that must be on screen before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// A section counts as current while its top edge sits inside this band.
pub const SECTION_BAND: (f64, f64) = (-300.0, 300.0);

/// Past this vertical offset the navbar switches to its compact chrome.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

pub const POPUP_ARM_DELAY_MS: u32 = 4_000;
pub const POPUP_REVEAL_DELAY_MS: u32 = 100;

const SITE_JSON: &str = include_str!("../static/site.json");

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    pub studio: Studio,
    pub developer: Developer,
    pub sections: Vec<NavTarget>,
    pub process: Vec<ProcessStep>,
    pub gallery: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Studio {
    pub name: String,
    pub brand: String,
    pub awards: String,
    pub whatsapp: String,
    pub instagram: String,
    pub city: String,
    pub since: i32,
    pub hero_image: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Developer {
    pub name: String,
    pub site: String,
    pub whatsapp: String,
    pub whatsapp_display: String,
    pub instagram: String,
}

/// An anchor-addressable section of the page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavTarget {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub in_footer: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProcessStep {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl SiteConfig {
    /// Parses the configuration bundled into the binary.
    pub fn embedded() -> Result<Self, SiteError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let config: SiteConfig =
            serde_json::from_str(raw).map_err(|e| SiteError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Every section id has to address exactly one element on the page.
    pub fn validate(&self) -> Result<(), SiteError> {
        if self.sections.is_empty() {
            return Err(SiteError::Config("at least one section is required".to_string()));
        }
        let mut seen = HashSet::new();
        for section in &self.sections {
            if section.id.trim().is_empty() {
                return Err(SiteError::Config("section id must not be empty".to_string()));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(SiteError::DuplicateSection(section.id.clone()));
            }
        }
        Ok(())
    }

    pub fn section_ids(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.id.clone()).collect()
    }

    pub fn footer_sections(&self) -> impl Iterator<Item = &NavTarget> {
        self.sections.iter().filter(|s| s.in_footer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_loads() {
        let config = SiteConfig::embedded().expect("bundled site.json must parse");
        assert_eq!(
            config.section_ids(),
            vec!["home", "studio", "portfolio", "contact"]
        );
        assert_eq!(config.studio.whatsapp, "5584991336794");
        assert_eq!(config.studio.instagram, "gungatattoo");
        assert_eq!(config.gallery.len(), 6);
        assert_eq!(config.process.len(), 3);
        let footer: Vec<_> = config.footer_sections().map(|s| s.id.as_str()).collect();
        assert_eq!(footer, vec!["home", "portfolio", "contact"]);
    }

    #[test]
    fn duplicate_section_ids_are_rejected() {
        let mut config = SiteConfig::embedded().unwrap();
        config.sections.push(config.sections[0].clone());
        assert_eq!(
            config.validate(),
            Err(SiteError::DuplicateSection("home".to_string()))
        );
    }

    #[test]
    fn empty_section_id_is_rejected() {
        let mut config = SiteConfig::embedded().unwrap();
        config.sections[1].id = "  ".to_string();
        assert!(matches!(config.validate(), Err(SiteError::Config(_))));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(
            SiteConfig::from_json("{ not json"),
            Err(SiteError::Config(_))
        ));
    }
}
