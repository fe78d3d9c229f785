use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;
use thiserror::Error;

use crate::tracking::active_section::TieBreakPolicy;

const EMBEDDED_SITE: &str = include_str!("../site.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("brand name must not be empty")]
    EmptyBrand,
    #[error("at least one nav link is required")]
    NoNavLinks,
    #[error("nav link at position {0} has an empty id")]
    EmptyNavId(usize),
    #[error("nav link id `{0}` is used more than once")]
    DuplicateNavId(String),
    #[error("whatsapp number `{0}` contains no digits")]
    PhoneWithoutDigits(String),
    #[error("observer threshold {0} is outside 0..=1")]
    ThresholdOutOfRange(f64),
    #[error("anchor offset {0} must not be negative")]
    NegativeAnchor(f64),
    #[error("max-ratio band {0} must be in 0..0.5")]
    BandOutOfRange(f64),
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct NavLink {
    pub id: String,
    pub label: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub id: String,
    pub label: String,
    pub url: String,
}

/// Named colour ramp, shade -> "h s% l%" triple.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ThemeRamp {
    pub name: String,
    pub shades: BTreeMap<u16, String>,
}

impl ThemeRamp {
    /// Renders the ramp as `:root` custom properties, e.g. `--olive-500: 78 35% 45%;`.
    pub fn to_css(&self) -> String {
        let vars: String = self
            .shades
            .iter()
            .map(|(shade, hsl)| format!("--{}-{}: {};", self.name, shade, hsl))
            .collect::<Vec<_>>()
            .join(" ");
        match self.shades.get(&500) {
            Some(primary) => format!(":root {{ {} --primary: {}; }}", vars, primary),
            None => format!(":root {{ {} }}", vars),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TrackerSettings {
    pub policy: TieBreakPolicy,
    pub min_ratio: f64,
    pub root_margin: String,
    pub thresholds: Vec<f64>,
    pub nav_height: f64,
    pub scrolled_threshold: f64,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            policy: TieBreakPolicy::default(),
            min_ratio: 0.0,
            root_margin: "-90px 0px -30% 0px".to_string(),
            thresholds: vec![0.0, 0.15, 0.3, 0.5, 0.7, 0.85, 1.0],
            nav_height: 80.0,
            scrolled_threshold: 8.0,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub brand_name: String,
    pub brand_tagline: String,
    pub logo_path: String,
    pub dark_logo_path: String,
    pub whatsapp_number: String,
    pub contact_email: String,
    pub office_location: String,
    pub email_placeholder: String,
    pub theme_ramp: ThemeRamp,
    pub nav_links: Vec<NavLink>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub tracker: TrackerSettings,
}

impl SiteConfig {
    /// Parses and validates the `site.json` bundled into the binary.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED_SITE)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.brand_name.trim().is_empty() {
            return Err(ConfigError::EmptyBrand);
        }
        if self.nav_links.is_empty() {
            return Err(ConfigError::NoNavLinks);
        }

        let mut seen = HashSet::new();
        for (idx, link) in self.nav_links.iter().enumerate() {
            if link.id.trim().is_empty() {
                return Err(ConfigError::EmptyNavId(idx));
            }
            if !seen.insert(link.id.as_str()) {
                return Err(ConfigError::DuplicateNavId(link.id.clone()));
            }
        }

        if !self.whatsapp_number.chars().any(|c| c.is_ascii_digit()) {
            return Err(ConfigError::PhoneWithoutDigits(self.whatsapp_number.clone()));
        }

        for &threshold in &self.tracker.thresholds {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(ConfigError::ThresholdOutOfRange(threshold));
            }
        }

        match self.tracker.policy {
            TieBreakPolicy::TopProximity { anchor_offset } if anchor_offset < 0.0 => {
                Err(ConfigError::NegativeAnchor(anchor_offset))
            }
            TieBreakPolicy::MaxRatio { band } if !(0.0..0.5).contains(&band) => {
                Err(ConfigError::BandOutOfRange(band))
            }
            _ => Ok(()),
        }
    }

    pub fn section_ids(&self) -> Vec<String> {
        self.nav_links.iter().map(|l| l.id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> serde_json::Value {
        serde_json::from_str(EMBEDDED_SITE).unwrap()
    }

    #[test]
    fn embedded_config_is_valid() {
        let config = SiteConfig::embedded().unwrap();
        assert_eq!(config.brand_name, "Scalaris");
        assert_eq!(config.section_ids().first().map(String::as_str), Some("home"));
        assert_eq!(
            config.tracker.policy,
            TieBreakPolicy::TopProximity { anchor_offset: 120.0 }
        );
    }

    #[test]
    fn tracker_block_is_optional() {
        let mut json = sample_json();
        json.as_object_mut().unwrap().remove("tracker");
        let config = SiteConfig::from_json(&json.to_string()).unwrap();
        assert_eq!(config.tracker, TrackerSettings::default());
    }

    #[test]
    fn rejects_duplicate_nav_ids() {
        let mut json = sample_json();
        json["nav_links"][1]["id"] = "home".into();
        match SiteConfig::from_json(&json.to_string()) {
            Err(ConfigError::DuplicateNavId(id)) => assert_eq!(id, "home"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_phone_without_digits() {
        let mut json = sample_json();
        json["whatsapp_number"] = "call us".into();
        assert!(matches!(
            SiteConfig::from_json(&json.to_string()),
            Err(ConfigError::PhoneWithoutDigits(_))
        ));
    }

    #[test]
    fn rejects_bad_thresholds_and_band() {
        let mut json = sample_json();
        json["tracker"]["thresholds"] = serde_json::json!([0.0, 1.5]);
        assert!(matches!(
            SiteConfig::from_json(&json.to_string()),
            Err(ConfigError::ThresholdOutOfRange(_))
        ));

        let mut json = sample_json();
        json["tracker"]["policy"] = serde_json::json!({ "kind": "max_ratio", "band": 0.6 });
        assert!(matches!(
            SiteConfig::from_json(&json.to_string()),
            Err(ConfigError::BandOutOfRange(_))
        ));
    }

    #[test]
    fn rejects_empty_brand_and_nav() {
        let mut json = sample_json();
        json["brand_name"] = " ".into();
        assert!(matches!(
            SiteConfig::from_json(&json.to_string()),
            Err(ConfigError::EmptyBrand)
        ));

        let mut json = sample_json();
        json["nav_links"] = serde_json::json!([]);
        assert!(matches!(
            SiteConfig::from_json(&json.to_string()),
            Err(ConfigError::NoNavLinks)
        ));
    }

    #[test]
    fn ramp_renders_root_variables() {
        let mut shades = BTreeMap::new();
        shades.insert(50, "78 35% 88%".to_string());
        shades.insert(500, "78 35% 45%".to_string());
        let ramp = ThemeRamp { name: "olive".to_string(), shades };
        assert_eq!(
            ramp.to_css(),
            ":root { --olive-50: 78 35% 88%; --olive-500: 78 35% 45%; --primary: 78 35% 45%; }"
        );
    }
}
