use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, LazyLock};
use thiserror::Error;

pub const DEFAULT_PROFILE: &str = "default";

pub static GLOBAL_PROFILE_CACHE: LazyLock<DashMap<String, Arc<Profile>>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "content"]
pub struct ProfileAssets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Profile not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse profile: {0}")]
    Parse(String),
    #[error("Invalid profile: {0}")]
    Invalid(String),
}

/// Everything the page template needs to render one person's portfolio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub summary: String,
    pub about: About,
    pub contact: Contact,
    pub experience: Vec<Role>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub headings: Headings,
    pub media: Media,
    pub footer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct About {
    pub summary: String,
    pub achievements: String,
    pub education: Vec<Education>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub details: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Role {
    pub period: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillGroup {
    pub name: String,
    pub icon: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub title: String,
    pub icon: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Heading {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Headings {
    pub about: Heading,
    pub experience: Heading,
    pub skills: Heading,
    pub projects: Heading,
    pub contact: Heading,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Media {
    pub video: String,
    pub resume: Resume,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resume {
    pub path: String,
    pub filename: String,
}

impl Profile {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    fn validate(&self) -> Result<(), ProfileError> {
        let required = [
            ("name", &self.name),
            ("headline", &self.headline),
            ("contact.email", &self.contact.email),
            ("media.video", &self.media.video),
            ("media.resume.path", &self.media.resume.path),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ProfileError::Invalid(format!("{field} is empty")));
            }
        }
        Ok(())
    }
}

impl Contact {
    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel_href(&self) -> String {
        let digits = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect::<String>();
        format!("tel:{digits}")
    }

    /// `linkedin.com/in/<handle>`
    pub fn linkedin_display(&self) -> String {
        format!("linkedin.com/in/{}", self.linkedin)
    }

    pub fn linkedin_url(&self) -> String {
        format!("https://{}", self.linkedin_display())
    }

    /// `in/<handle>`
    pub fn linkedin_short(&self) -> String {
        format!("in/{}", self.linkedin)
    }
}

/// Names of all embedded profiles, sorted.
pub fn list_profiles() -> Vec<String> {
    let mut names = ProfileAssets::iter()
        .filter_map(|s| s.strip_suffix(".json").map(str::to_string))
        .collect::<Vec<_>>();
    names.sort();
    names
}

pub fn parse_profile(content: &str) -> Result<Profile, ProfileError> {
    let profile = serde_json::from_str::<Profile>(content)
        .map_err(|e| ProfileError::Parse(e.to_string()))?;
    profile.validate()?;
    Ok(profile)
}

pub fn get_profile(name: &str) -> Result<Arc<Profile>, ProfileError> {
    let cache = &*GLOBAL_PROFILE_CACHE;
    if let Some(p) = cache.get(name) {
        return Ok(p.clone());
    }
    let file = ProfileAssets::get(&format!("{name}.json"))
        .ok_or_else(|| ProfileError::NotFound(name.to_string()))?;
    let content =
        std::str::from_utf8(&file.data).map_err(|e| ProfileError::Parse(e.to_string()))?;
    let profile = Arc::new(parse_profile(content)?);
    Ok(cache.entry(name.to_string()).or_insert(profile).clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_loads() {
        let profile = get_profile(DEFAULT_PROFILE).expect("default profile should load");
        assert_eq!(profile.name, "Kamalnath Murugan");
        assert_eq!(profile.initials(), "KM");
        assert_eq!(profile.media.video, "/videos/background-video.mp4");
        assert_eq!(profile.media.resume.filename, "Kamalnath_Murugan_Resume.pdf");
        assert_eq!(profile.experience.len(), 6);
        assert_eq!(profile.skills.len(), 9);
        assert_eq!(profile.projects.len(), 6);

        // second lookup is served from the cache
        let again = get_profile(DEFAULT_PROFILE).expect("cached profile");
        assert!(Arc::ptr_eq(&profile, &again));
    }

    #[test]
    fn test_every_embedded_profile_is_valid() {
        let names = list_profiles();
        assert!(names.contains(&DEFAULT_PROFILE.to_string()));
        assert!(names.contains(&"automation".to_string()));
        for name in names {
            assert!(get_profile(&name).is_ok(), "profile {name} should load");
        }
    }

    #[test]
    fn test_variants_share_identity() {
        let default = get_profile(DEFAULT_PROFILE).unwrap();
        let variant = get_profile("automation").unwrap();
        assert_eq!(default.name, variant.name);
        assert_eq!(default.contact, variant.contact);
        assert_ne!(default.headline, variant.headline);
    }

    #[test]
    fn test_unknown_profile() {
        assert_eq!(
            get_profile("nobody"),
            Err(ProfileError::NotFound("nobody".to_string()))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_profile("{ not json"),
            Err(ProfileError::Parse(_))
        ));

        let file = ProfileAssets::get("default.json").unwrap();
        let mut value: serde_json::Value = serde_json::from_slice(&file.data).unwrap();
        value["name"] = serde_json::Value::String("  ".to_string());
        assert_eq!(
            parse_profile(&value.to_string()),
            Err(ProfileError::Invalid("name is empty".to_string()))
        );
    }

    #[test]
    fn test_contact_links() {
        let contact = Contact {
            email: "someone@example.com".to_string(),
            phone: "+91 72009 68104".to_string(),
            linkedin: "someone".to_string(),
            location: "Chennai".to_string(),
        };
        assert_eq!(contact.mailto_href(), "mailto:someone@example.com");
        assert_eq!(contact.tel_href(), "tel:+917200968104");
        assert_eq!(contact.linkedin_display(), "linkedin.com/in/someone");
        assert_eq!(contact.linkedin_url(), "https://linkedin.com/in/someone");
        assert_eq!(contact.linkedin_short(), "in/someone");
    }

    #[test]
    fn test_initials() {
        let mut profile = get_profile(DEFAULT_PROFILE).unwrap().as_ref().clone();
        profile.name = "ada   king lovelace".to_string();
        assert_eq!(profile.initials(), "AKL");
    }
}
