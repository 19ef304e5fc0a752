//! Portfolio profile data rendered by the built-in commands.
//!
//! A profile can be loaded from TOML or JSON (chosen by file extension).
//! Every field is optional; a field missing from the file keeps the value of
//! the built-in default profile.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// Biography, skills and history of the portfolio owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub motto: String,
    pub about: Vec<String>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub contact: Vec<ContactLink>,
    pub stats: Vec<Stat>,
    pub resume_url: String,
}

/// A named group of skills (`frontend`, `backend`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub value: String,
}

/// A headline number shown with a count-up animation (`5+ years`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: u32,
}

impl Profile {
    /// Parse a profile from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Parse a profile from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a profile from disk, picking the format from the extension.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&text),
            Some("json") => Self::from_json_str(&text),
            other => Err(FolioError::Profile(format!(
                "unsupported profile format: {} (expected .toml or .json)",
                other.unwrap_or("<none>")
            ))),
        }
    }

    /// Look up a skill group by name, ignoring ASCII case.
    pub fn skill_group(&self, name: &str) -> Option<&SkillGroup> {
        self.skills
            .iter()
            .find(|g| g.name.eq_ignore_ascii_case(name))
    }

    /// Short handle used in prompts (`ketaki`), derived from the first name.
    pub fn handle(&self) -> String {
        self.name
            .split_whitespace()
            .next()
            .unwrap_or("visitor")
            .to_lowercase()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Ketaki".to_string(),
            title: "Full Stack Developer".to_string(),
            tagline: "Building thoughtful software for the web".to_string(),
            motto: "Code with purpose, design with passion, deliver with excellence".to_string(),
            about: strings(&[
                "Full Stack Developer passionate about creating innovative solutions",
                "Experience: 5+ years in web development",
                "Education: Computer Science Graduate",
            ]),
            skills: vec![
                SkillGroup {
                    name: "frontend".to_string(),
                    items: strings(&["HTML", "CSS", "JavaScript", "TypeScript", "React"]),
                },
                SkillGroup {
                    name: "backend".to_string(),
                    items: strings(&["Node.js", "Python", "REST APIs"]),
                },
                SkillGroup {
                    name: "databases".to_string(),
                    items: strings(&["PostgreSQL", "MongoDB", "Redis"]),
                },
                SkillGroup {
                    name: "tools".to_string(),
                    items: strings(&["Git", "Docker", "Linux"]),
                },
                SkillGroup {
                    name: "design".to_string(),
                    items: strings(&["Figma", "Responsive layout"]),
                },
            ],
            projects: vec![
                Project {
                    name: "Portfolio Terminal".to_string(),
                    description: "Interactive terminal that answers questions about me".to_string(),
                    tech: strings(&["Rust"]),
                    url: None,
                },
                Project {
                    name: "Task Board".to_string(),
                    description: "Kanban board with real-time collaboration".to_string(),
                    tech: strings(&["React", "Node.js", "PostgreSQL"]),
                    url: None,
                },
            ],
            experience: vec![Experience {
                role: "Full Stack Developer".to_string(),
                company: "Freelance".to_string(),
                period: "2019 - present".to_string(),
                highlights: strings(&[
                    "Delivered web applications end to end",
                    "Designed APIs and data models",
                ]),
            }],
            contact: vec![ContactLink {
                label: "email".to_string(),
                value: "hello@example.com".to_string(),
            }],
            stats: vec![
                Stat {
                    label: "Years Experience".to_string(),
                    value: 5,
                },
                Stat {
                    label: "Projects".to_string(),
                    value: 50,
                },
            ],
            resume_url: "https://example.com/resume.pdf".to_string(),
        }
    }
}
