use serde::{Deserialize, Deserializer, Serialize};

/// The canonical résumé record shared by every view.
///
/// Every collection defaults to empty and every string to `""`, so a record
/// missing fields deserializes into a fully-populated document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeDocument {
    pub personal: PersonalInfo,
    pub summary: String,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    #[serde(deserialize_with = "deserialize_skills")]
    pub skills: Skills,
    pub links: Links,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub year: String,
}

impl EducationEntry {
    /// True when school, degree and year are all filled in.
    pub fn is_complete(&self) -> bool {
        [&self.school, &self.degree, &self.year]
            .iter()
            .all(|f| !f.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub title: String,
    /// Older records name this field `techStack`.
    #[serde(alias = "techStack")]
    pub tech: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    pub github: String,
    pub linkedin: String,
}

impl Links {
    pub fn has_any(&self) -> bool {
        !self.github.trim().is_empty() || !self.linkedin.trim().is_empty()
    }
}

/// Categorized skills. The only form components past the storage boundary see.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub tools: Vec<String>,
}

impl Skills {
    /// Splits a comma-delimited list, trimming entries and dropping empties.
    /// Legacy flat lists carry no categories, so everything lands in `technical`.
    pub fn from_flat(raw: &str) -> Self {
        Skills {
            technical: split_skill_list(raw),
            ..Skills::default()
        }
    }

    pub fn total(&self) -> usize {
        self.technical.len() + self.soft.len() + self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Labelled categories, skipping empty ones.
    pub fn categories(&self) -> Vec<(SkillCategory, &[String])> {
        [
            (SkillCategory::Technical, self.technical.as_slice()),
            (SkillCategory::Soft, self.soft.as_slice()),
            (SkillCategory::Tools, self.tools.as_slice()),
        ]
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .collect()
    }

    pub fn category_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::Technical => &mut self.technical,
            SkillCategory::Soft => &mut self.soft,
            SkillCategory::Tools => &mut self.tools,
        }
    }

    /// Trims every entry and drops the empty ones.
    fn normalized(self) -> Self {
        let clean = |items: Vec<String>| -> Vec<String> {
            items
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        };
        Skills {
            technical: clean(self.technical),
            soft: clean(self.soft),
            tools: clean(self.tools),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Technical,
    Soft,
    Tools,
}

impl SkillCategory {
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Technical => "Technical",
            SkillCategory::Soft => "Soft Skills",
            SkillCategory::Tools => "Tools",
        }
    }
}

impl std::fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SkillCategory::Technical => "technical",
            SkillCategory::Soft => "soft",
            SkillCategory::Tools => "tools",
        })
    }
}

/// The two shapes `skills` has been persisted in.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SkillsRecord {
    Flat(String),
    Categorized(Skills),
}

impl SkillsRecord {
    pub fn normalize(self) -> Skills {
        match self {
            SkillsRecord::Flat(raw) => Skills::from_flat(&raw),
            SkillsRecord::Categorized(skills) => skills.normalized(),
        }
    }
}

fn deserialize_skills<'de, D>(deserializer: D) -> Result<Skills, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(SkillsRecord::deserialize(deserializer)?.normalize())
}

pub fn split_skill_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// The fixed document behind "load sample".
pub fn sample_document() -> ResumeDocument {
    ResumeDocument {
        personal: PersonalInfo {
            name: "Divya Sharma".to_string(),
            email: "divya.sharma@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            location: "Bangalore, India".to_string(),
        },
        summary: "Full stack developer who builds scalable web applications with React and \
                  Node.js. Focused on performance optimization and clean code architecture."
            .to_string(),
        education: vec![EducationEntry {
            school: "KodNest Institute".to_string(),
            degree: "Full Stack Web Development".to_string(),
            year: "2025".to_string(),
        }],
        experience: vec![ExperienceEntry {
            company: "Tech Solutions".to_string(),
            role: "Frontend Intern".to_string(),
            duration: "June 2024 - Dec 2024".to_string(),
            description: "Developed 10+ responsive UI components.".to_string(),
        }],
        projects: vec![ProjectEntry {
            title: "AI Resume Builder".to_string(),
            tech: "React, Vite".to_string(),
            description: "Built a resume platform with live scoring.".to_string(),
        }],
        skills: Skills {
            technical: split_skill_list("React, JavaScript, CSS, HTML, Node.js, SQL"),
            soft: vec![],
            tools: split_skill_list("Git"),
        },
        links: Links {
            github: "https://github.com/Divya07-22".to_string(),
            linkedin: "https://linkedin.com/in/divyasharma".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_yields_default_document() {
        let doc: ResumeDocument = serde_json::from_value(json!({})).unwrap();
        assert_eq!(doc, ResumeDocument::default());
    }

    #[test]
    fn test_flat_skills_are_split_trimmed_and_filtered() {
        let doc: ResumeDocument =
            serde_json::from_value(json!({ "skills": " React, ,Rust ,  SQL,," })).unwrap();
        assert_eq!(doc.skills.technical, vec!["React", "Rust", "SQL"]);
        assert!(doc.skills.soft.is_empty());
        assert!(doc.skills.tools.is_empty());
    }

    #[test]
    fn test_categorized_skills_are_kept() {
        let doc: ResumeDocument = serde_json::from_value(json!({
            "skills": { "technical": ["Rust"], "soft": ["Mentoring", " "], "tools": ["Git"] }
        }))
        .unwrap();
        assert_eq!(doc.skills.technical, vec!["Rust"]);
        assert_eq!(doc.skills.soft, vec!["Mentoring"]);
        assert_eq!(doc.skills.tools, vec!["Git"]);
        assert_eq!(doc.skills.total(), 3);
    }

    #[test]
    fn test_tech_stack_alias_accepted() {
        let doc: ResumeDocument = serde_json::from_value(json!({
            "projects": [{ "title": "CLI", "techStack": "Rust", "description": "" }]
        }))
        .unwrap();
        assert_eq!(doc.projects[0].tech, "Rust");
    }

    #[test]
    fn test_record_round_trip_preserves_document() {
        let doc = sample_document();
        let record = serde_json::to_string(&doc).unwrap();
        let reloaded: ResumeDocument = serde_json::from_str(&record).unwrap();
        assert_eq!(reloaded, doc);
    }

    #[test]
    fn test_legacy_record_round_trip_normalizes_once() {
        let legacy = json!({
            "personal": { "name": "A" },
            "skills": "Go, Rust",
        });
        let first: ResumeDocument = serde_json::from_value(legacy).unwrap();
        let again: ResumeDocument =
            serde_json::from_str(&serde_json::to_string(&first).unwrap()).unwrap();
        assert_eq!(first, again);
        assert_eq!(again.skills.technical, vec!["Go", "Rust"]);
    }

    #[test]
    fn test_education_completeness_requires_all_fields() {
        let mut edu = EducationEntry {
            school: "X".into(),
            degree: "Y".into(),
            year: "2025".into(),
        };
        assert!(edu.is_complete());
        edu.year = "  ".into();
        assert!(!edu.is_complete());
    }

    #[test]
    fn test_skill_categories_skip_empty() {
        let skills = Skills {
            technical: vec!["Rust".into()],
            soft: vec![],
            tools: vec!["Git".into()],
        };
        let cats: Vec<_> = skills.categories().into_iter().map(|(c, _)| c).collect();
        assert_eq!(cats, vec![SkillCategory::Technical, SkillCategory::Tools]);
    }
}
