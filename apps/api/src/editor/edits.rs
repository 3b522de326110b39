//! Incremental mutations issued by the editing surface.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::resume::{
    sample_document, EducationEntry, ExperienceEntry, ProjectEntry, ResumeDocument,
    SkillCategory, SkillsRecord,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("{section} has no item at index {index} (length {len})")]
    IndexOutOfRange {
        section: ListSection,
        index: usize,
        len: usize,
    },

    #[error("{section} entries have no field '{field}'")]
    UnknownField { section: ListSection, field: String },

    #[error("{category} skills have no item at index {index} (length {len})")]
    SkillIndexOutOfRange {
        category: SkillCategory,
        index: usize,
        len: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListSection {
    Education,
    Experience,
    Projects,
}

impl std::fmt::Display for ListSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ListSection::Education => "education",
            ListSection::Experience => "experience",
            ListSection::Projects => "projects",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalField {
    Name,
    Email,
    Phone,
    Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkField {
    Github,
    Linkedin,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DocumentEdit {
    SetPersonal {
        field: PersonalField,
        value: String,
    },
    SetSummary {
        value: String,
    },
    AddItem {
        section: ListSection,
    },
    UpdateItem {
        section: ListSection,
        index: usize,
        field: String,
        value: String,
    },
    RemoveItem {
        section: ListSection,
        index: usize,
    },
    /// Accepts the flat comma list or the categorized form.
    SetSkills {
        value: SkillsRecord,
    },
    AddSkill {
        category: SkillCategory,
        value: String,
    },
    RemoveSkill {
        category: SkillCategory,
        index: usize,
    },
    SetLink {
        link: LinkField,
        value: String,
    },
    Replace {
        document: Box<ResumeDocument>,
    },
    LoadSample,
}

/// Applies one edit, returning the new document. The input is consumed; on
/// error the caller keeps its previously stored value.
pub fn apply(mut doc: ResumeDocument, edit: DocumentEdit) -> Result<ResumeDocument, EditError> {
    match edit {
        DocumentEdit::SetPersonal { field, value } => {
            let p = &mut doc.personal;
            let slot = match field {
                PersonalField::Name => &mut p.name,
                PersonalField::Email => &mut p.email,
                PersonalField::Phone => &mut p.phone,
                PersonalField::Location => &mut p.location,
            };
            *slot = value;
        }
        DocumentEdit::SetSummary { value } => doc.summary = value,
        DocumentEdit::AddItem { section } => match section {
            ListSection::Education => doc.education.push(EducationEntry::default()),
            ListSection::Experience => doc.experience.push(ExperienceEntry::default()),
            ListSection::Projects => doc.projects.push(ProjectEntry::default()),
        },
        DocumentEdit::UpdateItem {
            section,
            index,
            field,
            value,
        } => {
            let slot = item_field(&mut doc, section, index, &field)?;
            *slot = value;
        }
        DocumentEdit::RemoveItem { section, index } => {
            let len = section_len(&doc, section);
            if index >= len {
                return Err(EditError::IndexOutOfRange {
                    section,
                    index,
                    len,
                });
            }
            match section {
                ListSection::Education => drop(doc.education.remove(index)),
                ListSection::Experience => drop(doc.experience.remove(index)),
                ListSection::Projects => drop(doc.projects.remove(index)),
            }
        }
        DocumentEdit::SetSkills { value } => doc.skills = value.normalize(),
        DocumentEdit::AddSkill { category, value } => {
            let value = value.trim();
            if !value.is_empty() {
                doc.skills.category_mut(category).push(value.to_string());
            }
        }
        DocumentEdit::RemoveSkill { category, index } => {
            let items = doc.skills.category_mut(category);
            if index >= items.len() {
                return Err(EditError::SkillIndexOutOfRange {
                    category,
                    index,
                    len: items.len(),
                });
            }
            items.remove(index);
        }
        DocumentEdit::SetLink { link, value } => match link {
            LinkField::Github => doc.links.github = value,
            LinkField::Linkedin => doc.links.linkedin = value,
        },
        DocumentEdit::Replace { document } => return Ok(*document),
        DocumentEdit::LoadSample => return Ok(sample_document()),
    }
    Ok(doc)
}

fn section_len(doc: &ResumeDocument, section: ListSection) -> usize {
    match section {
        ListSection::Education => doc.education.len(),
        ListSection::Experience => doc.experience.len(),
        ListSection::Projects => doc.projects.len(),
    }
}

fn item_field<'a>(
    doc: &'a mut ResumeDocument,
    section: ListSection,
    index: usize,
    field: &str,
) -> Result<&'a mut String, EditError> {
    let len = section_len(doc, section);
    let out_of_range = EditError::IndexOutOfRange {
        section,
        index,
        len,
    };
    let unknown = || EditError::UnknownField {
        section,
        field: field.to_string(),
    };

    match section {
        ListSection::Education => {
            let e = doc.education.get_mut(index).ok_or(out_of_range)?;
            match field {
                "school" => Ok(&mut e.school),
                "degree" => Ok(&mut e.degree),
                "year" => Ok(&mut e.year),
                _ => Err(unknown()),
            }
        }
        ListSection::Experience => {
            let e = doc.experience.get_mut(index).ok_or(out_of_range)?;
            match field {
                "company" => Ok(&mut e.company),
                "role" => Ok(&mut e.role),
                "duration" => Ok(&mut e.duration),
                "description" => Ok(&mut e.description),
                _ => Err(unknown()),
            }
        }
        ListSection::Projects => {
            let p = doc.projects.get_mut(index).ok_or(out_of_range)?;
            match field {
                "title" => Ok(&mut p.title),
                "tech" | "techStack" => Ok(&mut p.tech),
                "description" => Ok(&mut p.description),
                _ => Err(unknown()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn edit(value: serde_json::Value) -> DocumentEdit {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_set_personal_field() {
        let doc = apply(
            ResumeDocument::default(),
            edit(json!({ "op": "set_personal", "field": "email", "value": "a@b.c" })),
        )
        .unwrap();
        assert_eq!(doc.personal.email, "a@b.c");
    }

    #[test]
    fn test_add_update_remove_item() {
        let doc = apply(
            ResumeDocument::default(),
            edit(json!({ "op": "add_item", "section": "projects" })),
        )
        .unwrap();
        assert_eq!(doc.projects.len(), 1);

        let doc = apply(
            doc,
            edit(json!({
                "op": "update_item", "section": "projects", "index": 0,
                "field": "techStack", "value": "Rust"
            })),
        )
        .unwrap();
        assert_eq!(doc.projects[0].tech, "Rust");

        let doc = apply(
            doc,
            edit(json!({ "op": "remove_item", "section": "projects", "index": 0 })),
        )
        .unwrap();
        assert!(doc.projects.is_empty());
    }

    #[test]
    fn test_update_out_of_range_is_rejected() {
        let err = apply(
            ResumeDocument::default(),
            edit(json!({
                "op": "update_item", "section": "education", "index": 2,
                "field": "school", "value": "X"
            })),
        )
        .unwrap_err();
        assert_eq!(
            err,
            EditError::IndexOutOfRange {
                section: ListSection::Education,
                index: 2,
                len: 0
            }
        );
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let doc = apply(
            ResumeDocument::default(),
            edit(json!({ "op": "add_item", "section": "experience" })),
        )
        .unwrap();
        let err = apply(
            doc,
            edit(json!({
                "op": "update_item", "section": "experience", "index": 0,
                "field": "salary", "value": "lots"
            })),
        )
        .unwrap_err();
        assert!(matches!(err, EditError::UnknownField { .. }));
        assert_eq!(err.to_string(), "experience entries have no field 'salary'");
    }

    #[test]
    fn test_remove_out_of_range_is_rejected() {
        let err = apply(
            ResumeDocument::default(),
            edit(json!({ "op": "remove_item", "section": "experience", "index": 0 })),
        )
        .unwrap_err();
        assert!(matches!(err, EditError::IndexOutOfRange { len: 0, .. }));
    }

    #[test]
    fn test_set_skills_accepts_flat_string() {
        let doc = apply(
            ResumeDocument::default(),
            edit(json!({ "op": "set_skills", "value": "Rust, Go,, SQL " })),
        )
        .unwrap();
        assert_eq!(doc.skills.technical, vec!["Rust", "Go", "SQL"]);
    }

    #[test]
    fn test_add_and_remove_skill() {
        let doc = apply(
            ResumeDocument::default(),
            edit(json!({ "op": "add_skill", "category": "tools", "value": " Git " })),
        )
        .unwrap();
        assert_eq!(doc.skills.tools, vec!["Git"]);
        let doc = apply(
            doc,
            edit(json!({ "op": "add_skill", "category": "tools", "value": "  " })),
        )
        .unwrap();
        assert_eq!(doc.skills.tools.len(), 1);
        let doc = apply(
            doc,
            edit(json!({ "op": "remove_skill", "category": "tools", "index": 0 })),
        )
        .unwrap();
        assert!(doc.skills.is_empty());
    }

    #[test]
    fn test_remove_skill_out_of_range_is_rejected() {
        let doc = apply(
            ResumeDocument::default(),
            edit(json!({ "op": "add_skill", "category": "soft", "value": "Mentoring" })),
        )
        .unwrap();
        let err = apply(
            doc,
            edit(json!({ "op": "remove_skill", "category": "soft", "index": 1 })),
        )
        .unwrap_err();
        assert_eq!(
            err,
            EditError::SkillIndexOutOfRange {
                category: SkillCategory::Soft,
                index: 1,
                len: 1
            }
        );
        assert_eq!(err.to_string(), "soft skills have no item at index 1 (length 1)");
    }

    #[test]
    fn test_load_sample_replaces_document() {
        let doc = apply(
            ResumeDocument::default(),
            edit(json!({ "op": "load_sample" })),
        )
        .unwrap();
        assert_eq!(doc, sample_document());
    }

    #[test]
    fn test_replace_accepts_legacy_record() {
        let doc = apply(
            sample_document(),
            edit(json!({ "op": "replace", "document": { "skills": "A, B" } })),
        )
        .unwrap();
        assert_eq!(doc.skills.technical, vec!["A", "B"]);
        assert!(doc.experience.is_empty());
    }
}
