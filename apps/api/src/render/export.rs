use crate::models::resume::ResumeDocument;
use crate::render::renderer::NAME_PLACEHOLDER;

/// Plain-text rendering for the clipboard.
///
/// Fixed order: identity header, SUMMARY, SKILLS, EXPERIENCE, PROJECTS,
/// EDUCATION. Empty sections are left out.
pub fn plain_text(doc: &ResumeDocument) -> String {
    let p = &doc.personal;
    let mut out = String::new();

    let name = p.name.trim();
    out.push_str(if name.is_empty() { NAME_PLACEHOLDER } else { name });
    out.push('\n');
    push_line(&mut out, &join(&[p.email.as_str(), p.phone.as_str(), p.location.as_str()], " | "));
    push_line(
        &mut out,
        &join(
            &[
                prefixed("GitHub: ", &doc.links.github).as_str(),
                prefixed("LinkedIn: ", &doc.links.linkedin).as_str(),
            ],
            " | ",
        ),
    );

    if !doc.summary.trim().is_empty() {
        out.push_str("\nSUMMARY\n");
        push_line(&mut out, doc.summary.trim());
    }

    if !doc.skills.is_empty() {
        out.push_str("\nSKILLS\n");
        for (category, items) in doc.skills.categories() {
            out.push_str(&format!("{}: {}\n", category.label(), items.join(", ")));
        }
    }

    if !doc.experience.is_empty() {
        out.push_str("\nEXPERIENCE\n");
        for e in &doc.experience {
            let title = join(&[e.role.as_str(), e.company.as_str()], " at ");
            push_line(&mut out, &with_detail(&title, &e.duration));
            push_line(&mut out, e.description.trim());
        }
    }

    if !doc.projects.is_empty() {
        out.push_str("\nPROJECTS\n");
        for proj in &doc.projects {
            push_line(&mut out, &with_detail(proj.title.trim(), &proj.tech));
            push_line(&mut out, proj.description.trim());
        }
    }

    if !doc.education.is_empty() {
        out.push_str("\nEDUCATION\n");
        for e in &doc.education {
            let title = join(&[e.degree.as_str(), e.school.as_str()], ", ");
            push_line(&mut out, &with_detail(&title, &e.year));
        }
    }

    out.trim_end().to_string()
}

fn push_line(out: &mut String, line: &str) {
    if !line.is_empty() {
        out.push_str(line);
        out.push('\n');
    }
}

fn join(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

fn prefixed(prefix: &str, value: &str) -> String {
    if value.trim().is_empty() {
        String::new()
    } else {
        format!("{prefix}{}", value.trim())
    }
}

/// `title (detail)`, or whichever of the two is present.
fn with_detail(title: &str, detail: &str) -> String {
    match (title.trim(), detail.trim()) {
        ("", d) => d.to_string(),
        (t, "") => t.to_string(),
        (t, d) => format!("{t} ({d})"),
    }
}
