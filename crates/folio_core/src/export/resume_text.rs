//! Printable plain-text résumé.
//!
//! Backs the "Download / Print" action: one text document with the profile
//! header followed by experience, education, certifications and projects in
//! source order. Sections with no records are omitted.

use crate::content::store::ContentStore;
use std::fmt::Write;

/// Default filename for the printable résumé.
pub const RESUME_FILENAME: &str = "resume.txt";

/// Renders the whole store as plain text.
pub fn resume_plain_text(store: &ContentStore) -> String {
    let mut out = String::new();
    let profile = &store.profile;

    push_line(&mut out, &profile.name);
    push_line(&mut out, &profile.headline);
    let contact: Vec<&str> = [
        profile.location.as_str(),
        profile.email.as_str(),
        profile.phone.as_str(),
        profile.linkedin.as_str(),
    ]
    .into_iter()
    .filter(|value| !value.trim().is_empty())
    .collect();
    if !contact.is_empty() {
        push_line(&mut out, &contact.join(" | "));
    }
    if !profile.badges.is_empty() {
        push_line(&mut out, &profile.badges.join(" • "));
    }
    if !profile.summary.trim().is_empty() {
        out.push('\n');
        push_line(&mut out, &profile.summary);
    }

    if !store.experience.is_empty() {
        section(&mut out, "EXPERIENCE");
        for entry in &store.experience {
            let _ = writeln!(out, "{} • {}", entry.role, entry.company);
            push_line(&mut out, &entry.period);
            for bullet in &entry.bullets {
                let _ = writeln!(out, "  - {bullet}");
            }
            push_tags(&mut out, &entry.tags);
            out.push('\n');
        }
    }

    if !store.education.is_empty() {
        section(&mut out, "EDUCATION");
        for entry in &store.education {
            push_line(&mut out, &entry.degree);
            let _ = writeln!(out, "  {} ({})", entry.org, entry.year);
        }
        out.push('\n');
    }

    if !store.certifications.is_empty() {
        section(&mut out, "CERTIFICATIONS");
        for cert in &store.certifications {
            push_line(&mut out, &cert.name);
            let _ = writeln!(out, "  {}", cert.subtitle());
            if cert.shows_progress() {
                let _ = writeln!(out, "  Learning progress: {}%", cert.effective_progress());
            }
        }
        out.push('\n');
    }

    if !store.projects.is_empty() {
        section(&mut out, "PROJECTS");
        for project in &store.projects {
            push_line(&mut out, &project.name);
            let _ = writeln!(out, "  {}", project.desc);
            push_tags(&mut out, &project.tags);
        }
        out.push('\n');
    }

    let trimmed_len = out.trim_end().len();
    out.truncate(trimmed_len);
    out.push('\n');
    out
}

fn section(out: &mut String, title: &str) {
    if !out.ends_with("\n\n") {
        out.push('\n');
    }
    push_line(out, title);
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn push_tags(out: &mut String, tags: &[String]) {
    if !tags.is_empty() {
        let _ = writeln!(out, "  [{}]", tags.join(", "));
    }
}
