//! Terminal rendering for filtered views.
//!
//! Pure string builders so output stays deterministic and testable.

use folio_core::{Certification, Resource, ToolkitEntry};
use std::fmt::Write;

const PROGRESS_BAR_WIDTH: usize = 20;

pub fn resources(items: &[&Resource]) -> String {
    if items.is_empty() {
        return "No resources match your search.\n".to_string();
    }
    let mut out = String::new();
    for resource in items {
        let _ = writeln!(out, "{}", resource.title);
        let _ = writeln!(out, "  {}", resource.url);
        if !resource.note.is_empty() {
            let _ = writeln!(out, "  {}", resource.note);
        }
        push_tags(&mut out, &resource.tags);
    }
    out
}

pub fn certifications(items: &[&Certification]) -> String {
    if items.is_empty() {
        return "No certifications match your search.\n".to_string();
    }
    let mut out = String::new();
    for cert in items {
        let _ = writeln!(out, "{} [{}]", cert.name, cert.status.label());
        let _ = writeln!(out, "  {}", cert.subtitle());
        if !cert.desc.is_empty() {
            let _ = writeln!(out, "  {}", cert.desc);
        }
        if cert.shows_progress() {
            let _ = writeln!(out, "  {}", progress_bar(cert.effective_progress()));
        }
    }
    out
}

pub fn toolkit(entries: &[ToolkitEntry<'_>]) -> String {
    if entries.is_empty() {
        return "No toolkit items match your search.\n".to_string();
    }
    let mut out = String::new();
    for entry in entries {
        let marker = if entry.is_open { "v" } else { ">" };
        let _ = writeln!(out, "{marker} {}", entry.item.title);
        if !entry.item.note.is_empty() {
            let _ = writeln!(out, "  {}", entry.item.note);
        }
        push_tags(&mut out, &entry.item.tags);
        if entry.shows_content {
            if let Some(content) = &entry.item.content {
                for line in content.lines() {
                    let _ = writeln!(out, "  | {line}");
                }
            }
        }
    }
    out
}

/// `Learning progress [#####.....] 50%` style bar; input is already clamped.
pub fn progress_bar(percent: u8) -> String {
    let filled = usize::from(percent) * PROGRESS_BAR_WIDTH / 100;
    format!(
        "Learning progress [{}{}] {percent}%",
        "#".repeat(filled),
        ".".repeat(PROGRESS_BAR_WIDTH - filled)
    )
}

fn push_tags(out: &mut String, tags: &[String]) {
    if !tags.is_empty() {
        let _ = writeln!(out, "  [{}]", tags.join(", "));
    }
}
