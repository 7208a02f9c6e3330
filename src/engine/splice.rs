use super::sections::Section;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use tracing::warn;

static FAVICON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<link rel="icon" type="image/png" href="[^"]*">"#).unwrap());

/// A rewritten document. `anchored` is false when the target could not be
/// found, in which case `document` is the input unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spliced {
    pub document: String,
    pub anchored: bool,
}

impl Spliced {
    fn untouched(document: &str) -> Self {
        Self {
            document: document.to_string(),
            anchored: false,
        }
    }
}

/// Replaces everything between the section's opening tag and its closing
/// boundary with `fragment`, optionally preceded by a `<!-- label -->` line.
/// Bytes outside that span are preserved.
pub fn splice_section(
    document: &str,
    section: Section,
    label: Option<&str>,
    fragment: &str,
) -> Spliced {
    let Some(inner) = section.locate(document) else {
        warn!("Section {} not found, leaving document unchanged", section);
        return Spliced::untouched(document);
    };

    let mut body = String::from("\n");
    if let Some(label) = label {
        body.push_str(&format!("        <!-- {} -->\n", label));
    }
    body.push_str(fragment);
    body.push_str(section.tail());

    let mut updated = String::with_capacity(document.len() - inner.len() + body.len());
    updated.push_str(&document[..inner.start]);
    updated.push_str(&body);
    updated.push_str(&document[inner.end..]);

    Spliced {
        document: updated,
        anchored: true,
    }
}

/// Points the page's PNG favicon `<link>` at `icon_url`.
pub fn replace_favicon(document: &str, icon_url: &str) -> Spliced {
    if !FAVICON.is_match(document) {
        return Spliced::untouched(document);
    }

    let tag = format!(r#"<link rel="icon" type="image/png" href="{}">"#, icon_url);
    Spliced {
        document: FAVICON.replacen(document, 1, NoExpand(tag.as_str())).into_owned(),
        anchored: true,
    }
}
