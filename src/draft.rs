// SPDX-License-Identifier: MPL-2.0
//! Newsletter draft content.
//!
//! A draft is an ordered list of titled sections. Imported files use a
//! minimal convention: lines starting with `## ` open a new section, and
//! everything up to the next heading is its body. Files without headings
//! import as a single section.

/// One titled section of the newsletter draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub body: String,
}

impl Section {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// The bundled template used when no draft file is supplied.
#[must_use]
pub fn sample_sections() -> Vec<Section> {
    vec![
        Section::new(
            "Top Stories",
            "Desk highlights and rating changes since the last issue. \
             Replace this block with the morning's headline calls.",
        ),
        Section::new(
            "Markets",
            "Overnight moves across equities, rates and FX, with one line of \
             color per region.",
        ),
        Section::new(
            "Credit",
            "Primary issuance, spread moves and the weekly strategy webcast \
             summary.",
        ),
        Section::new(
            "Research Notes",
            "Links to the full notes behind today's summaries, grouped by \
             sector.",
        ),
        Section::new(
            "Calendar",
            "Earnings, macro prints and desk events for the next five \
             sessions.",
        ),
    ]
}

/// Parses imported draft text into sections.
pub fn parse_sections(content: &str) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;
    let mut preamble: Vec<&str> = Vec::new();

    for line in content.lines() {
        if let Some(title) = line.strip_prefix("## ") {
            if let Some((done_title, body_lines)) = current.take() {
                sections.push(Section::new(done_title, body_lines.join("\n").trim().to_string()));
            }
            current = Some((title.trim().to_string(), Vec::new()));
        } else if let Some((_, body_lines)) = &mut current {
            body_lines.push(line);
        } else {
            preamble.push(line);
        }
    }

    if let Some((title, body_lines)) = current.take() {
        sections.push(Section::new(title, body_lines.join("\n").trim().to_string()));
    }

    if sections.is_empty() {
        let body = preamble.join("\n").trim().to_string();
        if !body.is_empty() {
            sections.push(Section::new("Draft", body));
        }
    }

    sections
}

/// Renders the draft as the plain text handed to the clipboard and exports.
#[must_use]
pub fn compose_text(sections: &[Section]) -> String {
    sections
        .iter()
        .map(|section| format!("## {}\n{}", section.title, section.body))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_titled_sections() {
        let sections = sample_sections();
        assert!(!sections.is_empty());
        assert!(sections.iter().all(|s| !s.title.is_empty()));
    }

    #[test]
    fn parse_splits_on_headings() {
        let content = "## Markets\nquiet session\n\n## Credit\nspreads tighter";
        let sections = parse_sections(content);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Markets");
        assert_eq!(sections[0].body, "quiet session");
        assert_eq!(sections[1].title, "Credit");
        assert_eq!(sections[1].body, "spreads tighter");
    }

    #[test]
    fn headingless_content_imports_as_one_section() {
        let sections = parse_sections("just a paragraph\nand another line");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Draft");
        assert_eq!(sections[0].body, "just a paragraph\nand another line");
    }

    #[test]
    fn empty_content_imports_nothing() {
        assert!(parse_sections("").is_empty());
        assert!(parse_sections("\n\n").is_empty());
    }

    #[test]
    fn preamble_before_first_heading_is_dropped() {
        let sections = parse_sections("ignored banner\n## Markets\nbody");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Markets");
    }

    #[test]
    fn compose_round_trips_through_parse() {
        let sections = vec![
            Section::new("Markets", "quiet session"),
            Section::new("Credit", "spreads tighter"),
        ];
        let text = compose_text(&sections);
        assert_eq!(parse_sections(&text), sections);
    }
}
