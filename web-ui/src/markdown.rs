//! Renderer for the markdown subset the generation service emits.
//!
//! Line-oriented and stateless: each line is classified on its own leading
//! characters, so consecutive `- ` lines are independent list items rather
//! than a grouped list. The only inline construct is `[label](url)`; there
//! is no bold/italic, nesting, or bracket escaping.

/// A fragment of a list item or paragraph line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Link { label: String, url: String },
}

/// A structural unit of rendered output, one per input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Blank line, rendered as a paragraph break.
    Break,
    Heading { level: u8, text: String },
    ListItem(Vec<Inline>),
    Paragraph(Vec<Inline>),
}

/// Render a markdown string into blocks. Pure; empty input yields an
/// empty sequence.
pub fn render(markdown: &str) -> Vec<Block> {
    markdown.lines().map(classify_line).collect()
}

fn classify_line(line: &str) -> Block {
    let line = line.trim();
    if line.is_empty() {
        Block::Break
    } else if let Some(text) = line.strip_prefix("# ") {
        Block::Heading {
            level: 1,
            text: text.to_string(),
        }
    } else if let Some(text) = line.strip_prefix("## ") {
        Block::Heading {
            level: 2,
            text: text.to_string(),
        }
    } else if let Some(text) = line.strip_prefix("### ") {
        Block::Heading {
            level: 3,
            text: text.to_string(),
        }
    } else if let Some(text) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        Block::ListItem(parse_inline(text))
    } else {
        Block::Paragraph(parse_inline(line))
    }
}

/// Scan a line for `[label](url)` links, left to right, non-overlapping.
/// Label stops at the first `]`, url at the first `)`; both must be
/// non-empty. Text around matches is preserved verbatim, and a line with
/// stray `[` or `(` that never completes the pattern comes back as plain
/// text.
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let bytes = text.as_bytes();
    let mut parts = Vec::new();
    let mut cursor = 0;
    let mut search = 0;

    while search < bytes.len() {
        let Some(open) = find_byte(bytes, b'[', search) else {
            break;
        };
        let Some(close) = find_byte(bytes, b']', open + 1) else {
            break;
        };
        // Label must be non-empty and immediately followed by `(`.
        if close == open + 1 || bytes.get(close + 1) != Some(&b'(') {
            search = open + 1;
            continue;
        }
        let Some(paren) = find_byte(bytes, b')', close + 2) else {
            break;
        };
        if paren == close + 2 {
            search = open + 1;
            continue;
        }

        if open > cursor {
            parts.push(Inline::Text(text[cursor..open].to_string()));
        }
        parts.push(Inline::Link {
            label: text[open + 1..close].to_string(),
            url: text[close + 2..paren].to_string(),
        });
        cursor = paren + 1;
        search = cursor;
    }

    if cursor < text.len() {
        parts.push(Inline::Text(text[cursor..].to_string()));
    }
    parts
}

fn find_byte(bytes: &[u8], needle: u8, from: usize) -> Option<usize> {
    bytes[from..]
        .iter()
        .position(|&b| b == needle)
        .map(|offset| from + offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Inline {
        Inline::Text(s.to_string())
    }

    fn link(label: &str, url: &str) -> Inline {
        Inline::Link {
            label: label.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn empty_input_yields_empty_sequence() {
        assert!(render("").is_empty());
    }

    #[test]
    fn blank_lines_yield_break_markers() {
        assert_eq!(render("\n\n"), vec![Block::Break, Block::Break]);
        assert_eq!(render("   \n\t"), vec![Block::Break, Block::Break]);
    }

    #[test]
    fn headings_classified_by_prefix() {
        assert_eq!(
            render("# One\n## Two\n### Three"),
            vec![
                Block::Heading {
                    level: 1,
                    text: "One".to_string()
                },
                Block::Heading {
                    level: 2,
                    text: "Two".to_string()
                },
                Block::Heading {
                    level: 3,
                    text: "Three".to_string()
                },
            ]
        );
    }

    #[test]
    fn heading_without_space_is_a_paragraph() {
        assert_eq!(render("#NoSpace"), vec![Block::Paragraph(vec![text("#NoSpace")])]);
    }

    #[test]
    fn list_items_accept_dash_and_star_markers() {
        assert_eq!(
            render("- first\n* second"),
            vec![
                Block::ListItem(vec![text("first")]),
                Block::ListItem(vec![text("second")]),
            ]
        );
    }

    #[test]
    fn consecutive_list_items_stay_independent() {
        let blocks = render("- a\n- b\n- c");
        assert_eq!(blocks.len(), 3);
        assert!(blocks.iter().all(|b| matches!(b, Block::ListItem(_))));
    }

    #[test]
    fn bare_link_list_item_has_single_link_inline() {
        assert_eq!(
            render("- [GitHub](https://x)"),
            vec![Block::ListItem(vec![link("GitHub", "https://x")])]
        );
    }

    #[test]
    fn links_interleave_with_plain_text() {
        assert_eq!(
            parse_inline("see [a](b) and [c](d)!"),
            vec![
                text("see "),
                link("a", "b"),
                text(" and "),
                link("c", "d"),
                text("!"),
            ]
        );
    }

    #[test]
    fn unmatched_brackets_fall_through_as_text() {
        assert_eq!(parse_inline("a [broken link"), vec![text("a [broken link")]);
        assert_eq!(parse_inline("paren (only"), vec![text("paren (only")]);
        assert_eq!(parse_inline("[label] no url"), vec![text("[label] no url")]);
        assert_eq!(parse_inline("[](url)"), vec![text("[](url)")]);
        assert_eq!(parse_inline("[label]()"), vec![text("[label]()")]);
    }

    #[test]
    fn failed_candidate_does_not_hide_later_link() {
        assert_eq!(
            parse_inline("[x] y [a](b)"),
            vec![text("[x] y "), link("a", "b")]
        );
    }

    #[test]
    fn url_runs_to_first_closing_paren() {
        assert_eq!(
            parse_inline("[a](https://x.dev/p(1)"),
            vec![link("a", "https://x.dev/p(1")]
        );
    }

    #[test]
    fn lines_are_trimmed_before_classification() {
        assert_eq!(
            render("   # Padded"),
            vec![Block::Heading {
                level: 1,
                text: "Padded".to_string()
            }]
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        let input = "# T\n\n- [a](b)\ntail";
        assert_eq!(render(input), render(input));
    }
}
