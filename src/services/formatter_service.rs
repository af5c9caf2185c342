const DAY_HEADING_STYLE: &str =
    "color: #2d6fa3; margin-top: 1.5rem; margin-bottom: 0.5rem; font-size: 1.1rem;";
const SECTION_HEADING_STYLE: &str =
    "color: #4a5568; margin-top: 1rem; margin-bottom: 0.3rem; font-size: 0.95rem; font-weight: 600;";
const TIP_STYLE: &str = "margin-top: 1rem; padding: 0.6rem; background: #f0f9ff; border-left: 3px solid #6ec1e4; color: #1e3a8a; font-size: 0.85rem;";
const BUDGET_STYLE: &str =
    "margin-top: 0.5rem; color: #f9a26c; font-weight: 600; font-size: 0.85rem;";
const LIST_STYLE: &str = "margin: 0; padding-left: 1.5rem; list-style-type: disc;";
const LIST_ITEM_STYLE: &str = "margin-bottom: 0.5rem; line-height: 1.6; color: #333;";
const PARAGRAPH_STYLE: &str = "margin-bottom: 0.5rem; line-height: 1.5; color: #333;";

/// How a trimmed, non-blank line should be rendered.
#[derive(Debug, PartialEq, Eq)]
enum LineKind {
    DayHeading,
    Bullet,
    TipCallout,
    BudgetCallout,
    SectionHeading,
    Paragraph,
}

/// Whether a `<ul>` container is currently open.
#[derive(Debug, PartialEq, Eq)]
enum ListState {
    Open,
    Closed,
}

/// First match wins. Bullets are checked before the keyword and colon rules
/// so a line like "- Budget: $200" stays a list item.
fn classify(line: &str) -> LineKind {
    if is_day_heading(line) {
        LineKind::DayHeading
    } else if line.starts_with('-') || line.starts_with('•') {
        LineKind::Bullet
    } else if line.contains("Tip") {
        LineKind::TipCallout
    } else if line.contains("Budget") {
        LineKind::BudgetCallout
    } else if line.ends_with(':') {
        LineKind::SectionHeading
    } else {
        LineKind::Paragraph
    }
}

/// Day headings need both the "Day" prefix and a dash separator further in;
/// a bare "Day 3" falls through to a plain paragraph.
pub(crate) fn is_day_heading(line: &str) -> bool {
    match line.strip_prefix("Day") {
        Some(rest) => rest.contains('–') || rest.contains('—') || rest.contains(" - "),
        None => false,
    }
}

/// Convert loosely-structured itinerary text into clean HTML.
///
/// Total over any input: unrecognized lines degrade to plain paragraphs and
/// the function never fails. Blank lines emit nothing but close an open list.
pub fn format_to_html(text: &str) -> String {
    let mut html_output: Vec<String> = Vec::new();
    let mut list_state = ListState::Closed;

    for line in text.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            close_list(&mut html_output, &mut list_state);
            continue;
        }

        match classify(line) {
            LineKind::DayHeading => {
                close_list(&mut html_output, &mut list_state);
                html_output.push(format!(
                    "<h3 style=\"{}\">{}</h3>",
                    DAY_HEADING_STYLE, line
                ));
            }
            LineKind::Bullet => {
                let item = line.trim_start_matches(&['-', '•']).trim_start();
                if list_state == ListState::Closed {
                    html_output.push(format!("<ul style=\"{}\">", LIST_STYLE));
                    list_state = ListState::Open;
                }
                html_output.push(format!(
                    "<li style=\"{}\">{}</li>",
                    LIST_ITEM_STYLE, item
                ));
            }
            LineKind::TipCallout => {
                close_list(&mut html_output, &mut list_state);
                let tip = line.trim_start_matches('💡').trim_start();
                html_output.push(format!("<p style=\"{}\">💡 {}</p>", TIP_STYLE, tip));
            }
            LineKind::BudgetCallout => {
                close_list(&mut html_output, &mut list_state);
                html_output.push(format!("<p style=\"{}\">{}</p>", BUDGET_STYLE, line));
            }
            LineKind::SectionHeading => {
                close_list(&mut html_output, &mut list_state);
                html_output.push(format!(
                    "<h4 style=\"{}\">{}</h4>",
                    SECTION_HEADING_STYLE, line
                ));
            }
            LineKind::Paragraph => {
                close_list(&mut html_output, &mut list_state);
                html_output.push(format!("<p style=\"{}\">{}</p>", PARAGRAPH_STYLE, line));
            }
        }
    }

    close_list(&mut html_output, &mut list_state);

    html_output.join("\n")
}

fn close_list(html_output: &mut Vec<String>, list_state: &mut ListState) {
    if *list_state == ListState::Open {
        html_output.push("</ul>".to_string());
        *list_state = ListState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_produces_empty_output() {
        assert_eq!(format_to_html(""), "");
        assert_eq!(format_to_html("\n\n\n"), "");
    }

    #[test]
    fn test_day_heading_requires_separator() {
        assert_eq!(classify("Day 1 – Arrival"), LineKind::DayHeading);
        assert_eq!(classify("Day 2 — Old Town"), LineKind::DayHeading);
        assert_eq!(classify("Day 4 - Beach Hop"), LineKind::DayHeading);
        // No dash separator: falls through to a plain paragraph
        assert_eq!(classify("Day 3"), LineKind::Paragraph);
    }

    #[test]
    fn test_bullet_beats_embedded_keywords() {
        assert_eq!(classify("- Budget: $200"), LineKind::Bullet);
        assert_eq!(classify("- Morning:"), LineKind::Bullet);
        assert_eq!(classify("• Travel Tip stand"), LineKind::Bullet);

        let html = format_to_html("- Budget: $200");
        assert!(html.contains("<li"));
        assert!(!html.contains("#f9a26c"));
    }

    #[test]
    fn test_tip_beats_budget() {
        assert_eq!(classify("Travel Tip: Budget your cash"), LineKind::TipCallout);
        assert_eq!(classify("Budget Estimate: $120"), LineKind::BudgetCallout);
    }

    #[test]
    fn test_section_heading_on_trailing_colon() {
        assert_eq!(classify("Morning:"), LineKind::SectionHeading);
        assert_eq!(classify("Evening plans"), LineKind::Paragraph);
    }

    #[test]
    fn test_full_itinerary_ordering() {
        let input = "Day 1 – Arrival\n- Check into hotel\n- Explore market\nTips: Use metro.";
        let html = format_to_html(input);

        let h3 = html.find("Day 1 – Arrival").unwrap();
        let ul = html.find("<ul").unwrap();
        let first = html.find("Check into hotel").unwrap();
        let second = html.find("Explore market").unwrap();
        let close = html.find("</ul>").unwrap();
        let tip = html.find("💡 Tips: Use metro.").unwrap();

        assert!(h3 < ul);
        assert!(ul < first);
        assert!(first < second);
        assert!(second < close);
        assert!(close < tip);

        assert_eq!(html.matches("<li").count(), 2);
    }

    #[test]
    fn test_blank_line_splits_lists() {
        let input = "- one\n- two\n\n- three";
        let html = format_to_html(input);

        assert_eq!(html.matches("<ul").count(), 2);
        assert_eq!(html.matches("</ul>").count(), 2);
        assert_eq!(html.matches("<li").count(), 3);
    }

    #[test]
    fn test_lists_always_balanced() {
        let inputs = [
            "- dangling bullet at end of input",
            "- a\nparagraph\n- b",
            "Morning:\n- a\n- b\nAfternoon:\n- c",
            "",
            "just text",
        ];
        for input in inputs {
            let html = format_to_html(input);
            assert_eq!(
                html.matches("<ul").count(),
                html.matches("</ul>").count(),
                "unbalanced list containers for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_blank_lines_emit_nothing() {
        let html = format_to_html("one\n\n\ntwo");
        assert_eq!(html.matches("<p").count(), 2);
        for fragment in html.split('\n') {
            assert!(!fragment.trim().is_empty());
        }
    }

    #[test]
    fn test_icon_not_doubled_on_prompted_tip_lines() {
        let html = format_to_html("💡 Travel Tip: Carry small change.");
        assert_eq!(html.matches("💡").count(), 1);
        assert!(html.contains("💡 Travel Tip: Carry small change."));
    }

    #[test]
    fn test_deterministic_output() {
        let input = "Day 1 – Arrival\n- Check in\nBudget Estimate: $90";
        assert_eq!(format_to_html(input), format_to_html(input));
    }
}
