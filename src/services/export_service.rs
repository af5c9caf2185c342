use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::io::BufWriter;

use crate::services::formatter_service::is_day_heading;

pub const TXT_FILENAME: &str = "TripTactix_Itinerary.txt";
pub const PDF_FILENAME: &str = "TripTactix_Itinerary.pdf";

// US letter with one-inch margins
const PAGE_WIDTH_MM: f32 = 215.9;
const PAGE_HEIGHT_MM: f32 = 279.4;
const MARGIN_MM: f32 = 25.4;
const LINE_HEIGHT_MM: f32 = 6.0;
const BLANK_LINE_MM: f32 = 3.0;
const BODY_FONT_SIZE: f32 = 11.0;
const HEADING_FONT_SIZE: f32 = 13.0;
const MAX_CHARS_PER_LINE: usize = 90;

/// Render the raw itinerary text as a simple line-oriented PDF.
///
/// Day and section heading lines are set in bold, everything else in the
/// regular face. Long lines are word-wrapped; the cursor starts a new page
/// when it runs past the bottom margin.
pub fn render_pdf(text: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        "TripTactix Itinerary",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );

    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let mut current_layer = doc.get_page(first_page).get_layer(first_layer);
    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;

    for line in text.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            y -= BLANK_LINE_MM;
            continue;
        }

        let heading = is_day_heading(line) || line.ends_with(':');
        let (font, font_size) = if heading {
            (&bold, HEADING_FONT_SIZE)
        } else {
            (&regular, BODY_FONT_SIZE)
        };

        for chunk in wrap_line(line, MAX_CHARS_PER_LINE) {
            if y < MARGIN_MM {
                let (page, layer) =
                    doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
                current_layer = doc.get_page(page).get_layer(layer);
                y = PAGE_HEIGHT_MM - MARGIN_MM;
            }
            current_layer.use_text(chunk, font_size, Mm(MARGIN_MM), Mm(y), font);
            y -= LINE_HEIGHT_MM;
        }
    }

    let mut bytes: Vec<u8> = Vec::new();
    {
        let mut writer = BufWriter::new(&mut bytes);
        doc.save(&mut writer)?;
    }
    Ok(bytes)
}

/// Greedy word wrap. Words longer than the limit get a line of their own.
fn wrap_line(line: &str, max_chars: usize) -> Vec<String> {
    let mut wrapped = Vec::new();
    let mut current = String::new();

    for word in line.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > max_chars {
            wrapped.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        wrapped.push(current);
    }

    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_line_respects_limit() {
        let wrapped = wrap_line("one two three four five", 9);
        assert_eq!(wrapped, vec!["one two", "three", "four five"]);
    }

    #[test]
    fn test_wrap_line_keeps_short_lines_whole() {
        assert_eq!(wrap_line("short line", 90), vec!["short line"]);
        assert!(wrap_line("", 90).is_empty());
    }

    #[test]
    fn test_render_pdf_produces_pdf_bytes() {
        let text = "Day 1 – Arrival\n\nMorning:\n- Check into hotel\n- Explore market\n\n💡 Travel Tip: Use the metro.\nBudget Estimate: $90";
        let bytes = render_pdf(text).expect("PDF rendering failed");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_pdf_handles_long_itineraries() {
        // More lines than fit on one page
        let text = (1..=120)
            .map(|i| format!("- Activity number {}", i))
            .collect::<Vec<_>>()
            .join("\n");
        let bytes = render_pdf(&text).expect("PDF rendering failed");
        assert!(bytes.starts_with(b"%PDF"));
    }
}
