//! CSV rendering for the per-place review export.
use crate::models::review::Review;

pub const CSV_HEADER: &str = "ID,Place,Review,Rating";

// BOM so spreadsheet imports detect UTF-8 and render Korean text intact.
const UTF8_BOM: &str = "\u{feff}";

/// Renders reviews as `ID,Place,Review,Rating` CSV: BOM, header line,
/// one row per review. Callers are expected to reject the empty case
/// before rendering; an empty slice still yields a header-only file.
pub fn reviews_to_csv(reviews: &[Review]) -> String {
    let mut out = String::from(UTF8_BOM);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for review in reviews {
        out.push_str(&review.id.to_string());
        out.push(',');
        out.push_str(&field(&review.place));
        out.push(',');
        out.push_str(&field(&review.text));
        out.push(',');
        out.push_str(&review.rating.to_string());
        out.push('\n');
    }
    out
}

// RFC 4180 quoting: only fields containing a comma, quote, or line break
// need to be wrapped, with embedded quotes doubled.
fn field(value: &str) -> String {
    if value.contains(|c| matches!(c, ',' | '"' | '\n' | '\r')) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(id: i64, text: &str) -> Review {
        Review {
            id,
            place: "성심당 본점".to_string(),
            text: text.to_string(),
            rating: 5,
        }
    }

    #[test]
    fn header_plus_one_line_per_review() {
        let csv = reviews_to_csv(&[review(1, "빵이 정말 맛있어요!"), review(2, "또 올게요")]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "\u{feff}ID,Place,Review,Rating");
        assert_eq!(lines[1], "1,성심당 본점,빵이 정말 맛있어요!,5");
        assert_eq!(lines[2], "2,성심당 본점,또 올게요,5");
    }

    #[test]
    fn starts_with_utf8_bom() {
        assert!(reviews_to_csv(&[]).starts_with('\u{feff}'));
    }

    #[test]
    fn quotes_fields_with_separators() {
        let csv = reviews_to_csv(&[review(7, "빵, 커피 \"모두\" 최고")]);
        assert!(csv.contains("\"빵, 커피 \"\"모두\"\" 최고\""));
    }
}
