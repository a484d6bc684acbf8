// src/export.rs

use crate::models::paper::PastPaper;

pub const CSV_HEADER: &str = "Subject,Year,Paper,Score,Date Completed,Time Spent,Notes";

/// Renders the record list as CSV, newest first in whatever order the
/// caller supplies.
///
/// Field rules: the score carries two decimals and a trailing `%`; time
/// spent renders as "N minutes" and is blank when absent or zero; notes are
/// wrapped in double quotes with embedded quotes doubled, blank when absent
/// or empty. Rows are joined with `\n` and there is no trailing newline.
pub fn to_csv(papers: &[PastPaper]) -> String {
    let mut lines = Vec::with_capacity(papers.len() + 1);
    lines.push(CSV_HEADER.to_string());

    for paper in papers {
        let time_spent = match paper.time_spent {
            Some(minutes) if minutes != 0 => format!("{} minutes", minutes),
            _ => String::new(),
        };
        let notes = match paper.notes.as_deref() {
            Some(notes) if !notes.is_empty() => format!("\"{}\"", notes.replace('"', "\"\"")),
            _ => String::new(),
        };

        lines.push(format!(
            "{},{},{},{}%,{},{},{}",
            paper.subject,
            paper.year,
            paper.paper_number,
            paper.score,
            paper.date_completed,
            time_spent,
            notes
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::score::Score;

    fn paper(subject: &str, notes: Option<&str>, time_spent: Option<i64>) -> PastPaper {
        PastPaper {
            id: 1,
            subject: subject.to_string(),
            year: 2024,
            paper_number: "2".to_string(),
            score: Score::from_f64(85.5),
            date_completed: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            time_spent,
            notes: notes.map(str::to_string),
        }
    }

    #[test]
    fn empty_list_renders_header_only() {
        assert_eq!(to_csv(&[]), CSV_HEADER);
    }

    #[test]
    fn renders_score_with_percent_and_two_decimals() {
        let csv = to_csv(&[paper("Maths", None, Some(90))]);
        assert_eq!(
            csv,
            format!("{CSV_HEADER}\nMaths,2024,2,85.50%,2024-06-01,90 minutes,")
        );
    }

    #[test]
    fn quotes_and_escapes_notes() {
        let csv = to_csv(&[paper("Maths", Some("went \"ok\", review algebra"), None)]);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.ends_with(",\"went \"\"ok\"\", review algebra\""));
    }

    #[test]
    fn blank_fields_for_missing_zero_and_empty_values() {
        let csv = to_csv(&[
            paper("Maths", Some(""), Some(0)),
            paper("Maths", None, None),
        ]);
        for row in csv.lines().skip(1) {
            assert!(row.ends_with("2024-06-01,,"));
        }
    }

    #[test]
    fn no_trailing_newline() {
        let csv = to_csv(&[paper("Maths", None, None)]);
        assert!(!csv.ends_with('\n'));
    }
}
