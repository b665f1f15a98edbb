use std::fmt::Write;

use chrono::NaiveDate;

use crate::models::{CycleInput, Prediction, ProjectedCycle};

/// Escape user-supplied text for embedding in markup.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Short display form, e.g. "Mon, Jan 29, 2024".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d, %Y").to_string()
}

/// The labeled summary rows for the current cycle. Notes are shown
/// only when present, escaped.
pub fn render_summary(input: &CycleInput, pred: &Prediction) -> String {
    let mut html = String::new();

    let rows = [
        ("🩸 Next period", format_date(pred.next_period)),
        (
            "📆 Current period window",
            format!(
                "{} – {}",
                format_date(input.start_date),
                format_date(pred.period_end)
            ),
        ),
        (
            "🌱 Fertile window",
            format!(
                "{} – {}",
                format_date(pred.fertile_start),
                format_date(pred.fertile_end)
            ),
        ),
        ("💡 Ovulation day", format_date(pred.ovulation_day)),
    ];

    for (label, value) in rows {
        let _ = writeln!(
            html,
            r#"<div class="item"><strong>{label}:</strong> {value}</div>"#
        );
    }

    if !input.notes.is_empty() {
        let _ = writeln!(
            html,
            r#"<div class="item"><strong>📝 Notes:</strong> {}</div>"#,
            escape_html(&input.notes)
        );
    }

    html
}

/// One card per projected cycle, titled by the month the cycle starts in.
pub fn render_months(projected: &[ProjectedCycle]) -> String {
    let mut html = String::new();

    for cycle in projected {
        let pred = &cycle.prediction;
        let _ = writeln!(html, r#"<div class="month">"#);
        let _ = writeln!(html, "  <h4>{}</h4>", cycle.start.format("%B %Y"));
        let _ = writeln!(
            html,
            r#"  <div class="meta">Cycle #{}</div>"#,
            cycle.cycle_number
        );
        let _ = writeln!(
            html,
            "  <div>🩸 Period: <strong>{}</strong> → {}</div>",
            format_date(cycle.start),
            format_date(pred.period_end)
        );
        let _ = writeln!(
            html,
            "  <div>💡 Ovulation: <strong>{}</strong></div>",
            format_date(pred.ovulation_day)
        );
        let _ = writeln!(
            html,
            "  <div>🌱 Fertile: {} – {}</div>",
            format_date(pred.fertile_start),
            format_date(pred.fertile_end)
        );
        let _ = writeln!(html, "</div>");
    }

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample_input(notes: &str) -> CycleInput {
        CycleInput {
            start_date: date("2024-01-01"),
            cycle_length: 28,
            period_length: 5,
            notes: notes.to_string(),
        }
    }

    #[test]
    fn formats_dates_like_the_ui() {
        assert_eq!(format_date(date("2024-01-29")), "Mon, Jan 29, 2024");
        assert_eq!(format_date(date("2024-01-05")), "Fri, Jan 5, 2024");
    }

    #[test]
    fn summary_lists_all_predicted_dates() {
        let input = sample_input("");
        let pred = prediction::predict(input.start_date, 28, 5);
        let html = render_summary(&input, &pred);

        assert!(html.contains("Mon, Jan 29, 2024"));
        assert!(html.contains("Mon, Jan 1, 2024 – Fri, Jan 5, 2024"));
        assert!(html.contains("Wed, Jan 10, 2024 – Mon, Jan 15, 2024"));
        assert!(!html.contains("Notes"));
    }

    #[test]
    fn notes_are_escaped() {
        let input = sample_input("<script>alert(1)</script>");
        let pred = prediction::predict(input.start_date, 28, 5);
        let html = render_summary(&input, &pred);

        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn escape_covers_the_usual_suspects() {
        assert_eq!(escape_html(r#"a<b & "c""#), "a&lt;b &amp; &quot;c&quot;");
    }

    #[test]
    fn months_renders_one_card_per_cycle() {
        let projected = prediction::project(date("2024-01-01"), 28, 5, 6);
        let html = render_months(&projected);

        assert_eq!(html.matches(r#"<div class="month">"#).count(), 6);
        assert!(html.contains("<h4>January 2024</h4>"));
        assert!(html.contains("Cycle #6"));
        assert!(html.contains("<h4>June 2024</h4>"));
    }
}
