//! Server-rendered questionnaire page.
//!
//! One `<select>` per symptom (Absent/Present, default Absent), then either the
//! ranked summary or an informational notice, and the disclaimer on every render.
//! All dynamic text goes through `html-escape`.

use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write as _;

use crate::report::{AssessmentView, DISCLAIMER, PAGE_TITLE, PROMPT};
use crate::symptom::{Symptom, SymptomVector};

/// Render the full page. `view` is `None` before the first submission.
pub fn render(selected: &SymptomVector, view: Option<&AssessmentView>) -> String {
    let mut html = String::with_capacity(4096);

    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <link rel=\"stylesheet\" href=\"/static/style.css\">\n</head>\n<body>\n\
         <h1>{title}</h1>\n<hr>\n",
        title = encode_text(PAGE_TITLE)
    );

    // --- form ---
    let _ = writeln!(html, "<form method=\"post\" action=\"/\">");
    let _ = writeln!(html, "<h2>{}</h2>", encode_text(PROMPT));
    for symptom in Symptom::ALL {
        write_selector(&mut html, symptom, selected.is_present(symptom));
    }
    let _ = writeln!(html, "<button type=\"submit\">Show summary</button>\n</form>\n<hr>");

    // --- outcome ---
    if let Some(view) = view {
        write_outcome(&mut html, view);
        let _ = writeln!(html, "<hr>");
    }

    let _ = write!(
        html,
        "<p class=\"disclaimer\">{}</p>\n</body>\n</html>\n",
        encode_text(DISCLAIMER)
    );
    html
}

fn write_selector(html: &mut String, symptom: Symptom, present: bool) {
    let key = encode_double_quoted_attribute(symptom.key());
    let (absent_sel, present_sel) = if present {
        ("", " selected")
    } else {
        (" selected", "")
    };
    let _ = writeln!(
        html,
        "<div class=\"symptom\"><label for=\"{key}\">{label}</label>\
         <select id=\"{key}\" name=\"{key}\">\
         <option value=\"Absent\"{absent_sel}>Absent</option>\
         <option value=\"Present\"{present_sel}>Present</option>\
         </select></div>",
        label = encode_text(symptom.label()),
    );
}

fn write_outcome(html: &mut String, view: &AssessmentView) {
    if !view.warnings.is_empty() {
        let _ = writeln!(html, "<ul class=\"warning-list\">");
        for w in &view.warnings {
            let _ = writeln!(html, "<li>{}</li>", encode_text(w));
        }
        let _ = writeln!(html, "</ul>");
    }

    if let Some(msg) = view.message {
        let _ = writeln!(html, "<p class=\"notice\">{}</p>", encode_text(msg));
        return;
    }

    if let Some(heading) = view.heading {
        let _ = writeln!(html, "<h2>{}</h2>", encode_text(heading));
    }
    let _ = writeln!(html, "<ul class=\"results\">");
    for r in &view.results {
        let _ = writeln!(
            html,
            "<li><strong>{}</strong> — {}</li>",
            encode_text(r.entry.mineral.name()),
            encode_text(r.entry.likelihood.label())
        );
    }
    let _ = writeln!(html, "</ul>");
}
