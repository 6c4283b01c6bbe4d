//! Static HTML export.
//!
//! The export is a one-way artifact: a self-contained page with the person's
//! name, tagline, bio and a grid of projects. It is never read back.

use std::fmt::Write as _;

use crate::models::{PortfolioData, Theme};

pub const EXPORT_FILE_NAME: &str = "portfolio-export.html";

/// Render the document as a standalone HTML page styled with `theme`.
#[must_use]
pub fn render_html(data: &PortfolioData, theme: Theme) -> String {
    let name = escape_html(fallback(&data.full_name, "Your Name"));
    let tagline = escape_html(fallback(&data.tagline, "Creative Professional"));
    let bio = escape_html(&data.bio);
    let accent = theme.accent();

    let mut output = String::new();
    let _ = writeln!(output, "<!DOCTYPE html>");
    let _ = writeln!(output, "<html lang=\"en\">");
    let _ = writeln!(output, "<head>");
    let _ = writeln!(output, "  <meta charset=\"UTF-8\">");
    let _ = writeln!(
        output,
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
    );
    let _ = writeln!(output, "  <title>{name} | Portfolio</title>");
    let _ = writeln!(output, "  <style>");
    let _ = writeln!(
        output,
        "    body {{ font-family: 'Inter', system-ui, sans-serif; background-color: #f9fafb; color: #111827; margin: 0; }}"
    );
    let _ = writeln!(
        output,
        "    .container {{ max-width: 56rem; margin: 0 auto; padding: 5rem 2rem; }}"
    );
    let _ = writeln!(
        output,
        "    h1 {{ font-size: 3rem; font-weight: 900; margin: 0 0 0.5rem; }}"
    );
    let _ = writeln!(
        output,
        "    .tagline {{ color: {accent}; font-weight: 700; text-transform: uppercase; letter-spacing: 0.1em; }}"
    );
    let _ = writeln!(
        output,
        "    .grid {{ display: grid; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); gap: 1.5rem; }}"
    );
    let _ = writeln!(
        output,
        "    .card {{ background: #ffffff; border-radius: 1.5rem; padding: 2rem; border: 1px solid #e5e7eb; }}"
    );
    let _ = writeln!(
        output,
        "    .card a {{ color: {accent}; font-weight: 900; font-size: 10px; text-transform: uppercase; letter-spacing: 0.1em; }}"
    );
    let _ = writeln!(output, "  </style>");
    let _ = writeln!(output, "</head>");
    let _ = writeln!(output, "<body class=\"theme-{theme}\">");
    let _ = writeln!(output, "  <div class=\"container\">");
    let _ = writeln!(output, "    <header>");
    let _ = writeln!(output, "      <h1>{name}</h1>");
    let _ = writeln!(output, "      <p class=\"tagline\">{tagline}</p>");
    let _ = writeln!(output, "      <p class=\"bio\">{bio}</p>");
    let _ = writeln!(output, "    </header>");
    let _ = writeln!(output, "    <section class=\"grid\">");
    for project in &data.projects {
        let _ = writeln!(output, "      <article class=\"card\">");
        let _ = writeln!(output, "        <h3>{}</h3>", escape_html(&project.title));
        let _ = writeln!(
            output,
            "        <p>{}</p>",
            escape_html(&project.description)
        );
        if !project.link.trim().is_empty() {
            let _ = writeln!(
                output,
                "        <a href=\"{}\" target=\"_blank\" rel=\"noopener\">Explore Project &rarr;</a>",
                escape_html(project.link.trim())
            );
        }
        let _ = writeln!(output, "      </article>");
    }
    let _ = writeln!(output, "    </section>");
    let _ = writeln!(output, "    <footer>Exported via Folio</footer>");
    let _ = writeln!(output, "  </div>");
    let _ = writeln!(output, "</body>");
    let _ = writeln!(output, "</html>");
    output
}

fn fallback<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.trim().is_empty() {
        default
    } else {
        value
    }
}

/// Escape text for use in HTML content and double-quoted attributes.
#[must_use]
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Project;

    #[test]
    fn render_includes_profile_and_projects() {
        let mut data = PortfolioData::empty();
        data.full_name = "Ada Lovelace".to_string();
        data.tagline = "Analyst".to_string();
        data.bio = "Wrote the first program.".to_string();
        let mut linked = Project::new("Engine notes");
        linked.link = "https://example.com/?a=1&b=2".to_string();
        data.projects.push(linked);
        data.projects.push(Project::new("Unlinked"));

        let html = render_html(&data, Theme::Modern);
        assert!(html.contains("<h1>Ada Lovelace</h1>"));
        assert!(html.contains("Analyst"));
        assert!(html.contains("Wrote the first program."));
        assert!(html.contains("href=\"https://example.com/?a=1&amp;b=2\""));
        assert_eq!(html.matches("Explore Project").count(), 1);
        assert!(html.contains("theme-modern"));
        assert!(html.contains(Theme::Modern.accent()));
    }

    #[test]
    fn render_escapes_user_text() {
        let mut data = PortfolioData::empty();
        data.full_name = "<script>alert(1)</script>".to_string();
        let html = render_html(&data, Theme::Minimal);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn empty_document_uses_placeholders() {
        let html = render_html(&PortfolioData::empty(), Theme::Minimal);
        assert!(html.contains("Your Name"));
        assert!(html.contains("Creative Professional"));
    }

    #[test]
    fn escape_html_handles_quotes() {
        assert_eq!(escape_html(r#"a"b'c"#), "a&quot;b&#39;c");
    }
}
