use crate::types::FileEntry;
use chrono::Local;

#[must_use]
pub fn render_report(entries: &[FileEntry]) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("  <meta charset=\"UTF-8\">\n");
    html.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str("  <title>File Census</title>\n");
    html.push_str(&render_styles());
    html.push_str("</head>\n<body>\n");

    html.push_str("  <h1>File Census</h1>\n");
    html.push_str(&format!(
        "  <h3>Generated: {}</h3>\n",
        Local::now().format("%Y-%m-%d %H:%M")
    ));

    let total: u64 = entries.iter().map(|entry| entry.size).sum();
    html.push_str(&format!(
        "  <p class=\"summary\">{} files, {} total</p>\n",
        entries.len(),
        human_bytes::human_bytes(total as f64)
    ));

    html.push_str(&render_table(entries));

    html.push_str("</body>\n</html>\n");

    html
}

fn render_styles() -> String {
    r#"  <style>
    body { background-color: #0c0c0c; color: #d1d1d1; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; padding: 20px; margin: 0; }
    h1 { text-align: center; margin-bottom: 5px; color: #4CAF50; font-size: 2.2em; letter-spacing: 1px; }
    h3 { text-align: center; font-size: 0.9em; color: #777; margin-bottom: 30px; font-weight: normal; text-transform: uppercase; letter-spacing: 2px; }
    .summary { text-align: center; color: #4CAF50; font-size: 1.1em; }
    .data-table { width: 100%; border-collapse: collapse; margin: 10px 0; font-size: 0.9em; }
    .data-table th { background-color: #1a1a1a; padding: 10px; text-align: left; border-bottom: 2px solid #333; }
    .data-table td { padding: 8px; border-bottom: 1px solid #222; word-break: break-all; }
  </style>
"#
    .to_string()
}

fn render_table(entries: &[FileEntry]) -> String {
    let mut html = String::new();

    html.push_str("  <table class=\"data-table\">\n");
    html.push_str("    <tr><th>Name</th><th>Path</th><th>Size (bytes)</th><th>Modified</th><th>Parent directory</th></tr>\n");

    for entry in entries {
        html.push_str(&format!(
            "    <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(&entry.name),
            escape(&entry.path),
            entry.size,
            escape(&entry.modified),
            escape(&entry.parent_dir)
        ));
    }

    html.push_str("  </table>\n");
    html
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry(name: &str) -> FileEntry {
        FileEntry {
            name: name.to_string(),
            path: format!("/data/{name}"),
            size: 42,
            modified: "01.08.2025 12:00".to_string(),
            parent_dir: "/data".to_string(),
        }
    }

    #[test]
    fn report_contains_entry_rows() {
        let html = render_report(&[make_entry("report.txt")]);
        assert!(html.contains("<td>report.txt</td>"));
        assert!(html.contains("<td>/data/report.txt</td>"));
        assert!(html.contains("<td>42</td>"));
        assert!(html.contains("1 files"));
    }

    #[test]
    fn markup_in_names_is_escaped() {
        let html = render_report(&[make_entry("<script>.txt")]);
        assert!(html.contains("&lt;script&gt;.txt"));
        assert!(!html.contains("<td><script>"));
    }
}
