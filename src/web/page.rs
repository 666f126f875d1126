use crate::data::model::{cell_text, Dataset};

// ---------------------------------------------------------------------------
// Escaping
// ---------------------------------------------------------------------------

/// Escape the HTML-significant characters. Applied to every dynamic string
/// that lands in the page: cell text, column names, the echoed query.
/// Dynamic text only ever lands in element content, so apostrophes stay.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Result table
// ---------------------------------------------------------------------------

/// Render the matching rows as an HTML table: header row = column names,
/// body rows = cell text, both in original dataset order.
pub fn render_table(dataset: &Dataset, indices: &[usize]) -> String {
    let mut html = String::new();
    html.push_str("<table class=\"data\">\n<thead>\n<tr>");
    for col in &dataset.column_names {
        html.push_str("<th>");
        html.push_str(&html_escape(col));
        html.push_str("</th>");
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for &i in indices {
        let row = &dataset.rows[i];
        html.push_str("<tr>");
        for col in &dataset.column_names {
            html.push_str("<td>");
            html.push_str(&html_escape(&cell_text(row, col)));
            html.push_str("</td>");
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>");
    html
}

// ---------------------------------------------------------------------------
// Page template
// ---------------------------------------------------------------------------

const STYLE: &str = r#"
body {
    font-family: 'Arial', sans-serif;
    margin: 20px;
    padding: 20px;
    background: linear-gradient(#02030f, #1b2340);
    color: #f2f2f2;
}
h1 {
    color: #FFD700;
    text-shadow: 2px 2px 4px #000000;
}
form {
    margin-bottom: 20px;
    background-color: rgba(0, 0, 0, 0.7);
    padding: 20px;
    border-radius: 5px;
    box-shadow: 0 2px 10px rgba(0,0,0,0.5);
}
input[type="text"] {
    padding: 10px;
    margin: 5px 0;
    width: calc(100% - 22px);
    border: 1px solid #ccc;
    border-radius: 4px;
}
input[type="submit"] {
    padding: 10px 15px;
    background-color: #FFD700;
    color: #000;
    border: none;
    border-radius: 4px;
    cursor: pointer;
}
input[type="submit"]:hover {
    background-color: #FFC107;
}
.data {
    border-collapse: collapse;
    width: 100%;
    margin-top: 20px;
    background-color: rgba(255, 255, 255, 0.9);
    color: #000;
    overflow-x: auto;
    display: block;
}
.data th, .data td {
    border: 1px solid #ccc;
    padding: 8px;
    text-align: left;
}
.data th {
    background-color: #007BFF;
    color: black;
}
.error {
    color: #FF4500;
    margin-top: 10px;
}
"#;

/// Render the full page. At most one of `table` / `error` is present: the
/// initial GET has neither, every POST outcome has exactly one.
///
/// `table` is trusted markup from [`render_table`]; `error` is plain text
/// and gets escaped here.
pub fn render_page(table: Option<&str>, error: Option<&str>) -> String {
    let mut html = String::new();
    html.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html.push_str("<title>Nasa Data Filter</title>\n<style>");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str("<h1>Nasa Data Filter</h1>\n");
    html.push_str("<form method=\"post\">\n");
    html.push_str("<label for=\"value\">Enter Value:</label>\n");
    html.push_str(
        "<input type=\"text\" name=\"value\" placeholder=\"e.g., 3703080 or a name\" required>\n",
    );
    html.push_str("<input type=\"submit\" value=\"Filter Data\">\n</form>\n");

    if let Some(table) = table {
        html.push_str("<h2>Filtered Data</h2>\n");
        html.push_str(table);
        html.push('\n');
    }

    if let Some(error) = error {
        html.push_str("<p class=\"error\">");
        html.push_str(&html_escape(error));
        html.push_str("</p>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CellValue, Row};

    fn tiny_dataset() -> Dataset {
        let columns = vec!["Neo Reference ID".to_string(), "Name".to_string()];
        let mut first = Row::new();
        first.insert("Neo Reference ID".into(), CellValue::Integer(3703080));
        first.insert("Name".into(), CellValue::String("2015 AB".into()));
        let mut second = Row::new();
        second.insert("Neo Reference ID".into(), CellValue::Integer(3723955));
        second.insert("Name".into(), CellValue::String("<b>bold</b>".into()));
        Dataset::new(columns, vec![first, second])
    }

    #[test]
    fn escapes_html_significant_characters() {
        assert_eq!(
            html_escape(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;'"
        );
    }

    #[test]
    fn table_keeps_column_order_and_selected_rows() {
        let ds = tiny_dataset();
        let table = render_table(&ds, &[0]);
        assert!(table.contains("<th>Neo Reference ID</th><th>Name</th>"));
        assert!(table.contains("<td>3703080</td><td>2015 AB</td>"));
        assert!(!table.contains("3723955"));
    }

    #[test]
    fn cell_text_is_escaped() {
        let ds = tiny_dataset();
        let table = render_table(&ds, &[1]);
        assert!(table.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(!table.contains("<b>bold</b>"));
    }

    #[test]
    fn initial_page_has_no_table_and_no_error() {
        let page = render_page(None, None);
        assert!(page.contains("<form method=\"post\">"));
        assert!(!page.contains("<table class=\"data\">"));
        assert!(!page.contains("class=\"error\""));
    }

    #[test]
    fn error_page_escapes_the_message() {
        let page = render_page(None, Some("No data found for the value '<script>'."));
        assert!(page.contains("class=\"error\""));
        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>"));
    }
}
