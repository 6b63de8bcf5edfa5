/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn header(page: &str) -> String {
    format!(
        r#"<header style="margin-bottom: 1.5rem">
  <h1 style="display: inline">{page}</h1>
  <ul style="list-style: none; float: right">
    <li style="display: inline-block; margin-right: 1rem"><a href="/user">User</a></li>
    <li style="display: inline-block; margin-right: 1rem"><a href="/mailroom">Mailroom</a></li>
  </ul>
</header>"#,
        page = escape(page),
    )
}

/// Full document with the navigation header. `body` must already be HTML.
pub fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<div style="margin: 0 auto; max-width: 650px; padding: 1.25rem 1rem">
{header}
{body}
</div>
</body>
</html>
"#,
        title = escape(title),
        header = header(title),
    )
}
