/// Wraps an HTML fragment in a minimal standalone HTML5 document.
///
/// The title is escaped; the fragment is inserted as-is.
pub fn standalone_page(title: &str, fragment: &str) -> String {
    let escaped_title = html_escape::encode_text(title);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="lessonmark">
  <title>{escaped_title}</title>
</head>
<body>
{fragment}
</body>
</html>
"#
    )
}
