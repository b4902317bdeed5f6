//! Shared HTML shell and print styles for every portal page.

/// Escape text for interpolation into HTML content or attribute values.
pub fn html_escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Site-wide styles. The `@media print` block hides interactive chrome so
/// the signed agreement prints clean.
const STYLES: &str = "\
:root { color-scheme: light; }
body { font-family: Georgia, 'Times New Roman', serif; color: #292524; background: #fafaf9; \
margin: 0; line-height: 1.6; }
main { max-width: 56rem; margin: 0 auto; padding: 2rem 1.5rem; }
nav { display: flex; justify-content: space-between; align-items: baseline; \
padding: 1rem 1.5rem; border-bottom: 1px solid #e7e5e4; background: #fff; }
h1, h2, h3 { line-height: 1.2; }
label { display: block; font-size: 0.7rem; text-transform: uppercase; \
letter-spacing: 0.1em; color: #a8a29e; margin: 1rem 0 0.25rem; }
input, textarea { width: 100%; box-sizing: border-box; padding: 0.6rem 0.8rem; \
border: 1px solid #d6d3d1; border-radius: 0.5rem; background: #fafaf9; font: inherit; }
button { padding: 0.75rem 1.5rem; border: 0; border-radius: 0.6rem; background: #1c1917; \
color: #fff; font-weight: 700; cursor: pointer; }
a.button { display: inline-block; padding: 0.75rem 1.5rem; border-radius: 0.6rem; \
background: #1c1917; color: #fff; font-weight: 700; text-decoration: none; }
button.accent, a.button.accent { background: #b45309; }
button.quiet { background: transparent; color: #78716c; font-weight: 400; }
.card { background: #fff; border: 1px solid #e7e5e4; border-radius: 1rem; \
padding: 1.5rem; margin: 1rem 0; }
.terms { background: #fffbeb; border: 2px solid #fde68a; }
.signature-line { font-size: 1.8rem; }
.muted { color: #78716c; font-size: 0.9rem; }
footer { border-top: 1px solid #e7e5e4; padding: 2rem 1.5rem; color: #78716c; \
font-size: 0.9rem; }
@media print {
  .no-print { display: none !important; }
  body { background: white; }
}
";

/// Wrap a body fragment in the full page shell.
pub fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{} — Brush of Light</title>\n<style>{STYLES}</style>\n</head>\n\
         <body>\n{body}\n</body>\n</html>",
        html_escape(title)
    )
}
