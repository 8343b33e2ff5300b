/// Strip a Markdown code fence the model sometimes wraps around markup
///
/// "```html\n<html></html>\n```" becomes "<html></html>". Text without a
/// fence is only trimmed.
pub fn strip_code_fence(response: &str) -> String {
    let mut cleaned = response.trim();

    if let Some(rest) = cleaned.strip_prefix("```") {
        // Drop the info string (```html, ```HTML, ```xml ...)
        let tag_len = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '+'))
            .unwrap_or(rest.len());
        cleaned = &rest[tag_len..];
    }

    if let Some(rest) = cleaned.strip_suffix("```") {
        cleaned = rest;
    }

    cleaned.trim().to_string()
}
