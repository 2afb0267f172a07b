use super::*;

/// Base URL without scheme or trailing slash, for the header line.
pub(super) fn server_label(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    for scheme in ["https://", "http://"] {
        if let Some(rest) = trimmed.strip_prefix(scheme) {
            return rest.to_string();
        }
    }
    trimmed.to_string()
}

/// Splits a prompt line into arguments. Double quotes group words and a
/// backslash escapes the next character, so searches can carry spaces.
pub(super) fn tokenize(input: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut word = String::new();
    let mut quoted = false;

    let mut chars = input.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                let Some(escaped) = chars.next() else {
                    anyhow::bail!("dangling escape");
                };
                word.push(escaped);
            }
            '"' => quoted = !quoted,
            ch if ch.is_whitespace() && !quoted => {
                if !word.is_empty() {
                    words.push(std::mem::take(&mut word));
                }
            }
            ch => word.push(ch),
        }
    }

    if quoted {
        anyhow::bail!("unterminated quote");
    }
    if !word.is_empty() {
        words.push(word);
    }
    Ok(words)
}
