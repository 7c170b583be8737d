/// Splits one comma-delimited line into its fields.
///
/// Commas inside a quoted span are kept literally and `""` inside a quoted
/// span yields a single `"`. Quote characters are otherwise dropped. The
/// trailing buffer is always emitted, so a line with `n` unquoted commas
/// produces `n + 1` fields. Unterminated quoting runs to the end of the line.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quoted = false;

    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            ',' if quoted => current.push(ch),
            ',' => fields.push(std::mem::take(&mut current)),
            '"' if quoted => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    quoted = false;
                }
            }
            '"' => quoted = true,
            other => current.push(other),
        }
    }
    fields.push(current);

    fields
}

/// Quotes a field for output when it would otherwise be split or mangled by
/// [`tokenize`].
pub fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
