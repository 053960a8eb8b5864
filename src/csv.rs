// src/csv.rs

/// Always quoted; inner quotes doubled.
pub fn quote(field: &str) -> String {
    join!("\"", &field.replace('"', "\"\""), "\"")
}

/// Format one row without a line terminator.
pub fn format_row<S: AsRef<str>>(row: &[S], sep: char) -> String {
    let mut out = s!();
    for (i, cell) in row.iter().enumerate() {
        if i > 0 { out.push(sep); }
        out.push_str(&quote(cell.as_ref()));
    }
    out
}

/// Create the full export text.
/// - `preamble`: raw lines written first (comments), unquoted
/// - `headers`: header cells, quoted like data
/// - `rows`: data rows
///
/// Lines are joined by `\n`; there is no trailing newline.
pub fn to_export_string<H: AsRef<str>>(
    preamble: &[&str],
    headers: &[H],
    rows: &[Vec<String>],
    sep: char,
) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(preamble.len() + 1 + rows.len());
    lines.extend(preamble.iter().map(|l| s!(*l)));
    lines.push(format_row(headers, sep));
    lines.extend(rows.iter().map(|r| format_row(r, sep)));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_doubles_inner_quotes() {
        assert_eq!(quote(r#"say "hi""#), r#""say ""hi""""#);
        assert_eq!(quote(""), r#""""#);
    }

    #[test]
    fn export_string_layout() {
        let rows = vec![vec![s!("a"), s!("b,c")]];
        let s = to_export_string(&["# one", "# "], &["H1", "H2"], &rows, ',');
        assert_eq!(s, "# one\n# \n\"H1\",\"H2\"\n\"a\",\"b,c\"");
    }

    #[test]
    fn row_keeps_separators_and_newlines_inside_quotes() {
        let row = format_row(&["a,b", "x\ny", r#"q"q"#], ',');
        assert_eq!(row, "\"a,b\",\"x\ny\",\"q\"\"q\"");
    }
}
