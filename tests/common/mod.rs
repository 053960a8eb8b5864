// tests/common/mod.rs
//
// Reads an exported CSV back: leading `#` lines, then quoted records.

#[derive(Debug, Default)]
pub struct Export {
    pub comments: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub fn read_export(text: &str) -> Export {
    let mut out = Export::default();
    let mut body = text;
    while body.starts_with('#') {
        let end = body.find('\n').unwrap_or(body.len());
        out.comments.push(body[..end].to_string());
        body = body.get(end + 1..).unwrap_or("");
    }

    let mut row: Vec<String> = Vec::new();
    let mut cell = String::new();
    let mut quoted = false;
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, quoted) {
            ('"', true) if chars.peek() == Some(&'"') => {
                chars.next();
                cell.push('"');
            }
            ('"', _) => quoted = !quoted,
            (',', false) => row.push(std::mem::take(&mut cell)),
            ('\n', false) => {
                row.push(std::mem::take(&mut cell));
                out.rows.push(std::mem::take(&mut row));
            }
            _ => cell.push(c),
        }
    }
    if !cell.is_empty() || !row.is_empty() {
        row.push(cell);
        out.rows.push(row);
    }
    out
}
