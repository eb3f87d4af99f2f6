// src/csv.rs
use std::mem::take;

/// Minimal CSV/TSV reader (quotes + CRLF tolerant). Blank lines are dropped.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // doubled quote
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => row.push(take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) {
                    chars.next();
                }
                row.push(take(&mut field));
                if is_blank_row(&row) {
                    row.clear();
                } else {
                    rows.push(take(&mut row));
                }
            }
            _ => field.push(ch),
        }
    }

    // trailing line without a newline, even with an unterminated quote
    row.push(field);
    if !is_blank_row(&row) {
        rows.push(row);
    }
    rows
}

fn is_blank_row(row: &[String]) -> bool {
    row.len() == 1 && row[0].trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_rows_and_blank_lines() {
        let rows = parse_rows("a\tb\tc\r\n\n d\t\"e\tf\"\tg", '\t');
        assert_eq!(rows, vec![vec!["a", "b", "c"], vec![" d", "e\tf", "g"]]);
    }

    #[test]
    fn quoted_quotes() {
        let rows = parse_rows("\"say \"\"hi\"\"\",x\n", ',');
        assert_eq!(rows, vec![vec!["say \"hi\"", "x"]]);
        assert!(parse_rows("", ',').is_empty());
    }
}
