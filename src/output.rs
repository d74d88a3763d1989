use std::io::{self, Write};

const COLUMN_GAP: usize = 3;

/// Left-aligned text table; every column but the last is padded to its
/// widest cell plus a fixed gap.
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: vec![headers.into_iter().map(Into::into).collect()],
        }
    }

    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    pub fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        let columns = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut widths = vec![0; columns];
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        for row in &self.rows {
            let mut line = String::new();
            for (i, cell) in row.iter().enumerate() {
                line.push_str(cell);
                if i + 1 < row.len() {
                    let pad = widths[i] - cell.chars().count() + COLUMN_GAP;
                    line.extend(std::iter::repeat(' ').take(pad));
                }
            }
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

/// A zero TTL means the zone default applies.
pub fn format_ttl(ttl: u32) -> String {
    if ttl == 0 {
        "default".to_string()
    } else {
        ttl.to_string()
    }
}

/// Shows only the first and last four characters of long tokens.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    } else {
        "********".to_string()
    }
}
