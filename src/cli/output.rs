use std::io::{self, Write};

use crate::catalog::AppList;

/// Render lists as markdown: a level-2 heading, a blank line,
/// one bullet per app, then a blank line after each list.
pub fn render_markdown(lists: &[AppList]) -> String {
    let mut out = String::new();
    for list in lists {
        out.push_str(&format!("## {}\n\n", list.label));
        for name in &list.names {
            out.push_str(&format!("- {}\n", name));
        }
        out.push('\n');
    }
    out
}

/// Render lists as a pretty-printed JSON array
pub fn render_json(lists: &[AppList]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(lists)
}

pub fn write_markdown<W: Write>(writer: &mut W, lists: &[AppList]) -> io::Result<()> {
    writer.write_all(render_markdown(lists).as_bytes())?;
    writer.flush()
}

pub fn write_json<W: Write>(writer: &mut W, lists: &[AppList]) -> io::Result<()> {
    let json = render_json(lists).map_err(io::Error::other)?;
    writeln!(writer, "{}", json)?;
    writer.flush()
}
