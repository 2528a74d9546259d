//! Usage table for the variables of a specification

use std::io::{self, Write};

use crate::describe::{gather, VarInfo};
use crate::field::Specification;

const HEADER: &str = "This application is configured via the environment. The following environment\nvariables can be used:\n";
const COLUMNS: [&str; 5] = ["KEY", "TYPE", "DEFAULT", "REQUIRED", "DESCRIPTION"];
const PADDING: usize = 4;

/// Write a table of every variable `S` reads under `prefix`.
///
/// ```
/// use envconfig::EnvConfig;
///
/// #[derive(Default, EnvConfig)]
/// struct Config {
///     #[envconfig(default = 8080, desc = "listen port")]
///     port: u16,
/// }
///
/// let mut out = Vec::new();
/// envconfig::usage::<Config>("myapp", &mut out).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("MYAPP_PORT"));
/// assert!(text.contains("listen port"));
/// ```
pub fn usage<S: Specification + Default>(prefix: &str, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;
    write_table(&gather::<S>(prefix), out)
}

fn row(var: &VarInfo) -> [String; 5] {
    [
        var.display_key().to_string(),
        var.type_label(),
        var.field.default.unwrap_or_default().to_string(),
        if var.field.required { "true" } else { "" }.to_string(),
        var.field.desc.unwrap_or_default().to_string(),
    ]
}

fn write_table(vars: &[VarInfo], out: &mut impl Write) -> io::Result<()> {
    let header = COLUMNS.map(str::to_string);
    let rows: Vec<[String; 5]> = std::iter::once(header).chain(vars.iter().map(row)).collect();

    let mut widths = [0usize; 5];
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    for cells in &rows {
        let mut line = String::new();
        for (i, cell) in cells.iter().enumerate() {
            line.push_str(cell);
            if i + 1 < cells.len() {
                let pad = widths[i] + PADDING - cell.chars().count();
                line.extend(std::iter::repeat(' ').take(pad));
            }
        }
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Keys;
    use crate::FieldInfo;

    fn var(key: &str, default: Option<&'static str>, required: bool) -> VarInfo {
        let mut field = FieldInfo::new("f", "alloc::string::String");
        field.default = default;
        field.required = required;
        VarInfo {
            keys: Keys {
                primary: key.to_string(),
                alt: None,
            },
            field,
        }
    }

    #[test]
    fn test_table_alignment() {
        let vars = [var("APP_PORT", Some("8080"), false), var("APP_NAME", None, true)];
        let mut out = Vec::new();
        write_table(&vars, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "KEY         TYPE      DEFAULT    REQUIRED    DESCRIPTION");
        assert_eq!(lines[1], "APP_PORT    String    8080");
        assert_eq!(lines[2], "APP_NAME    String               true");
    }
}
