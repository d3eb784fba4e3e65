use colored::Colorize;

/// Print an info message
pub fn info(msg: &str) {
    println!("{} {}", "ℹ".blue(), msg);
}

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a warning message
pub fn warn(msg: &str) {
    println!("{} {}", "⚠".yellow(), msg);
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a dim/muted message
pub fn dim(msg: &str) {
    println!("  {}", msg.dimmed());
}

/// Print a header/title
pub fn header(title: &str) {
    println!();
    println!("{}", title.bold());
    println!("{}", "─".repeat(title.len()).dimmed());
}

/// Print a section header
pub fn section(title: &str) {
    println!();
    println!("{}", title.cyan().bold());
}

/// Column padding for [`table`]
const PADDING: usize = 3;

/// Print rows as left-aligned columns with a bold header line.
///
/// Column widths are computed from the widest cell in each column.
pub fn table(headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            // Rows may carry more cells than headers; grow the widths
            // instead of indexing past them in the render pass.
            if i >= widths.len() {
                widths.push(cell.len());
            } else if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let header_line = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:width$}", h, width = widths[i] + PADDING))
        .collect::<String>();
    println!("{}", header_line.trim_end().bold());

    for row in rows {
        let line = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:width$}", cell, width = widths[i] + PADDING))
            .collect::<String>();
        println!("{}", line.trim_end());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_handles_empty_rows() {
        // Must not panic on an empty row set
        table(&["Name", "URL"], &[]);
    }

    #[test]
    fn test_table_handles_uneven_rows() {
        table(
            &["Name", "URL"],
            &[vec!["a-very-long-name".to_string(), "http://a".to_string()]],
        );
    }

    #[test]
    fn test_table_handles_rows_wider_than_headers() {
        // More cells than headers must render, not panic
        table(
            &["Name"],
            &[vec![
                "hook1".to_string(),
                "http://a".to_string(),
                "play".to_string(),
            ]],
        );
    }
}
