use colored::Colorize;

/// Semantic level of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Warning,
    Error,
}

/// Helper function to print a status message with semantic level
/// Status lines go to stderr so report output stays pipeable
pub fn set_status(text: impl AsRef<str>, level: StatusLevel) {
    let text = text.as_ref();
    let line = match level {
        StatusLevel::Warning => text.yellow(),
        StatusLevel::Error => text.red().bold(),
    };
    eprintln!("{}", line);
}

/// Helper function to show an error block: title, message, then indented details
pub fn show_error(title: impl AsRef<str>, message: impl AsRef<str>, details: impl AsRef<str>) {
    eprintln!("{}", format!("Error: {}", title.as_ref()).red().bold());
    eprintln!("{}", message.as_ref());

    let details = details.as_ref();
    if !details.is_empty() {
        eprintln!();
        for line in details.lines() {
            eprintln!("  {}", line);
        }
    }
}
