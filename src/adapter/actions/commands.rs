//! Workflow Commands
//!
//! GitHub Actions のワークフローコマンド（`::name key=value::message`）の組み立て

/// Escape command data (the message part)
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a command property value
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// Format a workflow command line (without trailing newline)
pub fn format_command(command: &str, properties: &[(&str, &str)], message: &str) -> String {
    let mut line = format!("::{}", command);
    if !properties.is_empty() {
        let props: Vec<String> = properties
            .iter()
            .map(|(key, value)| format!("{}={}", key, escape_property(value)))
            .collect();
        line.push(' ');
        line.push_str(&props.join(","));
    }
    line.push_str("::");
    line.push_str(&escape_data(message));
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_simple_command() {
        assert_eq!(
            format_command("error", &[], "missing input 'filename'"),
            "::error::missing input 'filename'"
        );
    }

    #[test]
    fn test_format_command_with_properties() {
        assert_eq!(
            format_command("set-output", &[("name", "download-links")], "https://x/y?a=1"),
            "::set-output name=download-links::https://x/y?a=1"
        );
    }

    #[test]
    fn test_escape_data() {
        assert_eq!(escape_data("50%\r\nnext"), "50%25%0D%0Anext");
    }

    #[test]
    fn test_escape_property() {
        assert_eq!(escape_property("a:b,c"), "a%3Ab%2Cc");
    }

    #[test]
    fn test_multiline_mask_stays_on_one_line() {
        let line = format_command("add-mask", &[], "{\n  \"k\": 1\n}");
        assert_eq!(line.lines().count(), 1);
    }
}
