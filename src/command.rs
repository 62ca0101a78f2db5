#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Analyze(String),
    Clear,
    Help,
    Quit,
}

pub fn parse_command(input: &str) -> Option<Command> {
    let input = input.strip_prefix(':').unwrap_or(input).trim();

    if input.is_empty() {
        return None;
    }

    let (cmd, args) = match input.split_once(char::is_whitespace) {
        Some((cmd, args)) => (cmd, args.trim()),
        None => (input, ""),
    };

    match cmd {
        "analyze" | "a" if !args.is_empty() => Some(Command::Analyze(args.to_owned())),
        "clear" => Some(Command::Clear),
        "help" | "h" => Some(Command::Help),
        "quit" | "q" => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_analyze() {
        assert_eq!(
            parse_command(":analyze 1743905"),
            Some(Command::Analyze("1743905".into()))
        );
        assert_eq!(
            parse_command("a 145896939"),
            Some(Command::Analyze("145896939".into()))
        );
    }

    #[test]
    fn test_parse_command_analyze_requires_id() {
        assert_eq!(parse_command(":analyze"), None);
        assert_eq!(parse_command(":a  "), None);
    }

    #[test]
    fn test_parse_command_aliases() {
        assert_eq!(parse_command(":q"), Some(Command::Quit));
        assert_eq!(parse_command(":h"), Some(Command::Help));
        assert_eq!(parse_command(":clear"), Some(Command::Clear));
    }

    #[test]
    fn test_parse_command_empty() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command(":"), None);
    }

    #[test]
    fn test_parse_command_unknown() {
        assert_eq!(parse_command(":frobnicate"), None);
    }
}
