//! Command parser for the : command system

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Navigation
    Tab(String),
    Select(String),

    // Operator actions
    Ack(String),
    Track(String),
    Resolve(String),
    Detect(String),
    Pause,

    // List filters
    Filter(String),
    ClearFilter,
    Search(Option<String>),

    // Reports
    Export(Option<String>),
    Summary,
    Config,
    Help,

    Quit,

    Unknown(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let required = |make: fn(String) -> Command| match args.clone() {
        Some(value) => make(value),
        None => Command::Unknown(input.to_string()),
    };

    match cmd.to_lowercase().as_str() {
        // Navigation
        "tab" | "go" => required(Command::Tab),
        "dashboard" | "dash" | "cameras" | "cams" | "hazards" | "hz" | "history" | "hist" => {
            Command::Tab(cmd.to_lowercase())
        }
        "select" | "sel" => required(Command::Select),

        // Operator actions
        "ack" | "acknowledge" => required(Command::Ack),
        "track" => required(Command::Track),
        "resolve" => required(Command::Resolve),
        "detect" | "reopen" => required(Command::Detect),
        "pause" | "resume" => Command::Pause,

        // Filters
        "filter" | "f" => match args.as_deref() {
            Some(value) if matches!(value.to_lowercase().as_str(), "clear" | "reset" | "none") => {
                Command::ClearFilter
            }
            Some(value) => Command::Filter(value.to_string()),
            None => Command::Unknown(input.to_string()),
        },
        "clear" | "reset" => Command::ClearFilter,
        "search" | "find" => Command::Search(args.clone()),

        // Reports
        "export" | "exp" => Command::Export(args.clone()),
        "summary" | "status" | "stats" => Command::Summary,
        "config" | "cfg" => Command::Config,
        "help" | "?" => Command::Help,

        "quit" | "q" | "exit" => Command::Quit,

        _ => Command::Unknown(input.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation_commands() {
        assert_eq!(parse_command("tab cameras"), Command::Tab("cameras".to_string()));
        assert_eq!(parse_command("hist"), Command::Tab("hist".to_string()));
        assert_eq!(parse_command("Dashboard"), Command::Tab("dashboard".to_string()));
        assert_eq!(
            parse_command("select HZ-003"),
            Command::Select("HZ-003".to_string())
        );
    }

    #[test]
    fn test_parse_operator_commands() {
        assert_eq!(parse_command("ack ALT-001"), Command::Ack("ALT-001".to_string()));
        assert_eq!(parse_command("track  HZ-002 "), Command::Track("HZ-002".to_string()));
        assert_eq!(parse_command("resolve HZ-002"), Command::Resolve("HZ-002".to_string()));
        assert_eq!(parse_command("reopen HZ-004"), Command::Detect("HZ-004".to_string()));
        assert_eq!(parse_command("pause"), Command::Pause);
    }

    #[test]
    fn test_parse_filter_commands() {
        assert_eq!(
            parse_command("filter type:bird status:tracking"),
            Command::Filter("type:bird status:tracking".to_string())
        );
        assert_eq!(parse_command("filter clear"), Command::ClearFilter);
        assert_eq!(parse_command("reset"), Command::ClearFilter);
        assert_eq!(parse_command("search"), Command::Search(None));
        assert_eq!(
            parse_command("search north apron"),
            Command::Search(Some("north apron".to_string()))
        );
    }

    #[test]
    fn test_missing_arguments_are_unknown() {
        assert_eq!(parse_command("ack"), Command::Unknown("ack".to_string()));
        assert_eq!(parse_command("tab   "), Command::Unknown("tab".to_string()));
        assert_eq!(parse_command("filter"), Command::Unknown("filter".to_string()));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse_command("notacommand"),
            Command::Unknown("notacommand".to_string())
        );
    }
}
