use wordfreq_core::Msg;

/// One line typed by the user, mapped to what the app should do with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let word = line.trim();
    match word.to_ascii_lowercase().as_str() {
        "" => Command::Dispatch(Msg::NoOp),
        "compute" | "c" | "submit" => Command::Dispatch(Msg::ComputeClicked),
        "export" | "e" => Command::Dispatch(Msg::ExportClicked),
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => Command::Unknown(word.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_and_aliases() {
        assert_eq!(parse_command("compute"), Command::Dispatch(Msg::ComputeClicked));
        assert_eq!(parse_command(" Submit \n"), Command::Dispatch(Msg::ComputeClicked));
        assert_eq!(parse_command("c"), Command::Dispatch(Msg::ComputeClicked));
        assert_eq!(parse_command("EXPORT"), Command::Dispatch(Msg::ExportClicked));
        assert_eq!(parse_command("e"), Command::Dispatch(Msg::ExportClicked));
        assert_eq!(parse_command("?"), Command::Help);
        assert_eq!(parse_command("exit"), Command::Quit);
    }

    #[test]
    fn blank_and_unknown_lines() {
        assert_eq!(parse_command("   "), Command::Dispatch(Msg::NoOp));
        assert_eq!(
            parse_command(" frobnicate "),
            Command::Unknown("frobnicate".to_string())
        );
    }
}
