/// Words that end a prompt loop.
pub const EXIT_TOKENS: [&str; 4] = ["exit", "quit", "q", "-1"];

/// Menu shown between commands.
pub const MENU: &str = "\
[1] Delete Current Hand
[2] Restore Current Hand
[3] Replenish Hand
[4] Show Settings
[q] Exit Game";

/// Mid-session commands acting on the vision hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Remove the vision images from disk, keeping the hand in memory.
    EmptyVisions,
    /// Write the held vision images back to disk.
    RestoreVisions,
    /// Discard the vision hand, draw a new one and write it out.
    ReplenishVisions,
    /// Print the session settings.
    ShowSettings,
    /// Leave the command loop.
    Exit,
}

impl Command {
    /// Parse one line of input; unknown input yields `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        match input {
            "1" => Some(Command::EmptyVisions),
            "2" => Some(Command::RestoreVisions),
            "3" => Some(Command::ReplenishVisions),
            "4" => Some(Command::ShowSettings),
            _ if is_exit_token(input) => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Whether `input` is one of the [`EXIT_TOKENS`], ignoring case.
pub fn is_exit_token(input: &str) -> bool {
    let input = input.trim();
    EXIT_TOKENS
        .iter()
        .any(|token| token.eq_ignore_ascii_case(input))
}

/// What the command loop should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_menu_entries() {
        assert_eq!(Command::parse("1"), Some(Command::EmptyVisions));
        assert_eq!(Command::parse(" 2\n"), Some(Command::RestoreVisions));
        assert_eq!(Command::parse("3"), Some(Command::ReplenishVisions));
        assert_eq!(Command::parse("4"), Some(Command::ShowSettings));
        for token in ["exit", "QUIT", "q", "-1"] {
            assert_eq!(Command::parse(token), Some(Command::Exit));
        }
        assert_eq!(Command::parse("5"), None);
        assert_eq!(Command::parse(""), None);
    }
}
