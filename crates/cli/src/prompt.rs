use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use mysterium_core::{
    rules::parse_players,
    session::{is_exit_token, MENU},
    Command, Difficulty, Expansion, SessionConfig,
};

const RESET_TOKEN: &str = "r";
const CONTINUE_TOKEN: &str = "continue";

/// Line-oriented question and answer over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Ask for every session setting until each answer is valid.
    pub fn collect_config(&mut self) -> Result<SessionConfig> {
        let name = self.ask_name()?;
        let players = self.ask_players()?;
        let difficulty = self.ask_difficulty()?;
        let selection = self.ask_expansions()?;
        let expansions = selection
            .iter()
            .filter_map(|&index| Expansion::from_index(index));
        Ok(SessionConfig::new(name, players, difficulty, expansions)?)
    }

    /// Show the command menu and read one command; `None` for unknown input.
    pub fn next_command(&mut self) -> Result<Option<Command>> {
        let answer = self.ask(&format!("\n{MENU}\n"))?;
        Ok(Command::parse(&answer))
    }

    fn ask_name(&mut self) -> Result<String> {
        loop {
            let answer = self.ask("Please provide a name for this game. ")?;
            if !answer.trim().is_empty() {
                return Ok(answer.trim().to_string());
            }
        }
    }

    fn ask_players(&mut self) -> Result<u8> {
        loop {
            let answer = self.ask("How many players? (2 to 7 possible players) ")?;
            if let Ok(players) = parse_players(&answer) {
                return Ok(players);
            }
        }
    }

    fn ask_difficulty(&mut self) -> Result<Difficulty> {
        loop {
            let answer =
                self.ask("What difficulty would you like to play? (easy, medium, or hard) ")?;
            if let Ok(difficulty) = answer.parse() {
                return Ok(difficulty);
            }
        }
    }

    fn ask_expansions(&mut self) -> Result<Vec<usize>> {
        let menu = Expansion::ALL
            .iter()
            .enumerate()
            .map(|(index, expansion)| format!("[{index}] {expansion}"))
            .collect::<Vec<_>>()
            .join("\n");

        let mut selected: Vec<usize> = Vec::new();
        loop {
            let current = selected
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(self.output, "Current Selection: {current}\n")?;
            writeln!(
                self.output,
                "Select sets to add for play. Enter 'continue' or 'exit' to continue "
            )?;
            let answer = self.ask(&format!("{menu}\n"))?;
            let answer = answer.trim();

            if answer.eq_ignore_ascii_case(CONTINUE_TOKEN) || is_exit_token(answer) {
                if selected.is_empty() {
                    writeln!(self.output, "Select at least one set.")?;
                    continue;
                }
                return Ok(selected);
            }
            if answer.eq_ignore_ascii_case(RESET_TOKEN) {
                selected.clear();
                continue;
            }
            if let Ok(index) = answer.parse::<usize>() {
                if Expansion::from_index(index).is_some() && !selected.contains(&index) {
                    selected.push(index);
                }
            }
        }
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if read == 0 {
            bail!("input closed");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompter(script: &str) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(script.as_bytes(), Vec::new())
    }

    #[test]
    fn re_asks_until_answers_are_valid() -> Result<()> {
        let mut prompter = prompter("\nManor\n9\nfour\n4\nnightmare\nMedium\n2\n0\n2\ncontinue\n");
        let config = prompter.collect_config()?;
        assert_eq!(config.name(), "Manor");
        assert_eq!(config.players(), 4);
        assert_eq!(config.difficulty(), Difficulty::Medium);
        assert_eq!(
            config.expansions(),
            &[Expansion::SecretsAndLies, Expansion::Base]
        );
        assert_eq!(config.setup_cards(), 6);
        Ok(())
    }

    #[test]
    fn reset_clears_selection_and_empty_selection_is_refused() -> Result<()> {
        let mut prompter = prompter("Manor\n3\neasy\n1\n3\nr\nq\n7\n1\nexit\n");
        let config = prompter.collect_config()?;
        assert_eq!(config.expansions(), &[Expansion::HiddenSigns]);
        let printed = String::from_utf8(prompter.output().clone())?;
        assert!(printed.contains("Select at least one set."));
        assert!(printed.contains("Current Selection: 1, 3"));
        Ok(())
    }

    #[test]
    fn quotas_follow_the_answers() -> Result<()> {
        let mut prompter = prompter("Manor\n7\nhard\n0\n1\n5\ncontinue\n");
        let config = prompter.collect_config()?;
        assert_eq!(config.expansions(), &[Expansion::Base, Expansion::HiddenSigns]);
        assert_eq!(config.setup_cards(), 9);
        assert_eq!(config.vision_cards(), 7);
        assert_eq!(config.clairvoyance(), 6);
        Ok(())
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut prompter = prompter("Manor\n");
        assert!(prompter.collect_config().is_err());
    }

    #[test]
    fn reads_commands() -> Result<()> {
        let mut prompter = prompter("3\nbogus\nquit\n");
        assert_eq!(prompter.next_command()?, Some(Command::ReplenishVisions));
        assert_eq!(prompter.next_command()?, None);
        assert_eq!(prompter.next_command()?, Some(Command::Exit));
        Ok(())
    }
}
