//! Words the interactive loop treats as commands instead of text to analyze.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Scale,
    Batch,
    Save,
    More,
    Breakdown,
    Quit,
    /// Anything else is text to analyze.
    Analyze(String),
}

impl Command {
    /// Matches whole, case-insensitive words after trimming. Empty input is
    /// passed through as `Analyze("")` so validation can report it.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_lowercase().as_str() {
            "help" => Command::Help,
            "scale" => Command::Scale,
            "batch" => Command::Batch,
            "save" => Command::Save,
            "more" => Command::More,
            "breakdown" => Command::Breakdown,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Analyze(trimmed.to_string()),
        }
    }
}

pub const HELP: &str = "\
Available commands:
  help      - Show this help
  scale     - Show emoji sentiment scale
  batch     - Process multiple texts
  save      - Save session results
  more      - More sass quotes for the last text
  breakdown - Detailed scores for the last text
  quit      - Exit analyzer";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_are_case_insensitive() {
        assert_eq!(Command::parse("HELP"), Command::Help);
        assert_eq!(Command::parse("  Scale "), Command::Scale);
        assert_eq!(Command::parse("Breakdown"), Command::Breakdown);
        assert_eq!(Command::parse("more"), Command::More);
    }

    #[test]
    fn every_exit_word_quits() {
        for word in ["quit", "exit", "q", "Q", "EXIT"] {
            assert_eq!(Command::parse(word), Command::Quit);
        }
    }

    #[test]
    fn sentences_are_analyzed_verbatim() {
        assert_eq!(
            Command::parse("  help me, I'm drowning "),
            Command::Analyze("help me, I'm drowning".to_string())
        );
        assert_eq!(Command::parse(""), Command::Analyze(String::new()));
    }
}
