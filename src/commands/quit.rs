use super::{Command, CommandResult};
use crate::session::Session;

pub struct QuitCommand;

impl Command for QuitCommand {
    fn name(&self) -> &str {
        "/quit"
    }

    fn aliases(&self) -> &[&str] {
        &["quit", "exit", "/exit"]
    }

    fn description(&self) -> &str {
        "exit"
    }

    fn execute(&self, _args: &str, _session: &mut Session) -> CommandResult {
        CommandResult::Quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_session;

    #[test]
    fn returns_quit() {
        assert!(matches!(
            QuitCommand.execute("", &mut test_session()),
            CommandResult::Quit
        ));
    }

    #[test]
    fn has_aliases() {
        let aliases = QuitCommand.aliases();
        assert!(aliases.contains(&"quit"));
        assert!(aliases.contains(&"exit"));
        assert!(aliases.contains(&"/exit"));
    }
}
