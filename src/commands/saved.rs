use super::{Command, CommandResult};
use crate::render;
use crate::session::Session;

pub struct SavedCommand;

impl Command for SavedCommand {
    fn name(&self) -> &str {
        "/saved"
    }

    fn aliases(&self) -> &[&str] {
        &["/list"]
    }

    fn description(&self) -> &str {
        "show your saved excuses, newest first"
    }

    fn execute(&self, _args: &str, session: &mut Session) -> CommandResult {
        print!("{}", render::saved(&session.store.list()));
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_session;

    #[test]
    fn metadata() {
        assert_eq!(SavedCommand.name(), "/saved");
        assert!(SavedCommand.aliases().contains(&"/list"));
        assert!(!SavedCommand.description().is_empty());
    }

    #[test]
    fn empty_collection_is_handled() {
        assert!(matches!(
            SavedCommand.execute("", &mut test_session()),
            CommandResult::Handled
        ));
    }
}
