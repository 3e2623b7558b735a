use super::{Command, CommandResult};
use crate::session::Session;

/// Regenerate from the last situation and reason.
pub struct MoreCommand;

impl Command for MoreCommand {
    fn name(&self) -> &str {
        "/more"
    }

    fn aliases(&self) -> &[&str] {
        &["/again"]
    }

    fn description(&self) -> &str {
        "generate more excuses for the last situation"
    }

    fn execute(&self, _args: &str, session: &mut Session) -> CommandResult {
        match &session.last_request {
            Some(request) => CommandResult::Generate(request.clone()),
            None => {
                println!("  nothing to regenerate yet. type a situation first");
                CommandResult::Handled
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::{session_with_batch, test_session};

    #[test]
    fn handled_without_previous_request() {
        assert!(matches!(
            MoreCommand.execute("", &mut test_session()),
            CommandResult::Handled
        ));
    }

    #[test]
    fn repeats_last_request() {
        let mut session = session_with_batch();
        match MoreCommand.execute("", &mut session) {
            CommandResult::Generate(request) => {
                assert_eq!(request.situation, "team meeting");
                assert_eq!(request.reason, "overslept");
            }
            other => panic!("expected Generate, got {other:?}"),
        }
    }
}
