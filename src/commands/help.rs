use super::{Command, CommandResult};
use crate::session::Session;

/// Dispatched by the registry itself, which owns the command list.
pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &str {
        "/help"
    }

    fn aliases(&self) -> &[&str] {
        &["/h", "/?"]
    }

    fn description(&self) -> &str {
        "show this help"
    }

    fn execute(&self, _args: &str, _session: &mut Session) -> CommandResult {
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandRegistry;
    use crate::commands::tests::test_session;

    #[test]
    fn handled_through_registry() {
        let reg = CommandRegistry::new();
        for trigger in ["/help", "/h", "/?"] {
            assert!(matches!(
                reg.dispatch(trigger, &mut test_session()),
                CommandResult::Handled
            ));
        }
    }
}
