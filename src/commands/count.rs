use super::{Command, CommandResult};
use crate::config;
use crate::session::Session;

/// Show or change how many excuses each batch has.
pub struct CountCommand;

impl Command for CountCommand {
    fn name(&self) -> &str {
        "/count"
    }

    fn usage(&self) -> &str {
        "[n]"
    }

    fn description(&self) -> &str {
        "show or set how many excuses to generate"
    }

    fn execute(&self, args: &str, session: &mut Session) -> CommandResult {
        if args.is_empty() {
            println!("  generating {} excuses per batch", session.count);
            return CommandResult::Handled;
        }

        let count = match args.parse::<usize>() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("  ✗ not a number: {args}");
                return CommandResult::Handled;
            }
        };

        match config::set_excuse_count(session.store.kv(), count) {
            Ok(()) => {
                session.count = count;
                println!("  ✓ generating {count} excuses per batch");
            }
            Err(e) => eprintln!("  ✗ {e}"),
        }
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_session;
    use crate::consts::{DEFAULT_EXCUSE_COUNT, MAX_EXCUSE_COUNT};

    #[test]
    fn sets_and_persists_count() {
        let mut session = test_session();
        CountCommand.execute("5", &mut session);
        assert_eq!(session.count, 5);
        assert_eq!(config::excuse_count(session.store.kv()), 5);
    }

    #[test]
    fn rejects_out_of_range() {
        let mut session = test_session();
        CountCommand.execute("0", &mut session);
        CountCommand.execute(&(MAX_EXCUSE_COUNT + 1).to_string(), &mut session);
        CountCommand.execute("many", &mut session);
        assert_eq!(session.count, DEFAULT_EXCUSE_COUNT);
    }

    #[test]
    fn no_args_shows_count() {
        assert!(matches!(
            CountCommand.execute("", &mut test_session()),
            CommandResult::Handled
        ));
    }
}
