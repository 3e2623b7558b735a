use super::{Command, CommandResult, parse_position};
use crate::session::Session;

/// Save an excuse from the current batch to the collection.
pub struct SaveCommand;

impl Command for SaveCommand {
    fn name(&self) -> &str {
        "/save"
    }

    fn usage(&self) -> &str {
        "<n>"
    }

    fn description(&self) -> &str {
        "save the nth excuse of the last batch"
    }

    fn execute(&self, args: &str, session: &mut Session) -> CommandResult {
        if session.batch.is_empty() {
            println!("  nothing to save yet. type a situation first");
            return CommandResult::Handled;
        }
        let excuse = match parse_position(args).and_then(|n| session.batch_entry(n)) {
            Some(excuse) => excuse.clone(),
            None => {
                eprintln!("  ✗ usage: /save <1-{}>", session.batch.len());
                return CommandResult::Handled;
            }
        };

        if session.store.contains(&excuse.id) {
            println!("  already saved");
            return CommandResult::Handled;
        }

        match session.store.save(&excuse) {
            Ok(()) => println!("  ✓ excuse saved to your collection"),
            Err(e) => eprintln!("  ✗ failed to save excuse: {e}"),
        }
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::{session_with_batch, test_session};

    #[test]
    fn saves_nth_excuse() {
        let mut session = session_with_batch();
        SaveCommand.execute("2", &mut session);
        let saved = session.store.list();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0], session.batch[1]);
    }

    #[test]
    fn saving_twice_keeps_one_copy() {
        let mut session = session_with_batch();
        SaveCommand.execute("1", &mut session);
        SaveCommand.execute("1", &mut session);
        assert_eq!(session.store.list().len(), 1);
    }

    #[test]
    fn bad_position_saves_nothing() {
        let mut session = session_with_batch();
        for args in ["", "0", "4", "first"] {
            assert!(matches!(
                SaveCommand.execute(args, &mut session),
                CommandResult::Handled
            ));
        }
        assert!(session.store.list().is_empty());
    }

    #[test]
    fn empty_batch_is_handled() {
        let mut session = test_session();
        assert!(matches!(
            SaveCommand.execute("1", &mut session),
            CommandResult::Handled
        ));
    }
}
