use super::{Command, CommandResult, parse_position};
use crate::session::Session;

/// Delete a saved excuse by id or by its position in `/saved`.
pub struct DeleteCommand;

impl Command for DeleteCommand {
    fn name(&self) -> &str {
        "/delete"
    }

    fn aliases(&self) -> &[&str] {
        &["/rm"]
    }

    fn usage(&self) -> &str {
        "<id|n>"
    }

    fn description(&self) -> &str {
        "delete a saved excuse"
    }

    fn execute(&self, args: &str, session: &mut Session) -> CommandResult {
        if args.is_empty() {
            eprintln!("  ✗ usage: /delete <id|n>");
            return CommandResult::Handled;
        }

        let saved = session.store.list();
        // An exact id wins over a position.
        let target = saved
            .iter()
            .find(|excuse| excuse.id == args)
            .or_else(|| parse_position(args).and_then(|n| saved.get(n - 1)));

        let Some(excuse) = target else {
            eprintln!("  ✗ no saved excuse matches {args}");
            return CommandResult::Handled;
        };

        match session.store.delete(&excuse.id) {
            Ok(()) => println!("  ✓ excuse deleted from your collection"),
            Err(e) => eprintln!("  ✗ failed to delete excuse: {e}"),
        }
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::session_with_batch;

    fn session_with_saved() -> Session {
        let session = session_with_batch();
        for excuse in &session.batch {
            session.store.save(excuse).unwrap();
        }
        session
    }

    #[test]
    fn deletes_by_id() {
        let mut session = session_with_saved();
        let id = session.batch[0].id.clone();
        DeleteCommand.execute(&id, &mut session);
        assert!(!session.store.contains(&id));
        assert_eq!(session.store.list().len(), 2);
    }

    #[test]
    fn deletes_by_position_in_listing() {
        let mut session = session_with_saved();
        // Newest first: position 1 is the last one saved.
        let newest = session.store.list()[0].id.clone();
        DeleteCommand.execute("1", &mut session);
        assert!(!session.store.contains(&newest));
        assert_eq!(session.store.list().len(), 2);
    }

    #[test]
    fn unknown_target_deletes_nothing() {
        let mut session = session_with_saved();
        DeleteCommand.execute("nope", &mut session);
        DeleteCommand.execute("9", &mut session);
        DeleteCommand.execute("", &mut session);
        assert_eq!(session.store.list().len(), 3);
    }
}
