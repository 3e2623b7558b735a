use super::{Command, CommandResult};
use crate::category::Category;
use crate::session::Session;

/// Force a template category, or go back to keyword matching.
pub struct CategoryCommand;

impl Command for CategoryCommand {
    fn name(&self) -> &str {
        "/category"
    }

    fn usage(&self) -> &str {
        "[name|auto]"
    }

    fn description(&self) -> &str {
        "force professional, personal, social or default templates"
    }

    fn execute(&self, args: &str, session: &mut Session) -> CommandResult {
        match args {
            "" => match session.category {
                Some(category) => println!("  using {category} templates"),
                None => println!("  picking templates from the situation"),
            },
            "auto" => {
                session.category = None;
                println!("  ✓ picking templates from the situation");
            }
            name => match name.parse::<Category>() {
                Ok(category) => {
                    session.category = Some(category);
                    println!("  ✓ using {category} templates");
                }
                Err(e) => eprintln!("  ✗ {e}"),
            },
        }
        CommandResult::Handled
    }
}
