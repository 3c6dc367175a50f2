//! Command-line parsing for the interactive loop.

use crate::error::{CommandError, CommandResult};

/// One parsed user command.
///
/// Input is lowercased before parsing, so names and phone tokens arrive
/// lowercased too; two-word commands (`show all`, `good bye`) are matched
/// before tokenization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `hello`
    Hello,

    /// `add <name> [<token>...]` — all-digit tokens are phone candidates,
    /// the first non-digit token is the birthday candidate.
    Add {
        name: String,
        phones: Vec<String>,
        birthday: Option<String>,
    },

    /// `edit <name> <old_phone> <new_phone>`
    Edit {
        name: String,
        old_phone: String,
        new_phone: String,
    },

    /// `search <field> <value>`
    Search { field: String, value: String },

    /// `show all`
    ShowAll,

    /// `save`
    Save,

    /// `good bye` / `close` / `exit`
    Exit,
}

impl Command {
    /// Parse one input line.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::Unknown` for an unrecognized command word and
    /// `CommandError::Usage` for a recognized command with the wrong number
    /// of arguments. Malformed input is never a panic.
    pub fn parse(line: &str) -> CommandResult<Self> {
        let line = line.trim().to_lowercase();

        match line.as_str() {
            "hello" => return Ok(Self::Hello),
            "show all" => return Ok(Self::ShowAll),
            "save" => return Ok(Self::Save),
            "good bye" | "close" | "exit" => return Ok(Self::Exit),
            _ => {}
        }

        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("add") => {
                let name = tokens
                    .next()
                    .ok_or(CommandError::Usage("add <name> [<phone>...] [<birthday>]"))?
                    .to_string();

                let mut phones = Vec::new();
                let mut birthday = None;
                for token in tokens {
                    if token.chars().all(|c| c.is_ascii_digit()) {
                        phones.push(token.to_string());
                    } else if birthday.is_none() {
                        birthday = Some(token.to_string());
                    }
                    // further non-digit tokens are ignored
                }

                Ok(Self::Add {
                    name,
                    phones,
                    birthday,
                })
            }
            Some("edit") => {
                let args: Vec<&str> = tokens.collect();
                match args.as_slice() {
                    [name, old_phone, new_phone] => Ok(Self::Edit {
                        name: name.to_string(),
                        old_phone: old_phone.to_string(),
                        new_phone: new_phone.to_string(),
                    }),
                    _ => Err(CommandError::Usage("edit <name> <old_phone> <new_phone>")),
                }
            }
            Some("search") => {
                let args: Vec<&str> = tokens.collect();
                match args.as_slice() {
                    [field, value] => Ok(Self::Search {
                        field: field.to_string(),
                        value: value.to_string(),
                    }),
                    _ => Err(CommandError::Usage("search <name|phone> <value>")),
                }
            }
            Some(other) => Err(CommandError::Unknown(other.to_string())),
            None => Err(CommandError::Unknown(String::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixed_commands() {
        assert_eq!(Command::parse("hello").unwrap(), Command::Hello);
        assert_eq!(Command::parse("show all").unwrap(), Command::ShowAll);
        assert_eq!(Command::parse("save").unwrap(), Command::Save);
        assert_eq!(Command::parse("good bye").unwrap(), Command::Exit);
        assert_eq!(Command::parse("close").unwrap(), Command::Exit);
        assert_eq!(Command::parse("exit").unwrap(), Command::Exit);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Command::parse("HELLO").unwrap(), Command::Hello);
        assert_eq!(Command::parse("  Show All  ").unwrap(), Command::ShowAll);
    }

    #[test]
    fn test_parse_add_classifies_tokens() {
        let cmd = Command::parse("add bob 123456789 1990-06-15 987654321").unwrap();
        assert_eq!(
            cmd,
            Command::Add {
                name: "bob".to_string(),
                phones: vec!["123456789".to_string(), "987654321".to_string()],
                birthday: Some("1990-06-15".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_add_only_first_nondigit_is_birthday() {
        let cmd = Command::parse("add bob 1990-06-15 2000-01-01").unwrap();
        assert_eq!(
            cmd,
            Command::Add {
                name: "bob".to_string(),
                phones: vec![],
                birthday: Some("1990-06-15".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_add_without_name_is_usage_error() {
        assert!(matches!(
            Command::parse("add"),
            Err(CommandError::Usage(_))
        ));
    }

    #[test]
    fn test_parse_edit() {
        let cmd = Command::parse("edit bob 111111111 222222222").unwrap();
        assert_eq!(
            cmd,
            Command::Edit {
                name: "bob".to_string(),
                old_phone: "111111111".to_string(),
                new_phone: "222222222".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_edit_wrong_arity_is_usage_error() {
        assert!(matches!(Command::parse("edit bob"), Err(CommandError::Usage(_))));
        assert!(matches!(
            Command::parse("edit bob 1 2 3"),
            Err(CommandError::Usage(_))
        ));
    }

    #[test]
    fn test_parse_search() {
        let cmd = Command::parse("search phone 123456789").unwrap();
        assert_eq!(
            cmd,
            Command::Search {
                field: "phone".to_string(),
                value: "123456789".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_unknown_and_blank() {
        assert!(matches!(
            Command::parse("frobnicate the widgets"),
            Err(CommandError::Unknown(_))
        ));
        assert!(matches!(Command::parse(""), Err(CommandError::Unknown(_))));
        assert!(matches!(Command::parse("   "), Err(CommandError::Unknown(_))));
    }
}
