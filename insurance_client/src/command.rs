//! Interactive commands typed at the client prompt.
use insurance_common::{QuoteError, Result};

use crate::form::FormField;
use crate::i18n::Language;
use crate::view::SortKey;

/// Usage text printed by `help`.
pub const HELP: &str = "\
Commands:
  quote                  submit the form
  set <field> <value>    edit a field (model, year, city, accidents, driver_age)
  sort company|price     sort by column; repeat to reverse
  filter [text]          filter companies by name; no text clears
  lang ar|en             switch language
  show                   print the form and the offers
  help                   this message
  quit                   exit";

/// A parsed prompt line.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientCommand {
    /// Submit the form to the server.
    Submit,
    /// Replace a form field.
    Set(FormField, String),
    /// Sort by a column (toggles when already active).
    Sort(SortKey),
    /// Replace the filter text.
    Filter(String),
    /// Switch language.
    Lang(Language),
    /// Re-render the screen.
    Show,
    /// Print usage.
    Help,
    /// Leave the client.
    Quit,
}

impl ClientCommand {
    /// Parse one prompt line.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match name.to_ascii_lowercase().as_str() {
            "quote" | "calc" | "submit" => Ok(ClientCommand::Submit),
            "set" => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let field = field
                    .parse::<FormField>()
                    .map_err(|_| QuoteError::Format(format!("unknown field: {}", field)))?;
                Ok(ClientCommand::Set(field, value.trim().to_string()))
            }
            "sort" => rest
                .parse::<SortKey>()
                .map(ClientCommand::Sort)
                .map_err(|_| QuoteError::Format(format!("unknown column: {}", rest))),
            "filter" => Ok(ClientCommand::Filter(rest.to_string())),
            "lang" => rest
                .parse::<Language>()
                .map(ClientCommand::Lang)
                .map_err(|_| QuoteError::Format(format!("unknown language: {}", rest))),
            "show" | "" => Ok(ClientCommand::Show),
            "help" | "?" => Ok(ClientCommand::Help),
            "quit" | "exit" => Ok(ClientCommand::Quit),
            other => Err(QuoteError::Format(format!("unknown command: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_commands() {
        assert_eq!(ClientCommand::parse("quote").unwrap(), ClientCommand::Submit);
        assert_eq!(ClientCommand::parse("  QUIT ").unwrap(), ClientCommand::Quit);
        assert_eq!(ClientCommand::parse("").unwrap(), ClientCommand::Show);
        assert_eq!(ClientCommand::parse("help").unwrap(), ClientCommand::Help);
    }

    #[test]
    fn parses_set_with_spaces_in_value() {
        assert_eq!(
            ClientCommand::parse("set model Land Cruiser").unwrap(),
            ClientCommand::Set(FormField::Model, "Land Cruiser".to_string())
        );
        assert_eq!(
            ClientCommand::parse("set city").unwrap(),
            ClientCommand::Set(FormField::City, String::new())
        );
    }

    #[test]
    fn parses_sort_filter_and_lang() {
        assert_eq!(
            ClientCommand::parse("sort Price").unwrap(),
            ClientCommand::Sort(SortKey::Price)
        );
        assert_eq!(
            ClientCommand::parse("filter tam").unwrap(),
            ClientCommand::Filter("tam".to_string())
        );
        assert_eq!(
            ClientCommand::parse("filter").unwrap(),
            ClientCommand::Filter(String::new())
        );
        assert_eq!(
            ClientCommand::parse("lang en").unwrap(),
            ClientCommand::Lang(Language::En)
        );
    }

    #[test]
    fn rejects_unknown_input() {
        assert!(matches!(ClientCommand::parse("dance"), Err(QuoteError::Format(_))));
        assert!(ClientCommand::parse("sort rating").is_err());
        assert!(ClientCommand::parse("lang fr").is_err());
        assert!(ClientCommand::parse("set colour red").is_err());
    }
}
