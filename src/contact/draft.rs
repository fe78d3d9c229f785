use std::fmt;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Contact,
    Message,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DraftField::Name => "name",
            DraftField::Contact => "contact",
            DraftField::Message => "message",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum DraftError {
    #[error("missing fields: {}", list(.missing))]
    Incomplete { missing: Vec<DraftField> },
}

fn list(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// What the visitor typed into the contact form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub contact: String,
    pub message: String,
}

impl ContactDraft {
    pub fn missing_fields(&self) -> Vec<DraftField> {
        [
            (DraftField::Name, &self.name),
            (DraftField::Contact, &self.contact),
            (DraftField::Message, &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Every field needs some non-whitespace text.
    pub fn validate(&self) -> Result<(), DraftError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DraftError::Incomplete { missing })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_draft_passes() {
        let draft = ContactDraft {
            name: "Sam".into(),
            contact: "sam@x.com".into(),
            message: "Build me a site".into(),
        };
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn whitespace_only_fields_are_missing() {
        let draft = ContactDraft {
            name: "  ".into(),
            contact: "sam@x.com".into(),
            message: "\n\t".into(),
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(
            err,
            DraftError::Incomplete {
                missing: vec![DraftField::Name, DraftField::Message]
            }
        );
        assert_eq!(err.to_string(), "missing fields: name, message");
    }

    #[test]
    fn empty_draft_misses_everything() {
        assert_eq!(ContactDraft::default().missing_fields().len(), 3);
    }
}
