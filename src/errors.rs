use std::fmt;

/// Errors reported by the layout engine through its error callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorType {
    /// Thrown if the text measurement function is never provided to the engine
    TextMeasurementFunctionNotProvided,
    ArenaCapacityExceeded,
    /// More elements were declared than the engine has room for. Recovered by doubling the
    /// element capacity and reinitializing.
    ElementsCapacityExceeded,
    /// The text measurement cache is full. Recovered by doubling the cache word count and
    /// reinitializing.
    TextMeasurementCapacityExceeded,
    /// Thrown if you are trying to use an id that's already used by some other element
    DuplicateId,
    /// Floating container require a parent, the following error is thrown if the parent is not
    /// found
    FloatingContainerParentNotFound,
    InternalError,
}

#[derive(Debug, Clone, Copy)]
pub struct Error<'a> {
    pub type_: ErrorType,
    pub text: &'a str,
}

/// The style field a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleField {
    Align,
    Scroll,
    CornerRadius,
    Border,
    Width,
    Height,
}

impl StyleField {
    /// The grammar of the field's token, with an example.
    pub fn grammar(&self) -> &'static str {
        match self {
            StyleField::Align => "{vertical}{horizontal} with t/c/b then l/c/r, ex: cc",
            StyleField::Scroll => "one of v, h or b",
            StyleField::CornerRadius => "{direction}-{size} ex: t-sm",
            StyleField::Border => "{side}-{width} ex: t-50",
            StyleField::Width | StyleField::Height => "{typing}-{size} ex: fit-0",
        }
    }
}

impl fmt::Display for StyleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StyleField::Align => "align",
            StyleField::Scroll => "scroll",
            StyleField::CornerRadius => "corner radius",
            StyleField::Border => "border",
            StyleField::Width => "width",
            StyleField::Height => "height",
        };
        f.write_str(name)
    }
}

/// A style token that breaks its field's grammar.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StyleError {
    #[error(
        "{field} token `{token}` is longer than {max} characters, format is {}",
        .field.grammar()
    )]
    TooLong {
        field: StyleField,
        token: String,
        max: usize,
    },
    #[error("{field} token `{token}` is malformed, format is {}", .field.grammar())]
    Malformed { field: StyleField, token: String },
    #[error("{field} token `{token}` has unknown {part} `{value}`, format is {}", .field.grammar())]
    Unknown {
        field: StyleField,
        token: String,
        part: &'static str,
        value: String,
    },
    #[error(
        "{field} token `{token}` has invalid number `{value}`, format is {}",
        .field.grammar()
    )]
    InvalidNumber {
        field: StyleField,
        token: String,
        value: String,
    },
}

impl StyleError {
    pub fn field(&self) -> StyleField {
        match self {
            StyleError::TooLong { field, .. }
            | StyleError::Malformed { field, .. }
            | StyleError::Unknown { field, .. }
            | StyleError::InvalidNumber { field, .. } => *field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_grammar() {
        let error = StyleError::Malformed {
            field: StyleField::Width,
            token: "fit".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "width token `fit` is malformed, format is {typing}-{size} ex: fit-0"
        );
        assert_eq!(error.field(), StyleField::Width);
    }

    #[test]
    fn length_and_number_messages_name_the_grammar() {
        let too_long = StyleError::TooLong {
            field: StyleField::Align,
            token: "tlc".to_string(),
            max: 2,
        };
        assert_eq!(
            too_long.to_string(),
            "align token `tlc` is longer than 2 characters, \
             format is {vertical}{horizontal} with t/c/b then l/c/r, ex: cc"
        );

        let invalid = StyleError::InvalidNumber {
            field: StyleField::Border,
            token: "a-5x".to_string(),
            value: "5x".to_string(),
        };
        assert_eq!(
            invalid.to_string(),
            "border token `a-5x` has invalid number `5x`, format is {side}-{width} ex: t-50"
        );
    }
}
