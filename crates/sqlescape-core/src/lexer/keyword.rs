//! Escape clause keywords.

/// Keywords recognized right after an escape-opening brace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EscapeKeyword {
    /// `{fn ...}` scalar function call.
    Fn,
    /// `{escape '...'}` LIKE escape character.
    Escape,
    /// `{call ...}` stored procedure call.
    Call,
    /// `{oj ...}` outer join.
    Oj,
    /// `{ts '...'}` timestamp literal.
    Ts,
    /// `{t '...'}` time literal.
    T,
    /// `{d '...'}` date literal.
    D,
    /// `{params ...}` parameter list marker.
    Params,
}

impl EscapeKeyword {
    /// Looks up a whitespace-delimited token, ignoring ASCII case.
    ///
    /// The whole token must match; `oj` does not match `ojx`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "fn" => Some(Self::Fn),
            "escape" => Some(Self::Escape),
            "call" => Some(Self::Call),
            "oj" => Some(Self::Oj),
            "ts" => Some(Self::Ts),
            "t" => Some(Self::T),
            "d" => Some(Self::D),
            "params" => Some(Self::Params),
            _ => None,
        }
    }

    /// Returns the keyword as written in the escape syntax.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fn => "fn",
            Self::Escape => "escape",
            Self::Call => "call",
            Self::Oj => "oj",
            Self::Ts => "ts",
            Self::T => "t",
            Self::D => "d",
            Self::Params => "params",
        }
    }

    /// Number of leading characters of the keyword replaced by spaces.
    ///
    /// Zero means the keyword is native syntax for the backend and stays.
    #[must_use]
    pub const fn blank_len(&self) -> usize {
        match self {
            Self::Fn | Self::Oj => 2,
            Self::Params => 6,
            Self::Escape | Self::Call | Self::Ts | Self::T | Self::D => 0,
        }
    }
}

impl core::fmt::Display for EscapeKeyword {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_from_token() {
        assert_eq!(EscapeKeyword::from_token("fn"), Some(EscapeKeyword::Fn));
        assert_eq!(EscapeKeyword::from_token("FN"), Some(EscapeKeyword::Fn));
        assert_eq!(EscapeKeyword::from_token("CaLl"), Some(EscapeKeyword::Call));
        assert_eq!(EscapeKeyword::from_token("PARAMS"), Some(EscapeKeyword::Params));
        assert_eq!(EscapeKeyword::from_token("limit"), None);
    }

    #[test]
    fn test_keyword_is_exact_token() {
        assert_eq!(EscapeKeyword::from_token("ojx"), None);
        assert_eq!(EscapeKeyword::from_token("fnord"), None);
        assert_eq!(EscapeKeyword::from_token("tss"), None);
        assert_eq!(EscapeKeyword::from_token(""), None);
    }

    #[test]
    fn test_keyword_blank_len() {
        assert_eq!(EscapeKeyword::Fn.blank_len(), 2);
        assert_eq!(EscapeKeyword::Oj.blank_len(), 2);
        assert_eq!(EscapeKeyword::Params.blank_len(), 6);
        assert_eq!(EscapeKeyword::Call.blank_len(), 0);
        assert_eq!(EscapeKeyword::Ts.blank_len(), 0);
    }

    #[test]
    fn test_blank_len_never_exceeds_keyword() {
        for keyword in [
            EscapeKeyword::Fn,
            EscapeKeyword::Escape,
            EscapeKeyword::Call,
            EscapeKeyword::Oj,
            EscapeKeyword::Ts,
            EscapeKeyword::T,
            EscapeKeyword::D,
            EscapeKeyword::Params,
        ] {
            assert!(keyword.blank_len() <= keyword.as_str().len());
            assert_eq!(EscapeKeyword::from_token(keyword.as_str()), Some(keyword));
        }
    }
}
