/// Outcome of the moderation pre-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationVerdict {
    Delete,
    Safe,
}

impl ModerationVerdict {
    /// Only an exact `delete` (after trimming and lowercasing) flags the
    /// text; any other model output counts as safe.
    pub fn from_output(output: &str) -> Self {
        if output.trim().to_lowercase() == "delete" {
            Self::Delete
        } else {
            Self::Safe
        }
    }
}

/// Removes every double-quote character from generated text.
pub fn strip_quotes(text: &str) -> String {
    text.replace('"', "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("delete", ModerationVerdict::Delete)]
    #[case("  DELETE\n", ModerationVerdict::Delete)]
    #[case("Delete", ModerationVerdict::Delete)]
    #[case("safe", ModerationVerdict::Safe)]
    #[case("delete.", ModerationVerdict::Safe)]
    #[case("I would delete this", ModerationVerdict::Safe)]
    #[case("", ModerationVerdict::Safe)]
    fn test_verdict_from_output(#[case] output: &str, #[case] expected: ModerationVerdict) {
        assert_eq!(ModerationVerdict::from_output(output), expected);
    }

    #[test]
    fn test_strip_quotes_only_touches_double_quotes() {
        assert_eq!(
            strip_quotes("\"Great question!\" It's easy."),
            "Great question! It's easy."
        );
        assert_eq!(strip_quotes("  no quotes  "), "  no quotes  ");
    }
}
