//! Submission validator
//!
//! Pure check of a submitted value against a challenge's accepted flags.
//! Never mutates state; unknown challenge ids are handled by the caller
//! before reaching this point.

use crate::models::Challenge;
use crate::utils::crypto::verify_flag;

/// Result of checking a submitted flag value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagCheck {
    Correct,
    Incorrect,
}

/// Check a submitted value against the challenge's accepted flags.
///
/// A challenge may accept several equivalent flag values; any match wins.
/// Comparison goes through the stored SHA-256 digests, never raw strings.
pub fn check_flag(challenge: &Challenge, submitted: &str) -> FlagCheck {
    if challenge
        .flag_hashes()
        .iter()
        .any(|stored| verify_flag(submitted, stored))
    {
        FlagCheck::Correct
    } else {
        FlagCheck::Incorrect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn challenge(flags: &[&str]) -> Challenge {
        Challenge::new(Uuid::new_v4(), "web100", 100, "web", flags)
    }

    #[test]
    fn test_correct_flag() {
        let c = challenge(&["CTF{right}"]);
        assert_eq!(check_flag(&c, "CTF{right}"), FlagCheck::Correct);
    }

    #[test]
    fn test_incorrect_flag() {
        let c = challenge(&["CTF{right}"]);
        assert_eq!(check_flag(&c, "CTF{wrong}"), FlagCheck::Incorrect);
        assert_eq!(check_flag(&c, ""), FlagCheck::Incorrect);
        // Exact match only, no trimming or case folding
        assert_eq!(check_flag(&c, "ctf{right}"), FlagCheck::Incorrect);
        assert_eq!(check_flag(&c, " CTF{right}"), FlagCheck::Incorrect);
    }

    #[test]
    fn test_any_of_multiple_flags_matches() {
        let c = challenge(&["CTF{one}", "CTF{two}"]);
        assert_eq!(check_flag(&c, "CTF{one}"), FlagCheck::Correct);
        assert_eq!(check_flag(&c, "CTF{two}"), FlagCheck::Correct);
        assert_eq!(check_flag(&c, "CTF{three}"), FlagCheck::Incorrect);
    }
}
