//! Centralized validation helpers.

use crate::core::table::Value;

/// The 20 standard single-letter amino acid codes
pub const STANDARD_AMINO_ACIDS: &[u8; 20] = b"ACDEFGHIKLMNPQRSTVWY";

/// Check that a string is a non-empty sequence of standard amino acids.
///
/// # Examples
///
/// ```
/// use tcr_converter::utils::validation::is_amino_acid_sequence;
///
/// assert!(is_amino_acid_sequence("CASSLGTDTQYF"));
/// assert!(!is_amino_acid_sequence(""));
/// assert!(!is_amino_acid_sequence("CASX1LG"));
/// assert!(!is_amino_acid_sequence("cassf")); // lowercase is not a standard code
/// ```
#[must_use]
pub fn is_amino_acid_sequence(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| STANDARD_AMINO_ACIDS.contains(&b))
}

/// Check whether a cell holds a valid CDR3 amino acid sequence.
///
/// Absent cells and numbers are invalid.
#[must_use]
pub fn is_valid_cdr3(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_text)
        .is_some_and(is_amino_acid_sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_cdr3() {
        assert!(is_valid_cdr3(Some(&Value::text("CASSLGTDTQYF"))));
        assert!(is_valid_cdr3(Some(&Value::text("W"))));
    }

    #[test]
    fn test_invalid_cdr3() {
        assert!(!is_valid_cdr3(None));
        assert!(!is_valid_cdr3(Some(&Value::text(""))));
        assert!(!is_valid_cdr3(Some(&Value::text("CASX1LG"))));
        assert!(!is_valid_cdr3(Some(&Value::text("CASS*F"))));
        assert!(!is_valid_cdr3(Some(&Value::text("CASS F"))));
        assert!(!is_valid_cdr3(Some(&Value::Number(42.0))));
    }

    #[test]
    fn test_non_standard_letters_rejected() {
        // B, J, O, U, X, Z are not among the 20 standard codes
        for letter in ["B", "J", "O", "U", "X", "Z"] {
            assert!(!is_amino_acid_sequence(letter), "{letter} accepted");
        }
    }

    #[test]
    fn test_non_ascii_rejected() {
        assert!(!is_amino_acid_sequence("CASSÅF"));
    }

    #[test]
    fn test_all_standard_letters_accepted() {
        let all = std::str::from_utf8(STANDARD_AMINO_ACIDS).unwrap();
        assert!(is_amino_acid_sequence(all));
    }
}
