use crate::domain::model::Seed;

/// Position-weighted sum of the name's UTF-16 code units.
///
/// No normalization: `"Holden"` and `"holden "` give different seeds, and
/// distinct names may share one.
pub fn derive_seed(name: &str) -> Seed {
    let sum = name
        .encode_utf16()
        .enumerate()
        .fold(0u64, |acc, (index, unit)| {
            acc.wrapping_add(u64::from(unit).wrapping_mul(index as u64 + 1))
        });
    Seed(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_is_zero() {
        assert_eq!(derive_seed(""), Seed(0));
    }

    #[test]
    fn test_position_weighting() {
        assert_eq!(derive_seed("A"), Seed(65));
        assert_eq!(derive_seed("AB"), Seed(65 + 66 * 2));
        assert_eq!(derive_seed("BA"), Seed(66 + 65 * 2));
        assert_eq!(derive_seed("Holden"), Seed(2183));
    }

    #[test]
    fn test_no_canonicalization() {
        assert_ne!(derive_seed("Holden"), derive_seed("holden"));
        assert_ne!(derive_seed("Holden"), derive_seed(" Holden"));
    }

    #[test]
    fn test_collisions_are_possible() {
        // 'b'(98) + 'a'(97)*2 == 292 == 'Z'(90) + 'e'(101)*2
        assert_eq!(derive_seed("ba"), derive_seed("Ze"));
    }

    #[test]
    fn test_astral_characters_count_as_two_units() {
        // U+1F600 encodes as 0xD83D 0xDE00
        assert_eq!(derive_seed("\u{1F600}"), Seed(0xD83D + 0xDE00 * 2));
    }
}
