/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

/// Numeric seeds are used as-is, anything else is hashed (FNV-1a) so that words work as seeds too.
pub(crate) fn seed_from_str(seed: &str) -> u64 {
    if let Ok(seed) = seed.parse() {
        return seed;
    }
    seed.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(0x0000_0100_0000_01b3)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_seed_is_kept() {
        assert_eq!(seed_from_str("42"), 42);
    }

    #[test]
    fn word_seed_is_stable_and_distinct() {
        assert_eq!(seed_from_str("flood"), seed_from_str("flood"));
        assert_ne!(seed_from_str("flood"), seed_from_str("flooded"));
        assert_eq!(seed_from_str(""), 0xcbf2_9ce4_8422_2325);
    }
}
