//! Cyclic XOR primitive shared by every RobTop obfuscation scheme.

/// XOR `input` against `key` repeated cyclically.
///
/// The transform is involutive: applying it twice with the same key returns
/// the original bytes. An empty key leaves the input untouched, matching
/// what the game client does.
///
/// # Example
///
/// ```
/// use robtop_crypto::xor_cipher;
///
/// let scrambled = xor_cipher(b"hello", b"37526");
/// assert_eq!(xor_cipher(&scrambled, b"37526"), b"hello");
/// ```
#[must_use]
pub fn xor_cipher(input: &[u8], key: &[u8]) -> Vec<u8> {
    if key.is_empty() {
        return input.to_vec();
    }
    input
        .iter()
        .zip(key.iter().cycle())
        .map(|(byte, key_byte)| byte ^ key_byte)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xor_is_involutive() {
        let plaintext = b"some secret value with spaces and $ymbols";
        let key = b"37526";

        let scrambled = xor_cipher(plaintext, key);
        assert_ne!(scrambled.as_slice(), plaintext.as_slice());
        assert_eq!(xor_cipher(&scrambled, key), plaintext);
    }

    #[test]
    fn test_xor_key_cycles_past_input_length() {
        // Key longer than input: only the key prefix matters.
        let short = xor_cipher(b"ab", b"37526");
        assert_eq!(short, vec![b'a' ^ b'3', b'b' ^ b'7']);
    }

    #[test]
    fn test_xor_empty_input() {
        assert!(xor_cipher(b"", b"37526").is_empty());
    }

    #[test]
    fn test_xor_empty_key_is_identity() {
        assert_eq!(xor_cipher(b"unchanged", b""), b"unchanged");
    }

    #[test]
    fn test_xor_different_keys_differ() {
        let a = xor_cipher(b"payload", b"14251");
        let b = xor_cipher(b"payload", b"26364");
        assert_ne!(a, b);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Applying the cipher twice returns the original input for any
            /// input and any non-empty key.
            #[test]
            fn xor_round_trip(
                input in prop::collection::vec(any::<u8>(), 0..256),
                key in prop::collection::vec(any::<u8>(), 1..16)
            ) {
                let scrambled = xor_cipher(&input, &key);
                prop_assert_eq!(xor_cipher(&scrambled, &key), input);
            }

            /// Output length always matches input length.
            #[test]
            fn xor_preserves_length(
                input in prop::collection::vec(any::<u8>(), 0..256),
                key in prop::collection::vec(any::<u8>(), 0..16)
            ) {
                prop_assert_eq!(xor_cipher(&input, &key).len(), input.len());
            }
        }
    }
}
