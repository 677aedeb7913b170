// Binary-mode payload capacity in bytes, index = version - 1.
pub const MAX_BINARY_CHARS: [usize; 40] = [
    14, 26, 42, 62, 84, 106, 122, 152, 180, 213, 251, 287, 331, 362, 412, 450, 504, 560, 624, 666,
    711, 779, 857, 911, 997, 1059, 1125, 1190, 1264, 1370, 1452, 1538, 1628, 1722, 1809, 1911,
    1989, 2099, 2213, 2331,
];

/// Bits of the one-hot mode indicator.
pub const MODE_INDICATOR_BITS: usize = 4;

/// Bits of the length field (low byte of the payload length).
pub const LENGTH_BITS: usize = 8;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_strictly_increasing() {
        assert!(MAX_BINARY_CHARS.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(MAX_BINARY_CHARS[0], 14);
        assert_eq!(MAX_BINARY_CHARS[39], 2331);
    }
}
