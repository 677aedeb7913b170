use super::ModuleMatrix;
use crate::encoder::tables::MAX_BINARY_CHARS;

/// QR symbol version (1-40)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest version (21x21)
    pub const MIN: Version = Version(1);
    /// Largest version (177x177)
    pub const MAX: Version = Version(40);

    /// Version with the given number, `None` outside 1-40
    pub fn new(number: u8) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0)
            .contains(&number)
            .then_some(Self(number))
    }

    /// Version whose symbol is `width` modules wide
    pub fn from_width(width: usize) -> Option<Self> {
        if width < 21 || (width - 21) % 4 != 0 {
            return None;
        }
        u8::try_from((width - 21) / 4 + 1).ok().and_then(Self::new)
    }

    /// All versions, smallest first
    pub fn all() -> impl Iterator<Item = Version> {
        (Self::MIN.0..=Self::MAX.0).map(Version)
    }

    /// Version number
    pub fn number(self) -> u8 {
        self.0
    }

    /// Side length in modules: 21 + 4 * (n - 1)
    pub fn width(self) -> usize {
        21 + 4 * (self.0 as usize - 1)
    }

    /// Maximum payload length in bytes for binary encoding
    pub fn max_binary_chars(self) -> usize {
        MAX_BINARY_CHARS[self.0 as usize - 1]
    }
}

/// Character-set interpretation applied to the payload.
///
/// The discriminant is the ordinal written as the one-hot mode indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodingMode {
    /// Digits only
    Numeric = 0,
    /// 0-9, A-Z, space and `$%*+-./:`
    Alphanumeric = 1,
    /// Raw bytes
    Binary = 2,
    /// Shift JIS double-byte characters
    Kanji = 3,
}

impl EncodingMode {
    /// Numeric rank of the mode (0-3)
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

/// Whether every payload bit found a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementStatus {
    /// All metadata and payload bits were placed
    Complete,
    /// The fillable modules ran out before every bit was placed
    Truncated {
        /// Bits placed before the modules ran out
        bits_written: usize,
        /// Bits the metadata and payload needed
        bits_required: usize,
    },
}

/// A built symbol: the module matrix plus what went into it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    version: Version,
    mode: EncodingMode,
    payload_len: usize,
    matrix: ModuleMatrix,
    status: PlacementStatus,
}

impl Symbol {
    pub(crate) fn new(
        version: Version,
        mode: EncodingMode,
        payload_len: usize,
        matrix: ModuleMatrix,
        status: PlacementStatus,
    ) -> Self {
        Self {
            version,
            mode,
            payload_len,
            matrix,
            status,
        }
    }

    /// Version the payload resolved to
    pub fn version(&self) -> Version {
        self.version
    }

    /// Encoding mode written in the metadata
    pub fn mode(&self) -> EncodingMode {
        self.mode
    }

    /// Payload length in bytes
    pub fn payload_len(&self) -> usize {
        self.payload_len
    }

    /// Module matrix (true = dark)
    pub fn matrix(&self) -> &ModuleMatrix {
        &self.matrix
    }

    /// Placement outcome
    pub fn status(&self) -> PlacementStatus {
        self.status
    }

    /// True when no bit was dropped
    pub fn is_complete(&self) -> bool {
        self.status == PlacementStatus::Complete
    }

    /// Consume the symbol, keeping only its matrix
    pub fn into_matrix(self) -> ModuleMatrix {
        self.matrix
    }
}
