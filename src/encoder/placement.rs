/// Metadata and payload bit placement onto the module matrix
use super::patterns::fixed_pattern_cells;
use super::tables::{LENGTH_BITS, MODE_INDICATOR_BITS};
use crate::models::{Coordinate, EncodingMode, ModuleMatrix, PlacementStatus};

/// The fillable modules ran out before the bit could be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Underrun;

/// Owns the matrix under construction and drains an ordered stream of
/// fillable modules, one per bit.
#[derive(Debug)]
pub struct ModulePlacer<I> {
    matrix: ModuleMatrix,
    positions: I,
    bits_written: usize,
}

impl<I: Iterator<Item = Coordinate>> ModulePlacer<I> {
    /// Blank matrix of side `width`
    pub fn new(width: usize, positions: I) -> Self {
        Self {
            matrix: ModuleMatrix::new(width),
            positions,
            bits_written: 0,
        }
    }

    /// Matrix with the finder squares, alignment square, timing dots and
    /// dark module already drawn
    pub fn with_fixed_patterns(width: usize, positions: I) -> Self {
        let mut placer = Self::new(width, positions);
        for cell in fixed_pattern_cells(width) {
            placer.matrix.set_dark(cell);
        }
        placer
    }

    /// Bits placed so far
    pub fn bits_written(&self) -> usize {
        self.bits_written
    }

    /// Place one bit on the next module, darkening it when set.
    pub fn write_bit(&mut self, bit: bool) -> Result<(), Underrun> {
        let cell = self.positions.next().ok_or(Underrun)?;
        if bit {
            self.matrix.set_dark(cell);
        }
        self.bits_written += 1;
        Ok(())
    }

    /// Place the low `count` bits of `value`, most significant first.
    pub fn write_bits(&mut self, value: u32, count: usize) -> Result<(), Underrun> {
        for shift in (0..count).rev() {
            self.write_bit((value >> shift) & 1 == 1)?;
        }
        Ok(())
    }

    /// Mode indicator then length byte.
    ///
    /// The indicator is one-hot: of its four modules only the one whose loop
    /// index equals the mode ordinal is dark. The length field carries the
    /// low 8 bits of `payload_len`.
    pub fn write_metadata(
        &mut self,
        mode: EncodingMode,
        payload_len: usize,
    ) -> Result<(), Underrun> {
        for index in 0..MODE_INDICATOR_BITS {
            self.write_bit(index == mode.ordinal() as usize)?;
        }
        self.write_bits((payload_len & 0xFF) as u32, LENGTH_BITS)
    }

    /// Every payload byte, bit 7 down to bit 0.
    pub fn write_payload(&mut self, payload: &[u8]) -> Result<(), Underrun> {
        for &byte in payload {
            self.write_bits(u32::from(byte), 8)?;
        }
        Ok(())
    }

    /// Hand back the matrix
    pub fn finish(self) -> ModuleMatrix {
        self.matrix
    }
}

/// Bits needed for the metadata plus `payload_len` bytes
pub fn required_bits(payload_len: usize) -> usize {
    MODE_INDICATOR_BITS + LENGTH_BITS + 8 * payload_len
}

/// Write metadata and payload, stopping at the first underrun.
///
/// The matrix is returned either way; the status says whether it is whole.
pub fn place<I: Iterator<Item = Coordinate>>(
    mut placer: ModulePlacer<I>,
    mode: EncodingMode,
    payload: &[u8],
) -> (ModuleMatrix, PlacementStatus) {
    let outcome = placer
        .write_metadata(mode, payload.len())
        .and_then(|()| placer.write_payload(payload));
    let status = match outcome {
        Ok(()) => PlacementStatus::Complete,
        Err(Underrun) => PlacementStatus::Truncated {
            bits_written: placer.bits_written(),
            bits_required: required_bits(payload.len()),
        },
    };
    (placer.finish(), status)
}
