use super::Coordinate;

/// Square, bit-packed module matrix (true = dark, false = light)
///
/// Only the crate writes to it; once a [`Symbol`](super::Symbol) hands it
/// out the matrix is read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    width: usize,
    data: Vec<u8>,
}

impl ModuleMatrix {
    /// Create an all-light matrix of side `width`
    pub fn new(width: usize) -> Self {
        let bytes_needed = (width * width).div_ceil(8);
        Self {
            width,
            data: vec![0; bytes_needed],
        }
    }

    /// Side length in modules
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the module at `coordinate` is dark. Outside the grid is light.
    pub fn get(&self, coordinate: Coordinate) -> bool {
        match coordinate.index(self.width) {
            Some(index) => (self.data[index / 8] >> (index % 8)) & 1 == 1,
            None => false,
        }
    }

    /// Same as [`get`](Self::get) with unsigned `(x, y)`
    pub fn get_xy(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.width {
            return false;
        }
        let index = y * self.width + x;
        (self.data[index / 8] >> (index % 8)) & 1 == 1
    }

    pub(crate) fn set(&mut self, coordinate: Coordinate, dark: bool) {
        let Some(index) = coordinate.index(self.width) else {
            return;
        };
        let bit = 1 << (index % 8);
        if dark {
            self.data[index / 8] |= bit;
        } else {
            self.data[index / 8] &= !bit;
        }
    }

    pub(crate) fn set_dark(&mut self, coordinate: Coordinate) {
        self.set(coordinate, true);
    }

    /// Number of dark modules
    pub fn dark_count(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Rows top to bottom, each as one `bool` per column
    pub fn rows(&self) -> impl Iterator<Item = Vec<bool>> + '_ {
        (0..self.width).map(move |y| (0..self.width).map(|x| self.get_xy(x, y)).collect())
    }

    /// Raw packed bits, row-major, LSB first within each byte
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl Default for ModuleMatrix {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_matrix() {
        let mut matrix = ModuleMatrix::new(21);
        assert_eq!(matrix.width(), 21);
        assert_eq!(matrix.as_bytes().len(), 56);

        matrix.set_dark(Coordinate::new(3, 4));
        assert!(matrix.get(Coordinate::new(3, 4)));
        assert!(matrix.get_xy(3, 4));
        assert!(!matrix.get(Coordinate::new(4, 3)));
        assert_eq!(matrix.dark_count(), 1);

        matrix.set(Coordinate::new(3, 4), false);
        assert!(!matrix.get(Coordinate::new(3, 4)));
        assert_eq!(matrix.dark_count(), 0);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut matrix = ModuleMatrix::new(21);
        matrix.set_dark(Coordinate::new(21, 0)); // Should not panic
        matrix.set_dark(Coordinate::new(-1, 0));
        assert!(!matrix.get(Coordinate::new(21, 0)));
        assert!(!matrix.get_xy(0, 21));
        assert_eq!(matrix.dark_count(), 0);
    }

    #[test]
    fn test_rows() {
        let mut matrix = ModuleMatrix::new(3);
        matrix.set_dark(Coordinate::new(2, 1));
        let rows: Vec<Vec<bool>> = matrix.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], vec![false, false, true]);
        assert!(rows[0].iter().all(|&dark| !dark));
    }
}
