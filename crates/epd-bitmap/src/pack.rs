//! 1-bit packing for EPD frame buffers.
//!
//! Eight horizontally adjacent pixels per byte, most significant bit first:
//! bit 7 holds pixel `x`, bit 0 holds pixel `x + 7`. Rows start on a byte
//! boundary; when the width is not a multiple of 8 the unused low bits of the
//! last byte in each row stay 0.

use tracing::debug;

use crate::threshold::BinaryGrid;

/// Packed panel buffer, row-major with a stride of `ceil(width / 8)` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBuffer {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl PackedBuffer {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row.
    pub fn row_stride(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Byte holding pixel `(x, y)`.
    pub fn byte_at(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.bytes
            .get(y as usize * self.row_stride() + x as usize / 8)
            .copied()
    }
}

/// Pack one row of 0/1 pixels, MSB first. A trailing partial group is
/// zero-padded on the right.
pub fn pack_row(row: &[u8]) -> Vec<u8> {
    row.chunks(8)
        .map(|chunk| {
            let mut byte_val: u8 = 0;
            for (bit, &px) in chunk.iter().enumerate() {
                if px != 0 {
                    byte_val |= 0x80 >> bit;
                }
            }
            byte_val
        })
        .collect()
}

/// Pack a whole binary grid into a panel buffer.
pub fn pack(grid: &BinaryGrid) -> PackedBuffer {
    let (width, height) = grid.dimensions();
    let stride = (width as usize).div_ceil(8);

    let mut bytes = Vec::with_capacity(stride * height as usize);
    if width > 0 {
        for row in grid.rows() {
            bytes.extend(pack_row(row));
        }
    }

    debug!(
        width,
        height,
        stride,
        len = bytes.len(),
        padded = width % 8 != 0,
        "Packed binary grid"
    );

    PackedBuffer {
        width,
        height,
        bytes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_row_bit_order() {
        assert_eq!(pack_row(&[1, 0, 1, 0, 1, 0, 1, 0]), vec![0xAA]);
        assert_eq!(pack_row(&[0, 1, 0, 1, 0, 1, 0, 1]), vec![0x55]);
        assert_eq!(pack_row(&[1, 0, 0, 0, 0, 0, 0, 0]), vec![0x80]);
        assert_eq!(pack_row(&[0, 0, 0, 0, 0, 0, 0, 1]), vec![0x01]);
    }

    #[test]
    fn test_pack_row_all_white() {
        assert_eq!(pack_row(&[1; 8]), vec![0xFF]);
    }

    #[test]
    fn test_pack_row_all_black() {
        assert_eq!(pack_row(&[0; 8]), vec![0x00]);
    }

    #[test]
    fn test_pack_row_partial_group_is_zero_padded() {
        // 12 white pixels: second byte only has its top 4 bits set
        assert_eq!(pack_row(&[1; 12]), vec![0xFF, 0xF0]);
        assert_eq!(pack_row(&[1, 1, 1]), vec![0xE0]);
    }

    #[test]
    fn test_pack_grid_layout() {
        // 16x2: row 0 = 0xAA 0x0F, row 1 = 0xFF 0x00
        let mut bits = vec![1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 1, 1, 1];
        bits.extend([1; 8]);
        bits.extend([0; 8]);
        let grid = BinaryGrid::from_bits(16, 2, bits);

        let packed = pack(&grid);
        assert_eq!(packed.row_stride(), 2);
        assert_eq!(packed.as_bytes(), &[0xAA, 0x0F, 0xFF, 0x00]);
        assert_eq!(packed.byte_at(9, 0), Some(0x0F));
        assert_eq!(packed.byte_at(0, 1), Some(0xFF));
        assert_eq!(packed.byte_at(16, 0), None);
    }

    #[test]
    fn test_pack_length_for_multiple_of_8() {
        let grid = BinaryGrid::from_bits(400, 300, vec![0; 400 * 300]);
        let packed = pack(&grid);
        assert_eq!(packed.len(), (400 / 8) * 300);
    }

    #[test]
    fn test_pack_width_12_low_bits_zero() {
        let grid = BinaryGrid::from_bits(12, 3, vec![1; 36]);
        let packed = pack(&grid);

        assert_eq!(packed.row_stride(), 2);
        assert_eq!(packed.len(), 6);
        for y in 0..3 {
            let last = packed.as_bytes()[y * 2 + 1];
            assert_eq!(last & 0x0F, 0, "row {y} padding bits must be 0");
            assert_eq!(last, 0xF0);
        }
    }

    #[test]
    fn test_pack_zero_width() {
        let grid = BinaryGrid::from_bits(0, 5, Vec::new());
        let packed = pack(&grid);
        assert!(packed.is_empty());
    }
}
