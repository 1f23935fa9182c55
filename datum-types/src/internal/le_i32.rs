use super::*;

/// Little-endian i32 codec. INTEGER slots and DATE day-counts share it, so a
/// DATE column has exactly the physical layout of an INTEGER column.
pub struct LeI32;

impl Codec for LeI32 {
    const WIDTH: usize = 4;

    type Borrowed<'a> = &'a i32;
    type Owned = i32;

    #[inline]
    fn encode_into(dst: &mut Vec<u8>, v: &i32) {
        dst.extend_from_slice(&v.to_le_bytes());
    }

    #[inline]
    fn decode(src: &[u8]) -> Result<i32, DecodeError> {
        fixed::<4>(src).map(i32::from_le_bytes)
    }
}
