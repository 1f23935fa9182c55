use super::*;

/// Little-endian IEEE-754 f32 codec.
pub struct LeF32;

impl Codec for LeF32 {
    const WIDTH: usize = 4;

    type Borrowed<'a> = &'a f32;
    type Owned = f32;

    #[inline]
    fn encode_into(dst: &mut Vec<u8>, v: &f32) {
        dst.extend_from_slice(&v.to_le_bytes());
    }

    #[inline]
    fn decode(src: &[u8]) -> Result<f32, DecodeError> {
        fixed::<4>(src).map(f32::from_le_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lef32_roundtrip_keeps_bits() {
        for v in [0.0f32, -0.0, 1.5, f32::MAX, f32::MIN_POSITIVE] {
            let mut buf = Vec::new();
            v.encode_into(&mut buf);
            assert_eq!(LeF32::decode(&buf).unwrap().to_bits(), v.to_bits());
        }
    }
}
