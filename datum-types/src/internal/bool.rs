use super::*;

/// Codec for bool. `false` -> `0u8`, `true` -> `1u8`.
pub struct Bool;

impl Codec for Bool {
    const WIDTH: usize = 1;

    type Borrowed<'a> = &'a bool;
    type Owned = bool;

    #[inline]
    fn encode_into(dst: &mut Vec<u8>, v: &bool) {
        dst.push(if *v { 1 } else { 0 });
    }

    #[inline]
    fn decode(src: &[u8]) -> Result<bool, DecodeError> {
        fixed::<1>(src).map(|[b]| b != 0)
    }
}
