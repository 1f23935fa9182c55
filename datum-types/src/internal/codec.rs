pub use crate::DecodeError;

/// A zero-overhead codec API for a single slot payload type.
pub trait Codec {
    /// Fixed encoded width in bytes. Use `0` for variable-width codecs.
    const WIDTH: usize;

    type Borrowed<'a>
    where
        Self: 'a;
    type Owned;

    fn encode_into(dst: &mut Vec<u8>, v: Self::Borrowed<'_>);

    fn decode(src: &[u8]) -> Result<Self::Owned, DecodeError>;
}

/// Borrow the first `N` bytes of `src`, or report how short it was.
#[inline]
pub(crate) fn fixed<const N: usize>(src: &[u8]) -> Result<[u8; N], DecodeError> {
    src.get(..N)
        .and_then(|head| head.try_into().ok())
        .ok_or(DecodeError::NotEnoughData {
            expected: N,
            got: src.len(),
        })
}
