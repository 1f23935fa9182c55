use super::*;

/// Raw UTF-8 codec for TEXT slots. Variable width: the slot is the string.
pub struct Utf8;

impl Codec for Utf8 {
    const WIDTH: usize = 0;

    type Borrowed<'a> = &'a str;
    type Owned = String;

    #[inline]
    fn encode_into(dst: &mut Vec<u8>, v: &str) {
        dst.extend_from_slice(v.as_bytes());
    }

    #[inline]
    fn decode(src: &[u8]) -> Result<String, DecodeError> {
        std::str::from_utf8(src)
            .map(str::to_owned)
            .map_err(|_| DecodeError::InvalidFormat)
    }
}
