//! Slot codecs + value-side `encode_into`.
//!
//! ## A Note on Endianness
//!
//! Fixed-width payloads are stored **little-endian**, matching the in-memory
//! layout of Arrow primitive buffers. Ordering is never taken from the bytes:
//! DATE and INTEGER slots are compared as decoded `i32`s by their strategies.
//!
//! - `LeI32`: INTEGER and DATE (day-count) payloads.
//! - `LeF32`: FLOAT payloads.
//! - `Bool`: one byte, `0` or `1`.
//! - `Utf8`: TEXT payloads, the raw string bytes.
//!
//! `EncodeInto` lets you write `v.encode_into(&mut buf)` using the default codec
//! for that native type.

#![forbid(unsafe_code)]

pub mod codec;
pub use codec::*;

pub mod le_i32;
pub use le_i32::*;

pub mod le_f32;
pub use le_f32::*;

pub mod bool;
pub use bool::*;

pub mod utf8;
pub use utf8::*;

/* ---------------------- Value-side encode convenience ------------------- */

/// Default, value-side encoding: `v.encode_into(&mut buf)`.
///
/// One default codec per native type to keep call sites simple.
pub trait EncodeInto {
    fn encode_into(&self, dst: &mut Vec<u8>);
}

// i32 → LeI32
impl EncodeInto for i32 {
    #[inline]
    fn encode_into(&self, dst: &mut Vec<u8>) {
        LeI32::encode_into(dst, self);
    }
}

// f32 → LeF32
impl EncodeInto for f32 {
    #[inline]
    fn encode_into(&self, dst: &mut Vec<u8>) {
        LeF32::encode_into(dst, self);
    }
}

// bool → Bool
impl EncodeInto for bool {
    #[inline]
    fn encode_into(&self, dst: &mut Vec<u8>) {
        Bool::encode_into(dst, self);
    }
}
