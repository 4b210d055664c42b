//! Little-endian cursor helpers for the GC's fixed-layout binary messages.
//!
//! Every read is bounds-checked and reports [`DecodeError::Truncated`] instead of
//! panicking, so a short payload can never take the dispatcher down.

use crate::error::DecodeError;

use common::ErrorLocation;

use std::panic::Location;

use prost::bytes::{Buf, BufMut};

/// Read cursor over a borrowed payload.
pub struct BinaryReader<'a> {
    buf: &'a [u8],
}

impl<'a> BinaryReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    /// Borrow everything not read yet without consuming it.
    pub fn peek_rest(&self) -> &'a [u8] {
        self.buf
    }

    /// Consume and return everything not read yet.
    pub fn read_rest(&mut self) -> &'a [u8] {
        let rest = self.buf;
        self.buf = &[];
        rest
    }

    #[track_caller]
    fn ensure(&self, needed: usize, what: &str) -> Result<(), DecodeError> {
        if self.buf.remaining() < needed {
            return Err(DecodeError::Truncated {
                message: format!(
                    "Need {needed} bytes for {what}, only {} left",
                    self.buf.remaining()
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    #[track_caller]
    pub fn read_u16_le(&mut self) -> Result<u16, DecodeError> {
        self.ensure(2, "u16")?;
        Ok(self.buf.get_u16_le())
    }

    #[track_caller]
    pub fn read_i16_le(&mut self) -> Result<i16, DecodeError> {
        self.ensure(2, "i16")?;
        Ok(self.buf.get_i16_le())
    }

    #[track_caller]
    pub fn read_u32_le(&mut self) -> Result<u32, DecodeError> {
        self.ensure(4, "u32")?;
        Ok(self.buf.get_u32_le())
    }

    #[track_caller]
    pub fn read_u64_le(&mut self) -> Result<u64, DecodeError> {
        self.ensure(8, "u64")?;
        Ok(self.buf.get_u64_le())
    }

    #[track_caller]
    pub fn read_f32_le(&mut self) -> Result<f32, DecodeError> {
        self.ensure(4, "f32")?;
        Ok(self.buf.get_f32_le())
    }

    #[track_caller]
    pub fn skip(&mut self, count: usize) -> Result<(), DecodeError> {
        self.ensure(count, "skipped bytes")?;
        self.buf.advance(count);
        Ok(())
    }
}

/// Append-only little-endian writer for outbound binary bodies.
#[derive(Debug, Default)]
pub struct BinaryWriter {
    buf: Vec<u8>,
}

impl BinaryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_u8(mut self, value: u8) -> Self {
        self.buf.put_u8(value);
        self
    }

    pub fn put_i16_le(mut self, value: i16) -> Self {
        self.buf.put_i16_le(value);
        self
    }

    pub fn put_u16_le(mut self, value: u16) -> Self {
        self.buf.put_u16_le(value);
        self
    }

    pub fn put_u64_le(mut self, value: u64) -> Self {
        self.buf.put_u64_le(value);
        self
    }

    pub fn put_slice(mut self, bytes: &[u8]) -> Self {
        self.buf.put_slice(bytes);
        self
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }
}
