use std::any::type_name;
use std::fmt::Display;
use std::io::{self, Read, StdinLock};
use std::str::FromStr;

use crate::error::{Error, OrFatal, Result};
use crate::options::{ScannerOptions, Whitespace};

mod bulk;

/// 2^53
const EXACT_MANTISSA: f64 = 9_007_199_254_740_992.0;

/// Pull-based token reader over any byte stream.
///
/// The buffer is refilled with a single `read` call whenever it runs dry.
/// Every non-`try_` method treats a stream failure or a premature end of
/// input as fatal and panics.
pub struct Scanner<R> {
    reader: R,
    buf: Box<[u8]>,
    pos: usize,
    len: usize,
    whitespace: Whitespace,
}

impl Scanner<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: Read> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, ScannerOptions::default())
    }

    pub fn with_options(reader: R, options: ScannerOptions) -> Self {
        Self {
            reader,
            buf: vec![0; options.buffer_size.max(1)].into_boxed_slice(),
            pos: 0,
            len: 0,
            whitespace: options.whitespace,
        }
    }

    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Replaces the buffer contents with one read from the stream.
    /// Returns `false` at end of input.
    fn refill(&mut self) -> Result<bool> {
        debug_assert_eq!(self.pos, self.len);
        loop {
            match self.reader.read(&mut self.buf) {
                Ok(n) => {
                    log::trace!("scanner refill: {} bytes", n);
                    self.pos = 0;
                    self.len = n;
                    return Ok(n > 0);
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            }
        }
    }

    #[inline]
    fn try_peek(&mut self) -> Result<Option<u8>> {
        if self.pos == self.len && !self.refill()? {
            return Ok(None);
        }
        Ok(Some(self.buf[self.pos]))
    }

    #[inline]
    pub fn try_read_byte(&mut self) -> Result<u8> {
        let b = self.try_peek()?.ok_or(Error::UnexpectedEof)?;
        self.pos += 1;
        Ok(b)
    }

    #[inline]
    pub fn read_byte(&mut self) -> u8 {
        self.try_read_byte().or_fatal()
    }

    /// The next byte, left unconsumed. `None` at end of input.
    #[inline]
    pub fn peek_byte(&mut self) -> Option<u8> {
        self.try_peek().or_fatal()
    }

    /// Consumes whitespace and peeks at what follows it.
    fn skip_whitespace(&mut self) -> Result<Option<u8>> {
        loop {
            while self.pos < self.len {
                let b = self.buf[self.pos];
                if !self.whitespace.contains(b) {
                    return Ok(Some(b));
                }
                self.pos += 1;
            }
            if !self.refill()? {
                return Ok(None);
            }
        }
    }

    /// Consumes whitespace and then the first byte of a token.
    fn token_start(&mut self) -> Result<u8> {
        let b = self.skip_whitespace()?.ok_or(Error::UnexpectedEof)?;
        self.pos += 1;
        Ok(b)
    }

    pub fn has_next(&mut self) -> bool {
        self.skip_whitespace().or_fatal().is_some()
    }

    /// Sign and unsigned magnitude of the next integer token. The byte that
    /// ends the digit run is not consumed.
    fn next_magnitude(&mut self) -> Result<(bool, u64)> {
        let mut b = self.token_start()?;
        let negative = b == b'-';
        if negative {
            b = self.try_read_byte()?;
        }
        if !b.is_ascii_digit() {
            return Err(Error::Malformed { byte: b });
        }
        let mut value = u64::from(b - b'0');
        loop {
            while self.pos < self.len {
                let d = self.buf[self.pos];
                if !d.is_ascii_digit() {
                    return Ok((negative, value));
                }
                value = value.wrapping_mul(10).wrapping_add(u64::from(d - b'0'));
                self.pos += 1;
            }
            if !self.refill()? {
                return Ok((negative, value));
            }
        }
    }

    pub fn try_next_i64(&mut self) -> Result<i64> {
        let (negative, magnitude) = self.next_magnitude()?;
        let v = magnitude as i64;
        Ok(if negative { v.wrapping_neg() } else { v })
    }

    pub fn try_next_i32(&mut self) -> Result<i32> {
        let (negative, magnitude) = self.next_magnitude()?;
        let v = magnitude as u32 as i32;
        Ok(if negative { v.wrapping_neg() } else { v })
    }

    pub fn next_i64(&mut self) -> i64 {
        self.try_next_i64().or_fatal()
    }

    pub fn next_i32(&mut self) -> i32 {
        self.try_next_i32().or_fatal()
    }

    pub fn next_u64(&mut self) -> u64 {
        self.try_next_i64().or_fatal() as u64
    }

    pub fn next_u32(&mut self) -> u32 {
        self.try_next_i32().or_fatal() as u32
    }

    pub fn next_usize(&mut self) -> usize {
        self.next_u64() as usize
    }

    /// Plain decimal only: `-?[0-9]+(\.[0-9]+)?`, no exponent. Fractional
    /// digits past 2^53 of mantissa are consumed but ignored.
    pub fn try_next_f64(&mut self) -> Result<f64> {
        let (negative, int_part) = self.next_magnitude()?;
        let mut mantissa = int_part as f64;
        let mut scale = 1.0;
        if self.try_peek()? == Some(b'.') {
            self.pos += 1;
            while let Some(d) = self.try_peek()?.filter(u8::is_ascii_digit) {
                self.pos += 1;
                if mantissa < EXACT_MANTISSA {
                    mantissa = mantissa * 10.0 + f64::from(d - b'0');
                    scale *= 10.0;
                }
            }
        }
        let value = mantissa / scale;
        Ok(if negative { -value } else { value })
    }

    pub fn next_f64(&mut self) -> f64 {
        self.try_next_f64().or_fatal()
    }

    pub fn next_char(&mut self) -> char {
        char::from(self.token_start().or_fatal())
    }

    /// Appends the rest of the current run to `out`, stopping before the
    /// first byte for which `stop` holds. Returns `true` if such a byte
    /// was found, `false` at end of input.
    fn take_until(&mut self, out: &mut Vec<u8>, stop: impl Fn(u8) -> bool) -> Result<bool> {
        loop {
            let start = self.pos;
            while self.pos < self.len && !stop(self.buf[self.pos]) {
                self.pos += 1;
            }
            out.extend_from_slice(&self.buf[start..self.pos]);
            if self.pos < self.len {
                return Ok(true);
            }
            if !self.refill()? {
                return Ok(false);
            }
        }
    }

    pub fn try_next_bytes(&mut self) -> Result<Vec<u8>> {
        let first = self.token_start()?;
        let mut token = vec![first];
        let whitespace = self.whitespace;
        self.take_until(&mut token, |b| whitespace.contains(b))?;
        Ok(token)
    }

    pub fn next_bytes(&mut self) -> Vec<u8> {
        self.try_next_bytes().or_fatal()
    }

    pub fn try_next_token(&mut self) -> Result<String> {
        self.try_next_bytes().map(into_string)
    }

    pub fn next_token(&mut self) -> String {
        self.try_next_token().or_fatal()
    }

    /// Parses the next token with `FromStr`.
    pub fn try_next<T>(&mut self) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let token = self.try_next_token()?;
        token.parse().map_err(|err: T::Err| Error::Parse {
            reason: err.to_string(),
            token,
            target: type_name::<T>(),
        })
    }

    pub fn next<T>(&mut self) -> T
    where
        T: FromStr,
        T::Err: Display,
    {
        self.try_next().or_fatal()
    }

    /// Everything up to the next `\n`, `\r` or `\r\n`, terminator consumed.
    ///
    /// Numeric readers leave the line break after a number unconsumed, so a
    /// `next_line` right after `next_i32` returns the empty remainder of
    /// that line.
    pub fn try_next_line(&mut self) -> Result<String> {
        let mut line = Vec::new();
        let terminated = self.take_until(&mut line, |b| b == b'\n' || b == b'\r')?;
        if terminated {
            let end = self.buf[self.pos];
            self.pos += 1;
            if end == b'\r' && self.try_peek()? == Some(b'\n') {
                self.pos += 1;
            }
        } else if line.is_empty() {
            return Err(Error::UnexpectedEof);
        }
        Ok(into_string(line))
    }

    pub fn next_line(&mut self) -> String {
        self.try_next_line().or_fatal()
    }
}

fn into_string(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}
