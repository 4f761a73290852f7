use std::io::{self, StdoutLock, Write};

use crate::digits::{digit_count_u32, digit_count_u64, fill_u32, fill_u64};
use crate::error::{Error, OrFatal, Result};
use crate::options::{Growth, PrinterOptions};

mod printable;
mod seq;

pub use printable::Printable;

/// Batches formatted output and hands it to `W` in large writes.
///
/// Bytes are only guaranteed to reach `W` after [`Printer::flush`]; dropping
/// the printer flushes too, but a failure there can only be logged. Hand in
/// `&mut W` to keep the stream after the printer is gone.
pub struct Printer<W: Write> {
    writer: W,
    buf: Vec<u8>,
    capacity: usize,
    growth: Growth,
    auto_flush: bool,
    yes: String,
    no: String,
}

impl Printer<StdoutLock<'static>> {
    pub fn stdout() -> Self {
        Self::new(io::stdout().lock())
    }
}

impl<W: Write> Printer<W> {
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, PrinterOptions::default())
    }

    pub fn with_options(writer: W, options: PrinterOptions) -> Self {
        let capacity = options.buffer_size.max(1);
        Self {
            writer,
            buf: Vec::with_capacity(capacity),
            capacity,
            growth: options.growth,
            auto_flush: options.auto_flush,
            yes: options.yes,
            no: options.no,
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Bytes written but not yet handed to the stream.
    pub fn buffered(&self) -> &[u8] {
        &self.buf
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Makes room for `n` more bytes, by flushing or by growing.
    pub fn ensure_capacity(&mut self, n: usize) {
        if self.buf.len() + n <= self.capacity {
            return;
        }
        match self.growth {
            Growth::Flush => self.drain().or_fatal(),
            Growth::Grow => {
                let needed = self.buf.len() + n;
                while self.capacity < needed {
                    self.capacity *= 2;
                }
                self.buf.reserve(self.capacity - self.buf.len());
            }
        }
    }

    /// Writes the buffer to the stream and resets the cursor, without
    /// flushing the stream itself.
    fn drain(&mut self) -> Result<()> {
        if !self.buf.is_empty() {
            log::trace!("printer drain: {} bytes", self.buf.len());
            self.writer.write_all(&self.buf)?;
            self.buf.clear();
        }
        Ok(())
    }

    pub fn try_flush(&mut self) -> Result<()> {
        self.drain()?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn flush(&mut self) {
        self.try_flush().or_fatal()
    }

    /// Appends `width` zeroed bytes and returns them for filling in.
    #[inline]
    fn reserve(&mut self, width: usize) -> &mut [u8] {
        self.ensure_capacity(width);
        let start = self.buf.len();
        self.buf.resize(start + width, 0);
        &mut self.buf[start..]
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        if bytes.len() > self.capacity && self.growth == Growth::Flush {
            self.drain().or_fatal();
            self.writer.write_all(bytes).map_err(Error::from).or_fatal();
        } else {
            self.ensure_capacity(bytes.len());
            self.buf.extend_from_slice(bytes);
        }
        self
    }

    pub fn write_str(&mut self, s: &str) -> &mut Self {
        self.write_bytes(s.as_bytes())
    }

    pub fn write_char(&mut self, c: char) -> &mut Self {
        let mut utf8 = [0; 4];
        self.write_bytes(c.encode_utf8(&mut utf8).as_bytes())
    }

    #[inline]
    pub fn write_byte(&mut self, b: u8) -> &mut Self {
        self.ensure_capacity(1);
        self.buf.push(b);
        self
    }

    pub fn space(&mut self) -> &mut Self {
        self.write_byte(b' ')
    }

    /// Newline; flushes when auto-flush is on.
    pub fn ln(&mut self) -> &mut Self {
        self.write_byte(b'\n');
        if self.auto_flush {
            self.flush();
        }
        self
    }

    pub fn write_u32(&mut self, v: u32) -> &mut Self {
        let width = digit_count_u32(v);
        fill_u32(self.reserve(width), v);
        self
    }

    pub fn write_u64(&mut self, v: u64) -> &mut Self {
        let width = digit_count_u64(v);
        fill_u64(self.reserve(width), v);
        self
    }

    pub fn write_usize(&mut self, v: usize) -> &mut Self {
        self.write_u64(v as u64)
    }

    pub fn write_i32(&mut self, v: i32) -> &mut Self {
        let magnitude = v.unsigned_abs();
        let digits = digit_count_u32(magnitude);
        let sign = usize::from(v < 0);
        let slot = self.reserve(sign + digits);
        if v < 0 {
            slot[0] = b'-';
        }
        fill_u32(&mut slot[sign..], magnitude);
        self
    }

    pub fn write_i64(&mut self, v: i64) -> &mut Self {
        let magnitude = v.unsigned_abs();
        let digits = digit_count_u64(magnitude);
        let sign = usize::from(v < 0);
        let slot = self.reserve(sign + digits);
        if v < 0 {
            slot[0] = b'-';
        }
        fill_u64(&mut slot[sign..], magnitude);
        self
    }

    /// Shortest representation that parses back to the same value.
    pub fn write_f64(&mut self, v: f64) -> &mut Self {
        write!(self, "{}", v).map_err(Error::from).or_fatal();
        self
    }

    pub fn write_f32(&mut self, v: f32) -> &mut Self {
        write!(self, "{}", v).map_err(Error::from).or_fatal();
        self
    }

    /// Fixed-point with `precision` digits after the point, rounding half
    /// away from zero on the scaled magnitude: `floor(|v| * 10^p + 0.5)`.
    /// The sign is dropped when the rounded value is zero.
    ///
    /// The scaling happens in `f64`, so inputs whose binary value sits just
    /// below a tie (2.675 is really 2.67499...) round down.
    pub fn write_fixed(&mut self, v: f64, precision: usize) -> &mut Self {
        let scale = u32::try_from(precision)
            .ok()
            .and_then(|p| 10u64.checked_pow(p));
        let scale = match scale {
            Some(scale) if v.is_finite() => scale,
            _ => return self.write_fixed_fallback(v, precision),
        };
        let scaled = (v.abs() * scale as f64 + 0.5).floor();
        // 2^64
        if scaled >= 18_446_744_073_709_551_616.0 {
            return self.write_fixed_fallback(v, precision);
        }
        let scaled = scaled as u64;

        if v < 0.0 && scaled != 0 {
            self.write_byte(b'-');
        }
        self.write_u64(scaled / scale);
        if precision > 0 {
            let frac = scaled % scale;
            let digits = digit_count_u64(frac);
            let slot = self.reserve(1 + precision);
            slot[0] = b'.';
            slot[1..=precision - digits].fill(b'0');
            fill_u64(&mut slot[1 + precision - digits..], frac);
        }
        self
    }

    fn write_fixed_fallback(&mut self, v: f64, precision: usize) -> &mut Self {
        write!(self, "{:.*}", precision, v).map_err(Error::from).or_fatal();
        self
    }

    pub fn write_bool(&mut self, v: bool) -> &mut Self {
        let len = if v { self.yes.len() } else { self.no.len() };
        self.ensure_capacity(len);
        let literal = if v { &self.yes } else { &self.no };
        self.buf.extend_from_slice(literal.as_bytes());
        self
    }

    pub fn print<T: Printable + ?Sized>(&mut self, v: &T) -> &mut Self {
        v.print_to(self);
        self
    }

    pub fn println<T: Printable + ?Sized>(&mut self, v: &T) -> &mut Self {
        v.print_to(self);
        self.ln()
    }
}

/// Unlike the inherent writers, stream failures come back as `Err`.
impl<W: Write> Write for Printer<W> {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        if self.growth == Growth::Flush && self.buf.len() + bytes.len() > self.capacity {
            self.drain()?;
            if bytes.len() > self.capacity {
                self.writer.write_all(bytes)?;
                return Ok(bytes.len());
            }
        }
        self.ensure_capacity(bytes.len());
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.try_flush().map_err(Into::into)
    }
}

impl<W: Write> Drop for Printer<W> {
    fn drop(&mut self) {
        if let Err(err) = self.try_flush() {
            log::error!("printer dropped with unflushed output: {}", err);
        }
    }
}
