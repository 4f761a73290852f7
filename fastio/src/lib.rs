//! Buffered token reading and number printing for batch programs that read
//! a whole input, compute, and write a whole output.
//!
//! ```
//! use fastio::{Printer, Scanner};
//!
//! let mut sc = Scanner::new(&b"5\n3 1 4 1 5\n"[..]);
//! let n = sc.next_usize();
//! let values = sc.next_i32_vec(n);
//!
//! let mut out = Vec::new();
//! {
//!     let mut p = Printer::new(&mut out);
//!     p.write_slice(&values, " ").ln();
//! }
//! assert_eq!(out, b"3 1 4 1 5\n");
//! ```

pub mod digits;
pub mod error;
pub mod options;
pub mod printer;
pub mod scanner;

pub use error::{Error, Result};
pub use options::{Growth, PrinterOptions, ScannerOptions, Whitespace, DEFAULT_BUFFER_SIZE};
pub use printer::{Printable, Printer};
pub use scanner::Scanner;
