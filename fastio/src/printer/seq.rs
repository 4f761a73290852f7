use std::io::Write;

use super::{Printable, Printer};

impl<W: Write> Printer<W> {
    /// Items separated by `delim`, no trailing delimiter or newline.
    pub fn write_slice<T: Printable>(&mut self, items: &[T], delim: &str) -> &mut Self {
        self.write_iter(items, delim)
    }

    /// Like [`Printer::write_slice`], printing `f(item)` instead of `item`.
    pub fn write_slice_with<T, U, F>(&mut self, items: &[T], delim: &str, mut f: F) -> &mut Self
    where
        U: Printable,
        F: FnMut(&T) -> U,
    {
        self.write_iter(items.iter().map(|item| f(item)), delim)
    }

    pub fn write_iter<I>(&mut self, items: I, delim: &str) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Printable,
    {
        let mut items = items.into_iter();
        if let Some(first) = items.next() {
            first.print_to(self);
            for item in items {
                self.write_str(delim);
                item.print_to(self);
            }
        }
        self
    }

    /// One item per line, each followed by a newline.
    pub fn write_lines<T: Printable>(&mut self, items: &[T]) -> &mut Self {
        for item in items {
            item.print_to(self);
            self.ln();
        }
        self
    }

    /// Rows on their own lines, cells separated by `delim`.
    pub fn write_matrix<T, Row>(&mut self, rows: &[Row], delim: &str) -> &mut Self
    where
        T: Printable,
        Row: AsRef<[T]>,
    {
        for row in rows {
            self.write_slice(row.as_ref(), delim);
            self.ln();
        }
        self
    }
}
