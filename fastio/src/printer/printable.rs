use std::io::Write;

use super::Printer;

/// A value the printer knows how to format. Dispatch is resolved at compile
/// time; sequences print space-separated.
pub trait Printable {
    fn print_to<W: Write>(&self, out: &mut Printer<W>);
}

macro_rules! printable {
    ($method:ident as $wide:ty: $($t:ty),*) => {$(
        impl Printable for $t {
            #[inline]
            fn print_to<W: Write>(&self, out: &mut Printer<W>) {
                out.$method(<$wide>::from(*self));
            }
        }
    )*};
}

printable!(write_i32 as i32: i8, i16, i32);
printable!(write_i64 as i64: i64);
printable!(write_u32 as u32: u8, u16, u32);
printable!(write_u64 as u64: u64);
printable!(write_f64 as f64: f64);
printable!(write_f32 as f32: f32);
printable!(write_bool as bool: bool);
printable!(write_char as char: char);

impl Printable for usize {
    fn print_to<W: Write>(&self, out: &mut Printer<W>) {
        out.write_usize(*self);
    }
}

impl Printable for isize {
    fn print_to<W: Write>(&self, out: &mut Printer<W>) {
        out.write_i64(*self as i64);
    }
}

impl Printable for str {
    fn print_to<W: Write>(&self, out: &mut Printer<W>) {
        out.write_str(self);
    }
}

impl Printable for String {
    fn print_to<W: Write>(&self, out: &mut Printer<W>) {
        out.write_str(self);
    }
}

impl<T: Printable + ?Sized> Printable for &T {
    fn print_to<W: Write>(&self, out: &mut Printer<W>) {
        (**self).print_to(out);
    }
}

impl<T: Printable> Printable for [T] {
    fn print_to<W: Write>(&self, out: &mut Printer<W>) {
        out.write_slice(self, " ");
    }
}

impl<T: Printable> Printable for Vec<T> {
    fn print_to<W: Write>(&self, out: &mut Printer<W>) {
        out.write_slice(self, " ");
    }
}

impl<A: Printable, B: Printable> Printable for (A, B) {
    fn print_to<W: Write>(&self, out: &mut Printer<W>) {
        out.print(&self.0).space().print(&self.1);
    }
}

impl<A: Printable, B: Printable, C: Printable> Printable for (A, B, C) {
    fn print_to<W: Write>(&self, out: &mut Printer<W>) {
        out.print(&self.0).space().print(&self.1).space().print(&self.2);
    }
}
