//! Decimal digit emission, two digits per division.

const fn tens() -> [u8; 100] {
    let mut table = [0u8; 100];
    let mut i = 0;
    while i < 100 {
        table[i] = b'0' + (i / 10) as u8;
        i += 1;
    }
    table
}

const fn ones() -> [u8; 100] {
    let mut table = [0u8; 100];
    let mut i = 0;
    while i < 100 {
        table[i] = b'0' + (i % 10) as u8;
        i += 1;
    }
    table
}

/// `DIGIT_TENS[n]` and `DIGIT_ONES[n]` spell `n` for `n` in `0..100`.
pub static DIGIT_TENS: [u8; 100] = tens();
pub static DIGIT_ONES: [u8; 100] = ones();

/// Number of decimal digits in `v`, sign excluded.
#[inline]
pub fn digit_count_u32(v: u32) -> usize {
    if v < 100_000 {
        if v < 100 {
            if v < 10 {
                1
            } else {
                2
            }
        } else if v < 1_000 {
            3
        } else if v < 10_000 {
            4
        } else {
            5
        }
    } else if v < 10_000_000 {
        if v < 1_000_000 {
            6
        } else {
            7
        }
    } else if v < 100_000_000 {
        8
    } else if v < 1_000_000_000 {
        9
    } else {
        10
    }
}

/// Number of decimal digits in `v`, sign excluded.
#[inline]
pub fn digit_count_u64(v: u64) -> usize {
    if v <= u64::from(u32::MAX) {
        return digit_count_u32(v as u32);
    }
    // v >= 2^32, so at least 10 digits
    if v < 1_000_000_000_000_000 {
        if v < 10_000_000_000 {
            10
        } else if v < 100_000_000_000 {
            11
        } else if v < 1_000_000_000_000 {
            12
        } else if v < 10_000_000_000_000 {
            13
        } else if v < 100_000_000_000_000 {
            14
        } else {
            15
        }
    } else if v < 10_000_000_000_000_000 {
        16
    } else if v < 100_000_000_000_000_000 {
        17
    } else if v < 1_000_000_000_000_000_000 {
        18
    } else if v < 10_000_000_000_000_000_000 {
        19
    } else {
        20
    }
}

macro_rules! fill_backward {
    ($name:ident, $t:ty) => {
        /// Writes `v` into `out`, right-aligned, least significant pair first.
        /// `out.len()` must equal the digit count of `v`.
        #[inline]
        pub fn $name(out: &mut [u8], mut v: $t) {
            let mut i = out.len();
            while v >= 100 {
                let pair = (v % 100) as usize;
                v /= 100;
                i -= 2;
                out[i] = DIGIT_TENS[pair];
                out[i + 1] = DIGIT_ONES[pair];
            }
            if v >= 10 {
                let pair = v as usize;
                i -= 2;
                out[i] = DIGIT_TENS[pair];
                out[i + 1] = DIGIT_ONES[pair];
            } else {
                i -= 1;
                out[i] = b'0' + v as u8;
            }
            debug_assert_eq!(i, 0);
        }
    };
}

fill_backward!(fill_u32, u32);
fill_backward!(fill_u64, u64);

#[cfg(test)]
mod tests {
    use super::*;

    fn spell(v: u64) -> String {
        let mut out = vec![0; digit_count_u64(v)];
        fill_u64(&mut out, v);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn table_matches_formatting() {
        for n in 0..100 {
            let s = format!("{:02}", n);
            assert_eq!(DIGIT_TENS[n], s.as_bytes()[0]);
            assert_eq!(DIGIT_ONES[n], s.as_bytes()[1]);
        }
    }

    #[test]
    fn counts_at_powers_of_ten() {
        assert_eq!(digit_count_u64(0), 1);
        let mut p = 1u64;
        for digits in 1..=20 {
            assert_eq!(digit_count_u64(p), digits, "{}", p);
            if digits > 1 {
                assert_eq!(digit_count_u64(p - 1), digits - 1, "{}", p - 1);
            }
            if let Some(next) = p.checked_mul(10) {
                p = next;
            }
        }
        assert_eq!(digit_count_u64(u64::MAX), 20);

        let mut p = 1u32;
        for digits in 1..=10 {
            assert_eq!(digit_count_u32(p), digits);
            if digits > 1 {
                assert_eq!(digit_count_u32(p - 1), digits - 1);
            }
            if let Some(next) = p.checked_mul(10) {
                p = next;
            }
        }
        assert_eq!(digit_count_u32(u32::MAX), 10);
    }

    #[test]
    fn fill_odd_and_even_widths() {
        for v in [0, 7, 10, 99, 100, 101, 12345, 987654, u64::from(u32::MAX), u64::MAX] {
            assert_eq!(spell(v), v.to_string());
        }

        let mut out = [0u8; 10];
        fill_u32(&mut out, u32::MAX);
        assert_eq!(&out, b"4294967295");
    }
}
