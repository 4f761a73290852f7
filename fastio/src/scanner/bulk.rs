//! Bulk readers: the scalar parsers in a loop, sometimes post-processed.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::io::Read;
use std::str::FromStr;

use bit_set::BitSet;

use super::Scanner;

impl<R: Read> Scanner<R> {
    pub fn next_vec<T>(&mut self, n: usize) -> Vec<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let mut res = Vec::with_capacity(n);
        for _ in 0..n {
            res.push(self.next::<T>());
        }
        res
    }

    pub fn next_i32_vec(&mut self, n: usize) -> Vec<i32> {
        (0..n).map(|_| self.next_i32()).collect()
    }

    pub fn next_i64_vec(&mut self, n: usize) -> Vec<i64> {
        (0..n).map(|_| self.next_i64()).collect()
    }

    pub fn next_f64_vec(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.next_f64()).collect()
    }

    pub fn next_tokens(&mut self, n: usize) -> Vec<String> {
        (0..n).map(|_| self.next_token()).collect()
    }

    /// Reads `n` integers, mapping each through `f` (e.g. `|x| x - 1`).
    pub fn next_i32_vec_with(&mut self, n: usize, mut f: impl FnMut(i32) -> i32) -> Vec<i32> {
        (0..n).map(|_| f(self.next_i32())).collect()
    }

    pub fn next_i32_vec_sorted(&mut self, n: usize) -> Vec<i32> {
        let mut res = self.next_i32_vec(n);
        res.sort_unstable();
        res
    }

    pub fn next_i64_vec_sorted(&mut self, n: usize) -> Vec<i64> {
        let mut res = self.next_i64_vec(n);
        res.sort_unstable();
        res
    }

    /// `res[i]` is the sum of the first `i` values; `res.len() == n + 1`.
    pub fn next_i64_prefix_sum(&mut self, n: usize) -> Vec<i64> {
        let mut res = Vec::with_capacity(n + 1);
        let mut sum = 0i64;
        res.push(sum);
        for _ in 0..n {
            sum = sum.wrapping_add(self.next_i64());
            res.push(sum);
        }
        res
    }

    pub fn next_i32_matrix(&mut self, h: usize, w: usize) -> Vec<Vec<i32>> {
        (0..h).map(|_| self.next_i32_vec(w)).collect()
    }

    pub fn next_i64_matrix(&mut self, h: usize, w: usize) -> Vec<Vec<i64>> {
        (0..h).map(|_| self.next_i64_vec(w)).collect()
    }

    pub fn next_i32_cube(&mut self, a: usize, b: usize, c: usize) -> Vec<Vec<Vec<i32>>> {
        (0..a).map(|_| self.next_i32_matrix(b, c)).collect()
    }

    /// `h` rows, one token each.
    pub fn next_char_grid(&mut self, h: usize) -> Vec<Vec<u8>> {
        (0..h).map(|_| self.next_bytes()).collect()
    }

    pub fn next_pairs(&mut self, n: usize) -> Vec<(i64, i64)> {
        (0..n).map(|_| (self.next_i64(), self.next_i64())).collect()
    }

    /// Reads a zero-based permutation `p` of `0..n` and returns its inverse,
    /// `res[p[i]] == i`.
    pub fn next_inverse_permutation(&mut self, n: usize) -> Vec<usize> {
        let mut res = vec![0; n];
        for i in 0..n {
            res[self.next_usize()] = i;
        }
        res
    }

    /// Reads `n` values in `0..bound` and counts occurrences of each.
    pub fn next_counts(&mut self, n: usize, bound: usize) -> Vec<usize> {
        let mut res = vec![0; bound];
        for _ in 0..n {
            res[self.next_usize()] += 1;
        }
        res
    }

    pub fn next_multiset(&mut self, n: usize) -> BTreeMap<i64, usize> {
        let mut res = BTreeMap::new();
        for _ in 0..n {
            *res.entry(self.next_i64()).or_insert(0) += 1;
        }
        res
    }

    /// Reads `n` non-negative values into a set.
    pub fn next_bit_set(&mut self, n: usize) -> BitSet {
        let mut res = BitSet::with_capacity(n);
        for _ in 0..n {
            res.insert(self.next_usize());
        }
        res
    }
}

#[cfg(test)]
mod tests {
    use crate::Scanner;

    #[test]
    fn vectors() {
        let mut sc = Scanner::new(&b"3 1 2  5 -4 6  0.5 1.5  a bb"[..]);
        assert_eq!(sc.next_vec::<u32>(3), vec![3, 1, 2]);
        assert_eq!(sc.next_i64_vec(3), vec![5, -4, 6]);
        assert_eq!(sc.next_f64_vec(2), vec![0.5, 1.5]);
        assert_eq!(sc.next_tokens(2), vec!["a", "bb"]);
        assert!(sc.next_i32_vec(0).is_empty());
    }

    #[test]
    fn mapped_and_sorted() {
        let mut sc = Scanner::new(&b"1 2 3  9 -1 4  30 10 20"[..]);
        assert_eq!(sc.next_i32_vec_with(3, |x| x - 1), vec![0, 1, 2]);
        assert_eq!(sc.next_i32_vec_sorted(3), vec![-1, 4, 9]);
        assert_eq!(sc.next_i64_vec_sorted(3), vec![10, 20, 30]);
    }

    #[test]
    fn prefix_sum() {
        let mut sc = Scanner::new(&b"3 1 4 1 5"[..]);
        assert_eq!(sc.next_i64_prefix_sum(5), vec![0, 3, 4, 8, 9, 14]);
        assert_eq!(Scanner::new(&b""[..]).next_i64_prefix_sum(0), vec![0]);
    }

    #[test]
    fn matrices() {
        let mut sc = Scanner::new(&b"1 2 3\n4 5 6\n7 8\n9 10\n11 12\n13 14\n"[..]);
        assert_eq!(sc.next_i32_matrix(2, 3), vec![vec![1, 2, 3], vec![4, 5, 6]]);
        assert_eq!(
            sc.next_i32_cube(2, 1, 2),
            vec![vec![vec![7, 8]], vec![vec![9, 10]]]
        );
        assert_eq!(sc.next_i64_matrix(1, 4), vec![vec![11, 12, 13, 14]]);
    }

    #[test]
    fn grid_and_pairs() {
        let mut sc = Scanner::new(&b"#.#\n.#.\n1 2\n-3 4\n"[..]);
        assert_eq!(sc.next_char_grid(2), vec![b"#.#".to_vec(), b".#.".to_vec()]);
        assert_eq!(sc.next_pairs(2), vec![(1, 2), (-3, 4)]);
    }

    #[test]
    fn permutation_inverse() {
        let mut sc = Scanner::new(&b"2 0 3 1"[..]);
        assert_eq!(sc.next_inverse_permutation(4), vec![1, 3, 0, 2]);
    }

    #[test]
    fn buckets() {
        let mut sc = Scanner::new(&b"0 2 2 3 0 0  5 -1 5 2  7 3 7"[..]);
        assert_eq!(sc.next_counts(6, 4), vec![3, 0, 2, 1]);

        let multiset = sc.next_multiset(4);
        assert_eq!(multiset.into_iter().collect::<Vec<_>>(), vec![(-1, 1), (2, 1), (5, 2)]);

        let set = sc.next_bit_set(3);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![3, 7]);
    }
}
