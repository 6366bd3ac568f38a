use crate::BitFieldError;
use crate::range::{self, Span};
use crate::value::{Integral, to_bit};
use alloc::string::ToString;
use alloc::vec::Vec;
use alloc::{format, vec};
use core::fmt::{Debug, Display, Formatter, Write};
use core::iter::FusedIterator;
use core::ops::RangeBounds;

/// Computes the number of buckets needed to store `bit_count` bits.
#[inline]
pub(crate) const fn bucket_count(bit_count: usize) -> usize {
    bit_count.div_ceil(8)
}

/// A dynamically-sized sequence of bits.
///
/// Internally stores bits in a `Vec<u8>`, bit `i` living in bucket `i / 8`.
/// Unused bits of the last bucket are always unset, so two fields compare
/// equal exactly when they have the same length and the same bits.
///
/// Reads fail soft and writes to a single index fail hard:
///
/// | call                          | outside the field                        |
/// |-------------------------------|------------------------------------------|
/// | [`get`]                       | `Ok(None)`                               |
/// | [`get_range`]                 | `None` per slot, `None` for a bad range  |
/// | [`set`]                       | [`BitFieldError::IndexOutOfRange`]       |
/// | [`set_range`]                 | `Ok(false)` for a bad range              |
/// | [`flip_at`]                   | `Ok(false)`                              |
///
/// A `BitField` has no interior synchronization. Sharing one between threads
/// needs external locking; cloning gives an independent copy.
///
/// [`get`]: BitField::get
/// [`get_range`]: BitField::get_range
/// [`set`]: BitField::set
/// [`set_range`]: BitField::set_range
/// [`flip_at`]: BitField::flip_at
#[derive(PartialEq, Eq, Hash, Clone, Default)]
pub struct BitField {
    len: usize,
    pub(crate) buckets: Vec<u8>,
}

impl BitField {
    /// Creates a new bit field of `len` bits, all unset.
    ///
    /// # Examples
    /// ```
    /// use light_bitfield::BitField;
    ///
    /// let field = BitField::new(10);
    /// assert_eq!(field.len(), 10);
    /// assert_eq!(field.count(), 0);
    /// ```
    pub fn new(len: usize) -> Self {
        Self {
            len,
            buckets: vec![0u8; bucket_count(len)],
        }
    }

    /// Creates a new bit field from a size that hasn't been checked yet.
    ///
    /// # Errors
    /// Returns [`BitFieldError::InvalidArgument`] if `size` is negative or
    /// not an integer.
    ///
    /// # Examples
    /// ```
    /// use light_bitfield::{BitField, BitFieldError, Value};
    ///
    /// assert_eq!(BitField::try_new(4).unwrap().len(), 4);
    /// assert!(matches!(BitField::try_new(-1), Err(BitFieldError::InvalidArgument(_))));
    /// assert!(matches!(
    ///     BitField::try_new(Value::Float(2.0)),
    ///     Err(BitFieldError::InvalidArgument(_))
    /// ));
    /// ```
    pub fn try_new<S: Integral>(size: S) -> Result<Self, BitFieldError> {
        let size = size
            .to_integer()
            .map_err(|err| BitFieldError::InvalidArgument(err.to_string()))?;
        let len = usize::try_from(size)
            .map_err(|_| BitFieldError::InvalidArgument(format!("negative size {size}")))?;
        Ok(Self::new(len))
    }

    /// Constructs a bit field from a boolean slice, where `true` means set.
    ///
    /// # Examples
    /// ```
    /// use light_bitfield::BitField;
    ///
    /// let field = BitField::from_slice(&[true, false, true, true]);
    /// assert_eq!(field.len(), 4);
    /// assert_eq!(field.count(), 3);
    /// ```
    pub fn from_slice(bits: &[bool]) -> Self {
        let mut field = Self::new(bits.len());
        for (idx, bit) in bits.iter().enumerate() {
            field.write(idx, *bit);
        }
        field
    }

    /// Returns the number of bits in the field.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the field holds no bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Changes the number of bits to `len`.
    ///
    /// Bits below both the old and the new length keep their value. Growing
    /// appends unset bits, shrinking drops the highest ones.
    ///
    /// # Examples
    /// ```
    /// use light_bitfield::BitField;
    ///
    /// let mut field = BitField::from_slice(&[true, true, true]);
    /// field.resize(2);
    /// field.resize(5);
    /// assert_eq!(field.to_string(), "00011");
    /// ```
    pub fn resize(&mut self, len: usize) {
        self.buckets.resize(bucket_count(len), 0);
        self.len = len;
        self.clean_unused_bits();
    }

    /// Returns the bit at `index` as `0` or `1`.
    ///
    /// Indices outside the field, negative ones included, are a soft miss and
    /// give `Ok(None)`.
    ///
    /// # Errors
    /// Returns [`BitFieldError::Type`] if `index` is not an integer.
    ///
    /// # Examples
    /// ```
    /// use light_bitfield::BitField;
    ///
    /// let mut field = BitField::new(10);
    /// field.set(3, 1).unwrap();
    /// assert_eq!(field.get(3), Ok(Some(1)));
    /// assert_eq!(field.get(4), Ok(Some(0)));
    /// assert_eq!(field.get(-1), Ok(None));
    /// assert_eq!(field.get(10), Ok(None));
    /// ```
    pub fn get<I: Integral>(&self, index: I) -> Result<Option<u8>, BitFieldError> {
        let index = index.to_integer()?;
        Ok(self.position(index).map(|idx| u8::from(self.bit(idx))))
    }

    /// Returns the bits covered by `range`, in ascending index order.
    ///
    /// Negative endpoints count from the end of the field. Positions of the
    /// range that lie past the end come back as `None`. Returns `None` if the
    /// range can't be placed on the field at all, i.e. its start is before
    /// the first or after the last bit, or if the result is too long to
    /// allocate.
    ///
    /// # Examples
    /// ```
    /// use light_bitfield::BitField;
    ///
    /// let field = BitField::from_slice(&[true, false, true, true]);
    /// assert_eq!(field.get_range(0..2), Some(vec![Some(1), Some(0)]));
    /// assert_eq!(field.get_range(-2..), Some(vec![Some(1), Some(1)]));
    /// assert_eq!(field.get_range(2..=4), Some(vec![Some(1), Some(1), None]));
    /// assert_eq!(field.get_range(5..6), None);
    /// assert_eq!(field.get_range(0..i64::MAX), None);
    /// ```
    pub fn get_range<R: RangeBounds<i64>>(&self, range: R) -> Option<Vec<Option<u8>>> {
        let Span { begin, count } = range::normalize(&range, self.len)?;
        let mut bits = Vec::new();
        bits.try_reserve_exact(count).ok()?;
        let end = begin.checked_add(count)?.min(self.len);
        bits.extend((begin..end).map(|idx| Some(u8::from(self.bit(idx)))));
        bits.resize(count, None);
        Some(bits)
    }

    /// Stores `value mod 2` at `index`.
    ///
    /// Even values unset the bit, odd values set it.
    ///
    /// # Errors
    /// Returns [`BitFieldError::Type`] if `index` or `value` is not an
    /// integer and [`BitFieldError::IndexOutOfRange`] if `index` is outside
    /// the field.
    ///
    /// # Examples
    /// ```
    /// use light_bitfield::{BitField, BitFieldError};
    ///
    /// let mut field = BitField::new(10);
    /// field.set(5, 1 << 10).unwrap();
    /// field.set(9, (1 << 10) + 1).unwrap();
    /// assert_eq!(field.get(5), Ok(Some(0)));
    /// assert_eq!(field.get(9), Ok(Some(1)));
    /// assert_eq!(field.set(10, 1), Err(BitFieldError::IndexOutOfRange { index: 10 }));
    /// ```
    pub fn set<I: Integral, V: Integral>(&mut self, index: I, value: V) -> Result<(), BitFieldError> {
        let index = index.to_integer()?;
        let bit = to_bit(&value)?;
        let idx = self
            .position(index)
            .ok_or(BitFieldError::IndexOutOfRange { index })?;
        self.write(idx, bit);
        Ok(())
    }

    /// Assigns `values` to the bits covered by `range`.
    ///
    /// The range is walked from its last position back to its first, and
    /// each position takes the value popped off the end of `values`. Consumed
    /// values are gone from `values` afterwards, surplus ones stay. Each value
    /// is stored as `value mod 2`. Positions past the end of the field are not
    /// part of the assignment.
    ///
    /// Returns `Ok(false)` without touching anything if the range can't be
    /// placed on the field, `Ok(true)` otherwise.
    ///
    /// # Errors
    /// Returns [`BitFieldError::ValuesExhausted`] if `values` runs out before
    /// the range is filled and [`BitFieldError::Type`] if a popped value is
    /// not an integer. Positions assigned before the error keep their new
    /// value.
    ///
    /// # Examples
    /// ```
    /// use light_bitfield::{BitField, BitFieldError};
    ///
    /// let mut field = BitField::new(6);
    /// let mut values = vec![7, 1, 0, 1];
    /// assert_eq!(field.set_range(0..3, &mut values), Ok(true));
    /// assert_eq!(values, [7]);
    /// assert_eq!(field.get_range(0..3), Some(vec![Some(1), Some(0), Some(1)]));
    ///
    /// let mut short = vec![1];
    /// assert_eq!(field.set_range(3..6, &mut short), Err(BitFieldError::ValuesExhausted));
    /// assert_eq!(field.get(5), Ok(Some(1)));
    /// ```
    pub fn set_range<R, V>(&mut self, range: R, values: &mut Vec<V>) -> Result<bool, BitFieldError>
    where
        R: RangeBounds<i64>,
        V: Integral,
    {
        let Some(span) = range::normalize(&range, self.len) else {
            return Ok(false);
        };
        for idx in (span.begin..span.clamped_end(self.len)).rev() {
            let value = values.pop().ok_or(BitFieldError::ValuesExhausted)?;
            self.write(idx, to_bit(&value)?);
        }
        Ok(true)
    }

    /// Inverts every bit in place.
    ///
    /// # Examples
    /// ```
    /// use light_bitfield::BitField;
    ///
    /// let mut field = BitField::new(10);
    /// field.flip();
    /// assert_eq!(field.to_string(), "1111111111");
    /// ```
    pub fn flip(&mut self) {
        for byte in &mut self.buckets {
            *byte = !*byte;
        }
        self.clean_unused_bits();
    }

    /// Inverts the bit at `index`.
    ///
    /// Returns `Ok(false)` and leaves the field unchanged if `index` is
    /// outside the field, `Ok(true)` after flipping.
    ///
    /// # Errors
    /// Returns [`BitFieldError::Type`] if `index` is not an integer.
    ///
    /// # Examples
    /// ```
    /// use light_bitfield::BitField;
    ///
    /// let mut field = BitField::new(10);
    /// assert_eq!(field.flip_at(5), Ok(true));
    /// assert_eq!(field.get(5), Ok(Some(1)));
    /// assert_eq!(field.flip_at(10), Ok(false));
    /// ```
    pub fn flip_at<I: Integral>(&mut self, index: I) -> Result<bool, BitFieldError> {
        let index = index.to_integer()?;
        let Some(idx) = self.position(index) else {
            return Ok(false);
        };
        let (group_idx, item_idx) = Self::idxs(idx);
        self.buckets[group_idx] ^= 1 << item_idx;
        Ok(true)
    }

    /// Flips with a variable number of arguments: none flips every bit, one
    /// flips the bit at that index as [`flip_at`] does.
    ///
    /// Returns `Ok(true)` if something was flipped, so always for no
    /// arguments, and `Ok(false)` for a single index outside the field.
    ///
    /// # Errors
    /// Returns [`BitFieldError::Arity`] for more than one argument, and
    /// whatever [`flip_at`] returns for a single one.
    ///
    /// # Examples
    /// ```
    /// use light_bitfield::{BitField, BitFieldError, Value};
    ///
    /// let mut field = BitField::new(4);
    /// assert_eq!(field.flip_with_args::<Value>(&[]), Ok(true));
    /// assert_eq!(field.flip_with_args(&[Value::Int(0)]), Ok(true));
    /// assert_eq!(field.to_string(), "1110");
    /// assert_eq!(field.flip_with_args(&[1, 2]), Err(BitFieldError::Arity { given: 2 }));
    /// ```
    ///
    /// [`flip_at`]: BitField::flip_at
    pub fn flip_with_args<I: Integral>(&mut self, args: &[I]) -> Result<bool, BitFieldError> {
        match args {
            [] => {
                self.flip();
                Ok(true)
            }
            [index] => self.flip_at(index),
            _ => Err(BitFieldError::Arity { given: args.len() }),
        }
    }

    /// Returns the number of set bits.
    ///
    /// # Examples
    /// ```
    /// use light_bitfield::BitField;
    ///
    /// let field = BitField::from_slice(&[true, false, true, false]);
    /// assert_eq!(field.count(), 2);
    /// ```
    #[inline]
    pub fn count(&self) -> usize {
        self.buckets.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Returns an iterator over all bits as `0`/`1`, from index 0 upwards.
    ///
    /// Every call starts a fresh traversal.
    ///
    /// # Examples
    /// ```
    /// use light_bitfield::BitField;
    ///
    /// let field = BitField::from_slice(&[true, true, false, false, true]);
    /// assert_eq!(field.iter().collect::<Vec<_>>(), [1, 1, 0, 0, 1]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buckets: &self.buckets,
            idx: 0,
            len: self.len,
        }
    }

    /// Returns an iterator over all indices of the field, in ascending order.
    #[inline]
    pub fn indices(&self) -> Indices {
        Indices {
            idx: 0,
            len: self.len,
        }
    }

    /// Calls `f` with every bit, from index 0 upwards, and returns `self`.
    ///
    /// # Examples
    /// ```
    /// use light_bitfield::BitField;
    ///
    /// let field = BitField::from_slice(&[true, false, true]);
    /// let mut seen = Vec::new();
    /// field.each(|bit| seen.push(bit));
    /// assert_eq!(seen, [1, 0, 1]);
    /// ```
    pub fn each<F: FnMut(u8)>(&self, f: F) -> &Self {
        self.iter().for_each(f);
        self
    }

    /// Calls `f` with every index, from 0 upwards, and returns `self`.
    pub fn each_index<F: FnMut(usize)>(&self, f: F) -> &Self {
        self.indices().for_each(f);
        self
    }

    #[inline]
    fn idxs(idx: usize) -> (usize, usize) {
        (idx / 8, idx % 8)
    }

    #[inline]
    fn position(&self, index: i64) -> Option<usize> {
        usize::try_from(index).ok().filter(|&idx| idx < self.len)
    }

    #[inline]
    fn bit(&self, idx: usize) -> bool {
        let (group_idx, item_idx) = Self::idxs(idx);
        self.buckets[group_idx] & 1 << item_idx != 0
    }

    #[inline]
    fn write(&mut self, idx: usize, bit: bool) {
        let (group_idx, item_idx) = Self::idxs(idx);
        if bit {
            self.buckets[group_idx] |= 1 << item_idx;
        } else {
            self.buckets[group_idx] &= !(1 << item_idx);
        }
    }

    fn push_bit(&mut self, bit: bool) {
        let idx = self.len;
        if idx % 8 == 0 {
            self.buckets.push(0);
        }
        self.len += 1;
        self.write(idx, bit);
    }

    #[inline]
    fn clean_unused_bits(&mut self) {
        let bits_in_last = self.len % 8;
        if bits_in_last != 0
            && let Some(last) = self.buckets.last_mut()
        {
            *last &= (1 << bits_in_last) - 1;
        }
    }
}

impl<'field> IntoIterator for &'field BitField {
    type Item = u8;
    type IntoIter = Iter<'field>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders the bits as `0`/`1` characters, highest index first.
impl Display for BitField {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for idx in (0..self.len).rev() {
            f.write_char(if self.bit(idx) { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl Debug for BitField {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "LSB -> ")?;
        for (i, bit) in self.iter().enumerate() {
            if i % 8 == 0 {
                write!(f, "{i}: ")?;
            }
            write!(f, "{bit}")?;
            if i % 8 == 7 && i + 1 < self.len {
                write!(f, " ")?;
            }
        }
        write!(f, " <- MSB")?;
        Ok(())
    }
}

/// Constructs a bit field from an iterator over `bool`s, one bit per item.
impl FromIterator<bool> for BitField {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        let mut field = Self::default();
        for bit in iter {
            field.push_bit(bit);
        }
        field
    }
}

/// Iterator over all bits of a [`BitField`] as `0`/`1`.
///
/// Returned by [`BitField::iter()`].
#[derive(Clone)]
pub struct Iter<'field> {
    buckets: &'field [u8],
    idx: usize,
    len: usize,
}

impl Iterator for Iter<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.len {
            return None;
        }
        let (group_idx, item_idx) = BitField::idxs(self.idx);
        self.idx += 1;
        Some((self.buckets[group_idx] >> item_idx) & 1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.idx.min(self.len);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Iterator over the indices of a [`BitField`].
///
/// Returned by [`BitField::indices()`].
#[derive(Clone, Copy)]
pub struct Indices {
    idx: usize,
    len: usize,
}

impl Iterator for Indices {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.len {
            return None;
        }
        self.idx += 1;
        Some(self.idx - 1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.idx.min(self.len);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Indices {}

impl FusedIterator for Indices {}
