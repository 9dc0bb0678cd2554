// Copyright 2024 The Regex Util Authors.
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! Typed destinations for extracted submatches.

use std::any::Any;
use std::fmt;
use std::ops::Range;

use crate::{Error, Result};

/// A view into the buffer a submatch was extracted from.
///
/// A view is not a copy: it only remembers where the group matched. Reading it
/// back with [`ByteView::get`] borrows the original buffer, and writing through
/// [`ByteView::get_mut`] modifies the original buffer in place.
///
/// # Example
///
/// ```rust
/// use regex::bytes::Regex;
/// use regex_util::{extract, ByteView, Slot};
///
/// let re = Regex::new(r"(\w+)=").unwrap();
/// let mut buf = b"key=value".to_vec();
/// let mut key = ByteView::default();
/// extract(&re, &buf, &mut [Slot::Bytes(&mut key)]).unwrap();
///
/// key.get_mut(&mut buf).make_ascii_uppercase();
/// assert_eq!(buf, b"KEY=value");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct ByteView {
    start: usize,
    end: usize,
}

impl ByteView {
    /// Creates a view over `range`.
    #[must_use]
    #[inline]
    pub fn new(range: Range<usize>) -> Self {
        ByteView {
            start: range.start,
            end: range.end,
        }
    }

    /// Returns the starting byte offset of the view.
    #[must_use]
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the ending byte offset of the view.
    #[must_use]
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns the range of the view in its buffer.
    #[must_use]
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns the length, in bytes, of the view.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.range().len()
    }

    /// Returns true if the view covers no bytes.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.range().is_empty()
    }

    /// Returns the viewed bytes of `buf`.
    ///
    /// # Panics
    ///
    /// Panics if the view lies outside `buf`, i.e. `buf` is not the buffer the
    /// view was extracted from.
    #[must_use]
    #[inline]
    pub fn get<'b>(&self, buf: &'b [u8]) -> &'b [u8] {
        &buf[self.range()]
    }

    /// Returns the viewed bytes of `buf` for writing. Writes land in `buf`.
    ///
    /// # Panics
    ///
    /// Panics if the view lies outside `buf`.
    #[must_use]
    #[inline]
    pub fn get_mut<'b>(&self, buf: &'b mut [u8]) -> &'b mut [u8] {
        &mut buf[self.range()]
    }

    /// Returns the viewed part of `text`.
    ///
    /// # Panics
    ///
    /// Panics if the view lies outside `text` or not on a char boundary.
    #[must_use]
    #[inline]
    pub fn as_str<'b>(&self, text: &'b str) -> &'b str {
        &text[self.range()]
    }

    /// Copies the viewed bytes out of `buf`.
    #[must_use]
    #[inline]
    pub fn to_vec(&self, buf: &[u8]) -> Vec<u8> {
        self.get(buf).to_vec()
    }
}

impl fmt::Debug for ByteView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteView({}..{})", self.start, self.end)
    }
}

impl From<Range<usize>> for ByteView {
    fn from(range: Range<usize>) -> Self {
        ByteView::new(range)
    }
}

impl From<ByteView> for Range<usize> {
    fn from(view: ByteView) -> Range<usize> {
        view.range()
    }
}

/// A typed destination for one capture group.
///
/// Text and integer slots receive copies. A bytes slot receives a [`ByteView`]
/// into the searched buffer.
pub enum Slot<'a> {
    /// Receives the captured text, converted lossily from UTF-8.
    Text(&'a mut String),
    /// Receives a view of the captured bytes.
    Bytes(&'a mut ByteView),
    /// Receives the captured text parsed as a base-10 integer.
    Int(&'a mut i64),
    /// A type-erased destination, which must be a `String`, a [`ByteView`] or
    /// an `i64` when the submatch is written. Anything else is
    /// [`Error::WrongType`].
    Any(&'a mut dyn Any),
}

impl<'a> Slot<'a> {
    /// Writes the group `range` of `src` into this slot. `index` is only used
    /// for error reporting.
    pub(crate) fn assign(&mut self, index: usize, src: &[u8], range: Range<usize>) -> Result<()> {
        match self {
            Slot::Text(s) => write_text(s, &src[range]),
            Slot::Bytes(v) => **v = ByteView::new(range),
            Slot::Int(i) => **i = parse_int(&src[range])?,
            Slot::Any(any) => {
                if let Some(s) = any.downcast_mut::<String>() {
                    write_text(s, &src[range]);
                } else if let Some(v) = any.downcast_mut::<ByteView>() {
                    *v = ByteView::new(range);
                } else if let Some(i) = any.downcast_mut::<i64>() {
                    *i = parse_int(&src[range])?;
                } else {
                    return Err(Error::WrongType { index });
                }
            }
        }
        Ok(())
    }

    fn kind(&self) -> &'static str {
        match self {
            Slot::Text(_) => "Text",
            Slot::Bytes(_) => "Bytes",
            Slot::Int(_) => "Int",
            Slot::Any(_) => "Any",
        }
    }
}

fn write_text(dst: &mut String, bytes: &[u8]) {
    dst.clear();
    dst.push_str(&String::from_utf8_lossy(bytes));
}

// Invalid UTF-8 turns into U+FFFD, which the integer parser rejects as an invalid digit.
fn parse_int(bytes: &[u8]) -> Result<i64> {
    Ok(String::from_utf8_lossy(bytes).parse::<i64>()?)
}

impl<'a> fmt::Debug for Slot<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Text(s) => f.debug_tuple(self.kind()).field(s).finish(),
            Slot::Bytes(v) => f.debug_tuple(self.kind()).field(v).finish(),
            Slot::Int(i) => f.debug_tuple(self.kind()).field(i).finish(),
            Slot::Any(_) => f.write_str("Any(..)"),
        }
    }
}

impl<'a> From<&'a mut String> for Slot<'a> {
    fn from(s: &'a mut String) -> Self {
        Slot::Text(s)
    }
}

impl<'a> From<&'a mut ByteView> for Slot<'a> {
    fn from(v: &'a mut ByteView) -> Self {
        Slot::Bytes(v)
    }
}

impl<'a> From<&'a mut i64> for Slot<'a> {
    fn from(i: &'a mut i64) -> Self {
        Slot::Int(i)
    }
}

/// Builds an array of [`Slot`]s from mutable references to `String`,
/// [`ByteView`] or `i64` destinations.
///
/// ```rust
/// use regex::bytes::Regex;
/// use regex_util::{extract, slots, ByteView};
///
/// let re = Regex::new(r"(\w+):(\w+):(\d+)").unwrap();
/// let (mut s, mut b, mut i) = (String::new(), ByteView::default(), 0i64);
/// extract(&re, b"foo:bar:42", &mut slots![&mut s, &mut b, &mut i]).unwrap();
/// assert_eq!((s.as_str(), b.get(b"foo:bar:42"), i), ("foo", &b"bar"[..], 42));
/// ```
#[macro_export]
macro_rules! slots {
    ($($dst:expr),* $(,)?) => {
        [$($crate::Slot::from($dst)),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use matches::assert_matches;

    #[test]
    fn view_reads_and_writes_through() {
        let mut buf = b"hello world".to_vec();
        let view = ByteView::new(6..11);
        assert_eq!(view.get(&buf), b"world");
        assert_eq!(view.len(), 5);
        view.get_mut(&mut buf)[0] = b'W';
        assert_eq!(buf, b"hello World");
        assert_eq!(view.to_vec(&buf), b"World".to_vec());
    }

    #[test]
    fn default_view_is_empty() {
        let view = ByteView::default();
        assert!(view.is_empty());
        assert_eq!(view.get(b"abc"), b"");
        assert_eq!(format!("{view:?}"), "ByteView(0..0)");
    }

    #[test]
    fn text_slot_replaces_previous_contents() {
        let mut s = String::from("stale");
        Slot::Text(&mut s).assign(0, b"fresh", 0..5).unwrap();
        assert_eq!(s, "fresh");
    }

    #[test]
    fn text_slot_is_lossy() {
        let mut s = String::new();
        Slot::Text(&mut s).assign(0, b"a\xffb", 0..3).unwrap();
        assert_eq!(s, "a\u{fffd}b");
    }

    #[test]
    fn int_slot_rejects_invalid_utf8() {
        let mut i = 7;
        let res = Slot::Int(&mut i).assign(0, b"4\xff", 0..2);
        assert_matches!(res, Err(Error::ParseInt(_)));
        assert_eq!(i, 7);
    }

    #[test]
    fn int_slot_parses_sign() {
        let mut i = 0;
        Slot::Int(&mut i).assign(0, b"x=-12", 2..5).unwrap();
        assert_eq!(i, -12);
    }

    #[test]
    fn any_slot_dispatches_on_type() {
        let mut s = String::new();
        let mut v = ByteView::default();
        let mut i = 0i64;
        Slot::Any(&mut s).assign(0, b"12", 0..2).unwrap();
        Slot::Any(&mut v).assign(1, b"12", 0..2).unwrap();
        Slot::Any(&mut i).assign(2, b"12", 0..2).unwrap();
        assert_eq!((s.as_str(), v, i), ("12", ByteView::new(0..2), 12));
    }

    #[test]
    fn any_slot_rejects_other_types() {
        let mut f = 0.0f64;
        let res = Slot::Any(&mut f).assign(3, b"1.5", 0..3);
        assert_eq!(res, Err(Error::WrongType { index: 3 }));
    }

    #[test]
    fn slots_macro_builds_typed_slots() {
        let (mut s, mut v, mut i) = (String::new(), ByteView::default(), 0i64);
        let slots = slots![&mut s, &mut v, &mut i];
        let kinds: Vec<_> = slots.iter().map(Slot::kind).collect();
        assert_eq!(kinds, ["Text", "Bytes", "Int"]);
    }
}
