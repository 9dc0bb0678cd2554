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

//! Scattering capture groups into typed slots.

use std::ops::Range;

use log::{debug, trace};

use crate::{Error, Result, Slot};

/// Matches `re` against `src` and writes capture group `i` into `slots[i - 1]`.
///
/// The number of slots must equal the number of capture groups in `re`, not
/// counting the implicit group of the entire match. See [`Slot`] for the
/// conversions applied. A group that did not participate in the match is
/// written as if it captured the empty string.
///
/// # Example
///
/// ```rust
/// use regex::bytes::Regex;
/// use regex_util::{extract, ByteView, Slot};
///
/// let re = Regex::new(r"(\w+):(\w+):(\d+)").unwrap();
/// let mut input = b"foo:bar:42".to_vec();
///
/// let mut s = String::new();
/// let mut b = ByteView::default();
/// let mut i = 0;
/// extract(&re, &input, &mut [Slot::Text(&mut s), Slot::Bytes(&mut b), Slot::Int(&mut i)])
///     .unwrap();
/// assert_eq!(s, "foo");
/// assert_eq!(b.get(&input), b"bar");
/// assert_eq!(i, 42);
///
/// // the view aliases the input
/// b.get_mut(&mut input)[2] = b's';
/// assert_eq!(input, b"foo:bas:42");
/// ```
///
/// # Errors
///
/// - [`Error::CountMismatch`] if the slot count is wrong. The match is not run.
/// - [`Error::NoMatch`] if `re` does not match `src`.
/// - [`Error::WrongType`] if a [`Slot::Any`] holds an unsupported type.
/// - [`Error::ParseInt`] if an integer slot receives something that is not an
///   integer.
///
/// On the first two errors no slot is written. On the last two, slots before
/// the failing one have already been written and later ones are untouched.
pub fn extract(re: &regex::bytes::Regex, src: &[u8], slots: &mut [Slot<'_>]) -> Result<()> {
    check_count(re.captures_len(), slots.len())?;
    trace!("extracting {} groups with {:?}", slots.len(), re.as_str());
    let caps = re.captures(src).ok_or_else(|| no_match(re.as_str()))?;
    scatter(slots, src, caps.iter().skip(1).map(|m| m.map(|m| m.range())))
}

/// Same as [`extract`], but matches a text regex against text.
///
/// Byte views written by this function index into `src.as_bytes()`, and can be
/// read back with [`ByteView::as_str`](crate::ByteView::as_str).
///
/// ```rust
/// use regex::Regex;
/// use regex_util::{extract_str, slots, ByteView};
///
/// let re = Regex::new(r"(?P<user>\w+)@(?P<host>[\w.]+)").unwrap();
/// let text = "mail root@example.com now";
/// let (mut user, mut host) = (String::new(), ByteView::default());
/// extract_str(&re, text, &mut slots![&mut user, &mut host]).unwrap();
/// assert_eq!(user, "root");
/// assert_eq!(host.as_str(text), "example.com");
/// ```
///
/// # Errors
///
/// The same as [`extract`].
pub fn extract_str(re: &regex::Regex, src: &str, slots: &mut [Slot<'_>]) -> Result<()> {
    check_count(re.captures_len(), slots.len())?;
    trace!("extracting {} groups with {:?}", slots.len(), re.as_str());
    let caps = re.captures(src).ok_or_else(|| no_match(re.as_str()))?;
    scatter(
        slots,
        src.as_bytes(),
        caps.iter().skip(1).map(|m| m.map(|m| m.range())),
    )
}

fn check_count(captures_len: usize, n_slots: usize) -> Result<()> {
    // captures_len counts the whole match as group 0
    let expected = captures_len - 1;
    if expected != n_slots {
        debug!("slot count mismatch: {expected} groups, {n_slots} slots");
        return Err(Error::CountMismatch {
            expected,
            actual: n_slots,
        });
    }
    Ok(())
}

fn no_match(pattern: &str) -> Error {
    debug!("{pattern:?} did not match");
    Error::NoMatch
}

fn scatter(
    slots: &mut [Slot<'_>],
    src: &[u8],
    groups: impl Iterator<Item = Option<Range<usize>>>,
) -> Result<()> {
    for (index, (slot, group)) in slots.iter_mut().zip(groups).enumerate() {
        let range = group.unwrap_or(0..0);
        trace!("group {} at {range:?} -> {slot:?}", index + 1);
        slot.assign(index, src, range).map_err(|err| {
            debug!("failed to write group {} into slot {index}: {err}", index + 1);
            err
        })?;
    }
    Ok(())
}
