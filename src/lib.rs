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

/*!
Utilities not found in the [regex] crate, and a few test assertion helpers.

Two operations work on a compiled regex:

- [`extract`] runs one match and writes each capture group into a typed
  [`Slot`]: text, an integer, or a [`ByteView`] that aliases the searched
  buffer.
- [`replace_first`] replaces only the leftmost-first match, expanding `$N`
  references in the replacement against that match.

Both have text counterparts, [`extract_str`] and [`replace_first_str`].

The [`testing`] module has [`expect_eq!`] and [`expect_die!`], which record
failures with the caller's location instead of stopping the test.

# Example: Extracting submatches

```rust
use regex::bytes::Regex;
use regex_util::{extract, slots, ByteView};

let re = Regex::new(r"(\w+):(\w+):(\d+)").unwrap();
let input = b"foo:bar:42";

let mut s = String::new();
let mut b = ByteView::default();
let mut i = 0i64;
extract(&re, input, &mut slots![&mut s, &mut b, &mut i]).unwrap();

assert_eq!(s, "foo");
assert_eq!(b.get(input), b"bar");
assert_eq!(i, 42);
```

Note that like in the regex crate, the regex needs anchors like `^` and `$` to
match against the entire input.

# Example: Replacing the first match

```rust
use regex::Regex;
use regex_util::replace_first_str;

let re = Regex::new(r"(\d)(\d)").unwrap();
assert_eq!(replace_first_str(&re, "a12b12c", "$2$1"), "a21b12c");
```

To replace every match, use [`regex::Regex::replace_all`].

[regex]: https://crates.io/crates/regex
*/

#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::needless_pass_by_value)]

mod error;
mod extract;
mod replace;
mod slot;
pub mod testing;

pub use crate::error::{Error, Result};
pub use crate::extract::{extract, extract_str};
pub use crate::replace::{replace_first, replace_first_str};
pub use crate::slot::{ByteView, Slot};
