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

use std::fmt;
use std::num::ParseIntError;

/// Result type for this crate with specific error enum.
pub type Result<T> = ::std::result::Result<T, Error>;

/// An error as the result of extracting submatches.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The number of slots does not match the number of capture groups in the regex.
    CountMismatch {
        /// Number of capture groups, not counting the implicit whole-match group.
        expected: usize,
        /// Number of slots supplied.
        actual: usize,
    },
    /// The regex did not match the input.
    NoMatch,
    /// The slot at this index (0-based) holds a destination type that cannot be written.
    WrongType {
        /// Index of the offending slot.
        index: usize,
    },
    /// A captured group could not be parsed as an integer.
    ParseInt(ParseIntError),
}

impl ::std::error::Error for Error {
    fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
        match self {
            Error::ParseInt(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CountMismatch { expected, actual } => write!(
                f,
                "wrong value count: regex has {expected} capture groups, got {actual} slots"
            ),
            Error::NoMatch => write!(f, "no match"),
            Error::WrongType { index } => write!(f, "wrong type for slot {index}"),
            Error::ParseInt(err) => write!(f, "{err}"),
        }
    }
}

impl From<ParseIntError> for Error {
    fn from(err: ParseIntError) -> Self {
        Error::ParseInt(err)
    }
}
