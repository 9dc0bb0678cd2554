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
Assertion helpers that record failures instead of panicking.

Failures go to a [`Report`]. Use a [`TestContext`] in a `#[test]` to keep
going after the first failure and fail the test once it ends, or a [`Recorder`]
to inspect the failures yourself.

```rust
use regex_util::testing::{Recorder, TestContext};
use regex_util::{expect_die, expect_eq};

let mut t = TestContext::new();
expect_eq!(&mut t, "hello".len(), 5usize);
expect_die!(&mut t, || panic!("aaaaahh"), "simple panic dies");

let mut r = Recorder::new();
expect_eq!(&mut r, "goodbye", "hello", "goodbye == {}?", "hello");
expect_eq!(&mut t, r.failures().len(), 1usize);
t.finish();
```

Failure messages start with the location of the calling code, followed by the
description if one was given:

```text
src/lib.rs:51 goodbye == hello?
Actual:   "goodbye"
Expected: "hello"
```

The location is only the caller's when the `track_caller` feature is enabled,
which it is by default. Otherwise it points into this module.
*/

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe, Location};

use log::{debug, error};

/// Something that collects assertion failures.
pub trait Report {
    /// Records a failed assertion. Must not panic.
    fn record_failure(&mut self, message: String);
}

impl<R: Report + ?Sized> Report for &mut R {
    fn record_failure(&mut self, message: String) {
        (**self).record_failure(message);
    }
}

/// A [`Report`] that only collects failures.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    failures: Vec<String>,
}

impl Recorder {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if any failure was recorded.
    #[must_use]
    pub fn failed(&self) -> bool {
        !self.failures.is_empty()
    }

    /// The recorded failure messages, oldest first.
    #[must_use]
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Consumes the recorder and returns its failure messages.
    #[must_use]
    pub fn into_failures(self) -> Vec<String> {
        self.failures
    }
}

impl Report for Recorder {
    fn record_failure(&mut self, message: String) {
        debug!("recorded failure: {message}");
        self.failures.push(message);
    }
}

/// A [`Report`] for use inside a test.
///
/// Failures are logged as they happen. When the context is dropped, or
/// [`finish`](TestContext::finish)ed, it panics with every recorded failure,
/// which fails the surrounding test.
///
/// ```rust,should_panic
/// use regex_util::expect_eq;
/// use regex_util::testing::TestContext;
///
/// let mut t = TestContext::new();
/// expect_eq!(&mut t, 1 + 1, 3, "arithmetic");
/// // t panics here when it goes out of scope
/// ```
#[derive(Debug, Default)]
pub struct TestContext {
    failures: Vec<String>,
}

impl TestContext {
    /// Create a context with no failures.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if any failure was recorded so far.
    #[must_use]
    pub fn failed(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Ends the test.
    ///
    /// # Panics
    ///
    /// Panics if any failure was recorded.
    pub fn finish(mut self) {
        let failures = std::mem::take(&mut self.failures);
        if !failures.is_empty() {
            panic!("{}", summary(&failures));
        }
    }
}

impl Report for TestContext {
    fn record_failure(&mut self, message: String) {
        error!("{message}");
        self.failures.push(message);
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        // a second panic while unwinding would abort
        if !self.failures.is_empty() && !std::thread::panicking() {
            panic!("{}", summary(&self.failures));
        }
    }
}

fn summary(failures: &[String]) -> String {
    let mut out = format!("{} expectation(s) failed:", failures.len());
    for failure in failures {
        out.push_str("\n\n");
        out.push_str(failure);
    }
    out
}

/// Records a failure in `ctx` unless `actual` and `expected` are deeply equal.
///
/// Deeply equal means `actual` and `expected` have the same type and compare
/// equal with [`PartialEq`]. Derived `PartialEq` implementations compare
/// recursively, so structs, vectors, boxes and byte strings are compared by
/// content. Values of different types are never equal, e.g. `b"hello".to_vec()`
/// and `"hello"`, or `1u8` and `1i32`.
///
/// The failure message shows both values with their [`Debug`](fmt::Debug)
/// representation. Prefer the [`expect_eq!`](crate::expect_eq) macro, which
/// builds `desc` from a format string.
#[cfg_attr(feature = "track_caller", track_caller)]
pub fn expect_equal<R, A, E>(ctx: &mut R, actual: A, expected: E, desc: fmt::Arguments<'_>)
where
    R: Report + ?Sized,
    A: PartialEq + fmt::Debug + 'static,
    E: fmt::Debug + 'static,
{
    if deep_equal(&actual, &expected) {
        return;
    }
    let location = Location::caller();
    ctx.record_failure(format!(
        "{}\nActual:   {actual:?}\nExpected: {expected:?}\n",
        heading(location, desc)
    ));
}

/// Runs `op` and records a failure in `ctx` unless it panics.
///
/// The panic is caught and not propagated. It is still reported by the panic
/// hook, so its message shows up in the test output. State that `op` mutates
/// may be left half-updated by the panic.
///
/// Prefer the [`expect_die!`](crate::expect_die) macro.
#[cfg_attr(feature = "track_caller", track_caller)]
pub fn expect_die<R, F>(ctx: &mut R, op: F, desc: fmt::Arguments<'_>)
where
    R: Report + ?Sized,
    F: FnOnce(),
{
    let location = Location::caller();
    match panic::catch_unwind(AssertUnwindSafe(op)) {
        Err(payload) => debug!("caught expected panic: {}", panic_message(&*payload)),
        Ok(()) => ctx.record_failure(format!("{}\nExpected panic", heading(location, desc))),
    }
}

fn deep_equal<A: PartialEq + 'static, E: 'static>(actual: &A, expected: &E) -> bool {
    let expected: &dyn Any = expected;
    expected
        .downcast_ref::<A>()
        .map_or(false, |expected| actual == expected)
}

fn heading(location: &Location<'_>, desc: fmt::Arguments<'_>) -> String {
    let desc = desc.to_string();
    if desc.is_empty() {
        format!("{}:{}", location.file(), location.line())
    } else {
        format!("{}:{} {desc}", location.file(), location.line())
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "Box<dyn Any>"
    }
}

/// Checks that two values are deeply equal, see
/// [`testing::expect_equal`](crate::testing::expect_equal).
///
/// An optional description is given as a format string and its arguments.
///
/// ```rust
/// use regex_util::expect_eq;
/// use regex_util::testing::Recorder;
///
/// let mut r = Recorder::new();
/// expect_eq!(&mut r, vec![1, 2], vec![1, 2]);
/// expect_eq!(&mut r, "a", "b", "[{}]: letters", 0);
/// assert_eq!(r.failures().len(), 1);
/// ```
#[macro_export]
macro_rules! expect_eq {
    ($ctx:expr, $actual:expr, $expected:expr $(,)?) => {
        $crate::testing::expect_equal($ctx, $actual, $expected, ::core::format_args!(""))
    };
    ($ctx:expr, $actual:expr, $expected:expr, $($arg:tt)+) => {
        $crate::testing::expect_equal($ctx, $actual, $expected, ::core::format_args!($($arg)+))
    };
}

/// Checks that a closure panics, see
/// [`testing::expect_die`](crate::testing::expect_die).
///
/// ```rust
/// use regex_util::expect_die;
/// use regex_util::testing::Recorder;
///
/// let mut r = Recorder::new();
/// expect_die!(&mut r, || { let v: Vec<u8> = Vec::new(); v[0]; });
/// expect_die!(&mut r, || {}, "stubborn code does not die");
/// assert_eq!(r.failures().len(), 1);
/// ```
#[macro_export]
macro_rules! expect_die {
    ($ctx:expr, $op:expr $(,)?) => {
        $crate::testing::expect_die($ctx, $op, ::core::format_args!(""))
    };
    ($ctx:expr, $op:expr, $($arg:tt)+) => {
        $crate::testing::expect_die($ctx, $op, ::core::format_args!($($arg)+))
    };
}
