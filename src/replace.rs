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

//! Replacing only the leftmost-first match.

use log::debug;
use regex::bytes;

/// Replaces the leftmost-first match of `re` in `src` with the replacement
/// provided, and leaves everything after it alone, including further matches.
///
/// The replacement can be a template, where `$N` and `$name` are expanded to
/// the corresponding capture group of the match (`$0` is the entire match, and
/// `$$` is a literal `$`), a [`bytes::NoExpand`] to insert it verbatim, or a
/// closure that takes the match's [`bytes::Captures`]. See
/// [`bytes::Captures::expand`] for the full template syntax.
///
/// The result is always a new buffer. If there is no match it is a copy of
/// `src`.
///
/// # Example
///
/// ```rust
/// use regex::bytes::Regex;
/// use regex_util::replace_first;
///
/// let re = Regex::new(r"(\d)(\d)").unwrap();
/// assert_eq!(replace_first(&re, b"a12b12c", &b"$2$1"[..]), b"a21b12c");
/// ```
#[must_use]
pub fn replace_first<R: bytes::Replacer>(re: &bytes::Regex, src: &[u8], mut rep: R) -> Vec<u8> {
    // Without expansions there is no need to resolve capture groups.
    if let Some(rep) = rep.no_expansion() {
        let m = match re.find(src) {
            Some(m) => m,
            None => {
                debug!("{:?} did not match, copying input", re.as_str());
                return src.to_vec();
            }
        };
        let mut new = Vec::with_capacity(src.len() - m.len() + rep.len());
        new.extend_from_slice(&src[..m.start()]);
        new.extend_from_slice(&rep);
        new.extend_from_slice(&src[m.end()..]);
        return new;
    }

    let cap = match re.captures(src) {
        Some(cap) => cap,
        None => {
            debug!("{:?} did not match, copying input", re.as_str());
            return src.to_vec();
        }
    };
    // unwrap on 0 is OK because captures only reports matches
    let m = cap.get(0).unwrap();
    debug!("{:?} matched at {:?}", re.as_str(), m.range());
    let mut new = Vec::with_capacity(src.len());
    new.extend_from_slice(&src[..m.start()]);
    rep.replace_append(&cap, &mut new);
    if m.end() < src.len() {
        new.extend_from_slice(&src[m.end()..]);
    }
    new
}

/// Same as [`replace_first`], but on text.
///
/// The result is always a new `String`.
///
/// ```rust
/// use regex::Regex;
/// use regex_util::replace_first_str;
///
/// let re = Regex::new(r"(\d)(\d)").unwrap();
/// assert_eq!(replace_first_str(&re, "a12b12c", "$2$1"), "a21b12c");
///
/// let re = Regex::new(r"(?P<last>[^,\s]+),\s+(?P<first>\S+)").unwrap();
/// let result = replace_first_str(&re, "Springsteen, Bruce; Cash, Johnny", "$first $last");
/// assert_eq!(result, "Bruce Springsteen; Cash, Johnny");
/// ```
#[must_use]
pub fn replace_first_str<R: regex::Replacer>(re: &regex::Regex, src: &str, mut rep: R) -> String {
    if let Some(rep) = rep.no_expansion() {
        let m = match re.find(src) {
            Some(m) => m,
            None => {
                debug!("{:?} did not match, copying input", re.as_str());
                return src.to_owned();
            }
        };
        let mut new = String::with_capacity(src.len() - m.len() + rep.len());
        new.push_str(&src[..m.start()]);
        new.push_str(&rep);
        new.push_str(&src[m.end()..]);
        return new;
    }

    let cap = match re.captures(src) {
        Some(cap) => cap,
        None => {
            debug!("{:?} did not match, copying input", re.as_str());
            return src.to_owned();
        }
    };
    // unwrap on 0 is OK because captures only reports matches
    let m = cap.get(0).unwrap();
    debug!("{:?} matched at {:?}", re.as_str(), m.range());
    let mut new = String::with_capacity(src.len());
    new.push_str(&src[..m.start()]);
    rep.replace_append(&cap, &mut new);
    if m.end() < src.len() {
        new.push_str(&src[m.end()..]);
    }
    new
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    // search, replace, input, output
    const CASES: &[(&str, &str, &str, &str)] = &[
        ("a", "b", "a", "b"),
        ("a", "b", "c", "c"),
        ("a", "x", "b", "b"),
        ("(a)", "b", "a", "b"),
        ("b(a)", "$1", "ba", "a"),
        ("(a)", "$1$1$1", "a", "aaa"),
        ("(a)", "$1$1$1", "bab", "baaab"),
        ("(.)(.)", "$2$1", "ab", "ba"),
        (r"(\d)(\d)", "$2$1", "a12b", "a21b"),
        (r"(\d)(\d)", "$2$1", "a12b12c", "a21b12c"),
        (r"(\d)", "<$0>", "x1y2", "x<1>y2"),
        (r"(\d)", "$$1", "x1y2", "x$1y2"),
        ("a", "$1", "aa", "a"),
        ("x*", "-", "abc", "-abc"),
    ];

    #[test]
    fn replace_first_bytes() {
        for &(search, replace, input, want) in CASES {
            let re = bytes::Regex::new(search).unwrap();
            let got = replace_first(&re, input.as_bytes(), replace.as_bytes());
            assert_eq!(
                got,
                want.as_bytes(),
                "replace_first({search:?}, {input:?}, {replace:?})"
            );
        }
    }

    #[test]
    fn replace_first_text() {
        for &(search, replace, input, want) in CASES {
            let re = regex::Regex::new(search).unwrap();
            let got = replace_first_str(&re, input, replace);
            assert_eq!(got, want, "replace_first_str({search:?}, {input:?}, {replace:?})");
        }
    }

    #[test]
    fn no_expand_inserts_verbatim() {
        let re = bytes::Regex::new(r"(\d)(\d)").unwrap();
        let got = replace_first(&re, b"a12b12c", bytes::NoExpand(b"$2$1"));
        assert_eq!(got, b"a$2$1b12c");

        let re = regex::Regex::new(r"(\d)(\d)").unwrap();
        let got = replace_first_str(&re, "12", regex::NoExpand("$2$1"));
        assert_eq!(got, "$2$1");
    }

    #[test]
    fn closure_replacer() {
        let re = regex::Regex::new(r"(\w+)").unwrap();
        let got = replace_first_str(&re, "hello world", |caps: &regex::Captures<'_>| {
            caps[1].to_uppercase()
        });
        assert_eq!(got, "HELLO world");
    }

    #[test]
    fn no_match_returns_fresh_copy() {
        let re = bytes::Regex::new("z").unwrap();
        let src = b"abc".to_vec();
        let mut got = replace_first(&re, &src, &b"y"[..]);
        assert_eq!(got, src);
        got[0] = b'X';
        assert_eq!(src, b"abc");
    }

    #[test]
    fn invalid_utf8_is_kept() {
        let re = bytes::Regex::new(r"(?-u)b").unwrap();
        let got = replace_first(&re, b"\xffab\xfe", &b"B"[..]);
        assert_eq!(got, b"\xffaB\xfe");
    }

    quickcheck! {
        fn no_match_copies_input(input: String, rep: String) -> bool {
            let re = regex::Regex::new(r"\x00").unwrap();
            let input = input.replace('\0', "");
            replace_first_str(&re, &input, rep.as_str()) == input
                && replace_first(&bytes::Regex::new(r"\x00").unwrap(), input.as_bytes(), rep.as_bytes())
                    == input.as_bytes()
        }

        fn only_first_match_changes(prefix: String, suffix: String) -> bool {
            let re = regex::Regex::new("#").unwrap();
            let prefix = prefix.replace('#', "");
            let src = format!("{prefix}#{suffix}");
            replace_first_str(&re, &src, "@") == format!("{prefix}@{suffix}")
        }
    }
}
