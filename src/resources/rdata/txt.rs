// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Derived from trust-dns by Benjamin Fry <benjaminfry@me.com>
// cf. https://github.com/bluejekyll/trust-dns
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::borrow::Cow;
use std::slice::Iter;

/// TXT record data, i.e., a list of character-strings
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
#[allow(clippy::upper_case_acronyms)]
pub struct TXT {
    txt_data: Box<[Box<[u8]>]>,
}

impl TXT {
    pub fn new(txt_data: Vec<String>) -> TXT {
        TXT {
            txt_data: txt_data
                .into_iter()
                .map(|s| s.into_bytes().into_boxed_slice())
                .collect::<Vec<_>>()
                .into_boxed_slice(),
        }
    }

    pub fn txt_data(&self) -> &[Box<[u8]>] {
        &self.txt_data
    }

    pub fn iter(&self) -> Iter<Box<[u8]>> {
        self.txt_data.iter()
    }

    /// The first character-string of this record, if any.
    ///
    /// Fingerprinting deliberately looks at this segment only; text continued in later segments is not inspected.
    pub fn first(&self) -> Option<Cow<'_, str>> {
        self.iter().next().map(|x| String::from_utf8_lossy(x))
    }

    /// All character-strings of this record, each converted lossily to UTF-8
    pub fn strings(&self) -> Vec<String> {
        self.iter().map(|x| String::from_utf8_lossy(x).into_owned()).collect()
    }
}

#[doc(hidden)]
impl From<&hickory_proto::rr::rdata::TXT> for TXT {
    fn from(txt: &hickory_proto::rr::rdata::TXT) -> Self {
        TXT {
            txt_data: txt.txt_data().to_vec().into_boxed_slice(),
        }
    }
}
