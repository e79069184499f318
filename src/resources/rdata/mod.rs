// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

pub use txt::TXT;

use crate::RecordType;

mod txt;

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum RData {
    TXT(TXT),
    /// Any record data this crate does not inspect, e.g., a CNAME preceding the TXT records of its target.
    Other(RecordType),
}

macro_rules! accessor {
    ($variant:ident, $method:ident, $out_type:ty) => {
        pub fn $method(&self) -> Option<&$out_type> {
            match self {
                RData::$variant(ref inner) => Some(inner),
                _ => None,
            }
        }
    };
}

impl RData {
    accessor!(TXT, txt, TXT);

    pub fn record_type(&self) -> RecordType {
        match self {
            RData::TXT(_) => RecordType::TXT,
            RData::Other(record_type) => *record_type,
        }
    }
}

#[doc(hidden)]
impl From<&hickory_proto::rr::RData> for RData {
    fn from(rdata: &hickory_proto::rr::RData) -> Self {
        use hickory_proto::rr::RData as HRData;

        match rdata {
            HRData::TXT(value) => RData::TXT(value.into()),
            other => RData::Other(other.record_type()),
        }
    }
}
