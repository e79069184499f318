// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Derived from trust-dns by Benjamin Fry <benjaminfry@me.com>
// cf. https://github.com/bluejekyll/trust-dns
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::resources::{RData, RecordType, TXT};
use crate::Name;

#[derive(Debug, Eq, Clone)]
pub struct Record {
    name: Name,
    record_type: RecordType,
    ttl: u32,
    data: RData,
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.record_type == other.record_type && self.data == other.data
    }
}

impl Record {
    pub fn new(name: Name, ttl: u32, data: RData) -> Record {
        Record {
            name,
            record_type: data.record_type(),
            ttl,
            data,
        }
    }

    pub fn txt(name: Name, ttl: u32, txt: TXT) -> Record {
        Record::new(name, ttl, RData::TXT(txt))
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    pub fn data(&self) -> &RData {
        &self.data
    }
}

#[doc(hidden)]
impl From<&hickory_proto::rr::Record> for Record {
    fn from(record: &hickory_proto::rr::Record) -> Self {
        Record {
            name: record.name().clone(),
            record_type: record.record_type(),
            ttl: record.ttl(),
            data: record.data().into(),
        }
    }
}
