// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Resources
//!
//! Owned copies of the hickory-proto record types this crate cares about. Only TXT data is kept in full; every
//! other record type is reduced to its `RecordType`.

pub use hickory_proto::rr::RecordType;
pub use rdata::{RData, TXT};
pub use record::Record;

pub mod rdata;
pub mod record;
