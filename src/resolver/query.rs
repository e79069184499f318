// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use hickory_proto::op::{Message, MessageType, OpCode, Query};

use crate::resolver::{Error, ResolverResult};
use crate::{IntoName, Name, RecordType};

/// UniQuery
///
/// A single name for a single record type. The name is always fully qualified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniQuery {
    pub(crate) name: Name,
    pub(crate) record_type: RecordType,
}

impl UniQuery {
    pub fn new(name: &str, record_type: RecordType) -> ResolverResult<UniQuery> {
        let mut name = name.into_name().map_err(|e| Error::InvalidName {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        name.set_fqdn(true);

        Ok(UniQuery { name, record_type })
    }

    /// Creates a TXT query.
    ///
    /// # Example
    /// ```
    /// # use eaas::resolver::UniQuery;
    /// let query = UniQuery::txt("example.com").unwrap();
    /// assert_eq!(query.name().to_string(), "example.com.");
    /// ```
    pub fn txt(name: &str) -> ResolverResult<UniQuery> {
        UniQuery::new(name, RecordType::TXT)
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    /// Builds the wire message for this query with recursion desired
    pub(crate) fn to_message(&self, id: u16) -> Message {
        let mut message = Message::new();
        message
            .set_id(id)
            .set_message_type(MessageType::Query)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(true)
            .add_query(Query::query(self.name.clone(), self.record_type));

        message
    }
}
