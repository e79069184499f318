// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use hickory_proto::op::Message;

use crate::resolver::{Error, ResolverResult, UniQuery};
use crate::resources::{Record, TXT};
use crate::ResponseCode;

/// Answer of a nameserver to a `UniQuery`
///
/// A response is kept even if its response code signals a failure; its answer section is still usable.
#[derive(Debug, Clone)]
pub struct Response {
    query: UniQuery,
    response_code: ResponseCode,
    truncated: bool,
    answers: Vec<Record>,
}

impl Response {
    pub fn new(query: UniQuery, response_code: ResponseCode, answers: Vec<Record>) -> Response {
        Response {
            query,
            response_code,
            truncated: false,
            answers,
        }
    }

    pub(crate) fn from_message(query: UniQuery, message: &Message) -> Response {
        Response {
            query,
            response_code: message.response_code(),
            truncated: message.truncated(),
            answers: message.answers().iter().map(Record::from).collect(),
        }
    }

    pub fn query(&self) -> &UniQuery {
        &self.query
    }

    pub fn response_code(&self) -> ResponseCode {
        self.response_code
    }

    pub fn truncated(&self) -> bool {
        self.truncated
    }

    pub fn answers(&self) -> &[Record] {
        &self.answers
    }

    pub fn txt(&self) -> impl Iterator<Item = &TXT> {
        self.answers.iter().filter_map(|x| x.data().txt())
    }

    pub fn is_success(&self) -> bool {
        self.response_code == ResponseCode::NoError
    }

    /// Fails with `Error::BadResponseCode` if the nameserver did not respond with `NoError`
    pub fn ensure_success(&self) -> ResolverResult<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(Error::BadResponseCode {
                response_code: self.response_code.to_string(),
            })
        }
    }
}
