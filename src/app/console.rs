// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::borrow::Cow;
use std::fmt;

use crate::app::cli_parser::USAGE;
use crate::ResponseCode;

pub static ERROR_PREFIX: &str = "[-]";

/// Prints the usage banner and diagnostics to stdout
///
/// Diagnostics share stdout with the JSON Lines so existing consumers keep seeing them where they always did.
#[derive(Debug, Default)]
pub struct Console {}

impl Console {
    pub fn new() -> Console {
        Console {}
    }

    pub fn usage(&self) {
        println!("{}", USAGE);
    }

    pub fn error<T: fmt::Display>(&self, err: T) {
        println!("{}", error_line(err));
    }

    pub fn invalid_answer(&self, domain_name: &str, response_code: ResponseCode) {
        println!("{}", invalid_answer_line(domain_name, response_code));
    }
}

fn error_line<T: fmt::Display>(err: T) -> String {
    format!("{} Error: {}", ERROR_PREFIX, err)
}

fn invalid_answer_line(domain_name: &str, response_code: ResponseCode) -> String {
    format!(
        "{} Invalid answer name {} after TXT query for {} ({})",
        ERROR_PREFIX,
        domain_name,
        domain_name,
        mnemonic(response_code)
    )
}

/// Zone file mnemonic of a response code, e.g., `NXDOMAIN`
fn mnemonic(response_code: ResponseCode) -> Cow<'static, str> {
    let name = match response_code {
        ResponseCode::NoError => "NOERROR",
        ResponseCode::FormErr => "FORMERR",
        ResponseCode::ServFail => "SERVFAIL",
        ResponseCode::NXDomain => "NXDOMAIN",
        ResponseCode::NotImp => "NOTIMP",
        ResponseCode::Refused => "REFUSED",
        ResponseCode::YXDomain => "YXDOMAIN",
        ResponseCode::YXRRSet => "YXRRSET",
        ResponseCode::NXRRSet => "NXRRSET",
        ResponseCode::NotAuth => "NOTAUTH",
        ResponseCode::NotZone => "NOTZONE",
        other => return Cow::Owned(other.to_string()),
    };
    Cow::Borrowed(name)
}

#[cfg(test)]
mod tests {
    use spectral::prelude::*;

    use super::*;

    #[test]
    fn error_line_has_prefix() {
        let line = error_line("request timed out");

        assert_that(&line.as_str()).is_equal_to("[-] Error: request timed out");
    }

    #[test]
    fn invalid_answer_line_names_domain_twice() {
        let line = invalid_answer_line("does-not-exist.example", ResponseCode::NXDomain);

        assert_that(&line.as_str()).is_equal_to(
            "[-] Invalid answer name does-not-exist.example after TXT query for does-not-exist.example (NXDOMAIN)",
        );
    }

    #[test]
    fn mnemonics() {
        assert_that(&mnemonic(ResponseCode::ServFail).as_ref()).is_equal_to("SERVFAIL");
        assert_that(&mnemonic(ResponseCode::Refused).as_ref()).is_equal_to("REFUSED");
    }
}
