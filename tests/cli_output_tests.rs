// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

const EAAS_BIN: &str = env!("CARGO_BIN_EXE_eaas");

#[test]
fn cli_output_tests() {
    lit::run::tests(lit::event_handler::Default::default(), |config| {
        config.add_search_path("tests/lit");
        config.add_extension("output");
        config.constants.insert("eaas_bin".to_owned(), EAAS_BIN.to_owned());
    })
    .expect("cli output tests failed");
}
