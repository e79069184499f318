// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::io::Write;

use serde::Serialize;
use tracing::{debug, warn};

use crate::resources::Record;
use crate::signatures::{Signature, SignatureKind, SignatureTables};
use crate::Result;

/// A TXT record matching a `Signature`
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct MatchResult {
    #[serde(rename = "Domain")]
    domain: String,
    #[serde(rename = "Record")]
    record: &'static str,
    #[serde(rename = "Info")]
    info: &'static str,
    #[serde(rename = "TXT")]
    txt: Vec<String>,
    #[serde(skip)]
    kind: SignatureKind,
}

impl MatchResult {
    pub fn new(domain: &str, kind: SignatureKind, signature: &Signature, txt: Vec<String>) -> MatchResult {
        MatchResult {
            domain: domain.to_string(),
            record: signature.fingerprint(),
            info: signature.info(),
            txt,
            kind,
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The matching fingerprint
    pub fn record(&self) -> &'static str {
        self.record
    }

    pub fn info(&self) -> &'static str {
        self.info
    }

    pub fn txt(&self) -> &[String] {
        &self.txt
    }

    pub fn kind(&self) -> SignatureKind {
        self.kind
    }
}

#[derive(Debug, Default)]
pub struct Matcher {
    tables: SignatureTables,
}

impl Matcher {
    pub fn new(tables: SignatureTables) -> Matcher {
        Matcher { tables }
    }

    /// Matches the first character-string of every TXT record against all signatures.
    ///
    /// Results are ordered by record, then TXT before SPF signatures, then by fingerprint. A record may match any
    /// number of signatures; matches are not deduplicated. Records that are not TXT records are skipped.
    pub fn matches(&self, domain: &str, answers: &[Record]) -> Vec<MatchResult> {
        let mut results = Vec::new();

        for txt in answers.iter().filter_map(|x| x.data().txt()) {
            let first = match txt.first() {
                Some(first) => first,
                None => {
                    debug!("Skipping TXT record without character-strings.");
                    continue;
                }
            };
            for table in self.tables.iter() {
                for signature in table.matches(&first) {
                    debug!("'{}' matches {} signature '{}'.", first, table.kind(), signature.fingerprint());
                    results.push(MatchResult::new(domain, table.kind(), signature, txt.strings()));
                }
            }
        }

        results
    }
}

/// Writes matches as JSON Lines, i.e., one JSON object per line
#[derive(Debug, Default)]
pub struct Reporter {}

impl Reporter {
    /// Returns the number of lines written.
    ///
    /// A match that fails to serialize is logged and skipped; only IO errors abort the report.
    pub fn report<W: Write>(&self, writer: &mut W, matches: &[MatchResult]) -> Result<usize> {
        let mut written = 0;
        for m in matches {
            match serde_json::to_string(m) {
                Ok(line) => {
                    writeln!(writer, "{}", line)?;
                    written += 1;
                }
                Err(err) => warn!("Failed to serialize match for '{}': {}", m.record(), err),
            }
        }
        writer.flush()?;

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use spectral::prelude::*;

    use super::*;
    use crate::resources::{RData, RecordType, TXT};
    use crate::Name;

    const GOOGLE_INFO: &str = "Domain is allowing emails to be sent from Google.com. This indicates the domain may utilize Gmail or other G-Suite product offerings.";

    fn txt_record(segments: &[&str]) -> Record {
        Record::txt(
            Name::from_str("example.com.").unwrap(),
            300,
            TXT::new(segments.iter().map(ToString::to_string).collect()),
        )
    }

    fn matches(answers: &[Record]) -> Vec<MatchResult> {
        Matcher::default().matches("example.com", answers)
    }

    #[test]
    fn no_answers_no_matches() {
        crate::utils::tests::logging::init();

        assert_that(&matches(&[])).is_empty();
    }

    #[test]
    fn unrelated_records_no_matches() {
        crate::utils::tests::logging::init();
        let answers = vec![
            txt_record(&["v=spf1 -all"]),
            Record::new(Name::from_str("example.com.").unwrap(), 300, RData::Other(RecordType::CNAME)),
        ];

        assert_that(&matches(&answers)).is_empty();
    }

    #[test]
    fn mailchimp() {
        crate::utils::tests::logging::init();
        let answers = vec![txt_record(&["v=spf1 include:servers.mcsv.net include:example.org ~all"])];

        let results = matches(&answers);

        assert_that(&results).has_length(1);
        assert_that(&results[0].record()).is_equal_to("mcsv.net");
        assert_that(&results[0].kind()).is_equal_to(SignatureKind::Spf);
        assert_that(&results[0].info()).starts_with("Domain is allowing emails to be sent from MailChimp.");
    }

    #[test]
    fn one_result_per_table() {
        crate::utils::tests::logging::init();
        let answers = vec![txt_record(&["_spf.google.com docusign"])];

        let results = matches(&answers);

        let records: Vec<_> = results.iter().map(|x| (x.kind(), x.record())).collect();
        assert_that(&records).is_equal_to(vec![
            (SignatureKind::Txt, "docusign"),
            (SignatureKind::Spf, "_spf.google.com"),
        ]);
    }

    #[test]
    fn only_first_segment_is_inspected() {
        crate::utils::tests::logging::init();
        let answers = vec![txt_record(&["v=spf1 include:example.org", "include:_spf.google.com ~all"])];

        assert_that(&matches(&answers)).is_empty();
    }

    #[test]
    fn all_segments_are_reported() {
        crate::utils::tests::logging::init();
        let answers = vec![txt_record(&["v=spf1 include:_spf.google.com", " ~all"])];

        let results = matches(&answers);

        assert_that(&results).has_length(1);
        assert_that(&results[0].txt().to_vec()).is_equal_to(vec![
            "v=spf1 include:_spf.google.com".to_string(),
            " ~all".to_string(),
        ]);
    }

    #[test]
    fn record_without_segments() {
        crate::utils::tests::logging::init();
        let answers = vec![txt_record(&[])];

        assert_that(&matches(&answers)).is_empty();
    }

    #[test]
    fn results_keep_record_order() {
        crate::utils::tests::logging::init();
        let answers = vec![
            txt_record(&["zuora-verification=1"]),
            txt_record(&["MS=ms12345"]),
        ];

        let records: Vec<_> = matches(&answers).iter().map(MatchResult::record).collect();

        assert_that(&records).is_equal_to(vec!["zuora", "MS"]);
    }

    #[test]
    fn json_lines() {
        crate::utils::tests::logging::init();
        let answers = vec![txt_record(&["v=spf1 include:_spf.google.com ~all"])];
        let results = matches(&answers);

        let mut buf = Vec::new();
        let written = Reporter::default().report(&mut buf, &results);

        assert_that(&written).is_ok().is_equal_to(1);
        let output = String::from_utf8(buf).unwrap();
        let expected = format!(
            r#"{{"Domain":"example.com","Record":"_spf.google.com","Info":"{}","TXT":["v=spf1 include:_spf.google.com ~all"]}}"#,
            GOOGLE_INFO
        );
        assert_that(&output).is_equal_to(format!("{}\n", expected));
    }

    #[test]
    fn json_lines_fields() {
        crate::utils::tests::logging::init();
        let answers = vec![txt_record(&["_spf.google.com docusign"])];
        let results = matches(&answers);

        let mut buf = Vec::new();
        Reporter::default().report(&mut buf, &results).unwrap();

        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|x| serde_json::from_str(x).expect("every line is a JSON document"))
            .collect();
        assert_that(&lines).has_length(2);
        assert_that(&lines[0]["Domain"]).is_equal_to(serde_json::json!("example.com"));
        assert_that(&lines[0]["Record"]).is_equal_to(serde_json::json!("docusign"));
        assert_that(&lines[0]["TXT"]).is_equal_to(serde_json::json!(["_spf.google.com docusign"]));
        assert_that(&lines[0].get("kind")).is_none();
        assert_that(&lines[1]["Record"]).is_equal_to(serde_json::json!("_spf.google.com"));
    }

    #[test]
    fn nothing_to_report() {
        crate::utils::tests::logging::init();

        let mut buf = Vec::new();
        let written = Reporter::default().report(&mut buf, &[]);

        assert_that(&written).is_ok().is_equal_to(0);
        assert_that(&buf).is_empty();
    }
}
