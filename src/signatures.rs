// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Fingerprints of third-party services as they show up in TXT records.
//!
//! There are two tables: hostnames that are included in SPF records to authorize a service to send emails on behalf of
//! a domain, and prefixes of domain verification tokens. Both tables are sorted by fingerprint, which defines the
//! order in which matches are reported.

use std::fmt;

use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize)]
pub enum SignatureKind {
    Spf,
    Txt,
}

impl fmt::Display for SignatureKind {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SignatureKind::Spf => fmt.write_str("SPF"),
            SignatureKind::Txt => fmt.write_str("TXT"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize)]
pub struct Signature {
    fingerprint: &'static str,
    info: &'static str,
}

impl Signature {
    const fn new(fingerprint: &'static str, info: &'static str) -> Signature {
        Signature { fingerprint, info }
    }

    pub fn fingerprint(&self) -> &'static str {
        self.fingerprint
    }

    pub fn info(&self) -> &'static str {
        self.info
    }

    /// Case sensitive substring match
    pub fn matches(&self, txt: &str) -> bool {
        txt.contains(self.fingerprint)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SignatureTable {
    kind: SignatureKind,
    signatures: &'static [Signature],
}

impl SignatureTable {
    pub fn kind(&self) -> SignatureKind {
        self.kind
    }

    pub fn iter(&self) -> std::slice::Iter<'static, Signature> {
        self.signatures.iter()
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// All signatures matching `txt`, in table order
    pub fn matches<'a>(&self, txt: &'a str) -> impl Iterator<Item = &'static Signature> + 'a {
        self.signatures.iter().filter(move |x| x.matches(txt))
    }
}

/// TXT and SPF tables; a record is matched against the TXT table first
#[derive(Debug, Clone, Copy)]
pub struct SignatureTables {
    txt: SignatureTable,
    spf: SignatureTable,
}

impl SignatureTables {
    pub fn builtin() -> SignatureTables {
        SignatureTables {
            txt: TXT_TABLE,
            spf: SPF_TABLE,
        }
    }

    pub fn spf(&self) -> &SignatureTable {
        &self.spf
    }

    pub fn txt(&self) -> &SignatureTable {
        &self.txt
    }

    pub fn iter(&self) -> impl Iterator<Item = &SignatureTable> {
        [&self.txt, &self.spf].into_iter()
    }
}

impl Default for SignatureTables {
    fn default() -> Self {
        SignatureTables::builtin()
    }
}

pub static SPF_TABLE: SignatureTable = SignatureTable {
    kind: SignatureKind::Spf,
    signatures: SPF_SIGNATURES,
};

pub static TXT_TABLE: SignatureTable = SignatureTable {
    kind: SignatureKind::Txt,
    signatures: TXT_SIGNATURES,
};

const SPF_SIGNATURES: &[Signature] = &[
    Signature::new(
        "_spf.google.com",
        "Domain is allowing emails to be sent from Google.com. This indicates the domain may utilize Gmail or other G-Suite product offerings.",
    ),
    Signature::new(
        "_spf.salesforce.com",
        "Domain is allowing emails to be sent from Salesforce.com. This indicates a high liklihood of subscription to Salesforce services.",
    ),
    Signature::new(
        "freshdesk.com",
        "Domain is allowing emails to be sent from Freshdesk. This strongly indicates the domain is utilizing FreshDesk for helpdesk and ticketing services.",
    ),
    Signature::new(
        "mailsenders.netsuite.com",
        "Domain is allowing emails to be sent from NetSuite. This strongly indicates the domain is using NetSuite product offerings (ERP / Cloud Accounting).",
    ),
    Signature::new(
        "mcsv.net",
        "Domain is allowing emails to be sent from MailChimp. This strongly indicates the domain is utilizing MailChimp for email marketing.",
    ),
    Signature::new(
        "mktomail.com",
        "Domain is allowing emails to be sent from Marketo. This strongly indicates the domain is using the Marketo Marketing and Lead Generation platform.",
    ),
    Signature::new(
        "pphosted.com",
        "Domain is allowing emails to be sent from Proof Point. This strongly indicates the domain is utilizing Proof Point Managed email services.",
    ),
    Signature::new(
        "protection.outlook.com",
        "Domain is allowing emails to be sent from Microsoft.com. This strongly indicates the domain is utilzing Microsoft Hosted Exchange.",
    ),
    Signature::new(
        "service-now.com",
        "Domain is allowing emails to be sent from service-now.com. This strongly indicates the domain is using the Service Now helpdesk platform.",
    ),
    Signature::new(
        "spf.mandrillapp.com",
        "Domain is allowing emails to be sent from Mandrill (MailChimp). This strongly indicates the domain is using the Mandrill product offering for transactional email.",
    ),
    Signature::new(
        "zendesk.com",
        "Domain is allowing emails to be sent from Zendesk. This strongly indicates the domain is utilizing Zendesk for help desk and ticketing purposes.",
    ),
];

const TXT_SIGNATURES: &[Signature] = &[
    Signature::new(
        "MS",
        "This record is used as proof of domain ownership by the Microsoft Office 365 product offering. This indicates a probable usage of at least some Office 365 products.",
    ),
    Signature::new("_amazonses", "Amazon Simple Email Services"),
    Signature::new(
        "adobe-idp-site-verification",
        "This record is used as proof of ownership for use in the Adobe Enterprise Products product offerings.",
    ),
    Signature::new(
        "adobe-sign-verification",
        "This record is used as proof of ownership of a domain for the Adobe Sign product offering. This indicates the domain likely uses Adobe Sign as an e-signature solution.",
    ),
    Signature::new(
        "atlassian-domain-verification",
        "This record verifies domain ownership with Atlassian. This indicates the domain might be sending managed emails from an Atlassian property and likely utilizes Atalassian product offerings such as Jira of Confluence.",
    ),
    Signature::new(
        "citrix-verification-code",
        "This record indicates the domain might be associated with utilizing Citrix Services.",
    ),
    Signature::new(
        "docusign",
        "This record is used as proof of domain ownership for DocuSign product offerings. This indicates the domain likely uses DocuSign as an e-signature solution.",
    ),
    Signature::new(
        "facebook-domain-verification",
        "This record is used as proof of domain ownership for use in the Facebook Business Manager.",
    ),
    Signature::new(
        "google-site-verification",
        "This record is used as proof of ownership for Google G Suite product offerings, however it might simply be verification for Google Analytics.",
    ),
    Signature::new(
        "logmein-verification-code",
        "This record is used as proof of ownership for a domain for LogMeIn services. The presence of this record indicates the owner of the domain is likely using LogMeIn for remote troubleshooting.",
    ),
    Signature::new(
        "pardot",
        "This record indicates the domain might be utilizing Pardot B2B Marketing tools from Salesforce.com.",
    ),
    Signature::new(
        "yandex-verification",
        "This record is used as proof of ownership of a domain for Yandex. This indicates a probable usage of the Yandex Webmaster Tools.",
    ),
    Signature::new(
        "zuora",
        "This record indicates the domain might be utilizing Zuora subscription management software.",
    ),
];
