// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::fmt;
use std::net::{IpAddr, SocketAddr};

use serde::Serialize;

pub mod predefined;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize)]
pub enum Protocol {
    Udp,
    Tcp,
}

impl fmt::Display for Protocol {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Protocol::Udp => fmt.write_str("udp"),
            Protocol::Tcp => fmt.write_str("tcp"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub enum NameServerConfig {
    Udp {
        ip_addr: IpAddr,
        port: u16,
        name: Option<String>,
    },
    Tcp {
        ip_addr: IpAddr,
        port: u16,
        name: Option<String>,
    },
}

impl NameServerConfig {
    pub fn udp<T: Into<SocketAddr>>(socket_addr: T) -> Self {
        NameServerConfig::udp_with_name(socket_addr, None)
    }

    pub fn udp_with_name<T: Into<SocketAddr>, S: Into<Option<String>>>(socket_addr: T, name: S) -> Self {
        let socket_addr = socket_addr.into();
        NameServerConfig::Udp {
            ip_addr: socket_addr.ip(),
            port: socket_addr.port(),
            name: name.into(),
        }
    }

    pub fn tcp<T: Into<SocketAddr>>(socket_addr: T) -> Self {
        NameServerConfig::tcp_with_name(socket_addr, None)
    }

    pub fn tcp_with_name<T: Into<SocketAddr>, S: Into<Option<String>>>(socket_addr: T, name: S) -> Self {
        let socket_addr = socket_addr.into();
        NameServerConfig::Tcp {
            ip_addr: socket_addr.ip(),
            port: socket_addr.port(),
            name: name.into(),
        }
    }

    pub fn protocol(&self) -> Protocol {
        match self {
            NameServerConfig::Udp { .. } => Protocol::Udp,
            NameServerConfig::Tcp { .. } => Protocol::Tcp,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        match self {
            NameServerConfig::Udp { ip_addr, port, .. } | NameServerConfig::Tcp { ip_addr, port, .. } => {
                SocketAddr::new(*ip_addr, *port)
            }
        }
    }
}

impl fmt::Display for NameServerConfig {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            NameServerConfig::Udp { ip_addr, port, name } | NameServerConfig::Tcp { ip_addr, port, name } => format!(
                "{}:{}:{}{}",
                self.protocol(),
                format_ip_addr(ip_addr),
                port,
                format_name(name)
            ),
        };
        fmt.write_str(&str)
    }
}

fn format_ip_addr(ip_addr: &IpAddr) -> String {
    match ip_addr {
        IpAddr::V4(ip) => ip.to_string(),
        IpAddr::V6(ip) => format!("[{}]", ip),
    }
}

fn format_name(name: &Option<String>) -> String {
    name.as_ref()
        .map(|name| format!(",name={}", name))
        .unwrap_or_else(|| "".to_string())
}

#[cfg(test)]
mod test {
    use super::*;

    use spectral::prelude::*;
    use std::net::{Ipv4Addr, Ipv6Addr};
    use std::str::FromStr;

    #[test]
    fn display_udp() {
        let nsc = NameServerConfig::udp_with_name((Ipv4Addr::new(8, 8, 8, 8), 53), "Google".to_string());
        let expected = "udp:8.8.8.8:53,name=Google";

        let display = nsc.to_string();

        asserting("display contains protocol, address, and name")
            .that(&display.as_str())
            .is_equal_to(expected);
    }

    #[test]
    fn display_tcp_ipv6() {
        let nsc = NameServerConfig::tcp((Ipv6Addr::from_str("2001:4860:4860::8888").unwrap(), 53));
        let expected = "tcp:[2001:4860:4860::8888]:53";

        let display = nsc.to_string();

        asserting("display brackets ipv6 addresses")
            .that(&display.as_str())
            .is_equal_to(expected);
    }

    #[test]
    fn socket_addr() {
        let nsc = NameServerConfig::udp((Ipv4Addr::new(127, 0, 0, 1), 5353));

        assert_that(&nsc.socket_addr()).is_equal_to(SocketAddr::from((Ipv4Addr::new(127, 0, 0, 1), 5353)));
        assert_that(&nsc.protocol()).is_equal_to(Protocol::Udp);
    }
}
