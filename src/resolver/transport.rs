// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Single request/response exchanges with a nameserver over UDP or TCP.

use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;

use hickory_proto::op::Message;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, UdpSocket};
use tokio::time::timeout;
use tracing::debug;

use crate::nameserver::{NameServerConfig, Protocol};
use crate::resolver::{Error, ResolverResult};

/// Large enough for any UDP response including EDNS sized ones
const MAX_UDP_PAYLOAD: usize = 4096;

pub(crate) async fn exchange(
    name_server: &NameServerConfig,
    request: &Message,
    time_out: Duration,
) -> ResolverResult<Message> {
    let socket_addr = name_server.socket_addr();
    let id = request.id();
    let bytes = request.to_vec()?;
    debug!(
        "Sending {} bytes with id {} to {}.",
        bytes.len(),
        id,
        name_server
    );

    let response = match name_server.protocol() {
        Protocol::Udp => timeout(time_out, udp_exchange(socket_addr, &bytes, id)).await??,
        Protocol::Tcp => timeout(time_out, tcp_exchange(socket_addr, &bytes, id)).await??,
    };
    debug!(
        "Received response with id {} and {} answers from {}.",
        response.id(),
        response.answers().len(),
        name_server
    );

    Ok(response)
}

async fn udp_exchange(socket_addr: SocketAddr, request: &[u8], id: u16) -> ResolverResult<Message> {
    let bind_addr: SocketAddr = if socket_addr.is_ipv4() {
        (Ipv4Addr::UNSPECIFIED, 0).into()
    } else {
        (Ipv6Addr::UNSPECIFIED, 0).into()
    };
    let socket = UdpSocket::bind(bind_addr).await?;
    socket.connect(socket_addr).await?;
    socket.send(request).await?;

    let mut buf = vec![0u8; MAX_UDP_PAYLOAD];
    loop {
        let len = socket.recv(&mut buf).await?;
        // Undecodable, stale or spoofed datagrams are dropped; keep waiting until the timeout elapses
        let response = match Message::from_vec(&buf[..len]) {
            Ok(response) => response,
            Err(err) => {
                debug!("Ignoring undecodable datagram of {} bytes: {}", len, err);
                continue;
            }
        };
        if response.id() == id {
            return Ok(response);
        }
        debug!("Ignoring response with id {}, expected {}.", response.id(), id);
    }
}

async fn tcp_exchange(socket_addr: SocketAddr, request: &[u8], id: u16) -> ResolverResult<Message> {
    let len = u16::try_from(request.len()).map_err(|_| Error::ProtoError {
        reason: format!("request of {} bytes exceeds maximum TCP message size", request.len()),
    })?;

    let mut stream = TcpStream::connect(socket_addr).await?;
    stream.write_all(&len.to_be_bytes()).await?;
    stream.write_all(request).await?;
    stream.flush().await?;

    let len = stream.read_u16().await? as usize;
    let mut buf = vec![0u8; len];
    stream.read_exact(&mut buf).await?;

    let response = Message::from_vec(&buf)?;
    if response.id() != id {
        return Err(Error::ProtoError {
            reason: format!("response id {} does not match query id {}", response.id(), id),
        });
    }

    Ok(response)
}
