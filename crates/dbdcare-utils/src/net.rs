use listenfd::ListenFd;
use std::io;
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;

/// Takes a socket handed over by `listenfd` when neither host nor port is given, binds otherwise.
pub async fn create_listener(
    (host, port): (Option<IpAddr>, Option<u16>),
    (default_host, default_port): (IpAddr, u16),
) -> io::Result<TcpListener> {
    if host.is_none() && port.is_none() {
        let mut listenfd = ListenFd::from_env();
        if let Some(listener) = listenfd.take_tcp_listener(0)? {
            listener.set_nonblocking(true)?;
            tracing::trace!("returning listenfd listener");
            return TcpListener::from_std(listener);
        }
    }

    let address = SocketAddr::from((host.unwrap_or(default_host), port.unwrap_or(default_port)));
    tracing::trace!(%address, "binding listener");
    TcpListener::bind(address).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;
    use test_log::test;

    #[test(tokio::test)]
    async fn test_bind_explicit_port() {
        let listener = create_listener(
            (Some(IpAddr::V4(Ipv4Addr::LOCALHOST)), Some(0)),
            (IpAddr::V4(Ipv4Addr::LOCALHOST), 3030),
        )
        .await
        .unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }
}
