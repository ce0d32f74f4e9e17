use super::responder::QueryResponder;
use async_trait::async_trait;
use hostsdns_application::ports::{HostsReloadPort, ReloadOutcome};
use hostsdns_domain::DomainError;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

const DEFAULT_RECV_BUFFER_SIZE: usize = 1024;

/// Process-wide DNS server: owns the responder, the reload entry points and the
/// UDP receive loop.
pub struct HostsDnsServer {
    listen_addr: String,
    recv_buffer_size: usize,
    responder: QueryResponder,
    reload: Arc<dyn HostsReloadPort>,
}

impl HostsDnsServer {
    pub fn new(
        listen_addr: impl Into<String>,
        responder: QueryResponder,
        reload: Arc<dyn HostsReloadPort>,
    ) -> Self {
        Self {
            listen_addr: listen_addr.into(),
            recv_buffer_size: DEFAULT_RECV_BUFFER_SIZE,
            responder,
            reload,
        }
    }

    pub fn with_recv_buffer_size(mut self, size: usize) -> Self {
        self.recv_buffer_size = size;
        self
    }

    /// First load of the hosts file. Fails with whatever the load fails with.
    pub async fn init_server(&self) -> Result<ReloadOutcome, DomainError> {
        self.reload.load_hosts_file().await
    }

    /// Bind the listening socket and serve until `shutdown` is cancelled.
    pub async fn start(&self, shutdown: CancellationToken) -> Result<(), DomainError> {
        let socket = bind_udp_socket(&self.listen_addr)?;
        self.serve(socket, shutdown).await
    }

    /// Receive loop over an already-bound socket.
    ///
    /// Datagrams are handled strictly one at a time. Per-packet failures are
    /// logged and never end the loop.
    pub async fn serve(
        &self,
        socket: UdpSocket,
        shutdown: CancellationToken,
    ) -> Result<(), DomainError> {
        let local_addr = socket
            .local_addr()
            .map_err(|e| DomainError::Io(e.to_string()))?;
        info!(bind_address = %local_addr, "DNS server started");

        let mut recv_buf = vec![0u8; self.recv_buffer_size];

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    info!(bind_address = %local_addr, "DNS server shutting down");
                    return Ok(());
                }
                received = socket.recv_from(&mut recv_buf) => {
                    match received {
                        Ok((n, from)) => self.handle_datagram(&socket, &recv_buf[..n], from).await,
                        Err(e) => warn!(error = %e, "UDP recv error"),
                    }
                }
            }
        }
    }

    async fn handle_datagram(&self, socket: &UdpSocket, packet: &[u8], from: SocketAddr) {
        let reply = match self.responder.respond(packet) {
            Ok(Some(reply)) => reply,
            Ok(None) => return,
            Err(e) => {
                warn!(client = %from, bytes = packet.len(), error = %e, "Dropping DNS packet");
                return;
            }
        };

        match socket.send_to(&reply, from).await {
            Ok(sent) => debug!(client = %from, bytes = sent, "DNS response sent"),
            Err(e) => error!(client = %from, error = %e, "Failed to send DNS response"),
        }
    }
}

#[async_trait]
impl HostsReloadPort for HostsDnsServer {
    async fn is_hosts_file_modified(&self) -> Result<bool, DomainError> {
        self.reload.is_hosts_file_modified().await
    }

    async fn load_hosts_file(&self) -> Result<ReloadOutcome, DomainError> {
        self.reload.load_hosts_file().await
    }
}

/// Create a UDP socket bound to `bind_addr` and register it with the runtime.
pub fn bind_udp_socket(bind_addr: &str) -> Result<UdpSocket, DomainError> {
    let bind_error = |reason: String| DomainError::SocketBind {
        addr: bind_addr.to_string(),
        reason,
    };

    let socket_addr: SocketAddr = bind_addr
        .parse()
        .map_err(|e: std::net::AddrParseError| bind_error(e.to_string()))?;
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))
        .map_err(|e| bind_error(e.to_string()))?;
    if socket_addr.is_ipv6() {
        socket
            .set_only_v6(false)
            .map_err(|e| bind_error(e.to_string()))?;
    }
    socket
        .bind(&socket_addr.into())
        .map_err(|e| bind_error(e.to_string()))?;
    socket
        .set_nonblocking(true)
        .map_err(|e| bind_error(e.to_string()))?;

    let std_socket: std::net::UdpSocket = socket.into();
    UdpSocket::from_std(std_socket).map_err(|e| bind_error(e.to_string()))
}
