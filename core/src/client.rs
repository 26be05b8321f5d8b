//! Client address selection.
//!
//! The socket peer address is the only value a client cannot forge, so it
//! wins whenever it is present. The `Client-IP` and `X-Forwarded-For` headers
//! are consulted only when no peer address was recorded.

/// Request metadata that may carry the client's address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientIpSources {
    /// Address of the connected peer (`REMOTE_ADDR`).
    pub remote_addr: Option<String>,
    /// Value of the `Client-IP` header.
    pub client_ip: Option<String>,
    /// Value of the `X-Forwarded-For` header.
    pub forwarded_for: Option<String>,
}

impl ClientIpSources {
    pub fn from_remote_addr(addr: impl Into<String>) -> Self {
        Self {
            remote_addr: Some(addr.into()),
            ..Self::default()
        }
    }

    /// See [`resolve_client_ip`].
    pub fn resolve(&self) -> Option<&str> {
        resolve_client_ip(self)
    }
}

/// Picks the first non-blank source in priority order, trimmed.
///
/// The value is returned as is; it is validated by the lookup that consumes
/// it, so a header carrying a list of hops simply fails to match.
pub fn resolve_client_ip(sources: &ClientIpSources) -> Option<&str> {
    [
        sources.remote_addr.as_deref(),
        sources.client_ip.as_deref(),
        sources.forwarded_for.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .find(|value| !value.is_empty())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
