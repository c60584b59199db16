//! Channel location and endpoint derivation.
//!
//! A [`PageLocation`] is the immutable triple (host, path, secure) a viewer
//! is pointed at. Everything else (the channel id, the WebSocket endpoint,
//! the create endpoint, the shareable page URL) is derived from it, so the
//! derivation can be tested without opening a connection.

use crate::error::NetpipeError;

/// Routing prefix the deployed server mounts the app under. Local dev
/// servers serve from the root and skip it.
pub const ROUTE_PREFIX: &str = "netpipe";

/// Where a channel lives: server host, page path, and whether the page was
/// reached over a secure transport. Computed once, immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    pub host: String,
    pub path: String,
    pub secure: bool,
}

impl PageLocation {
    pub fn new(host: impl Into<String>, path: impl Into<String>, secure: bool) -> Self {
        PageLocation {
            host: host.into(),
            path: path.into(),
            secure,
        }
    }

    /// Build a location from a CLI target.
    ///
    /// The target is either a full URL (`https://host/netpipe/abc`, ws/wss
    /// schemes accepted too) or a bare channel id, in which case `fallback_host`
    /// supplies the host. `insecure` forces the plain scheme regardless of host.
    pub fn parse(
        target: &str,
        fallback_host: &str,
        insecure: bool,
    ) -> Result<PageLocation, NetpipeError> {
        if let Some((scheme, rest)) = target.split_once("://") {
            let secure = match scheme {
                "https" | "wss" => !insecure,
                "http" | "ws" => false,
                other => return Err(NetpipeError::InvalidTarget(other.to_string())),
            };
            let (host, path) = match rest.split_once('/') {
                Some((host, path)) => (host, format!("/{}", path)),
                None => (rest, String::from("/")),
            };
            if host.is_empty() {
                return Err(NetpipeError::InvalidTarget(target.to_string()));
            }
            return Ok(PageLocation::new(host, path, secure));
        }

        if target.is_empty() || target.contains('/') {
            return Err(NetpipeError::InvalidTarget(target.to_string()));
        }

        let location = PageLocation::new(fallback_host, format!("/{}", target), false);
        let secure = !insecure && !location.is_local();
        Ok(PageLocation { secure, ..location })
    }

    /// A location for the server root on `host`, secure unless the host is
    /// local or `insecure` is set. Used when no channel exists yet.
    pub fn for_host(host: impl Into<String>, insecure: bool) -> PageLocation {
        let location = PageLocation::new(host, "/", false);
        let secure = !insecure && !location.is_local();
        PageLocation { secure, ..location }
    }

    /// Development hosts (`localhost`, `127.0.0.1:...` behind a `local` alias,
    /// etc.) are recognized by substring, matching the original tool.
    pub fn is_local(&self) -> bool {
        self.host.contains("local")
    }

    fn route_prefix(&self) -> String {
        if self.is_local() {
            String::new()
        } else {
            format!("/{}", ROUTE_PREFIX)
        }
    }

    fn ws_scheme(&self) -> &'static str {
        if self.secure {
            "wss"
        } else {
            "ws"
        }
    }

    fn http_scheme(&self) -> &'static str {
        if self.secure {
            "https"
        } else {
            "http"
        }
    }

    /// The channel id: the page path with separators and the routing prefix
    /// stripped. `/abc` and `/netpipe/abc` both name channel `abc`.
    pub fn channel_id(&self) -> &str {
        let trimmed = self.path.trim_matches('/');
        match trimmed.strip_prefix(ROUTE_PREFIX) {
            // Only strip the prefix when it is a whole path segment.
            Some(rest) if rest.is_empty() || rest.starts_with('/') => {
                rest.trim_start_matches('/')
            }
            _ => trimmed,
        }
    }

    /// The WebSocket endpoint for this channel:
    /// `{ws|wss}://{host}[{prefix}]/ws/{id}`.
    pub fn ws_endpoint(&self) -> String {
        format!(
            "{}://{}{}/ws/{}",
            self.ws_scheme(),
            self.host,
            self.route_prefix(),
            self.channel_id()
        )
    }

    /// The channel-creation endpoint: `{http|https}://{host}[{prefix}]/create`.
    pub fn create_endpoint(&self) -> String {
        format!(
            "{}://{}{}/create",
            self.http_scheme(),
            self.host,
            self.route_prefix()
        )
    }

    /// Human-facing page URL for channel `id`, printed after creation so it
    /// can be opened in a browser.
    pub fn channel_page(&self, id: &str) -> String {
        format!(
            "{}://{}{}/{}",
            self.http_scheme(),
            self.host,
            self.route_prefix(),
            id
        )
    }
}
