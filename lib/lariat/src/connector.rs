//! TLS connector setup.

use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::connect::HttpConnector;

/// Build the rustls-backed connector used by [`HyperClient`](crate::HyperClient).
///
/// Accepts both `http` and `https` URLs, negotiates HTTP/1.1 or HTTP/2, and
/// trusts the Mozilla root certificate set bundled via `webpki-roots`.
#[must_use]
pub fn https_connector() -> HttpsConnector<HttpConnector> {
    let roots: rustls::RootCertStore = webpki_roots::TLS_SERVER_ROOTS.iter().cloned().collect();

    let tls = rustls::ClientConfig::builder()
        .with_root_certificates(roots)
        .with_no_client_auth();

    HttpsConnectorBuilder::new()
        .with_tls_config(tls)
        .https_or_http()
        .enable_http1()
        .enable_http2()
        .build()
}
