use http::Extensions;

use crate::auth::ClientAuthInfo;

/// Read-side access to a recorded handshake outcome.
///
/// Connection and response contexts expose their typed state through
/// [`http::Extensions`]; this trait names the lookup so the client layer
/// does not spell out the extension type at every call site.
pub trait ClientAuthInfoExt {
    /// The client-authentication outcome recorded for this connection, if
    /// any.
    fn client_auth_info(&self) -> Option<&ClientAuthInfo>;
}

impl ClientAuthInfoExt for Extensions {
    #[inline]
    fn client_auth_info(&self) -> Option<&ClientAuthInfo> {
        self.get::<ClientAuthInfo>()
    }
}

/// Record a handshake's client-authentication outcome on a connection or
/// response context.
///
/// Called by the transport layer once, after the certificate-request phase;
/// the client layer reads it back through [`ClientAuthInfoExt`]. Recording a
/// second outcome on the same context replaces the first, which only happens
/// on renegotiation.
pub fn record_client_auth(extensions: &mut Extensions, info: ClientAuthInfo) {
    log::trace!(
        "client auth recorded: need_client_authentication={} authorities={}",
        info.need_client_authentication(),
        info.certification_authorities().len()
    );
    extensions.insert(info);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_extension_reads_as_none() {
        let extensions = Extensions::new();
        assert!(extensions.client_auth_info().is_none());
    }

    #[test]
    fn recorded_outcome_reads_back() {
        let mut extensions = Extensions::new();
        record_client_auth(
            &mut extensions,
            ClientAuthInfo::new(vec!["CN=CA1".into()], None),
        );

        let info = extensions.client_auth_info().expect("recorded");
        assert!(info.need_client_authentication());
        assert_eq!(info.certification_authorities(), ["CN=CA1"]);
    }
}
