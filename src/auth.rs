use std::fmt;

use crate::handle::NativeHandle;

/// Outcome of the peer's certificate-request inspection for one TLS
/// handshake.
///
/// Built exactly once by the transport layer, read thereafter by the HTTP
/// client layer. The object has two logical states and no transitions after
/// construction:
///
/// - *unset*: no handshake result yet, or not applicable to this transport;
/// - *set*: the handshake reported its certificate-request state, possibly
///   "no client authentication needed".
///
/// [`is_set`](ClientAuthInfo::is_set) and
/// [`need_client_authentication`](ClientAuthInfo::need_client_authentication)
/// are independent: a set instance with an empty authority list means "result
/// present, no certificate requested".
#[derive(Clone)]
pub struct ClientAuthInfo {
    state: State,
}

#[derive(Clone)]
enum State {
    Unset,
    Set {
        certification_authorities: Vec<String>,
        native_handle: Option<NativeHandle>,
    },
}

impl ClientAuthInfo {
    /// Placeholder for "no handshake result yet".
    ///
    /// Safe to hold and pass around before the certificate-request phase has
    /// completed. Allocates nothing.
    pub fn unset() -> ClientAuthInfo {
        ClientAuthInfo {
            state: State::Unset,
        }
    }

    /// Record a handshake's certificate-request outcome.
    ///
    /// The authority names are stored verbatim, in the order the handshake
    /// reported them; no normalization, deduplication, or validation is
    /// applied. An empty list is legal and means the peer did not request
    /// client authentication.
    pub fn new(
        certification_authorities: Vec<String>,
        native_handle: Option<NativeHandle>,
    ) -> ClientAuthInfo {
        ClientAuthInfo {
            state: State::Set {
                certification_authorities,
                native_handle,
            },
        }
    }

    /// Whether a handshake result has been recorded at all.
    pub fn is_set(&self) -> bool {
        matches!(self.state, State::Set { .. })
    }

    /// Whether the peer requires a client certificate.
    ///
    /// True iff the handshake reported at least one acceptable certification
    /// authority. This is an existence check, not a cryptographic decision.
    pub fn need_client_authentication(&self) -> bool {
        !self.certification_authorities().is_empty()
    }

    /// Distinguished names of the certification authorities the peer
    /// accepts, in the order reported by the handshake.
    ///
    /// Empty in the unset state.
    pub fn certification_authorities(&self) -> &[String] {
        match &self.state {
            State::Unset => &[],
            State::Set {
                certification_authorities,
                ..
            } => certification_authorities,
        }
    }

    /// The opaque platform issuer-list structure, if the handshake produced
    /// one.
    ///
    /// Interpreting the handle is the platform collaborator's job; see
    /// [`NativeHandle::downcast_ref`].
    pub fn native_handle(&self) -> Option<&NativeHandle> {
        match &self.state {
            State::Unset => None,
            State::Set { native_handle, .. } => native_handle.as_ref(),
        }
    }
}

impl Default for ClientAuthInfo {
    fn default() -> Self {
        ClientAuthInfo::unset()
    }
}

// Authority names stay out of Debug output; log call sites decide what to
// surface.
impl fmt::Debug for ClientAuthInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Unset => f.debug_struct("ClientAuthInfo").field("set", &false).finish(),
            State::Set {
                certification_authorities,
                native_handle,
            } => f
                .debug_struct("ClientAuthInfo")
                .field("set", &true)
                .field("certification_authorities", &certification_authorities.len())
                .field("native_handle", &native_handle.is_some())
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_carries_nothing() {
        let info = ClientAuthInfo::unset();
        assert!(!info.is_set());
        assert!(!info.need_client_authentication());
        assert!(info.certification_authorities().is_empty());
        assert!(info.native_handle().is_none());
    }

    #[test]
    fn default_is_unset() {
        assert!(!ClientAuthInfo::default().is_set());
    }

    #[test]
    fn authorities_kept_verbatim_in_order() {
        // Duplicates and unnormalized spellings pass through untouched.
        let names = vec![
            "CN=CA2, O=Example".to_string(),
            "cn=ca1".to_string(),
            "CN=CA2, O=Example".to_string(),
        ];
        let info = ClientAuthInfo::new(names.clone(), None);
        assert_eq!(info.certification_authorities(), &names[..]);
    }

    #[test]
    fn set_with_empty_authorities_is_still_set() {
        let info = ClientAuthInfo::new(Vec::new(), Some(NativeHandle::new(())));
        assert!(info.is_set());
        assert!(!info.need_client_authentication());
    }

    #[test]
    fn debug_omits_authority_names() {
        let info = ClientAuthInfo::new(vec!["CN=secret-internal-ca".into()], None);
        let out = format!("{:?}", info);
        assert!(!out.contains("secret-internal-ca"));
        assert!(out.contains("set: true"));
    }
}
