#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # tls-client-auth
//!
//! A small carrier for one fact learned during a TLS handshake: whether the
//! remote peer requires the local endpoint to present a client certificate,
//! and if so, which certificate issuers it will accept.
//!
//! The transport layer builds a [`ClientAuthInfo`] once, after the peer's
//! certificate-request phase. The HTTP client layer reads it to decide
//! whether a client certificate must be sourced before proceeding on the
//! same connection, and which candidate certificates are worth offering.
//!
//! This crate does not validate certificates, select key material, or
//! perform any cryptographic operation. The platform-native issuer-list
//! structure travels through it untouched, behind an opaque, shared
//! [`NativeHandle`].
//!
//! ## Recording and reading a handshake outcome
//!
//! ```rust
//! use tls_client_auth::{ClientAuthInfo, NativeHandle};
//!
//! // Transport layer: the peer asked for a client certificate and named
//! // the issuers it accepts. The platform issuer-list structure rides
//! // along behind an opaque handle.
//! let handle = NativeHandle::new([0x30u8, 0x82, 0x01, 0x0a]);
//! let info = ClientAuthInfo::new(
//!     vec!["CN=CA1".into(), "CN=CA2".into()],
//!     Some(handle),
//! );
//!
//! // Client layer: decide whether to source a certificate.
//! assert!(info.is_set());
//! assert!(info.need_client_authentication());
//! assert_eq!(info.certification_authorities(), ["CN=CA1", "CN=CA2"]);
//! ```
//!
//! Before a handshake result is known, the unset placeholder is safe to hold
//! and pass around:
//!
//! ```rust
//! use tls_client_auth::ClientAuthInfo;
//!
//! let info = ClientAuthInfo::default();
//! assert!(!info.is_set());
//! assert!(!info.need_client_authentication());
//! ```

mod auth;
mod ext;
mod handle;

pub use self::auth::ClientAuthInfo;
pub use self::ext::{record_client_auth, ClientAuthInfoExt};
pub use self::handle::NativeHandle;
