//! Translation between the wire schema and the internal schema.
//!
//! Both directions are described as field-mapping tables with
//! [`field_map!`]. Each table entry names a target field, optionally the
//! source field it is read from (`target <- source`), and how the value is
//! carried over:
//!
//! - no kind: moved as is
//! - `nested`: optional sub-object; an absent source yields an empty target,
//!   never `None`
//! - `seq`: ordered sequence, element-wise converted, order and length kept
//! - `map`: every key/value pair copied, values converted
//!
//! Every target field must be listed, so a schema change that adds a field
//! fails to compile until the table is updated.

use prost::Message;

use crate::operation::Operation;
use crate::proto::common::Exception;

macro_rules! field_map {
    (@src $s:ident, $field:ident) => { $s.$field };
    (@src $s:ident, $field:ident, $from:ident) => { $s.$from };
    (@kind ; $e:expr) => { $e };
    (@kind nested ; $e:expr) => { Some($e.map(Into::into).unwrap_or_default()) };
    (@kind seq ; $e:expr) => { $e.into_iter().map(Into::into).collect() };
    (@kind map ; $e:expr) => { $e.into_iter().map(|(k, v)| (k, v.into())).collect() };
    ($(
        $src:path => $dst:path {
            $($field:ident $(<- $from:ident)? $(: $kind:ident)?),* $(,)?
        }
    )*) => {
        $(
            impl From<$src> for $dst {
                fn from(src: $src) -> Self {
                    Self {
                        $($field: field_map!(@kind $($kind)? ; field_map!(@src src, $field $(, $from)?))),*
                    }
                }
            }
        )*
    };
}

pub mod request;
pub mod response;

pub use request::decode;
pub use response::{DictionaryLayout, ResponseEncoder};

/// Status code carried by [`Exception`] payloads for translation failures.
pub const EXCEPTION_INTERNAL_ERROR: i32 = 500;

/// Errors produced by the translation layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    /// The payload is not the concrete type the operation expects.
    #[error("request is not of type <{expected}Request>, got <{found}Request>")]
    TypeMismatch {
        expected: Operation,
        found: Operation,
    },
}

impl TranslateError {
    /// Structured exception payload describing this error.
    pub fn to_exception(&self) -> Exception {
        Exception {
            code: EXCEPTION_INTERNAL_ERROR,
            description: self.to_string(),
        }
    }

    /// Protobuf encoding of [`Self::to_exception`], suitable for status details.
    pub fn exception_bytes(&self) -> Vec<u8> {
        self.to_exception().encode_to_vec()
    }
}
