use std::path::PathBuf;

/// Declares a fieldless enum together with its Solr wire spelling.
///
/// Generates `as_str`, `Display` and a `FromStr` that rejects unknown
/// spellings with [`ValidationError::Unsupported`](crate::error::ValidationError).
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident: $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Spelling used on the wire
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::ValidationError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s {
                    $( $wire => Ok($name::$variant), )+
                    other => Err($crate::error::ValidationError::unsupported($kind, other)),
                }
            }
        }
    };
}

pub(crate) use wire_enum;

wire_enum! {
    /// HTTP method used to send an operation
    pub enum HttpMethod: "method" {
        Get => "GET",
        Post => "POST",
    }
}

impl HttpMethod {
    /// Whether requests with this method carry a body
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post)
    }
}

wire_enum! {
    #[derive(Default)]
    pub enum SortOrder: "sort order" {
        #[default]
        Asc => "asc",
        Desc => "desc",
    }
}

/// Ordered header name/value pairs sent with a request
pub type HttpHeaders = Vec<(String, String)>;

/// Body of an operation, handed to the transport as-is
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    /// Fully rendered payload
    Bytes(Vec<u8>),
    /// File streamed from disk while the request is sent
    File(PathBuf),
}

impl RequestBody {
    pub fn is_empty(&self) -> bool {
        matches!(self, RequestBody::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_enum_round_trips_spelling() {
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!("GET".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Desc);
    }

    #[test]
    fn test_wire_enum_rejects_unknown_spelling() {
        let err = "PATCH".parse::<HttpMethod>().unwrap_err();
        assert_eq!(err.to_string(), "Could not handle method PATCH");
    }

    #[test]
    fn test_only_post_has_body() {
        assert!(HttpMethod::Post.has_body());
        assert!(!HttpMethod::Get.has_body());
    }
}
