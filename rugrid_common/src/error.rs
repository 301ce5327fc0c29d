use std::fmt::Display;

pub type Result<T> = std::result::Result<T, RugridError>;

#[derive(Debug, PartialEq)]
pub enum RugridError {
    IllegalArgument(String),
    DeserializeError(String),
    IOError(String),
    /// No execution runtime is reachable from the caller.
    ClusterUnavailable(String),
    /// A submitted task did not run to completion.
    TaskFailure(String),
    Other(String),
}

impl Display for RugridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalArgument(msg) => write!(f, "Illegal Argument error: {}", msg),
            Self::DeserializeError(msg) => write!(f, "Deserialize error: {}", msg),
            Self::IOError(msg) => write!(f, "IO error: {}", msg),
            Self::ClusterUnavailable(msg) => write!(f, "Cluster unavailable: {}", msg),
            Self::TaskFailure(msg) => write!(f, "Task failure: {}", msg),
            Self::Other(msg) => write!(f, "Other error: {}", msg),
        }
    }
}

impl std::error::Error for RugridError {}

impl<T> From<RugridError> for Result<T> {
    fn from(val: RugridError) -> Self {
        Result::Err(val)
    }
}

macro_rules! convert_to_rugrid_error {
    ($err_ty: ty, $constructor: expr) => {
        impl From<$err_ty> for RugridError {
            fn from(value: $err_ty) -> Self {
                $constructor(value.to_string())
            }
        }
    };
}

convert_to_rugrid_error!(std::io::Error, RugridError::IOError);
convert_to_rugrid_error!(anyhow::Error, RugridError::Other);
convert_to_rugrid_error!(String, RugridError::Other);
convert_to_rugrid_error!(serde_json::Error, RugridError::DeserializeError);
convert_to_rugrid_error!(tokio::task::JoinError, RugridError::TaskFailure);
convert_to_rugrid_error!(
    opentelemetry_sdk::error::OTelSdkError,
    RugridError::Other
);
