use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("unknown dispatch policy {0:?}: expected \"baseline\" or \"adaptive\"")]
    UnknownPolicy(String),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
