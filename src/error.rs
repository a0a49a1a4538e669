pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("pool error: {0}")]
    Pool(String),

    #[error("pool is shut down")]
    PoolShutDown,

    #[error("task failed: {0}")]
    TaskFailed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    pub fn pool<S: Into<String>>(msg: S) -> Self {
        Error::Pool(msg.into())
    }

    pub fn task<S: Into<String>>(msg: S) -> Self {
        Error::TaskFailed(msg.into())
    }
}
