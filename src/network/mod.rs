pub mod client;

pub use client::{Client, Error};

pub trait HttpClientExt {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Send GET request to the URI and return response body
    /// 
    /// Must return `Err` if the request has failed or the server
    /// answered with non-2xx status code
    fn get(&self, uri: impl AsRef<str>) -> Result<Vec<u8>, Self::Error>;
}

