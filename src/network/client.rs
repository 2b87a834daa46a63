use crate::consts::USER_AGENT;

use super::HttpClientExt;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to fetch data: {0}")]
    Minreq(#[from] minreq::Error),

    #[error("HTTP Error {code}: {reason}")]
    Status {
        code: i32,
        reason: String
    }
}

/// Blocking HTTP client. Doesn't set any requests timeout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    user_agent: String
}

impl Default for Client {
    #[inline]
    fn default() -> Self {
        Self {
            user_agent: USER_AGENT.to_string()
        }
    }
}

impl Client {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_user_agent(self, user_agent: impl ToString) -> Self {
        Self {
            user_agent: user_agent.to_string()
        }
    }

    #[inline]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl HttpClientExt for Client {
    type Error = Error;

    #[tracing::instrument(level = "trace", skip_all, fields(uri = uri.as_ref()))]
    fn get(&self, uri: impl AsRef<str>) -> Result<Vec<u8>, Self::Error> {
        let response = minreq::get(uri.as_ref())
            .with_header("User-Agent", &self.user_agent)
            .send()?;

        if !(200..300).contains(&response.status_code) {
            tracing::trace!(status = response.status_code, "Request failed");

            return Err(Error::Status {
                code: response.status_code,
                reason: response.reason_phrase
            });
        }

        Ok(response.into_bytes())
    }
}
