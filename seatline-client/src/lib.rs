//! HTTP client for the seat allocation service.

use std::time::Duration;

use reqwest::{Method, StatusCode, Url};
use serde::{de::DeserializeOwned, Serialize};
use seatline_shared::models::api::{
    ErrorResponse, ModifySeatRequest, ModifySeatResponse, PurchaseTicketRequest,
    RemoveUserResponse, SectionUsersResponse, TicketResponse,
};
use seatline_shared::{SeatSelection, Snapshot, Ticket, User, UserSeat};

/// Errors from client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered with an error status.
    #[error("server rejected request ({status}, {code}): {message}")]
    Rejected {
        status: StatusCode,
        code: String,
        message: String,
    },

    /// The base URL cannot carry path segments.
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),

    /// The request never produced a usable response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    /// Machine-readable error code returned by the server, if any
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Rejected { code, .. } => Some(code),
            Self::InvalidBaseUrl(_) | Self::Transport(_) => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

/// One method per service endpoint.
#[derive(Debug, Clone)]
pub struct BookingClient {
    http: reqwest::Client,
    base_url: Url,
}

impl BookingClient {
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }

        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    pub async fn purchase_ticket(&self, user: User) -> ClientResult<Ticket> {
        let resp: TicketResponse = self
            .send(Method::POST, &["v1", "tickets"], Some(&PurchaseTicketRequest { user }))
            .await?;
        Ok(resp.ticket)
    }

    pub async fn get_receipt(&self, email: &str) -> ClientResult<Ticket> {
        let resp: TicketResponse = self
            .send::<(), _>(Method::GET, &["v1", "tickets", email], None)
            .await?;
        Ok(resp.ticket)
    }

    pub async fn get_section_users(&self, section: &str) -> ClientResult<Vec<UserSeat>> {
        let resp: SectionUsersResponse = self
            .send::<(), _>(Method::GET, &["v1", "sections", section, "users"], None)
            .await?;
        Ok(resp.user_seats)
    }

    pub async fn modify_seat(&self, email: &str, new_seat: SeatSelection) -> ClientResult<Ticket> {
        let resp: ModifySeatResponse = self
            .send(
                Method::PUT,
                &["v1", "tickets", email, "seat"],
                Some(&ModifySeatRequest { new_seat }),
            )
            .await?;
        Ok(resp.updated_ticket)
    }

    pub async fn remove_user(&self, email: &str) -> ClientResult<bool> {
        let resp: RemoveUserResponse = self
            .send::<(), _>(Method::DELETE, &["v1", "tickets", email], None)
            .await?;
        Ok(resp.success)
    }

    pub async fn get_stat(&self) -> ClientResult<Snapshot> {
        self.send::<(), _>(Method::GET, &["v1", "stat"], None).await
    }

    /// Append path segments to the base URL, percent-encoding each one so
    /// that `/`, `?` and `#` inside an email stay part of its segment.
    fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send<B, T>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        tracing::debug!(%method, %url, "Sending request");

        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let (code, message) = match response.json::<ErrorResponse>().await {
            Ok(err) => (err.code, err.error),
            Err(_) => ("UNKNOWN".to_string(), status.to_string()),
        };
        Err(ClientError::Rejected {
            status,
            code,
            message,
        })
    }
}
