use std::{sync::Arc, time::Duration};

use time::OffsetDateTime;
use tokio::sync::Mutex;

use crate::Error;

// tokens are considered stale this long before they actually expire
pub const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

const TOKEN_URL: &str = "https://id.twitch.tv/oauth2/token";

#[derive(Clone, Debug)]
pub(crate) struct Token {
    pub(crate) bearer: String,
    pub(crate) expires_at: OffsetDateTime,
}

impl Token {
    pub(crate) fn is_fresh(&self, now: OffsetDateTime) -> bool {
        now < self.expires_at - EXPIRY_MARGIN
    }
}

#[derive(Clone)]
pub struct OAuth {
    agent: reqwest::Client,
    client_id: Arc<str>,
    client_secret: Arc<str>,
    cached: Arc<Mutex<Option<Token>>>,
    base: Option<String>,
}

impl OAuth {
    pub fn new(client_id: &str, client_secret: &str) -> Self {
        Self::new_with_ep(Option::<String>::None, client_id, client_secret)
    }

    pub fn new_with_ep(
        ep: impl Into<Option<String>>,
        client_id: &str,
        client_secret: &str,
    ) -> Self {
        let agent = reqwest::Client::builder()
            .user_agent(crate::USER_AGENT)
            .build()
            .expect("valid client");

        Self {
            agent,
            client_id: Arc::from(client_id),
            client_secret: Arc::from(client_secret),
            cached: Arc::new(Mutex::new(None)),
            base: ep.into(),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub async fn get_access_token(&self) -> Result<String, Error> {
        let mut cached = self.cached.lock().await;
        if let Some(token) = &*cached {
            if token.is_fresh(OffsetDateTime::now_utc()) {
                return Ok(token.bearer.clone());
            }
            log::debug!("cached token is inside the expiry margin, refreshing");
        }

        let token = self.fetch_token().await?;
        let bearer = token.bearer.clone();
        *cached = Some(token);
        Ok(bearer)
    }

    async fn fetch_token(&self) -> Result<Token, Error> {
        #[derive(::serde::Deserialize)]
        struct Response {
            access_token: String,
            expires_in: u64,
        }

        let url = self.base.as_deref().unwrap_or(TOKEN_URL);
        log::trace!("requesting a new token from {url}");

        let form = [
            ("client_id", &*self.client_id),
            ("client_secret", &*self.client_secret),
            ("grant_type", "client_credentials"),
        ];

        let resp: Response = self
            .agent
            .post(url)
            .form(&form)
            .send()
            .await
            .map_err(Error::auth)?
            .error_for_status()
            .map_err(Error::auth)?
            .json()
            .await
            .map_err(Error::auth)?;

        log::debug!("got a token that expires in {}s", resp.expires_in);
        Ok(Token {
            bearer: resp.access_token,
            expires_at: OffsetDateTime::now_utc() + Duration::from_secs(resp.expires_in),
        })
    }
}
