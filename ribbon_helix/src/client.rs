use crate::{data, Error, OAuth};

const BASE_URL: &str = "https://api.twitch.tv/helix";

#[derive(Clone)]
pub struct HelixClient {
    agent: reqwest::Client,
    oauth: OAuth,
    base: Option<String>,
}

impl HelixClient {
    pub fn new(oauth: OAuth) -> Self {
        Self::new_with_ep(Option::<String>::None, oauth)
    }

    pub fn new_with_ep(ep: impl Into<Option<String>>, oauth: OAuth) -> Self {
        let agent = reqwest::Client::builder()
            .user_agent(crate::USER_AGENT)
            .build()
            .expect("valid client");

        Self {
            agent,
            oauth,
            base: ep.into(),
        }
    }

    pub async fn get_streams(&self, first: usize) -> Result<Vec<data::Stream>, Error> {
        self.get_response("streams", &[("first", first.to_string())])
            .await
            .map(|data| data.data)
    }

    pub async fn get_users(&self, ids: &[u64]) -> Result<Vec<data::User>, Error> {
        let query = ids
            .iter()
            .map(|id| ("id", id.to_string()))
            .collect::<Vec<_>>();
        self.get_response("users", &query).await.map(|data| data.data)
    }

    async fn get_response<T>(
        &self,
        ep: &str,
        query: &[(&str, String)],
    ) -> Result<data::Data<T>, Error>
    where
        for<'de> T: ::serde::Deserialize<'de> + Send + 'static,
    {
        let token = self.oauth.get_access_token().await?;

        let url = format!("{}/{}", self.base.as_deref().unwrap_or(BASE_URL), ep);
        log::trace!("GET {url}");

        let request = self
            .agent
            .get(&url)
            .query(query)
            .header("client-id", self.oauth.client_id())
            .header("authorization", format!("Bearer {token}"));

        let response = request.send().await.map_err(Error::fetch)?;
        response
            .error_for_status()
            .map_err(Error::fetch)?
            .json()
            .await
            .map_err(Error::fetch)
    }
}
