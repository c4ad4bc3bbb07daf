use async_trait::async_trait;

use crate::{
    api::{nav, AddCommentResponse, AddReplyResponse, NewComment, NewReply, VideoPage},
    Backend, TransportError,
};

/// Talks to the real site. `host` is the origin, without trailing slash.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    host: String,
    csrf_token: Option<String>,
    session: Option<String>,
}

impl HttpBackend {
    pub fn new(client: reqwest::Client, host: impl Into<String>) -> HttpBackend {
        let host: String = host.into();
        HttpBackend {
            client,
            host: String::from(host.trim_end_matches('/')),
            csrf_token: None,
            session: None,
        }
    }

    pub fn with_csrf_token(mut self, token: Option<String>) -> HttpBackend {
        self.csrf_token = token;
        self
    }

    /// Only for clients outside of a browser, which sends its own cookies
    pub fn with_session(mut self, session: Option<String>) -> HttpBackend {
        self.session = session;
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        let mut req = self.client.post(format!("{}{}", self.host, path));
        if let Some(csrf) = &self.csrf_token {
            req = req.header("X-CSRFToken", csrf);
        }
        if let Some(session) = &self.session {
            let mut cookie = format!("sessionid={session}");
            if let Some(csrf) = &self.csrf_token {
                cookie.push_str(&format!("; csrftoken={csrf}"));
            }
            req = req.header(reqwest::header::COOKIE, cookie);
        }
        req
    }

    async fn run<R>(req: reqwest::RequestBuilder) -> Result<R, TransportError>
    where
        R: for<'de> serde::Deserialize<'de>,
    {
        let resp = req
            .send()
            .await
            .map_err(|e| TransportError::Unreachable(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(?status, url = %resp.url(), "server answered with an error status");
            return Err(TransportError::Status(status.as_u16()));
        }
        resp.json()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn list_videos(&self, offset: usize, limit: usize) -> Result<VideoPage, TransportError> {
        let url = format!("{}{}", self.host, nav::list_videos(offset, limit));
        tracing::debug!(offset, limit, "fetching videos");
        Self::run(self.client.get(url)).await
    }

    async fn add_comment(&self, c: &NewComment) -> Result<AddCommentResponse, TransportError> {
        Self::run(self.post(nav::ADD_COMMENT).form(c)).await
    }

    async fn add_reply(&self, r: &NewReply) -> Result<AddReplyResponse, TransportError> {
        Self::run(self.post(nav::ADD_REPLY).form(r)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forms_carry_credentials() {
        let b = HttpBackend::new(reqwest::Client::new(), "https://kronik.example/")
            .with_csrf_token(Some(String::from("tok")))
            .with_session(Some(String::from("s3ss")));
        assert_eq!(b.host(), "https://kronik.example");

        let req = b
            .post(nav::ADD_COMMENT)
            .form(&NewComment {
                text: String::from("привет & hi"),
                video_id: "anna__v1".parse().unwrap(),
            })
            .build()
            .unwrap();
        assert_eq!(req.url().as_str(), "https://kronik.example/api/add-comment/");
        assert_eq!(req.headers()["X-CSRFToken"], "tok");
        assert_eq!(
            req.headers()[reqwest::header::COOKIE],
            "sessionid=s3ss; csrftoken=tok"
        );
        let body = std::str::from_utf8(req.body().unwrap().as_bytes().unwrap()).unwrap();
        assert!(body.ends_with("&video_id=anna__v1"), "{body}");
    }

    #[test]
    fn browser_requests_have_no_cookie_header() {
        let b = HttpBackend::new(reqwest::Client::new(), "http://localhost:8000")
            .with_csrf_token(Some(String::from("tok")));
        let req = b.post(nav::ADD_REPLY).build().unwrap();
        assert!(req.headers().get(reqwest::header::COOKIE).is_none());
    }
}
