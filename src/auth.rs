use axum::http::{header, HeaderMap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Authenticated { token: String },
    Anonymous,
}

impl Session {
    /// A bearer token sent by the browser wins over the configured one.
    pub fn resolve(headers: &HeaderMap, configured: Option<&str>) -> Self {
        let forwarded = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(bearer_token);

        match forwarded.or(configured) {
            Some(token) => Session::Authenticated {
                token: token.to_string(),
            },
            None => Session::Anonymous,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Authenticated { token } => Some(token),
            Session::Anonymous => None,
        }
    }
}

fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();
    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}
