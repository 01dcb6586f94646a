use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::platform::Platform;

/// The account the report is about.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl Profile {
    /// Profile name, or the login when no name is set.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.login,
        }
    }
}

/// Look up `username`'s profile. Any failure here is fatal: without a valid
/// identity the rest of the report has nothing to stand on.
pub async fn fetch_profile<P: Platform>(client: &P, username: &str) -> Result<Profile> {
    let endpoint = format!("/users/{username}");
    let resp = client.get(&endpoint, &[], None).await.map_err(|e| {
        warn!(username, "identity lookup failed: {e}");
        Error::Authentication {
            username: username.to_string(),
            status: 0,
        }
    })?;

    if !resp.is_success() {
        return Err(Error::Authentication {
            username: username.to_string(),
            status: resp.status,
        });
    }

    let profile: Profile = serde_json::from_value(resp.body).map_err(|source| Error::Decode {
        context: format!("profile for {username}"),
        source,
    })?;
    debug!(login = %profile.login, "authenticated");
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakePlatform;
    use serde_json::json;

    #[tokio::test]
    async fn returns_profile_on_success() {
        let client = FakePlatform::new().reply(
            "/users/octocat",
            200,
            json!({ "login": "octocat", "name": "The Octocat", "public_repos": 8 }),
        );
        let profile = fetch_profile(&client, "octocat").await.unwrap();
        assert_eq!(profile.display_name(), "The Octocat");
    }

    #[tokio::test]
    async fn display_name_falls_back_to_login() {
        let client = FakePlatform::new().reply(
            "/users/octocat",
            200,
            json!({ "login": "octocat", "name": null }),
        );
        let profile = fetch_profile(&client, "octocat").await.unwrap();
        assert_eq!(profile.display_name(), "octocat");

        let blank = Profile {
            login: "octocat".into(),
            name: Some("  ".into()),
        };
        assert_eq!(blank.display_name(), "octocat");
    }

    #[tokio::test]
    async fn non_success_is_an_authentication_error() {
        let client = FakePlatform::new().reply("/users/ghost", 401, json!({ "message": "Bad credentials" }));
        let err = fetch_profile(&client, "ghost").await.unwrap_err();
        assert!(matches!(
            err,
            Error::Authentication { ref username, status: 401 } if username == "ghost"
        ));
    }

    #[tokio::test]
    async fn transport_failure_is_an_authentication_error() {
        let client = FakePlatform::new().undecodable("/users/ghost");
        let err = fetch_profile(&client, "ghost").await.unwrap_err();
        assert!(matches!(err, Error::Authentication { status: 0, .. }));
    }
}
