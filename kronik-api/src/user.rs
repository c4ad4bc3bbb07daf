#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    /// Author id used for records synthesized while the server is unreachable
    pub fn placeholder() -> UserId {
        UserId(String::from("current-user"))
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The logged-in visitor, as rendered in the page header
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct User {
    pub id: UserId,
    pub display_name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl User {
    pub fn initial(&self) -> String {
        self.display_name
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_else(|| String::from("U"))
    }
}
