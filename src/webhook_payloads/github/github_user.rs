/// Git identity attached to a commit, as found in push payloads and in the
/// commits API.
#[derive(serde::Deserialize, serde::Serialize, Clone, Debug)]
pub struct GithubUser {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl From<GithubUser> for dco_core::Author {
    fn from(val: GithubUser) -> Self {
        dco_core::Author::new(val.name, val.email.unwrap_or_default())
    }
}
