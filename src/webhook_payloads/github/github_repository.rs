#[derive(serde::Deserialize, serde::Serialize, Clone, Debug)]
pub struct GithubRepository {
    pub full_name: String,
}
