pub mod engine;
mod parse;
mod prompt;

use serde::{Deserialize, Serialize};

use engine::ModelClient;

// --- Request/response contracts ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRequest {
    /// Free-text description of contributor activity within the DAO.
    pub contributor_activities: String,
    /// Free-text description of the trust algorithm used to rank contributors.
    pub trust_algorithm_description: String,
    /// Upper bound on leaderboard size.
    #[serde(default = "default_top_members")]
    pub number_of_top_members: u32,
}

fn default_top_members() -> u32 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// The name of the contributor.
    pub member: String,
    /// The trust score of the contributor.
    pub trust_score: f64,
    /// Position on the leaderboard, 1 = highest trust.
    pub rank: u32,
    /// Perks that should be assigned to this member.
    pub perks: String,
    /// Short descriptive badges earned by the member (e.g. "Top Voter").
    pub badges: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    /// Top contributors ordered by ascending rank.
    pub leaderboard: Vec<LeaderboardEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoRequest {
    /// The project purpose the logo should reflect, used verbatim in the template.
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoResponse {
    /// Image reference for the generated logo; may be a data URI.
    pub logo_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    /// The full text of the DAO proposal to be summarized.
    pub proposal_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    /// A concise, easy-to-understand summary of the proposal.
    pub summary: String,
}

// --- Flows ---
//
// Each flow is a single attempt against the hosted model: no retry, no
// timeout, no partial results. A reply that does not validate against the
// output contract is an error, indistinguishable in type from a transport
// failure; callers get distinct message text only.

/// Rank the DAO's contributors by trust score.
///
/// A successful response holds at most `number_of_top_members` entries with
/// ranks renumbered into a contiguous ascending run starting at 1.
pub async fn generate_leaderboard(
    client: &dyn ModelClient,
    request: &LeaderboardRequest,
) -> Result<LeaderboardResponse, String> {
    let system = prompt::leaderboard_system();
    let user = prompt::leaderboard_user(request);

    eprintln!(
        "[fundao-ai] generating leaderboard (cap {})",
        request.number_of_top_members
    );
    let raw = client.generate(&system, &user).await?;
    let leaderboard = parse::parse_leaderboard(&raw, request.number_of_top_members)?;
    eprintln!("[fundao-ai] parsed {} leaderboard entries", leaderboard.len());

    Ok(LeaderboardResponse { leaderboard })
}

/// Generate a square project logo from a purpose description.
///
/// A reply that succeeds but carries no image reference is an error of its
/// own ("no image reference"), distinct from transport failures.
pub async fn generate_logo(
    client: &dyn ModelClient,
    request: &LogoRequest,
) -> Result<LogoResponse, String> {
    let image_prompt = prompt::logo_prompt(&request.prompt);

    eprintln!("[fundao-ai] generating logo");
    match client
        .generate_image(&image_prompt, prompt::LOGO_ASPECT_RATIO)
        .await?
    {
        Some(logo_url) => Ok(LogoResponse { logo_url }),
        None => Err("image generation returned no image reference".to_string()),
    }
}

/// Summarize a proposal in 2-3 sentences for a non-technical audience.
///
/// Empty or near-empty input is still sent; the model makes a best effort.
pub async fn summarize_proposal(
    client: &dyn ModelClient,
    request: &SummaryRequest,
) -> Result<SummaryResponse, String> {
    let system = prompt::summary_system();
    let user = prompt::summary_user(&request.proposal_text);

    eprintln!("[fundao-ai] summarizing proposal");
    let raw = client.generate(&system, &user).await?;
    let summary = parse::parse_summary(&raw)?;

    Ok(SummaryResponse { summary })
}
