use schemars::schema_for;

use crate::{LeaderboardRequest, LeaderboardResponse};

/// Logos are requested square; forwarded to the image endpoint as-is.
pub const LOGO_ASPECT_RATIO: &str = "1:1";

pub fn leaderboard_system() -> String {
    let schema = serde_json::to_string_pretty(&schema_for!(LeaderboardResponse))
        .unwrap_or_else(|_| "{}".to_string());
    format!(
        "You are a DAO governance expert, skilled in evaluating community contributions \
and assigning trust scores.\n\n\
You will use the provided contributor activities and trust algorithm description to \
generate a leaderboard of top DAO members. For each member in the leaderboard, you must \
also suggest a relevant perk and assign descriptive badges based on their specific \
activities.\n\n\
- Perks should be based on the provided trust algorithm description.\n\
- Badges should be short (1-2 words) and reflect the member's key contributions \
(e.g., \"Top Voter\", \"Governance Expert\", \"Community Builder\", \"Top Contributor\").\n\
- Rank 1 is the highest trust score; ranks must be unique and consecutive.\n\n\
Respond with ONLY a JSON object matching this schema, nothing else:\n{schema}"
    )
}

pub fn leaderboard_user(request: &LeaderboardRequest) -> String {
    format!(
        "Contributor Activities: {activities}\n\
Trust Algorithm Description: {algorithm}\n\
Number of Top Members: {cap}\n\n\
Based on the provided information, generate a leaderboard of the top contributors, \
including their names, trust scores, ranks, perks, and badges. Ensure that the number \
of members in the leaderboard does not exceed {cap}.",
        activities = request.contributor_activities,
        algorithm = request.trust_algorithm_description,
        cap = request.number_of_top_members,
    )
}

pub fn logo_prompt(purpose: &str) -> String {
    format!(
        "A modern, minimalist, square vector logo for a project with the following \
purpose: {purpose}. The logo should be on a clean background."
    )
}

pub fn summary_system() -> String {
    "You are an expert in decentralized governance and your goal is to make complex \
proposals accessible to a broad audience.\n\n\
Your task is to create a clear and concise summary of the DAO proposal you are given. \
The summary should be easy for a non-technical person to understand.\n\n\
Focus on the following:\n\
1. What is the main goal of the proposal? (e.g., fund a project, change a rule)\n\
2. What is the expected outcome or impact? (e.g., create a new feature, increase community rewards)\n\
3. What are the key resources required? (e.g., funding amount, developer time)\n\n\
Keep the summary to 2-3 short sentences.\n\n\
Respond with ONLY a JSON object: {\"summary\": \"<your summary>\"}."
        .to_string()
}

pub fn summary_user(proposal_text: &str) -> String {
    format!("Proposal Text:\n{proposal_text}")
}
