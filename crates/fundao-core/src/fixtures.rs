//! Hard-coded demo data: single source of truth for the pages and the
//! leaderboard prompt. There is no backend; every DAO, proposal and vote
//! below is inert presentation state.

use crate::{Dao, Proposal, ProposalStatus, VoteTally};

/// How many members the trust leaderboard asks the model for.
pub const LEADERBOARD_CAP: u32 = 7;

/// The fixed contributor activity log fed to the leaderboard flow.
pub const CONTRIBUTOR_ACTIVITY: &str = "\
- Alice (0x123...abc): Proposed 3 successful initiatives, voted on 95% of all proposals, contributed 15 ETH.
- Bob (0x456...def): Contributed 50 ETH, active in community discussions, voted on 60% of proposals.
- Charlie (0x789...ghi): Wrote extensive documentation for the DAO, onboarded 5 new high-value members, voted on 80% of proposals.
- Diana (0xaaa...bbb): Identified a critical security flaw, contributed 5 ETH, consistently provides feedback on proposals.
- Eve (0xccc...ddd): Frequent participant in Discord, contributed 1 ETH, voted on 30% of proposals.
- Frank (0xeee...fff): Contributed 20 ETH, has not participated in voting or discussions.
- Grace (0xggg...hhh): Leads the marketing working group, has brought in 3 major partnerships, voted on 75% of proposals.
- Hank (0xiii...jjj): Wrote 2 successful proposals, contributed 10 ETH.
- Ivan (0xkkk...lll): Active voter (99% participation), specializes in reviewing technical proposals.
- Judy (0xmmm...nnn): Long-time member, contributed 2 ETH, mentors new members.";

/// The fixed trust algorithm description fed to the leaderboard flow.
pub const TRUST_ALGORITHM: &str = "\
The trust score is calculated based on a weighted average of several factors:
1. Financial Contribution (30%): The total value of ETH contributed.
2. Governance Participation (40%): A combination of proposals created, voting frequency, and quality of feedback.
3. Community Building (20%): Actions that grow or strengthen the community, like onboarding, documentation, and marketing.
4. Security & Auditing (10%): Identifying vulnerabilities or contributing to the security of the DAO.
Perks: Top-ranked members get special voting power, access to exclusive channels, and early access to new projects.";

fn dao(
    dao_id: &str,
    name: &str,
    description: &str,
    image_seed: u32,
    logo_seed: Option<u32>,
    image_hint: &str,
    raised: u64,
    goal: u64,
    contributors: u32,
) -> Dao {
    Dao {
        dao_id: dao_id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        image_url: format!("https://picsum.photos/600/400?random={image_seed}"),
        logo_url: logo_seed.map(|s| format!("https://picsum.photos/100/100?random={s}")),
        image_hint: Some(image_hint.to_string()),
        raised,
        goal,
        contributors,
        treasury: None,
    }
}

/// The four DAOs on the home page.
pub fn featured_daos() -> Vec<Dao> {
    vec![
        dao(
            "ecowarriors",
            "EcoWarriors Initiative",
            "Funding decentralized projects to combat climate change and promote sustainability.",
            1,
            Some(11),
            "nature environment",
            75_000,
            100_000,
            234,
        ),
        dao(
            "artisan-guild",
            "Artisan Guild DAO",
            "A community-governed fund to support independent artists and creators worldwide.",
            2,
            Some(12),
            "art studio",
            42_000,
            50_000,
            158,
        ),
        dao(
            "code-crafters",
            "Code-Crafters Collective",
            "Developing open-source tools and infrastructure for the decentralized web.",
            3,
            Some(13),
            "code computer",
            120_000,
            250_000,
            88,
        ),
        dao(
            "healthchain",
            "HealthChain DAO",
            "Funding research and development of decentralized healthcare solutions.",
            4,
            Some(14),
            "health science",
            180_000,
            200_000,
            412,
        ),
    ]
}

/// The DAOs the demo user belongs to.
pub fn my_daos() -> Vec<Dao> {
    featured_daos()
        .into_iter()
        .filter(|d| d.dao_id == "ecowarriors" || d.dao_id == "healthchain")
        .collect()
}

/// Detail record for a DAO page. Only EcoWarriors carries the full detail
/// data (treasury is raised minus gas fees); other ids fall back to their
/// listing record.
pub fn dao_detail(dao_id: &str) -> Option<Dao> {
    let mut found = featured_daos().into_iter().find(|d| d.dao_id == dao_id)?;
    if dao_id == "ecowarriors" {
        found.treasury = Some(72_500);
    }
    Some(found)
}

/// The mock proposals on the EcoWarriors detail page. Other DAOs have none.
pub fn proposals_for(dao_id: &str) -> Vec<Proposal> {
    if dao_id != "ecowarriors" {
        return vec![];
    }
    vec![
        Proposal {
            id: "prop-001".to_string(),
            title: "Fund Reforestation Project in Amazon".to_string(),
            description: "This proposal allocates 15,000 USDC from the treasury to partner with a verified local NGO in Brazil for a large-scale reforestation effort in a region affected by illegal logging. The funds will cover the cost of saplings, labor, and 3 years of maintenance and monitoring. The goal is to re-plant 50,000 native trees, restoring critical habitat and creating a carbon sink. Detailed project plan and NGO due diligence report are attached.".to_string(),
            author: "0x123...abc".to_string(),
            status: ProposalStatus::Active,
            votes: VoteTally { yes: 120, no: 15, abstain: 30 },
        },
        Proposal {
            id: "prop-002".to_string(),
            title: "Develop Ocean Cleanup Drone".to_string(),
            description: "We propose to fund a research and development initiative to build a prototype of an autonomous, solar-powered drone for collecting plastic waste from ocean gyres. The initial funding request of 25,000 USDC will support a team of 3 engineers for 6 months, cover material costs, and facilitate initial testing. The project aims to produce an open-source design that other organizations can replicate and deploy.".to_string(),
            author: "0x456...def".to_string(),
            status: ProposalStatus::Active,
            votes: VoteTally { yes: 98, no: 42, abstain: 10 },
        },
        Proposal {
            id: "prop-003".to_string(),
            title: "Update DAO Governance Parameters".to_string(),
            description: "This proposal suggests updating the governance contract to reduce the proposal quorum from 5% to 3% of total token supply, and to lower the voting period from 7 days to 5 days. The goal is to increase the speed and efficiency of decision-making. Analysis of past proposal participation suggests this change would not significantly impact governance security. See attached simulation results.".to_string(),
            author: "0x789...ghi".to_string(),
            status: ProposalStatus::Passed,
            votes: VoteTally { yes: 210, no: 5, abstain: 12 },
        },
        Proposal {
            id: "prop-004".to_string(),
            title: "Community Marketing Initiative".to_string(),
            description: "This proposal requests 5,000 USDC to fund a 3-month community-led marketing campaign to increase awareness of the EcoWarriors DAO. The budget includes allocations for social media promotion, content creation, and small bounties for community participation. The goal is to double our social media following and increase new contributor onboarding by 20%.".to_string(),
            author: "0xggg...hhh".to_string(),
            status: ProposalStatus::Failed,
            votes: VoteTally { yes: 80, no: 85, abstain: 20 },
        },
    ]
}
