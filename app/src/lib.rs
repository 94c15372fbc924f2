//! Action layer invoked by the UI shell. Each AI action calls exactly one
//! flow, converts every failure into a logged absent result, and refuses
//! duplicate concurrent invocations of the same feature (the UI trigger is
//! expected to be disabled while a call is outstanding).

pub mod view;

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use fundao_ai::engine::{LlmClient, ModelClient};
use fundao_ai::{LeaderboardRequest, LeaderboardResponse, LogoRequest, SummaryRequest};
use fundao_core::fixtures;
use fundao_core::{AiSettings, DaoDraft};

/// The address shown once the demo wallet is "connected". No wallet logic
/// exists behind it.
pub const MOCK_WALLET_ADDRESS: &str = "0x123...aBcD";

/// Simulated on-chain deployment time for the create-DAO form.
pub const DEPLOY_DELAY: Duration = Duration::from_millis(1500);

/// Route id the create flow redirects to after the simulated deployment.
pub const NEW_DAO_ROUTE: &str = "new-dao";

pub struct AppState {
    settings: Mutex<AiSettings>,
    /// Test seam: a fake model injected here replaces the live client.
    client_override: Option<Arc<dyn ModelClient>>,
    wallet_connected: Mutex<bool>,
    in_flight: Arc<Mutex<HashSet<&'static str>>>,
}

/// Marks a feature as busy for its lifetime; dropped on every exit path so
/// an error never leaves the feature stuck.
struct FlightGuard {
    in_flight: Arc<Mutex<HashSet<&'static str>>>,
    feature: &'static str,
}

impl Drop for FlightGuard {
    fn drop(&mut self) {
        self.in_flight.lock().unwrap().remove(self.feature);
    }
}

impl AppState {
    /// Live state: settings from ~/.fundao, real model client per call.
    pub fn from_disk() -> Self {
        Self::new(fundao_core::read_settings(), None)
    }

    /// State with an injected model client, for reproducible tests.
    pub fn with_client(settings: AiSettings, client: Arc<dyn ModelClient>) -> Self {
        Self::new(settings, Some(client))
    }

    fn new(settings: AiSettings, client_override: Option<Arc<dyn ModelClient>>) -> Self {
        Self {
            settings: Mutex::new(settings),
            client_override,
            wallet_connected: Mutex::new(false),
            in_flight: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    fn model_client(&self, settings: &AiSettings) -> Arc<dyn ModelClient> {
        match &self.client_override {
            Some(client) => Arc::clone(client),
            None => Arc::new(LlmClient::new(settings.clone())),
        }
    }

    /// Claim the in-flight slot for a feature; `None` while a prior call for
    /// the same feature is still outstanding.
    fn begin(&self, feature: &'static str) -> Option<FlightGuard> {
        let mut busy = self.in_flight.lock().unwrap();
        if !busy.insert(feature) {
            eprintln!("[fundao] {feature} request already in flight, ignoring");
            return None;
        }
        Some(FlightGuard {
            in_flight: Arc::clone(&self.in_flight),
            feature,
        })
    }

    fn configured_settings(&self) -> Option<AiSettings> {
        let settings = self.settings.lock().unwrap().clone();
        if fundao_core::ai_configured(&settings) {
            Some(settings)
        } else {
            None
        }
    }

    // --- AI actions ---

    /// Generate the trust leaderboard from the fixed demo activity log.
    /// Absent on any failure; the UI renders its fallback message.
    pub async fn get_leaderboard_data(&self) -> Option<LeaderboardResponse> {
        let settings = self.configured_settings()?;
        let _guard = self.begin("leaderboard")?;
        let client = self.model_client(&settings);

        let request = LeaderboardRequest {
            contributor_activities: fixtures::CONTRIBUTOR_ACTIVITY.to_string(),
            trust_algorithm_description: fixtures::TRUST_ALGORITHM.to_string(),
            number_of_top_members: fixtures::LEADERBOARD_CAP,
        };

        match fundao_ai::generate_leaderboard(client.as_ref(), &request).await {
            Ok(response) => Some(response),
            Err(e) => {
                eprintln!("[fundao] error generating leaderboard: {e}");
                None
            }
        }
    }

    /// Generate a square logo for the given project purpose.
    pub async fn get_generated_logo(&self, purpose: &str) -> Option<String> {
        let settings = self.configured_settings()?;
        let _guard = self.begin("logo")?;
        let client = self.model_client(&settings);

        let request = LogoRequest {
            prompt: purpose.to_string(),
        };

        match fundao_ai::generate_logo(client.as_ref(), &request).await {
            Ok(response) => Some(response.logo_url),
            Err(e) => {
                eprintln!("[fundao] error generating logo: {e}");
                None
            }
        }
    }

    /// Summarize a proposal body for the details dialog.
    pub async fn get_proposal_summary(&self, proposal_text: &str) -> Option<String> {
        let settings = self.configured_settings()?;
        let _guard = self.begin("summary")?;
        let client = self.model_client(&settings);

        let request = SummaryRequest {
            proposal_text: proposal_text.to_string(),
        };

        match fundao_ai::summarize_proposal(client.as_ref(), &request).await {
            Ok(response) => Some(response.summary),
            Err(e) => {
                eprintln!("[fundao] error summarizing proposal: {e}");
                None
            }
        }
    }

    // --- DAO deployment (simulated) ---

    /// Validate the draft, wait out the fake chain deployment, return the
    /// route id of the "new" DAO.
    pub async fn deploy_dao(&self, draft: &DaoDraft) -> Result<String, String> {
        self.deploy_dao_with_delay(draft, DEPLOY_DELAY).await
    }

    async fn deploy_dao_with_delay(
        &self,
        draft: &DaoDraft,
        delay: Duration,
    ) -> Result<String, String> {
        draft.validate()?;
        tokio::time::sleep(delay).await;
        Ok(NEW_DAO_ROUTE.to_string())
    }

    // --- Wallet (presentation-only) ---

    /// Flip the mock connection flag; returns the new state.
    pub fn toggle_wallet(&self) -> bool {
        let mut connected = self.wallet_connected.lock().unwrap();
        *connected = !*connected;
        *connected
    }

    pub fn wallet_connected(&self) -> bool {
        *self.wallet_connected.lock().unwrap()
    }

    pub fn wallet_label(&self) -> String {
        if self.wallet_connected() {
            MOCK_WALLET_ADDRESS.to_string()
        } else {
            "Connect Wallet".to_string()
        }
    }

    // --- AI settings ---

    /// Settings for display. The API key never leaves the action layer,
    /// only whether one is set.
    pub fn ai_settings_summary(&self) -> serde_json::Value {
        let settings = self.settings.lock().unwrap().clone();
        let configured = fundao_core::ai_configured(&settings);
        serde_json::json!({
            "provider": settings.provider,
            "model": settings.model,
            "hasKey": !settings.api_key.is_empty(),
            "configured": configured,
        })
    }

    /// Update settings and persist them. An empty key means "keep existing".
    pub fn save_ai_settings(
        &self,
        provider: String,
        api_key: String,
        model: String,
    ) -> Result<(), String> {
        let mut settings = self.settings.lock().unwrap();
        settings.provider = provider;
        settings.model = model;
        if !api_key.is_empty() {
            settings.api_key = api_key;
        }
        fundao_core::write_settings(&settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use fundao_core::TokenType;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct MockClient {
        text: Result<String, String>,
        image: Result<Option<String>, String>,
        calls: AtomicU32,
        delay: Duration,
    }

    impl MockClient {
        fn replying(text: &str) -> Self {
            Self {
                text: Ok(text.to_string()),
                image: Ok(Some("data:image/png;base64,AAAA".to_string())),
                calls: AtomicU32::new(0),
                delay: Duration::ZERO,
            }
        }

        fn failing() -> Self {
            Self {
                text: Err("chat: connection refused".to_string()),
                image: Err("image request: connection refused".to_string()),
                calls: AtomicU32::new(0),
                delay: Duration::ZERO,
            }
        }

        fn slow(text: &str, delay: Duration) -> Self {
            Self {
                delay,
                ..Self::replying(text)
            }
        }
    }

    #[async_trait]
    impl ModelClient for MockClient {
        async fn generate(&self, _system: &str, _user: &str) -> Result<String, String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            self.text.clone()
        }

        async fn generate_image(
            &self,
            _prompt: &str,
            _aspect_ratio: &str,
        ) -> Result<Option<String>, String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            self.image.clone()
        }
    }

    fn configured() -> AiSettings {
        AiSettings {
            provider: "openai".to_string(),
            api_key: "sk-test".to_string(),
            model: "gpt-4o".to_string(),
        }
    }

    fn leaderboard_reply() -> String {
        let entries: Vec<String> = (1..=7)
            .map(|i| {
                format!(
                    "{{\"member\":\"Member {i}\",\"trustScore\":{},\"rank\":{i},\"perks\":\"p\",\"badges\":[]}}",
                    100 - i
                )
            })
            .collect();
        format!("{{\"leaderboard\":[{}]}}", entries.join(","))
    }

    #[tokio::test]
    async fn leaderboard_action_returns_data_on_success() {
        let state = AppState::with_client(configured(), Arc::new(MockClient::replying(&leaderboard_reply())));
        let data = state.get_leaderboard_data().await.unwrap();
        assert!(data.leaderboard.len() <= fixtures::LEADERBOARD_CAP as usize);
        assert_eq!(data.leaderboard[0].rank, 1);
    }

    #[tokio::test]
    async fn failed_flows_surface_as_absent_results() {
        let state = AppState::with_client(configured(), Arc::new(MockClient::failing()));
        assert!(state.get_leaderboard_data().await.is_none());
        assert!(state.get_generated_logo("a purpose").await.is_none());
        assert!(state.get_proposal_summary("a proposal").await.is_none());
    }

    #[tokio::test]
    async fn unconfigured_settings_skip_the_network_entirely() {
        let client = Arc::new(MockClient::replying("{}"));
        let state = AppState::with_client(
            AiSettings::default(),
            Arc::clone(&client) as Arc<dyn ModelClient>,
        );
        assert!(state.get_leaderboard_data().await.is_none());
        assert!(state.get_generated_logo("x").await.is_none());
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn duplicate_in_flight_requests_are_rejected() {
        let client = Arc::new(MockClient::slow(
            &leaderboard_reply(),
            Duration::from_millis(50),
        ));
        let state = Arc::new(AppState::with_client(
            configured(),
            Arc::clone(&client) as Arc<dyn ModelClient>,
        ));

        let first = tokio::spawn({
            let state = Arc::clone(&state);
            async move { state.get_leaderboard_data().await }
        });
        tokio::time::sleep(Duration::from_millis(10)).await;
        let second = state.get_leaderboard_data().await;

        assert!(second.is_none());
        assert!(first.await.unwrap().is_some());
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);

        // Slot is released after completion
        assert!(state.get_leaderboard_data().await.is_some());
    }

    #[tokio::test]
    async fn in_flight_slot_is_released_on_error() {
        let state = AppState::with_client(configured(), Arc::new(MockClient::failing()));
        assert!(state.get_generated_logo("x").await.is_none());
        // A fresh trigger is accepted (and fails again), not stuck behind the guard
        assert!(state.begin("logo").is_some());
    }

    #[tokio::test]
    async fn deploy_validates_then_redirects() {
        let state = AppState::with_client(configured(), Arc::new(MockClient::failing()));
        let draft = DaoDraft {
            project_name: "EcoWarriors Initiative".to_string(),
            purpose: "Funding decentralized climate projects.".to_string(),
            funding_goal: 1000,
            token_type: TokenType::Erc20,
        };
        let route = state
            .deploy_dao_with_delay(&draft, Duration::ZERO)
            .await
            .unwrap();
        assert_eq!(route, NEW_DAO_ROUTE);

        let invalid = DaoDraft {
            project_name: "ab".to_string(),
            ..draft
        };
        assert!(state.deploy_dao_with_delay(&invalid, Duration::ZERO).await.is_err());
    }

    #[test]
    fn wallet_toggle_is_presentation_only() {
        let state = AppState::with_client(configured(), Arc::new(MockClient::failing()));
        assert_eq!(state.wallet_label(), "Connect Wallet");
        assert!(state.toggle_wallet());
        assert_eq!(state.wallet_label(), MOCK_WALLET_ADDRESS);
        assert!(!state.toggle_wallet());
    }

    #[test]
    fn settings_summary_masks_the_key() {
        let state = AppState::with_client(configured(), Arc::new(MockClient::failing()));
        let summary = state.ai_settings_summary();
        assert_eq!(summary["provider"], "openai");
        assert_eq!(summary["hasKey"], true);
        assert_eq!(summary["configured"], true);
        assert!(summary.get("apiKey").is_none());
    }
}
