pub mod errors;
pub mod models;
pub mod providers;
pub mod render;
pub mod services;

use models::{
    chart::ChartOptions,
    dashboard::{DashboardData, DashboardView, RenderedCharts},
    session::Session,
    settings::Settings,
    summary::DashboardSummary,
};
use providers::{graphql::GraphQlProvider, traits::DashboardProvider};
use services::{
    chart_service::ChartService, display_service::DisplayService, fetch_service::FetchService,
};

use errors::CoreError;

/// Main entry point for the XP dashboard core library.
///
/// Holds the session token and the services needed for one
/// sign-in → fetch → render cycle. Nothing is persisted: dropping the
/// dashboard forgets the session.
#[must_use]
pub struct Dashboard {
    settings: Settings,
    session: Session,
    chart_options: ChartOptions,
    provider: Box<dyn DashboardProvider>,
    fetch_service: FetchService,
    chart_service: ChartService,
    display_service: DisplayService,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("provider", &self.provider.name())
            .field("session", &self.session)
            .field("event_id", &self.settings.event_id)
            .finish()
    }
}

impl Dashboard {
    /// Dashboard talking to the platform API described by `settings`.
    pub fn new(settings: Settings) -> Result<Self, CoreError> {
        settings.validate()?;
        let provider = GraphQlProvider::new(&settings);
        Ok(Self::with_provider(settings, Box::new(provider)))
    }

    /// Dashboard backed by any [`DashboardProvider`].
    pub fn with_provider(settings: Settings, provider: Box<dyn DashboardProvider>) -> Self {
        Self {
            settings,
            session: Session::new(),
            chart_options: ChartOptions::default(),
            provider,
            fetch_service: FetchService::new(),
            chart_service: ChartService::new(),
            display_service: DisplayService::new(),
        }
    }

    pub fn with_chart_options(mut self, options: ChartOptions) -> Self {
        self.chart_options = options;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn chart_options(&self) -> &ChartOptions {
        &self.chart_options
    }

    pub fn set_chart_options(&mut self, options: ChartOptions) {
        self.chart_options = options;
    }

    // ── Session ─────────────────────────────────────────────────────

    /// Exchange credentials for a token and keep it for later fetches.
    pub async fn sign_in(&mut self, login: &str, password: &str) -> Result<(), CoreError> {
        if login.trim().is_empty() || password.is_empty() {
            return Err(CoreError::MissingCredentials);
        }
        let token = self.provider.sign_in(login, password).await?;
        self.session.set_token(token);
        if !self.session.is_authenticated() {
            return Err(CoreError::Api {
                provider: self.provider.name().to_string(),
                message: "No token received from server".into(),
            });
        }
        tracing::info!(provider = self.provider.name(), "signed in");
        Ok(())
    }

    /// Forget the current token.
    pub fn sign_out(&mut self) {
        self.session.clear();
        tracing::info!("signed out");
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    // ── Fetch / Render ──────────────────────────────────────────────

    /// Run a complete fetch cycle with the current token.
    ///
    /// An expired token clears the session, so the caller must sign in
    /// again before the next attempt.
    pub async fn load(&mut self) -> Result<DashboardData, CoreError> {
        let token = self
            .session
            .token()
            .ok_or(CoreError::NotAuthenticated)?
            .to_string();

        let result = self
            .fetch_service
            .fetch_all(self.provider.as_ref(), &token, &self.settings)
            .await;

        if let Err(CoreError::SessionExpired) = &result {
            tracing::warn!("session expired; clearing token");
            self.session.clear();
        }
        result
    }

    /// Render every chart from already-fetched data. Never fails.
    pub fn render(&self, data: &DashboardData) -> RenderedCharts {
        self.chart_service.render_all(data, &self.chart_options)
    }

    /// Display-ready card text for already-fetched data.
    pub fn summarize(&self, data: &DashboardData) -> DashboardSummary {
        self.display_service.summarize(data)
    }

    /// Fetch, render and summarize in one go.
    pub async fn refresh(&mut self) -> Result<DashboardView, CoreError> {
        let data = self.load().await?;
        let charts = self.render(&data);
        let summary = self.summarize(&data);
        Ok(DashboardView {
            data,
            charts,
            summary,
        })
    }
}
