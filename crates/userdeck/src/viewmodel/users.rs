//! The fetch coordinator.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::Instrument;
use userdeck_core::logging::{span_names, targets};
use userdeck_core::{PerfSpan, Property, ReadOnlyProperty, Signal};
use userdeck_net::http::HttpClient;
use userdeck_net::network_info::{ConnectivityProbe, ReachabilityProbe};
use userdeck_net::users::{UserRecord, UsersApi, UsersService};

use super::error::{AlertAction, FetchError, TIMEOUT_MESSAGE};
use super::state::UsersSnapshot;
use crate::config::{ConfigError, UsersConfig};
use crate::model::DisplayUser;

/// Coordinates fetching users and publishes the resulting state.
///
/// A fetch runs as: probe reachability, then race the users request against
/// the configured timeout, then map the records and publish. Every state
/// transition is applied to the whole [`UsersSnapshot`] at once and announced
/// on [`state_changed`](Self::state_changed).
///
/// When several fetches overlap, only the most recently started one may
/// publish its settlement; older ones still return their outcome to their
/// caller.
///
/// # Example
///
/// ```ignore
/// use userdeck::{UsersConfig, UsersViewModel};
///
/// let view_model = UsersViewModel::from_config(UsersConfig::default())?;
/// let _guard = view_model.connect_state_changed(|snapshot| {
///     println!("{} users, loading: {}", snapshot.users.len(), snapshot.is_loading);
/// });
/// view_model.request_users().await?;
/// ```
pub struct UsersViewModel<A, P> {
    api: Arc<A>,
    probe: Arc<P>,
    config: UsersConfig,
    state: Property<UsersSnapshot>,
    generation: AtomicU64,
    state_changed: Arc<Signal<UsersSnapshot>>,
}

impl UsersViewModel<UsersService, ReachabilityProbe> {
    /// Build a view-model backed by the HTTP users service and the system
    /// reachability probe.
    pub fn from_config(config: UsersConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let client = HttpClient::builder()
            .no_timeout()
            .connect_timeout(config.request_timeout)
            .user_agent(concat!("userdeck/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let api = UsersService::new(client, &config.base_url)?;
        let probe = ReachabilityProbe::with_strategy(config.probe.strategy());
        Ok(Self::new(api, probe, config))
    }
}

impl<A, P> UsersViewModel<A, P>
where
    A: UsersApi,
    P: ConnectivityProbe,
{
    pub fn new(api: A, probe: P, config: UsersConfig) -> Self {
        Self::with_shared(Arc::new(api), Arc::new(probe), config)
    }

    /// Build a view-model over collaborators that are shared elsewhere.
    pub fn with_shared(api: Arc<A>, probe: Arc<P>, config: UsersConfig) -> Self {
        Self {
            api,
            probe,
            config,
            state: Property::default(),
            generation: AtomicU64::new(0),
            state_changed: Arc::new(Signal::new()),
        }
    }

    pub fn config(&self) -> &UsersConfig {
        &self.config
    }

    /// Read-only access to the live state.
    pub fn state(&self) -> ReadOnlyProperty<'_, UsersSnapshot> {
        ReadOnlyProperty::new(&self.state)
    }

    /// A consistent copy of the current state.
    pub fn snapshot(&self) -> UsersSnapshot {
        self.state.get()
    }

    /// Emitted with a fresh snapshot after every state change.
    pub fn state_changed(&self) -> &Arc<Signal<UsersSnapshot>> {
        &self.state_changed
    }

    /// Connect to [`state_changed`](Self::state_changed) for as long as the
    /// returned guard lives.
    pub fn connect_state_changed<F>(&self, slot: F) -> userdeck_core::ConnectionGuard<UsersSnapshot>
    where
        F: Fn(&UsersSnapshot) + Send + Sync + 'static,
    {
        Signal::connect_scoped(&self.state_changed, slot)
    }

    /// Run the fetch flow once.
    ///
    /// Resolves with the number of users on success. The outcome is also
    /// published, unless a newer request started in the meantime.
    pub async fn request_users(&self) -> Result<usize, FetchError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.run_fetch(generation)
            .instrument(PerfSpan::span(span_names::FETCH))
            .await
    }

    async fn run_fetch(&self, generation: u64) -> Result<usize, FetchError> {
        if !self.probe.is_connected().await {
            tracing::info!(target: targets::VIEWMODEL, generation, "network unreachable, request skipped");
            return Err(self.settle_failure(generation, FetchError::NoInternet));
        }

        self.apply(generation, |state| state.is_loading = true);
        tracing::debug!(
            target: targets::VIEWMODEL,
            generation,
            timeout_ms = self.config.request_timeout.as_millis() as u64,
            "request started"
        );

        // Dropping the losing branch cancels the in-flight request.
        let outcome = tokio::select! {
            result = self.api.fetch_users() => Some(result),
            () = tokio::time::sleep(self.config.request_timeout) => None,
        };

        match outcome {
            Some(Ok(records)) => {
                let users = self.map_records(records);
                let count = users.len();
                self.apply(generation, move |state| {
                    state.users = users;
                    state.is_loading = false;
                    state.error = None;
                    state.show_error_alert = false;
                });
                tracing::info!(target: targets::VIEWMODEL, generation, count, "users loaded");
                Ok(count)
            }
            Some(Err(err)) => {
                tracing::warn!(target: targets::VIEWMODEL, generation, error = %err, "request failed");
                let error = self.classify_failure(err.to_string()).await;
                Err(self.settle_failure(generation, error))
            }
            None => {
                tracing::warn!(target: targets::VIEWMODEL, generation, "request timed out");
                let error = self.classify_failure(TIMEOUT_MESSAGE.to_string()).await;
                Err(self.settle_failure(generation, error))
            }
        }
    }

    /// Decide what a failed request means by asking the probe again.
    async fn classify_failure(&self, detail: String) -> FetchError {
        if self.probe.is_connected().await {
            FetchError::FetchFailed(detail)
        } else {
            FetchError::NoInternet
        }
    }

    fn settle_failure(&self, generation: u64, error: FetchError) -> FetchError {
        let published = error.clone();
        self.apply(generation, move |state| {
            state.is_loading = false;
            state.error = Some(published);
            state.show_error_alert = true;
        });
        error
    }

    fn map_records(&self, records: Vec<UserRecord>) -> Vec<DisplayUser> {
        records
            .into_iter()
            .map(|record| {
                DisplayUser::from_record(
                    record,
                    &self.config.thumbnail_url,
                    &self.config.detail_image_url,
                )
            })
            .collect()
    }

    /// Make `user` the selected user and show its detail.
    pub fn select_user(&self, user: DisplayUser) {
        self.mutate(|state| {
            state.selected_user = Some(user);
            state.show_detail = true;
        });
    }

    /// Close the detail view.
    pub fn dismiss_detail(&self) {
        self.mutate(|state| {
            state.selected_user = None;
            state.show_detail = false;
        });
    }

    pub fn set_search_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.mutate(|state| state.search_query = query);
    }

    /// Users matching the current search query.
    pub fn filtered_users(&self) -> Vec<DisplayUser> {
        self.state.with(UsersSnapshot::filtered_users)
    }

    /// Hide the error alert. The user list is left as it is.
    pub fn dismiss_error(&self) {
        self.mutate(|state| state.show_error_alert = false);
    }

    /// Clear the pending error and run the fetch flow again.
    pub async fn retry(&self) -> Result<usize, FetchError> {
        self.mutate(|state| {
            state.error = None;
            state.show_error_alert = false;
        });
        self.request_users().await
    }

    /// Act on the user's answer to the error alert.
    ///
    /// Returns the retry outcome for [`AlertAction::Retry`], `None` for
    /// [`AlertAction::Cancel`].
    pub async fn handle_alert_action(
        &self,
        action: AlertAction,
    ) -> Option<Result<usize, FetchError>> {
        match action {
            AlertAction::Retry => Some(self.retry().await),
            AlertAction::Cancel => {
                self.dismiss_error();
                None
            }
        }
    }

    /// Apply a fetch transition if `generation` is still the latest request.
    fn apply<F>(&self, generation: u64, f: F)
    where
        F: FnOnce(&mut UsersSnapshot),
    {
        let mut current = true;
        let changed = self.state.update(|state| {
            current = self.generation.load(Ordering::SeqCst) == generation;
            if current {
                f(state);
            }
        });
        if !current {
            tracing::debug!(target: targets::VIEWMODEL, generation, "superseded request, settlement dropped");
        }
        if changed {
            self.publish();
        }
    }

    fn mutate<F>(&self, f: F)
    where
        F: FnOnce(&mut UsersSnapshot),
    {
        if self.state.update(f) {
            self.publish();
        }
    }

    fn publish(&self) {
        self.state_changed.emit(self.state.get());
    }
}

impl<A, P> std::fmt::Debug for UsersViewModel<A, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsersViewModel")
            .field("config", &self.config)
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .field("state_changed", &self.state_changed)
            .finish_non_exhaustive()
    }
}
