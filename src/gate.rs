use tracing::{info, warn};

use crate::api::{ApiClient, ApiError};
use crate::models::{AdminCredentials, StatsSnapshot};
use crate::notify::{Notifier, Severity};

pub const MAX_LOGIN_ATTEMPTS: u32 = 3;

pub const WRONG_PASSWORD: &str = "Wrong password. Please try again.";
pub const CONNECTION_FAILED: &str = "Failed to connect to the server. Please try again.";
pub const STATS_FAILED: &str = "Failed to fetch statistics. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    LoggedOut,
    Authenticating,
    LoggedIn,
    LockedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Accepted,
    Rejected,
    TransportFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateEvent {
    LoggedIn,
    Retry,
    LockedOut,
    ConnectionFailed,
    Busy,
}

/// Holds every piece of login/session state in one place: the machine state,
/// the consecutive-rejection counter, whether a password error is showing,
/// and the stats snapshot fetched for the session.
#[derive(Debug, Default)]
pub struct AdminGate {
    state: GateState,
    attempt_count: u32,
    password_error: bool,
    stats: Option<StatsSnapshot>,
}

impl AdminGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn attempt_count(&self) -> u32 {
        self.attempt_count
    }

    pub fn stats(&self) -> Option<&StatsSnapshot> {
        self.stats.as_ref()
    }

    /// Moves into `Authenticating`, refusing while a call is in flight or a
    /// session is already open. A locked-out gate behaves as a fresh landing.
    pub fn begin(&mut self) -> bool {
        match self.state {
            GateState::LoggedOut | GateState::LockedOut => {
                self.state = GateState::Authenticating;
                true
            }
            GateState::Authenticating | GateState::LoggedIn => false,
        }
    }

    /// Applies one login outcome to the machine. Pure with respect to I/O;
    /// the only side effects are notifications.
    pub fn observe(&mut self, outcome: LoginOutcome, notifier: &mut Notifier) -> GateEvent {
        match outcome {
            LoginOutcome::Accepted => {
                self.state = GateState::LoggedIn;
                self.attempt_count = 0;
                self.password_error = false;
                info!("admin login accepted");
                GateEvent::LoggedIn
            }
            LoginOutcome::Rejected => {
                if self.attempt_count >= MAX_LOGIN_ATTEMPTS - 1 {
                    // Third consecutive rejection: silent full reset, the
                    // forced return to the landing context is the only signal.
                    self.reset_session();
                    self.state = GateState::LockedOut;
                    notifier.dismiss();
                    info!("login attempts exhausted, session reset");
                    GateEvent::LockedOut
                } else {
                    self.attempt_count += 1;
                    self.state = GateState::LoggedOut;
                    self.password_error = true;
                    notifier.notify(Severity::Error, WRONG_PASSWORD);
                    GateEvent::Retry
                }
            }
            LoginOutcome::TransportFailed => {
                // Connectivity failures do not count toward lockout.
                self.state = GateState::LoggedOut;
                self.password_error = true;
                notifier.notify(Severity::Error, CONNECTION_FAILED);
                GateEvent::ConnectionFailed
            }
        }
    }

    /// Editing the password clears a displayed password error; the attempt
    /// counter is untouched.
    pub fn password_edited(&mut self, notifier: &mut Notifier) {
        if self.state == GateState::LoggedOut && self.password_error {
            self.password_error = false;
            notifier.dismiss();
        }
    }

    fn reset_session(&mut self) {
        self.attempt_count = 0;
        self.password_error = false;
        self.stats = None;
    }

    /// One full login attempt: at most one login call, and on acceptance a
    /// single stats fetch. A failed stats fetch does not undo the login.
    pub async fn login(
        &mut self,
        api: &ApiClient,
        credentials: &AdminCredentials,
        notifier: &mut Notifier,
    ) -> GateEvent {
        if !self.begin() {
            return GateEvent::Busy;
        }

        let outcome = match api.admin_login(credentials).await {
            Ok(true) => LoginOutcome::Accepted,
            Ok(false) => LoginOutcome::Rejected,
            Err(error) => {
                warn!(%error, "login call failed");
                LoginOutcome::TransportFailed
            }
        };

        let event = self.observe(outcome, notifier);
        if event == GateEvent::LoggedIn {
            let fetched = api.fetch_stats().await;
            self.apply_stats(fetched, notifier);
        }
        event
    }

    /// A failed or empty snapshot surfaces an error but leaves the session
    /// logged in.
    fn apply_stats(&mut self, fetched: Result<StatsSnapshot, ApiError>, notifier: &mut Notifier) {
        match fetched {
            Ok(snapshot) => self.stats = Some(snapshot),
            Err(error) => {
                warn!(%error, "stats fetch failed");
                notifier.notify(Severity::Error, STATS_FAILED);
            }
        }
    }
}
