//! Access guard for protected views.
//!
//! The guard is split in two: [`GuardDecision::evaluate`] is a pure function of the
//! session state and the allowed role set, and [`AccessGuard`] is the thin adapter that
//! turns a decision into a navigation call through a [`GuardNavigator`]. Rendering code
//! uses the decision to pick between a placeholder, nothing, or the guarded subtree.

use tokio::sync::watch;

use crate::{client::store::SessionState, model::session::Role};

/// Outcome of evaluating a guard against the current session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session store still initializing: show a placeholder, never navigate
    Pending,
    Unauthenticated,
    /// Session present but its role is not in the allowed set
    WrongRole,
    Authorized,
}

/// Where a guard sends the user instead of rendering the protected view
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Redirect {
    Login,
    /// The default landing view every authenticated role may see
    Landing,
}

impl GuardDecision {
    /// An empty `allowed` set is valid and admits no role.
    pub fn evaluate(state: &SessionState, allowed: &[Role]) -> Self {
        match state {
            SessionState::Initializing => Self::Pending,
            SessionState::Unauthenticated => Self::Unauthenticated,
            SessionState::Authenticated(session) if allowed.contains(&session.role) => {
                Self::Authorized
            }
            SessionState::Authenticated(_) => Self::WrongRole,
        }
    }

    pub fn redirect(&self) -> Option<Redirect> {
        match self {
            Self::Pending | Self::Authorized => None,
            Self::Unauthenticated => Some(Redirect::Login),
            Self::WrongRole => Some(Redirect::Landing),
        }
    }
}

/// Performs the navigation side effect of a guard decision
pub trait GuardNavigator {
    fn navigate(&self, redirect: Redirect);
}

pub struct AccessGuard<N> {
    allowed: Vec<Role>,
    navigator: N,
    decision: GuardDecision,
}

impl<N: GuardNavigator> AccessGuard<N> {
    pub fn new(allowed: impl Into<Vec<Role>>, navigator: N) -> Self {
        Self {
            allowed: allowed.into(),
            navigator,
            decision: GuardDecision::Pending,
        }
    }

    /// Most recent decision, `Pending` until the first observation
    pub fn decision(&self) -> GuardDecision {
        self.decision
    }

    /// Evaluate `state` and navigate if the decision calls for a redirect.
    pub fn observe(&mut self, state: &SessionState) -> GuardDecision {
        self.decision = GuardDecision::evaluate(state, &self.allowed);

        if let Some(redirect) = self.decision.redirect() {
            self.navigator.navigate(redirect);
        }

        self.decision
    }

    /// Replace the allowed role set and re-evaluate against `state`.
    pub fn set_allowed_roles(
        &mut self,
        allowed: impl Into<Vec<Role>>,
        state: &SessionState,
    ) -> GuardDecision {
        self.allowed = allowed.into();
        self.observe(state)
    }

    /// Observe the current state and then every transition until the store is dropped.
    pub async fn follow(&mut self, mut sessions: watch::Receiver<SessionState>) {
        let current = sessions.borrow_and_update().clone();
        self.observe(&current);

        while sessions.changed().await.is_ok() {
            let current = sessions.borrow_and_update().clone();
            self.observe(&current);
        }
    }
}
