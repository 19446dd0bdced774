// tests/support/helpers.rs
use crate::support::mocks::{FixedClock, InMemoryContentRepository, StaticTokenVerifier};
use chrono::{TimeZone, Utc};
use std::sync::Arc;
use veche::application::services::ApplicationServices;
use veche::domain::actor::{Actor, ActorId, AuthenticatedActor, Role, Username};
use veche::domain::content::ContentItem;

pub struct TestHarness {
    pub repo: Arc<InMemoryContentRepository>,
    pub services: ApplicationServices,
    pub user: AuthenticatedActor,
    pub admin: AuthenticatedActor,
}

/// Wires the application services over a shared in-memory repository and a
/// frozen clock, pre-seeded with `items`.
pub fn harness_with(items: Vec<ContentItem>) -> TestHarness {
    let repo = Arc::new(InMemoryContentRepository::with_items(items));
    let verifier = StaticTokenVerifier::new();
    let user = verifier.user.clone();
    let admin = verifier.admin.clone();

    let clock = FixedClock(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap());
    let services = ApplicationServices::new(
        Arc::clone(&repo) as Arc<dyn veche::domain::content::ContentWriteRepository>,
        Arc::clone(&repo) as Arc<dyn veche::domain::content::ContentReadRepository>,
        Arc::new(verifier),
        Arc::new(clock),
    );

    TestHarness {
        repo,
        services,
        user,
        admin,
    }
}

pub fn harness() -> TestHarness {
    harness_with(vec![])
}

/// Full router over an in-memory repository, for request-level tests.
/// "user-token" and "admin-token" authenticate as the returned identities.
pub fn make_test_router(items: Vec<ContentItem>) -> (axum::Router, TestHarness) {
    let h = harness_with(items);
    let router = veche::presentation::http::routes::build_router(
        veche::presentation::http::state::HttpState {
            services: Arc::new(harness_services_clone(&h)),
        },
        &["http://localhost:3000".to_string()],
    );
    (router, h)
}

// ApplicationServices is not Clone; rebuild it over the same repository and
// verifier actors so the harness handles stay valid for assertions.
fn harness_services_clone(h: &TestHarness) -> ApplicationServices {
    let verifier = StaticTokenVerifier {
        user: h.user.clone(),
        admin: h.admin.clone(),
    };
    let clock = FixedClock(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap());
    ApplicationServices::new(
        Arc::clone(&h.repo) as Arc<dyn veche::domain::content::ContentWriteRepository>,
        Arc::clone(&h.repo) as Arc<dyn veche::domain::content::ContentReadRepository>,
        Arc::new(verifier),
        Arc::new(clock),
    )
}

pub fn user_actor(identity: &AuthenticatedActor) -> Actor {
    Actor::Authenticated(identity.clone())
}

/// Authenticated non-admin actor with the given id, for acting as the author
/// of a seeded item.
pub fn actor_for(id: ActorId) -> Actor {
    Actor::Authenticated(AuthenticatedActor {
        id,
        username: Username::new("author").unwrap(),
        role: Role::User,
    })
}

pub fn some_user() -> AuthenticatedActor {
    AuthenticatedActor {
        id: ActorId::generate(),
        username: Username::new("someone").unwrap(),
        role: Role::User,
    }
}

pub fn some_admin() -> AuthenticatedActor {
    AuthenticatedActor {
        id: ActorId::generate(),
        username: Username::new("moderator").unwrap(),
        role: Role::Admin,
    }
}
