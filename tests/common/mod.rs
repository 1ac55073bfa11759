#![allow(dead_code)]

use axum_test::TestServer;
use std::sync::Arc;
use subdomain_creator::application::services::{DnsService, DomainService};
use subdomain_creator::domain::entities::ExtensionCatalog;
use subdomain_creator::domain::synthesizer::ConfigSynthesizer;
use subdomain_creator::infrastructure::availability::SimulatedChecker;
use subdomain_creator::routes::router;
use subdomain_creator::state::AppState;
use subdomain_creator::utils::random::RandomSource;

/// State with a seeded random source and the default catalog.
///
/// A ratio of 1.0 or 0.0 makes the simulated verdict deterministic; the
/// seed keeps suggestions reproducible.
pub fn create_test_state(available_ratio: f64) -> AppState {
    let catalog = Arc::new(ExtensionCatalog::default());
    let random = Arc::new(RandomSource::seeded(42));
    let checker = Arc::new(SimulatedChecker::new(available_ratio, random.clone()));

    let domain_service = Arc::new(DomainService::new(catalog, checker, random));
    let dns_service = Arc::new(DnsService::new(ConfigSynthesizer::default()));

    AppState::new(domain_service, dns_service)
}

pub fn server_with_ratio(available_ratio: f64) -> TestServer {
    TestServer::new(router(create_test_state(available_ratio))).unwrap()
}

pub fn available_server() -> TestServer {
    server_with_ratio(1.0)
}

pub fn taken_server() -> TestServer {
    server_with_ratio(0.0)
}
