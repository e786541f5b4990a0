//! Common test utilities for janus-auth-core integration tests

pub mod mock_repos;

#[allow(unused_imports)]
pub use mock_repos::MockUserRepository;

use std::sync::Arc;

use janus_auth_core::{AuthConfig, AuthService, HashParams};

/// Signing secret shared by tests that need to craft tokens by hand
pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// Floor-cost Argon2 parameters so tests spend milliseconds, not seconds
pub fn test_hash_params() -> HashParams {
    HashParams {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
    }
}

/// Auth service over a fresh mock directory
pub fn test_service() -> (AuthService<MockUserRepository>, Arc<MockUserRepository>) {
    let repo = Arc::new(MockUserRepository::new());
    let config = AuthConfig::new(TEST_SECRET).with_hash_params(test_hash_params());
    let service = AuthService::new(config, Arc::clone(&repo)).expect("test hash params are valid");
    (service, repo)
}
