/*!
 * Common test utilities for the chatlingo test suite
 */

use std::sync::Arc;

use chatlingo::providers::ProviderRequest;
use chatlingo::providers::mock::MockProvider;
use chatlingo::translation::TranslationService;

/// Install a test logger once; later calls are ignored
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a service around a mock provider, keeping a handle for assertions
pub fn service_with(provider: MockProvider) -> (TranslationService, Arc<MockProvider>) {
    init_logging();
    let provider = Arc::new(provider);
    let service = TranslationService::new(provider.clone());
    (service, provider)
}

/// Provider output that hands the request text back unchanged
pub fn echo(request: &ProviderRequest) -> String {
    request.text.clone()
}
