/*
[INPUT]:  Ethereum address, signing method and onboarding action
[OUTPUT]: Typed signature string for the DYDX-SIGNATURE header
[POS]:    Auth layer - signing delegate abstraction
[UPDATE]: When adding new wallet types or changing signature format
*/

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::http::{DydxError, Result};
use crate::types::{OnboardingAction, SigningMethod};

/// Trait for signing onboarding actions with an Ethereum key
///
/// Implementations are bound to a single network. The trait is async to
/// support browser wallets, hardware wallets and remote signers that prompt
/// the user.
#[async_trait]
pub trait OnboardingSigner: Send + Sync {
    /// Network (chain id) the signatures are valid for
    fn network_id(&self) -> u64;

    /// Sign `action` on behalf of `ethereum_address`
    ///
    /// Returns a hex signature, optionally `0x`-prefixed.
    async fn sign(
        &self,
        ethereum_address: &str,
        signing_method: SigningMethod,
        action: OnboardingAction,
    ) -> Result<String>;
}

/// Mock signer for testing
///
/// Returns a predetermined signature and records every call.
#[derive(Debug)]
pub struct MockOnboardingSigner {
    network_id: u64,
    signature: Option<String>,
    calls: AtomicUsize,
    actions: Mutex<Vec<(SigningMethod, OnboardingAction)>>,
}

impl MockOnboardingSigner {
    /// Create a mock that always answers with `signature`
    pub fn new(network_id: u64, signature: &str) -> Self {
        Self {
            network_id,
            signature: Some(signature.to_string()),
            calls: AtomicUsize::new(0),
            actions: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock that rejects every request, like a declined wallet prompt
    pub fn rejecting(network_id: u64) -> Self {
        Self {
            network_id,
            signature: None,
            calls: AtomicUsize::new(0),
            actions: Mutex::new(Vec::new()),
        }
    }

    /// Number of `sign` invocations so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Signing method and action of every invocation, in order
    pub fn recorded(&self) -> Vec<(SigningMethod, OnboardingAction)> {
        match self.actions.lock() {
            Ok(actions) => actions.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl OnboardingSigner for MockOnboardingSigner {
    fn network_id(&self) -> u64 {
        self.network_id
    }

    async fn sign(
        &self,
        _ethereum_address: &str,
        signing_method: SigningMethod,
        action: OnboardingAction,
    ) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.actions.lock() {
            Ok(mut actions) => actions.push((signing_method, action)),
            Err(poisoned) => poisoned.into_inner().push((signing_method, action)),
        }

        self.signature
            .clone()
            .ok_or_else(|| DydxError::Signing("user rejected the signing request".to_string()))
    }
}
