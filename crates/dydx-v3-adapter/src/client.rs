/*
[INPUT]:  Client configuration and optional signing delegate
[OUTPUT]: Public and onboarding clients sharing one configuration
[POS]:    Crate facade - single entry point for SDK users
[UPDATE]: When adding new client components
*/

use std::sync::Arc;

use crate::auth::OnboardingSigner;
use crate::http::{ClientConfig, DydxError, OnboardingClient, PublicClient, Result};

/// Entry point bundling the dYdX v3 client components
#[derive(Debug, Clone)]
pub struct DydxClient {
    config: ClientConfig,
    public: PublicClient,
    onboarding: Option<OnboardingClient>,
}

impl DydxClient {
    /// Create a client for public endpoints only
    pub fn new(config: ClientConfig) -> Result<Self> {
        let public = PublicClient::with_config(&config)?;
        Ok(Self {
            config,
            public,
            onboarding: None,
        })
    }

    /// Create a client able to onboard through `signer`
    ///
    /// The signer must be bound to the configured network.
    pub fn with_signer(config: ClientConfig, signer: Arc<dyn OnboardingSigner>) -> Result<Self> {
        if signer.network_id() != config.network_id {
            return Err(DydxError::Config(format!(
                "Signer is bound to network {} but client targets network {}",
                signer.network_id(),
                config.network_id
            )));
        }

        let public = PublicClient::with_config(&config)?;
        let onboarding = OnboardingClient::with_config(&config, signer)?;
        Ok(Self {
            config,
            public,
            onboarding: Some(onboarding),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn public(&self) -> &PublicClient {
        &self.public
    }

    /// Onboarding component, available only when built with a signer
    pub fn onboarding(&self) -> Result<&OnboardingClient> {
        self.onboarding.as_ref().ok_or_else(|| {
            DydxError::Config("Onboarding requires a client built with a signer".to_string())
        })
    }
}
