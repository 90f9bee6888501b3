use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::errors::MultisigError;
use crate::types::DataKey;

/// The fixed signer set and approval quorum. Written once by `initialize`
/// and only read afterwards.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignerRegistry {
    pub signers: Vec<Address>,
    pub quorum: u32,
}

impl SignerRegistry {
    pub fn new(signers: Vec<Address>, quorum: u32) -> Result<Self, MultisigError> {
        if signers.is_empty() {
            return Err(MultisigError::EmptySignersList);
        }

        if quorum == 0 {
            return Err(MultisigError::InvalidQuorum);
        }

        if quorum > signers.len() {
            return Err(MultisigError::QuorumExceedsSigners);
        }

        for i in 0..signers.len() {
            for j in (i + 1)..signers.len() {
                if signers.get_unchecked(i) == signers.get_unchecked(j) {
                    return Err(MultisigError::DuplicateSigner);
                }
            }
        }

        Ok(Self { signers, quorum })
    }

    pub fn load(env: &Env) -> Result<Self, MultisigError> {
        env.storage()
            .instance()
            .get(&DataKey::Registry)
            .ok_or(MultisigError::NotInitialized)
    }

    pub fn exists(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Registry)
    }

    pub(crate) fn save(&self, env: &Env) {
        env.storage().instance().set(&DataKey::Registry, self);
    }

    pub fn is_signer(&self, who: &Address) -> bool {
        self.signers.iter().any(|signer| &signer == who)
    }

    pub fn quorum(&self) -> u32 {
        self.quorum
    }

    pub fn signer_count(&self) -> u32 {
        self.signers.len()
    }

    pub fn signer_at(&self, index: u32) -> Result<Address, MultisigError> {
        self.signers
            .get(index)
            .ok_or(MultisigError::SignerIndexOutOfRange)
    }

    /// Membership is checked before `require_auth`, so an outsider gets
    /// `NotASigner` rather than an auth failure.
    pub fn authorize(&self, who: &Address) -> Result<(), MultisigError> {
        if !self.is_signer(who) {
            return Err(MultisigError::NotASigner);
        }
        who.require_auth();
        Ok(())
    }
}
