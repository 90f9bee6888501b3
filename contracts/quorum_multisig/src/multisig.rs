use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

use crate::adapters;
use crate::approval;
use crate::errors::MultisigError;
use crate::events;
use crate::execution;
use crate::proposals;
use crate::registry::SignerRegistry;
use crate::types::{
    AssetTransfer, CustodyWithdrawal, DataKey, OwnershipTransfer, Proposal, RemoteAction,
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD,
};

#[contract]
pub struct MultiSigContract;

#[contractimpl]
impl MultiSigContract {
    pub fn initialize(
        env: Env,
        signers: Vec<Address>,
        quorum: u32,
    ) -> Result<(), MultisigError> {
        if SignerRegistry::exists(&env) {
            return Err(MultisigError::AlreadyInitialized);
        }

        let registry = SignerRegistry::new(signers, quorum)?;
        registry.save(&env);
        env.storage().instance().set(&DataKey::ProposalCount, &0u64);
        env.storage().instance().set(&DataKey::Nonce, &0u64);
        Self::extend_instance(&env);

        events::initialized(&env, registry.signer_count(), registry.quorum());
        Ok(())
    }

    pub fn create_proposal(
        env: Env,
        requester: Address,
        action: RemoteAction,
    ) -> Result<u64, MultisigError> {
        let registry = SignerRegistry::load(&env)?;
        Self::extend_instance(&env);
        proposals::create(&env, &registry, requester, action)
    }

    pub fn request_transfer_ownership(
        env: Env,
        requester: Address,
        target: Address,
        new_owner: Address,
    ) -> Result<u64, MultisigError> {
        let action = RemoteAction::TransferOwnership(OwnershipTransfer { target, new_owner });
        Self::create_proposal(env, requester, action)
    }

    pub fn request_withdrawal_to_self(
        env: Env,
        requester: Address,
        target: Address,
        current_holder: Address,
    ) -> Result<u64, MultisigError> {
        let action = RemoteAction::WithdrawToSelf(CustodyWithdrawal {
            target,
            current_holder,
        });
        Self::create_proposal(env, requester, action)
    }

    pub fn request_asset_transfer(
        env: Env,
        requester: Address,
        token: Address,
        to: Address,
        amount: i128,
    ) -> Result<u64, MultisigError> {
        let action = RemoteAction::TransferAsset(AssetTransfer {
            target: token,
            to,
            amount,
        });
        Self::create_proposal(env, requester, action)
    }

    pub fn approve_proposal(
        env: Env,
        proposal_id: u64,
        approver: Address,
    ) -> Result<(), MultisigError> {
        let registry = SignerRegistry::load(&env)?;
        Self::extend_instance(&env);
        approval::approve(&env, &registry, approver, proposal_id)
    }

    pub fn execute_proposal(
        env: Env,
        proposal_id: u64,
        caller: Address,
    ) -> Result<(), MultisigError> {
        let registry = SignerRegistry::load(&env)?;
        Self::extend_instance(&env);
        execution::execute(&env, &registry, caller, proposal_id)
    }

    pub fn has_quorum(env: Env, proposal_id: u64) -> Result<bool, MultisigError> {
        let registry = SignerRegistry::load(&env)?;
        let proposal = proposals::load(&env, proposal_id)?;
        Ok(approval::has_quorum(&registry, &proposal))
    }

    pub fn has_approved(
        env: Env,
        proposal_id: u64,
        signer: Address,
    ) -> Result<bool, MultisigError> {
        Self::require_initialized(&env)?;
        Ok(proposals::load(&env, proposal_id)?.has_approved(&signer))
    }

    pub fn get_proposal(env: Env, proposal_id: u64) -> Result<Proposal, MultisigError> {
        Self::require_initialized(&env)?;
        proposals::load(&env, proposal_id)
    }

    pub fn get_proposal_approvals(
        env: Env,
        proposal_id: u64,
    ) -> Result<Vec<Address>, MultisigError> {
        Self::require_initialized(&env)?;
        Ok(proposals::load(&env, proposal_id)?.approvals.keys())
    }

    pub fn is_proposal_executed(env: Env, proposal_id: u64) -> Result<bool, MultisigError> {
        Self::require_initialized(&env)?;
        Ok(proposals::load(&env, proposal_id)?.is_executed())
    }

    pub fn get_proposal_count(env: Env) -> Result<u64, MultisigError> {
        Self::require_initialized(&env)?;
        Ok(proposals::count(&env))
    }

    /// Number of proposals executed so far.
    pub fn nonce(env: Env) -> Result<u64, MultisigError> {
        Self::require_initialized(&env)?;
        Ok(env
            .storage()
            .instance()
            .get(&DataKey::Nonce)
            .unwrap_or(0u64))
    }

    pub fn quorum(env: Env) -> Result<u32, MultisigError> {
        Ok(SignerRegistry::load(&env)?.quorum())
    }

    pub fn signer_count(env: Env) -> Result<u32, MultisigError> {
        Ok(SignerRegistry::load(&env)?.signer_count())
    }

    pub fn signer_at(env: Env, index: u32) -> Result<Address, MultisigError> {
        SignerRegistry::load(&env)?.signer_at(index)
    }

    pub fn get_signers(env: Env) -> Result<Vec<Address>, MultisigError> {
        Ok(SignerRegistry::load(&env)?.signers)
    }

    pub fn is_signer(env: Env, signer: Address) -> Result<bool, MultisigError> {
        Ok(SignerRegistry::load(&env)?.is_signer(&signer))
    }

    /// Balance of `token` currently held by this contract.
    pub fn custody_balance(env: Env, token: Address) -> Result<i128, MultisigError> {
        Self::require_initialized(&env)?;
        adapters::custody_balance(&env, &token)
    }

    pub fn resource_owner(env: Env, target: Address) -> Result<Address, MultisigError> {
        Self::require_initialized(&env)?;
        adapters::resource_owner(&env, &target)
    }

    fn require_initialized(env: &Env) -> Result<(), MultisigError> {
        if !SignerRegistry::exists(env) {
            return Err(MultisigError::NotInitialized);
        }
        Ok(())
    }

    fn extend_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }
}
