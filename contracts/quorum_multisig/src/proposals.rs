use soroban_sdk::{Address, Env, Map};

use crate::errors::MultisigError;
use crate::events;
use crate::registry::SignerRegistry;
use crate::types::{
    DataKey, Proposal, ProposalState, RemoteAction, PROPOSAL_BUMP_AMOUNT,
    PROPOSAL_LIFETIME_THRESHOLD,
};

/// Stores a new pending proposal and returns its id. The requester's own
/// approval is recorded as part of creation.
pub(crate) fn create(
    env: &Env,
    registry: &SignerRegistry,
    requester: Address,
    action: RemoteAction,
) -> Result<u64, MultisigError> {
    registry.authorize(&requester)?;

    if let RemoteAction::TransferAsset(transfer) = &action {
        if transfer.amount <= 0 {
            return Err(MultisigError::InvalidAmount);
        }
    }

    let proposal_id = count(env);
    let now = env.ledger().timestamp();

    let mut approvals = Map::new(env);
    approvals.set(requester.clone(), now);

    let proposal = Proposal {
        id: proposal_id,
        proposer: requester.clone(),
        action,
        approvals,
        state: ProposalState::Pending,
        created_at: now,
        executed_at: None,
    };

    save(env, &proposal);
    env.storage()
        .instance()
        .set(&DataKey::ProposalCount, &(proposal_id + 1));

    events::proposal_created(env, proposal_id, &requester, &proposal.action);
    Ok(proposal_id)
}

pub(crate) fn load(env: &Env, proposal_id: u64) -> Result<Proposal, MultisigError> {
    let key = DataKey::Proposal(proposal_id);
    let proposal: Proposal = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(MultisigError::UnknownProposal)?;

    env.storage()
        .persistent()
        .extend_ttl(&key, PROPOSAL_LIFETIME_THRESHOLD, PROPOSAL_BUMP_AMOUNT);
    Ok(proposal)
}

pub(crate) fn save(env: &Env, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal.id);
    env.storage().persistent().set(&key, proposal);
    env.storage()
        .persistent()
        .extend_ttl(&key, PROPOSAL_LIFETIME_THRESHOLD, PROPOSAL_BUMP_AMOUNT);
}

pub(crate) fn count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0u64)
}
