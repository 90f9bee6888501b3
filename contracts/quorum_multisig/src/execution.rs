use soroban_sdk::{Address, Env};

use crate::adapters;
use crate::approval;
use crate::errors::MultisigError;
use crate::events;
use crate::proposals;
use crate::registry::SignerRegistry;
use crate::types::{DataKey, ProposalState};

/// Runs the proposal's remote action and, only once that call has returned
/// successfully, marks the proposal executed.
///
/// A failed remote call leaves the proposal `Pending`, so it can be executed
/// again later. Nothing guards the managed resource against a redriven call:
/// the caller has to know the action is safe to repeat before retrying.
pub(crate) fn execute(
    env: &Env,
    registry: &SignerRegistry,
    caller: Address,
    proposal_id: u64,
) -> Result<(), MultisigError> {
    registry.authorize(&caller)?;

    let mut proposal = proposals::load(env, proposal_id)?;

    if proposal.is_executed() {
        return Err(MultisigError::AlreadyExecuted);
    }

    if !approval::has_quorum(registry, &proposal) {
        return Err(MultisigError::QuorumNotMet);
    }

    // External call first; state is committed only after it succeeds.
    adapters::dispatch(env, &proposal.action)?;

    proposal.state = ProposalState::Executed;
    proposal.executed_at = Some(env.ledger().timestamp());
    proposals::save(env, &proposal);

    let nonce: u64 = env
        .storage()
        .instance()
        .get(&DataKey::Nonce)
        .unwrap_or(0u64);
    env.storage().instance().set(&DataKey::Nonce, &(nonce + 1));

    events::proposal_executed(env, proposal_id, &caller);
    Ok(())
}
