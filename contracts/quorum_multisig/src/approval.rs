use soroban_sdk::{Address, Env};

use crate::errors::MultisigError;
use crate::events;
use crate::proposals;
use crate::registry::SignerRegistry;
use crate::types::Proposal;

/// Records `signer`'s approval of a pending proposal. Approving twice is a
/// no-op: approvals are keyed by signer, so one signer never counts twice.
pub(crate) fn approve(
    env: &Env,
    registry: &SignerRegistry,
    signer: Address,
    proposal_id: u64,
) -> Result<(), MultisigError> {
    registry.authorize(&signer)?;

    let mut proposal = proposals::load(env, proposal_id)?;

    if proposal.is_executed() {
        return Err(MultisigError::AlreadyExecuted);
    }

    if proposal.has_approved(&signer) {
        return Ok(());
    }

    proposal
        .approvals
        .set(signer.clone(), env.ledger().timestamp());
    proposals::save(env, &proposal);

    events::proposal_approved(env, proposal_id, &signer, proposal.approval_count());
    Ok(())
}

pub(crate) fn has_quorum(registry: &SignerRegistry, proposal: &Proposal) -> bool {
    proposal.approval_count() >= registry.quorum()
}
