use soroban_sdk::{contractevent, Address, Env};

use crate::types::RemoteAction;

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Initialized {
    pub signer_count: u32,
    pub quorum: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalCreated {
    #[topic]
    pub proposal_id: u64,
    pub proposer: Address,
    pub action: RemoteAction,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalApproved {
    #[topic]
    pub proposal_id: u64,
    pub signer: Address,
    pub approvals: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalExecuted {
    #[topic]
    pub proposal_id: u64,
    pub caller: Address,
}

pub(crate) fn initialized(env: &Env, signer_count: u32, quorum: u32) {
    Initialized {
        signer_count,
        quorum,
    }
    .publish(env);
}

pub(crate) fn proposal_created(
    env: &Env,
    proposal_id: u64,
    proposer: &Address,
    action: &RemoteAction,
) {
    ProposalCreated {
        proposal_id,
        proposer: proposer.clone(),
        action: action.clone(),
    }
    .publish(env);
}

pub(crate) fn proposal_approved(env: &Env, proposal_id: u64, signer: &Address, approvals: u32) {
    ProposalApproved {
        proposal_id,
        signer: signer.clone(),
        approvals,
    }
    .publish(env);
}

pub(crate) fn proposal_executed(env: &Env, proposal_id: u64, caller: &Address) {
    ProposalExecuted {
        proposal_id,
        caller: caller.clone(),
    }
    .publish(env);
}
