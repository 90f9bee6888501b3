#![no_std]

mod adapters;
mod approval;
mod errors;
mod events;
mod execution;
mod multisig;
mod proposals;
mod registry;
mod types;

pub use crate::adapters::{OwnedResource, OwnedResourceClient};
pub use crate::errors::MultisigError;
pub use crate::multisig::{MultiSigContract, MultiSigContractClient};
pub use crate::registry::SignerRegistry;
pub use crate::types::{
    AssetTransfer, CustodyWithdrawal, OwnershipTransfer, Proposal, ProposalState, RemoteAction,
};
