use soroban_sdk::{contractclient, log, token, Address, Env, Error, InvokeError};

use crate::errors::MultisigError;
use crate::types::RemoteAction;

/// Ownership interface a managed resource has to expose for the engine to
/// govern it. `set_owner` must only succeed with the current owner's auth.
#[contractclient(name = "OwnedResourceClient")]
pub trait OwnedResource {
    fn owner(env: Env) -> Address;
    fn set_owner(env: Env, new_owner: Address);
}

pub(crate) fn dispatch(env: &Env, action: &RemoteAction) -> Result<(), MultisigError> {
    match action {
        RemoteAction::TransferOwnership(transfer) => {
            transfer_ownership(env, &transfer.target, &transfer.new_owner)
        }
        RemoteAction::WithdrawToSelf(withdrawal) => {
            withdraw_to_self(env, &withdrawal.target, &withdrawal.current_holder)
        }
        RemoteAction::TransferAsset(transfer) => {
            transfer_asset(env, &transfer.target, &transfer.to, transfer.amount)
        }
    }
}

fn transfer_ownership(
    env: &Env,
    target: &Address,
    new_owner: &Address,
) -> Result<(), MultisigError> {
    let resource = OwnedResourceClient::new(env, target);
    settle(env, target, resource.try_set_owner(new_owner))
}

fn withdraw_to_self(
    env: &Env,
    target: &Address,
    current_holder: &Address,
) -> Result<(), MultisigError> {
    let resource = OwnedResourceClient::new(env, target);
    let outcome = resource.try_set_owner(&env.current_contract_address());
    settle(env, target, outcome).inspect_err(|_| {
        log!(env, "custody withdrawal rejected", current_holder.clone());
    })
}

fn transfer_asset(
    env: &Env,
    target: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), MultisigError> {
    let token_client = token::TokenClient::new(env, target);
    let multisig_address = env.current_contract_address();
    settle(
        env,
        target,
        token_client.try_transfer(&multisig_address, to, &amount),
    )
}

pub(crate) fn custody_balance(env: &Env, asset: &Address) -> Result<i128, MultisigError> {
    let token_client = token::TokenClient::new(env, asset);
    settle(
        env,
        asset,
        token_client.try_balance(&env.current_contract_address()),
    )
}

pub(crate) fn resource_owner(env: &Env, target: &Address) -> Result<Address, MultisigError> {
    settle(env, target, OwnedResourceClient::new(env, target).try_owner())
}

fn settle<T, C>(
    env: &Env,
    target: &Address,
    outcome: Result<Result<T, C>, Result<Error, InvokeError>>,
) -> Result<T, MultisigError> {
    match outcome {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(_)) => {
            log!(env, "remote action returned an unexpected value", target.clone());
            Err(MultisigError::ExternalActionFailed)
        }
        Err(Ok(error)) => {
            log!(env, "remote action failed", target.clone(), error.get_code());
            Err(MultisigError::ExternalActionFailed)
        }
        Err(Err(_)) => {
            log!(env, "remote action could not be invoked", target.clone());
            Err(MultisigError::ExternalActionFailed)
        }
    }
}
