use soroban_sdk::{contracttype, Address, Map};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 120 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const PROPOSAL_BUMP_AMOUNT: u32 = 120 * DAY_IN_LEDGERS;
pub(crate) const PROPOSAL_LIFETIME_THRESHOLD: u32 = PROPOSAL_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Registry,
    ProposalCount,
    Nonce,
    Proposal(u64),
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ProposalState {
    Pending = 0,
    Executed = 1,
}

/// Hand ownership of `target` to `new_owner`. The engine must already own it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransfer {
    pub target: Address,
    pub new_owner: Address,
}

/// Pull ownership of `target` away from `current_holder` into the engine's custody.
/// `current_holder` is not checked by the engine: the resource demands the
/// real owner's auth, and a mismatch surfaces as a failed remote call.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CustodyWithdrawal {
    pub target: Address,
    pub current_holder: Address,
}

/// Send `amount` of the token at `target` from the engine's balance to `to`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetTransfer {
    pub target: Address,
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RemoteAction {
    TransferOwnership(OwnershipTransfer),
    WithdrawToSelf(CustodyWithdrawal),
    TransferAsset(AssetTransfer),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub proposer: Address,
    pub action: RemoteAction,
    /// Approving signers mapped to the ledger timestamp of their approval.
    pub approvals: Map<Address, u64>,
    pub state: ProposalState,
    pub created_at: u64,
    pub executed_at: Option<u64>,
}

impl Proposal {
    pub fn is_executed(&self) -> bool {
        self.state == ProposalState::Executed
    }

    pub fn has_approved(&self, signer: &Address) -> bool {
        self.approvals.contains_key(signer.clone())
    }

    pub fn approval_count(&self) -> u32 {
        self.approvals.len()
    }
}
