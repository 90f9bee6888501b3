use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MultisigError {
    NotInitialized = 0,
    AlreadyInitialized = 1,
    InvalidQuorum = 3,
    EmptySignersList = 4,
    DuplicateSigner = 5,
    QuorumExceedsSigners = 7,
    NotASigner = 9,
    SignerIndexOutOfRange = 10,
    InvalidAmount = 11,
    UnknownProposal = 13,
    AlreadyExecuted = 14,
    QuorumNotMet = 17,
    /// The managed resource rejected the call. The callee's own error is
    /// written to the diagnostic log.
    ExternalActionFailed = 25,
}
