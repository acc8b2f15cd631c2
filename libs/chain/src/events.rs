//! ABI bindings for the events emitted by the bounty factory and its clones.

use alloy::sol;

sol! {
    /// Emitted by the factory when it clones a new bounty escrow.
    #[derive(Debug, PartialEq, Eq)]
    event BountyCreated(
        address indexed bountyAddress,
        address indexed creator,
        bytes32 titleHash,
        uint8 proofType,
        uint256 rewardAmount,
        uint64 deadline
    );

    /// Emitted by a bounty clone when an executor's proof is accepted and paid.
    #[derive(Debug, PartialEq, Eq)]
    event BountyClaimed(address indexed bountyAddress, address indexed executor, uint256 payout);

    /// Emitted by a bounty clone when the creator reclaims escrowed funds.
    #[derive(Debug, PartialEq, Eq)]
    event BountyWithdrawn(address indexed bountyAddress, address indexed creator, uint256 amount);
}
