//! RollupCreator bindings.
//!
//! Two generations of `createRollup` are deployed: nitro-contracts v1.1 takes a single batch
//! poster, v2.1 takes a list plus a batch poster manager. Both emit the same `RollupCreated`.

use alloy::sol;

sol! {
    /// Emitted by the RollupCreator once all core contracts are deployed.
    #[derive(Debug, PartialEq, Eq)]
    event RollupCreated(
        address indexed rollupAddress,
        address indexed nativeToken,
        address inboxAddress,
        address outbox,
        address rollupEventInbox,
        address challengeManager,
        address adminProxy,
        address sequencerInbox,
        address bridge,
        address upgradeExecutor,
        address validatorUtils,
        address validatorWalletCreator
    );
}

/// nitro-contracts v1.1
pub mod v1 {
    use alloy::sol;

    sol! {
        #[derive(Debug, PartialEq, Eq)]
        struct MaxTimeVariation {
            uint256 delayBlocks;
            uint256 futureBlocks;
            uint256 delaySeconds;
            uint256 futureSeconds;
        }

        #[derive(Debug, PartialEq, Eq)]
        struct Config {
            uint64 confirmPeriodBlocks;
            uint64 extraChallengeTimeBlocks;
            address stakeToken;
            uint256 baseStake;
            bytes32 wasmModuleRoot;
            address owner;
            address loserStakeEscrow;
            uint256 chainId;
            string chainConfig;
            uint64 genesisBlockNum;
            MaxTimeVariation sequencerInboxMaxTimeVariation;
        }

        #[derive(Debug, PartialEq, Eq)]
        struct RollupDeploymentParams {
            Config config;
            address batchPoster;
            address[] validators;
            uint256 maxDataSize;
            address nativeToken;
            bool deployFactoriesToL2;
            uint256 maxFeePerGasForRetryables;
        }

        function createRollup(RollupDeploymentParams memory deployParams) external payable returns (address);
    }
}

/// nitro-contracts v2.1
pub mod v2 {
    use alloy::sol;

    sol! {
        #[derive(Debug, PartialEq, Eq)]
        struct MaxTimeVariation {
            uint256 delayBlocks;
            uint256 futureBlocks;
            uint256 delaySeconds;
            uint256 futureSeconds;
        }

        #[derive(Debug, PartialEq, Eq)]
        struct Config {
            uint64 confirmPeriodBlocks;
            uint64 extraChallengeTimeBlocks;
            address stakeToken;
            uint256 baseStake;
            bytes32 wasmModuleRoot;
            address owner;
            address loserStakeEscrow;
            uint256 chainId;
            string chainConfig;
            uint64 genesisBlockNum;
            MaxTimeVariation sequencerInboxMaxTimeVariation;
        }

        #[derive(Debug, PartialEq, Eq)]
        struct RollupDeploymentParams {
            Config config;
            address[] validators;
            uint256 maxDataSize;
            address nativeToken;
            bool deployFactoriesToL2;
            uint256 maxFeePerGasForRetryables;
            address[] batchPosters;
            address batchPosterManager;
        }

        function createRollup(RollupDeploymentParams memory deployParams) external payable returns (address);
    }
}
