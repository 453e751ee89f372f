use alloy::primitives::{address, Address, FixedBytes};
use alloy::sol;

/// Sentinel used by drop contracts when a claim is paid in the chain's native currency.
pub static NATIVE_TOKEN_ADDRESS: Address = address!("EeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE");

pub const ERC1155_INTERFACE_ID: FixedBytes<4> = FixedBytes([0xd9, 0xb6, 0x7a, 0x26]);
pub const ERC721_INTERFACE_ID: FixedBytes<4> = FixedBytes([0x80, 0xac, 0x58, 0xcd]);

sol! {
    #[derive(Debug, PartialEq)]
    struct ClaimCondition {
        uint256 startTimestamp;
        uint256 maxClaimableSupply;
        uint256 supplyClaimed;
        uint256 quantityLimitPerWallet;
        bytes32 merkleRoot;
        uint256 pricePerToken;
        address currency;
        string metadata;
    }

    interface IERC165 {
        function supportsInterface(bytes4 interfaceId) external view returns (bool);
    }

    interface IContractMetadata {
        function contractURI() external view returns (string);
    }

    interface IERC1155MetadataURI {
        function uri(uint256 id) external view returns (string);
    }

    interface IERC20Metadata {
        function name() external view returns (string);
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
    }

    // drop contracts with a single claim condition set (ERC-721 and ERC-20 drops)
    interface IDrop {
        function getActiveClaimConditionId() external view returns (uint256);
        function getClaimConditionById(uint256 _conditionId) external view returns (ClaimCondition memory condition);
    }
}

// kept out of the block above, where alloy would treat IDrop's functions of the same
// name as overloads (`getActiveClaimConditionId_0Call`, `_1Call`)
sol! {
    // ERC-1155 drops keep one claim condition set per token id
    interface IDrop1155 {
        #[derive(Debug, PartialEq)]
        struct ClaimCondition {
            uint256 startTimestamp;
            uint256 maxClaimableSupply;
            uint256 supplyClaimed;
            uint256 quantityLimitPerWallet;
            bytes32 merkleRoot;
            uint256 pricePerToken;
            address currency;
            string metadata;
        }

        function getActiveClaimConditionId(uint256 _tokenId) external view returns (uint256);
        function getClaimConditionById(uint256 _tokenId, uint256 _conditionId) external view returns (ClaimCondition memory condition);
    }
}

macro_rules! impl_active_claim_condition {
    ($condition:ty) => {
        impl From<$condition> for crate::types::ActiveClaimCondition {
            fn from(condition: $condition) -> Self {
                Self {
                    price_per_token: condition.pricePerToken,
                    currency: condition.currency,
                    start_timestamp: condition.startTimestamp,
                    max_claimable_supply: condition.maxClaimableSupply,
                    supply_claimed: condition.supplyClaimed,
                    quantity_limit_per_wallet: condition.quantityLimitPerWallet,
                }
            }
        }
    };
}

impl_active_claim_condition!(ClaimCondition);
impl_active_claim_condition!(IDrop1155::ClaimCondition);
