//! Bindings for the couplet NFT contract.

use alloy_primitives::{hex, U256};
use alloy_sol_types::sol;
use anyhow::{anyhow, bail, Result};

sol! {
    #[sol(all_derives)]
    interface ICoupletNft {
        struct CoupletContent {
            string upperLine;
            string lowerLine;
            string horizontalScroll;
            string imageUrl;
            uint256 mintTime;
        }

        function totalSupply() external view returns (uint256);
        function tokenByIndex(uint256 index) external view returns (uint256);
        function ownerOf(uint256 tokenId) external view returns (address);
        function getCoupletContent(uint256 tokenId) external view returns (CoupletContent memory);
        function getLikeCount(uint256 tokenId) external view returns (uint256);
        function hasUserLiked(uint256 tokenId, address user) external view returns (bool);

        function likeCouplet(uint256 tokenId) external;
        function unlikeCouplet(uint256 tokenId) external;
        function mintCouplet(
            string upperLine,
            string lowerLine,
            string horizontalScroll,
            string imageUrl
        ) external payable returns (uint256);
        function safeTransferFrom(address from, address to, uint256 tokenId) external;
    }
}

pub use ICoupletNft::CoupletContent;

pub fn decode_hex(value: &str) -> Result<Vec<u8>> {
    let trimmed = value.trim();
    let stripped = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    hex::decode(stripped).map_err(|err| anyhow!("invalid hex payload: {err}"))
}

pub fn u256_to_u64(value: U256) -> Result<u64> {
    u64::try_from(value).map_err(|_| anyhow!("value {} does not fit in u64", value))
}

pub fn parse_token_id(token_id: &str) -> Result<U256> {
    let trimmed = token_id.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
        bail!("token id must be a decimal integer");
    }
    U256::from_str_radix(trimmed, 10).map_err(|err| anyhow!("invalid token id: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::Address;
    use alloy_sol_types::SolCall;
    use super::ICoupletNft::*;

    const WORD: usize = 32;

    fn uint_word(value: u64) -> Vec<u8> {
        U256::from(value).to_be_bytes::<32>().to_vec()
    }

    fn string_tail(value: &str) -> Vec<u8> {
        let mut out = uint_word(value.len() as u64);
        let mut bytes = value.as_bytes().to_vec();
        while bytes.len() % WORD != 0 {
            bytes.push(0);
        }
        out.extend(bytes);
        out
    }

    #[test]
    fn selectors_match_erc721() {
        assert_eq!(hex::encode(totalSupplyCall::SELECTOR), "18160ddd");
        assert_eq!(hex::encode(ownerOfCall::SELECTOR), "6352211e");
        assert_eq!(hex::encode(tokenByIndexCall::SELECTOR), "4f6ccce7");
        assert_eq!(hex::encode(safeTransferFromCall::SELECTOR), "42842e0e");
        assert_eq!(
            mintCoupletCall::SIGNATURE,
            "mintCouplet(string,string,string,string)"
        );
    }

    #[test]
    fn encodes_like_check_arguments() {
        let user: Address = "0x00000000000000000000000000000000000000aa".parse().unwrap();
        let data = hex::encode(
            hasUserLikedCall {
                tokenId: U256::from(5u64),
                user,
            }
            .abi_encode(),
        );
        assert_eq!(data.len(), 2 * (4 + 64));
        assert!(data.ends_with("aa"));
        assert_eq!(&data[8..72], &format!("{:0>64}", "5"));
    }

    #[test]
    fn decodes_scalar_returns() {
        let supply = totalSupplyCall::abi_decode_returns(&uint_word(42), true).unwrap();
        assert_eq!(supply._0, U256::from(42u64));
        assert!(hasUserLikedCall::abi_decode_returns(&uint_word(1), true).unwrap()._0);
        assert!(!hasUserLikedCall::abi_decode_returns(&uint_word(0), true).unwrap()._0);

        let mut address_word = vec![0u8; 12];
        address_word.extend([0x11u8; 20]);
        let owner = ownerOfCall::abi_decode_returns(&address_word, true).unwrap();
        assert_eq!(owner._0, Address::from([0x11u8; 20]));
        assert!(totalSupplyCall::abi_decode_returns(&[0u8; 4], true).is_err());
    }

    #[test]
    fn decodes_couplet_struct() {
        let strings = ["门迎旭日财源广", "户纳春风吉庆多", "四季平安", "ipfs://QmHash"];
        let tails: Vec<Vec<u8>> = strings.iter().map(|s| string_tail(s)).collect();

        let mut head = Vec::new();
        let mut offset = 5 * WORD;
        for tail in &tails {
            head.extend(uint_word(offset as u64));
            offset += tail.len();
        }
        head.extend(uint_word(1_700_000_000));

        // A dynamic struct is returned behind its offset.
        let mut data = uint_word(32);
        data.extend(head);
        for tail in tails {
            data.extend(tail);
        }

        let content = getCoupletContentCall::abi_decode_returns(&data, true)
            .unwrap()
            ._0;
        assert_eq!(content.upperLine, "门迎旭日财源广");
        assert_eq!(content.horizontalScroll, "四季平安");
        assert_eq!(content.imageUrl, "ipfs://QmHash");
        assert_eq!(content.mintTime, U256::from(1_700_000_000u64));

        assert!(getCoupletContentCall::abi_decode_returns(&data[..100], true).is_err());
    }

    #[test]
    fn token_ids_are_decimal() {
        assert_eq!(parse_token_id(" 12 ").unwrap(), U256::from(12u64));
        assert!(parse_token_id("0x0c").is_err());
        assert!(parse_token_id("").is_err());
        assert!(u256_to_u64(U256::MAX).is_err());
        assert_eq!(decode_hex("0x0a0b").unwrap(), vec![0x0a, 0x0b]);
    }
}
