use crate::RpcCommand;
use serde::{Deserialize, Serialize};

/// Arguments of `get_block`. The node accepts either a block number or a block id,
/// both sent as a string.
#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct BlockArgs {
    pub block_num_or_id: String,
}

impl BlockArgs {
    pub fn from_number(block_num: u64) -> Self {
        Self {
            block_num_or_id: block_num.to_string(),
        }
    }

    pub fn from_id(block_id: impl Into<String>) -> Self {
        Self {
            block_num_or_id: block_id.into(),
        }
    }
}

impl Default for BlockArgs {
    fn default() -> Self {
        Self::from_number(1)
    }
}

/// `get_block_header_state`
pub type BlockHeaderStateArgs = BlockArgs;

#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct BlockInfoArgs {
    pub block_num: u64,
}

impl BlockInfoArgs {
    pub fn new(block_num: u64) -> Self {
        Self { block_num }
    }
}

impl RpcCommand {
    pub fn get_block(args: BlockArgs) -> Self {
        Self::GetBlock(args)
    }

    pub fn get_block_header_state(args: BlockHeaderStateArgs) -> Self {
        Self::GetBlockHeaderState(args)
    }

    pub fn get_block_info(block_num: u64) -> Self {
        Self::GetBlockInfo(BlockInfoArgs::new(block_num))
    }
}
