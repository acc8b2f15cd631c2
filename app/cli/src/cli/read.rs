use std::str::FromStr;

use engine::state::logic::StartBlock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FromBlock {
    Number(u64),
    Latest,
}

impl FromStr for FromBlock {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("latest") {
            return Ok(FromBlock::Latest);
        }
        match s.parse::<u64>() {
            // scanning from genesis is never what a fresh deployment wants
            Ok(0) => Ok(FromBlock::Latest),
            Ok(block_number) => Ok(FromBlock::Number(block_number)),
            Err(_) => Err(format!("`{s}` is not a valid block number or `latest`")),
        }
    }
}

impl From<FromBlock> for StartBlock {
    fn from(value: FromBlock) -> Self {
        match value {
            FromBlock::Number(block_number) => StartBlock::Number(block_number),
            FromBlock::Latest => StartBlock::Latest,
        }
    }
}
