use alloy::primitives::BlockNumber;

/// Where ingestion starts when no cursor has been persisted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartBlock {
    /// Bind to the chain height seen by the first successful poll.
    Latest,
    Number(BlockNumber),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingFirstPoll,
    Cycling,
}

#[derive(Debug)]
pub struct State {
    start_block: StartBlock,
    phase: Phase,
}

impl State {
    pub fn new(start_block: StartBlock) -> Self {
        Self { start_block, phase: Phase::AwaitingFirstPoll }
    }

    pub fn start_block(&self) -> StartBlock {
        self.start_block
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    // `Latest` is resolved exactly once, by the first height observed.
    fn on_height(&mut self, height: BlockNumber) -> BlockNumber {
        self.phase = Phase::Cycling;
        match self.start_block {
            StartBlock::Number(block_number) => block_number,
            StartBlock::Latest => {
                tracing::info!("Start block resolved to chain height {height:?}");
                self.start_block = StartBlock::Number(height);
                height
            }
        }
    }

    /// The inclusive range the next cycle must ingest, or `None` when the
    /// chain has not advanced past the cursor.
    pub fn next_range(
        &mut self,
        cursor: Option<BlockNumber>,
        height: BlockNumber,
    ) -> Option<(BlockNumber, BlockNumber)> {
        let start_block_number = self.on_height(height);
        let from_block_number = match cursor {
            Some(last_block) => last_block.saturating_add(1),
            None => start_block_number,
        };

        (from_block_number <= height).then_some((from_block_number, height))
    }
}
