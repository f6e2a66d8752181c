//! Poll Gate
//!
//! Sequencing for the dashboard refresh loop. Every tick starts a load and
//! supersedes the ones before it; only the newest load may write the view,
//! so a request that never resolves cannot stall later polls.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollGate {
    latest: u64,
}

impl PollGate {
    /// Start a load and return its sequence number
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Whether the result of load `seq` may be applied
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.latest
    }
}
