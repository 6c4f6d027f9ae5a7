use serde::{Deserialize, Serialize};
use std::ops::AddAssign;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SeedResult {
    pub success: u32,
    pub failed: u32,
    pub skipped: u32,
}

impl AddAssign for SeedResult {
    fn add_assign(&mut self, rhs: Self) {
        self.success += rhs.success;
        self.failed += rhs.failed;
        self.skipped += rhs.skipped;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SeedReport {
    pub materials: SeedResult,
    pub posters: SeedResult,
    pub leaflets: SeedResult,
    pub videos: SeedResult,
    pub total: SeedResult,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClearReport {
    pub materials: u64,
    pub posters: u64,
    pub leaflets: u64,
    pub videos: u64,
    pub comments: u64,
    pub quiz_responses: u64,
    pub total: u64,
}
