use serde::{Deserialize, Serialize};

use crate::catalog::CatalogError;

/// The classic fourteen-rung ladder, lowest first.
const CLASSIC_VALUES: [u64; 14] = [
    100, 250, 500, 1_000, 2_000, 4_000, 8_000, 16_000, 32_000, 64_000, 125_000, 250_000, 500_000,
    1_000_000,
];

/// One rung of the prize ladder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LadderStep {
    /// Rung position (0 = lowest prize).
    pub rung: usize,

    /// Prize amount at this rung.
    pub value: u64,
}

impl LadderStep {
    #[must_use]
    pub const fn new(rung: usize, value: u64) -> Self {
        Self { rung, value }
    }

    /// Prize amount with thousands separators, e.g. `"125,000"`.
    #[must_use]
    pub fn label(&self) -> String {
        let digits = self.value.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }
}

impl std::fmt::Display for LadderStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Ordered, non-empty, immutable prize ladder.
///
/// ```
/// use ladder_quiz::ladder::PrizeLadder;
///
/// let ladder = PrizeLadder::classic();
/// assert_eq!(ladder.len(), 14);
/// assert_eq!(ladder.get(0).unwrap().label(), "100");
/// assert_eq!(ladder.get(ladder.max_rung()).unwrap().label(), "1,000,000");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u64>", into = "Vec<u64>")]
pub struct PrizeLadder {
    steps: Vec<LadderStep>,
}

impl PrizeLadder {
    /// The fourteen-rung ladder from 100 to 1,000,000.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            steps: Self::number(CLASSIC_VALUES),
        }
    }

    /// Build a ladder from prize values, lowest rung first.
    pub fn from_values(values: impl IntoIterator<Item = u64>) -> Result<Self, CatalogError> {
        let steps = Self::number(values);
        if steps.is_empty() {
            return Err(CatalogError::EmptyLadder);
        }
        Ok(Self { steps })
    }

    fn number(values: impl IntoIterator<Item = u64>) -> Vec<LadderStep> {
        values
            .into_iter()
            .enumerate()
            .map(|(rung, value)| LadderStep::new(rung, value))
            .collect()
    }

    /// Check that every question has a rung to land on.
    pub fn check_covers(&self, question_count: usize) -> Result<(), CatalogError> {
        if self.steps.len() < question_count {
            return Err(CatalogError::LadderTooShort {
                rungs: self.steps.len(),
                questions: question_count,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn get(&self, rung: usize) -> Option<&LadderStep> {
        self.steps.get(rung)
    }

    /// Index of the top rung.
    #[must_use]
    pub fn max_rung(&self) -> usize {
        self.steps.len() - 1
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Rungs lowest first.
    #[must_use]
    pub fn steps(&self) -> &[LadderStep] {
        &self.steps
    }

    /// Rungs highest first, the order a ladder is drawn in.
    pub fn top_down(&self) -> impl Iterator<Item = &LadderStep> {
        self.steps.iter().rev()
    }
}

impl Default for PrizeLadder {
    fn default() -> Self {
        Self::classic()
    }
}

impl TryFrom<Vec<u64>> for PrizeLadder {
    type Error = CatalogError;

    fn try_from(values: Vec<u64>) -> Result<Self, Self::Error> {
        Self::from_values(values)
    }
}

impl From<PrizeLadder> for Vec<u64> {
    fn from(ladder: PrizeLadder) -> Self {
        ladder.steps.into_iter().map(|s| s.value).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_ladder() {
        let ladder = PrizeLadder::classic();
        assert_eq!(ladder.len(), 14);
        assert_eq!(ladder.max_rung(), 13);
        for (i, step) in ladder.steps().iter().enumerate() {
            assert_eq!(step.rung, i);
        }
        assert_eq!(ladder.get(10).unwrap().value, 125_000);
    }

    #[test]
    fn test_labels() {
        assert_eq!(LadderStep::new(0, 100).label(), "100");
        assert_eq!(LadderStep::new(0, 1_000).label(), "1,000");
        assert_eq!(LadderStep::new(0, 64_000).label(), "64,000");
        assert_eq!(LadderStep::new(0, 125_000).label(), "125,000");
        assert_eq!(format!("{}", LadderStep::new(0, 1_000_000)), "1,000,000");
    }

    #[test]
    fn test_top_down() {
        let ladder = PrizeLadder::from_values([1, 2, 3]).unwrap();
        let values: Vec<_> = ladder.top_down().map(|s| s.value).collect();
        assert_eq!(values, vec![3, 2, 1]);
    }

    #[test]
    fn test_empty_ladder_rejected() {
        assert!(matches!(PrizeLadder::from_values(Vec::new()), Err(CatalogError::EmptyLadder)));
    }

    #[test]
    fn test_check_covers() {
        let ladder = PrizeLadder::from_values([10, 20]).unwrap();
        assert!(ladder.check_covers(2).is_ok());
        assert!(matches!(
            ladder.check_covers(3),
            Err(CatalogError::LadderTooShort { rungs: 2, questions: 3 })
        ));
    }

    #[test]
    fn test_ladder_serde() {
        let ladder = PrizeLadder::from_values([5, 50, 500]).unwrap();
        let json = serde_json::to_string(&ladder).unwrap();
        assert_eq!(json, "[5,50,500]");

        let back: PrizeLadder = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ladder);
        assert!(serde_json::from_str::<PrizeLadder>("[]").is_err());
    }
}
