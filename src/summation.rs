//! Compensated summation shared by the mass-based measures.

/// Sums `values` with Kahan–Babuška (Neumaier) compensation.
///
/// Accumulates a running compensation term so that the lost low-order
/// bits of each addition are restored at the end, giving O(ε) error
/// independent of the number of terms.
///
/// Reference: Neumaier (1974), "Rundungsfehleranalyse einiger Verfahren
/// zur Summation endlicher Summen", *ZAMM* 54(1).
pub(crate) fn kahan_sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut acc = CompensatedSum::default();
    for x in values {
        acc.add(x);
    }
    acc.value()
}

/// Streaming form of [`kahan_sum`] for callers that need every partial sum.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct CompensatedSum {
    sum: f64,
    c: f64,
}

impl CompensatedSum {
    pub(crate) fn add(&mut self, x: f64) {
        let t = self.sum + x;
        if self.sum.abs() >= x.abs() {
            self.c += (self.sum - t) + x;
        } else {
            self.c += (x - t) + self.sum;
        }
        self.sum = t;
    }

    pub(crate) fn value(&self) -> f64 {
        self.sum + self.c
    }
}
