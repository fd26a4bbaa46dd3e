/// Smallest max RU/s an autoscale resource can be provisioned with.
pub const MIN_AUTOSCALE_THROUGHPUT: u64 = 4000;

/// Autoscale max RU/s must be a multiple of this increment.
pub const AUTOSCALE_INCREMENT: u64 = 1000;

/// Decides whether an autoscale max throughput can be persisted.
pub trait AutoscaleValidator {
    fn is_valid_autoscale_throughput(&self, value: u64) -> bool;
}

impl<F> AutoscaleValidator for F
where
    F: Fn(u64) -> bool,
{
    fn is_valid_autoscale_throughput(&self, value: u64) -> bool {
        self(value)
    }
}

/// Step-based validity: positive, at least `minimum`, and a multiple of `increment`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoscaleSteps {
    pub minimum: u64,
    pub increment: u64,
}

impl AutoscaleSteps {
    pub fn new(minimum: u64, increment: u64) -> Self {
        Self { minimum, increment }
    }
}

impl Default for AutoscaleSteps {
    fn default() -> Self {
        Self::new(MIN_AUTOSCALE_THROUGHPUT, AUTOSCALE_INCREMENT)
    }
}

impl AutoscaleValidator for AutoscaleSteps {
    fn is_valid_autoscale_throughput(&self, value: u64) -> bool {
        if value == 0 || value < self.minimum {
            return false;
        }
        // A zero increment means any value above the minimum is acceptable.
        self.increment == 0 || value % self.increment == 0
    }
}
