use std::fmt;
use std::ops::{Add, Div, Mul, MulAssign};

/// A non-negative quantity stored as its natural logarithm.
///
/// Products become sums of logarithms, so long chains of edge weights neither
/// overflow nor underflow. `Weight::ONE` (log 0) is the default.
#[derive(Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Weight {
    log: f64,
}

impl Weight {
    pub const ONE: Weight = Weight { log: 0.0 };
    pub const ZERO: Weight = Weight {
        log: f64::NEG_INFINITY,
    };

    pub fn new(value: f64) -> Self {
        Self { log: value.ln() }
    }

    pub fn from_log(log: f64) -> Self {
        Self { log }
    }

    pub fn log(self) -> f64 {
        self.log
    }

    pub fn value(self) -> f64 {
        self.log.exp()
    }

    pub fn is_one(self) -> bool {
        self.log == 0.0
    }
}

impl Mul for Weight {
    type Output = Weight;

    fn mul(self, rhs: Weight) -> Weight {
        Weight::from_log(self.log + rhs.log)
    }
}

impl MulAssign for Weight {
    fn mul_assign(&mut self, rhs: Weight) {
        self.log += rhs.log;
    }
}

impl Div for Weight {
    type Output = Weight;

    fn div(self, rhs: Weight) -> Weight {
        Weight::from_log(self.log - rhs.log)
    }
}

/// Log-sum-exp, shifted by the larger operand to stay finite.
impl Add for Weight {
    type Output = Weight;

    fn add(self, rhs: Weight) -> Weight {
        let (hi, lo) = if self.log >= rhs.log {
            (self.log, rhs.log)
        } else {
            (rhs.log, self.log)
        };
        if lo == f64::NEG_INFINITY {
            return Weight::from_log(hi);
        }
        Weight::from_log(hi + (lo - hi).exp().ln_1p())
    }
}

impl fmt::Debug for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Weight({})", self.value())
    }
}
