//! Operator overloads for the infallible operations.
//!
//! Division and remainder can fail on a zero divisor, so they stay as the
//! `Result`-returning methods `div`, `rem`, `div_rem`, `div_assign` and
//! `rem_assign` instead of `/` and `%`.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::integer::BigInteger;

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $inherent:path) => {
        impl $trait<&BigInteger> for &BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: &BigInteger) -> BigInteger {
                $inherent(self, rhs)
            }
        }

        impl $trait<BigInteger> for &BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: BigInteger) -> BigInteger {
                $inherent(self, &rhs)
            }
        }

        impl $trait<&BigInteger> for BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: &BigInteger) -> BigInteger {
                $inherent(&self, rhs)
            }
        }

        impl $trait<BigInteger> for BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: BigInteger) -> BigInteger {
                $inherent(&self, &rhs)
            }
        }
    };
}

macro_rules! forward_assign {
    ($trait:ident, $method:ident, $inherent:path) => {
        impl $trait<&BigInteger> for BigInteger {
            fn $method(&mut self, rhs: &BigInteger) {
                *self = $inherent(self, rhs);
            }
        }

        impl $trait<BigInteger> for BigInteger {
            fn $method(&mut self, rhs: BigInteger) {
                *self = $inherent(self, &rhs);
            }
        }
    };
}

forward_binop!(Add, add, BigInteger::add);
forward_binop!(Sub, sub, BigInteger::subtract);
forward_binop!(Mul, mul, BigInteger::multiply);

forward_assign!(AddAssign, add_assign, BigInteger::add);
forward_assign!(SubAssign, sub_assign, BigInteger::subtract);
forward_assign!(MulAssign, mul_assign, BigInteger::multiply);

impl Neg for BigInteger {
    type Output = BigInteger;

    fn neg(mut self) -> BigInteger {
        self.negative = !self.negative;
        self.normalize();
        self
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        self.negated()
    }
}
