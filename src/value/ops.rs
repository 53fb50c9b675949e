//! Arithmetic and concatenation over [`Value`] pairs.
//!
//! Promotion favors the more general type: a string on the left turns `+`
//! into concatenation, a float on either side turns integer arithmetic
//! into float arithmetic, and division always happens in floats. The
//! operator traits cannot carry a `Result`, so these are explicit fallible
//! methods; the compound forms mutate the left operand and may change its
//! active variant.

use crate::error::ArgError;
use crate::value::{Kind, Value};

/// Apply the int/float pair of a promoting binary operation.
fn numeric(
    lhs: &Value,
    rhs: &Value,
    int_op: fn(i64, i64) -> i64,
    float_op: fn(f64, f64) -> f64,
) -> Result<Value, ArgError> {
    if lhs.kind() == Kind::Float || rhs.kind() == Kind::Float {
        Ok(Value::Float(float_op(lhs.cast()?, rhs.cast()?)))
    } else {
        Ok(Value::Int(int_op(lhs.cast()?, rhs.cast()?)))
    }
}

impl Value {
    /// `self += rhs`.
    ///
    /// With a string on the left this is concatenation and the right side
    /// is stringified; otherwise numeric addition with float promotion.
    /// A string on the right of a non-string left fails.
    pub fn add_assign(&mut self, rhs: impl Into<Value>) -> Result<(), ArgError> {
        let rhs = rhs.into();
        if let Value::Str(s) = self {
            s.push_str(&rhs.to_string());
            return Ok(());
        }
        *self = numeric(self, &rhs, |a, b| a + b, |a, b| a + b)?;
        Ok(())
    }

    /// `self -= rhs`. Not defined for string operands.
    pub fn sub_assign(&mut self, rhs: impl Into<Value>) -> Result<(), ArgError> {
        let rhs = rhs.into();
        *self = numeric(self, &rhs, |a, b| a - b, |a, b| a - b)?;
        Ok(())
    }

    /// `self *= rhs`. Not defined for string operands.
    pub fn mul_assign(&mut self, rhs: impl Into<Value>) -> Result<(), ArgError> {
        let rhs = rhs.into();
        *self = numeric(self, &rhs, |a, b| a * b, |a, b| a * b)?;
        Ok(())
    }

    /// `self /= rhs`. Both operands promote to float, whatever they are.
    pub fn div_assign(&mut self, rhs: impl Into<Value>) -> Result<(), ArgError> {
        let rhs = rhs.into();
        let (a, b): (f64, f64) = (self.cast()?, rhs.cast()?);
        *self = Value::Float(a / b);
        Ok(())
    }

    /// `self + rhs` on a copy of the left operand.
    pub fn add(&self, rhs: impl Into<Value>) -> Result<Value, ArgError> {
        let mut out = self.clone();
        out.add_assign(rhs)?;
        Ok(out)
    }

    /// `self - rhs` on a copy of the left operand.
    pub fn sub(&self, rhs: impl Into<Value>) -> Result<Value, ArgError> {
        let mut out = self.clone();
        out.sub_assign(rhs)?;
        Ok(out)
    }

    /// `self * rhs` on a copy of the left operand.
    pub fn mul(&self, rhs: impl Into<Value>) -> Result<Value, ArgError> {
        let mut out = self.clone();
        out.mul_assign(rhs)?;
        Ok(out)
    }

    /// `self / rhs` on a copy of the left operand.
    pub fn div(&self, rhs: impl Into<Value>) -> Result<Value, ArgError> {
        let mut out = self.clone();
        out.div_assign(rhs)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inferred_int_plus_int_stays_int() {
        let sum = Value::infer("10").add(5).unwrap();
        assert_eq!(sum, Value::Int(15));
    }

    #[test]
    fn inferred_int_plus_float_promotes() {
        let sum = Value::infer("10").add(0.5).unwrap();
        assert_eq!(sum, Value::Float(10.5));
    }

    #[test]
    fn string_left_concatenates() {
        let joined = Value::from("a").add(Value::from("b")).unwrap();
        assert_eq!(joined, Value::Str("ab".to_string()));
    }

    #[test]
    fn string_left_stringifies_numeric_right() {
        let joined = Value::from("n = ").add(10).unwrap();
        assert_eq!(joined, Value::Str("n = 10".to_string()));
    }

    #[test]
    fn string_right_of_numeric_left_fails() {
        assert!(matches!(
            Value::Int(1).add("b"),
            Err(ArgError::Coercion { .. })
        ));
    }

    #[test]
    fn division_always_produces_float() {
        assert_eq!(Value::Int(4).div(2).unwrap(), Value::Float(2.0));
        assert_eq!(Value::Bool(true).div(2).unwrap(), Value::Float(0.5));
    }

    #[test]
    fn subtract_and_multiply_promote_on_float() {
        assert_eq!(Value::Int(1).sub(0.1).unwrap(), Value::Float(0.9));
        assert_eq!(Value::Int(3).mul(4).unwrap(), Value::Int(12));
        assert_eq!(Value::Float(1.5).mul(2).unwrap(), Value::Float(3.0));
    }

    #[test]
    fn subtract_rejects_strings_either_side() {
        assert!(Value::from("a").sub(1).is_err());
        assert!(Value::Int(1).sub("a").is_err());
    }

    #[test]
    fn bools_participate_as_integers() {
        assert_eq!(Value::Bool(true).add(Value::Bool(true)).unwrap(), Value::Int(2));
    }

    #[test]
    fn compound_forms_mutate_in_place() {
        let mut v = Value::from("./");
        v.add_assign("home").unwrap();
        assert_eq!(v, Value::Str("./home".to_string()));

        let mut n = Value::Int(1);
        n.sub_assign(0.1).unwrap();
        assert_eq!(n.kind(), Kind::Float);
    }
}
