use rust_decimal::Decimal;

use crate::errors::AppError;

/// Whether a field holds something other than its zero value.
pub trait Presence {
    fn is_present(&self) -> bool;
}

impl Presence for String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for &str {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for Decimal {
    fn is_present(&self) -> bool {
        !self.is_zero()
    }
}

impl<T> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.is_some()
    }
}

macro_rules! impl_presence_for_ints {
    ($($ty:ty),*) => {
        $(
            impl Presence for $ty {
                fn is_present(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_presence_for_ints!(i16, i32, i64, u16, u32, u64, usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constraint {
    Required,
    Optional,
}

pub struct FieldRule<'a> {
    /// Name as it appears on the wire, e.g. `user_id`.
    pub name: &'static str,
    pub constraint: Constraint,
    pub value: &'a dyn Presence,
}

impl<'a> FieldRule<'a> {
    pub fn required(name: &'static str, value: &'a dyn Presence) -> Self {
        Self {
            name,
            constraint: Constraint::Required,
            value,
        }
    }

    pub fn optional(name: &'static str, value: &'a dyn Presence) -> Self {
        Self {
            name,
            constraint: Constraint::Optional,
            value,
        }
    }

    fn is_violated(&self) -> bool {
        self.constraint == Constraint::Required && !self.value.is_present()
    }
}

/// A payload that can describe the constraints on its fields.
pub trait Constrained {
    /// Rules in declaration order. Failures are reported in this order.
    fn rules(&self) -> Vec<FieldRule<'_>>;
}

/// Turns constraint violations on a payload into a single validation error.
#[derive(Clone, Copy, Debug, Default)]
pub struct FieldValidator;

impl FieldValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate<T>(&self, payload: &T) -> Result<(), AppError>
    where
        T: Constrained + ?Sized,
    {
        let failures: Vec<String> = payload
            .rules()
            .iter()
            .filter(|rule| rule.is_violated())
            .map(|rule| format!("Field {} is required", rule.name))
            .collect();

        if failures.is_empty() {
            return Ok(());
        }

        Err(AppError::Validation(failures.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::*;

    struct Unconstrained;

    impl Constrained for Unconstrained {
        fn rules(&self) -> Vec<FieldRule<'_>> {
            Vec::new()
        }
    }

    #[derive(Default)]
    struct Payload {
        a: String,
        b: i32,
        note: Option<String>,
        amount: Decimal,
    }

    impl Constrained for Payload {
        fn rules(&self) -> Vec<FieldRule<'_>> {
            vec![
                FieldRule::required("A", &self.a),
                FieldRule::required("B", &self.b),
                FieldRule::optional("note", &self.note),
                FieldRule::optional("amount", &self.amount),
            ]
        }
    }

    #[test]
    fn unconstrained_payload_always_passes() {
        assert_eq!(FieldValidator::new().validate(&Unconstrained), Ok(()));
    }

    #[test]
    fn missing_fields_are_joined_in_order() {
        let err = FieldValidator::new()
            .validate(&Payload::default())
            .unwrap_err();

        assert_eq!(
            err,
            AppError::validation("Field A is required, Field B is required")
        );
    }

    #[test]
    fn single_missing_field() {
        let payload = Payload {
            a: "present".into(),
            ..Default::default()
        };

        assert_eq!(
            FieldValidator::new().validate(&payload),
            Err(AppError::validation("Field B is required"))
        );
    }

    #[test]
    fn populated_payload_passes() {
        let payload = Payload {
            a: "present".into(),
            b: 1,
            note: None,
            amount: dec!(0),
        };

        assert!(FieldValidator::new().validate(&payload).is_ok());
    }

    #[test]
    fn zero_values_are_absent() {
        assert!(!String::new().is_present());
        assert!(!0i64.is_present());
        assert!(!Decimal::ZERO.is_present());
        assert!(!None::<u8>.is_present());
        assert!(Some(0u8).is_present());
        assert!(dec!(0.01).is_present());
    }
}
