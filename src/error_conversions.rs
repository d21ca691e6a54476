//! Error conversion glue between layers.
//!
//! Domain value objects report [`TypeConstraintError`]; request parsing lifts
//! it into [`FormError`] so `?` works when building domain values from forms.

use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;

impl From<TypeConstraintError> for FormError {
    fn from(val: TypeConstraintError) -> Self {
        FormError::TypeConstraint(val.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_constraint_errors_keep_their_message() {
        let err = FormError::from(TypeConstraintError::QueryTooShort);
        assert_eq!(
            err.to_string(),
            "invalid parameter: query must contain at least 2 characters"
        );
    }
}
