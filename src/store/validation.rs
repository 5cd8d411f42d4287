use crate::error::ValidationError;
use crate::models::CreateTransactionInput;

/// Checks applied to a create input before it leaves the process.
///
/// The default rule set is empty: input goes to the remote store untouched and
/// the remote store decides what it accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationRules {
    pub require_description: bool,
    pub require_category: bool,
    pub require_positive_price: bool,
}

impl ValidationRules {
    /// Forward everything as-is
    pub fn none() -> Self {
        Self::default()
    }

    /// Non-blank description and category, finite price above zero
    pub fn strict() -> Self {
        Self {
            require_description: true,
            require_category: true,
            require_positive_price: true,
        }
    }

    pub fn validate(&self, input: &CreateTransactionInput) -> Result<(), ValidationError> {
        if self.require_description && input.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if self.require_category && input.category.trim().is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        if self.require_positive_price && !(input.price.is_finite() && input.price > 0.0) {
            return Err(ValidationError::InvalidPrice(input.price));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;

    #[test]
    fn test_default_rules_accept_anything() {
        let input = CreateTransactionInput::new("", -5.0, "", TransactionType::Income);
        assert_eq!(ValidationRules::none().validate(&input), Ok(()));
    }

    #[test]
    fn test_strict_rules() {
        let rules = ValidationRules::strict();

        let ok = CreateTransactionInput::new("Lunch", 20.0, "Food", TransactionType::Outcome);
        assert_eq!(rules.validate(&ok), Ok(()));

        let blank = CreateTransactionInput::new("   ", 20.0, "Food", TransactionType::Outcome);
        assert_eq!(rules.validate(&blank), Err(ValidationError::EmptyDescription));

        let no_category = CreateTransactionInput::new("Lunch", 20.0, "", TransactionType::Outcome);
        assert_eq!(rules.validate(&no_category), Err(ValidationError::EmptyCategory));

        let zero = CreateTransactionInput::new("Lunch", 0.0, "Food", TransactionType::Outcome);
        assert_eq!(rules.validate(&zero), Err(ValidationError::InvalidPrice(0.0)));

        let nan = CreateTransactionInput::new("Lunch", f64::NAN, "Food", TransactionType::Outcome);
        assert!(matches!(rules.validate(&nan), Err(ValidationError::InvalidPrice(_))));
    }
}
