use crate::parser::arbitrary_tx_amount;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    amount: f64,
    description: String,
}

impl Entry {
    pub fn new(amount: f64, description: impl Into<String>) -> Entry {
        Entry {
            amount,
            description: description.into(),
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_withdrawal(&self) -> bool {
        self.amount < 0.0
    }
}

#[derive(Copy, Debug, Clone, PartialOrd, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
    Deposit,
    Withdraw,
    Transfer,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Operation {
    r#type: Type,
    category: String,
    #[serde(default, deserialize_with = "arbitrary_tx_amount")]
    amount: f64,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    target: Option<String>,
}

impl Operation {
    pub fn deposit(category: &str, amount: f64, description: &str) -> Operation {
        Operation {
            r#type: Type::Deposit,
            category: category.to_string(),
            amount,
            description: Some(description.to_string()),
            target: None,
        }
    }

    pub fn withdraw(category: &str, amount: f64, description: &str) -> Operation {
        Operation {
            r#type: Type::Withdraw,
            category: category.to_string(),
            amount,
            description: Some(description.to_string()),
            target: None,
        }
    }

    pub fn transfer(category: &str, amount: f64, target: &str) -> Operation {
        Operation {
            r#type: Type::Transfer,
            category: category.to_string(),
            amount,
            description: None,
            target: Some(target.to_string()),
        }
    }

    pub fn r#type(&self) -> Type {
        self.r#type
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}
