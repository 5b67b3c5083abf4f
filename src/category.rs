use crate::format::{center, ledger_line, TITLE_WIDTH};
use crate::transaction::Entry;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;
use std::io;

#[derive(Debug, PartialEq)]
pub enum Error {
    InsufficientFunds,
    SameCategory,
    UnknownCategory(String),
}

pub struct CategoriesRepository {
    categories: Vec<Category>,
}

impl CategoriesRepository {
    pub fn new() -> CategoriesRepository {
        CategoriesRepository {
            categories: Default::default(),
        }
    }

    pub fn get_or_create(&mut self, name: &str) -> &mut Category {
        let idx = match self.categories.iter().position(|c| c.name == name) {
            Some(idx) => idx,
            None => {
                self.categories.push(Category::new(name));
                self.categories.len() - 1
            }
        };
        &mut self.categories[idx]
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn position(&self, name: &str) -> Result<usize, Error> {
        self.categories
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| Error::UnknownCategory(name.to_string()))
    }

    pub fn withdraw(&mut self, name: &str, amount: f64, description: &str) -> Result<(), Error> {
        let idx = self.position(name)?;
        if !self.categories[idx].withdraw(amount, description) {
            return Err(Error::InsufficientFunds);
        }

        Ok(())
    }

    pub fn transfer(&mut self, from: &str, to: &str, amount: f64) -> Result<(), Error> {
        let src = self.position(from)?;
        let dst = self.position(to)?;
        if src == dst {
            return Err(Error::SameCategory);
        }

        let (source, target) = if src < dst {
            let (head, tail) = self.categories.split_at_mut(dst);
            (&mut head[src], &mut tail[0])
        } else {
            let (head, tail) = self.categories.split_at_mut(src);
            (&mut tail[0], &mut head[dst])
        };
        if !source.transfer(amount, target) {
            return Err(Error::InsufficientFunds);
        }

        Ok(())
    }

    pub fn write_summary<W: io::Write>(&self, writer: W) -> Result<(), Box<dyn std::error::Error>> {
        let mut wtr = csv::Writer::from_writer(writer);
        for category in &self.categories {
            wtr.serialize(category)?;
        }
        wtr.flush()?;

        Ok(())
    }

    pub fn display_all(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.write_summary(io::stdout())
    }
}

impl Default for CategoriesRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug)]
pub struct Category {
    name: String,
    entries: Vec<Entry>,
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut category = serializer.serialize_struct("Category", 3)?;
        category.serialize_field("category", &self.name)?;
        category.serialize_field("balance", &round_cents(self.balance()))?;
        category.serialize_field("spent", &round_cents(self.spent()))?;
        category.end()
    }
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

impl Category {
    pub fn new(name: &str) -> Category {
        Category {
            name: name.to_string(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn deposit(&mut self, amount: f64, description: &str) {
        self.entries.push(Entry::new(amount, description));
    }

    pub fn withdraw(&mut self, amount: f64, description: &str) -> bool {
        if !self.check_funds(amount) {
            log::debug!(
                "{}: cannot withdraw {:.2}, balance is {:.2}",
                self.name,
                amount,
                self.balance()
            );
            return false;
        }

        self.entries.push(Entry::new(-amount, description));
        true
    }

    // fold from 0.0: an empty f64 sum is -0.0
    pub fn balance(&self) -> f64 {
        self.entries.iter().fold(0.0, |acc, e| acc + e.amount())
    }

    pub fn spent(&self) -> f64 {
        self.entries
            .iter()
            .filter(|e| e.is_withdrawal())
            .fold(0.0, |acc, e| acc + e.amount().abs())
    }

    pub fn transfer(&mut self, amount: f64, target: &mut Category) -> bool {
        let description = format!("Transfer to {}", target.name);
        if !self.withdraw(amount, &description) {
            return false;
        }

        target.deposit(amount, &format!("Transfer from {}", self.name));
        true
    }

    pub fn check_funds(&self, amount: f64) -> bool {
        amount <= 0.0 || amount <= self.balance()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", center(&self.name, TITLE_WIDTH, '*'))?;
        for entry in &self.entries {
            writeln!(f, "{}", ledger_line(entry.description(), entry.amount()))?;
        }
        write!(f, "Total: {:.2}", self.balance())
    }
}
