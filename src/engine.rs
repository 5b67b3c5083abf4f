use crate::category::CategoriesRepository;
use crate::transaction::{Operation, Type};

pub struct Engine<'a> {
    pub categories: &'a mut CategoriesRepository,
}

impl Engine<'_> {
    pub fn new<'a>(categories: &'a mut CategoriesRepository) -> Engine<'a> {
        Engine { categories }
    }

    fn deposit(&mut self, op: &Operation) {
        self.categories
            .get_or_create(op.category())
            .deposit(op.amount(), op.description());
    }

    fn withdraw(&mut self, op: &Operation) {
        self.categories.get_or_create(op.category());
        if let Err(err) = self
            .categories
            .withdraw(op.category(), op.amount(), op.description())
        {
            log::warn!("could not withdraw from {}: {:?}", op.category(), err)
        }
    }

    fn transfer(&mut self, op: &Operation) {
        let target = match op.target() {
            Some(target) => target,
            None => {
                log::warn!("transfer from {} has no target", op.category());
                return;
            }
        };
        self.categories.get_or_create(op.category());
        self.categories.get_or_create(target);
        if let Err(err) = self
            .categories
            .transfer(op.category(), target, op.amount())
        {
            log::warn!(
                "could not transfer from {} to {}: {:?}",
                op.category(),
                target,
                err
            )
        }
    }

    pub fn process(&mut self, operations: &[Operation]) {
        for op in operations {
            match op.r#type() {
                Type::Deposit => self.deposit(op),
                Type::Withdraw => self.withdraw(op),
                Type::Transfer => self.transfer(op),
            }
        }
    }
}
