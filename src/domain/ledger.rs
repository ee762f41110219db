use super::{Amount, Transaction};

/// Compute the balance of a ledger.
/// Balance = sum of all amounts (income positive, expenses negative)
pub fn compute_balance<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Amount {
    // Folding from +0.0 keeps an empty ledger from summing to -0.0
    transactions.into_iter().fold(0.0, |balance, t| balance + t.amount)
}

/// Total spent in a single category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Amount,
}

/// Expense totals per category, in the order categories were first seen.
/// Categories without any expense are absent rather than zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTotals {
    totals: Vec<CategoryTotal>,
}

impl CategoryTotals {
    pub fn get(&self, category: &str) -> Option<Amount> {
        self.totals
            .iter()
            .find(|t| t.category == category)
            .map(|t| t.total)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.totals.iter()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    fn add(&mut self, category: &str, amount: Amount) {
        match self.totals.iter_mut().find(|t| t.category == category) {
            Some(existing) => existing.total += amount,
            None => self.totals.push(CategoryTotal {
                category: category.to_string(),
                total: amount,
            }),
        }
    }
}

impl<'a> IntoIterator for &'a CategoryTotals {
    type Item = &'a CategoryTotal;
    type IntoIter = std::slice::Iter<'a, CategoryTotal>;

    fn into_iter(self) -> Self::IntoIter {
        self.totals.iter()
    }
}

/// Sum the absolute value of every expense, grouped by category.
pub fn compute_category_totals<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
) -> CategoryTotals {
    let mut totals = CategoryTotals::default();

    for transaction in transactions.into_iter().filter(|t| t.is_expense()) {
        totals.add(&transaction.category, transaction.amount.abs());
    }

    totals
}
