use std::fmt;

/// Amounts are plain signed decimals: positive is income, negative is expense.
pub type Amount = f64;

/// Format an amount with two decimal places.
/// Example: 50.0 -> "50.00", -12.5 -> "-12.50"
pub fn format_amount(amount: Amount) -> String {
    format!("{:.2}", amount)
}

/// Parse user input into an amount.
/// Accepts anything that reads as a finite decimal number ("50", "-12.5", "1e3").
pub fn parse_amount(input: &str) -> Result<Amount, ParseAmountError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    let amount: Amount = input
        .parse()
        .map_err(|_| ParseAmountError::InvalidFormat(input.to_string()))?;

    // NaN and infinities would not survive a JSON round trip.
    if !amount.is_finite() {
        return Err(ParseAmountError::NotFinite(input.to_string()));
    }

    Ok(amount)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    Empty,
    InvalidFormat(String),
    NotFinite(String),
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::Empty => write!(f, "amount is empty"),
            ParseAmountError::InvalidFormat(input) => {
                write!(f, "'{}' is not a number", input)
            }
            ParseAmountError::NotFinite(input) => {
                write!(f, "'{}' is not a finite number", input)
            }
        }
    }
}

impl std::error::Error for ParseAmountError {}
