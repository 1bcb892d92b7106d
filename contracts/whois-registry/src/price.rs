use cosmwasm_std::Coin;

use crate::error::ContractError;

/// Parses a `<amount><denom>` price such as `10trycoin`.
///
/// The amount is the first run of ASCII digits and must fit an `i64`. Everything
/// after that run, lower-cased, is the denomination. A zero amount parses to an
/// empty coin list.
pub fn parse_price(price: &str) -> Result<Vec<Coin>, ContractError> {
    let start = price
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| invalid_price(price, "no amount found"))?;
    let rest = &price[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or_else(|| rest.len());

    let amount: i64 = rest[..end]
        .parse()
        .map_err(|e: std::num::ParseIntError| invalid_price(price, &e.to_string()))?;
    let denom = rest[end..].to_lowercase();
    if denom.is_empty() {
        return Err(invalid_price(price, "no denomination found"));
    }

    if amount == 0 {
        return Ok(vec![]);
    }
    Ok(vec![Coin::new(amount as u128, denom)])
}

fn invalid_price(price: &str, reason: &str) -> ContractError {
    ContractError::InvalidPrice {
        price: price.to_string(),
        reason: reason.to_string(),
    }
}
