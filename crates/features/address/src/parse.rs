use crate::error::{AddressError, AddressErrorExt};
use alloy_primitives::hex::FromHexError;
use alloy_primitives::{Address, AddressError as ParseAddressError};
use std::str::FromStr;

const ADDRESS_HEX_LEN: usize = 40;

/// Parses and validates a contract address.
///
/// Accepts an optional `0x` prefix followed by exactly 40 hex digits. Input in a single
/// case is taken as-is; mixed-case input must carry a valid EIP-55 checksum. The zero
/// address is rejected.
///
/// # Errors
/// [`AddressError::InvalidAddress`] for malformed input or a checksum mismatch,
/// [`AddressError::ZeroAddress`] for `0x000…000`.
pub fn parse_address(raw: &str) -> Result<Address, AddressError> {
    let trimmed = raw.trim();
    let digits =
        trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")).unwrap_or(trimmed);

    let address = check_digits(digits)
        .and_then(|()| {
            if is_mixed_case(digits) {
                // EIP-55 parsing wants the prefixed form.
                Address::parse_checksummed(format!("0x{digits}"), None)
            } else {
                Address::from_str(digits).map_err(ParseAddressError::Hex)
            }
        })
        .context(format!("parsing '{trimmed}'"))?;

    if address == Address::ZERO {
        return Err(AddressError::ZeroAddress { value: trimmed.to_owned(), context: None });
    }

    Ok(address)
}

fn check_digits(digits: &str) -> Result<(), ParseAddressError> {
    if digits.len() != ADDRESS_HEX_LEN {
        return Err(ParseAddressError::Hex(FromHexError::InvalidStringLength));
    }
    match digits.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        Some((index, c)) => {
            Err(ParseAddressError::Hex(FromHexError::InvalidHexCharacter { c, index }))
        },
        None => Ok(()),
    }
}

fn is_mixed_case(digits: &str) -> bool {
    let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
    has_lower && digits.bytes().any(|b| b.is_ascii_uppercase())
}
