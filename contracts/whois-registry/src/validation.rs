pub const MIN_NAME_LENGTH: usize = 3;
pub const MAX_NAME_LENGTH: usize = 64;
pub const MAX_ADDRESS_LENGTH: usize = 128;

/// Format rules applied to the `name` and `address` of a whois record.
pub trait WhoisPolicy {
    fn is_valid_name(&self, name: &str) -> bool;
    fn is_valid_address(&self, address: &str) -> bool;
}

/// Names are 3-64 bytes of `[a-z0-9._-]` starting with a letter or digit.
/// Addresses are opaque at this layer: 1-128 bytes of printable ASCII.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultPolicy;

impl WhoisPolicy for DefaultPolicy {
    fn is_valid_name(&self, name: &str) -> bool {
        let bytes = name.as_bytes();
        if bytes.len() < MIN_NAME_LENGTH || bytes.len() > MAX_NAME_LENGTH {
            return false;
        }
        if !bytes[0].is_ascii_lowercase() && !bytes[0].is_ascii_digit() {
            return false;
        }
        bytes
            .iter()
            .all(|b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'.' | b'-' | b'_'))
    }

    fn is_valid_address(&self, address: &str) -> bool {
        let bytes = address.as_bytes();
        if bytes.is_empty() || bytes.len() > MAX_ADDRESS_LENGTH {
            return false;
        }
        bytes.iter().all(|b| b.is_ascii_graphic())
    }
}
