use std::num::ParseIntError;

/// Parse a mask written in decimal, `0x` hex or `0b` binary.
pub(crate) fn parse_mask(input: &str) -> Result<u64, ParseIntError> {
    let input = input.trim().replace('_', "");
    if let Some(hex) = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        u64::from_str_radix(hex, 16)
    } else if let Some(bin) = input
        .strip_prefix("0b")
        .or_else(|| input.strip_prefix("0B"))
    {
        u64::from_str_radix(bin, 2)
    } else {
        input.parse()
    }
}
