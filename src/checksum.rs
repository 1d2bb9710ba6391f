//! Check-digit validation for UPC/EAN product numbers.

/// Computes the standard UPC/EAN check digit for `body`, the digits before
/// the check position. Weights alternate 3/1 starting from the rightmost
/// body digit.
pub(crate) fn standard_check_digit(body: &str) -> Option<u32> {
    if body.is_empty() {
        return None;
    }
    let mut sum = 0;
    for (i, ch) in body.chars().rev().enumerate() {
        let digit = ch.to_digit(10)?;
        sum += if i % 2 == 0 { 3 * digit } else { digit };
    }
    Some((10 - sum % 10) % 10)
}

/// True when the trailing digit of `digits` matches the weighted mod-10
/// checksum of the preceding digits.
pub(crate) fn validate_check_digit(digits: &str) -> bool {
    if digits.len() < 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let (body, check) = digits.split_at(digits.len() - 1);
    standard_check_digit(body) == check.chars().next().and_then(|c| c.to_digit(10))
}

/// Expands an 8-digit UPC-E number (number system, six payload digits,
/// check digit) to its 12-digit UPC-A equivalent. The check digit carries
/// over unchanged; callers validate it against the expansion.
pub(crate) fn expand_upce(upce: &str) -> Option<String> {
    let bytes = upce.as_bytes();
    if bytes.len() != 8 || !bytes.iter().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let payload = &upce[1..7];
    let last = bytes[6];
    let mut upca = String::with_capacity(12);
    upca.push(bytes[0] as char);
    match last {
        b'0' | b'1' | b'2' => {
            upca.push_str(&payload[0..2]);
            upca.push(last as char);
            upca.push_str("0000");
            upca.push_str(&payload[2..5]);
        }
        b'3' => {
            upca.push_str(&payload[0..3]);
            upca.push_str("00000");
            upca.push_str(&payload[3..5]);
        }
        b'4' => {
            upca.push_str(&payload[0..4]);
            upca.push_str("00000");
            upca.push_str(&payload[4..5]);
        }
        _ => {
            upca.push_str(&payload[0..5]);
            upca.push_str("0000");
            upca.push(last as char);
        }
    }
    upca.push(bytes[7] as char);
    Some(upca)
}
