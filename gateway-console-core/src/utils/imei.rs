//! IMEI 校验工具
//!
//! IMEI 为 15 位数字：14 位主体（TAC + 序列号）加 1 位 Luhn 校验位。

/// IMEI 主体长度（不含校验位）
pub const IMEI_BODY_LEN: usize = 14;

/// IMEI 总长度
pub const IMEI_LEN: usize = 15;

/// 计算 14 位主体的 Luhn 校验位
///
/// 主体包含非数字字符或长度不为 14 时返回 `None`。
pub fn luhn_check_digit(body: &str) -> Option<u8> {
    if body.len() != IMEI_BODY_LEN {
        return None;
    }

    let mut sum = 0u32;
    for (i, c) in body.chars().enumerate() {
        let digit = c.to_digit(10)?;
        // 从左数第偶数位（下标为奇数）需要加倍
        let value = if i % 2 == 1 {
            let doubled = digit * 2;
            if doubled > 9 {
                doubled - 9
            } else {
                doubled
            }
        } else {
            digit
        };
        sum += value;
    }

    u8::try_from((10 - sum % 10) % 10).ok()
}

/// 校验完整 IMEI
pub fn is_valid_imei(imei: &str) -> bool {
    if imei.len() != IMEI_LEN || !imei.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    let (body, check) = imei.split_at(IMEI_BODY_LEN);
    match (luhn_check_digit(body), check.chars().next().and_then(|c| c.to_digit(10))) {
        (Some(expected), Some(actual)) => u32::from(expected) == actual,
        _ => false,
    }
}

/// 截取 IMEI 的 TAC（前 8 位）
pub fn tac(imei: &str) -> Option<&str> {
    imei.get(..8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_digit_matches_known_imei() {
        assert_eq!(luhn_check_digit("49015420323751"), Some(8));
        assert!(is_valid_imei("490154203237518"));
    }

    #[test]
    fn rejects_wrong_check_digit() {
        assert!(!is_valid_imei("490154203237519"));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(luhn_check_digit("4901542032375"), None);
        assert_eq!(luhn_check_digit("4901542032375a"), None);
        assert!(!is_valid_imei("49015420323751"));
        assert!(!is_valid_imei("49015420323751x"));
    }

    #[test]
    fn tac_prefix() {
        assert_eq!(tac("490154203237518"), Some("49015420"));
        assert_eq!(tac("123"), None);
    }
}
