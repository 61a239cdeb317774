//! IMEI 管理类型

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::utils::imei::{luhn_check_digit, IMEI_BODY_LEN};

/// 终端 IMEI 记录
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImeiRecord {
    /// 终端地址
    pub terminal: String,
    /// 出厂 IMEI
    pub original: String,
    /// 当前生效的 IMEI（可能已被改写）
    pub current: String,
}

impl ImeiRecord {
    /// 当前 IMEI 是否被改写过
    pub fn is_modified(&self) -> bool {
        self.original != self.current
    }
}

/// IMEI 生成模板
///
/// 14 个字符，每个字符为数字或通配符 `x`/`X`；
/// 生成时通配符替换为随机数字，第 15 位由 Luhn 算法计算。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub struct ImeiTemplate {
    pattern: String,
}

impl ImeiTemplate {
    /// 解析并校验模板
    pub fn parse(pattern: &str) -> CoreResult<Self> {
        let pattern = pattern.trim();
        if pattern.chars().count() != IMEI_BODY_LEN {
            return Err(CoreError::ValidationError(format!(
                "IMEI template must be {IMEI_BODY_LEN} characters, got {}",
                pattern.chars().count()
            )));
        }
        if let Some(bad) = pattern
            .chars()
            .find(|c| !c.is_ascii_digit() && !matches!(c, 'x' | 'X'))
        {
            return Err(CoreError::ValidationError(format!(
                "IMEI template contains invalid character '{bad}'"
            )));
        }
        Ok(Self {
            pattern: pattern.to_ascii_lowercase(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// 通配符数量
    pub fn wildcard_count(&self) -> usize {
        self.pattern.chars().filter(|c| *c == 'x').count()
    }

    /// 按模板生成一个 Luhn 校验通过的 IMEI
    pub fn generate<R: Rng>(&self, rng: &mut R) -> String {
        let mut body: String = self
            .pattern
            .chars()
            .map(|c| {
                if c == 'x' {
                    char::from(b'0' + rng.random_range(0..10u8))
                } else {
                    c
                }
            })
            .collect();
        // 主体已保证为 14 位数字
        let check = luhn_check_digit(&body).unwrap_or(0);
        body.push(char::from(b'0' + check));
        body
    }
}

impl TryFrom<String> for ImeiTemplate {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ImeiTemplate> for String {
    fn from(value: ImeiTemplate) -> Self {
        value.pattern
    }
}

impl std::fmt::Display for ImeiTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::imei::is_valid_imei;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(matches!(
            ImeiTemplate::parse("8612345"),
            Err(CoreError::ValidationError(_))
        ));
    }

    #[test]
    fn parse_rejects_bad_characters() {
        assert!(ImeiTemplate::parse("8612345678901?").is_err());
    }

    #[test]
    fn parse_normalizes_wildcards() {
        let t = ImeiTemplate::parse(" 86123456XXXXXX ").unwrap();
        assert_eq!(t.as_str(), "86123456xxxxxx");
        assert_eq!(t.wildcard_count(), 6);
    }

    #[test]
    fn generated_imeis_pass_luhn_and_keep_fixed_digits() {
        let t = ImeiTemplate::parse("86123456xxxxxx").unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let imei = t.generate(&mut rng);
            assert_eq!(imei.len(), 15);
            assert!(imei.starts_with("86123456"));
            assert!(is_valid_imei(&imei), "{imei} should be valid");
        }
    }

    #[test]
    fn fully_fixed_template_is_deterministic() {
        let t = ImeiTemplate::parse("49015420323751").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(t.generate(&mut rng), "490154203237518");
    }

    #[test]
    fn template_deserialization_validates() {
        let ok: Result<ImeiTemplate, _> = serde_json::from_str("\"35xxxxxxxxxxxx\"");
        assert!(ok.is_ok());
        let bad: Result<ImeiTemplate, _> = serde_json::from_str("\"35\"");
        assert!(bad.is_err());
    }
}
