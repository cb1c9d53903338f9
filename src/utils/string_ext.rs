//! 字符串扩展工具模块
//!
//! 提供凭证清洗、模型回复清洗等字符串处理辅助函数

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_FENCE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^```(?:json)?\s*").unwrap());
static TRAILING_FENCE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*```$").unwrap());

/// 去除模型回复首尾的 Markdown 代码块标记
///
/// 很多模型喜欢用 ```json ... ``` 包裹 JSON，解析前需要去掉。
///
/// # Example
/// ```ignore
/// assert_eq!(strip_code_fences("```json\n{}\n```"), "{}");
/// ```
pub fn strip_code_fences(text: &str) -> String {
    let trimmed = text.trim();
    let without_head = LEADING_FENCE_REGEX.replace(trimmed, "");
    let without_tail = TRAILING_FENCE_REGEX.replace(&without_head, "");
    without_tail.trim().to_string()
}

/// 去除首尾成对或单侧的引号（" 或 '）
#[inline]
pub fn strip_wrapping_quotes(s: &str) -> &str {
    s.trim_start_matches(['"', '\'']).trim_end_matches(['"', '\''])
}

/// 清洗 API 凭证：去除空白与包裹的引号，空值返回 None
///
/// `.env` 文件中常见 `API_KEY="sk-xxx"` 这类写法。
pub fn sanitize_credential(raw: &str) -> Option<String> {
    strip_wrapping_quotes(raw.trim()).clean()
}

/// 字符串清理扩展 trait
pub trait StringExt {
    /// 清理字符串并返回 Option，空字符串返回 None
    fn clean(&self) -> Option<String>;
}

impl StringExt for str {
    #[inline]
    fn clean(&self) -> Option<String> {
        let trimmed = self.trim();
        if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
    }
}

impl StringExt for String {
    #[inline]
    fn clean(&self) -> Option<String> {
        self.as_str().clean()
    }
}

impl<T: AsRef<str>> StringExt for Option<T> {
    #[inline]
    fn clean(&self) -> Option<String> {
        self.as_ref().and_then(|s| s.as_ref().clean())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fence() {
        let fenced = "```json\n{\"tip\":\"a\",\"timeAdvice\":\"b\"}\n```";
        assert_eq!(strip_code_fences(fenced), "{\"tip\":\"a\",\"timeAdvice\":\"b\"}");
    }

    #[test]
    fn test_strip_fence_parses_like_unwrapped() {
        let raw = r#"{"summary":"总结","keyPoints":["a","b"],"studyTip":"t","trends":"r"}"#;
        let fenced = format!("  ```JSON\n{}\n```  ", raw);
        let cleaned: serde_json::Value = serde_json::from_str(&strip_code_fences(&fenced)).unwrap();
        let expected: serde_json::Value = serde_json::from_str(raw).unwrap();
        assert_eq!(cleaned, expected);
    }

    #[test]
    fn test_strip_bare_fence() {
        assert_eq!(strip_code_fences("```\n[1, 2]\n```"), "[1, 2]");
    }

    #[test]
    fn test_unfenced_text_is_only_trimmed() {
        assert_eq!(strip_code_fences("  {\"a\":1}\n"), "{\"a\":1}");
    }

    #[test]
    fn test_sanitize_credential() {
        assert_eq!(sanitize_credential("  \"sk-123\" \n"), Some("sk-123".to_string()));
        assert_eq!(sanitize_credential("'sk-456'"), Some("sk-456".to_string()));
        assert_eq!(sanitize_credential("sk-789"), Some("sk-789".to_string()));
        assert_eq!(sanitize_credential("  \"\" "), None);
        assert_eq!(sanitize_credential(""), None);
    }

    #[test]
    fn test_clean_option() {
        let value: Option<String> = Some("  x ".to_string());
        assert_eq!(value.clean(), Some("x".to_string()));
        let empty: Option<&str> = Some("   ");
        assert_eq!(empty.clean(), None);
    }
}
