//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象，用于封装不可变的概念性值与校验逻辑。
//!
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DomainError, DomainResult};

/// 链接别名（slug）：小写字母、数字与连字符组成的标识
///
/// 构造时对输入做规范化：去除首尾空白、转小写、空白与下划线折叠为连字符、
/// 丢弃其余非法字符、折叠并裁剪连字符。规范化后为空视为非法输入。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    pub fn new(input: &str) -> DomainResult<Self> {
        let mut normalized = String::with_capacity(input.len());
        let mut last_hyphen = true; // 抑制开头的连字符

        for ch in input.trim().chars() {
            let ch = match ch {
                c if c.is_whitespace() || c == '_' || c == '-' => '-',
                c => c.to_ascii_lowercase(),
            };
            match ch {
                'a'..='z' | '0'..='9' => {
                    normalized.push(ch);
                    last_hyphen = false;
                }
                '-' if !last_hyphen => {
                    normalized.push('-');
                    last_hyphen = true;
                }
                _ => {}
            }
        }
        while normalized.ends_with('-') {
            normalized.pop();
        }

        if normalized.is_empty() {
            return Err(DomainError::InvalidValue {
                reason: "slug contains no valid characters".into(),
            });
        }
        Ok(Self(normalized))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 名称：去除首尾空白、非空且不超过 100 个字符
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub const MAX_LEN: usize = 100;

    pub fn new(input: &str) -> DomainResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidValue {
                reason: "name must not be empty".into(),
            });
        }
        if trimmed.chars().count() > Self::MAX_LEN {
            return Err(DomainError::InvalidValue {
                reason: format!("name must not exceed {} characters", Self::MAX_LEN),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
