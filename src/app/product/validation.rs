//! Product 字段校验
//!
//! 规则按声明顺序依次执行：
//! 1. name 非空
//! 2. description 非空
//! 3. price（提供时）满足配置的正数规则
//!
//! 对外报告第一条失败信息，同时保留全部失败以便调用方需要时读取。

use std::borrow::Cow;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::ValidationError;

use super::model::{ProductDraft, ProductPayload};

/// 价格正数规则
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceRule {
    /// price > 0
    Positive,
    /// price >= 0
    #[default]
    NonNegative,
}

impl PriceRule {
    pub fn accepts(self, price: Decimal) -> bool {
        match self {
            PriceRule::Positive => price > Decimal::ZERO,
            PriceRule::NonNegative => price >= Decimal::ZERO,
        }
    }

    fn message(self) -> &'static str {
        match self {
            PriceRule::Positive => "Price must be positive",
            PriceRule::NonNegative => "Price must not be negative",
        }
    }
}

impl fmt::Display for PriceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceRule::Positive => write!(f, "positive"),
            PriceRule::NonNegative => write!(f, "non_negative"),
        }
    }
}

/// 单个字段的校验失败
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub error: ValidationError,
}

impl FieldError {
    fn new(field: &'static str, code: &'static str, message: &'static str) -> Self {
        let mut error = ValidationError::new(code);
        error.message = Some(Cow::Borrowed(message));
        Self { field, error }
    }

    pub fn message(&self) -> &str {
        self.error
            .message
            .as_deref()
            .unwrap_or_else(|| self.error.code.as_ref())
    }
}

/// 按规则声明顺序收集的校验失败，至少包含一项
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn first(&self) -> &FieldError {
        &self.errors[0]
    }

    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.message().to_string()).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first().message())
    }
}

impl std::error::Error for ValidationErrors {}

type Rule = fn(&ProductPayload, PriceRule) -> Option<FieldError>;

const RULES: [Rule; 5] = [
    name_present,
    name_not_empty,
    description_present,
    description_not_empty,
    price_in_range,
];

fn name_present(p: &ProductPayload, _: PriceRule) -> Option<FieldError> {
    p.name
        .is_none()
        .then(|| FieldError::new("name", "required", "Name cant be null"))
}

fn name_not_empty(p: &ProductPayload, _: PriceRule) -> Option<FieldError> {
    matches!(p.name.as_deref(), Some(""))
        .then(|| FieldError::new("name", "length", "Name is mandatory"))
}

fn description_present(p: &ProductPayload, _: PriceRule) -> Option<FieldError> {
    p.description
        .is_none()
        .then(|| FieldError::new("description", "required", "Description cant be null"))
}

fn description_not_empty(p: &ProductPayload, _: PriceRule) -> Option<FieldError> {
    matches!(p.description.as_deref(), Some(""))
        .then(|| FieldError::new("description", "length", "Description is mandatory"))
}

fn price_in_range(p: &ProductPayload, rule: PriceRule) -> Option<FieldError> {
    match p.price {
        Some(price) if !rule.accepts(price) => Some(FieldError::new("price", "range", rule.message())),
        _ => None,
    }
}

/// 执行全部规则；通过时返回可持久化的草稿
pub fn validate(payload: &ProductPayload, rule: PriceRule) -> Result<ProductDraft, ValidationErrors> {
    let errors: Vec<FieldError> = RULES.iter().filter_map(|check| check(payload, rule)).collect();

    match (&payload.name, &payload.description) {
        (Some(name), Some(description)) if errors.is_empty() => Ok(ProductDraft {
            name: name.clone(),
            description: description.clone(),
            price: payload.price,
        }),
        _ => Err(ValidationErrors { errors }),
    }
}
