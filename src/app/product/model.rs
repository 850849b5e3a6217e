//! Product 数据模型

use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// 已持久化的产品记录
///
/// `id` 由存储层在首次保存时分配，之后不再改变；未保存前为空字符串。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct Product {
    /// The product id
    #[serde(default)]
    #[schema(example = "2c1e7f0a-6b0e-4d5a-9a51-0c3f7d3b8e21")]
    pub id: String,
    /// The name of the product
    #[schema(example = "name")]
    pub name: String,
    /// A short description to the product
    #[schema(example = "Description")]
    pub description: String,
    /// The price of the product
    #[schema(value_type = Option<f64>, example = 10.0)]
    pub price: Option<Decimal>,
}

impl Product {
    /// 由校验通过的草稿构造一条尚未持久化的记录
    pub fn from_draft(draft: ProductDraft) -> Self {
        Self {
            id: String::new(),
            name: draft.name,
            description: draft.description,
            price: draft.price,
        }
    }

    /// 用草稿覆盖可变字段，保留原有 id
    pub fn apply(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.price = draft.price;
    }
}

/// 创建 / 更新请求体
///
/// 所有字段都可缺省，缺省与 `null` 等价，由校验层决定是否合法。
/// 未声明的键（包括 `id`）按未知字段忽略，不参与解析。
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ProductPayload {
    /// Required, must not be empty
    #[serde(default)]
    #[schema(example = "name")]
    pub name: Option<String>,
    /// Required, must not be empty
    #[serde(default)]
    #[schema(example = "Description")]
    pub description: Option<String>,
    /// Optional, checked against the configured price rule
    #[serde(default)]
    #[schema(value_type = Option<f64>, example = 10.0)]
    pub price: Option<Decimal>,
}

/// 通过校验的请求体
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: Option<Decimal>,
}

/// 查询参数: `q`, `min_price`, `max_price`
///
/// 价格参数为空字符串时视为未提供。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductFilter {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub min_price: Option<Decimal>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub max_price: Option<Decimal>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(|e| de::Error::custom(format!("invalid decimal `{}`: {}", raw, e))),
        _ => Ok(None),
    }
}

impl ProductFilter {
    /// 没有任何生效的条件
    pub fn is_empty(&self) -> bool {
        self.q.is_none() && self.min_price.is_none() && self.max_price.is_none()
    }

    /// 所有条件取与；未提供的条件视为恒真
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_query(product) && self.matches_price(product)
    }

    // 区分大小写的子串匹配
    fn matches_query(&self, product: &Product) -> bool {
        match &self.q {
            Some(q) => product.name.contains(q.as_str()) || product.description.contains(q.as_str()),
            None => true,
        }
    }

    // 没有价格的产品不满足任何价格边界
    fn matches_price(&self, product: &Product) -> bool {
        if self.min_price.is_none() && self.max_price.is_none() {
            return true;
        }

        let Some(price) = product.price else {
            return false;
        };

        self.min_price.map_or(true, |min| price >= min)
            && self.max_price.map_or(true, |max| price <= max)
    }
}
