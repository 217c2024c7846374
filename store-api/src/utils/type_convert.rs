//! JSON 字段类型转换
//!
//! 入参是无固定 schema 的 JSON, 同一数值字段既可能是数字也可能是字符串。

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

/// 将 JSON 数字或数字字符串解析为 Decimal; 其余类型返回 None
pub fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(number) => parse_decimal(&number.to_string()),
        Value::String(text) => parse_decimal(text.trim()),
        _ => None,
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}
