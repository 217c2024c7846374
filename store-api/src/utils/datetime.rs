//! 时间格式化工具

use chrono::{DateTime, Utc};

/// 常用日期时间格式常量
pub mod formats {
    /// 标准日期时间格式: YYYY-MM-DD HH:MM:SS
    pub const DATETIME: &str = "%Y-%m-%d %H:%M:%S";
}

/// 格式化为标准日期时间字符串
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format(formats::DATETIME).to_string()
}
