//! 百分比计算器
//!
//! 三种计算：X% 的 Y、X 占 Y 的百分比、从旧值到新值的变化率。
//! 分母为0时结果为0。

use serde::{Deserialize, Serialize};

/// 变化趋势
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increase,
    Decrease,
    Unchanged,
}

impl Trend {
    pub fn of(change: f64) -> Self {
        if change > 0.0 {
            Trend::Increase
        } else if change < 0.0 {
            Trend::Decrease
        } else {
            Trend::Unchanged
        }
    }

    /// 获取趋势的中文描述
    pub fn description(&self) -> &'static str {
        match self {
            Trend::Increase => "上涨",
            Trend::Decrease => "下降",
            Trend::Unchanged => "持平",
        }
    }
}

/// `percent`% 的 `value`
pub fn percent_of(percent: f64, value: f64) -> f64 {
    percent * value / 100.0
}

/// `value` 占 `total` 的百分比
pub fn what_percent(value: f64, total: f64) -> f64 {
    if total != 0.0 {
        value / total * 100.0
    } else {
        0.0
    }
}

/// 从 `old` 到 `new` 的变化百分比
pub fn percent_change(old: f64, new: f64) -> f64 {
    if old != 0.0 {
        (new - old) / old * 100.0
    } else {
        0.0
    }
}

/// 按数量级格式化数字
pub fn format_number(num: f64) -> String {
    let abs = num.abs();
    if num == 0.0 {
        "0".to_string()
    } else if abs < 0.01 {
        format!("{:.2e}", num)
    } else if abs < 1.0 {
        format!("{:.4}", num)
    } else if abs < 100.0 {
        format!("{:.2}", num)
    } else {
        format!("{:.1}", num)
    }
}

/// 带符号的变化率，非负数前加 `+`
pub fn format_change(change: f64) -> String {
    if change >= 0.0 {
        format!("+{}", format_number(change))
    } else {
        format_number(change)
    }
}

/// 宽松解析数字，取最长的合法数字前缀，无法解析时为0
///
/// 前缀形如 `[+-]digits[.digits][e[+-]digits]`，只扫描一遍。
pub fn parse_number(input: &str) -> f64 {
    let bytes = input.trim().as_bytes();
    let digits_from = |start: usize| {
        start
            + bytes[start..]
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .count()
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - end - 1;
        end = frac_end;
    }

    if mantissa_digits == 0 {
        return 0.0;
    }

    // 指数部分必须带数字，否则不计入前缀
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    std::str::from_utf8(&bytes[..end])
        .ok()
        .and_then(|prefix| prefix.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}
