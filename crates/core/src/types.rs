use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 组件 prop 值
///
/// untagged 反序列化与 JS 侧的值形态一一对应：
/// 数字、字符串、或用于响应式断点的数组。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    /// 数字（如 `0.5`、`4`）
    Number(f64),
    /// 字符串（如 `"100px"`、`"red"`）
    Text(String),
    /// 有序数组，每个位置对应一个断点
    List(Vec<PropValue>),
}

impl PropValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, PropValue::List(_))
    }

    /// 渲染为 CSS 值文本
    ///
    /// 数字按 JS 习惯输出：整数值不带小数部分（`1.0` → `"1"`）。
    /// 数组用逗号拼接。
    pub fn to_css(&self) -> String {
        match self {
            PropValue::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            PropValue::Text(s) => s.clone(),
            PropValue::List(items) => {
                let parts: Vec<String> = items.iter().map(|v| v.to_css()).collect();
                parts.join(",")
            }
        }
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Number(n)
    }
}

impl From<i32> for PropValue {
    fn from(n: i32) -> Self {
        PropValue::Number(n as f64)
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Text(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Text(s)
    }
}

/// 组件 props：短标识符 -> 值，保持插入顺序，调用方持有、对本系统只读
pub type Props = IndexMap<String, PropValue>;

/// 从 JSON 对象字符串加载 props
pub fn props_from_json(json: &str) -> Result<Props, serde_json::Error> {
    serde_json::from_str(json)
}

/// 样式请求：要处理的属性列表与命名配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleRequest {
    /// 要处理的连字符属性名（有序）
    pub prop_list: Vec<String>,
    /// 组件名，用于自定义属性命名
    pub component_name: String,
    /// 命名空间前缀，避免组件库之间的命名冲突
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// 断点名列表，位置对应响应式数组下标
    #[serde(default = "default_breakpoints")]
    pub breakpoints: Vec<String>,
}

impl StyleRequest {
    /// 用默认命名空间和断点创建请求
    pub fn new(prop_list: Vec<String>, component_name: impl Into<String>) -> Self {
        Self {
            prop_list,
            component_name: component_name.into(),
            namespace: default_namespace(),
            breakpoints: default_breakpoints(),
        }
    }
}

fn default_namespace() -> String {
    "sui".to_string()
}

fn default_breakpoints() -> Vec<String> {
    vec![
        "mobile".to_string(),
        "tablet".to_string(),
        "desktop".to_string(),
    ]
}

/// 应用结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyResult {
    /// 实际写入的自定义属性名，按写入顺序
    pub written: Vec<String>,
    /// 警告/错误
    pub diagnostics: Vec<Diagnostic>,
}

/// 诊断信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticLevel {
    Warning,
    Error,
}
