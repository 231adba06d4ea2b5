//! 自定义属性与主题 token 的命名
//!
//! 命名格式需要与消费侧的样式表逐字节兼容：
//! `--{namespace}-{component}-{prop}`，响应式变体追加 `-{breakpoint}`。

/// 生成组件自定义属性名
///
/// # 示例
///
/// ```
/// use suistyle_core::naming::custom_property;
///
/// assert_eq!(custom_property("sui", "card", "width"), "--sui-card-width");
/// ```
pub fn custom_property(namespace: &str, component_name: &str, prop_name: &str) -> String {
    format!("--{}-{}-{}", namespace, component_name, prop_name)
}

/// 生成带断点后缀的自定义属性名
pub fn breakpoint_property(
    namespace: &str,
    component_name: &str,
    prop_name: &str,
    breakpoint: &str,
) -> String {
    format!(
        "--{}-{}-{}-{}",
        namespace, component_name, prop_name, breakpoint
    )
}

/// 颜色主题 token 引用
pub fn color_token(namespace: &str, value: &str) -> String {
    format!("var(--{}-colors-{})", namespace, value)
}

/// 间距主题 token 引用
pub fn spacing_token(namespace: &str, value: &str) -> String {
    format!("var(--{}-spacing-{})", namespace, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_property() {
        assert_eq!(
            custom_property("sui", "component", "max-width"),
            "--sui-component-max-width"
        );
    }

    #[test]
    fn test_breakpoint_property() {
        assert_eq!(
            breakpoint_property("sui", "component", "width", "tablet"),
            "--sui-component-width-tablet"
        );
    }

    #[test]
    fn test_custom_namespace() {
        assert_eq!(custom_property("acme", "btn", "color"), "--acme-btn-color");
    }

    #[test]
    fn test_color_token() {
        assert_eq!(color_token("sui", "red"), "var(--sui-colors-red)");
    }

    #[test]
    fn test_spacing_token() {
        assert_eq!(spacing_token("sui", "1"), "var(--sui-spacing-1)");
    }
}
