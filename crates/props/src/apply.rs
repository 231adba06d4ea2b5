use crate::convert::PropKind;
use crate::prop_map::resolve;
use crate::responsive::expand;
use crate::target::StyleTarget;
use suistyle_core::naming::custom_property;
use suistyle_core::{ApplyResult, PropValue, Props, StyleRequest};

/// 应用阶段的致命错误
///
/// 两类都是调用方用错 API，当次调用直接中止，不重试。
#[derive(Debug, Clone, PartialEq)]
pub enum PropError {
    /// 请求的连字符属性名不在支持的属性表中
    UnknownProperty(String),
    /// 解析出的短标识符在组件 props 中不存在
    MissingProp { prop: String, component: String },
}

impl std::fmt::Display for PropError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropError::UnknownProperty(name) => write!(
                f,
                "Invalid property name '{}'. The prop isn't in the supported API; \
                 check the property table for supported names (like 'font-size').",
                name
            ),
            PropError::MissingProp { prop, component } => write!(
                f,
                "Invalid prop '{}'. Prop doesn't exist in component ({}) props; \
                 maybe add it to the component's props/attributes.",
                prop, component
            ),
        }
    }
}

impl std::error::Error for PropError {}

/// 查表并取出 prop 值
///
/// 属性名不在表中、或短标识符不在 props 里，都是致命错误。
pub(crate) fn resolve_value<'p>(
    props: &'p Props,
    prop_name: &str,
    component_name: &str,
) -> Result<&'p PropValue, PropError> {
    let short =
        resolve(prop_name).ok_or_else(|| PropError::UnknownProperty(prop_name.to_string()))?;
    props.get(short).ok_or_else(|| PropError::MissingProp {
        prop: short.to_string(),
        component: component_name.to_string(),
    })
}

/// 支持断点数组的属性
fn is_responsive_property(prop_name: &str) -> bool {
    matches!(
        prop_name,
        "width"
            | "max-width"
            | "min-width"
            | "height"
            | "max-height"
            | "min-height"
            | "padding"
            | "margin"
            | "font-size"
            | "text-align"
    )
}

/// 应用入口：按 `prop_list` 顺序把组件 props 写入样式目标
///
/// 断点属性走响应式展开；其余属性经转换后直接写入无后缀的
/// 自定义属性。第一个致命错误即中止整个调用（两条路径对
/// 未知属性名的处理一致）。
pub fn apply<T: StyleTarget>(
    request: &StyleRequest,
    props: &Props,
    target: &mut T,
) -> Result<ApplyResult, PropError> {
    let mut written = Vec::new();
    let mut diagnostics = Vec::new();

    for prop_name in &request.prop_list {
        if is_responsive_property(prop_name) {
            written.extend(expand(
                request,
                props,
                prop_name,
                target,
                &mut diagnostics,
            )?);
        } else {
            let value = resolve_value(props, prop_name, &request.component_name)?;
            let converted = PropKind::of(prop_name).convert(value, &request.namespace);
            let name = custom_property(&request.namespace, &request.component_name, prop_name);
            target.set_custom_property(&name, &converted);
            written.push(name);
        }
    }

    Ok(ApplyResult {
        written,
        diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::InlineStyle;
    use suistyle_core::props_from_json;

    fn apply_to_style(props_json: &str, prop_list: &[&str]) -> (ApplyResult, InlineStyle) {
        let props = props_from_json(props_json).unwrap();
        let request = StyleRequest::new(
            prop_list.iter().map(|s| s.to_string()).collect(),
            "component",
        );
        let mut style = InlineStyle::new();
        let result = apply(&request, &props, &mut style).unwrap();
        (result, style)
    }

    #[test]
    fn test_apply_direct_path() {
        let (result, style) = apply_to_style(r#"{ "color": "red" }"#, &["color"]);
        assert_eq!(
            style.get("--sui-component-color"),
            Some("var(--sui-colors-red)")
        );
        assert_eq!(result.written, vec!["--sui-component-color"]);
    }

    #[test]
    fn test_apply_responsive_path() {
        let (result, style) = apply_to_style(r#"{ "width": [1, 0.5, 0.3] }"#, &["width"]);
        assert_eq!(result.written.len(), 4);
        assert_eq!(style.get("--sui-component-width"), Some("100%"));
        assert_eq!(style.get("--sui-component-width-desktop"), Some("30%"));
    }

    #[test]
    fn test_apply_mixed_list_in_request_order() {
        let (result, style) = apply_to_style(
            r#"{ "width": 0.5, "color": "red", "display": "flex" }"#,
            &["display", "width", "color"],
        );
        assert_eq!(
            result.written,
            vec![
                "--sui-component-display",
                "--sui-component-width",
                "--sui-component-color",
            ]
        );
        assert_eq!(style.get("--sui-component-display"), Some("flex"));
    }

    #[test]
    fn test_apply_shorthand_prop_keys() {
        // padding 的值挂在短标识符 p 下
        let (_, style) = apply_to_style(r#"{ "p": 1, "bg": "blue" }"#, &["padding", "background-color"]);
        assert_eq!(
            style.get("--sui-component-padding"),
            Some("var(--sui-spacing-1)")
        );
        assert_eq!(
            style.get("--sui-component-background-color"),
            Some("var(--sui-colors-blue)")
        );
    }

    #[test]
    fn test_apply_unknown_property_errors() {
        let props = props_from_json(r#"{ "width": 1 }"#).unwrap();
        let request = StyleRequest::new(vec!["grid-area".to_string()], "component");
        let mut style = InlineStyle::new();

        let err = apply(&request, &props, &mut style).unwrap_err();
        assert_eq!(err, PropError::UnknownProperty("grid-area".to_string()));
        assert!(style.is_empty());
    }

    #[test]
    fn test_apply_missing_prop_errors() {
        let props = props_from_json(r#"{ "width": 1 }"#).unwrap();
        let request = StyleRequest::new(vec!["color".to_string()], "component");
        let mut style = InlineStyle::new();

        let err = apply(&request, &props, &mut style).unwrap_err();
        assert_eq!(
            err,
            PropError::MissingProp {
                prop: "color".to_string(),
                component: "component".to_string(),
            }
        );
    }

    #[test]
    fn test_apply_stops_at_first_error() {
        let props = props_from_json(r#"{ "width": 0.5 }"#).unwrap();
        let request = StyleRequest::new(
            vec!["width".to_string(), "color".to_string(), "display".to_string()],
            "component",
        );
        let mut style = InlineStyle::new();

        let err = apply(&request, &props, &mut style).unwrap_err();
        assert!(matches!(err, PropError::MissingProp { .. }));
        // width 在出错前已写入
        assert_eq!(style.get("--sui-component-width"), Some("50%"));
        assert_eq!(style.len(), 1);
    }

    #[test]
    fn test_error_messages_name_the_offender() {
        let err = PropError::UnknownProperty("grid-area".to_string());
        assert!(err.to_string().contains("grid-area"));

        let err = PropError::MissingProp {
            prop: "maxWidth".to_string(),
            component: "card".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("maxWidth"));
        assert!(message.contains("card"));
    }

    #[test]
    fn test_is_responsive_property() {
        assert!(is_responsive_property("width"));
        assert!(is_responsive_property("padding"));
        assert!(is_responsive_property("text-align"));
        assert!(!is_responsive_property("color"));
        assert!(!is_responsive_property("display"));
        assert!(!is_responsive_property("border"));
    }
}
