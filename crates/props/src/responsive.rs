use crate::apply::{resolve_value, PropError};
use crate::convert::PropKind;
use crate::target::StyleTarget;
use suistyle_core::naming::{breakpoint_property, custom_property};
use suistyle_core::{Diagnostic, PropValue, Props, StyleRequest};

/// 响应式断点展开
///
/// 数组值按位置映射到断点后缀，逐个转换后写入
/// `--{ns}-{component}-{prop}-{breakpoint}`；下标 0 的值额外写入
/// 无后缀的默认（移动端）属性。标量数字只写默认属性；普通字符串
/// 不经转换直接写入。
///
/// 数组长度超过断点列表时，多余的值被跳过并产生一条警告诊断，
/// 不会生成带未定义后缀的属性名。
///
/// 返回写入的自定义属性名，按写入顺序。
pub fn expand<T: StyleTarget>(
    request: &StyleRequest,
    props: &Props,
    prop_name: &str,
    target: &mut T,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Vec<String>, PropError> {
    let value = resolve_value(props, prop_name, &request.component_name)?;
    let kind = PropKind::of(prop_name);
    let base = custom_property(&request.namespace, &request.component_name, prop_name);
    let mut written = Vec::new();

    // 逗号分隔的字符串规范化为数组
    let value = match value {
        PropValue::Text(s) if s.contains(',') => PropValue::List(
            s.split(',')
                .map(|part| PropValue::Text(part.to_string()))
                .collect(),
        ),
        other => other.clone(),
    };

    match value {
        PropValue::List(items) => {
            for (index, item) in items.iter().enumerate() {
                let Some(breakpoint) = request.breakpoints.get(index) else {
                    diagnostics.push(Diagnostic::warning(format!(
                        "Responsive value #{} of '{}' has no matching breakpoint \
                         ({} configured); value skipped",
                        index,
                        prop_name,
                        request.breakpoints.len()
                    )));
                    continue;
                };
                let converted = kind.convert(item, &request.namespace);
                let name = breakpoint_property(
                    &request.namespace,
                    &request.component_name,
                    prop_name,
                    breakpoint,
                );
                target.set_custom_property(&name, &converted);
                written.push(name);

                // 下标 0 同时充当默认（移动端）值
                if index == 0 {
                    target.set_custom_property(&base, &converted);
                    written.push(base.clone());
                }
            }
        }
        PropValue::Number(_) => {
            let converted = kind.convert(&value, &request.namespace);
            target.set_custom_property(&base, &converted);
            written.push(base);
        }
        // 用户直接给出 "25%"、"10em" 这类字符串时原样写入
        PropValue::Text(s) => {
            target.set_custom_property(&base, &s);
            written.push(base);
        }
    }

    Ok(written)
}
