use phf::phf_map;

/// 连字符 CSS 属性名到组件短标识符的映射
///
/// 这是整个 API 支持的属性全集；消费者在组件 props 里用短标识符存值
/// （如 `background-color` 的值挂在 `bg` 下）。
/// 使用 phf 在编译期生成完美哈希表，零运行时开销。
/// 查询区分大小写、只做精确匹配。
static PROP_NAME_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    // Sizing (尺寸)
    "width" => "width",
    "height" => "height",
    "max-width" => "maxWidth",
    "min-width" => "minWidth",
    "max-height" => "maxHeight",
    "min-height" => "minHeight",

    // Typography (排版)
    "font-size" => "fontSize",
    "text-align" => "textAlign",
    "font-family" => "fontFamily",
    "line-height" => "lineHeight",
    "font-weight" => "fontWeight",
    "letter-spacing" => "letterSpacing",

    // Spacing (间距)
    "padding" => "p",
    "margin" => "m",

    // Color (颜色)
    "color" => "color",
    "background-color" => "bg",

    // Layout (布局)
    "display" => "display",
    "position" => "position",
    "top" => "top",
    "bottom" => "bottom",
    "left" => "left",
    "right" => "right",
    "z-index" => "zIndex",

    // Border (边框)
    "border" => "border",
    "border-top" => "bt",
    "border-bottom" => "bb",
    "border-left" => "bl",
    "border-right" => "br",
    "border-width" => "borderWidth",
    "border-style" => "borderStyle",
    "border-color" => "borderColor",
    "border-radius" => "borderRadius",

    // Flexbox
    "align-items" => "alignItems",
    "align-content" => "alignContent",
    "justify-content" => "justifyContent",
    "flex-wrap" => "flexWrap",
    "flex-direction" => "flexDirection",
};

/// 查询连字符属性名对应的短标识符
///
/// 名字不在表中时返回 `None`，表示该属性不属于支持的 API。
pub fn resolve(prop_name: &str) -> Option<&'static str> {
    PROP_NAME_MAP.get(prop_name).copied()
}

/// 属性名是否在支持的 API 内
pub fn is_supported(prop_name: &str) -> bool {
    PROP_NAME_MAP.contains_key(prop_name)
}
