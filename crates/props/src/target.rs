use indexmap::IndexMap;

/// 样式写入目标
///
/// 转换管线只依赖这个 trait。`StyleBlock` 是对既有样式文本打补丁的
/// 兼容实现；`InlineStyle` 是直接的键值 setter。
pub trait StyleTarget {
    /// 写入一条自定义属性声明
    fn set_custom_property(&mut self, name: &str, value: &str);
}

/// 组件内嵌样式块：对既有声明做文本替换
///
/// 样式块在本系统运行前就已存在，必须预先声明所有可能被写入的
/// 自定义属性；找不到既有声明时写入是 no-op，不会插入新声明。
#[derive(Debug, Clone, PartialEq)]
pub struct StyleBlock {
    text: String,
}

impl StyleBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// 定位一条既有声明，返回替换区间（从属性名起到分号止，含分号）
    ///
    /// 属性名后必须跟冒号（可有空白），这样既不会把 `var(--x)` 的引用
    /// 当成声明，也不会把 `--x-width-mobile` 误当成 `--x-width` 改写。
    fn find_declaration(&self, name: &str) -> Option<(usize, usize)> {
        let mut search = 0;
        while let Some(rel) = self.text[search..].find(name) {
            let start = search + rel;
            let after = start + name.len();
            let rest = &self.text[after..];
            if rest.trim_start_matches([' ', '\t']).starts_with(':') {
                // 没有收尾分号的声明不可替换
                let semi = rest.find(';')?;
                return Some((start, after + semi + 1));
            }
            search = after;
        }
        None
    }
}

impl StyleTarget for StyleBlock {
    fn set_custom_property(&mut self, name: &str, value: &str) {
        if let Some((start, end)) = self.find_declaration(name) {
            let replacement = format!("{}: {};", name, value);
            self.text.replace_range(start..end, &replacement);
        }
    }
}

/// 直接键值 setter：按插入顺序记录自定义属性
///
/// 对应 DOM 的 `style.setProperty` 路径；拿不到真正的样式块时
/// 测试和宿主环境都可以用它。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    properties: IndexMap<String, String>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// 按插入顺序遍历已写入的声明
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// 渲染为声明文本（插入顺序）
    pub fn css_text(&self) -> String {
        let decls: Vec<String> = self
            .properties
            .iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect();
        decls.join(" ")
    }
}

impl StyleTarget for InlineStyle {
    fn set_custom_property(&mut self, name: &str, value: &str) {
        self.properties
            .insert(name.to_string(), value.to_string());
    }
}
