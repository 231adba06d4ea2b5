use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use suistyle_core::{Diagnostic, DiagnosticLevel, Props, StyleRequest};
use suistyle_props::{apply, StyleBlock};

// ── JS 侧 serde 镜像类型 ──────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsStyleRequest {
    prop_list: Vec<String>,
    component_name: String,
    #[serde(default = "default_namespace")]
    namespace: String,
    #[serde(default = "default_breakpoints")]
    breakpoints: Vec<String>,
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

impl From<JsStyleRequest> for StyleRequest {
    fn from(request: JsStyleRequest) -> Self {
        StyleRequest {
            prop_list: request.prop_list,
            component_name: request.component_name,
            namespace: request.namespace,
            breakpoints: request.breakpoints,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsApplyResult {
    css: String,
    written: Vec<String>,
    diagnostics: Vec<JsDiagnostic>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsDiagnostic {
    level: &'static str,
    message: String,
}

impl From<Diagnostic> for JsDiagnostic {
    fn from(diagnostic: Diagnostic) -> Self {
        let level = match diagnostic.level {
            DiagnosticLevel::Warning => "warning",
            DiagnosticLevel::Error => "error",
        };
        Self {
            level,
            message: diagnostic.message,
        }
    }
}

// ── WASM 导出函数 ─────────────────────────────────────────────

/// 初始化 panic hook（自动调用）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 把组件 props 写入样式块文本，返回打补丁后的 CSS
///
/// @param styleText - 组件样式块的文本（须预声明要写入的自定义属性）
/// @param props     - 组件 props 对象（短标识符 -> 值）
/// @param request   - `{ propList, componentName, namespace?, breakpoints? }`
/// @returns `{ css, written, diagnostics }`
#[wasm_bindgen(js_name = "applyProps")]
pub fn apply_props(style_text: &str, props: JsValue, request: JsValue) -> Result<JsValue, JsError> {
    let props: Props = serde_wasm_bindgen::from_value(props)
        .map_err(|e| JsError::new(&format!("Invalid props: {}", e)))?;
    let request: JsStyleRequest = serde_wasm_bindgen::from_value(request)
        .map_err(|e| JsError::new(&format!("Invalid request: {}", e)))?;

    let mut block = StyleBlock::new(style_text);
    let result = apply(&request.into(), &props, &mut block)
        .map_err(|e| JsError::new(&e.to_string()))?;

    let js_result = JsApplyResult {
        css: block.into_text(),
        written: result.written,
        diagnostics: result.diagnostics.into_iter().map(Into::into).collect(),
    };
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    js_result
        .serialize(&serializer)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
