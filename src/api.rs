//! 桌面外壳 API
//!
//! 这个模块提供了便签外壳（窗口层）可以调用的API接口

use crate::exporter::export_note;
use crate::models::{Conf, NoteSession};
use crate::parser::NoteHtmlParser;

/// 简化的配置结构，用于外壳调用
#[derive(Debug, Clone)]
pub struct SimpleConf {
    pub image_width_inches: f32,
    pub file_dialog_filter: String,
    pub window_opacity_active: f32,
    pub window_opacity_idle: f32,
    pub font_family: String,
    pub font_size: u32,
}

impl Default for SimpleConf {
    fn default() -> Self {
        Self {
            image_width_inches: 4.0,
            file_dialog_filter: "Word Document (*.docx);;HTML Files (*.html);;All Files (*)"
                .to_string(),
            window_opacity_active: 0.75,
            window_opacity_idle: 0.3,
            font_family: "Segoe UI".to_string(),
            font_size: 14,
        }
    }
}

impl From<SimpleConf> for Conf {
    fn from(simple: SimpleConf) -> Self {
        let mut conf = Conf::default();
        conf.image_width_inches = simple.image_width_inches;
        conf.file_dialog_filter = simple.file_dialog_filter;
        conf.window_opacity_active = simple.window_opacity_active;
        conf.window_opacity_idle = simple.window_opacity_idle;
        conf.font_family = simple.font_family;
        conf.font_size = simple.font_size;
        conf
    }
}

/// 保存结果
#[derive(Debug, Clone)]
pub struct SaveResult {
    pub success: bool,
    pub message: String,
    pub file_path: Option<String>,
}

/// 解析便签HTML
pub async fn parse_note_html(html: String) -> String {
    let mut parser = NoteHtmlParser::new();
    match parser.parse(&html) {
        Ok(result) => serde_json::to_string(&result).unwrap_or_else(|_| "{}".to_string()),
        Err(_) => "{}".to_string(),
    }
}

/// 导出便签到指定文件
pub async fn export_note_to_file(
    html: String,
    output_path: String,
    config: Option<SimpleConf>,
) -> SaveResult {
    let conf: Conf = config.unwrap_or_default().into();

    match export_note(&html, &output_path, &conf) {
        Ok(stats) => SaveResult {
            success: true,
            message: format!(
                "导出成功: {}个段落, {}张图片",
                stats.paragraph_count, stats.image_count
            ),
            file_path: Some(output_path),
        },
        Err(e) => SaveResult {
            success: false,
            message: format!("导出失败: {}", e),
            file_path: None,
        },
    }
}

/// 保存便签
///
/// 复用会话中记住的路径。尚未选择过路径时返回失败，
/// 由外壳弹出另存为对话框后改调save_note_as
pub async fn save_note(
    session: &mut NoteSession,
    html: String,
    config: Option<SimpleConf>,
) -> SaveResult {
    let path = match session.current_file() {
        Some(p) => p.to_string(),
        None => {
            return SaveResult {
                success: false,
                message: "尚未选择保存路径".to_string(),
                file_path: None,
            }
        }
    };

    export_note_to_file(html, path, config).await
}

/// 另存为
///
/// 导出成功后才记住新路径，失败时会话状态保持不变
pub async fn save_note_as(
    session: &mut NoteSession,
    html: String,
    output_path: String,
    config: Option<SimpleConf>,
) -> SaveResult {
    let result = export_note_to_file(html, output_path.clone(), config).await;

    if result.success {
        session.set_current_file(output_path);
    }

    result
}
