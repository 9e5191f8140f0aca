use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conf {
    /// 图片在DOCX里的固定宽度 //英寸
    pub image_width_inches: f32,
    /// 保存对话框的文件类型过滤器
    pub file_dialog_filter: String,
    /// 鼠标悬停时的窗口不透明度
    pub window_opacity_active: f32,
    /// 空闲时的窗口不透明度
    pub window_opacity_idle: f32,
    /// 编辑区字体名称
    pub font_family: String,
    /// 编辑区字体大小 //磅
    pub font_size: u32,
}

impl Default for Conf {
    fn default() -> Self {
        Conf {
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
