use serde::Serialize;

/// 便签内容统计信息
#[derive(Debug, Clone, Default, Serialize)]
pub struct NoteProperties {
    /// 段落数量
    pub paragraph_count: usize,
    /// 图片数量
    pub image_count: usize,
    /// 段落纯文本总长度，以字素簇计
    pub text_graphemes: usize,
    /// 各图片data-URI声明的MIME类型，无法识别时为 "unknown"
    pub image_mimes: Vec<String>,
}
