/// 便签导出相关常量
pub struct NoteConstants;

impl NoteConstants {
    /// DOCX目标路径的字面后缀，区分大小写
    pub const DOCX_EXTENSION: &'static str = ".docx";
    /// 每英寸对应的EMU数
    pub const EMU_PER_INCH: u32 = 914_400;
    /// 临时图片文件名前缀
    pub const TEMP_IMAGE_PREFIX: &'static str = "note_img_";
    /// 临时图片文件名后缀
    pub const TEMP_IMAGE_SUFFIX: &'static str = ".png";
}
