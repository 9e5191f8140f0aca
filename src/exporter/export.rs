use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use thiserror::Error;

use super::docx_maker::{generate_docx, DocxOptions};
use crate::models::Conf;
use crate::parser::{NoteHtmlParser, NoteParseError};
use crate::utils::NoteConstants;

/// 导出错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    /// 文件系统层面的写入失败：权限、目录缺失、磁盘已满
    #[error("写入错误: {0}")]
    WriteError(#[from] std::io::Error),

    /// HTML内容或图片data-URI无法解析
    #[error("解析错误: {0}")]
    ParseError(#[from] NoteParseError),

    /// base64负载或图片字节无法解码
    #[error("图片解码错误: {0}")]
    ImageDecodeError(String),

    /// DOCX打包错误
    #[error("DOCX生成错误: {0}")]
    DocxError(#[from] docx_rs::DocxError),
}

/// 导出结果
pub type ExportResult<T> = Result<T, ExportError>;

/// 导出格式，由目标路径后缀决定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExportFormat {
    /// WordprocessingML文档
    Docx,
    /// 原样写出的HTML文本
    Html,
}

impl ExportFormat {
    /// 根据目标路径选择格式
    ///
    /// 只认字面后缀".docx"（区分大小写），其余后缀或无后缀一律按HTML原样写出
    pub fn from_path(path: &str) -> ExportFormat {
        if path.ends_with(NoteConstants::DOCX_EXTENSION) {
            ExportFormat::Docx
        } else {
            ExportFormat::Html
        }
    }
}

/// 导出统计信息
#[derive(Debug, Clone, Serialize)]
pub struct ExportStats {
    /// 实际使用的导出格式
    pub format: ExportFormat,
    /// 追加的段落数量
    pub paragraph_count: usize,
    /// 嵌入的图片数量
    pub image_count: usize,
    /// 写出的字节数
    pub bytes_written: u64,
    /// 导出耗时（毫秒）
    pub export_time: u64,
}

/// 导出便签内容
///
/// 目标路径以".docx"结尾时走DOCX转换，否则把content按UTF-8原样写出，
/// 已存在的文件会被截断。content只读不改，每次调用相互独立，
/// 不保留任何跨调用状态
pub fn export_note(content: &str, filepath: &str, conf: &Conf) -> ExportResult<ExportStats> {
    let start_time = now_millis();

    match ExportFormat::from_path(filepath) {
        ExportFormat::Html => {
            fs::write(filepath, content)?;
            Ok(ExportStats {
                format: ExportFormat::Html,
                paragraph_count: 0,
                image_count: 0,
                bytes_written: content.len() as u64,
                export_time: now_millis().saturating_sub(start_time),
            })
        }
        ExportFormat::Docx => {
            println!("【export_note】开始生成 DOCX 文档");
            println!("【export_note】文件路径: {}", filepath);

            let mut parser = NoteHtmlParser::new();
            let parsed = parser.parse(content)?;

            let options = DocxOptions {
                filepath: filepath.to_string(),
                conf: conf.clone(),
                parsed: Some(parsed),
            };
            let stats = generate_docx(options)?;

            Ok(ExportStats {
                format: ExportFormat::Docx,
                paragraph_count: stats.paragraph_count,
                image_count: stats.image_count,
                bytes_written: stats.bytes_written,
                export_time: now_millis().saturating_sub(start_time),
            })
        }
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_selection_is_literal_suffix_match() {
        assert_eq!(ExportFormat::from_path("note.docx"), ExportFormat::Docx);
        assert_eq!(ExportFormat::from_path("a/b/c.docx"), ExportFormat::Docx);
        // 区分大小写
        assert_eq!(ExportFormat::from_path("note.DOCX"), ExportFormat::Html);
        assert_eq!(ExportFormat::from_path("note.html"), ExportFormat::Html);
        assert_eq!(ExportFormat::from_path("note.txt"), ExportFormat::Html);
        assert_eq!(ExportFormat::from_path("note"), ExportFormat::Html);
        assert_eq!(ExportFormat::from_path(""), ExportFormat::Html);
    }
}
