use std::fs::{self, File};
use std::path::Path;

use docx_rs::{Docx, Paragraph, Run};

use super::export::ExportResult;
use super::image::EmbeddedImage;
use crate::models::{Conf, NoteNode};
use crate::parser::ParseOutput;

/// DOCX生成选项
#[derive(Debug, Clone, Default)]
pub struct DocxOptions {
    /// 输出文件路径
    pub filepath: String,
    /// 配置信息
    pub conf: Conf,
    /// 解析后的便签内容
    pub parsed: Option<ParseOutput>,
}

/// DOCX生成统计
#[derive(Debug, Clone, Default)]
pub struct DocxStats {
    pub paragraph_count: usize,
    pub image_count: usize,
    pub bytes_written: u64,
}

/// 生成DOCX文档
///
/// 按文档顺序消费解析出的节点：段落节点追加一个纯文本段落，
/// 图片节点解码后作为固定宽度的内嵌图片插入。
/// 文档对象在所有图片解码成功之后才落盘，中途任何失败
/// 都不会留下可打开的输出文件
pub fn generate_docx(options: DocxOptions) -> ExportResult<DocxStats> {
    let empty = Vec::new();
    let nodes: &[NoteNode] = options
        .parsed
        .as_ref()
        .map(|p| p.nodes.as_slice())
        .unwrap_or(&empty);

    let mut docx = Docx::new();
    let mut stats = DocxStats::default();

    for node in nodes {
        match node {
            NoteNode::Paragraph(text) => {
                docx = docx
                    .add_paragraph(Paragraph::new().add_run(Run::new().add_text(text.as_str())));
                stats.paragraph_count += 1;
            }
            NoteNode::Image(src) => {
                let embedded =
                    EmbeddedImage::from_data_uri(src, options.conf.image_width_inches)?;
                let pic = embedded.to_pic()?;
                docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_image(pic)));
                stats.image_count += 1;
            }
        }
    }

    // 组装完成后才创建目标文件
    let file = File::create(Path::new(&options.filepath))?;
    docx.build()
        .pack(file)
        .map_err(docx_rs::DocxError::from)?;

    stats.bytes_written = fs::metadata(&options.filepath).map(|m| m.len()).unwrap_or(0);
    println!(
        "【generate_docx】生成完成: {}个段落, {}张图片",
        stats.paragraph_count, stats.image_count
    );
    Ok(stats)
}
