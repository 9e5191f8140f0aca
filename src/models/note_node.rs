use serde::Serialize;

/// 节点分类
///
/// 便签HTML里只有段落和图片两类标签具有导出意义，其余一律归入 Other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// 段落节点
    Paragraph,
    /// 图片节点
    Image,
    /// 其他节点，导出时跳过
    Other,
}

impl NodeKind {
    /// 根据标签名分类
    pub fn from_tag(tag: &str) -> NodeKind {
        match tag {
            "p" => NodeKind::Paragraph,
            "img" => NodeKind::Image,
            _ => NodeKind::Other,
        }
    }
}

/// 便签内容节点，按文档顺序产出
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum NoteNode {
    /// 段落节点，携带拍平后的纯文本（内联样式全部丢弃）
    Paragraph(String),
    /// 图片节点，携带原始的src属性值
    Image(String),
}

impl NoteNode {
    /// 节点对应的分类
    pub fn kind(&self) -> NodeKind {
        match self {
            NoteNode::Paragraph(_) => NodeKind::Paragraph,
            NoteNode::Image(_) => NodeKind::Image,
        }
    }
}
