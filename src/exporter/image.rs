use std::path::PathBuf;

use image::GenericImageView;
use tempfile::Builder;

use super::export::{ExportError, ExportResult};
use crate::parser::NoteParseError;
use crate::utils::NoteConstants;

/// 从img元素的src提取出的内嵌图片
///
/// 每个图片元素各自创建一个，重编码后的PNG临时文件交给DOCX打包器读取。
/// 临时文件在进程退出前不会被主动删除
#[derive(Debug)]
pub struct EmbeddedImage {
    /// 重编码后的PNG临时文件路径
    pub temp_path: PathBuf,
    /// 输出宽度（EMU）
    pub width_emu: u32,
    /// 输出高度（EMU），按原始宽高比缩放
    pub height_emu: u32,
}

impl EmbeddedImage {
    /// 解码data-URI并物化为PNG临时文件
    ///
    /// src在第一个逗号处拆分，逗号后的部分按base64解码。
    /// 没有逗号的src会让整次导出失败，不做静默跳过
    pub fn from_data_uri(src: &str, width_inches: f32) -> ExportResult<Self> {
        let (_, payload) = src
            .split_once(',')
            .ok_or_else(|| NoteParseError::MalformedDataUri(src.to_string()))?;

        let image_bytes = base64::decode(payload)
            .map_err(|e| ExportError::ImageDecodeError(format!("base64解码失败: {}", e)))?;

        let img = image::load_from_memory(&image_bytes)
            .map_err(|e| ExportError::ImageDecodeError(format!("无法识别的图片数据: {}", e)))?;

        // 重编码为PNG写入临时文件
        let mut temp_image = Builder::new()
            .prefix(NoteConstants::TEMP_IMAGE_PREFIX)
            .suffix(NoteConstants::TEMP_IMAGE_SUFFIX)
            .tempfile()?;
        img.write_to(&mut temp_image, image::ImageFormat::Png)
            .map_err(|e| ExportError::ImageDecodeError(format!("PNG编码失败: {}", e)))?;

        // keep: 临时文件保留到进程退出之后，不随句柄一起删除
        let (_, temp_path) = temp_image
            .keep()
            .map_err(|e| ExportError::WriteError(e.error))?;

        let (width, height) = img.dimensions();
        let width_emu = (width_inches * NoteConstants::EMU_PER_INCH as f32) as u32;
        let height_emu = (width_emu as u64 * height as u64 / width as u64) as u32;

        Ok(EmbeddedImage {
            temp_path,
            width_emu,
            height_emu,
        })
    }

    /// 读取临时PNG并生成docx-rs的图片对象
    pub fn to_pic(&self) -> ExportResult<docx_rs::Pic> {
        let png_bytes = std::fs::read(&self.temp_path)?;
        Ok(docx_rs::Pic::new(&png_bytes).size(self.width_emu, self.height_emu))
    }
}
