pub mod docx_maker;
pub mod export;
pub mod image;

// 从 export 导出
pub use export::{export_note, ExportError, ExportFormat, ExportResult, ExportStats};

// 从 docx_maker 导出
pub use docx_maker::{generate_docx, DocxOptions, DocxStats};

// 从 image 导出
pub use image::EmbeddedImage;
