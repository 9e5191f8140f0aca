/// 便签会话状态
///
/// 记录最近一次成功保存的文件路径，应用存续期内复用，
/// 这样再次保存时不必重新弹出文件选择对话框
#[derive(Debug, Clone, Default)]
pub struct NoteSession {
    current_file: Option<String>,
}

impl NoteSession {
    /// 创建新的会话
    pub fn new() -> Self {
        NoteSession { current_file: None }
    }

    /// 当前记住的文件路径
    pub fn current_file(&self) -> Option<&str> {
        self.current_file.as_deref()
    }

    /// 是否已经选择过保存路径
    pub fn has_file(&self) -> bool {
        self.current_file.is_some()
    }

    /// 记住保存路径，保存成功后调用
    pub fn set_current_file(&mut self, path: impl Into<String>) {
        self.current_file = Some(path.into());
    }

    /// 清除记住的路径
    pub fn clear(&mut self) {
        self.current_file = None;
    }
}
