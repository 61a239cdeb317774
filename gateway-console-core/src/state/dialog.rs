//! 编辑对话框生命周期
//!
//! Closed → Open(草稿) → Save（提交草稿）| Cancel（丢弃草稿）→ Closed。
//! 草稿在打开时深拷贝，编辑过程中不会修改原列表；重新打开总是从最新提交值开始。

/// 对话框状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogState<T> {
    Closed,
    Open {
        draft: T,
    },
}

impl<T> Default for DialogState<T> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<T: Clone> DialogState<T> {
    /// 以目标的副本作为草稿打开（已打开时丢弃旧草稿）
    pub fn open(&mut self, target: &T) {
        *self = Self::Open {
            draft: target.clone(),
        };
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn draft(&self) -> Option<&T> {
        match self {
            Self::Open { draft } => Some(draft),
            Self::Closed => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Open { draft } => Some(draft),
            Self::Closed => None,
        }
    }

    /// 保存：关闭对话框并交出草稿，由调用方提交到数据源
    pub fn save(&mut self) -> Option<T> {
        match std::mem::replace(self, Self::Closed) {
            Self::Open { draft } => Some(draft),
            Self::Closed => None,
        }
    }

    /// 保存并直接写回目标
    pub fn save_into(&mut self, target: &mut T) -> bool {
        if let Some(draft) = self.save() {
            *target = draft;
            true
        } else {
            false
        }
    }

    /// 取消（Esc / 点击遮罩）：丢弃草稿
    pub fn cancel(&mut self) {
        *self = Self::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct PortDraft {
        name: String,
    }

    #[test]
    fn edits_do_not_touch_source_until_save() {
        let mut source = PortDraft {
            name: "M1".to_string(),
        };
        let mut dialog = DialogState::Closed;
        dialog.open(&source);
        if let Some(d) = dialog.draft_mut() {
            d.name = "主卡".to_string();
        }
        assert_eq!(source.name, "M1");

        assert!(dialog.save_into(&mut source));
        assert_eq!(source.name, "主卡");
        assert!(!dialog.is_open());
    }

    #[test]
    fn cancel_discards_draft_and_reopen_starts_fresh() {
        let source = PortDraft {
            name: "M1".to_string(),
        };
        let mut dialog = DialogState::Closed;
        dialog.open(&source);
        if let Some(d) = dialog.draft_mut() {
            d.name = "changed".to_string();
        }
        dialog.cancel();
        assert!(dialog.draft().is_none());

        dialog.open(&source);
        assert_eq!(dialog.draft(), Some(&source));
    }

    #[test]
    fn save_when_closed_returns_none() {
        let mut dialog: DialogState<PortDraft> = DialogState::Closed;
        assert!(dialog.save().is_none());
    }
}
