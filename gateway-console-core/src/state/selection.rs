//! 列表批量选择状态
//!
//! 每个列表页面各自持有一个 `SelectionState`。`all_ids` 是当前页（过滤后）的行，
//! `selected` 始终是 `all_ids` 的子集：替换行集合时会剔除失效的选中项，
//! `toggle_one` 也会忽略不在当前行集合中的 ID。

use std::collections::HashSet;
use std::hash::Hash;

/// 批量选择状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState<T: Eq + Hash + Clone> {
    all_ids: Vec<T>,
    selected: HashSet<T>,
}

impl<T: Eq + Hash + Clone> SelectionState<T> {
    /// 创建空的选择状态
    pub fn new() -> Self {
        Self {
            all_ids: Vec::new(),
            selected: HashSet::new(),
        }
    }

    /// 以给定行集合创建（无选中项）
    pub fn with_ids(all_ids: Vec<T>) -> Self {
        Self {
            all_ids,
            selected: HashSet::new(),
        }
    }

    pub fn all_ids(&self) -> &[T] {
        &self.all_ids
    }

    pub fn selected(&self) -> &HashSet<T> {
        &self.selected
    }

    /// 替换行集合（过滤、删除行后调用），剔除已不存在的选中项
    pub fn set_all_ids(&mut self, all_ids: Vec<T>) {
        let present: HashSet<&T> = all_ids.iter().collect();
        self.selected.retain(|id| present.contains(id));
        self.all_ids = all_ids;
    }

    /// 全选 / 全不选
    ///
    /// 已全部选中（成员相同）时清空，否则选中当前全部行。
    /// 判断基于当前 `all_ids`，不依赖单独的布尔标记。
    pub fn select_all(&mut self) {
        let all: HashSet<T> = self.all_ids.iter().cloned().collect();
        if all == self.selected {
            self.selected.clear();
        } else {
            self.selected = all;
        }
    }

    /// 切换单行选中状态，返回切换后是否选中
    ///
    /// 不在当前行集合中的 ID 被忽略（返回 `false`）。
    pub fn toggle_one(&mut self, id: &T) -> bool {
        if self.selected.remove(id) {
            return false;
        }
        if self.all_ids.contains(id) {
            self.selected.insert(id.clone());
            true
        } else {
            false
        }
    }

    pub fn is_selected(&self, id: &T) -> bool {
        self.selected.contains(id)
    }

    /// 行集合非空且全部选中
    pub fn is_all_selected(&self) -> bool {
        !self.all_ids.is_empty() && self.all_ids.iter().all(|id| self.selected.contains(id))
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    /// 是否有选中项（决定浮动操作栏是否显示）
    pub fn any_selected(&self) -> bool {
        !self.selected.is_empty()
    }

    /// 按行顺序返回选中的 ID
    pub fn selected_in_order(&self) -> Vec<T> {
        self.all_ids
            .iter()
            .filter(|id| self.selected.contains(id))
            .cloned()
            .collect()
    }

    /// 只保留给定 ID 中已选中的项（批量操作部分失败后保留失败项）
    pub fn retain_selected(&mut self, ids: &[T]) {
        let keep: HashSet<&T> = ids.iter().collect();
        self.selected.retain(|id| keep.contains(id));
    }
}

impl<T: Eq + Hash + Clone> Default for SelectionState<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    fn state() -> SelectionState<String> {
        SelectionState::with_ids(ids(&["M1", "M2", "M3"]))
    }

    #[test]
    fn select_all_then_again_restores_empty() {
        let mut s = state();
        s.select_all();
        assert!(s.is_all_selected());
        assert_eq!(s.count(), 3);
        s.select_all();
        assert!(!s.any_selected());
    }

    #[test]
    fn select_all_twice_from_full_restores_full() {
        let mut s = state();
        s.select_all();
        let before = s.clone();
        s.select_all();
        s.select_all();
        assert_eq!(s, before);
    }

    #[test]
    fn select_all_from_partial_selects_everything() {
        let mut s = state();
        s.toggle_one(&"M2".to_string());
        s.select_all();
        assert!(s.is_all_selected());
    }

    #[test]
    fn select_all_reevaluates_against_current_rows() {
        let mut s = state();
        s.select_all();
        // 新增一行后不再是全选，再次全选应选中新行而不是清空
        s.set_all_ids(ids(&["M1", "M2", "M3", "M4"]));
        assert!(!s.is_all_selected());
        s.select_all();
        assert!(s.is_all_selected());
        assert_eq!(s.count(), 4);
    }

    #[test]
    fn toggle_one_is_an_involution() {
        let mut s = state();
        s.toggle_one(&"M1".to_string());
        let before = s.clone();
        for id in ["M1", "M3", "M9"] {
            let id = id.to_string();
            s.toggle_one(&id);
            s.toggle_one(&id);
            assert_eq!(s, before);
        }
    }

    #[test]
    fn toggle_unknown_id_is_ignored() {
        let mut s = state();
        assert!(!s.toggle_one(&"M9".to_string()));
        assert!(!s.any_selected());
    }

    #[test]
    fn is_all_selected_false_for_empty_rows_and_after_clear() {
        let mut empty: SelectionState<String> = SelectionState::new();
        empty.select_all();
        assert!(!empty.is_all_selected());

        let mut s = state();
        s.select_all();
        s.clear();
        assert!(!s.is_all_selected());
        assert_eq!(s.count(), 0);
    }

    #[test]
    fn replacing_rows_prunes_stale_selection() {
        let mut s = state();
        s.select_all();
        s.set_all_ids(ids(&["M1", "M3"]));
        assert_eq!(s.count(), 2);
        assert!(s.selected().iter().all(|id| s.all_ids().contains(id)));
        assert!(s.is_all_selected());
    }

    #[test]
    fn selection_stays_subset_over_random_walk() {
        let mut s = state();
        let script: [(&str, &str); 8] = [
            ("toggle", "M1"),
            ("all", ""),
            ("rows", "M2,M3"),
            ("toggle", "M1"),
            ("toggle", "M3"),
            ("rows", "M3,M4,M5"),
            ("all", ""),
            ("clear", ""),
        ];
        for (op, arg) in script {
            match op {
                "toggle" => {
                    s.toggle_one(&arg.to_string());
                }
                "all" => s.select_all(),
                "rows" => s.set_all_ids(arg.split(',').map(str::to_string).collect()),
                _ => s.clear(),
            }
            assert!(s.selected().iter().all(|id| s.all_ids().contains(id)));
        }
    }

    #[test]
    fn selected_in_order_follows_rows() {
        let mut s = state();
        s.toggle_one(&"M3".to_string());
        s.toggle_one(&"M1".to_string());
        assert_eq!(s.selected_in_order(), ids(&["M1", "M3"]));
    }

    #[test]
    fn retain_selected_keeps_only_given_ids() {
        let mut s = state();
        s.toggle_one(&"M1".to_string());
        s.toggle_one(&"M3".to_string());
        s.retain_selected(&ids(&["M2", "M3"]));
        assert_eq!(s.selected_in_order(), ids(&["M3"]));
    }
}
