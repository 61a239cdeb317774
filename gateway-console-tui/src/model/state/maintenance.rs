//! 系统维护页面状态（固件 / 备份 / 授权上传）

use std::path::PathBuf;

use gateway_console_core::types::{UploadKind, UploadProgress};
use gateway_console_core::{CoreError, CoreResult};

/// 单类上传的状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadState {
    pub kind: UploadKind,
    /// 最近一次选择的文件
    pub last_file: Option<PathBuf>,
    /// 最新的进度事件
    pub progress: Option<UploadProgress>,
    /// 最近一次上传的结果
    pub outcome: Option<Result<(), String>>,
    in_flight: bool,
}

impl UploadState {
    pub fn new(kind: UploadKind) -> Self {
        Self {
            kind,
            last_file: None,
            progress: None,
            outcome: None,
            in_flight: false,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// 开始上传
    pub fn begin(&mut self, path: PathBuf) -> CoreResult<()> {
        if self.in_flight {
            return Err(CoreError::Busy(format!("{} upload", self.kind.name())));
        }
        self.in_flight = true;
        self.last_file = Some(path);
        self.progress = None;
        self.outcome = None;
        Ok(())
    }

    pub fn on_progress(&mut self, progress: UploadProgress) {
        if self.in_flight {
            self.progress = Some(progress);
        }
    }

    pub fn finish(&mut self, result: Result<(), String>) {
        self.in_flight = false;
        if result.is_ok() {
            self.progress = Some(UploadProgress::Completed);
        }
        self.outcome = Some(result);
    }

    /// 进度百分比
    pub fn percent(&self) -> u16 {
        self.progress.map_or(0, UploadProgress::percent)
    }
}

/// 系统维护页面状态
#[derive(Debug, Clone)]
pub struct MaintenanceState {
    pub firmware: UploadState,
    pub backup: UploadState,
    pub license: UploadState,
}

impl MaintenanceState {
    pub fn new() -> Self {
        Self {
            firmware: UploadState::new(UploadKind::Firmware),
            backup: UploadState::new(UploadKind::Backup),
            license: UploadState::new(UploadKind::License),
        }
    }

    pub fn get(&self, kind: UploadKind) -> &UploadState {
        match kind {
            UploadKind::Firmware => &self.firmware,
            UploadKind::Backup => &self.backup,
            UploadKind::License => &self.license,
        }
    }

    pub fn get_mut(&mut self, kind: UploadKind) -> &mut UploadState {
        match kind {
            UploadKind::Firmware => &mut self.firmware,
            UploadKind::Backup => &mut self.backup,
            UploadKind::License => &mut self.license,
        }
    }
}

impl Default for MaintenanceState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_upload_per_kind() {
        let mut state = MaintenanceState::new();
        state
            .get_mut(UploadKind::Firmware)
            .begin(PathBuf::from("fw.bin"))
            .unwrap();
        assert!(state
            .get_mut(UploadKind::Firmware)
            .begin(PathBuf::from("fw2.bin"))
            .is_err());
        assert!(state
            .get_mut(UploadKind::Backup)
            .begin(PathBuf::from("backup.tar"))
            .is_ok());

        let firmware = state.get_mut(UploadKind::Firmware);
        firmware.on_progress(UploadProgress::Transferred { sent: 5, total: 10 });
        assert_eq!(firmware.percent(), 50);
        firmware.finish(Ok(()));
        assert_eq!(firmware.percent(), 100);
        assert!(!firmware.is_busy());
    }

    #[test]
    fn progress_after_finish_is_ignored() {
        let mut upload = UploadState::new(UploadKind::License);
        upload.begin(PathBuf::from("lic.dat")).unwrap();
        upload.finish(Err("license signature invalid".into()));
        upload.on_progress(UploadProgress::Verifying);
        assert_eq!(upload.progress, None);
        assert!(matches!(upload.outcome, Some(Err(_))));
    }
}
